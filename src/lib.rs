//! # linecalc
//!
//! linecalc is a line-oriented arithmetic calculator written in Rust.
//! Each line of input holds one expression over integer literals with the
//! operators `+ - * /` and parentheses. The line is lexed, parsed into an
//! expression tree and evaluated.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{CalcError, LexError, ParseError},
    interpreter::{
        evaluator::core::eval, lexer::Lexer, parser::core::parse_line, value::core::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an arithmetic expression as a tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines literal and binary operation nodes.
/// - Defines operator precedence.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column information for context.
/// - Implements the standard error traits so errors can be boxed or chained.
pub mod error;
/// Orchestrates the lexer, parser, evaluator and value types.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Everything produced by evaluating one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    /// Lexical errors, in source order. The lexer skips over each of them,
    /// so they may be present even when `outcome` holds a value.
    pub diagnostics: Vec<LexError>,
    /// The value of the line, or the error that prevented computing it.
    pub outcome:     Result<Value, CalcError>,
}

impl LineReport {
    /// Returns `true` if the line produced a value.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The text to print on standard output: the value, if there is one.
    #[must_use]
    pub fn output(&self) -> Option<String> {
        self.outcome.as_ref().ok().map(ToString::to_string)
    }

    /// The messages to print on standard error, one per line.
    ///
    /// Every lexical diagnostic is listed first. A syntax error follows as the
    /// generic [`ParseError::GENERIC_MESSAGE`] unless `verbose` is set, in
    /// which case its kind and position are shown. Runtime errors are always
    /// shown in full.
    #[must_use]
    pub fn messages(&self, verbose: bool) -> Vec<String> {
        let mut messages: Vec<String> = self.diagnostics.iter().map(ToString::to_string).collect();
        match &self.outcome {
            Ok(_) => {},
            Err(CalcError::Syntax(_)) if !verbose => {
                messages.push(ParseError::GENERIC_MESSAGE.to_string());
            },
            Err(e) => messages.push(e.to_string()),
        }
        messages
    }
}

/// A calculator session.
///
/// The session evaluates one line at a time. The only state it keeps between
/// lines is the line counter, which is used to locate diagnostics.
///
/// # Example
/// ```
/// use linecalc::{Calculator, interpreter::value::core::Value};
///
/// let mut calculator = Calculator::new();
/// assert_eq!(calculator.evaluate_line("2 + 3 * 4").outcome, Ok(Value::Integer(14)));
/// assert_eq!(calculator.evaluate_line("7 / 2").outcome, Ok(Value::Real(3.5)));
/// assert_eq!(calculator.line(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    line: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a session whose first line is line 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { line: 1 }
    }

    /// The number the next evaluated line will carry in diagnostics.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Counts a line that the caller chose not to evaluate, such as a blank
    /// one, so later diagnostics keep matching the input.
    pub const fn skip_line(&mut self) {
        self.line += 1;
    }

    /// Accepts one raw line as read from the input, line terminator included.
    ///
    /// Blank lines are counted but not evaluated and yield `None`; any other
    /// line is stripped of its terminator and evaluated.
    ///
    /// # Example
    /// ```
    /// use linecalc::Calculator;
    ///
    /// let mut calculator = Calculator::new();
    /// assert!(calculator.feed(" \t\r\n").is_none());
    /// assert_eq!(calculator.feed("1 + 1\n").and_then(|r| r.output()), Some("2".to_string()));
    /// assert_eq!(calculator.line(), 3);
    /// ```
    pub fn feed(&mut self, raw: &str) -> Option<LineReport> {
        let line = raw.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            self.skip_line();
            return None;
        }
        Some(self.evaluate_line(line))
    }

    /// Lexes, parses and evaluates one line of input.
    ///
    /// Illegal characters are collected as diagnostics and the remaining
    /// tokens are still parsed. The line counter advances by one, plus one
    /// for every newline inside `source`.
    pub fn evaluate_line(&mut self, source: &str) -> LineReport {
        let lexed = Lexer::new(source, self.line).tokenize();
        self.line = lexed.line + 1;

        log::debug!("tokens: {:?}", lexed.tokens);

        let outcome = match parse_line(&mut lexed.tokens.iter().peekable()) {
            Ok(expr) => {
                log::debug!("tree: {expr}");
                eval(&expr).map_err(CalcError::from)
            },
            Err(e) => Err(e.into()),
        };

        LineReport { diagnostics: lexed.errors,
                     outcome }
    }
}

/// Returns the value of a single expression.
///
/// This is a one-shot convenience over [`Calculator::evaluate_line`] that
/// discards lexical diagnostics.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use linecalc::{get_result, interpreter::value::core::Value};
///
/// assert_eq!(get_result("8 - 3 - 2").unwrap(), Value::Integer(3));
/// assert!(get_result("(1 + 2").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, CalcError> {
    Calculator::new().evaluate_line(source).outcome
}
