use std::fmt;

use logos::Logos;

use crate::error::{LexError, LexErrorKind};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Marks the end of the line. Never matched by the scanner; [`Lexer`]
    /// emits it once the input is exhausted.
    EndOfInput,
    /// Runs of newlines only advance the line counter.
    #[regex(r"\n+", |lex| {
        lex.extras.line       += lex.slice().len();
        lex.extras.line_start  = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::EndOfInput => f.write_str("end of input"),
            Self::NewLine => f.write_str("newline"),
            Self::Ignored => f.write_str("whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so that every token can be given a line and column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// A 1-based line and column inside the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number, as counted by the lexer.
    pub line:   usize,
    /// Column, counted in bytes from the start of the line.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token together with where it was found.
pub type Spanned = (Token, Position);

/// Tokens and diagnostics collected from one line of input.
#[derive(Debug)]
pub struct Tokens {
    /// All tokens that were recognized, terminated by [`Token::EndOfInput`].
    pub tokens: Vec<Spanned>,
    /// Every lexical error encountered, in source order.
    pub errors: Vec<LexError>,
    /// The line counter once the whole input has been consumed.
    pub line:   usize,
}

/// Lazy tokenizer over a single line of input.
///
/// The lexer yields `Ok((token, position))` for each token and
/// `Err(LexError)` for every character it cannot recognize. After an error it
/// skips exactly the offending character and keeps going, so callers that
/// want to recover simply keep iterating. Once the input is exhausted a single
/// [`Token::EndOfInput`] is produced and the iterator is finished.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{Lexer, Token};
///
/// let kinds: Vec<Token> = Lexer::new("1 + 2", 1).filter_map(Result::ok)
///                                               .map(|(token, _)| token)
///                                               .collect();
/// assert_eq!(kinds,
///            vec![Token::Number(1), Token::Plus, Token::Number(2), Token::EndOfInput]);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`, numbering its first line `line`.
    #[must_use]
    pub fn new(source: &'src str, line: usize) -> Self {
        let inner = Token::lexer_with_extras(source, LexerExtras { line,
                                                                   line_start: 0 });
        Self { inner,
               finished: false }
    }

    /// The current value of the line counter.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Drains the lexer, separating tokens from diagnostics.
    #[must_use]
    pub fn tokenize(mut self) -> Tokens {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        for item in self.by_ref() {
            match item {
                Ok(spanned) => tokens.push(spanned),
                Err(e) => errors.push(e),
            }
        }

        Tokens { tokens,
                 errors,
                 line: self.line() }
    }

    fn position_at(&self, offset: usize) -> Position {
        let extras = &self.inner.extras;
        Position { line:   extras.line,
                   column: offset.saturating_sub(extras.line_start) + 1, }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(token)) => {
                let position = self.position_at(self.inner.span().start);
                log::trace!("token {token:?} at {position}");
                Some(Ok((token, position)))
            },
            Some(Err(kind)) => {
                let position = self.position_at(self.inner.span().start);
                let slice = self.inner.slice();
                let error = match kind {
                    LexErrorKind::IllegalCharacter => {
                        LexError::IllegalCharacter { character: slice.chars().next().unwrap_or('\0'),
                                                     position }
                    },
                    LexErrorKind::LiteralTooLarge => {
                        LexError::LiteralTooLarge { literal: slice.to_string(),
                                                    position }
                    },
                };
                log::trace!("lex error: {error}");
                Some(Err(error))
            },
            None => {
                self.finished = true;
                let position = self.position_at(self.inner.source().len());
                Some(Ok((Token::EndOfInput, position)))
            },
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns `LexErrorKind::LiteralTooLarge` if the digits do not fit in an
/// `i64`.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::LiteralTooLarge)
}
