use linecalc::{
    Calculator, LineReport,
    error::{CalcError, LexError, ParseError, RuntimeError},
    get_result,
    interpreter::{
        lexer::{Position, Token},
        parser::core::MAX_NESTING,
        value::core::Value,
    },
};

fn evaluate(src: &str) -> LineReport {
    Calculator::new().evaluate_line(src)
}

fn assert_value(src: &str, expected: Value) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_syntax_error(src: &str) -> ParseError {
    match get_result(src) {
        Err(CalcError::Syntax(e)) => e,
        other => panic!("Expected a syntax error for {src:?}, got {other:?}"),
    }
}

const fn at(line: usize, column: usize) -> Position {
    Position { line, column }
}

#[test]
fn basic_arithmetic() {
    for (a, b) in [(0_u32, 1_u32), (1, 1), (7, 3), (12, 30), (100, 7), (65_535, 2)] {
        let (x, y) = (i64::from(a), i64::from(b));
        assert_value(&format!("{a} + {b}"), Value::Integer(x + y));
        assert_value(&format!("{a} - {b}"), Value::Integer(x - y));
        assert_value(&format!("{a} * {b}"), Value::Integer(x * y));
        assert_value(&format!("{a} / {b}"), Value::Real(f64::from(a) / f64::from(b)));
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2 + 3 * 4", Value::Integer(14));
    assert_value("2 * 3 + 4", Value::Integer(10));
    assert_value("10 - 6 / 2", Value::Real(7.0));
}

#[test]
fn operators_are_left_associative() {
    assert_value("8 - 3 - 2", Value::Integer(3));
    assert_value("100 / 10 / 5", Value::Real(2.0));
    assert_value("7 / 2 * 2", Value::Real(7.0));
}

#[test]
fn grouping_overrides_precedence() {
    assert_value("(2 + 3) * 4", Value::Integer(20));
    assert_value("((1 + 2)) * 3", Value::Integer(9));
    assert_value("((((((1))))))", Value::Integer(1));
    assert_value("8 - (3 - 2)", Value::Integer(7));
}

#[test]
fn division_is_always_real() {
    assert_value("8 / 2", Value::Real(4.0));
    assert_value("7 / 2", Value::Real(3.5));
    assert_value("1 / 4 + 1", Value::Real(1.25));
}

#[test]
fn whitespace_is_ignored() {
    assert_value("2\t*\t3", Value::Integer(6));
    assert_value("   12+30   ", Value::Integer(42));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(get_result("5 / 0"),
               Err(CalcError::Runtime(RuntimeError::DivisionByZero { position: at(1, 3) })));
    assert!(matches!(get_result("1 / (2 - 2)"),
                     Err(CalcError::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert!(matches!(get_result("1 / (0 / 5)"),
                     Err(CalcError::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(get_result("9223372036854775807 + 1"),
                     Err(CalcError::Runtime(RuntimeError::Overflow { .. }))));
    assert!(matches!(get_result("0 - 9223372036854775807 - 2"),
                     Err(CalcError::Runtime(RuntimeError::Overflow { .. }))));
    assert!(matches!(get_result("4294967296 * 4294967296"),
                     Err(CalcError::Runtime(RuntimeError::Overflow { .. }))));
}

#[test]
fn inexact_division_operand_is_error() {
    assert!(matches!(get_result("9007199254740993 / 1"),
                     Err(CalcError::Runtime(RuntimeError::PrecisionLoss { .. }))));
    assert_value("9007199254740991 / 1", Value::Real(9_007_199_254_740_991.0));
}

#[test]
fn empty_input_is_syntax_error() {
    assert_eq!(assert_syntax_error(""),
               ParseError::UnexpectedEndOfInput { position: at(1, 1) });
    assert_eq!(assert_syntax_error("   "),
               ParseError::UnexpectedEndOfInput { position: at(1, 4) });
}

#[test]
fn unmatched_parentheses_are_syntax_errors() {
    assert_eq!(assert_syntax_error("(1 + 2"),
               ParseError::ExpectedClosingParen { position: at(1, 1) });
    assert_eq!(assert_syntax_error("1 + 2)"),
               ParseError::UnexpectedTrailingTokens { token:    Token::RParen,
                                                      position: at(1, 6), });
    assert!(matches!(assert_syntax_error("((1)"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(assert_syntax_error("()"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn missing_operands_are_syntax_errors() {
    assert_eq!(assert_syntax_error("1 +"),
               ParseError::UnexpectedEndOfInput { position: at(1, 4) });
    assert!(matches!(assert_syntax_error("* 3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_syntax_error("1 * / 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_syntax_error("-1"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn illegal_character_then_syntax_error() {
    let report = evaluate("2 & 3");
    assert_eq!(report.diagnostics,
               vec![LexError::IllegalCharacter { character: '&',
                                                 position:  at(1, 3), }]);
    assert!(matches!(report.outcome,
                     Err(CalcError::Syntax(ParseError::UnexpectedTrailingTokens { .. }))));

    let report = evaluate("2 + @ + 3");
    assert_eq!(report.diagnostics.len(), 1);
    assert!(matches!(report.outcome, Err(CalcError::Syntax(_))));
}

#[test]
fn illegal_characters_are_skipped_one_at_a_time() {
    let report = evaluate("2 @+ 3");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.outcome, Ok(Value::Integer(5)));

    let report = evaluate("1 $$ + x2");
    let characters: Vec<char> = report.diagnostics
                                      .iter()
                                      .filter_map(|d| match d {
                                          LexError::IllegalCharacter { character, .. } => {
                                              Some(*character)
                                          },
                                          LexError::LiteralTooLarge { .. } => None,
                                      })
                                      .collect();
    assert_eq!(characters, vec!['$', '$', 'x']);
    assert_eq!(report.outcome, Ok(Value::Integer(3)));
}

#[test]
fn oversized_literal_is_reported_and_skipped() {
    let report = evaluate("99999999999999999999 + 1");
    assert!(matches!(report.diagnostics.as_slice(),
                     [LexError::LiteralTooLarge { .. }]));
    assert!(matches!(report.outcome, Err(CalcError::Syntax(_))));
}

#[test]
fn line_counter_advances_per_line() {
    let mut calculator = Calculator::new();

    assert_eq!(calculator.evaluate_line("1 + 1").outcome, Ok(Value::Integer(2)));
    calculator.skip_line();
    let report = calculator.evaluate_line("3 # 4");
    assert_eq!(report.diagnostics[0].position(), at(3, 3));
    assert_eq!(calculator.line(), 4);

    let report = calculator.evaluate_line("1 +\n  ? 2");
    assert_eq!(report.diagnostics[0].position(), at(5, 3));
    assert_eq!(report.outcome, Ok(Value::Integer(3)));
    assert_eq!(calculator.line(), 6);
}

#[test]
fn values_render_like_the_repl() {
    assert_eq!(get_result("2 + 3 * 4").unwrap().to_string(), "14");
    assert_eq!(get_result("8 / 2").unwrap().to_string(), "4.0");
    assert_eq!(get_result("5 / 2").unwrap().to_string(), "2.5");
    assert_eq!(get_result("0 - 3 / 1").unwrap().to_string(), "-3.0");
}

#[test]
fn errors_render_with_position() {
    assert_eq!(get_result("5 / 0").unwrap_err().to_string(),
               "Error at line 1, column 3: Division by zero.");
    assert_eq!(evaluate("2 & 3").diagnostics[0].to_string(),
               "Illegal character '&' at line 1, column 3.");
    assert_eq!(ParseError::GENERIC_MESSAGE, "Syntax error in input!");
}

#[test]
fn deep_parentheses_are_syntax_error() {
    let src = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
    assert_eq!(assert_syntax_error(&src),
               ParseError::NestingTooDeep { position: at(1, MAX_NESTING + 1) });

    assert!(matches!(assert_syntax_error(&"1 + (".repeat(20_000)),
                     ParseError::NestingTooDeep { .. }));
}

#[test]
fn parentheses_up_to_the_limit_are_accepted() {
    let src = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_value(&src, Value::Integer(1));
}

#[test]
fn long_operator_chains_are_bounded() {
    let src = vec!["1"; 10_000].join(" + ");
    assert!(matches!(assert_syntax_error(&src), ParseError::NestingTooDeep { .. }));

    let src = vec!["1"; MAX_NESTING].join(" + ");
    assert_value(&src, Value::Integer(i64::try_from(MAX_NESTING).unwrap()));
}

#[test]
fn session_survives_too_deep_input() {
    let mut calculator = Calculator::new();
    let report = calculator.evaluate_line(&"(".repeat(1_000));
    assert!(matches!(report.outcome,
                     Err(CalcError::Syntax(ParseError::NestingTooDeep { .. }))));
    assert_eq!(calculator.evaluate_line("2 * 21").outcome, Ok(Value::Integer(42)));
}

#[test]
fn blank_lines_are_counted_but_not_evaluated() {
    let mut calculator = Calculator::new();
    assert!(calculator.feed("\n").is_none());
    assert!(calculator.feed("  \t\r\n").is_none());

    let report = calculator.feed("1 & 2\r\n").unwrap();
    assert_eq!(report.diagnostics[0].position(), at(3, 3));
    assert_eq!(calculator.feed("4 / 2\n").unwrap().output(),
               Some("2.0".to_string()));
    assert_eq!(calculator.line(), 5);
}

#[test]
fn syntax_errors_render_generic_unless_verbose() {
    let report = evaluate("2 & 3");
    assert!(!report.succeeded());
    assert_eq!(report.output(), None);
    assert_eq!(report.messages(false),
               vec!["Illegal character '&' at line 1, column 3.".to_string(),
                    "Syntax error in input!".to_string()]);
    assert_eq!(report.messages(true)[1],
               "Syntax error at line 1, column 5: Extra tokens after expression, starting with '3'.");
}

#[test]
fn successful_and_failed_lines_render_their_outcome() {
    let report = evaluate("2 @+ 3");
    assert!(report.succeeded());
    assert_eq!(report.output(), Some("5".to_string()));
    assert_eq!(report.messages(false).len(), 1);

    let report = evaluate("5 / 0");
    assert!(!report.succeeded());
    assert_eq!(report.output(), None);
    assert_eq!(report.messages(false),
               vec!["Error at line 1, column 3: Division by zero.".to_string()]);
}
