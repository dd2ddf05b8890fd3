use std::fs;

use numeval::{
    error::{ParseError, RuntimeError},
    evaluate_expression,
    history::History,
    pipeline::{evaluator::evaluate, parser::parse, tokenizer::tokenize},
    token::{Operator, Token},
};

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => {
            assert_eq!(value, expected, "Expression '{src}' produced the wrong value");
        },
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_fails(src: &str) {
    if evaluate_expression(src).is_ok() {
        panic!("Expression '{src}' succeeded but was expected to fail")
    }
}

fn num(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1 + 2", 3.0);
    assert_evaluates("7 * 9", 63.0);
    assert_evaluates("8 - 5", 3.0);
    assert_evaluates("10 / 2", 5.0);
    assert_evaluates("7 % 3", 1.0);
    assert_evaluates("2 ^ 10", 1024.0);
}

#[test]
fn precedence_follows_standard_rules() {
    assert_evaluates("3 + 4 * 2", 11.0);
    assert_evaluates("1 + 2 * 3 - 4 / 2", 5.0);
    assert_evaluates("10 % 4 + 7 * 2", 16.0);
    assert_evaluates("2 * 3 ^ 2", 18.0);
}

#[test]
fn equal_precedence_groups_left() {
    assert_evaluates("10 - 3 - 2", 5.0);
    assert_evaluates("100 / 10 / 5", 2.0);
    // The tie-break pops on equal precedence, so `^` groups left as well:
    // (2 ^ 3) ^ 2, not 2 ^ (3 ^ 2).
    assert_evaluates("2 ^ 3 ^ 2", 64.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("(4 + 5) / 2", 4.5);
    assert_evaluates("(1 + 2) * (3 + 4)", 21.0);
    assert_evaluates("2 * (3 + 4) ^ 2", 98.0);
}

#[test]
fn unary_negation_is_recognized_from_context() {
    assert_evaluates("-5 + 3", -2.0);
    assert_evaluates("3 - -5", 8.0);
    assert_evaluates("-(2 + 3)", -5.0);
    assert_evaluates("2 ^ -1", 0.5);
    // Negation binds above `^`, so this squares the negated base.
    assert_evaluates("-2 ^ 2", 4.0);
}

#[test]
fn unary_plus_is_dropped() {
    assert_evaluates("+5", 5.0);
    assert_evaluates("3 * +2", 6.0);
}

#[test]
fn modulo_keeps_the_dividend_sign() {
    assert_evaluates("-7 % 3", -1.0);
    assert_evaluates("7 % -3", 1.0);
    assert_evaluates("7.5 % 2", 1.5);
}

#[test]
fn fractional_literals_and_exponents() {
    assert_evaluates(".5 * 8", 4.0);
    assert_evaluates("2.5 + 2.5", 5.0);
    assert_evaluates("2 ^ 0.5", 2.0_f64.powf(0.5));
}

#[test]
fn tokenizer_produces_positioned_tokens() {
    let tokens = tokenize("3 + 4 * 2").unwrap();

    assert_eq!(tokens,
               vec![(num("3"), 0),
                    (Token::Operator(Operator::Add), 2),
                    (num("4"), 4),
                    (Token::Operator(Operator::Mul), 6),
                    (num("2"), 8)]);
}

#[test]
fn parser_emits_postfix_order() {
    let tokens = tokenize("3 + 4 * 2").unwrap();
    let postfix: Vec<Token> = parse(&tokens).unwrap().into_iter().map(|(token, _)| token).collect();

    assert_eq!(postfix,
               vec![num("3"),
                    num("4"),
                    num("2"),
                    Token::Operator(Operator::Mul),
                    Token::Operator(Operator::Add)]);
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    assert_fails("5 / 0");
    assert_fails("5 % 0");
    assert_fails("1 / (2 - 2)");
}

#[test]
fn insufficient_operands_are_errors() {
    assert_fails("3 + ");
    assert_fails("*");
    // The first negation is popped ahead of the second by the equal-precedence
    // tie-break, leaving it without an operand.
    assert_fails("--5");
}

#[test]
fn unmatched_parentheses_are_errors() {
    assert_fails("(3 + 4");
    assert_fails("3 + 4)");
    assert_fails("((1 + 2)");
}

#[test]
fn malformed_input_is_an_error() {
    assert_fails("3 @ 4");
    assert_fails("1.2.3");
    assert_fails(".");
    assert_fails("3 4");
    assert_fails("()");
    assert_fails("");
    assert_fails("   ");
}

#[test]
fn error_kinds_are_branchable() {
    let err = evaluate_expression("3 @ 4").unwrap_err();
    let parse_err = err.downcast_ref::<ParseError>().expect("expected a parse error");
    assert!(matches!(parse_err,
                     ParseError::InvalidCharacter { found, position: 2 } if found.as_str() == "@"));

    let err = evaluate_expression("5 / 0").unwrap_err();
    let runtime_err = err.downcast_ref::<RuntimeError>().expect("expected a runtime error");
    assert!(matches!(runtime_err, RuntimeError::DivisionByZero { position: 2 }));

    let err = evaluate_expression("(3 + 4").unwrap_err();
    let parse_err = err.downcast_ref::<ParseError>().expect("expected a parse error");
    assert!(matches!(parse_err, ParseError::UnmatchedOpenParen { position: 0 }));

    let err = evaluate_expression("3 + ").unwrap_err();
    let runtime_err = err.downcast_ref::<RuntimeError>().expect("expected a runtime error");
    assert!(matches!(runtime_err,
                     RuntimeError::InsufficientOperands { operator: Operator::Add, .. }));
}

#[test]
fn stray_parenthesis_in_postfix_is_an_error() {
    // The parser never emits parentheses; this guards hand-built sequences.
    let sequence = vec![(Token::OpenParen, 0)];

    assert!(matches!(evaluate(&sequence),
                     Err(RuntimeError::UnexpectedParenthesis { position: 0 })));
}

#[test]
fn evaluation_is_idempotent() {
    for _ in 0..3 {
        assert_evaluates("3 + 4 * 2", 11.0);
        assert_fails("5 / 0");
    }
}

#[test]
fn history_records_pairs_in_arrival_order() {
    let mut history = History::new();
    assert!(history.is_empty());

    for expression in ["1 + 1", "5 / 0", "2 ^ 10"] {
        let outcome = evaluate_expression(expression);
        history.record_outcome(expression, &outcome);
    }

    assert_eq!(history.len(), 3);

    let entries = history.entries();
    assert_eq!(entries[0].expression, "1 + 1");
    assert_eq!(entries[0].outcome, "2");
    assert_eq!(entries[1].expression, "5 / 0");
    assert!(entries[1].outcome.contains("Division by zero"));
    assert_eq!(entries[2].outcome, "1024");
}

#[test]
fn smoke_corpus_evaluates_clean() {
    let corpus = fs::read_to_string("tests/smoke.calc").expect("missing file");
    let mut count = 0;

    for line in corpus.lines().map(str::trim).filter(|line| !line.is_empty()) {
        count += 1;
        if let Err(e) = evaluate_expression(line) {
            panic!("Expression '{line}' failed: {e}");
        }
    }

    assert!(count > 0, "No expressions found in tests/smoke.calc");
}
