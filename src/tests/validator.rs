use crate::validator::*;

fn check_err(expression: &str, expected: ValidationErrKind) {
    match validate(expression) {
        Ok(()) => assert!(false, "Expected {expression:?} to be invalid"),
        Err(err) => assert_eq!(err.kind, expected),
    }
    assert!(!is_valid(expression));
}

#[test]
fn valid_expressions() {
    for expression in [
        "1",
        "a",
        "1+2*3",
        "(1+2)*3",
        "((a))",
        "a + b - c * d / e",
        "\t(x-1) * (y+2)\t",
        "",
        "()",
    ] {
        assert!(is_valid(expression), "Expected {expression:?} to be valid");
        assert_eq!(validate(expression), Ok(()));
    }
}

#[test]
fn operator_order_is_not_checked() {
    // Only characters and bracket structure are checked here. These are
    // rejected later by the tree builder.
    assert!(is_valid("1+"));
    assert!(is_valid("+*"));
    assert!(is_valid("12"));
}

#[test]
fn unmatched_closing_bracket() {
    check_err(")", ValidationErrKind::UnmatchedClosingBracket(1));
    check_err("1+2)", ValidationErrKind::UnmatchedClosingBracket(4));
    check_err("(1))(", ValidationErrKind::UnmatchedClosingBracket(4));
}

#[test]
fn unmatched_opening_bracket_reports_innermost() {
    check_err("(", ValidationErrKind::UnmatchedOpeningBracket(1));
    check_err("((1+2)", ValidationErrKind::UnmatchedOpeningBracket(1));
    check_err("(1+(2", ValidationErrKind::UnmatchedOpeningBracket(4));
}

#[test]
fn unknown_characters() {
    check_err("1%2", ValidationErrKind::UnknownChar('%', 2));
    check_err("1^2", ValidationErrKind::UnknownChar('^', 2));
    check_err("a.b", ValidationErrKind::UnknownChar('.', 2));
    check_err("[1]", ValidationErrKind::UnknownChar('[', 1));
    check_err("1\n", ValidationErrKind::UnknownChar('\n', 2));
    check_err("é+1", ValidationErrKind::UnknownChar('é', 1));
}

#[test]
fn first_problem_wins() {
    // The stray ')' comes before the bad character.
    check_err(")%", ValidationErrKind::UnmatchedClosingBracket(1));
    check_err("%)", ValidationErrKind::UnknownChar('%', 1));
}

#[test]
fn every_legal_char_alone_is_valid() {
    let legal = ('a'..='z').chain('A'..='Z').chain('0'..='9').chain("+-*/ \t".chars());
    for c in legal {
        assert!(is_valid(&c.to_string()), "Expected {c:?} to be valid");
    }
}

#[test]
fn every_other_ascii_char_is_invalid() {
    for b in 0u8..128 {
        let c = b as char;
        if c.is_ascii_alphanumeric() || "+-*/() \t".contains(c) {
            continue;
        }
        let expression = format!("1+{c}");
        assert!(!is_valid(&expression), "Expected {expression:?} to be invalid");
    }
}

#[test]
fn display_includes_column() {
    let err = validate("1+2)").unwrap_err();
    assert_eq!(err.to_string(), "Unmatched ')' at column 4");
}
