use crate::precedence::is_operator;
use crate::util::Stack;

use super::result::{ValidationErr, ValidationErrKind, ValidationResult};

/// Return true if the expression contains only legal characters and
/// its parens are balanced and properly nested.
pub fn is_valid(expression: &str) -> bool {
    validate(expression).is_ok()
}

/// Check the expression, reporting the first problem found.
///
/// Legal characters are ASCII letters and digits, the operators
/// `+ - * /`, parens, spaces, and tabs. Only bracket structure is
/// checked here; operand/operator ordering is left to the tree
/// builder.
pub fn validate(expression: &str) -> ValidationResult {
    log::trace!("BEGIN: validate {expression:?}");

    // Holds the columns of currently unclosed open parens.
    let mut stack: Stack<usize> = Stack::new();

    for (i, c) in expression.chars().enumerate() {
        let col = i + 1;
        match c {
            '(' => stack.push(col),
            ')' => {
                if stack.pop().is_none() {
                    return Err(err(ValidationErrKind::UnmatchedClosingBracket(col)));
                }
            }
            c if is_blank(c) || c.is_ascii_alphanumeric() || is_operator(c) => (),
            c => return Err(err(ValidationErrKind::UnknownChar(c, col))),
        }
    }

    if let Some(col) = stack.pop() {
        return Err(err(ValidationErrKind::UnmatchedOpeningBracket(col)));
    }

    log::trace!("END: validate");
    Ok(())
}

/// Whitespace that may separate tokens.
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn err(kind: ValidationErrKind) -> ValidationErr {
    ValidationErr::new(kind)
}
