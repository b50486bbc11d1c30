use std::fmt;

pub type ValidationResult = Result<(), ValidationErr>;

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationErr {
    pub kind: ValidationErrKind,
}

impl ValidationErr {
    pub fn new(kind: ValidationErrKind) -> Self {
        Self { kind }
    }
}

/// Columns are 1-based character offsets into the expression.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationErrKind {
    UnknownChar(char, usize),
    UnmatchedOpeningBracket(usize),
    UnmatchedClosingBracket(usize),
}

impl fmt::Display for ValidationErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for ValidationErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ValidationErrKind::*;
        match self {
            UnknownChar(c, col) => write!(f, "Unexpected character {c:?} at column {col}"),
            UnmatchedOpeningBracket(col) => {
                write!(f, "Unclosed '(' at column {col}")
            }
            UnmatchedClosingBracket(col) => {
                write!(f, "Unmatched ')' at column {col}")
            }
        }
    }
}
