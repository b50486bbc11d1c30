use std::fmt;

use crate::tree::Tree;

pub type BuildResult = Result<Tree, BuildErr>;

#[derive(Clone, Debug, PartialEq)]
pub struct BuildErr {
    pub kind: BuildErrKind,
}

impl BuildErr {
    pub fn new(kind: BuildErrKind) -> Self {
        Self { kind }
    }

    pub fn missing_operands(op: char, col: usize) -> Self {
        Self::new(BuildErrKind::MalformedPostfix(Malformed::MissingOperands(op, col)))
    }

    pub fn leftover_values(count: usize) -> Self {
        Self::new(BuildErrKind::MalformedPostfix(Malformed::LeftoverValues(count)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BuildErrKind {
    MalformedPostfix(Malformed),
}

/// Why a postfix string could not be turned into a tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Malformed {
    /// Operator, 1-based column. Fewer than two values were available.
    MissingOperands(char, usize),
    /// Number of values left on the stack at the end, which is anything
    /// other than one (zero for empty input).
    LeftoverValues(usize),
}

impl fmt::Display for BuildErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for BuildErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPostfix(reason) => write!(f, "Malformed postfix expression: {reason}"),
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperands(op, col) => {
                write!(f, "operator {op:?} at column {col} needs two operands")
            }
            Self::LeftoverValues(0) => write!(f, "no operands"),
            Self::LeftoverValues(n) => write!(f, "{n} values left over, expected 1"),
        }
    }
}
