use std::fmt;

pub type EvalResult = Result<i32, EvalErr>;

#[derive(Clone, Debug, PartialEq)]
pub struct EvalErr {
    pub kind: EvalErrKind,
}

impl EvalErr {
    pub fn new(kind: EvalErrKind) -> Self {
        Self { kind }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrKind {
    UndefinedVariable(char),
    DivisionByZero,
    InvalidOperator(char),
    /// Operator, left value, right value.
    Overflow(char, i32, i32),
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for EvalErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EvalErrKind::*;
        match self {
            UndefinedVariable(name) => write!(f, "Undefined variable: {name}"),
            DivisionByZero => write!(f, "Division by zero"),
            InvalidOperator(op) => write!(f, "Invalid operator: {op:?}"),
            Overflow(op, a, b) => write!(f, "Integer overflow: {a} {op} {b}"),
        }
    }
}
