use std::fmt;

use crate::bindings::BindingErrKind;
use crate::builder::BuildErrKind;
use crate::config::ConfigErrKind;
use crate::evaluator::EvalErrKind;
use crate::validator::ValidationErrKind;

/// Result type used by the top level executor. On success, holds the
/// value the expression evaluated to.
pub type ExeResult = Result<i32, ExeErr>;

#[derive(Clone, Debug, PartialEq)]
pub struct ExeErr {
    pub kind: ExeErrKind,
}

impl ExeErr {
    pub fn new(kind: ExeErrKind) -> Self {
        Self { kind }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use ExeErrKind::*;
        match self.kind {
            InvalidExpression(_) => 1,
            BuildErr(_) => 2,
            EvalErr(_) => 3,
            BindingErr(_) => 4,
            ConfigErr(_) | CouldNotReadInput(_) | ReplErr(_) => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExeErrKind {
    InvalidExpression(ValidationErrKind),
    BuildErr(BuildErrKind),
    EvalErr(EvalErrKind),
    BindingErr(BindingErrKind),
    ConfigErr(ConfigErrKind),
    CouldNotReadInput(String),
    ReplErr(String),
}

impl fmt::Display for ExeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for ExeErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ExeErrKind::*;
        let msg = match self {
            InvalidExpression(kind) => format!("Invalid expression: {kind}"),
            BuildErr(kind) => format!("{kind}"),
            EvalErr(kind) => format!("{kind}"),
            BindingErr(kind) => format!("{kind}"),
            ConfigErr(kind) => format!("Config error: {kind:?}"),
            CouldNotReadInput(msg) => format!("Could not read input: {msg}"),
            ReplErr(msg) => format!("REPL error: {msg}"),
        };
        write!(f, "{msg}")
    }
}
