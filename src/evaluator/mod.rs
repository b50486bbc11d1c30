pub use evaluator::{apply, evaluate, evaluate_node};
pub use result::{EvalErr, EvalErrKind, EvalResult};

mod evaluator;
mod result;
