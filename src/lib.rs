//! Infix expression evaluation via postfix and an expression tree.
//!
//! The pipeline:
//!
//! ```text
//! "(1+2)*3" -> validate -> "12+3*" -> build tree -> evaluate -> 9
//! ```
//!
//! Operands are single characters: a digit is its own value and a
//! letter is a variable looked up in the supplied bindings. Operators
//! are `+ - * /` with the usual priorities; all are left-associative.
pub mod bindings;
pub mod builder;
pub mod cli;
pub mod config;
pub mod converter;
pub mod evaluator;
pub mod exe;
pub mod precedence;
pub mod repl;
pub mod result;
pub mod tree;
pub mod validator;

mod util;

pub use bindings::Bindings;
pub use builder::build_tree;
pub use converter::to_postfix;
pub use evaluator::evaluate;
pub use tree::Tree;
pub use validator::is_valid;

#[cfg(test)]
mod tests;
