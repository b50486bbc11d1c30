use crate::bindings::Bindings;
use crate::tree::{Node, NodeKind, Operand, Tree};

use super::result::{EvalErr, EvalErrKind, EvalResult};

/// Evaluate a tree against a set of variable bindings. The tree and
/// the bindings are only read, so evaluating again gives the same
/// result.
pub fn evaluate(tree: &Tree, bindings: &Bindings) -> EvalResult {
    log::trace!("BEGIN: evaluate {tree}");
    let value = evaluate_node(Some(&tree.root), bindings)?;
    log::trace!("END: evaluate = {value}");
    Ok(value)
}

/// Evaluate a (sub)tree. An absent node evaluates to 0.
///
/// Children are evaluated left first, then right, and the first error
/// encountered is returned.
pub fn evaluate_node(node: Option<&Node>, bindings: &Bindings) -> EvalResult {
    let node = match node {
        Some(node) => node,
        None => return Ok(0),
    };
    match &node.kind {
        NodeKind::Operand(Operand::Digit(value)) => Ok(i32::from(*value)),
        NodeKind::Operand(Operand::Var(name)) => match bindings.get(name) {
            Some(value) => Ok(*value),
            None => Err(EvalErr::new(EvalErrKind::UndefinedVariable(*name))),
        },
        NodeKind::BinaryOp(op, left, right) => {
            let a = evaluate_node(Some(left.as_ref()), bindings)?;
            let b = evaluate_node(Some(right.as_ref()), bindings)?;
            apply(*op, a, b)
        }
    }
}

/// Apply a binary operator. Division truncates toward zero.
pub fn apply(op: char, a: i32, b: i32) -> EvalResult {
    let result = match op {
        '+' => a.checked_add(b),
        '-' => a.checked_sub(b),
        '*' => a.checked_mul(b),
        '/' => {
            if b == 0 {
                return Err(EvalErr::new(EvalErrKind::DivisionByZero));
            }
            a.checked_div(b)
        }
        _ => return Err(EvalErr::new(EvalErrKind::InvalidOperator(op))),
    };
    result.ok_or_else(|| EvalErr::new(EvalErrKind::Overflow(op, a, b)))
}
