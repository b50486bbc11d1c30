use crate::tree::{Node, Tree};
use crate::util::Stack;

use super::result::{BuildErr, BuildResult};

/// Build an expression tree from a postfix string.
///
/// ASCII letters and digits become leaves. Every other character is
/// taken to be a binary operator: the value popped first becomes its
/// *right* child and the value popped second its *left* child, which
/// keeps `-` and `/` in source order. Operator characters are not
/// checked here (see [`crate::evaluator::evaluate`]).
///
/// On error, any partially built subtrees are dropped with the stack.
pub fn build_tree(postfix: &str) -> BuildResult {
    log::trace!("BEGIN: build tree from {postfix:?}");

    let mut stack: Stack<Node> = Stack::with_capacity(postfix.len());

    for (i, c) in postfix.chars().enumerate() {
        if let Some(leaf) = Node::new_operand(c) {
            stack.push(leaf);
        } else {
            let (left, right) = match stack.pop_pair() {
                Some(pair) => pair,
                None => return Err(BuildErr::missing_operands(c, i + 1)),
            };
            stack.push(Node::new_binary_op(c, left, right));
        }
    }

    if stack.size() != 1 {
        return Err(BuildErr::leftover_values(stack.size()));
    }

    match stack.pop() {
        Some(root) => {
            let tree = Tree::new(root);
            log::trace!("END: build tree: {tree:?}");
            Ok(tree)
        }
        None => Err(BuildErr::leftover_values(0)),
    }
}
