//! Infix to postfix conversion (shunting-yard).
use crate::precedence::get_priority;
use crate::util::Stack;

/// Convert a validated infix expression to postfix.
///
/// All operators are left-associative: an incoming operator first pops
/// every stacked operator of greater *or equal* priority. The input is
/// assumed to have passed [`crate::validator::validate`]; garbage in
/// gives garbage out. In particular, a `)` with no matching `(` simply
/// drains the operator stack.
pub fn to_postfix(expression: &str) -> String {
    log::trace!("BEGIN: convert {expression:?} to postfix");

    let mut stack: Stack<char> = Stack::new();
    let mut postfix = String::with_capacity(expression.len());

    for c in expression.chars() {
        if c.is_whitespace() {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            postfix.push(c);
        } else if c == '(' {
            stack.push(c);
        } else if c == ')' {
            while let Some(top) = stack.pop() {
                if top == '(' {
                    break;
                }
                postfix.push(top);
            }
        } else {
            let priority = get_priority(c);
            while let Some(&top) = stack.peek() {
                if get_priority(top) < priority {
                    break;
                }
                postfix.push(top);
                stack.pop();
            }
            stack.push(c);
        }
        log::trace!("{c} -> {postfix} | {stack}");
    }

    while let Some(op) = stack.pop() {
        postfix.push(op);
    }

    log::trace!("END: convert to postfix: {postfix:?}");
    postfix
}
