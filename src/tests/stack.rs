use crate::util::Stack;

#[test]
fn new_stack_is_empty() {
    let stack: Stack<usize> = Stack::new();
    assert_eq!(stack.size(), 0);
}

#[test]
fn push() {
    let mut stack: Stack<usize> = Stack::new();
    assert_eq!(stack.size(), 0);
    stack.push(0);
    assert_eq!(stack.size(), 1);
}

#[test]
fn pop_empty() {
    let mut stack: Stack<usize> = Stack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.size(), 0);
}

#[test]
fn pop() {
    let mut stack: Stack<usize> = Stack::new();
    stack.push(1);
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.size(), 0);
}

#[test]
fn peek() {
    let mut stack: Stack<usize> = Stack::new();
    assert_eq!(stack.peek(), None);
    stack.push(1);
    assert_eq!(stack.peek(), Some(&1));
    assert_eq!(stack.size(), 1);
}

#[test]
fn pop_pair_returns_items_in_push_order() {
    let mut stack: Stack<usize> = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.pop_pair(), Some((2, 3)));
    assert_eq!(stack.size(), 1);
}

#[test]
fn pop_pair_with_one_item_leaves_stack_alone() {
    let mut stack: Stack<usize> = Stack::new();
    stack.push(1);
    assert_eq!(stack.pop_pair(), None);
    assert_eq!(stack.size(), 1);
}

#[test]
fn display_char_stack_top_first() {
    let mut stack: Stack<char> = Stack::new();
    stack.push('(');
    stack.push('+');
    stack.push('*');
    assert_eq!(stack.to_string(), "*+(");
}
