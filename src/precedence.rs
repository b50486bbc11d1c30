/// Get the binding priority of an operator character. Higher binds
/// tighter. 0 indicates that the character is not an operator, which
/// is also what an open paren on the operator stack reports so that
/// nothing is ever popped past it.
#[rustfmt::skip]
pub fn get_priority(op: char) -> u8 {
    match op {
        '+'             // a + b
        | '-'   => 1,   // a - b

        '*'             // a * b
        | '/'   => 2,   // a / b (integer div)

        _       => 0,   // not an operator
    }
}

/// Return true if the character is one of the four binary operators.
pub fn is_operator(c: char) -> bool {
    get_priority(c) > 0
}
