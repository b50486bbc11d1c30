pub(crate) use stack::Stack;

mod stack;
