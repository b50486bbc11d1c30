use core::iter::Rev;
use core::slice::Iter;
use std::fmt;

#[derive(Debug)]
pub struct Stack<T> {
    storage: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { storage: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack { storage: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, item: T) {
        self.storage.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Pop the top two items if at least two items are present. The
    /// items are returned in push order, so the former top of the
    /// stack is the *second* item.
    pub fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.size() < 2 {
            return None;
        }
        let b = self.storage.pop()?;
        let a = self.storage.pop()?;
        Some((a, b))
    }

    pub fn peek(&self) -> Option<&T> {
        self.storage.last()
    }

    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> Rev<Iter<T>> {
        self.storage.iter().rev()
    }
}

impl fmt::Display for Stack<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        write!(f, "")
    }
}
