//! Expression tree.
//!
//! Every operator node owns exactly two children. Nothing is shared,
//! so dropping the root drops the whole tree.
use std::fmt;

#[derive(PartialEq)]
pub struct Tree {
    pub root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Length of the longest root-to-leaf path, counting nodes. A
    /// single leaf has depth 1.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Walk the tree in post-order, which reproduces the postfix string
    /// the tree was built from.
    pub fn to_postfix(&self) -> String {
        let mut out = String::with_capacity(self.len());
        self.root.write_postfix(&mut out);
        out
    }

    /// Multi-line rendering, one node per line, children indented
    /// under their parent (left child first).
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.root.write_rendered(&mut out, 0);
        out
    }
}

/// Fully parenthesized infix form, e.g. `((1+2)*3)`.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree({:?})", self.root)
    }
}

// Node ----------------------------------------------------------------

#[derive(PartialEq)]
pub struct Node {
    pub kind: NodeKind,
}

#[derive(Debug, PartialEq)]
pub enum NodeKind {
    Operand(Operand),
    /// Operator char, left, right. The char is whatever appeared in
    /// the postfix input; it is not checked until evaluation.
    BinaryOp(char, Box<Node>, Box<Node>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// Value of a single decimal digit, 0 through 9.
    Digit(u8),
    Var(char),
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind }
    }

    pub fn new_digit(value: u8) -> Self {
        Self::new(NodeKind::Operand(Operand::Digit(value)))
    }

    pub fn new_var(name: char) -> Self {
        Self::new(NodeKind::Operand(Operand::Var(name)))
    }

    /// Create a leaf from an ASCII digit or letter.
    pub fn new_operand(c: char) -> Option<Self> {
        if let Some(value) = c.to_digit(10) {
            Some(Self::new_digit(value as u8))
        } else if c.is_ascii_alphabetic() {
            Some(Self::new_var(c))
        } else {
            None
        }
    }

    pub fn new_binary_op(op: char, left: Node, right: Node) -> Self {
        Self::new(NodeKind::BinaryOp(op, Box::new(left), Box::new(right)))
    }

    fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Operand(_) => 1,
            NodeKind::BinaryOp(_, left, right) => 1 + left.len() + right.len(),
        }
    }

    fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Operand(_) => 1,
            NodeKind::BinaryOp(_, left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    fn write_postfix(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Operand(operand) => out.push(operand.as_char()),
            NodeKind::BinaryOp(op, left, right) => {
                left.write_postfix(out);
                right.write_postfix(out);
                out.push(*op);
            }
        }
    }

    fn write_rendered(&self, out: &mut String, level: usize) {
        let indent = "    ".repeat(level);
        match &self.kind {
            NodeKind::Operand(operand) => {
                out.push_str(&format!("{indent}{}\n", operand.as_char()));
            }
            NodeKind::BinaryOp(op, left, right) => {
                out.push_str(&format!("{indent}{op}\n"));
                left.write_rendered(out, level + 1);
                right.write_rendered(out, level + 1);
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Operand(operand) => write!(f, "{operand}"),
            NodeKind::BinaryOp(op, left, right) => write!(f, "({left}{op}{right})"),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Operand(operand) => write!(f, "{operand}"),
            NodeKind::BinaryOp(op, left, right) => {
                write!(f, "{op}({left:?}, {right:?})")
            }
        }
    }
}

// Operand -------------------------------------------------------------

impl Operand {
    /// The source character this operand was read from.
    pub fn as_char(&self) -> char {
        match self {
            Self::Digit(value) => char::from(b'0' + value),
            Self::Var(name) => *name,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
