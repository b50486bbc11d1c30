//! Variable bindings and the `<letter>=<integer>` assignment syntax used
//! to supply them.
use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Variable name -> value. Insertion order is kept so bindings can be
/// shown back to the user in the order they were entered.
pub type Bindings = IndexMap<char, i32>;

static ASSIGNMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z])\s*=\s*([+-]?[0-9]+)\s*$")
        .expect("assignment regex should compile")
});

/// Parse a single assignment line such as `a=5` or `b = -3`.
pub fn parse_assignment(line: &str) -> Result<(char, i32), BindingErr> {
    let captures = match ASSIGNMENT_RE.captures(line) {
        Some(captures) => captures,
        None => {
            return Err(BindingErr::new(BindingErrKind::InvalidAssignment(
                line.to_owned(),
            )))
        }
    };

    // Both groups are mandatory, so they're always present on a match.
    let name = captures[1].chars().next().unwrap_or_default();
    let digits = &captures[2];

    match digits.parse::<i32>() {
        Ok(value) => Ok((name, value)),
        Err(_) => Err(BindingErr::new(BindingErrKind::ValueOutOfRange(
            name,
            digits.to_owned(),
        ))),
    }
}

/// Read assignments until the first empty line or the end of input.
///
/// Bad lines don't stop reading; they're skipped and returned
/// alongside the bindings so the caller can report them. When a name
/// is assigned more than once, the last assignment wins.
pub fn read_bindings<I, S>(lines: I) -> (Bindings, Vec<BindingErr>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bindings = Bindings::new();
    let mut errors = vec![];

    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            break;
        }
        match parse_assignment(line) {
            Ok((name, value)) => {
                log::debug!("BIND: {name} = {value}");
                bindings.insert(name, value);
            }
            Err(err) => {
                log::debug!("SKIP: {err}");
                errors.push(err);
            }
        }
    }

    (bindings, errors)
}

/// Format bindings as `a = 1, b = 2`.
pub fn format_bindings(bindings: &Bindings) -> String {
    bindings
        .iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

// Errors --------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct BindingErr {
    pub kind: BindingErrKind,
}

impl BindingErr {
    pub fn new(kind: BindingErrKind) -> Self {
        Self { kind }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BindingErrKind {
    InvalidAssignment(String),
    ValueOutOfRange(char, String), // name, digits
}

impl fmt::Display for BindingErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for BindingErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAssignment(line) => write!(
                f,
                "Invalid assignment {line:?} (expected <letter>=<integer>)"
            ),
            Self::ValueOutOfRange(name, digits) => {
                write!(f, "Value for {name} is out of range: {digits}")
            }
        }
    }
}
