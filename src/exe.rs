//! Front end for running the validate -> postfix -> tree -> evaluate
//! pipeline on some input.
use std::io::{self, BufRead};

use crate::bindings::{read_bindings, Bindings};
use crate::builder::build_tree;
use crate::converter::to_postfix;
use crate::evaluator::evaluate;
use crate::result::{ExeErr, ExeErrKind, ExeResult};
use crate::tree::Tree;
use crate::validator::{validate, ValidationErr, ValidationErrKind};

/// An expression that made it through validation and tree building.
#[derive(Debug)]
pub struct Compiled {
    pub postfix: String,
    pub tree: Tree,
}

impl Compiled {
    /// Variable names used in the expression, in first-use order.
    pub fn var_names(&self) -> Vec<char> {
        let mut names = vec![];
        for c in self.postfix.chars() {
            if c.is_ascii_alphabetic() && !names.contains(&c) {
                names.push(c);
            }
        }
        names
    }
}

pub struct Executor {
    show_postfix: bool,
    show_tree: bool,
    debug: bool,
}

impl Executor {
    pub fn new(show_postfix: bool, show_tree: bool, debug: bool) -> Self {
        Self { show_postfix, show_tree, debug }
    }

    pub fn set_show_postfix(&mut self, show_postfix: bool) {
        self.show_postfix = show_postfix;
    }

    pub fn set_show_tree(&mut self, show_tree: bool) {
        self.show_tree = show_tree;
    }

    pub fn show_postfix(&self) -> bool {
        self.show_postfix
    }

    pub fn show_tree(&self) -> bool {
        self.show_tree
    }

    /// Validate an expression, convert it to postfix, and build its
    /// tree. Problems are reported to stderr and returned.
    pub fn compile(&self, text: &str) -> Result<Compiled, ExeErr> {
        if let Err(err) = validate(text) {
            self.handle_validation_err(text, &err);
            return Err(ExeErr::new(ExeErrKind::InvalidExpression(err.kind)));
        }

        let postfix = to_postfix(text);
        log::debug!("POSTFIX: {postfix}");
        if self.show_postfix {
            eprintln!("{:=<72}", "POSTFIX ");
            eprintln!("{postfix}");
        }

        let tree = match build_tree(&postfix) {
            Ok(tree) => tree,
            Err(err) => {
                self.print_err_message(&format!("{err}"));
                return Err(ExeErr::new(ExeErrKind::BuildErr(err.kind)));
            }
        };
        log::debug!("TREE: {tree}");
        if self.show_tree {
            let header = format!("TREE ({} nodes, depth {}) ", tree.len(), tree.depth());
            eprintln!("{header:=<72}");
            eprint!("{}", tree.render());
        }

        Ok(Compiled { postfix, tree })
    }

    /// Evaluate a compiled expression.
    pub fn execute_compiled(&self, compiled: &Compiled, bindings: &Bindings) -> ExeResult {
        if self.debug {
            eprintln!("{:=<72}", "EVALUATE ");
            eprintln!("{} with {bindings:?}", compiled.tree);
        }
        match evaluate(&compiled.tree, bindings) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.print_err_message(&format!("{err}"));
                Err(ExeErr::new(ExeErrKind::EvalErr(err.kind)))
            }
        }
    }

    /// Run the whole pipeline on some text.
    pub fn execute(&self, text: &str, bindings: &Bindings) -> ExeResult {
        let compiled = self.compile(text)?;
        self.execute_compiled(&compiled, bindings)
    }

    /// Read the expression from the first line of stdin and variable
    /// assignments from the lines after it, up to the first blank line
    /// (or EOF). Nothing after that blank line is read. Assignments
    /// read from stdin take precedence over those in `base`.
    pub fn execute_stdin(&self, base: &Bindings) -> ExeResult {
        let stdin = io::stdin();
        let mut lines = vec![];
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    let done = !lines.is_empty() && line.trim_end_matches('\r').is_empty();
                    lines.push(line);
                    if done {
                        break;
                    }
                }
                Err(err) => {
                    let msg = err.to_string();
                    return Err(ExeErr::new(ExeErrKind::CouldNotReadInput(msg)));
                }
            }
        }
        self.execute_lines(base, lines)
    }

    /// Like [`Self::execute_stdin`], but reads from the given lines.
    /// Bad assignment lines are reported and skipped. Any lines after
    /// the first blank line following the expression are ignored.
    pub fn execute_lines<I, S>(&self, base: &Bindings, lines: I) -> ExeResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();

        let text = match lines.next() {
            Some(line) => line.as_ref().trim_end_matches(&['\r', '\n'][..]).to_owned(),
            None => {
                let msg = "expected an expression".to_owned();
                return Err(ExeErr::new(ExeErrKind::CouldNotReadInput(msg)));
            }
        };

        let compiled = self.compile(&text)?;

        let (read, errors) =
            read_bindings(lines.map(|line| line.as_ref().trim_end_matches('\r').to_owned()));
        for err in errors {
            eprintln!("WARNING: {err}");
        }
        let mut bindings = base.clone();
        bindings.extend(read);

        self.execute_compiled(&compiled, &bindings)
    }

    fn handle_validation_err(&self, text: &str, err: &ValidationErr) {
        use ValidationErrKind::*;
        let col = match err.kind {
            UnknownChar(_, col) | UnmatchedOpeningBracket(col) | UnmatchedClosingBracket(col) => {
                col
            }
        };
        let marker_col = col.saturating_sub(1);
        eprintln!("\n    |{text}");
        eprintln!("    |{:>marker_col$}^\n", "");
        self.print_err_message(&format!("Invalid expression: {err}"));
    }

    fn print_err_message(&self, message: &str) {
        eprintln!("  Error: {message}");
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(false, false, false)
    }
}
