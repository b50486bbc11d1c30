//! # exprtree REPL
use std::path::PathBuf;

use rustyline::config::Configurer;
use rustyline::error::ReadlineError;

use crate::bindings::{format_bindings, parse_assignment, Bindings};
use crate::exe::Executor;
use crate::result::{ExeErr, ExeErrKind};

pub type ReplResult = Result<(), ExeErr>;

pub struct Repl {
    reader: rustyline::Editor<()>,
    history_path: Option<PathBuf>,
    executor: Executor,
    bindings: Bindings,
}

impl Repl {
    pub fn new(history_path: Option<PathBuf>, executor: Executor) -> Result<Self, ExeErr> {
        let reader = match rustyline::Editor::<()>::new() {
            Ok(reader) => reader,
            Err(err) => {
                let msg = format!("Could not initialize readline: {err}");
                return Err(ExeErr::new(ExeErrKind::ReplErr(msg)));
            }
        };
        Ok(Repl { reader, history_path, executor, bindings: Bindings::new() })
    }

    pub fn run(&mut self) -> ReplResult {
        println!("Welcome to the exprtree REPL (read/eval/print loop)");
        println!("Type an expression, then hit Enter to evaluate it");
        self.load_history();
        println!("Type .help for help or .exit to exit");

        loop {
            match self.read_line("→ ", true) {
                Ok(None) => {
                    // Blank or all-whitespace line.
                }
                Ok(Some(input)) => {
                    if let Some(result) = self.eval(input.as_str()) {
                        break result;
                    }
                }
                // User hit Ctrl-C
                Err(ReadlineError::Interrupted) => {
                    println!("Use Ctrl-D or .exit to exit");
                }
                // User hit Ctrl-D
                Err(ReadlineError::Eof) => {
                    break Ok(());
                }
                Err(err) => {
                    let msg = format!("Could not read line: {err}");
                    break Err(ExeErr::new(ExeErrKind::ReplErr(msg)));
                }
            }
        }
    }

    /// Get a line of input from the user. If the line comprises only
    /// whitespace *and* ``trim_blank`` is set, ``None`` is returned.
    fn read_line(
        &mut self,
        prompt: &str,
        trim_blank: bool,
    ) -> Result<Option<String>, ReadlineError> {
        match self.reader.readline(prompt) {
            Ok(input) if trim_blank && input.trim().is_empty() => Ok(None),
            Ok(input) => Ok(Some(input)),
            Err(err) => Err(err),
        }
    }

    /// Evaluate a line of input. Returns `None` to indicate to the main
    /// loop to continue. Returns a result to indicate to the main loop
    /// to exit.
    pub fn eval(&mut self, text: &str) -> Option<ReplResult> {
        self.add_history_entry(text);

        if matches!(text.trim(), ".exit" | ".quit") {
            return Some(Ok(()));
        } else if self.handle_command(text) {
            return None;
        }

        // Errors are reported by the executor.
        let compiled = match self.executor.compile(text) {
            Ok(compiled) => compiled,
            Err(_) => return None,
        };

        let names = compiled.var_names();
        if !names.is_empty() {
            match self.read_bindings(&names) {
                Ok(bindings) => self.bindings = bindings,
                Err(err) => return Some(Err(err)),
            }
        }

        if let Ok(value) = self.executor.execute_compiled(&compiled, &self.bindings) {
            println!("Result: {value}");
        }

        None
    }

    /// Read `<letter>=<integer>` lines until a blank line is entered.
    /// Bad lines are reported and skipped.
    fn read_bindings(&mut self, names: &[char]) -> Result<Bindings, ExeErr> {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        println!(
            "Enter values for {} (e.g. {}=5), then a blank line to finish",
            names.join(", "),
            names[0]
        );

        let mut bindings = Bindings::new();
        loop {
            match self.read_line("+ ", false) {
                Ok(Some(line)) if line.trim().is_empty() => break Ok(bindings),
                Ok(Some(line)) => match parse_assignment(&line) {
                    Ok((name, value)) => {
                        bindings.insert(name, value);
                    }
                    Err(err) => eprintln!("{err}"),
                },
                Ok(None) => unreachable!(),
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    break Ok(bindings);
                }
                Err(err) => {
                    let msg = format!("Could not read line: {err}");
                    break Err(ExeErr::new(ExeErrKind::ReplErr(msg)));
                }
            }
        }
    }

    fn handle_command(&mut self, text: &str) -> bool {
        match text.trim() {
            "?" | ".help" => {
                eprintln!("{:=>72}", "");
                eprintln!("exprtree Help");
                eprintln!("{:->72}", "");
                eprintln!("Enter an expression over digits and single-letter");
                eprintln!("variables using + - * / and parens, e.g. (a+2)*3");
                eprintln!("{:->72}", "");
                eprintln!(".help      -> show this help");
                eprintln!(".exit      -> exit");
                eprintln!(".postfix   -> toggle display of postfix form");
                eprintln!(".tree      -> toggle display of expression tree");
                eprintln!(".vars      -> show most recent variable bindings");
                eprintln!(".emacs     -> switch to emacs-style input (default)");
                eprintln!(".vi        -> switch to vi-style input");
                eprintln!("{:=>72}", "");
            }
            ".postfix" => {
                let show = !self.executor.show_postfix();
                self.executor.set_show_postfix(show);
                eprintln!("Postfix display {}", on_off(show));
            }
            ".tree" => {
                let show = !self.executor.show_tree();
                self.executor.set_show_tree(show);
                eprintln!("Tree display {}", on_off(show));
            }
            ".vars" => {
                if self.bindings.is_empty() {
                    eprintln!("No variables bound");
                } else {
                    println!("{}", format_bindings(&self.bindings));
                }
            }
            ".emacs" => {
                self.reader.set_edit_mode(rustyline::config::EditMode::Emacs);
            }
            ".vi" | ".vim" => {
                self.reader.set_edit_mode(rustyline::config::EditMode::Vi);
            }
            _ => return false,
        }
        true
    }

    fn load_history(&mut self) {
        match &self.history_path {
            Some(path) => {
                println!("REPL history will be saved to {}", path.to_string_lossy());
                match self.reader.load_history(path.as_path()) {
                    Ok(_) => (),
                    Err(err) => log::debug!("Could not load REPL history: {err}"),
                }
            }
            None => (),
        }
    }

    fn add_history_entry(&mut self, input: &str) {
        match &self.history_path {
            Some(path) => {
                self.reader.add_history_entry(input);
                match self.reader.save_history(path.as_path()) {
                    Ok(_) => (),
                    Err(err) => {
                        eprintln!("WARNING: Could not save REPL history: {err}")
                    }
                }
            }
            None => (),
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
