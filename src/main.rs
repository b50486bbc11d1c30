use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgMatches;

use exprtree::bindings::{parse_assignment, Bindings};
use exprtree::cli::build_cli;
use exprtree::config::{flag, CONFIG};
use exprtree::exe::Executor;
use exprtree::repl::Repl;
use exprtree::result::{ExeErr, ExeErrKind, ExeResult};

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let debug = matches.get_flag("debug");
    init_logger(debug);

    if let Err(err) = configure(&matches) {
        return handle_result(Err(err));
    }

    let executor = Executor::new(flag("show_postfix"), flag("show_tree"), flag("debug"));

    let bindings = match get_bindings(&matches) {
        Ok(bindings) => bindings,
        Err(err) => return handle_result(Err(err)),
    };

    let result = match matches.get_one::<String>("EXPR").map(|s| s.as_str()) {
        Some("-") => executor.execute_stdin(&bindings),
        Some(text) => executor.execute(text, &bindings),
        None if io::stdin().is_terminal() => return run_repl(executor),
        None => executor.execute_stdin(&bindings),
    };

    handle_result(result)
}

fn init_logger(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Copy CLI settings into the global config.
fn configure(matches: &ArgMatches) -> Result<(), ExeErr> {
    let mut config = CONFIG.write().unwrap_or_else(|err| err.into_inner());
    let config_err = |err: exprtree::config::ConfigErr| ExeErr::new(ExeErrKind::ConfigErr(err.kind));
    config.set_bool("debug", matches.get_flag("debug")).map_err(config_err)?;
    config.set_bool("show_postfix", matches.get_flag("postfix")).map_err(config_err)?;
    config.set_bool("show_tree", matches.get_flag("tree")).map_err(config_err)?;
    config.set_bool("no_history", matches.get_flag("no_history")).map_err(config_err)?;
    if let Some(path) = matches.get_one::<String>("history_path") {
        config.set_str("history_path", path).map_err(config_err)?;
    }
    Ok(())
}

/// Collect `-v NAME=VALUE` args. Unlike assignments read from stdin, a
/// bad one here is an error.
fn get_bindings(matches: &ArgMatches) -> Result<Bindings, ExeErr> {
    let mut bindings = Bindings::new();
    if let Some(vars) = matches.get_many::<String>("var") {
        for var in vars {
            match parse_assignment(var) {
                Ok((name, value)) => {
                    bindings.insert(name, value);
                }
                Err(err) => return Err(ExeErr::new(ExeErrKind::BindingErr(err.kind))),
            }
        }
    }
    Ok(bindings)
}

fn run_repl(executor: Executor) -> ExitCode {
    let history_path = if flag("no_history") { None } else { create_repl_history_file() };
    let result = Repl::new(history_path, executor).and_then(|mut repl| repl.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            exit_code(&err)
        }
    }
}

fn handle_result(result: ExeResult) -> ExitCode {
    match result {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Pipeline errors have already been reported by the executor.
            if matches!(
                &err.kind,
                ExeErrKind::BindingErr(_)
                    | ExeErrKind::ConfigErr(_)
                    | ExeErrKind::CouldNotReadInput(_)
                    | ExeErrKind::ReplErr(_)
            ) {
                eprintln!("{err}");
            }
            exit_code(&err)
        }
    }
}

fn exit_code(err: &ExeErr) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(u8::MAX))
}

/// Expand the configured history path, creating its parent directory
/// if needed. Returns `None` if the history file can't be used.
fn create_repl_history_file() -> Option<PathBuf> {
    let path = match CONFIG.read() {
        Ok(config) => config.get_str("history_path").ok()?.to_owned(),
        Err(_) => return None,
    };
    let path = match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()?.join(rest),
        None => PathBuf::from(&path),
    };
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Could not create REPL history directory: {err}");
            return None;
        }
    }
    Some(path)
}
