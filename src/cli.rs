use clap::builder::FalseyValueParser;
use clap::{Arg, ArgAction, Command};

pub const DEFAULT_HISTORY_PATH: &str = "~/.config/exprtree/repl-history";

pub fn build_cli() -> Command {
    let expr_help = concat!(
        "Expression to evaluate. Can be:\n\n",
        "1. an infix expression such as \"(a+2)*3\"\n",
        "2. a single dash to read the expression from stdin, followed by\n",
        "   <letter>=<integer> lines and a blank line\n\n",
        "When omitted, the REPL is started (or stdin is read if it isn't\n",
        "a terminal).",
    );

    Command::new("exprtree")
        .version("0.0.0")
        .about("Evaluate infix expressions via postfix and an expression tree")
        .arg(Arg::new("EXPR").index(1).required(false).help(expr_help))
        .arg(
            Arg::new("var")
                .short('v')
                .long("var")
                .action(ArgAction::Append)
                .num_args(1)
                .value_name("NAME=VALUE")
                .help("Bind a variable, e.g. -v a=5 (may be repeated)"),
        )
        .arg(
            Arg::new("postfix")
                .short('p')
                .long("postfix")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("EXPRTREE_SHOW_POSTFIX")
                .help("Show postfix form?"),
        )
        .arg(
            Arg::new("tree")
                .short('t')
                .long("tree")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("EXPRTREE_SHOW_TREE")
                .help("Show expression tree?"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("EXPRTREE_DEBUG")
                .help("Enable debug mode?"),
        )
        .arg(
            Arg::new("history_path")
                .long("history-path")
                .required(false)
                .num_args(1)
                .default_value(DEFAULT_HISTORY_PATH)
                .help("Path to REPL history file"),
        )
        .arg(
            Arg::new("no_history")
                .long("no-history")
                .action(ArgAction::SetTrue)
                .help("Disable REPL history? [default: history enabled]"),
        )
}
