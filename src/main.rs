use std::fs;

use clap::Parser;
use numeval::{evaluate_expression, history::History};

/// numeval evaluates arithmetic expressions with six binary operators,
/// unary negation and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numeval to look at a file with one expression per line instead
    /// of a single expression.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    if args.file {
        let source = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        });

        let mut history = History::new();

        for expression in source.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let outcome = evaluate_expression(expression);
            history.record_outcome(expression, &outcome);
        }

        for entry in history.entries() {
            println!("{} = {}", entry.expression, entry.outcome);
        }
    } else {
        match evaluate_expression(&args.contents) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
