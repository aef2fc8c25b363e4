use std::fs;

use clap::Parser;
use prefixa::{interpreter::evaluator::evaluate_prefix, interpreter::prefix::prefix_notation,
              to_prefix};

/// prefixa is an infix calculator that rewrites expressions to prefix
/// notation and evaluates them with 8-bit two's-complement arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells prefixa to read expressions from a file, one per line, instead
    /// of an inline expression.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    for line in script.lines() {
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        process_expression(expression);
    }
}

/// Runs one expression through the pipeline and prints the report: the echo
/// line, the prefix notation, every overflow notice the moment it occurs,
/// and the result or error string. A failing expression does not stop the
/// batch.
fn process_expression(expression: &str) {
    println!("Processing expression: {expression}");

    let prefix = to_prefix(expression);
    println!("Prefix notation: {}", prefix_notation(&prefix));

    match evaluate_prefix(&prefix, |notice| println!("{notice}")) {
        Ok(value) => println!("Evaluated result: {value}\n"),
        Err(error) => println!("Evaluated result: {error}\n"),
    }
}
