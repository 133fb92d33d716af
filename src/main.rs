use std::fs;

use calculon::{
    ErrorKind, calculate,
    interpreter::{lexer::tokenize, parser::core::parse},
    report::Report,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

/// calculon evaluates arithmetic expressions over real numbers with `+`, `-`,
/// `*`, `/` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calculon to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints every outcome as a JSON object with a `result` or an `error`
    /// field.
    #[arg(short, long)]
    json: bool,

    /// Prints the parsed expression tree, fully parenthesised, instead of its
    /// value.
    #[arg(short, long, conflicts_with = "json")]
    tree: bool,

    /// The expression, or the path of the file with `--file`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() {
    // RUST_LOG controls the level, warn by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().compact()
         .with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .without_time()
         .init();

    let args = Args::parse();

    let expressions = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source.lines()
                                .filter(|line| !line.trim().is_empty())
                                .map(str::to_string)
                                .collect(),
            Err(e) => {
                tracing::warn!(path = %args.contents, error = %e, "failed to read input file");
                if args.json {
                    print_json(&Report::from_error(&e));
                } else {
                    eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                              &args.contents);
                }
                std::process::exit(2);
            },
        }
    } else {
        vec![args.contents.clone()]
    };

    let mut failed = false;
    for expression in &expressions {
        let succeeded = if args.tree {
            show_tree(expression)
        } else {
            show_value(expression, args.json)
        };
        failed |= !succeeded;
    }

    if failed {
        std::process::exit(1);
    }
}

/// Prints the value of `expression`, or its error message.
///
/// Returns `true` if the calculation succeeded.
fn show_value(expression: &str, json: bool) -> bool {
    let outcome = calculate(expression);

    if json {
        let report = Report::from_outcome(outcome);
        print_json(&report);
        return report.is_success();
    }

    match outcome {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(kind) => {
            report_failure(kind);
            false
        },
    }
}

/// Prints the parsed tree of `expression`, or its error message.
///
/// Returns `true` if the expression parsed.
fn show_tree(expression: &str) -> bool {
    match tokenize(expression).and_then(|tokens| parse(&tokens)) {
        Ok(tree) => {
            println!("{tree}");
            true
        },
        Err(kind) => {
            report_failure(kind);
            false
        },
    }
}

fn report_failure(kind: ErrorKind) {
    eprintln!("Error: {}", kind.message());
}

fn print_json(report: &Report) {
    match report.to_json() {
        Ok(body) => println!("{body}"),
        Err(e) => eprintln!("Failed to encode JSON response: {e}"),
    }
}
