use boolean_interpreter::config::Bindings;
use boolean_interpreter::{format_result, sample_expression, Evaluator};
use clap::Parser;
use tracing::Level;

/// Evaluates `A || (B || C)` against a set of boolean bindings.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Bind a variable, e.g. `--set B=true` (repeatable, applied last)
    #[arg(long = "set", value_name = "NAME=BOOL")]
    sets: Vec<String>,
    /// JSON object of boolean bindings, e.g. '{"A": false}'
    #[arg(long)]
    vars: Option<String>,
    /// Start from an empty context instead of A=true, B=false, C=true
    #[arg(long)]
    empty: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the result line.
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Build context.
    let bindings = Bindings {
        empty: args.empty,
        vars: args.vars,
        sets: args.sets,
    };
    let ctx = match bindings.build() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    tracing::info!(context = %ctx, "bindings ready");

    // Evaluate the sample expression.
    let expr = sample_expression();
    let result = Evaluator::new(ctx).eval(&expr);

    // Output result.
    println!("{}", format_result(result));
}
