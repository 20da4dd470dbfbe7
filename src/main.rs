use std::{error::Error, fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use phrase::{Expression, interpreter::context::Context};
use tracing_subscriber::EnvFilter;

/// phrase evaluates a single-line boolean expression against a JSON context.
///
/// Exits with 0 if the expression is true, 1 if it is false and 2 on errors.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The context as a JSON object, e.g. '{"a": [1, 2, 3]}'.
    #[arg(short, long, conflicts_with = "context_file")]
    context: Option<String>,

    /// Reads the context from a JSON file.
    #[arg(short = 'f', long)]
    context_file: Option<PathBuf>,

    /// Prints the parsed tree instead of evaluating it.
    #[arg(long)]
    ast: bool,

    expression: String,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        },
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let context = match (&args.context, &args.context_file) {
        (Some(json), _) => Context::from_json(json)?,
        (None, Some(path)) => {
            let json = fs::read_to_string(path).map_err(|e| {
                                                     format!("Failed to read the context file '{}': {e}",
                                                             path.display())
                                                 })?;
            Context::from_json(&json)?
        },
        (None, None) => Context::new(),
    };

    let expression = Expression::compile(&args.expression)?.with_context(context);

    if args.ast {
        println!("{expression}");
        return Ok(true);
    }

    let result = expression.evaluate()?;
    println!("{result}");
    Ok(result)
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=phrase=trace`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                                 .with_writer(std::io::stderr)
                                 .init();
    }
}
