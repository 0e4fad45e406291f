use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, LevelFilter};
use miette::{IntoDiagnostic, WrapErr};
use verbal_interpreter::{config, Environment, Interpreter};

/// Evaluates word expressions such as `one add two` or `two one sub`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Load variable bindings from a TOML file with a `[bindings]` table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind a variable, e.g. `--bind one=1`. Overrides the config file.
    #[arg(short, long = "bind", value_name = "NAME=VALUE")]
    bindings: Vec<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Expression to evaluate. Lines are read from stdin when omitted.
    expression: Option<String>,
}

/// `-v` wins over `RUST_LOG`; without it `RUST_LOG` applies, defaulting to warn.
fn logger(verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
}

fn build_environment(args: &Args) -> miette::Result<Environment> {
    if args.config.is_none() && args.bindings.is_empty() {
        debug!("no bindings given, using demo environment");
        return Ok([("one", 1), ("two", 2)].into_iter().collect());
    }

    let mut env = match &args.config {
        Some(path) => config::load(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("loading bindings from {} failed!", path.display()))?
            .into_environment(),
        None => Environment::new(),
    };

    for binding in &args.bindings {
        let (name, value) = config::parse_binding(binding).into_diagnostic()?;
        env.define(name, value);
    }

    Ok(env)
}

/// Evaluates each non-blank line. Returns `false` if any line failed.
fn run_lines(
    interpreter: &Interpreter<'_>,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut ok = true;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match interpreter.run(&line) {
            Ok(result) => writeln!(out, "{}", result)?,
            Err(e) => {
                debug!("{:?} failed: {:?}", line, e.kind());
                writeln!(err, "error: {}", e)?;
                ok = false;
            }
        }
    }
    Ok(ok)
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    logger(args.verbose).init();

    let env = build_environment(&args)?;
    let interpreter = Interpreter::new(&env);

    if let Some(expression) = &args.expression {
        let result = interpreter
            .run(expression)
            .into_diagnostic()
            .wrap_err_with(|| format!("evaluating `{}` failed!", expression))?;
        println!("{}", result);
        return Ok(());
    }

    let ok = run_lines(&interpreter, io::stdin().lock(), &mut io::stdout(), &mut io::stderr())
        .into_diagnostic()
        .wrap_err("reading stdin failed!")?;

    if !ok {
        process::exit(1);
    }
    Ok(())
}
