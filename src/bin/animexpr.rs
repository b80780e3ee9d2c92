use std::path::{Path, PathBuf};

use animexpr::{Bindings, Callback, Document, Driver};
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "animexpr", version)]
struct Cli {
    /// Emit debug-level diagnostics on stderr (overridden by RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a document and run evaluation passes over it.
    Eval(EvalArgs),
    /// Compile a document without evaluating it.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of evaluation passes.
    #[arg(long, default_value_t = 1)]
    ticks: u64,

    /// Override a declared value before the first pass (`name=value`).
    #[arg(long = "set", value_parser = parse_assignment)]
    assignments: Vec<(String, f64)>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Serialize)]
struct TickReport<'a> {
    tick: u64,
    result: f64,
    values: &'a std::collections::BTreeMap<String, Option<f64>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn read_document(path: &Path) -> anyhow::Result<Document> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read document '{}'", path.display()))?;
    Document::from_json(&s).with_context(|| format!("parse document '{}'", path.display()))
}

fn host_bindings() -> Bindings {
    let mut bindings = Bindings::new();
    bindings.bind_callback(
        "log",
        Callback::new(|args| {
            tracing::info!(?args, "log callback");
            eprintln!("log: {args:?}");
        }),
    );
    bindings
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let mut bindings = host_bindings();
    let root = doc.compile(&mut bindings).context("compile document")?;

    for (name, value) in &args.assignments {
        if !bindings.assign(name, *value)? {
            anyhow::bail!("value '{name}' is read-only");
        }
    }

    let mut driver = Driver::new(root);
    let mut out = std::io::stdout().lock();
    for tick in 0..args.ticks {
        let result = driver.tick();
        let values = bindings.snapshot();
        serde_json::to_writer(
            &mut out,
            &TickReport {
                tick,
                result,
                values: &values,
            },
        )?;
        std::io::Write::write_all(&mut out, b"\n")?;
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let mut bindings = host_bindings();
    doc.compile(&mut bindings).context("compile document")?;
    println!("ok: {}", args.in_path.display());
    Ok(())
}
