mod category;
mod ext;
mod format;
mod input;
mod parse;
mod run;
mod stats;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use self::{
  input::Source,
  stats::{Operations, Summary},
};

/// Compares the L2 gas of iterator and loop benchmarks reported by
/// `snforge test --gas-report`.
///
/// With no `--input`, a piped stdin is read as the report; otherwise snforge is
/// run in the current directory.
#[derive(Parser)]
#[command(version)]
struct Args {
  /// Read the gas report from this file (`-` for stdin) instead of
  /// auto-detecting.
  #[arg(short, long)]
  input: Option<PathBuf>,
  /// Always run `snforge test --gas-report`, even when stdin is piped.
  #[arg(long, conflicts_with = "input")]
  run: bool,
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Args::parse();

  let source = Source::resolve(args.input, args.run);
  let report = source.read().context("read")?;

  let tests = parse::parse_report(&report).context("parse")?;
  if tests.is_empty() {
    anyhow::bail!("No test results found!");
  }
  log::info!("found {} test results", tests.len());

  let operations = Operations::collect(tests.iter(), category::categorize);
  let summary = Summary::new(&operations);

  print!("{}", format::format(&operations, &summary).context("format")?);

  Ok(())
}
