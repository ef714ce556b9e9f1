use std::{
  fs,
  io::{self, IsTerminal, Read},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::run;

/// Where the gas report text comes from. Resolved once at startup.
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
  /// Read stdin to end of input.
  Stdin,
  /// Read a saved report from disk.
  File(PathBuf),
  /// Run `snforge test --gas-report` and capture its stdout.
  Snforge,
}

impl Source {
  /// An explicit `--input` or `run` wins; `-` means stdin. Otherwise piped
  /// stdin is read and an interactive terminal falls back to running snforge.
  pub fn resolve(input: Option<PathBuf>, run: bool) -> Self {
    Self::resolve_with(input, run, io::stdin().is_terminal())
  }

  fn resolve_with(input: Option<PathBuf>, run: bool, stdin_is_terminal: bool) -> Self {
    match input {
      Some(path) if path == Path::new("-") => Source::Stdin,
      Some(path) => Source::File(path),
      None if run || stdin_is_terminal => Source::Snforge,
      None => Source::Stdin,
    }
  }

  /// Returns the whole report, fully buffered.
  pub fn read(&self) -> Result<String> {
    match self {
      Source::Stdin => {
        log::info!("reading report from stdin");

        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("read stdin")?;

        Ok(text)
      }
      Source::File(path) => {
        log::info!("reading report from {path:?}");

        fs::read_to_string(path).with_context(|| format!("read {path:?}"))
      }
      Source::Snforge => run::gas_report().context("gas report"),
    }
  }
}
