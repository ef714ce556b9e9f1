use std::process::Command;

use anyhow::{Context, Result};

use crate::ext::CommandExt;

const SNFORGE_BIN: &str = "snforge";
const SNFORGE_ARGS: [&str; 2] = ["test", "--gas-report"];

/// Runs `snforge test --gas-report` in the current directory and returns its
/// stdout.
///
/// # Errors
///
/// This will return an error if:
/// - `snforge` cannot be spawned.
/// - the exit status is non-zero, in which case the error carries snforge's
///   stderr.
pub fn gas_report() -> Result<String> {
  log::info!("running {SNFORGE_BIN} {}", SNFORGE_ARGS.join(" "));

  Command::new(SNFORGE_BIN)
    .args(SNFORGE_ARGS)
    .current_dir(".")
    .status_stdout()
    .with_context(|| format!("{SNFORGE_BIN} {}", SNFORGE_ARGS.join(" ")))
}
