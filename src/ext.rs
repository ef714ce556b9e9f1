use std::process::{Command, Output};

use anyhow::{Context, Result};

#[extend::ext]
pub impl Output {
  /// Returns an error if the exit status was non-zero. The error carries the
  /// captured stderr, since that is usually the only explanation available.
  fn check_success(&self) -> Result<()> {
    if !self.status.success() {
      let stderr = String::from_utf8_lossy(&self.stderr);
      anyhow::bail!("exited with non-zero status {}\n{}", self.status, stderr.trim_end());
    }

    Ok(())
  }
}

#[extend::ext]
pub impl Command {
  /// Runs the command to completion, capturing stdout and stderr separately,
  /// and returns stdout. Returns an error on non-zero exit.
  fn status_stdout(&mut self) -> Result<String> {
    let output = self.output().context("output")?;
    output.check_success()?;

    if !output.stderr.is_empty() {
      log::debug!("stderr: {}", String::from_utf8_lossy(&output.stderr).trim_end());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }
}
