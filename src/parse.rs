use std::{collections::HashMap, sync::OnceLock};

use anyhow::{Context, Result};
use regex::Regex;

/// Gas cost reported for a single test, in L2 gas.
pub type Gas = u64;

const NAMESPACE_SEPARATOR: &str = "::";

/// Matches `[PASS] <path> (l1_gas: ~X, l1_data_gas: ~Y, l2_gas: ~Z)`, capturing
/// the test path and the `l2_gas` value right before the closing paren.
fn pass_line() -> &'static Regex {
  static PASS_LINE: OnceLock<Regex> = OnceLock::new();

  PASS_LINE.get_or_init(|| Regex::new(r"\[PASS\]\s+(\S+)\s+\([^)]*l2_gas:\s+~([0-9]+)\)").expect("valid regex"))
}

/// Returns the last `::` segment of a test path.
pub fn short_name(path: &str) -> &str {
  path.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(path)
}

/// Gas per short test name, iterated in the order names first appeared.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tests {
  entries: Vec<(String, Gas)>,
  positions: HashMap<String, usize>,
}

impl Tests {
  /// Sets the gas of `name`, keeping its original position if it was already
  /// present. Returns the replaced gas.
  fn insert(&mut self, name: &str, gas: Gas) -> Option<Gas> {
    if let Some(&i) = self.positions.get(name) {
      return Some(std::mem::replace(&mut self.entries[i].1, gas));
    }

    self.positions.insert(name.to_string(), self.entries.len());
    self.entries.push((name.to_string(), gas));

    None
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, Gas)> {
    self.entries.iter().map(|(name, gas)| (name.as_str(), *gas))
  }
}

/// Extracts the L2 gas of every passing test in `report`, keyed by short test
/// name. Lines that don't match are skipped. A later line with the same short
/// name replaces an earlier one.
pub fn parse_report(report: &str) -> Result<Tests> {
  let mut tests = Tests::default();

  for line in report.lines() {
    let Some(captures) = pass_line().captures(line) else {
      continue;
    };

    let path = &captures[1];
    let gas = captures[2].parse::<Gas>().with_context(|| format!("l2_gas of {path}"))?;

    let name = short_name(path);
    if let Some(previous) = tests.insert(name, gas) {
      log::warn!("{name} reported twice, replacing {previous} with {gas}");
    }
  }

  Ok(tests)
}
