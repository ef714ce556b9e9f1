use std::{collections::BTreeMap, fmt::Write};

use anyhow::Result;

use crate::{
  category::Size,
  parse::Gas,
  stats::{savings, Comparison, Operations, Summary},
};

const TABLE_WIDTH: usize = 100;
const NOT_APPLICABLE: &str = "N/A";
const TITLE: &str = "GAS COST COMPARISON: Iterator vs Traditional Loop";

/// Formats `n` with `,` between groups of three digits.
pub fn thousands<N: Into<i128>>(n: N) -> String {
  let n = n.into();
  let digits = n.unsigned_abs().to_string();

  let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
  if n < 0 {
    out.push('-');
  }

  for (i, digit) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(digit);
  }

  out
}

fn format_savings(savings: Option<f64>) -> String {
  match savings {
    Some(savings) => format!("{savings:+.1}%"),
    None => NOT_APPLICABLE.to_string(),
  }
}

/// `sum_of_squares` is displayed as `SUM OF SQUARES`.
fn heading(operation: &str) -> String {
  operation.replace('_', " ").to_uppercase()
}

fn format_row<S: std::fmt::Display>(size: S, iterator: &str, r#loop: &str, difference: &str, savings: &str) -> String {
  format!("{size:<12} {iterator:<20} {:<20} {difference:<20} {savings:<15}", r#loop)
}

fn format_comparison(size: Size, comparison: &Comparison) -> String {
  match (comparison.iterator, comparison.r#loop) {
    (Some(iterator), Some(r#loop)) => {
      let difference = i128::from(r#loop) - i128::from(iterator);
      let sign = if difference > 0 { "+" } else { "" };

      format_row(
        size,
        &thousands(iterator),
        &thousands(r#loop),
        &format!("{sign}{}", thousands(difference)),
        &format_savings(savings(iterator as f64, r#loop as f64)),
      )
    }
    (Some(iterator), None) => format_row(
      size,
      &thousands(iterator),
      NOT_APPLICABLE,
      NOT_APPLICABLE,
      NOT_APPLICABLE,
    ),
    (None, Some(r#loop)) => format_row(size, NOT_APPLICABLE, &thousands(r#loop), NOT_APPLICABLE, NOT_APPLICABLE),
    (None, None) => unreachable!("a comparison is only created with a measurement"),
  }
}

/// Only sized comparisons get a row; sizeless ones count towards the summary
/// alone.
fn format_operation(operation: &str, sizes: &BTreeMap<Option<Size>, Comparison>) -> Result<String> {
  let mut table = String::new();

  writeln!(table)?;
  writeln!(table, "{}", heading(operation))?;
  writeln!(table, "{}", "-".repeat(TABLE_WIDTH))?;
  writeln!(
    table,
    "{}",
    format_row("Size", "Iterator (L2 Gas)", "Loop (L2 Gas)", "Difference", "Savings")
  )?;
  writeln!(table, "{}", "-".repeat(TABLE_WIDTH))?;

  for size in Size::ALL {
    if let Some(comparison) = sizes.get(&Some(size)) {
      writeln!(table, "{}", format_comparison(size, comparison))?;
    }
  }

  writeln!(table)?;

  Ok(table)
}

fn format_summary(summary: &Summary) -> Result<String> {
  let mut block = String::new();

  writeln!(block, "{}", "=".repeat(TABLE_WIDTH))?;
  writeln!(block, "SUMMARY")?;
  writeln!(block, "{}", "=".repeat(TABLE_WIDTH))?;

  let Some((iterator, r#loop)) = summary.averages() else {
    return Ok(block);
  };

  writeln!(block)?;
  writeln!(block, "Average Gas Costs (across all {} comparisons):", summary.count)?;
  writeln!(block, "  Iterator: {} L2 gas", thousands(iterator as Gas))?;
  writeln!(block, "  Loop:     {} L2 gas", thousands(r#loop as Gas))?;
  writeln!(block, "  Average Savings: {}", format_savings(savings(iterator, r#loop)))?;
  writeln!(block)?;

  Ok(block)
}

pub fn format(operations: &Operations, summary: &Summary) -> Result<String> {
  let mut report = String::new();

  writeln!(report, "{}", "=".repeat(TABLE_WIDTH))?;
  writeln!(report, "{TITLE}")?;
  writeln!(report, "{}", "=".repeat(TABLE_WIDTH))?;
  writeln!(report)?;

  for (operation, sizes) in &operations.by_operation {
    report.push_str(&format_operation(operation, sizes)?);
  }

  report.push_str(&format_summary(summary)?);

  Ok(report)
}
