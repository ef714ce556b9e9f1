use std::collections::BTreeMap;

use crate::{
  category::{Approach, Category, Size},
  parse::Gas,
};

/// The iterator and loop measurements for one operation at one size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
  pub iterator: Option<Gas>,
  pub r#loop: Option<Gas>,
}

impl Comparison {
  fn set(&mut self, approach: Approach, gas: Gas) {
    match approach {
      Approach::Iterator => self.iterator = Some(gas),
      Approach::Loop => self.r#loop = Some(gas),
    }
  }

  /// Both measurements, if both were reported.
  pub fn both(&self) -> Option<(Gas, Gas)> {
    self.iterator.zip(self.r#loop)
  }
}

/// Comparisons grouped by operation, then by size. `None` holds tests whose
/// name carried no size token.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Operations {
  pub by_operation: BTreeMap<String, BTreeMap<Option<Size>, Comparison>>,
}

impl Operations {
  /// Groups every test that `categorize` can decode, in the order given, so a
  /// later test with the same category replaces an earlier one. Others are
  /// dropped.
  pub fn collect<'a, I, F>(tests: I, categorize: F) -> Self
  where
    I: IntoIterator<Item = (&'a str, Gas)>,
    F: Fn(&str) -> Option<Category>,
  {
    let mut by_operation: BTreeMap<String, BTreeMap<Option<Size>, Comparison>> = BTreeMap::new();

    for (name, gas) in tests {
      let Some(category) = categorize(name) else {
        log::debug!("skipping {name}, not an iterator/loop benchmark");
        continue;
      };

      by_operation
        .entry(category.operation)
        .or_default()
        .entry(category.size)
        .or_default()
        .set(category.approach, gas);
    }

    Self { by_operation }
  }

  pub fn comparisons(&self) -> impl Iterator<Item = &Comparison> {
    self.by_operation.values().flat_map(BTreeMap::values)
  }
}

/// Totals over every comparison with both an iterator and a loop measurement,
/// including ones without a size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
  pub total_iterator: u128,
  pub total_loop: u128,
  pub count: u64,
}

impl Summary {
  pub fn new(operations: &Operations) -> Self {
    operations
      .comparisons()
      .filter_map(Comparison::both)
      .fold(Summary::default(), |summary, (iterator, r#loop)| Summary {
        total_iterator: summary.total_iterator + u128::from(iterator),
        total_loop: summary.total_loop + u128::from(r#loop),
        count: summary.count + 1,
      })
  }

  /// Average iterator and loop gas, or `None` when nothing was compared.
  pub fn averages(&self) -> Option<(f64, f64)> {
    if self.count == 0 {
      return None;
    }

    let count = self.count as f64;

    Some((self.total_iterator as f64 / count, self.total_loop as f64 / count))
  }
}

/// Percentage of loop gas saved by the iterator. `None` when loop gas is zero.
pub fn savings(iterator: f64, r#loop: f64) -> Option<f64> {
  if r#loop == 0.0 {
    return None;
  }

  Some((r#loop - iterator) / r#loop * 100.0)
}
