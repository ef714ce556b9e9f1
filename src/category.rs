//! Decoding of benchmark test names.
//!
//! Names follow the convention `benchmark_{operation}_{approach}_{size}` (the
//! approach and size tokens may appear in either order). Decoding is a token
//! heuristic rather than a grammar:
//!
//! 1. the name must start with `benchmark_`;
//! 2. the rest is split on `_`;
//! 3. the first `iterator` token is removed and sets the approach, otherwise
//!    the first `loop` token, otherwise the name is not a benchmark;
//! 4. the first of `small`, `medium`, `large` found (checked in that order) is
//!    removed and sets the size, which may be absent;
//! 5. the remaining tokens, rejoined with `_`, are the operation.
//!
//! An operation whose own name contains one of these tokens is mis-decoded.

use std::fmt;

const PREFIX: &str = "benchmark_";
const DELIMITER: char = '_';

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Approach {
  Iterator,
  Loop,
}

impl Approach {
  const ALL: [Approach; 2] = [Approach::Iterator, Approach::Loop];

  fn token(self) -> &'static str {
    match self {
      Approach::Iterator => "iterator",
      Approach::Loop => "loop",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
  Small,
  Medium,
  Large,
}

impl Size {
  /// Priority order when decoding, and row order when rendering.
  pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

  fn token(self) -> &'static str {
    match self {
      Size::Small => "small",
      Size::Medium => "medium",
      Size::Large => "large",
    }
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Size::Small => "Small",
      Size::Medium => "Medium",
      Size::Large => "Large",
    };

    f.pad(label)
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
  pub operation: String,
  pub size: Option<Size>,
  pub approach: Approach,
}

/// Removes the first token equal to `token`, returning whether one was found.
fn take(tokens: &mut Vec<&str>, token: &str) -> bool {
  match tokens.iter().position(|t| *t == token) {
    Some(i) => {
      tokens.remove(i);
      true
    }
    None => false,
  }
}

/// Decodes a short test name, or returns `None` if it isn't an iterator/loop
/// benchmark.
pub fn categorize(name: &str) -> Option<Category> {
  let rest = name.strip_prefix(PREFIX)?;
  let mut tokens = rest.split(DELIMITER).collect::<Vec<_>>();

  let approach = Approach::ALL.into_iter().find(|a| take(&mut tokens, a.token()))?;
  let size = Size::ALL.into_iter().find(|s| take(&mut tokens, s.token()));

  Some(Category {
    operation: tokens.join("_"),
    size,
    approach,
  })
}
