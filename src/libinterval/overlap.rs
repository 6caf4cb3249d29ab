// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Overlapping relation between two intervals.
//!
//! `overlap(x, y)` classifies the relative position of `x = [a, b]` and `y = [c, d]` into one of the states of Allen's interval algebra, extended with the empty cases. Touching intervals are decided before nested ones, which makes the classifier antisymmetric: `overlap(y, x)` is always `overlap(x, y).mirror()`.
//!
//! | State | Condition on non-empty operands |
//! |-------|---------------------------------|
//! | `Equal` | `a == c && b == d` |
//! | `Before` | `b < c` |
//! | `Meets` | `b == c` |
//! | `Starts` | `a == c && b < d` |
//! | `Overlaps` | `a < c && c < b && b < d` |
//! | `FinishedBy` | `a < c && b == d` |
//! | `Contains` | `a < c && d < b` |
//!
//! The remaining states are the mirrors of these.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::{Interval, OverlappingState};
//! use ieee1788::overlap::overlap;
//!
//! let x = Interval::new(0.0, 2.0).unwrap();
//! let y = Interval::new(1.0, 3.0).unwrap();
//! assert_eq!(overlap(&x, &y).unwrap(), OverlappingState::Overlaps);
//! assert_eq!(overlap(&y, &x).unwrap(), OverlappingState::OverlappedBy);
//! ```

use crate::bound::Bound;
use crate::decorated::DecoratedInterval;
use crate::exception::{self, ExceptionKind, Result};
use crate::interval::Interval;
use crate::precision::{promote2, Promote, Promoted};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlappingState {
  /// One of the operands is not a valid interval.
  Undefined,
  BothEmpty,
  FirstEmpty,
  SecondEmpty,
  Before,
  Meets,
  Overlaps,
  Starts,
  ContainedBy,
  Finishes,
  Equal,
  FinishedBy,
  Contains,
  StartedBy,
  OverlappedBy,
  MetBy,
  After,
  BothNai,
  FirstNai,
  SecondNai
}

impl OverlappingState
{
  /// The state of `overlap(y, x)` when `self` is the state of `overlap(x, y)`.
  pub fn mirror(self) -> OverlappingState {
    use self::OverlappingState::*;
    match self {
      Undefined => Undefined,
      BothEmpty => BothEmpty,
      FirstEmpty => SecondEmpty,
      SecondEmpty => FirstEmpty,
      Before => After,
      Meets => MetBy,
      Overlaps => OverlappedBy,
      Starts => StartedBy,
      ContainedBy => Contains,
      Finishes => FinishedBy,
      Equal => Equal,
      FinishedBy => Finishes,
      Contains => ContainedBy,
      StartedBy => Starts,
      OverlappedBy => Overlaps,
      MetBy => Meets,
      After => Before,
      BothNai => BothNai,
      FirstNai => SecondNai,
      SecondNai => FirstNai
    }
  }

  pub fn name(self) -> &'static str {
    use self::OverlappingState::*;
    match self {
      Undefined => "undefined",
      BothEmpty => "both_empty",
      FirstEmpty => "first_empty",
      SecondEmpty => "second_empty",
      Before => "before",
      Meets => "meets",
      Overlaps => "overlaps",
      Starts => "starts",
      ContainedBy => "contained_by",
      Finishes => "finishes",
      Equal => "equal",
      FinishedBy => "finished_by",
      Contains => "contains",
      StartedBy => "started_by",
      OverlappedBy => "overlapped_by",
      MetBy => "met_by",
      After => "after",
      BothNai => "both_nai",
      FirstNai => "first_nai",
      SecondNai => "second_nai"
    }
  }
}

impl fmt::Display for OverlappingState
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Overlapping state of `x` and `y`.
///
/// An operand breaking the interval invariants raises `invalid_operand` and yields `Undefined`.
pub fn overlap<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> Result<OverlappingState> {
  use self::OverlappingState::*;
  if !x.is_valid() || !y.is_valid() {
    exception::raise(ExceptionKind::InvalidOperand,
      &format!("overlap of invalid operands {:?} and {:?}", x, y))?;
    return Ok(Undefined);
  }
  let state = match (x.is_empty(), y.is_empty()) {
    (true, true) => BothEmpty,
    (true, false) => FirstEmpty,
    (false, true) => SecondEmpty,
    (false, false) => classify(x.lower(), x.upper(), y.lower(), y.upper())
  };
  Ok(state)
}

fn classify<B: Bound>(a: B, b: B, c: B, d: B) -> OverlappingState {
  use self::OverlappingState::*;
  if a == c && b == d { Equal }
  else if b < c { Before }
  else if d < a { After }
  else if b == c { Meets }
  else if d == a { MetBy }
  else if a == c {
    if b < d { Starts } else { StartedBy }
  }
  else if a < c {
    if b < d { Overlaps }
    else if b == d { FinishedBy }
    else { Contains }
  }
  else {
    if b < d { ContainedBy }
    else if b == d { Finishes }
    else { OverlappedBy }
  }
}

/// Overlapping state of two decorated intervals. NaI operands are classified before the bare parts are compared.
pub fn overlap_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> Result<OverlappingState> {
  match (x.is_nai(), y.is_nai()) {
    (true, true) => Ok(OverlappingState::BothNai),
    (true, false) => Ok(OverlappingState::FirstNai),
    (false, true) => Ok(OverlappingState::SecondNai),
    (false, false) => overlap(x.bare(), y.bare())
  }
}

/// `overlap` on operands of different bound types, compared in the widest one.
pub fn overlap_mixed<L, R>(x: &Interval<L>, y: &Interval<R>) -> Result<OverlappingState> where
  L: Bound + Promote<R>,
  R: Bound
{
  promote2(x, y, |a: &Interval<Promoted<L, R>>, b: &Interval<Promoted<L, R>>| overlap(a, b))
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use super::OverlappingState::*;
  use crate::exception::{ExceptionScope, ExceptionSet};
  use serde_test::{assert_tokens, Token};

  const inf: f64 = std::f64::INFINITY;

  fn i(lb: f64, ub: f64) -> Interval<f64> {
    Interval::new(lb, ub).unwrap()
  }

  fn empty() -> Interval<f64> {
    Interval::empty()
  }

  #[test]
  fn overlap_test() {
    let _scope = ExceptionScope::isolated();
    let cases = vec![
      (empty(), empty(), BothEmpty),
      (empty(), i(1.0, 2.0), FirstEmpty),
      (i(1.0, 2.0), empty(), SecondEmpty),
      (i(1.0, 2.0), i(3.0, 4.0), Before),
      (i(-inf, 2.0), i(3.0, inf), Before),
      (i(1.0, 2.0), i(2.0, 3.0), Meets),
      (i(2.0, 2.0), i(2.0, 3.0), Meets),
      (i(0.0, 2.0), i(1.0, 3.0), Overlaps),
      (i(1.0, 2.0), i(1.0, 3.0), Starts),
      (i(2.0, 3.0), i(1.0, 4.0), ContainedBy),
      (i(2.0, 2.0), i(1.0, 4.0), ContainedBy),
      (i(2.0, 3.0), i(1.0, 3.0), Finishes),
      (i(1.0, 3.0), i(1.0, 3.0), Equal),
      (i(-inf, inf), i(-inf, inf), Equal),
      (i(1.0, 3.0), i(2.0, 3.0), FinishedBy),
      (i(1.0, 4.0), i(2.0, 3.0), Contains),
      (i(-inf, inf), i(2.0, 3.0), Contains),
      (i(1.0, 3.0), i(1.0, 2.0), StartedBy),
      (i(1.0, 3.0), i(0.0, 2.0), OverlappedBy),
      (i(2.0, 3.0), i(1.0, 2.0), MetBy),
      (i(3.0, 4.0), i(1.0, 2.0), After),
    ];
    for (x, y, expected) in cases {
      assert_eq!(overlap(&x, &y), Ok(expected), "overlap({:?}, {:?})", x, y);
      assert_eq!(overlap(&y, &x), Ok(expected.mirror()), "overlap({:?}, {:?})", y, x);
    }
    assert!(exception::state().is_empty());
  }

  #[test]
  fn mirror_is_involution_test() {
    let all = vec![Undefined, BothEmpty, FirstEmpty, SecondEmpty, Before, Meets, Overlaps, Starts,
      ContainedBy, Finishes, Equal, FinishedBy, Contains, StartedBy, OverlappedBy, MetBy, After,
      BothNai, FirstNai, SecondNai];
    for s in all {
      assert_eq!(s.mirror().mirror(), s, "mirror of {}", s);
    }
  }

  #[test]
  fn invalid_operand_test() {
    let _scope = ExceptionScope::isolated();
    let bad = Interval::low_new(2.0, 1.0);
    assert_eq!(overlap(&bad, &i(0.0, 1.0)), Ok(Undefined));
    assert_eq!(exception::state(), ExceptionSet::from(ExceptionKind::InvalidOperand));

    exception::set_throw_config(ExceptionKind::InvalidOperand);
    let err = overlap(&i(0.0, 1.0), &bad).unwrap_err();
    assert_eq!(err.kind(), ExceptionKind::InvalidOperand);
  }

  #[test]
  fn overlap_dec_test() {
    let _scope = ExceptionScope::isolated();
    let nai: DecoratedInterval<f64> = DecoratedInterval::nai();
    let x = DecoratedInterval::new(1.0, 2.0).unwrap();
    let y = DecoratedInterval::new(2.0, 3.0).unwrap();
    let cases = vec![
      (nai, nai, BothNai),
      (nai, x, FirstNai),
      (x, nai, SecondNai),
      (x, y, Meets),
      (DecoratedInterval::empty(), nai, SecondNai),
      (DecoratedInterval::empty(), x, FirstEmpty),
    ];
    for (x, y, expected) in cases {
      assert_eq!(overlap_dec(&x, &y), Ok(expected), "overlap_dec({:?}, {:?})", x, y);
    }
    // Reading the bare part of NaI is not involved.
    assert!(exception::state().is_empty());
  }

  #[test]
  fn overlap_mixed_test() {
    let x: Interval<f32> = Interval::new(0.1, 1.0).unwrap();
    let y: Interval<f64> = Interval::new(0.1, 1.0).unwrap();
    // The f32 nearest to 0.1 lies above the f64 one.
    assert_eq!(overlap_mixed(&x, &y), Ok(Finishes));
    assert_eq!(overlap_mixed(&y, &x), Ok(FinishedBy));
  }

  #[test]
  fn serialization_test() {
    assert_tokens(&ContainedBy, &[Token::UnitVariant { name: "OverlappingState", variant: "contained_by" }]);
    assert_tokens(&BothNai, &[Token::UnitVariant { name: "OverlappingState", variant: "both_nai" }]);
  }
}
