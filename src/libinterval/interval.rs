// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed bare interval with floating-point bounds.
//!
//! An interval is either empty or a pair `[lb, ub]` with `lb <= ub`, `lb < +∞` and `ub > -∞`. Unbounded intervals are represented with infinite bounds, the entire real line being `[-∞, +∞]`. The empty interval is encoded internally as `(NaN, NaN)`; this encoding is never returned by the accessors.
//!
//! Intervals are immutable values: every operation builds a new interval.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::Interval;
//! use ieee1788::exception;
//! use ieee1788::ExceptionKind;
//!
//! let x = Interval::new(-1.0, 2.0).unwrap();
//! assert_eq!(x.lower(), -1.0);
//! assert_eq!(x.upper(), 2.0);
//!
//! // Inverted bounds are an undefined operation: empty is returned and the flag is raised.
//! let y = Interval::new(2.0, -1.0).unwrap();
//! assert!(y.is_empty());
//! assert!(exception::is_set(ExceptionKind::UndefinedOperation));
//! ```
//!
//! # See also
//! [decorated](../decorated/index.html)

use crate::bound::{self, Bound, Rounding};
use crate::exception::{self, ExceptionKind, Result};
use crate::ops::*;
use gcollections::kind::Collection;
use gcollections::ops::{Bounded, Contains, Empty};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Neg;

#[derive(Debug, Copy, Clone)]
pub struct Interval<B> {
  lb: B,
  ub: B
}

impl<B: Bound> Interval<B>
{
  /// Builds `[lb, ub]`. Invalid bounds raise `undefined_operation` and yield the empty interval.
  pub fn new(lb: B, ub: B) -> Result<Interval<B>> {
    if Interval::is_valid_bounds(lb, ub) {
      Ok(Interval::low_new(lb, ub))
    }
    else {
      exception::raise(ExceptionKind::UndefinedOperation,
        "invalid interval bounds: expected lb <= ub, lb < +inf and ub > -inf")?;
      Ok(Interval::empty())
    }
  }

  pub fn singleton(x: B) -> Result<Interval<B>> {
    Interval::new(x, x)
  }

  pub(crate) fn low_new(lb: B, ub: B) -> Interval<B> {
    Interval { lb, ub }
  }

  pub fn empty() -> Interval<B> {
    Interval::low_new(B::nan(), B::nan())
  }

  pub fn entire() -> Interval<B> {
    Interval::low_new(B::neg_infinity(), B::infinity())
  }

  /// Whether `[lb, ub]` denotes a non-empty interval.
  pub fn is_valid_bounds(lb: B, ub: B) -> bool {
    !lb.is_nan() && !ub.is_nan()
    && lb <= ub
    && lb != B::infinity()
    && ub != B::neg_infinity()
  }

  /// Whether the representation satisfies the interval invariants.
  pub fn is_valid(&self) -> bool {
    self.is_empty() || Interval::is_valid_bounds(self.lb, self.ub)
  }

  /// Infimum of the interval, `+∞` when empty.
  pub fn lower(&self) -> B {
    if self.is_empty() { B::infinity() } else { self.lb }
  }

  /// Supremum of the interval, `-∞` when empty.
  pub fn upper(&self) -> B {
    if self.is_empty() { B::neg_infinity() } else { self.ub }
  }

  pub fn is_empty(&self) -> bool {
    self.lb.is_nan() && self.ub.is_nan()
  }

  pub fn is_entire(&self) -> bool {
    self.lb == B::neg_infinity() && self.ub == B::infinity()
  }

  /// The empty interval is bounded.
  pub fn is_bounded(&self) -> bool {
    self.is_empty() || (self.lb.is_finite() && self.ub.is_finite())
  }

  /// Non-empty and bounded.
  pub fn is_common(&self) -> bool {
    !self.is_empty() && self.is_bounded()
  }

  pub fn is_singleton(&self) -> bool {
    !self.is_empty() && self.lb == self.ub
  }

  /// Outward-rounded conversion to another bound type.
  pub fn convert<U: Bound>(&self) -> Interval<U> {
    if self.is_empty() {
      Interval::empty()
    }
    else {
      Interval::low_new(
        bound::round(self.lb, Rounding::Down),
        bound::round(self.ub, Rounding::Up))
    }
  }
}

impl<B: Bound> PartialEq for Interval<B>
{
  fn eq(&self, other: &Interval<B>) -> bool {
    if self.is_empty() || other.is_empty() {
      self.is_empty() && other.is_empty()
    }
    else {
      self.lb == other.lb && self.ub == other.ub
    }
  }
}

impl<B: Bound> Neg for Interval<B>
{
  type Output = Interval<B>;

  fn neg(self) -> Interval<B> {
    if self.is_empty() { self }
    else { Interval::low_new(-self.ub, -self.lb) }
  }
}

impl<B> Collection for Interval<B>
{
  type Item = B;
}

impl<B: Bound> Bounded for Interval<B>
{
  fn lower(&self) -> B {
    Interval::lower(self)
  }

  fn upper(&self) -> B {
    Interval::upper(self)
  }
}

impl<B: Bound> Empty for Interval<B>
{
  fn empty() -> Interval<B> {
    Interval::empty()
  }
}

impl<B: Bound> Whole for Interval<B>
{
  fn whole() -> Interval<B> {
    Interval::entire()
  }
}

impl<B: Bound> Contains for Interval<B>
{
  fn contains(&self, value: &B) -> bool {
    !self.is_empty() && self.lb <= *value && *value <= self.ub
  }
}

impl<B: Bound> Width for Interval<B>
{
  type Output = B;

  fn width(&self) -> B {
    if self.is_empty() { B::nan() }
    else { bound::sub(self.ub, self.lb, Rounding::Up) }
  }
}

impl<B: Bound> Serialize for Interval<B>
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
    S: Serializer
  {
    if self.is_empty() {
      serializer.serialize_none()
    }
    else {
      serializer.serialize_some(&(self.lb, self.ub))
    }
  }
}

impl<'de, B: Bound> Deserialize<'de> for Interval<B>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Interval<B>, D::Error> where
    D: Deserializer<'de>
  {
    match Option::<(B, B)>::deserialize(deserializer)? {
      None => Ok(Interval::empty()),
      Some((lb, ub)) if Interval::is_valid_bounds(lb, ub) => Ok(Interval::low_new(lb, ub)),
      Some((lb, ub)) => Err(de::Error::custom(format!("invalid interval bounds [{}, {}]", lb, ub)))
    }
  }
}
