// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decorated intervals and NaI.
//!
//! A decorated interval pairs a bare interval with a [decoration](../decoration/index.html). The special value NaI ("Not an Interval") has the decoration `ill`; its bare part is inert and reading it raises `interval_part_of_nai`.
//!
//! The decoration of a result is always recomputed from the operand decorations and the outcome of the operation, see `decoration::propagate`.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::{DecoratedInterval, Decoration, Interval};
//!
//! let x = DecoratedInterval::new(1.0, 2.0).unwrap();
//! assert_eq!(x.decoration(), Decoration::Com);
//! let y = DecoratedInterval::new(1.0, std::f64::INFINITY).unwrap();
//! assert_eq!(y.decoration(), Decoration::Dac);
//!
//! let bare = Interval::new(0.0, 1.0).unwrap();
//! let z = DecoratedInterval::from_bare_and_decoration(bare, Decoration::Def);
//! assert_eq!(z.interval_part().unwrap(), bare);
//! ```

use crate::bound::Bound;
use crate::decoration::{self, Decoration};
use crate::exception::{self, ExceptionKind, Result};
use crate::interval::Interval;
use crate::ops::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Neg;
use trilean::SKleene;

#[derive(Debug, Copy, Clone)]
pub struct DecoratedInterval<B> {
  bare: Interval<B>,
  dec: Decoration
}

impl<B: Bound> DecoratedInterval<B>
{
  /// Builds `[lb, ub]` decorated with `com`, or `dac` when unbounded. Invalid bounds raise `undefined_operation` and yield NaI.
  pub fn new(lb: B, ub: B) -> Result<DecoratedInterval<B>> {
    if Interval::is_valid_bounds(lb, ub) {
      Ok(DecoratedInterval::from_bare(Interval::low_new(lb, ub)))
    }
    else {
      exception::raise(ExceptionKind::UndefinedOperation,
        "invalid decorated interval bounds: expected lb <= ub, lb < +inf and ub > -inf")?;
      Ok(DecoratedInterval::nai())
    }
  }

  /// Builds `[lb, ub]` with an explicit decoration, adjusted as in `from_bare_and_decoration`.
  pub fn new_dec(lb: B, ub: B, dec: Decoration) -> Result<DecoratedInterval<B>> {
    if Interval::is_valid_bounds(lb, ub) {
      Ok(DecoratedInterval::from_bare_and_decoration(Interval::low_new(lb, ub), dec))
    }
    else {
      exception::raise(ExceptionKind::UndefinedOperation,
        "invalid decorated interval bounds: expected lb <= ub, lb < +inf and ub > -inf")?;
      Ok(DecoratedInterval::nai())
    }
  }

  /// Decorates `bare` with the best decoration it can carry: `com` if common, `dac` if unbounded, `trv` if empty.
  pub fn from_bare(bare: Interval<B>) -> DecoratedInterval<B> {
    DecoratedInterval::decorate(bare, &[], SKleene::True)
  }

  /// Decorates `bare` with `dec`. `ill` yields NaI; the decoration is lowered to `trv` for an empty interval and to `dac` for an unbounded one.
  pub fn from_bare_and_decoration(bare: Interval<B>, dec: Decoration) -> DecoratedInterval<B> {
    if dec == Decoration::Ill {
      DecoratedInterval::nai()
    }
    else {
      DecoratedInterval::decorate(bare, &[dec], SKleene::True)
    }
  }

  /// Decorates `bare` with the decoration of interchange code `tag`. An unknown tag raises `invalid_operand` and yields NaI.
  pub fn from_bare_and_tag(bare: Interval<B>, tag: u8) -> Result<DecoratedInterval<B>> {
    match Decoration::from_tag(tag) {
      Some(dec) => Ok(DecoratedInterval::from_bare_and_decoration(bare, dec)),
      None => {
        exception::raise(ExceptionKind::InvalidOperand,
          &format!("{} is not a decoration code", tag))?;
        Ok(DecoratedInterval::nai())
      }
    }
  }

  pub(crate) fn low_new(bare: Interval<B>, dec: Decoration) -> DecoratedInterval<B> {
    DecoratedInterval { bare, dec }
  }

  /// Result of an operation: `bare` decorated from the operand decorations and the domain verdict.
  pub(crate) fn decorate(bare: Interval<B>, operands: &[Decoration], domain: SKleene) -> DecoratedInterval<B> {
    let dec = decoration::propagate(operands, domain, bare.is_bounded(), bare.is_empty());
    DecoratedInterval::low_new(bare, dec)
  }

  pub fn nai() -> DecoratedInterval<B> {
    DecoratedInterval::low_new(Interval::empty(), Decoration::Ill)
  }

  pub fn empty() -> DecoratedInterval<B> {
    DecoratedInterval::low_new(Interval::empty(), Decoration::Trv)
  }

  pub fn entire() -> DecoratedInterval<B> {
    DecoratedInterval::low_new(Interval::entire(), Decoration::Dac)
  }

  /// The bare part. NaI raises `interval_part_of_nai` and yields the empty interval.
  pub fn interval_part(&self) -> Result<Interval<B>> {
    if self.is_nai() {
      exception::raise(ExceptionKind::IntervalPartOfNai, "NaI has no interval part")?;
      Ok(Interval::empty())
    }
    else {
      Ok(self.bare)
    }
  }

  /// Bare part without NaI check, for operations that handled NaI beforehand.
  pub(crate) fn bare(&self) -> &Interval<B> {
    debug_assert!(!self.is_nai(), "The bare part of NaI is not an interval.");
    &self.bare
  }

  pub fn decoration(&self) -> Decoration {
    self.dec
  }

  pub fn is_nai(&self) -> bool {
    self.dec == Decoration::Ill
  }

  /// Infimum of the bare part; `NaN` for NaI.
  pub fn lower(&self) -> B {
    if self.is_nai() { B::nan() } else { self.bare.lower() }
  }

  /// Supremum of the bare part; `NaN` for NaI.
  pub fn upper(&self) -> B {
    if self.is_nai() { B::nan() } else { self.bare.upper() }
  }

  /// NaI is not empty.
  pub fn is_empty(&self) -> bool {
    !self.is_nai() && self.bare.is_empty()
  }

  pub fn is_entire(&self) -> bool {
    !self.is_nai() && self.bare.is_entire()
  }

  pub fn is_common(&self) -> bool {
    !self.is_nai() && self.bare.is_common()
  }

  /// Outward-rounded conversion to another bound type. The decoration is lowered to `dac` if the bare part becomes unbounded.
  pub fn convert<U: Bound>(&self) -> DecoratedInterval<U> {
    if self.is_nai() {
      DecoratedInterval::nai()
    }
    else {
      DecoratedInterval::from_bare_and_decoration(self.bare.convert(), self.dec)
    }
  }
}

impl<B: Bound> PartialEq for DecoratedInterval<B>
{
  fn eq(&self, other: &DecoratedInterval<B>) -> bool {
    if self.is_nai() || other.is_nai() {
      self.is_nai() && other.is_nai()
    }
    else {
      self.dec == other.dec && self.bare == other.bare
    }
  }
}

impl<B: Bound> Neg for DecoratedInterval<B>
{
  type Output = DecoratedInterval<B>;

  fn neg(self) -> DecoratedInterval<B> {
    if self.is_nai() { self }
    else { DecoratedInterval::low_new(-self.bare, self.dec) }
  }
}

impl<B: Bound> Whole for DecoratedInterval<B>
{
  fn whole() -> DecoratedInterval<B> {
    DecoratedInterval::entire()
  }
}

impl<B: Bound> Width for DecoratedInterval<B>
{
  type Output = B;

  fn width(&self) -> B {
    if self.is_nai() { B::nan() }
    else { self.bare.width() }
  }
}

impl<B: Bound> Serialize for DecoratedInterval<B>
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
    S: Serializer
  {
    if self.is_nai() {
      serializer.serialize_none()
    }
    else {
      serializer.serialize_some(&(self.bare, self.dec))
    }
  }
}

impl<'de, B: Bound> Deserialize<'de> for DecoratedInterval<B>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<DecoratedInterval<B>, D::Error> where
    D: Deserializer<'de>
  {
    let value = Option::<(Interval<B>, Decoration)>::deserialize(deserializer)?;
    Ok(value.map_or(DecoratedInterval::nai(),
      |(bare, dec)| DecoratedInterval::from_bare_and_decoration(bare, dec)))
  }
}
