// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bound type of intervals and the correctly rounded primitives on it.
//!
//! A bound is an IEEE 754 binary floating-point number supporting `±∞` and `NaN`. Interval operations never use the rounding mode of the FPU: each directed operation is computed in round-to-nearest and then corrected with an error-free transformation (`TwoSum` for addition, a fused multiply-add residual for division). This keeps the primitives pure functions and safe to call from any thread.

use crate::precision::Precision;
use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Rounding direction of a primitive operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rounding {
  Down,
  Nearest,
  Up
}

/// Floating-point types usable as interval bounds.
///
/// Every supported format is narrower than or equal to binary64, so binary64 acts as the exchange format between bounds of different widths.
pub trait Bound: Float + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
  const PRECISION: Precision;

  /// Smallest representable value strictly greater than `self`. `NaN` and `+∞` are fixed points.
  fn next_up(self) -> Self;
  /// Largest representable value strictly smaller than `self`. `NaN` and `-∞` are fixed points.
  fn next_down(self) -> Self;
  /// Exact widening to binary64.
  fn as_binary64(self) -> f64;
  /// Rounds a binary64 value to this format in the direction `dir`.
  fn round_from_binary64(value: f64, dir: Rounding) -> Self;
}

macro_rules! binary_neighbours_impl
{
  ($t: ty) =>
  {
    fn next_up(self) -> $t {
      if self.is_nan() || self == <$t>::INFINITY {
        self
      }
      else if self == 0.0 {
        <$t>::from_bits(1)
      }
      else if self > 0.0 {
        <$t>::from_bits(self.to_bits() + 1)
      }
      else {
        <$t>::from_bits(self.to_bits() - 1)
      }
    }

    fn next_down(self) -> $t {
      -<$t as Bound>::next_up(-self)
    }
  }
}

impl Bound for f32
{
  const PRECISION: Precision = Precision::Binary32;

  binary_neighbours_impl!(f32);

  fn as_binary64(self) -> f64 {
    self as f64
  }

  fn round_from_binary64(value: f64, dir: Rounding) -> f32 {
    let nearest = value as f32;
    match dir {
      Rounding::Nearest => nearest,
      Rounding::Down if (nearest as f64) > value => <f32 as Bound>::next_down(nearest),
      Rounding::Up if (nearest as f64) < value => <f32 as Bound>::next_up(nearest),
      _ => nearest
    }
  }
}

impl Bound for f64
{
  const PRECISION: Precision = Precision::Binary64;

  binary_neighbours_impl!(f64);

  fn as_binary64(self) -> f64 {
    self
  }

  fn round_from_binary64(value: f64, _dir: Rounding) -> f64 {
    value
  }
}

/// Converts `value` to the bound type `B`, rounding in the direction `dir`.
pub fn round<B: Bound, U: Bound>(value: U, dir: Rounding) -> B {
  B::round_from_binary64(value.as_binary64(), dir)
}

/// Knuth's `TwoSum`: `a + b == s + e` exactly, with `s` the rounded-to-nearest sum.
fn two_sum<B: Float>(a: B, b: B) -> (B, B) {
  let s = a + b;
  let bb = s - a;
  let e = (a - (s - bb)) + (b - bb);
  (s, e)
}

fn half<B: Float>() -> B {
  B::one() / (B::one() + B::one())
}

// Replaces an infinite result of an operation on finite operands by the
// largest finite value when the rounding direction points toward zero.
fn overflow<B: Bound>(result: B, dir: Rounding) -> B {
  match dir {
    Rounding::Down if result > B::zero() => B::max_value(),
    Rounding::Up if result < B::zero() => -B::max_value(),
    _ => result
  }
}

fn step<B: Bound>(value: B, dir: Rounding) -> B {
  match dir {
    Rounding::Down => value.next_down(),
    Rounding::Up => value.next_up(),
    Rounding::Nearest => value
  }
}

/// `a + b` rounded in the direction `dir`.
pub fn add<B: Bound>(a: B, b: B, dir: Rounding) -> B {
  let s = a + b;
  if dir == Rounding::Nearest || s.is_nan() {
    return s;
  }
  if s.is_infinite() {
    return if a.is_infinite() || b.is_infinite() { s } else { overflow(s, dir) };
  }
  let (_, e) = two_sum(a, b);
  match dir {
    Rounding::Down if e < B::zero() => s.next_down(),
    Rounding::Up if e > B::zero() => s.next_up(),
    _ => s
  }
}

/// `a - b` rounded in the direction `dir`.
pub fn sub<B: Bound>(a: B, b: B, dir: Rounding) -> B {
  add(a, -b, dir)
}

/// `a / b` rounded in the direction `dir`.
///
/// Divisions involving an infinite or zero operand are exact in the extended reals and returned as is.
pub fn div<B: Bound>(a: B, b: B, dir: Rounding) -> B {
  let q = a / b;
  if dir == Rounding::Nearest || q.is_nan()
   || a.is_infinite() || b.is_infinite()
   || a.is_zero() || b.is_zero()
  {
    return q;
  }
  if q.is_infinite() {
    return overflow(q, dir);
  }
  // The residual is not exact when the quotient underflows.
  if q.abs() < B::min_positive_value() {
    return step(q, dir);
  }
  let r = (-q).mul_add(b, a);
  if r.is_zero() {
    return q;
  }
  // `a / b - q == r / b`.
  let below = (r < B::zero()) != (b < B::zero());
  match dir {
    Rounding::Down if below => q.next_down(),
    Rounding::Up if !below => q.next_up(),
    _ => q
  }
}

/// Total comparison of two non-`NaN` bounds, `None` if one of them is `NaN`.
pub fn compare<B: Bound>(a: B, b: B) -> Option<Ordering> {
  a.partial_cmp(&b)
}

/// Sign of `value`; both zeros compare `Equal`. `None` for `NaN`.
pub fn sign<B: Bound>(value: B) -> Option<Ordering> {
  compare(value, B::zero())
}

/// The smaller of two bounds; `NaN` is never returned if one bound is a number.
pub fn min<B: Bound>(a: B, b: B) -> B {
  if b < a || a.is_nan() { b } else { a }
}

/// The greater of two bounds; `NaN` is never returned if one bound is a number.
pub fn max<B: Bound>(a: B, b: B) -> B {
  if b > a || a.is_nan() { b } else { a }
}

/// Exactly compares `a_hi - a_lo` with `b_hi - b_lo`. All bounds must be finite.
pub fn cmp_width<B: Bound>(a_lo: B, a_hi: B, b_lo: B, b_hi: B) -> Ordering {
  debug_assert!(a_lo.is_finite() && a_hi.is_finite() && b_lo.is_finite() && b_hi.is_finite(),
    "Exact width comparison is only defined on finite bounds.");
  let (s1, e1) = two_sum(a_hi, -a_lo);
  let (s2, e2) = two_sum(b_hi, -b_lo);
  if s1.is_finite() && s2.is_finite() && e1.is_finite() && e2.is_finite() {
    match s1.partial_cmp(&s2) {
      Some(Ordering::Equal) | None => e1.partial_cmp(&e2).unwrap_or(Ordering::Equal),
      Some(order) => order
    }
  }
  else {
    let h = half::<B>();
    cmp_width(a_lo * h, a_hi * h, b_lo * h, b_hi * h)
  }
}
