// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cancellative subtraction and addition.
//!
//! `cancel_minus(a, b)` is the tightest `x` such that `b + x ⊇ a`; it recovers `x` from `a = b + x` when `b` is known. It is only defined when `a` is at least as wide as `b`, the widths being compared exactly. Otherwise, and for unbounded operands, the result is the entire interval.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::Interval;
//! use ieee1788::cancel::{cancel_minus, cancel_plus};
//!
//! let a = Interval::new(1.0, 5.0).unwrap();
//! let b = Interval::new(2.0, 3.0).unwrap();
//! assert_eq!(cancel_minus(&a, &b), Interval::new(-1.0, 2.0).unwrap());
//! assert_eq!(cancel_plus(&a, &b), Interval::new(4.0, 7.0).unwrap());
//! assert!(cancel_minus(&b, &a).is_entire());
//! ```

use crate::bound::{self, Bound, Rounding};
use crate::decorated::DecoratedInterval;
use crate::interval::Interval;
use crate::precision::{promote2, Promote, Promoted};
use std::cmp::Ordering;
use trilean::SKleene;

// `a` is empty, or both operands are bounded and `a` is at least as wide as `b`.
fn is_cancellable<B: Bound>(a: &Interval<B>, b: &Interval<B>) -> bool {
  a.is_empty()
  || (!b.is_empty()
    && a.is_bounded() && b.is_bounded()
    && bound::cmp_width(a.lower(), a.upper(), b.lower(), b.upper()) != Ordering::Less)
}

pub fn cancel_minus<B: Bound>(a: &Interval<B>, b: &Interval<B>) -> Interval<B> {
  if a.is_empty() {
    *a
  }
  else if !is_cancellable(a, b) {
    Interval::entire()
  }
  else {
    Interval::low_new(
      bound::sub(a.lower(), b.lower(), Rounding::Down),
      bound::sub(a.upper(), b.upper(), Rounding::Up))
  }
}

pub fn cancel_plus<B: Bound>(a: &Interval<B>, b: &Interval<B>) -> Interval<B> {
  cancel_minus(a, &-*b)
}

/// Decorated `cancel_minus`. The operation is considered undefined everywhere when it falls back to the entire interval.
pub fn cancel_minus_dec<B: Bound>(a: &DecoratedInterval<B>, b: &DecoratedInterval<B>) -> DecoratedInterval<B> {
  if a.is_nai() || b.is_nai() {
    return DecoratedInterval::nai();
  }
  let domain = if is_cancellable(a.bare(), b.bare()) { SKleene::True } else { SKleene::False };
  DecoratedInterval::decorate(cancel_minus(a.bare(), b.bare()),
    &[a.decoration(), b.decoration()], domain)
}

pub fn cancel_plus_dec<B: Bound>(a: &DecoratedInterval<B>, b: &DecoratedInterval<B>) -> DecoratedInterval<B> {
  cancel_minus_dec(a, &-*b)
}

/// `cancel_minus` on operands of different bound types, rounded outward to `O`.
pub fn cancel_minus_mixed<L, R, O>(a: &Interval<L>, b: &Interval<R>) -> Interval<O> where
  L: Bound + Promote<R>,
  R: Bound,
  O: Bound
{
  promote2(a, b, |a: &Interval<Promoted<L, R>>, b: &Interval<Promoted<L, R>>| cancel_minus(a, b))
}
