// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Division and two-output reverse multiplication.
//!
//! Dividing by an interval straddling zero gives a set made of two unbounded pieces. `div` returns its hull (the entire interval), `div_to_pair` returns the two pieces separately. `mul_rev_to_pair(b, c)` encloses `{x | ∃β ∈ b, γ ∈ c: β x = γ}` with at most two disjoint intervals.
//!
//! Every bound is computed with a single division rounded outward.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::Interval;
//! use ieee1788::reverse::{div_to_pair, mul_rev_to_pair};
//!
//! let x = Interval::new(1.0, 2.0).unwrap();
//! let y = Interval::new(-1.0, 4.0).unwrap();
//! let (neg, pos) = div_to_pair(&x, &y);
//! assert_eq!(neg, Interval::new(std::f64::NEG_INFINITY, -1.0).unwrap());
//! assert_eq!(pos, Interval::new(0.25, std::f64::INFINITY).unwrap());
//!
//! let b = Interval::new(-1.0, 2.0).unwrap();
//! let c = Interval::new(3.0, 4.0).unwrap();
//! let (first, second) = mul_rev_to_pair(&b, &c);
//! assert_eq!(first.upper(), -3.0);
//! assert_eq!(second.lower(), 1.5);
//! ```

use crate::bound::{self, Bound, Rounding};
use crate::decorated::DecoratedInterval;
use crate::decoration::Decoration;
use crate::interval::Interval;
use crate::precision::{promote2, promote3, Promote, Promoted, Promoted3};
use crate::set_operations::intersect;
use gcollections::ops::Contains;
use trilean::SKleene;

fn down<B: Bound>(n: B, d: B) -> B {
  bound::div(n, d, Rounding::Down)
}

fn up<B: Bound>(n: B, d: B) -> B {
  bound::div(n, d, Rounding::Up)
}

fn is_zero<B: Bound>(x: &Interval<B>) -> bool {
  x.lower() == B::zero() && x.upper() == B::zero()
}

fn straddles_zero<B: Bound>(x: &Interval<B>) -> bool {
  x.lower() < B::zero() && B::zero() < x.upper()
}

fn from_lower<B: Bound>(lb: B) -> Interval<B> {
  Interval::low_new(lb, B::infinity())
}

fn from_upper<B: Bound>(ub: B) -> Interval<B> {
  Interval::low_new(B::neg_infinity(), ub)
}

/// Enclosure of `{x / y | x ∈ x, y ∈ y, y ≠ 0}`.
pub fn div<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> Interval<B> {
  if x.is_empty() || y.is_empty() || is_zero(y) {
    return Interval::empty();
  }
  let (a, b) = (x.lower(), x.upper());
  let (c, d) = (y.lower(), y.upper());
  let zero = B::zero();
  if d < zero {
    if b <= zero { Interval::low_new(down(b, c), up(a, d)) }
    else if a < zero { Interval::low_new(down(b, d), up(a, d)) }
    else { Interval::low_new(down(b, d), up(a, c)) }
  }
  else if c > zero {
    if b <= zero { Interval::low_new(down(a, c), up(b, d)) }
    else if a < zero { Interval::low_new(down(a, c), up(b, c)) }
    else { Interval::low_new(down(a, d), up(b, c)) }
  }
  else if is_zero(x) {
    *x
  }
  else if c < zero && zero < d {
    Interval::entire()
  }
  // y = [0, d]
  else if c == zero {
    if b < zero { from_upper(up(b, d)) }
    else if a > zero { from_lower(down(a, d)) }
    else if a == zero { from_lower(zero) }
    else if b == zero { from_upper(zero) }
    else { Interval::entire() }
  }
  // y = [c, 0]
  else {
    if b < zero { from_lower(down(b, c)) }
    else if a > zero { from_upper(up(a, c)) }
    else if a == zero { from_upper(zero) }
    else if b == zero { from_lower(zero) }
    else { Interval::entire() }
  }
}

/// Decorated `div`. The division is defined everywhere when `0 ∉ y`, nowhere when `y = [0, 0]`.
pub fn div_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> DecoratedInterval<B> {
  if x.is_nai() || y.is_nai() {
    return DecoratedInterval::nai();
  }
  let (bx, by) = (x.bare(), y.bare());
  let domain =
    if !by.contains(&B::zero()) { SKleene::True }
    else if is_zero(by) { SKleene::False }
    else { SKleene::Unknown };
  DecoratedInterval::decorate(div(bx, by), &[x.decoration(), y.decoration()], domain)
}

/// `x / y` split around zero.
///
/// When `y` straddles zero, `x` is divided by `[y.lower, -0]` and by `[+0, y.upper]`, in that order. Otherwise the result is `(div(x, y), ∅)`.
pub fn div_to_pair<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> (Interval<B>, Interval<B>) {
  if x.is_empty() || y.is_empty() {
    (Interval::empty(), Interval::empty())
  }
  else if straddles_zero(y) {
    let neg = Interval::low_new(y.lower(), -B::zero());
    let pos = Interval::low_new(B::zero(), y.upper());
    (div(x, &neg), div(x, &pos))
  }
  else {
    (div(x, y), Interval::empty())
  }
}

/// Decorated `div_to_pair`. Both pieces are `trv` when `y` straddles zero, otherwise the first one is decorated as in `div_dec`.
pub fn div_to_pair_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>)
  -> (DecoratedInterval<B>, DecoratedInterval<B>)
{
  if x.is_nai() || y.is_nai() {
    (DecoratedInterval::nai(), DecoratedInterval::nai())
  }
  else if straddles_zero(y.bare()) {
    let (first, second) = div_to_pair(x.bare(), y.bare());
    (DecoratedInterval::from_bare_and_decoration(first, Decoration::Trv),
     DecoratedInterval::from_bare_and_decoration(second, Decoration::Trv))
  }
  else {
    (div_dec(x, y), DecoratedInterval::empty())
  }
}

/// `mul_rev_to_pair_within(b, c, entire)`.
pub fn mul_rev_to_pair<B: Bound>(b: &Interval<B>, c: &Interval<B>) -> (Interval<B>, Interval<B>) {
  mul_rev_to_pair_within(b, c, &Interval::entire())
}

/// Enclosure of `{x ∈ context | ∃β ∈ b, γ ∈ c: β x = γ}` by two disjoint intervals.
///
/// The pieces are ordered increasingly. When the set is enclosed by a single interval, it is returned first and the second piece is empty.
pub fn mul_rev_to_pair_within<B: Bound>(b: &Interval<B>, c: &Interval<B>, context: &Interval<B>)
  -> (Interval<B>, Interval<B>)
{
  let (first, second) = mul_rev_pieces(b, c);
  let first = intersect(&first, context);
  let second = intersect(&second, context);
  if first.is_empty() {
    (second, first)
  }
  else {
    (first, second)
  }
}

fn mul_rev_pieces<B: Bound>(b: &Interval<B>, c: &Interval<B>) -> (Interval<B>, Interval<B>) {
  let empty = Interval::empty();
  let single = |x: Interval<B>| (x, Interval::empty());
  if b.is_empty() || c.is_empty() {
    return (empty, empty);
  }
  if b.is_entire() || c.is_entire() {
    return single(Interval::entire());
  }
  let zero = B::zero();
  let b_has_zero = b.contains(&zero);
  if is_zero(c) {
    return single(if b_has_zero { Interval::entire() } else { *c });
  }
  if is_zero(b) {
    return single(if c.contains(&zero) { Interval::entire() } else { empty });
  }
  let (b1, b2) = (b.lower(), b.upper());
  let (c1, c2) = (c.lower(), c.upper());
  if c2 < zero {
    if b2 < zero { single(Interval::low_new(down(c2, b1), up(c1, b2))) }
    else if b1 < zero && b2 == zero { single(from_lower(down(c2, b1))) }
    else if b1 < zero { (from_upper(up(c2, b2)), from_lower(down(c2, b1))) }
    else if b1 == zero { single(from_upper(up(c2, b2))) }
    else { single(Interval::low_new(down(c1, b1), up(c2, b2))) }
  }
  else if c1 <= zero {
    if b2 < zero { single(Interval::low_new(down(c2, b2), up(c1, b2))) }
    else if b_has_zero { single(Interval::entire()) }
    else { single(Interval::low_new(down(c1, b1), up(c2, b1))) }
  }
  else {
    if b2 < zero { single(Interval::low_new(down(c2, b2), up(c1, b1))) }
    else if b1 < zero && b2 == zero { single(from_upper(up(c1, b1))) }
    else if b1 < zero { (from_upper(up(c1, b1)), from_lower(down(c1, b2))) }
    else if b1 == zero { single(from_lower(down(c1, b2))) }
    else { single(Interval::low_new(down(c1, b2), up(c2, b1))) }
  }
}

/// Decorated `mul_rev_to_pair`. Both pieces are `trv`.
pub fn mul_rev_to_pair_dec<B: Bound>(b: &DecoratedInterval<B>, c: &DecoratedInterval<B>)
  -> (DecoratedInterval<B>, DecoratedInterval<B>)
{
  mul_rev_to_pair_within_dec(b, c, &DecoratedInterval::entire())
}

pub fn mul_rev_to_pair_within_dec<B: Bound>(b: &DecoratedInterval<B>, c: &DecoratedInterval<B>,
  context: &DecoratedInterval<B>) -> (DecoratedInterval<B>, DecoratedInterval<B>)
{
  if b.is_nai() || c.is_nai() || context.is_nai() {
    (DecoratedInterval::nai(), DecoratedInterval::nai())
  }
  else {
    let (first, second) = mul_rev_to_pair_within(b.bare(), c.bare(), context.bare());
    (DecoratedInterval::from_bare_and_decoration(first, Decoration::Trv),
     DecoratedInterval::from_bare_and_decoration(second, Decoration::Trv))
  }
}

/// `div` on operands of different bound types, rounded outward to `O`.
pub fn div_mixed<L, R, O>(x: &Interval<L>, y: &Interval<R>) -> Interval<O> where
  L: Bound + Promote<R>,
  R: Bound,
  O: Bound
{
  promote2(x, y, |a: &Interval<Promoted<L, R>>, b: &Interval<Promoted<L, R>>| div(a, b))
}

/// `mul_rev_to_pair_within` on operands of different bound types, both pieces rounded outward to `O`.
pub fn mul_rev_to_pair_mixed<B1, B2, B3, O>(b: &Interval<B1>, c: &Interval<B2>, context: &Interval<B3>)
  -> (Interval<O>, Interval<O>) where
  B1: Bound + Promote<B2>,
  B2: Bound,
  B3: Bound,
  Promoted<B1, B2>: Promote<B3>,
  O: Bound
{
  promote3(b, c, context,
    |b: &Interval<Promoted3<B1, B2, B3>>, c: &Interval<Promoted3<B1, B2, B3>>, x: &Interval<Promoted3<B1, B2, B3>>|
      mul_rev_to_pair_within(b, c, x))
}
