// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Intersection, convex hull and the boolean set relations.
//!
//! Bounds of the results are taken verbatim from the operands so no rounding happens here. The decorated versions return NaI when an operand is NaI, the relations return `false` in that case.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::Interval;
//! use ieee1788::set_operations::{intersect, hull, is_subset};
//!
//! let x = Interval::new(1.0, 3.0).unwrap();
//! let y = Interval::new(2.0, 4.0).unwrap();
//! assert_eq!(intersect(&x, &y), Interval::new(2.0, 3.0).unwrap());
//! assert_eq!(hull(&x, &y), Interval::new(1.0, 4.0).unwrap());
//! assert!(is_subset(&intersect(&x, &y), &x));
//! ```

use crate::bound::{self, Bound};
use crate::decorated::DecoratedInterval;
use crate::interval::Interval;
use crate::ops::Hull;
use crate::precision::{promote2, Promote, Promoted};
use gcollections::ops::{Disjoint, Intersection, Overlap, ProperSubset, Subset};
use trilean::SKleene;

pub fn intersect<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> Interval<B> {
  if is_disjoint(x, y) {
    Interval::empty()
  }
  else {
    Interval::low_new(
      bound::max(x.lower(), y.lower()),
      bound::min(x.upper(), y.upper()))
  }
}

/// Smallest interval containing `x` and `y`.
pub fn hull<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> Interval<B> {
  if x.is_empty() { *y }
  else if y.is_empty() { *x }
  else {
    Interval::low_new(
      bound::min(x.lower(), y.lower()),
      bound::max(x.upper(), y.upper()))
  }
}

/// No point in common. The empty interval is disjoint from everything.
pub fn is_disjoint<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> bool {
  x.is_empty() || y.is_empty()
  || x.upper() < y.lower()
  || y.upper() < x.lower()
}

/// `x ⊆ y`.
pub fn is_subset<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> bool {
  x.is_empty()
  || (!y.is_empty() && y.lower() <= x.lower() && x.upper() <= y.upper())
}

/// `x` is included in the interior of `y`. An infinite bound is interior to the same infinite bound.
pub fn is_interior<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> bool {
  x.is_empty()
  || (!y.is_empty()
    && (y.lower() < x.lower() || (y.lower() == B::neg_infinity() && x.lower() == B::neg_infinity()))
    && (x.upper() < y.upper() || (x.upper() == B::infinity() && y.upper() == B::infinity())))
}

/// Every point of `x` is less than or equal to every point of `y`.
pub fn precedes<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> bool {
  x.is_empty() || y.is_empty() || x.upper() <= y.lower()
}

/// Every point of `x` is less than every point of `y`.
pub fn strictly_precedes<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> bool {
  x.is_empty() || y.is_empty() || x.upper() < y.lower()
}

pub fn equal<B: Bound>(x: &Interval<B>, y: &Interval<B>) -> bool {
  x == y
}

fn both_bare<B: Bound, F>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>, relation: F) -> bool where
  F: FnOnce(&Interval<B>, &Interval<B>) -> bool
{
  !x.is_nai() && !y.is_nai() && relation(x.bare(), y.bare())
}

pub fn is_disjoint_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> bool {
  both_bare(x, y, is_disjoint)
}

pub fn is_subset_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> bool {
  both_bare(x, y, is_subset)
}

pub fn is_interior_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> bool {
  both_bare(x, y, is_interior)
}

pub fn precedes_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> bool {
  both_bare(x, y, precedes)
}

pub fn strictly_precedes_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> bool {
  both_bare(x, y, strictly_precedes)
}

/// Equality of the bare parts; the decorations are ignored.
pub fn equal_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> bool {
  both_bare(x, y, equal)
}

fn combine<B: Bound, F>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>, op: F) -> DecoratedInterval<B> where
  F: FnOnce(&Interval<B>, &Interval<B>) -> Interval<B>
{
  if x.is_nai() || y.is_nai() {
    DecoratedInterval::nai()
  }
  else {
    DecoratedInterval::decorate(op(x.bare(), y.bare()),
      &[x.decoration(), y.decoration()], SKleene::True)
  }
}

pub fn intersect_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> DecoratedInterval<B> {
  combine(x, y, intersect)
}

pub fn hull_dec<B: Bound>(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> DecoratedInterval<B> {
  combine(x, y, hull)
}

/// `intersect` on operands of different bound types, rounded outward to `O`.
pub fn intersect_mixed<L, R, O>(x: &Interval<L>, y: &Interval<R>) -> Interval<O> where
  L: Bound + Promote<R>,
  R: Bound,
  O: Bound
{
  promote2(x, y, |a: &Interval<Promoted<L, R>>, b: &Interval<Promoted<L, R>>| intersect(a, b))
}

/// `hull` on operands of different bound types, rounded outward to `O`.
pub fn hull_mixed<L, R, O>(x: &Interval<L>, y: &Interval<R>) -> Interval<O> where
  L: Bound + Promote<R>,
  R: Bound,
  O: Bound
{
  promote2(x, y, |a: &Interval<Promoted<L, R>>, b: &Interval<Promoted<L, R>>| hull(a, b))
}

impl<B: Bound> Intersection for Interval<B>
{
  type Output = Interval<B>;

  fn intersection(&self, rhs: &Interval<B>) -> Interval<B> {
    intersect(self, rhs)
  }
}

impl<B: Bound> Intersection for DecoratedInterval<B>
{
  type Output = DecoratedInterval<B>;

  fn intersection(&self, rhs: &DecoratedInterval<B>) -> DecoratedInterval<B> {
    intersect_dec(self, rhs)
  }
}

impl<B: Bound> Disjoint for Interval<B>
{
  fn is_disjoint(&self, rhs: &Interval<B>) -> bool {
    is_disjoint(self, rhs)
  }
}

impl<B: Bound> Overlap for Interval<B>
{
  fn overlap(&self, rhs: &Interval<B>) -> bool {
    !is_disjoint(self, rhs)
  }
}

impl<B: Bound> Subset for Interval<B>
{
  fn is_subset(&self, rhs: &Interval<B>) -> bool {
    is_subset(self, rhs)
  }
}

impl<B: Bound> ProperSubset for Interval<B>
{
  fn is_proper_subset(&self, rhs: &Interval<B>) -> bool {
    is_subset(self, rhs) && self != rhs
  }
}

impl<B: Bound> Hull for Interval<B>
{
  type Output = Interval<B>;

  fn hull(&self, rhs: &Interval<B>) -> Interval<B> {
    hull(self, rhs)
  }
}

/// Hull with a point. A point that is not a finite number leaves the interval unchanged.
impl<B: Bound> Hull<B> for Interval<B>
{
  type Output = Interval<B>;

  fn hull(&self, rhs: &B) -> Interval<B> {
    if rhs.is_finite() {
      hull(self, &Interval::low_new(*rhs, *rhs))
    }
    else {
      *self
    }
  }
}

impl<B: Bound> Hull for DecoratedInterval<B>
{
  type Output = DecoratedInterval<B>;

  fn hull(&self, rhs: &DecoratedInterval<B>) -> DecoratedInterval<B> {
    hull_dec(self, rhs)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::decoration::Decoration::*;

  const inf: f64 = std::f64::INFINITY;

  fn i(lb: f64, ub: f64) -> Interval<f64> {
    Interval::new(lb, ub).unwrap()
  }

  fn empty() -> Interval<f64> {
    Interval::empty()
  }

  fn entire() -> Interval<f64> {
    Interval::entire()
  }

  #[test]
  fn intersect_test() {
    let cases = vec![
      (i(1.0, 3.0), i(2.0, 4.0), i(2.0, 3.0)),
      (i(1.0, 2.0), i(2.0, 3.0), i(2.0, 2.0)),
      (i(1.0, 2.0), i(3.0, 4.0), empty()),
      (i(1.0, 4.0), i(2.0, 3.0), i(2.0, 3.0)),
      (empty(), i(1.0, 2.0), empty()),
      (empty(), empty(), empty()),
      (entire(), i(-inf, 0.0), i(-inf, 0.0)),
      (i(-inf, 2.0), i(1.0, inf), i(1.0, 2.0)),
    ];
    for (x, y, expected) in cases {
      assert_eq!(intersect(&x, &y), expected, "intersect({:?}, {:?})", x, y);
      assert_eq!(intersect(&y, &x), expected, "intersect({:?}, {:?})", y, x);
      assert_eq!(x.intersection(&y), expected);
    }
  }

  #[test]
  fn hull_test() {
    let cases = vec![
      (i(1.0, 3.0), i(2.0, 4.0), i(1.0, 4.0)),
      (i(1.0, 2.0), i(5.0, 6.0), i(1.0, 6.0)),
      (empty(), i(1.0, 2.0), i(1.0, 2.0)),
      (empty(), empty(), empty()),
      (i(-inf, 0.0), i(0.0, inf), entire()),
      (i(-1.0, 1.0), i(0.0, 0.0), i(-1.0, 1.0)),
    ];
    for (x, y, expected) in cases {
      assert_eq!(hull(&x, &y), expected, "hull({:?}, {:?})", x, y);
      assert_eq!(hull(&y, &x), expected, "hull({:?}, {:?})", y, x);
      assert_eq!(x.hull(&y), expected);
    }
  }

  #[test]
  fn hull_point_test() {
    let cases = vec![
      (i(1.0, 3.0), 5.0, i(1.0, 5.0)),
      (i(1.0, 3.0), 2.0, i(1.0, 3.0)),
      (empty(), 2.0, i(2.0, 2.0)),
      (i(1.0, 3.0), std::f64::NAN, i(1.0, 3.0)),
      (empty(), inf, empty()),
    ];
    for (x, p, expected) in cases {
      assert_eq!(x.hull(&p), expected, "hull({:?}, {})", x, p);
    }
  }

  #[test]
  fn relations_test() {
    // x, y, disjoint, subset, interior, precedes, strictly_precedes
    let cases = vec![
      (i(1.0, 2.0), i(3.0, 4.0), true, false, false, true, true),
      (i(1.0, 2.0), i(2.0, 3.0), false, false, false, true, false),
      (i(1.0, 2.0), i(0.0, 3.0), false, true, true, false, false),
      (i(1.0, 2.0), i(1.0, 3.0), false, true, false, false, false),
      (i(1.0, 2.0), i(1.0, 2.0), false, true, false, false, false),
      (i(2.0, 2.0), i(2.0, 2.0), false, true, false, true, false),
      (i(-inf, 2.0), i(-inf, 3.0), false, true, true, false, false),
      (entire(), entire(), false, true, true, false, false),
      (empty(), i(1.0, 2.0), true, true, true, true, true),
      (i(1.0, 2.0), empty(), true, false, false, true, true),
      (empty(), empty(), true, true, true, true, true),
    ];
    for (x, y, disjoint, subset, interior, prec, strict) in cases {
      assert_eq!(is_disjoint(&x, &y), disjoint, "is_disjoint({:?}, {:?})", x, y);
      assert_eq!(is_disjoint(&y, &x), disjoint, "is_disjoint({:?}, {:?})", y, x);
      assert_eq!(x.overlap(&y), !disjoint, "overlap({:?}, {:?})", x, y);
      assert_eq!(is_subset(&x, &y), subset, "is_subset({:?}, {:?})", x, y);
      assert_eq!(is_interior(&x, &y), interior, "is_interior({:?}, {:?})", x, y);
      assert_eq!(precedes(&x, &y), prec, "precedes({:?}, {:?})", x, y);
      assert_eq!(strictly_precedes(&x, &y), strict, "strictly_precedes({:?}, {:?})", x, y);
    }
  }

  #[test]
  fn gcollections_relations_test() {
    let x = i(1.0, 2.0);
    let y = i(0.0, 3.0);
    assert!(x.is_subset(&y));
    assert!(x.is_proper_subset(&y));
    assert!(!x.is_proper_subset(&x));
    assert!(x.is_subset(&x));
    assert!(Disjoint::is_disjoint(&x, &i(5.0, 6.0)));
    assert!(empty().is_proper_subset(&x));
  }

  #[test]
  fn decorated_set_operations_test() {
    let x = DecoratedInterval::new(1.0, 3.0).unwrap();
    let y = DecoratedInterval::new_dec(2.0, 4.0, Def).unwrap();
    let z = DecoratedInterval::new(5.0, inf).unwrap();
    let nai = DecoratedInterval::nai();

    let res = intersect_dec(&x, &y);
    assert_eq!(res, DecoratedInterval::new_dec(2.0, 3.0, Def).unwrap());
    let res = intersect_dec(&x, &z);
    assert!(res.is_empty());
    assert_eq!(res.decoration(), Trv);
    let res = hull_dec(&x, &z);
    assert_eq!(res.interval_part().unwrap(), i(1.0, inf));
    assert_eq!(res.decoration(), Dac);
    assert_eq!(x.hull(&x), x);
    assert_eq!(x.intersection(&x), x);

    assert!(intersect_dec(&x, &nai).is_nai());
    assert!(hull_dec(&nai, &x).is_nai());
  }

  #[test]
  fn decorated_relations_test() {
    let x = DecoratedInterval::new(1.0, 2.0).unwrap();
    let y = DecoratedInterval::new_dec(0.0, 3.0, Trv).unwrap();
    let nai = DecoratedInterval::nai();
    assert!(is_subset_dec(&x, &y));
    assert!(is_interior_dec(&x, &y));
    assert!(!is_disjoint_dec(&x, &y));
    assert!(equal_dec(&x, &DecoratedInterval::new_dec(1.0, 2.0, Def).unwrap()));
    assert!(precedes_dec(&DecoratedInterval::empty(), &x));
    assert!(!strictly_precedes_dec(&x, &y));
    for other in vec![x, y, nai] {
      assert!(!is_subset_dec(&nai, &other));
      assert!(!is_disjoint_dec(&other, &nai));
      assert!(!is_interior_dec(&nai, &other));
      assert!(!precedes_dec(&other, &nai));
      assert!(!strictly_precedes_dec(&nai, &other));
      assert!(!equal_dec(&nai, &other));
    }
  }

  #[test]
  fn mixed_test() {
    let x: Interval<f32> = Interval::new(1.0, 3.0).unwrap();
    let y: Interval<f64> = Interval::new(0.1, 2.0).unwrap();
    let res: Interval<f64> = intersect_mixed(&x, &y);
    assert_eq!(res, i(1.0, 2.0));
    let res: Interval<f64> = hull_mixed(&x, &y);
    assert_eq!(res, i(0.1, 3.0));
    let res: Interval<f32> = hull_mixed(&x, &y);
    assert!((res.lower() as f64) < 0.1);
    assert_eq!(res.upper(), 3.0);
  }
}
