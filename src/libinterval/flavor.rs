// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Flavors of interval arithmetic.
//!
//! A flavor fixes what an interval is and the meaning of the core operations on it. Code written against the `Flavor` trait is independent of the representation it computes with. The only flavor provided is `SetBased`, where intervals are closed connected subsets of the reals, possibly empty or unbounded.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::{Flavor, SetBased};
//!
//! fn overlapping_part<F: Flavor>(x: &F::Bare, y: &F::Bare) -> F::Bare {
//!   F::intersect(x, y)
//! }
//!
//! type F64 = SetBased<f64>;
//! let x = F64::from_bounds(1.0, 3.0).unwrap();
//! let y = F64::from_bounds(2.0, 4.0).unwrap();
//! assert_eq!(overlapping_part::<F64>(&x, &y), F64::from_bounds(2.0, 3.0).unwrap());
//! ```

use crate::bound::Bound;
use crate::cancel;
use crate::decorated::DecoratedInterval;
use crate::decoration::{self, Decoration};
use crate::exception::Result;
use crate::interval::Interval;
use crate::overlap::{self, OverlappingState};
use crate::reverse;
use crate::set_operations;
use std::marker::PhantomData;
use trilean::SKleene;

pub trait Flavor
{
  type Bound: Bound;
  type Bare: Copy;
  type Decorated: Copy;

  fn empty() -> Self::Bare;
  fn entire() -> Self::Bare;
  fn from_bounds(lb: Self::Bound, ub: Self::Bound) -> Result<Self::Bare>;
  fn lower(x: &Self::Bare) -> Self::Bound;
  fn upper(x: &Self::Bare) -> Self::Bound;

  fn nai() -> Self::Decorated;
  fn from_bare_and_decoration(bare: Self::Bare, dec: Decoration) -> Self::Decorated;
  fn decoration_of(x: &Self::Decorated) -> Decoration;
  fn is_nai(x: &Self::Decorated) -> bool;
  fn interval_part(x: &Self::Decorated) -> Result<Self::Bare>;

  /// Decoration of a result, see `decoration::propagate`.
  fn propagate(operands: &[Decoration], domain: SKleene, bounded: bool, empty: bool) -> Decoration {
    decoration::propagate(operands, domain, bounded, empty)
  }

  fn intersect(x: &Self::Bare, y: &Self::Bare) -> Self::Bare;
  fn hull(x: &Self::Bare, y: &Self::Bare) -> Self::Bare;
  fn intersect_dec(x: &Self::Decorated, y: &Self::Decorated) -> Self::Decorated;
  fn hull_dec(x: &Self::Decorated, y: &Self::Decorated) -> Self::Decorated;

  fn overlap(x: &Self::Bare, y: &Self::Bare) -> Result<OverlappingState>;
  fn overlap_dec(x: &Self::Decorated, y: &Self::Decorated) -> Result<OverlappingState>;

  fn div_to_pair(x: &Self::Bare, y: &Self::Bare) -> (Self::Bare, Self::Bare);
  fn div_to_pair_dec(x: &Self::Decorated, y: &Self::Decorated) -> (Self::Decorated, Self::Decorated);
  fn mul_rev_to_pair(b: &Self::Bare, c: &Self::Bare) -> (Self::Bare, Self::Bare);
  fn mul_rev_to_pair_dec(b: &Self::Decorated, c: &Self::Decorated) -> (Self::Decorated, Self::Decorated);

  fn cancel_minus(a: &Self::Bare, b: &Self::Bare) -> Self::Bare;
  fn cancel_plus(a: &Self::Bare, b: &Self::Bare) -> Self::Bare;
  fn cancel_minus_dec(a: &Self::Decorated, b: &Self::Decorated) -> Self::Decorated;
  fn cancel_plus_dec(a: &Self::Decorated, b: &Self::Decorated) -> Self::Decorated;
}

/// The set-based flavor over the bound type `B`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SetBased<B> {
  phantom: PhantomData<B>
}

impl<B: Bound> Flavor for SetBased<B>
{
  type Bound = B;
  type Bare = Interval<B>;
  type Decorated = DecoratedInterval<B>;

  fn empty() -> Interval<B> { Interval::empty() }
  fn entire() -> Interval<B> { Interval::entire() }

  fn from_bounds(lb: B, ub: B) -> Result<Interval<B>> {
    Interval::new(lb, ub)
  }

  fn lower(x: &Interval<B>) -> B { x.lower() }
  fn upper(x: &Interval<B>) -> B { x.upper() }

  fn nai() -> DecoratedInterval<B> { DecoratedInterval::nai() }

  fn from_bare_and_decoration(bare: Interval<B>, dec: Decoration) -> DecoratedInterval<B> {
    DecoratedInterval::from_bare_and_decoration(bare, dec)
  }

  fn decoration_of(x: &DecoratedInterval<B>) -> Decoration { x.decoration() }
  fn is_nai(x: &DecoratedInterval<B>) -> bool { x.is_nai() }

  fn interval_part(x: &DecoratedInterval<B>) -> Result<Interval<B>> {
    x.interval_part()
  }

  fn intersect(x: &Interval<B>, y: &Interval<B>) -> Interval<B> {
    set_operations::intersect(x, y)
  }

  fn hull(x: &Interval<B>, y: &Interval<B>) -> Interval<B> {
    set_operations::hull(x, y)
  }

  fn intersect_dec(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> DecoratedInterval<B> {
    set_operations::intersect_dec(x, y)
  }

  fn hull_dec(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> DecoratedInterval<B> {
    set_operations::hull_dec(x, y)
  }

  fn overlap(x: &Interval<B>, y: &Interval<B>) -> Result<OverlappingState> {
    overlap::overlap(x, y)
  }

  fn overlap_dec(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>) -> Result<OverlappingState> {
    overlap::overlap_dec(x, y)
  }

  fn div_to_pair(x: &Interval<B>, y: &Interval<B>) -> (Interval<B>, Interval<B>) {
    reverse::div_to_pair(x, y)
  }

  fn div_to_pair_dec(x: &DecoratedInterval<B>, y: &DecoratedInterval<B>)
    -> (DecoratedInterval<B>, DecoratedInterval<B>)
  {
    reverse::div_to_pair_dec(x, y)
  }

  fn mul_rev_to_pair(b: &Interval<B>, c: &Interval<B>) -> (Interval<B>, Interval<B>) {
    reverse::mul_rev_to_pair(b, c)
  }

  fn mul_rev_to_pair_dec(b: &DecoratedInterval<B>, c: &DecoratedInterval<B>)
    -> (DecoratedInterval<B>, DecoratedInterval<B>)
  {
    reverse::mul_rev_to_pair_dec(b, c)
  }

  fn cancel_minus(a: &Interval<B>, b: &Interval<B>) -> Interval<B> {
    cancel::cancel_minus(a, b)
  }

  fn cancel_plus(a: &Interval<B>, b: &Interval<B>) -> Interval<B> {
    cancel::cancel_plus(a, b)
  }

  fn cancel_minus_dec(a: &DecoratedInterval<B>, b: &DecoratedInterval<B>) -> DecoratedInterval<B> {
    cancel::cancel_minus_dec(a, b)
  }

  fn cancel_plus_dec(a: &DecoratedInterval<B>, b: &DecoratedInterval<B>) -> DecoratedInterval<B> {
    cancel::cancel_plus_dec(a, b)
  }
}
