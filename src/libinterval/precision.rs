// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mixed-precision promotion.
//!
//! Operations mixing intervals with different bound types first resolve the widest bound type among the operands, convert every operand to it, compute with the single-type implementation, and finally round the result outward to the bound type requested at the call site.
//!
//! The widest type is resolved statically by the `Promote` trait. It is only implemented between formats of the same radix family (IEEE 754 binary), so mixing incomparable formats is a type error rather than a runtime failure.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::Interval;
//! use ieee1788::set_operations::hull_mixed;
//!
//! let x: Interval<f64> = Interval::new(0.0, 0.1).unwrap();
//! let y: Interval<f32> = Interval::new(-1.0, 0.0).unwrap();
//! let h: Interval<f32> = hull_mixed(&x, &y);
//! assert_eq!(h.lower(), -1.0);
//! assert!(h.upper() as f64 > 0.1);
//! ```

use crate::bound::Bound;
use crate::decorated::DecoratedInterval;
use crate::exception::Result;
use crate::interval::Interval;
use crate::overlap::OverlappingState;

/// Supported bound formats, ordered by precision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
  Binary32,
  Binary64
}

impl Precision
{
  pub const fn widest(self, other: Precision) -> Precision {
    if (self as u8) < (other as u8) { other } else { self }
  }
}

/// Resolution of the widest bound type between `Self` and `Rhs`.
pub trait Promote<Rhs: Bound = Self>: Bound
{
  type Output: Bound;
}

// Takes the bound types by increasing precision and promotes every pair to the wider one. The listed order is checked against `Bound::PRECISION` at compile time.
macro_rules! promote_impl
{
  ($t:ty) =>
  {
    impl Promote<$t> for $t {
      type Output = $t;
    }
  };
  ($narrow:ty, $($wide:ty),+) =>
  {
    promote_impl!($narrow);
    $(
      const _: () = assert!(
        (<$narrow as Bound>::PRECISION as u8) < (<$wide as Bound>::PRECISION as u8)
        && (<$narrow as Bound>::PRECISION.widest(<$wide as Bound>::PRECISION) as u8)
          == (<$wide as Bound>::PRECISION as u8));

      impl Promote<$wide> for $narrow {
        type Output = $wide;
      }

      impl Promote<$narrow> for $wide {
        type Output = $wide;
      }
    )+
    promote_impl!($($wide),+);
  };
}

promote_impl!(f32, f64);

pub type Promoted<L, R> = <L as Promote<R>>::Output;
pub type Promoted3<A, B, C> = <Promoted<A, B> as Promote<C>>::Output;

/// Values whose bound type can be replaced, rounding outward.
pub trait Rebind
{
  type Bound: Bound;
  type With<U: Bound>;

  fn rebind<U: Bound>(&self) -> Self::With<U>;
}

impl<B: Bound> Rebind for Interval<B>
{
  type Bound = B;
  type With<U: Bound> = Interval<U>;

  fn rebind<U: Bound>(&self) -> Interval<U> {
    self.convert()
  }
}

impl<B: Bound> Rebind for DecoratedInterval<B>
{
  type Bound = B;
  type With<U: Bound> = DecoratedInterval<U>;

  fn rebind<U: Bound>(&self) -> DecoratedInterval<U> {
    self.convert()
  }
}

/// Conversion of an operation result back to the type requested by the caller.
pub trait Narrow<Out>
{
  fn narrow(self) -> Out;
}

impl<B: Bound, U: Bound> Narrow<Interval<U>> for Interval<B>
{
  fn narrow(self) -> Interval<U> {
    self.convert()
  }
}

impl<B: Bound, U: Bound> Narrow<DecoratedInterval<U>> for DecoratedInterval<B>
{
  fn narrow(self) -> DecoratedInterval<U> {
    self.convert()
  }
}

impl Narrow<OverlappingState> for OverlappingState
{
  fn narrow(self) -> OverlappingState {
    self
  }
}

impl<T, Out> Narrow<(Out, Out)> for (T, T) where
  T: Narrow<Out>
{
  fn narrow(self) -> (Out, Out) {
    (self.0.narrow(), self.1.narrow())
  }
}

impl<T, Out> Narrow<Result<Out>> for Result<T> where
  T: Narrow<Out>
{
  fn narrow(self) -> Result<Out> {
    self.map(Narrow::narrow)
  }
}

/// Promote-compute-narrow for two operands.
pub fn promote2<X, Y, T, Out, F>(x: &X, y: &Y, op: F) -> Out where
  X: Rebind,
  Y: Rebind,
  X::Bound: Promote<Y::Bound>,
  F: FnOnce(&X::With<Promoted<X::Bound, Y::Bound>>, &Y::With<Promoted<X::Bound, Y::Bound>>) -> T,
  T: Narrow<Out>
{
  let x = x.rebind::<Promoted<X::Bound, Y::Bound>>();
  let y = y.rebind::<Promoted<X::Bound, Y::Bound>>();
  op(&x, &y).narrow()
}

/// Promote-compute-narrow for three operands. The widest type is resolved pairwise, left to right.
pub fn promote3<X, Y, Z, T, Out, F>(x: &X, y: &Y, z: &Z, op: F) -> Out where
  X: Rebind,
  Y: Rebind,
  Z: Rebind,
  X::Bound: Promote<Y::Bound>,
  Promoted<X::Bound, Y::Bound>: Promote<Z::Bound>,
  F: FnOnce(&X::With<Promoted3<X::Bound, Y::Bound, Z::Bound>>,
            &Y::With<Promoted3<X::Bound, Y::Bound, Z::Bound>>,
            &Z::With<Promoted3<X::Bound, Y::Bound, Z::Bound>>) -> T,
  T: Narrow<Out>
{
  let x = x.rebind::<Promoted3<X::Bound, Y::Bound, Z::Bound>>();
  let y = y.rebind::<Promoted3<X::Bound, Y::Bound, Z::Bound>>();
  let z = z.rebind::<Promoted3<X::Bound, Y::Bound, Z::Bound>>();
  op(&x, &y, &z).narrow()
}
