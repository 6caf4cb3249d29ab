// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library implements the set-based flavor of the IEEE 1788 interval arithmetic standard. Every value is a closed real interval with binary floating-point bounds (or a decorated interval carrying provenance metadata) and every operation returns a guaranteed enclosure of the exact result under directed rounding.
//!
//! The crate focuses on the semantics layer shared by every arithmetic operation: the representation invariants of bare and decorated intervals, the decoration lattice, the sticky exception register, the overlapping relation, mixed-precision promotion, and the operations whose case analysis is entirely set-level (intersection, hull, two-output division and reverse multiplication, cancellative subtraction).
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::{Interval, OverlappingState};
//! use ieee1788::overlap::overlap;
//! use ieee1788::set_operations::{intersect, hull};
//!
//! let x = Interval::new(1.0, 3.0).unwrap();
//! let y = Interval::new(2.0, 4.0).unwrap();
//! assert_eq!(intersect(&x, &y), Interval::new(2.0, 3.0).unwrap());
//! assert_eq!(hull(&x, &y), Interval::new(1.0, 4.0).unwrap());
//! assert_eq!(overlap(&x, &y).unwrap(), OverlappingState::Overlaps);
//! ```
//!
//! Operations that can signal an IEEE 1788 exception return a `Result`: by default the exception is only recorded in the thread-local sticky register (see the [exception module](exception/index.html)) and the result is a well-defined sentinel. A kind configured to throw turns into an `Err`.
//!
//! # References
//! * [IEEE Std 1788-2015, Standard for Interval Arithmetic](https://standards.ieee.org/standard/1788-2015.html)
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)

pub mod bound;
pub mod precision;
pub mod decoration;
pub mod exception;
pub mod interval;
pub mod decorated;
pub mod overlap;
pub mod set_operations;
pub mod reverse;
pub mod cancel;
pub mod flavor;
pub mod ops;

pub use crate::bound::{Bound, Rounding};
pub use crate::decoration::Decoration;
pub use crate::decorated::DecoratedInterval;
pub use crate::exception::{ExceptionKind, ExceptionSet, IntervalException};
pub use crate::flavor::{Flavor, SetBased};
pub use crate::interval::Interval;
pub use crate::overlap::OverlappingState;
pub use crate::precision::{Precision, Promote};
