// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end usage through the public API and the `Flavor` contract.

use ieee1788::exception::{self, ExceptionScope};
use ieee1788::{DecoratedInterval, Decoration, ExceptionKind, ExceptionSet, Flavor, Interval,
  IntervalException, OverlappingState, SetBased};
use std::thread;

type F64 = SetBased<f64>;

const INF: f64 = std::f64::INFINITY;

fn i(lb: f64, ub: f64) -> Interval<f64> {
  F64::from_bounds(lb, ub).unwrap()
}

#[test]
fn overlapping_intervals() {
  let _scope = ExceptionScope::isolated();
  assert_eq!(F64::overlap(&i(0.0, 2.0), &i(1.0, 3.0)), Ok(OverlappingState::Overlaps));
  assert_eq!(F64::overlap(&i(1.0, 3.0), &i(0.0, 2.0)), Ok(OverlappingState::OverlappedBy));
}

#[test]
fn touching_intervals_meet() {
  let _scope = ExceptionScope::isolated();
  assert_eq!(F64::overlap(&i(1.0, 2.0), &i(2.0, 3.0)), Ok(OverlappingState::Meets));
  assert_eq!(F64::overlap(&i(2.0, 3.0), &i(1.0, 2.0)), Ok(OverlappingState::MetBy));
}

#[test]
fn intersection_and_hull() {
  assert_eq!(F64::intersect(&i(1.0, 3.0), &i(2.0, 4.0)), i(2.0, 3.0));
  assert_eq!(F64::hull(&i(1.0, 3.0), &i(2.0, 4.0)), i(1.0, 4.0));
}

#[test]
fn reverse_multiplication_splits_around_zero() {
  let (negative, positive) = F64::mul_rev_to_pair(&i(-1.0, 2.0), &i(3.0, 4.0));
  // [3, 4] / [-1, 0] and [3, 4] / [0, 2].
  assert_eq!(negative, i(-INF, -3.0));
  assert_eq!(positive, i(1.5, INF));
  assert!(F64::intersect(&negative, &positive).is_empty());
}

#[test]
fn cancellative_subtraction() {
  let a = i(1.0, 5.0);
  let b = i(2.0, 3.0);
  // Widths 4 and 1: (1 - 2, 5 - 3).
  assert_eq!(F64::cancel_minus(&a, &b), i(-1.0, 2.0));
  assert!(F64::cancel_minus(&b, &a).is_entire());
  assert_eq!(F64::cancel_plus(&a, &b), i(4.0, 7.0));
}

#[test]
fn interval_part_of_nai_is_recorded() {
  let _scope = ExceptionScope::isolated();
  let nai = F64::nai();
  let bare = F64::interval_part(&nai).unwrap();
  assert!(bare.is_empty());
  assert_eq!(exception::state(), ExceptionSet::from(ExceptionKind::IntervalPartOfNai));
}

#[test]
fn interval_part_of_nai_throws_when_configured() {
  let _scope = ExceptionScope::isolated();
  exception::set_throw_config(ExceptionKind::IntervalPartOfNai);
  match F64::interval_part(&F64::nai()) {
    Err(IntervalException::IntervalPartOfNai(message)) => assert!(!message.is_empty()),
    other => panic!("expected an interval_part_of_nai exception, got {:?}", other)
  }
  assert!(exception::is_set(ExceptionKind::IntervalPartOfNai));

  // Other kinds keep yielding sentinels.
  let x = Interval::new(2.0, 1.0).unwrap();
  assert!(x.is_empty());
  assert!(exception::is_set(ExceptionKind::UndefinedOperation));
}

#[test]
fn clear_keeps_throw_configuration() {
  let _scope = ExceptionScope::isolated();
  exception::set_throw_config(ExceptionKind::UndefinedOperation | ExceptionKind::InvalidOperand);
  assert!(Interval::new(2.0, 1.0).is_err());
  exception::clear();
  assert!(exception::state().is_empty());
  assert!(DecoratedInterval::new(2.0, 1.0).is_err());
  assert!(DecoratedInterval::from_bare_and_tag(i(1.0, 2.0), 3).is_err());
  assert_eq!(exception::state(), ExceptionKind::UndefinedOperation | ExceptionKind::InvalidOperand);
}

#[test]
fn exceptions_are_per_thread() {
  let _scope = ExceptionScope::isolated();
  exception::set_throw_config(ExceptionKind::UndefinedOperation);
  let (raised, throwing) = thread::spawn(|| {
    // A fresh thread starts with nothing raised and nothing throwing.
    let throwing = !exception::throw_config().is_empty();
    let x = Interval::new(2.0, 1.0).unwrap();
    assert!(x.is_empty());
    (exception::state(), throwing)
  }).join().unwrap();
  assert!(!throwing);
  assert!(raised.contains(ExceptionKind::UndefinedOperation));
  assert!(exception::state().is_empty());
}

#[test]
fn decorations_follow_the_computation() {
  let _scope = ExceptionScope::isolated();
  let x = DecoratedInterval::new(1.0, 2.0).unwrap();
  let y = DecoratedInterval::new(-1.0, 4.0).unwrap();
  assert_eq!(x.decoration(), Decoration::Com);

  let h = F64::hull_dec(&x, &DecoratedInterval::new(3.0, INF).unwrap());
  assert_eq!(F64::decoration_of(&h), Decoration::Dac);

  let (neg, pos) = F64::div_to_pair_dec(&x, &y);
  assert_eq!(F64::decoration_of(&neg), Decoration::Trv);
  assert_eq!(F64::decoration_of(&pos), Decoration::Trv);
  assert_eq!(F64::interval_part(&neg).unwrap(), i(-INF, -1.0));
  assert_eq!(F64::interval_part(&pos).unwrap(), i(0.25, INF));

  let nai = F64::nai();
  assert_eq!(F64::overlap_dec(&nai, &nai), Ok(OverlappingState::BothNai));
  assert!(F64::cancel_minus_dec(&x, &nai).is_nai());
  assert!(exception::state().is_empty());
}

#[test]
fn mixed_precision_operands() {
  use ieee1788::set_operations::intersect_mixed;
  use ieee1788::overlap::overlap_mixed;

  let x: Interval<f32> = Interval::new(0.0, 1.0).unwrap();
  let y: Interval<f64> = Interval::new(0.5, 0.7).unwrap();
  let narrow: Interval<f32> = intersect_mixed(&x, &y);
  assert!(f64::from(narrow.lower()) <= 0.5);
  assert!(f64::from(narrow.upper()) >= 0.7);
  assert_eq!(overlap_mixed(&x, &y), Ok(OverlappingState::Contains));
}
