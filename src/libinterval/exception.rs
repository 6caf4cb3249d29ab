// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sticky exception register and throw configuration.
//!
//! Interval operations never fail: an undefined or ill-formed case yields a sentinel value (empty, entire or NaI) and records the condition in a sticky register. The register accumulates raised kinds until `clear()` is called. Independently, each kind can be configured to throw; a throwing kind turns the operation result into an `Err(IntervalException)`. The register bit is always set before the error is produced, so a caller handling the error observes an accurate register.
//!
//! Both the register and the throw configuration are thread-local: a thread only observes the exceptions raised by its own calls. Initially nothing is raised and nothing throws.
//!
//! # Examples
//!
//! ```rust
//! use ieee1788::{DecoratedInterval, ExceptionKind};
//! use ieee1788::exception::{self, ExceptionScope};
//!
//! let _scope = ExceptionScope::isolated();
//! let nai: DecoratedInterval<f64> = DecoratedInterval::nai();
//! assert!(nai.interval_part().unwrap().is_empty());
//! assert!(exception::is_set(ExceptionKind::IntervalPartOfNai));
//!
//! exception::set_throw_config(ExceptionKind::IntervalPartOfNai);
//! assert!(nai.interval_part().is_err());
//! ```

use std::cell::Cell;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
  /// The operation has no defined result.
  UndefinedOperation,
  /// The operation is undefined on some but not all points of its operands.
  PossiblyUndefinedOperation,
  /// The bare part of NaI was requested.
  IntervalPartOfNai,
  /// An operand is not a valid representation.
  InvalidOperand
}

impl ExceptionKind
{
  pub const ALL: [ExceptionKind; 4] = [
    ExceptionKind::UndefinedOperation,
    ExceptionKind::PossiblyUndefinedOperation,
    ExceptionKind::IntervalPartOfNai,
    ExceptionKind::InvalidOperand
  ];

  fn bit(self) -> u8 {
    match self {
      ExceptionKind::UndefinedOperation => 1,
      ExceptionKind::PossiblyUndefinedOperation => 1 << 1,
      ExceptionKind::IntervalPartOfNai => 1 << 2,
      ExceptionKind::InvalidOperand => 1 << 3
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      ExceptionKind::UndefinedOperation => "undefined_operation",
      ExceptionKind::PossiblyUndefinedOperation => "possibly_undefined_operation",
      ExceptionKind::IntervalPartOfNai => "interval_part_of_nai",
      ExceptionKind::InvalidOperand => "invalid_operand"
    }
  }
}

impl fmt::Display for ExceptionKind
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A set of exception kinds, stored as one bit per kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ExceptionSet {
  bits: u8
}

impl ExceptionSet
{
  pub const NONE: ExceptionSet = ExceptionSet { bits: 0 };
  pub const ALL: ExceptionSet = ExceptionSet { bits: 0b1111 };

  pub fn contains(self, kind: ExceptionKind) -> bool {
    self.bits & kind.bit() != 0
  }

  pub fn is_empty(self) -> bool {
    self.bits == 0
  }

  pub fn union(self, other: ExceptionSet) -> ExceptionSet {
    ExceptionSet { bits: self.bits | other.bits }
  }

  pub fn iter(self) -> impl Iterator<Item=ExceptionKind> {
    ExceptionKind::ALL.iter().cloned().filter(move |k| self.contains(*k))
  }
}

impl From<ExceptionKind> for ExceptionSet
{
  fn from(kind: ExceptionKind) -> ExceptionSet {
    ExceptionSet { bits: kind.bit() }
  }
}

impl<K: Into<ExceptionSet>> BitOr<K> for ExceptionSet
{
  type Output = ExceptionSet;

  fn bitor(self, rhs: K) -> ExceptionSet {
    self.union(rhs.into())
  }
}

impl BitOr<ExceptionKind> for ExceptionKind
{
  type Output = ExceptionSet;

  fn bitor(self, rhs: ExceptionKind) -> ExceptionSet {
    ExceptionSet::from(self).union(rhs.into())
  }
}

impl<K: Into<ExceptionSet>> BitOrAssign<K> for ExceptionSet
{
  fn bitor_assign(&mut self, rhs: K) {
    *self = self.union(rhs.into());
  }
}

/// Error produced when a raised kind is configured to throw.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalException {
  #[error("undefined operation: {0}")]
  UndefinedOperation(String),

  #[error("possibly undefined operation: {0}")]
  PossiblyUndefinedOperation(String),

  #[error("interval part of NaI: {0}")]
  IntervalPartOfNai(String),

  #[error("invalid operand: {0}")]
  InvalidOperand(String),
}

impl IntervalException
{
  pub fn new(kind: ExceptionKind, message: &str) -> IntervalException {
    let message = message.to_string();
    match kind {
      ExceptionKind::UndefinedOperation => IntervalException::UndefinedOperation(message),
      ExceptionKind::PossiblyUndefinedOperation => IntervalException::PossiblyUndefinedOperation(message),
      ExceptionKind::IntervalPartOfNai => IntervalException::IntervalPartOfNai(message),
      ExceptionKind::InvalidOperand => IntervalException::InvalidOperand(message)
    }
  }

  pub fn kind(&self) -> ExceptionKind {
    match self {
      IntervalException::UndefinedOperation(_) => ExceptionKind::UndefinedOperation,
      IntervalException::PossiblyUndefinedOperation(_) => ExceptionKind::PossiblyUndefinedOperation,
      IntervalException::IntervalPartOfNai(_) => ExceptionKind::IntervalPartOfNai,
      IntervalException::InvalidOperand(_) => ExceptionKind::InvalidOperand
    }
  }

  pub fn message(&self) -> &str {
    match self {
      IntervalException::UndefinedOperation(m)
    | IntervalException::PossiblyUndefinedOperation(m)
    | IntervalException::IntervalPartOfNai(m)
    | IntervalException::InvalidOperand(m) => m
    }
  }
}

pub type Result<T> = std::result::Result<T, IntervalException>;

thread_local! {
  static RAISED: Cell<ExceptionSet> = const { Cell::new(ExceptionSet::NONE) };
  static THROWING: Cell<ExceptionSet> = const { Cell::new(ExceptionSet::NONE) };
}

/// Records `kinds` in the sticky register, then fails if one of them is configured to throw.
///
/// When several raised kinds throw, the error carries the first one in `ExceptionKind::ALL` order.
pub fn raise<K: Into<ExceptionSet>>(kinds: K, message: &str) -> Result<()> {
  let kinds = kinds.into();
  RAISED.with(|raised| raised.set(raised.get() | kinds));
  for kind in kinds.iter() {
    tracing::debug!(exception = kind.name(), detail = message, "interval exception raised");
  }
  let throwing = throw_config();
  match kinds.iter().find(|k| throwing.contains(*k)) {
    Some(kind) => {
      tracing::warn!(exception = kind.name(), detail = message, "throwing interval exception");
      Err(IntervalException::new(kind, message))
    }
    None => Ok(())
  }
}

/// Resets the sticky register. The throw configuration is left untouched.
pub fn clear() {
  tracing::trace!("clearing interval exception register");
  RAISED.with(|raised| raised.set(ExceptionSet::NONE));
}

pub fn state() -> ExceptionSet {
  RAISED.with(|raised| raised.get())
}

pub fn is_set(kind: ExceptionKind) -> bool {
  state().contains(kind)
}

/// Replaces the set of kinds that throw.
pub fn set_throw_config<K: Into<ExceptionSet>>(mask: K) {
  let mask = mask.into();
  tracing::trace!(mask = mask.bits, "interval exception throw configuration changed");
  THROWING.with(|throwing| throwing.set(mask));
}

pub fn throw_config() -> ExceptionSet {
  THROWING.with(|throwing| throwing.get())
}

/// Saves the register and the throw configuration of the current thread and restores both on drop.
pub struct ExceptionScope {
  raised: ExceptionSet,
  throwing: ExceptionSet
}

impl ExceptionScope
{
  pub fn new() -> ExceptionScope {
    ExceptionScope {
      raised: state(),
      throwing: throw_config()
    }
  }

  /// Like `new`, but also resets the thread to the initial state: nothing raised, nothing throws.
  pub fn isolated() -> ExceptionScope {
    let scope = ExceptionScope::new();
    clear();
    set_throw_config(ExceptionSet::NONE);
    scope
  }
}

impl Default for ExceptionScope
{
  fn default() -> ExceptionScope {
    ExceptionScope::new()
  }
}

impl Drop for ExceptionScope
{
  fn drop(&mut self) {
    RAISED.with(|raised| raised.set(self.raised));
    THROWING.with(|throwing| throwing.set(self.throwing));
  }
}
