// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decorations and their propagation rule.
//!
//! A decoration records how well-behaved the computation of a decorated interval was. The five decorations are totally ordered, `ill < trv < def < dac < com`, and an operation never produces a decoration greater than the meet of its operands' decorations.
//!
//! | Decoration | Meaning |
//! |------------|---------|
//! | `com`      | defined, continuous and bounded on the inputs, result bounded |
//! | `dac`      | defined and continuous on the inputs |
//! | `def`      | defined on the inputs |
//! | `trv`      | nothing is known |
//! | `ill`      | not an interval |

use serde::{Deserialize, Serialize};
use trilean::SKleene;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
  Ill,
  Trv,
  Def,
  Dac,
  Com
}

impl Decoration
{
  /// Decodes the interchange encoding of a decoration (`0, 4, 8, 12, 16`).
  pub fn from_tag(tag: u8) -> Option<Decoration> {
    match tag {
      0 => Some(Decoration::Ill),
      4 => Some(Decoration::Trv),
      8 => Some(Decoration::Def),
      12 => Some(Decoration::Dac),
      16 => Some(Decoration::Com),
      _ => None
    }
  }

  pub fn tag(self) -> u8 {
    match self {
      Decoration::Ill => 0,
      Decoration::Trv => 4,
      Decoration::Def => 8,
      Decoration::Dac => 12,
      Decoration::Com => 16
    }
  }

  /// Greatest lower bound of two decorations.
  pub fn meet(self, other: Decoration) -> Decoration {
    std::cmp::min(self, other)
  }
}

/// Decoration of the result of an operation.
///
/// `domain` states whether the operation is defined on every point of its operands (`True`), on some but not all of them (`Unknown`), or on none (`False`). The decoration is the meet of the operand decorations, clamped to at most `def` for a partially violated domain, at most `trv` for an entirely violated domain or an empty result, and at most `dac` for an unbounded result.
pub fn propagate(operands: &[Decoration], domain: SKleene, bounded: bool, empty: bool) -> Decoration {
  let meet = operands.iter().fold(Decoration::Com, |acc, d| acc.meet(*d));
  let mut local = match domain {
    SKleene::True => Decoration::Com,
    SKleene::Unknown => Decoration::Def,
    SKleene::False => Decoration::Trv
  };
  if empty {
    local = local.meet(Decoration::Trv);
  }
  else if !bounded {
    local = local.meet(Decoration::Dac);
  }
  meet.meet(local)
}
