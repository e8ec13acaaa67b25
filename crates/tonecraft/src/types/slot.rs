use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Number of candidates produced per request.
pub const SLOT_COUNT: u8 = 4;

/// One of the four output positions of a rewrite request.
///
/// Each slot follows its own embellishment, localization and formatting
/// strategy, so the four candidates differ in kind rather than only by
/// random choice. Slots are numbered from 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    pub const FIRST: Slot = Slot(1);
    pub const SECOND: Slot = Slot(2);
    pub const THIRD: Slot = Slot(3);
    pub const FOURTH: Slot = Slot(4);

    /// Returns the slot with the given 1-based number, if it is in range.
    pub fn new(number: u8) -> Option<Slot> {
        (1..=SLOT_COUNT).contains(&number).then_some(Slot(number))
    }

    /// All slots in ascending order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=SLOT_COUNT).map(Slot)
    }

    /// The 1-based slot number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// The 0-based position, used to index per-slot tables.
    pub fn position(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Slot::new(value).ok_or_else(|| format!("slot must be in 1..={SLOT_COUNT}, got {value}"))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> u8 {
        slot.0
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
