//! Monetary amounts in whole currency units.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A non-negative amount of money, in whole currency units.
///
/// Ticket prices carry no fractional part, so a plain unsigned count is
/// enough. Prices are configurable, so all arithmetic is checked and an
/// overflow is reported as `None` instead of wrapping.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    pub const fn units(self) -> u64 {
        self.0
    }

    /// Price of `count` items at `self` each.
    pub const fn checked_times(self, count: u64) -> Option<Self> {
        match self.0.checked_mul(count) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    pub const fn checked_add(self, rhs: Money) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }
}

impl ValueObject for Money {}

impl From<u64> for Money {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "£{}", self.0)
    }
}
