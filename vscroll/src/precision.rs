//! Exact decimal arithmetic for scrollbar geometry.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use log::warn;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept after a division.
pub const DIVISION_SCALE: u32 = 20;

/// Largest magnitude accepted for a size, offset or delta.
///
/// Keeps every sum and product of geometry values well inside the range of
/// `Decimal`, with enough digits left over for the fractional part.
pub const MAX_EXTENT: f64 = 1e15;

/// A pixel quantity stored as a decimal.
///
/// Thumb geometry is derived by dividing and then multiplying ratios on
/// every resize and drag tick. Doing that in binary floating point lets
/// rounding error accumulate into visible thumb jitter, so all geometry
/// math goes through this type and only the final value handed to the
/// host is converted back with [`Precise::to_f64`].
///
/// # Example
///
/// ```
/// use vscroll::precision::Precise;
///
/// let ratio = Precise::from(500).checked_div(Precise::from(2000)).unwrap();
/// assert_eq!((ratio * Precise::from(500)).to_f64(), 125.0);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Precise(Decimal);

impl Precise {
    pub const ZERO: Precise = Precise(Decimal::ZERO);
    pub const MAX: Precise = Precise(Decimal::MAX);

    /// Creates a value from an existing decimal.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Converts a float, mapping NaN and infinities to zero.
    pub fn from_f64(value: f64) -> Self {
        match Decimal::from_f64(value) {
            Some(decimal) => Self(decimal),
            None => {
                warn!("non-representable value {value} treated as 0");
                Self::ZERO
            }
        }
    }

    /// Converts a float after clamping it to `[-MAX_EXTENT, MAX_EXTENT]`.
    ///
    /// Use for caller-supplied offsets and deltas, where an out-of-range
    /// value should saturate rather than collapse to zero.
    pub fn bounded(value: f64) -> Self {
        if value.is_nan() {
            return Self::from_f64(value);
        }
        Self::from_f64(value.clamp(-MAX_EXTENT, MAX_EXTENT))
    }

    /// Converts back to a float for output.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Divides, returning `None` when `rhs` is zero or the quotient overflows.
    ///
    /// The quotient is rounded to [`DIVISION_SCALE`] places.
    pub fn checked_div(self, rhs: Precise) -> Option<Precise> {
        self.0.checked_div(rhs.0).map(|quotient| {
            Precise(
                quotient
                    .round_dp_with_strategy(DIVISION_SCALE, RoundingStrategy::MidpointAwayFromZero),
            )
        })
    }

    /// Multiplies, returning `None` on overflow.
    pub fn checked_mul(self, rhs: Precise) -> Option<Precise> {
        self.0.checked_mul(rhs.0).map(Precise)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

}

impl From<i64> for Precise {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<Decimal> for Precise {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Precise> for Decimal {
    fn from(value: Precise) -> Self {
        value.0
    }
}

impl Add for Precise {
    type Output = Precise;

    fn add(self, rhs: Precise) -> Precise {
        Precise(self.0 + rhs.0)
    }
}

impl Sub for Precise {
    type Output = Precise;

    fn sub(self, rhs: Precise) -> Precise {
        Precise(self.0 - rhs.0)
    }
}

impl Mul for Precise {
    type Output = Precise;

    fn mul(self, rhs: Precise) -> Precise {
        Precise(self.0 * rhs.0)
    }
}

impl Neg for Precise {
    type Output = Precise;

    fn neg(self) -> Precise {
        Precise(-self.0)
    }
}

impl fmt::Display for Precise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
