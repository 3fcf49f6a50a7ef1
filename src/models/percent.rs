//! Percent type for representing allocation shares
//!
//! Internally stores shares in tenths of a percent (i64) so that the cap
//! arithmetic never drifts. 100% is stored as 1000, 33.3% as 333.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A share of the estate stored as tenths of a percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(i64);

impl Percent {
    /// The whole estate (non-Muslim cap)
    pub const FULL: Percent = Percent(1000);

    /// The Wasiat one-third portion (Muslim cap)
    pub const WASIAT: Percent = Percent(333);

    /// Drift allowed when comparing a total against its cap
    pub const TOLERANCE: Percent = Percent(1);

    /// Amount moved by one press of a stepper button
    pub const STEP: Percent = Percent(10);

    /// Create a Percent from tenths of a percent
    ///
    /// # Examples
    /// ```
    /// use wasiat_kiosk::models::Percent;
    /// let share = Percent::from_tenths(505); // 50.5%
    /// ```
    pub const fn from_tenths(tenths: i64) -> Self {
        Self(tenths)
    }

    /// Create a Percent from whole percentage points
    pub const fn from_whole(points: i64) -> Self {
        Self(points * 10)
    }

    /// Zero percent
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw value in tenths of a percent
    pub const fn tenths(&self) -> i64 {
        self.0
    }

    /// Check if the share is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the share is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute distance between two shares
    pub const fn abs_diff(&self, other: Percent) -> Percent {
        Self((self.0 - other.0).abs())
    }

    /// Clamp into `[min, max]`; an inverted range collapses to `min`
    pub fn clamp_to(self, min: Percent, max: Percent) -> Percent {
        if max < min {
            return min;
        }
        Self(self.0.clamp(min.0, max.0))
    }

    /// Scale by `numerator / denominator`, rounding toward zero
    pub fn scale(self, numerator: Percent, denominator: Percent) -> Percent {
        if denominator.0 == 0 {
            return Self::zero();
        }
        Self(self.0 * numerator.0 / denominator.0)
    }

    /// Parse a typed share
    ///
    /// Accepts formats: "50", "50.5", "12.25%", " 7 ". Values are rounded to
    /// the nearest tenth. Returns `None` for anything that is not a finite
    /// number.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_suffix('%').unwrap_or(s).trim();

        let value: f64 = s.parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        let tenths = (value * 10.0).round();
        if tenths.abs() > i64::MAX as f64 {
            return None;
        }

        Some(Self(tenths as i64))
    }

    /// Parse a typed share the way the kiosk keypad does: garbage reads as zero
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl Default for Percent {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{}%", sign, abs / 10, abs % 10)
    }
}

impl Add for Percent {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Percent {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Percent {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Percent {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Percent {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Percent> for Percent {
    fn sum<I: Iterator<Item = &'a Percent>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + *p)
    }
}
