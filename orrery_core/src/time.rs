// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time and timebase conversion.
//!
//! [`HostTime`] is a point in time expressed as platform-native monotonic
//! ticks (e.g. `performance.now()` scaled to integer microseconds on the web,
//! `mach_absolute_time` on macOS). The engine never reads a clock itself; the
//! host passes `now` into every call that can release a deadline.
//!
//! [`Timebase`] carries the rational ticks-to-nanoseconds factor so that
//! millisecond-denominated configuration (autoplay interval, transition
//! duration) can be converted into host ticks once, up front.
//!
//! [`Duration`] is a span in the same tick units as [`HostTime`]. All
//! conversions use `u128` intermediates to avoid overflow.

use core::fmt;
use core::ops::{Add, Sub};

/// A point in time expressed as platform-native monotonic ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Checked addition of a duration.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, duration: Duration) -> Option<Self> {
        match self.0.checked_add(duration.0) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }

    /// Saturating addition of a duration.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.0))
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sub for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

/// Rational conversion factor from ticks to nanoseconds.
///
/// `nanoseconds = ticks * numer / denom`
///
/// The host provides the correct instance for its clock (for a clock that
/// already counts nanoseconds, use [`Timebase::NANOS`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timebase {
    /// Numerator of the ticks-to-nanoseconds ratio.
    pub numer: u32,
    /// Denominator of the ticks-to-nanoseconds ratio.
    pub denom: u32,
}

impl Timebase {
    /// A timebase where ticks are already nanoseconds (1:1).
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// Creates a new timebase with the given numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    #[inline]
    #[must_use]
    pub const fn new(numer: u32, denom: u32) -> Self {
        assert!(denom != 0, "timebase denominator must not be zero");
        Self { numer, denom }
    }

    /// Converts a tick count to nanoseconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn ticks_to_nanos(self, ticks: u64) -> u64 {
        let wide = ticks as u128 * self.numer as u128 / self.denom as u128;
        wide as u64
    }

    /// Converts nanoseconds to a tick count.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "u128 intermediate avoids overflow; truncation back to u64 is intentional"
    )]
    pub const fn nanos_to_ticks(self, nanos: u64) -> u64 {
        let wide = nanos as u128 * self.denom as u128 / self.numer as u128;
        wide as u64
    }
}

impl fmt::Debug for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timebase({}/{})", self.numer, self.denom)
    }
}

/// A duration in platform-native ticks.
///
/// Arithmetic uses the same tick units as [`HostTime`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Creates a duration from a millisecond value and timebase.
    ///
    /// Carousel configuration (autoplay interval, transition duration) is
    /// specified in milliseconds; this converts it into host ticks.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64, timebase: Timebase) -> Self {
        Self(timebase.nanos_to_ticks(millis.saturating_mul(1_000_000)))
    }

    /// Converts this duration to whole milliseconds using the given timebase.
    #[inline]
    #[must_use]
    pub const fn to_millis(self, timebase: Timebase) -> u64 {
        timebase.ticks_to_nanos(self.0) / 1_000_000
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip_identity_timebase() {
        let tb = Timebase::NANOS;
        let d = Duration::from_millis(4000, tb);
        assert_eq!(d.ticks(), 4_000_000_000, "4000ms at 1ns ticks");
        assert_eq!(d.to_millis(tb), 4000);
    }

    #[test]
    fn millis_round_trip_coarse_timebase() {
        // A 24 MHz tick source (typical ARM Mac): 125/3.
        let tb = Timebase::new(125, 3);
        let d = Duration::from_millis(800, tb);
        // 800ms = 0.8s = 19_200_000 ticks at 24 MHz.
        assert_eq!(d.ticks(), 19_200_000);
        assert_eq!(d.to_millis(tb), 800);
    }

    #[test]
    fn overflow_safe_conversion() {
        // Large tick value that would overflow u64 if multiplied naively.
        let tb = Timebase::new(125, 3);
        let _nanos = tb.ticks_to_nanos(u64::MAX / 2);
    }

    #[test]
    fn duration_arithmetic() {
        let a = Duration(100);
        let b = Duration(30);
        assert_eq!((a + b).ticks(), 130);
        assert_eq!((a - b).ticks(), 70);
        assert_eq!(a.saturating_sub(Duration(200)), Duration::ZERO);
    }

    #[test]
    fn host_time_duration_ops() {
        let t = HostTime(1000);
        let d = Duration(200);
        assert_eq!((t + d).ticks(), 1200);
        assert_eq!((t - d).ticks(), 800);
        assert_eq!(t.saturating_duration_since(HostTime(1500)), Duration::ZERO);
        assert_eq!(t.saturating_duration_since(HostTime(400)), Duration(600));
    }

    #[test]
    fn checked_add_detects_overflow() {
        let t = HostTime(u64::MAX - 10);
        assert!(t.checked_add(Duration(20)).is_none());
        assert_eq!(t.checked_add(Duration(5)), Some(HostTime(u64::MAX - 5)));
        assert_eq!(t.saturating_add(Duration(20)), HostTime(u64::MAX));
    }
}
