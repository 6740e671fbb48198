// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state machine with a settling latch.
//!
//! [`Navigator`] cycles between two phases for the life of the carousel:
//!
//! ```text
//! Idle ──go_to/next/prev──► Settling { until } ──settle(now ≥ until)──► Idle
//! ```
//!
//! While settling, every navigation request is **dropped**, not queued. This
//! guarantees at most one visual transition in flight and makes rapid
//! double-invocation idempotent: only the first request moves the focus.
//!
//! The return to `Idle` is not a callback. `Settling` carries a deadline, and
//! the host releases the latch by calling [`Navigator::settle`] with the
//! current time at the top of each tick. Dropping the carousel therefore
//! cancels the pending release with nothing left to leak.

use crate::time::{Duration, HostTime};

/// The transition phase of the navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavPhase {
    /// No transition in progress; navigation requests are accepted.
    Idle,
    /// A transition is in flight; requests are dropped until `until`.
    Settling {
        /// Host time at which the latch releases.
        until: HostTime,
    },
}

/// The result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavOutcome {
    /// The request was accepted and the focus moved.
    Accepted {
        /// Focus before the request.
        from: usize,
        /// Focus after normalization.
        to: usize,
    },
    /// The request arrived while settling and was dropped.
    Dropped {
        /// The requested (un-normalized) target.
        target: i64,
    },
}

impl NavOutcome {
    /// Whether this outcome moved the focus.
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Focus index plus the settling latch.
///
/// The focus is stored in a single cell that every request reads at call
/// time, so an autoplay fire always advances from the *current* focus rather
/// than a snapshot taken when the timer was armed.
#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    len: usize,
    focus: usize,
    phase: NavPhase,
    transition: Duration,
}

impl Navigator {
    /// Creates a navigator over `len` items, focused at index 0.
    ///
    /// `transition` is how long the latch holds after an accepted request.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero. Empty item sets are rejected earlier, at
    /// [`Carousel::new`](crate::carousel::Carousel::new).
    #[must_use]
    pub fn new(len: usize, transition: Duration) -> Self {
        assert!(len >= 1, "navigator requires at least one item");
        Self {
            len,
            focus: 0,
            phase: NavPhase::Idle,
            transition,
        }
    }

    /// Returns the current focus index, always in `[0, len)`.
    #[inline]
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the number of items.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Never true; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns whether a transition is currently in flight.
    #[inline]
    #[must_use]
    pub const fn is_settling(&self) -> bool {
        matches!(self.phase, NavPhase::Settling { .. })
    }

    /// Requests navigation to `target`.
    ///
    /// `target` may be any integer; it is normalized into `[0, len)` by
    /// Euclidean modulo, so `-1` wraps to the last item and `len` wraps to
    /// the first. While settling the request is dropped unchanged.
    pub fn go_to(&mut self, target: i64, now: HostTime) -> NavOutcome {
        if self.is_settling() {
            return NavOutcome::Dropped { target };
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "len fits i64 (it counts in-memory items); rem_euclid output is in [0, len)"
        )]
        let to = target.rem_euclid(self.len as i64) as usize;

        let from = self.focus;
        self.focus = to;
        self.phase = NavPhase::Settling {
            until: now.saturating_add(self.transition),
        };
        NavOutcome::Accepted { from, to }
    }

    /// Requests navigation to the item after the current focus.
    pub fn next(&mut self, now: HostTime) -> NavOutcome {
        self.go_to(self.focus as i64 + 1, now)
    }

    /// Requests navigation to the item before the current focus.
    pub fn prev(&mut self, now: HostTime) -> NavOutcome {
        self.go_to(self.focus as i64 - 1, now)
    }

    /// Releases the latch if its deadline has passed.
    ///
    /// Returns `true` when this call transitioned the navigator back to
    /// `Idle`. Hosts call this at the top of each tick, before polling
    /// autoplay or routing input.
    pub fn settle(&mut self, now: HostTime) -> bool {
        match self.phase {
            NavPhase::Settling { until } if now >= until => {
                self.phase = NavPhase::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration(800);

    #[test]
    fn starts_idle_at_zero() {
        let nav = Navigator::new(6, T);
        assert_eq!(nav.focus(), 0);
        assert!(!nav.is_settling());
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn zero_items_panics() {
        let _ = Navigator::new(0, T);
    }

    #[test]
    fn accepted_request_moves_focus_and_latches() {
        let mut nav = Navigator::new(6, T);
        let outcome = nav.go_to(3, HostTime(100));
        assert_eq!(outcome, NavOutcome::Accepted { from: 0, to: 3 });
        assert_eq!(nav.focus(), 3);
        assert!(nav.is_settling());
    }

    #[test]
    fn requests_while_settling_are_dropped() {
        let mut nav = Navigator::new(6, T);
        assert!(nav.go_to(2, HostTime(0)).is_accepted());

        // Second request dropped entirely; focus unchanged.
        assert_eq!(
            nav.go_to(5, HostTime(10)),
            NavOutcome::Dropped { target: 5 }
        );
        assert_eq!(nav.focus(), 2);

        // Repeating the *same* target is equally a no-op.
        assert!(!nav.go_to(2, HostTime(20)).is_accepted());
        assert_eq!(nav.focus(), 2);
    }

    #[test]
    fn settle_releases_at_deadline() {
        let mut nav = Navigator::new(4, T);
        let _ = nav.go_to(1, HostTime(100));

        assert!(!nav.settle(HostTime(899)), "before deadline");
        assert!(nav.is_settling());

        assert!(nav.settle(HostTime(900)), "deadline inclusive");
        assert!(!nav.is_settling());

        // Settling while idle is a no-op.
        assert!(!nav.settle(HostTime(901)));
    }

    #[test]
    fn negative_target_wraps_high() {
        let mut nav = Navigator::new(5, T);
        let outcome = nav.go_to(-1, HostTime(0));
        assert_eq!(outcome, NavOutcome::Accepted { from: 0, to: 4 });
    }

    #[test]
    fn overflow_target_wraps_low() {
        let mut nav = Navigator::new(5, T);
        let _ = nav.go_to(4, HostTime(0));
        assert!(nav.settle(HostTime(800)));
        let outcome = nav.go_to(5, HostTime(800));
        assert_eq!(outcome, NavOutcome::Accepted { from: 4, to: 0 });
    }

    #[test]
    fn next_walks_forward() {
        let mut nav = Navigator::new(6, T);
        let mut now = HostTime(0);
        for expected in [1, 2, 3] {
            assert!(nav.next(now).is_accepted());
            assert_eq!(nav.focus(), expected);
            now = now + T;
            assert!(nav.settle(now));
        }
    }

    #[test]
    fn prev_walks_backward_and_wraps() {
        let mut nav = Navigator::new(4, T);
        let _ = nav.go_to(2, HostTime(0));
        let mut now = HostTime(800);
        assert!(nav.settle(now));

        for expected in [1, 0, 3, 2] {
            assert!(nav.prev(now).is_accepted());
            assert_eq!(nav.focus(), expected);
            now = now + T;
            assert!(nav.settle(now));
        }
    }

    #[test]
    fn single_item_wraps_to_itself() {
        let mut nav = Navigator::new(1, T);
        let outcome = nav.next(HostTime(0));
        assert_eq!(outcome, NavOutcome::Accepted { from: 0, to: 0 });
        assert!(nav.settle(HostTime(800)));
        let outcome = nav.prev(HostTime(800));
        assert_eq!(outcome, NavOutcome::Accepted { from: 0, to: 0 });
    }

    #[test]
    fn zero_transition_still_latches_until_next_settle() {
        // A zero-duration transition releases on the very next settle call,
        // but the request that armed it is still serialized.
        let mut nav = Navigator::new(3, Duration::ZERO);
        assert!(nav.go_to(1, HostTime(50)).is_accepted());
        assert!(nav.is_settling());
        assert!(nav.settle(HostTime(50)));
        assert!(nav.go_to(2, HostTime(50)).is_accepted());
    }
}
