// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay deadline management.
//!
//! [`Autoplay`] owns a single recurring deadline: when armed, a fire becomes
//! due every `interval` ticks. It deliberately does not advance the carousel
//! itself — the engine polls it each tick and only advances when the
//! navigator is idle, so an autoplay fire can never race a user-initiated
//! transition (see [`Carousel::on_tick`](crate::carousel::Carousel::on_tick)).
//!
//! There is no OS timer behind this type. The deadline is plain data compared
//! against the host-supplied `now`, which makes pause idempotent, resume a
//! strict re-arm (never two live deadlines), and teardown free.

use crate::time::{Duration, HostTime};

/// Recurring advance deadline with hover pause/resume semantics.
#[derive(Clone, Copy, Debug)]
pub struct Autoplay {
    interval: Duration,
    /// Next fire deadline; `None` while paused.
    next_fire: Option<HostTime>,
}

impl Autoplay {
    /// Creates an armed controller whose first fire is due at
    /// `now + interval`.
    #[must_use]
    pub const fn armed(interval: Duration, now: HostTime) -> Self {
        Self {
            interval,
            next_fire: Some(now.saturating_add(interval)),
        }
    }

    /// Creates a paused controller. [`resume`](Self::resume) arms it.
    #[must_use]
    pub const fn paused(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: None,
        }
    }

    /// Returns whether the controller is currently armed.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Disarms the deadline. Pausing an already-paused controller is a no-op.
    pub const fn pause(&mut self) {
        self.next_fire = None;
    }

    /// Arms a fresh full interval window starting at `now`.
    ///
    /// Calling while already armed restarts the window; the previous deadline
    /// is discarded, so there is never more than one live deadline.
    pub const fn resume(&mut self, now: HostTime) {
        self.next_fire = Some(now.saturating_add(self.interval));
    }

    /// Polls the deadline.
    ///
    /// Returns `true` if a fire was due at `now`, re-arming the next window
    /// at `now + interval` in the same step. A host that ticks late past
    /// several windows still observes a single fire — missed windows do not
    /// accumulate, matching the drop-not-queue discipline of the navigator.
    pub const fn poll(&mut self, now: HostTime) -> bool {
        match self.next_fire {
            Some(deadline) if now.ticks() >= deadline.ticks() => {
                self.next_fire = Some(now.saturating_add(self.interval));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration(4000);

    #[test]
    fn fires_once_per_interval() {
        let mut ap = Autoplay::armed(INTERVAL, HostTime(0));
        assert!(!ap.poll(HostTime(3999)));
        assert!(ap.poll(HostTime(4000)));
        // Immediately after a fire, the next window is fresh.
        assert!(!ap.poll(HostTime(4001)));
        assert!(ap.poll(HostTime(8000)));
    }

    #[test]
    fn late_poll_yields_single_fire() {
        let mut ap = Autoplay::armed(INTERVAL, HostTime(0));
        // Three windows elapse unobserved; only one fire results.
        assert!(ap.poll(HostTime(13_000)));
        assert!(!ap.poll(HostTime(13_001)));
        assert!(ap.poll(HostTime(17_000)));
    }

    #[test]
    fn paused_controller_never_fires() {
        let mut ap = Autoplay::paused(INTERVAL);
        assert!(!ap.is_running());
        assert!(!ap.poll(HostTime(100_000)));
    }

    #[test]
    fn pause_is_idempotent() {
        let mut ap = Autoplay::armed(INTERVAL, HostTime(0));
        ap.pause();
        ap.pause();
        assert!(!ap.is_running());
        assert!(!ap.poll(HostTime(50_000)));
    }

    #[test]
    fn resume_arms_fresh_window() {
        let mut ap = Autoplay::armed(INTERVAL, HostTime(0));
        ap.pause();
        ap.resume(HostTime(10_000));
        assert!(ap.is_running());
        // Not due until a full interval after the resume, regardless of how
        // much of the previous window had elapsed.
        assert!(!ap.poll(HostTime(13_999)));
        assert!(ap.poll(HostTime(14_000)));
    }

    #[test]
    fn resume_while_running_restarts_window() {
        let mut ap = Autoplay::armed(INTERVAL, HostTime(0));
        // 3900 ticks into the window, a resume pushes the deadline out.
        ap.resume(HostTime(3900));
        assert!(!ap.poll(HostTime(4000)));
        assert!(ap.poll(HostTime(7900)));
    }
}
