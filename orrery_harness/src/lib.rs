// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic scripted driver and interaction metrics for demos.
//!
//! [`Driver`] replays a timestamped input script against a
//! [`Carousel`](orrery_core::carousel::Carousel) on a fixed tick cadence,
//! with no real clock involved: time is a counter the driver advances. The
//! same script always produces the same frame sequence, which makes demo
//! behavior reproducible and lets tests assert on whole interaction
//! timelines rather than single calls.
//!
//! [`InteractionStats`] aggregates what happened during a run (accepted and
//! dropped navigations, autoplay activity, settles) for HUD display or test
//! assertions.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use orrery_core::carousel::{AutoplayOutcome, Carousel, FrameChanges};
use orrery_core::input::InputEvent;
use orrery_core::nav::NavOutcome;
use orrery_core::time::{Duration, HostTime, Timebase};
use orrery_core::trace::{
    AutoplayEvent, AutoplayKind, FrameSummary, NavAcceptedEvent, NavDroppedEvent, SettleEvent,
    TickEvent, Tracer,
};

/// Deterministic millisecond-stepped clock.
///
/// Uses the identity timebase: one tick is one nanosecond, so millisecond
/// script timestamps convert exactly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptClock {
    now_ms: u64,
}

impl ScriptClock {
    /// The timebase scripted time runs on.
    pub const TIMEBASE: Timebase = Timebase::NANOS;

    /// Creates a clock at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { now_ms: 0 }
    }

    /// Returns the current time in milliseconds.
    #[inline]
    #[must_use]
    pub const fn now_ms(self) -> u64 {
        self.now_ms
    }

    /// Returns the current time as engine [`HostTime`].
    #[inline]
    #[must_use]
    pub const fn now(self) -> HostTime {
        Self::at_ms(self.now_ms)
    }

    /// Converts a millisecond timestamp to engine [`HostTime`].
    #[inline]
    #[must_use]
    pub const fn at_ms(ms: u64) -> HostTime {
        HostTime(Duration::from_millis(ms, Self::TIMEBASE).ticks())
    }

    /// Advances the clock by `ms` milliseconds.
    pub const fn advance_ms(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }
}

/// Aggregated interaction metrics for one driver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionStats {
    /// Ticks processed.
    pub frames: u64,
    /// Navigation requests accepted.
    pub nav_accepted: u64,
    /// Navigation requests dropped by the settling latch.
    pub nav_dropped: u64,
    /// Settling latch releases.
    pub settles: u64,
    /// Autoplay fires that advanced the focus.
    pub autoplay_advanced: u64,
    /// Autoplay fires dropped mid-transition.
    pub autoplay_skipped: u64,
    /// Total per-item placement recomputations across the run.
    pub placement_updates: u64,
    /// Total display-record replacements reported across the run.
    pub content_updates: u64,
}

/// A scripted input with a millisecond timestamp.
#[derive(Clone, Copy, Debug)]
struct ScriptEntry {
    at_ms: u64,
    event: InputEvent,
}

/// Replays timestamped input against a carousel on a fixed tick cadence.
///
/// Script events are delivered in timestamp order, each at its own time,
/// immediately before the first tick at or after it. Trace events mirror
/// everything the engine reports.
#[derive(Debug)]
pub struct Driver {
    carousel: Carousel,
    clock: ScriptClock,
    tick_ms: u64,
    script: Vec<ScriptEntry>,
    next_entry: usize,
    stats: InteractionStats,
}

impl Driver {
    /// Creates a driver over `carousel` ticking every `tick_ms` milliseconds.
    ///
    /// # Panics
    ///
    /// Panics if `tick_ms` is zero.
    #[must_use]
    pub fn new(carousel: Carousel, tick_ms: u64) -> Self {
        assert!(tick_ms != 0, "driver tick cadence must not be zero");
        Self {
            carousel,
            clock: ScriptClock::new(),
            tick_ms,
            script: Vec::new(),
            next_entry: 0,
            stats: InteractionStats::default(),
        }
    }

    /// Schedules `event` for delivery at `at_ms`.
    ///
    /// # Panics
    ///
    /// Panics if `at_ms` is earlier than a previously scheduled event or the
    /// current clock; scripts are written in timeline order.
    pub fn schedule(&mut self, at_ms: u64, event: InputEvent) {
        if let Some(last) = self.script.last() {
            assert!(
                at_ms >= last.at_ms,
                "script events must be scheduled in timeline order"
            );
        }
        assert!(
            at_ms >= self.clock.now_ms(),
            "cannot schedule an event in the past"
        );
        self.script.push(ScriptEntry { at_ms, event });
    }

    /// Returns the carousel under test.
    #[inline]
    #[must_use]
    pub const fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Returns the stats accumulated so far.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &InteractionStats {
        &self.stats
    }

    /// Returns the driver clock.
    #[inline]
    #[must_use]
    pub const fn clock(&self) -> ScriptClock {
        self.clock
    }

    /// Runs the timeline forward by `duration_ms`, delivering due script
    /// events and ticking the engine on the cadence.
    ///
    /// Returns the stats accumulated across the whole driver lifetime.
    pub fn run_for(&mut self, duration_ms: u64, tracer: &mut Tracer<'_>) -> InteractionStats {
        let end_ms = self.clock.now_ms().saturating_add(duration_ms);
        while self.clock.now_ms() < end_ms {
            self.clock.advance_ms(self.tick_ms.min(end_ms - self.clock.now_ms()));
            let tick_ms = self.clock.now_ms();

            // Deliver every script event due at or before this tick, each at
            // its own timestamp.
            while let Some(entry) = self.script.get(self.next_entry).copied() {
                if entry.at_ms > tick_ms {
                    break;
                }
                self.next_entry += 1;
                self.deliver(entry, tracer);
            }

            self.tick(ScriptClock::at_ms(tick_ms), tracer);
        }
        self.stats
    }

    fn deliver(&mut self, entry: ScriptEntry, tracer: &mut Tracer<'_>) {
        let now = ScriptClock::at_ms(entry.at_ms);
        match self.carousel.on_input(entry.event, now) {
            Some(NavOutcome::Accepted { from, to }) => {
                self.stats.nav_accepted += 1;
                tracer.nav_accepted(&NavAcceptedEvent { now, from, to });
            }
            Some(NavOutcome::Dropped { target }) => {
                self.stats.nav_dropped += 1;
                tracer.nav_dropped(&NavDroppedEvent {
                    now,
                    target,
                    focus: self.carousel.focus(),
                });
            }
            None => {
                let kind = match entry.event {
                    InputEvent::PointerEnter => AutoplayKind::Paused,
                    _ => AutoplayKind::Resumed,
                };
                tracer.autoplay(&AutoplayEvent { now, kind });
            }
        }
    }

    fn tick(&mut self, now: HostTime, tracer: &mut Tracer<'_>) {
        tracer.tick(&TickEvent {
            frame_index: self.carousel.frame_index(),
            now,
            focus: self.carousel.focus(),
            settling: self.carousel.is_transitioning(),
        });

        let changes: FrameChanges = self.carousel.on_tick(now);
        self.stats.frames += 1;
        self.stats.placement_updates += changes.placements.len() as u64;
        self.stats.content_updates += changes.content.len() as u64;

        if changes.settled {
            self.stats.settles += 1;
            tracer.settle(&SettleEvent {
                frame_index: self.carousel.frame_index(),
                now,
                focus: changes.focus,
            });
        }
        match changes.autoplay {
            AutoplayOutcome::Advanced => {
                self.stats.autoplay_advanced += 1;
                tracer.autoplay(&AutoplayEvent {
                    now,
                    kind: AutoplayKind::Advanced,
                });
            }
            AutoplayOutcome::Skipped => {
                self.stats.autoplay_skipped += 1;
                tracer.autoplay(&AutoplayEvent {
                    now,
                    kind: AutoplayKind::Skipped,
                });
            }
            AutoplayOutcome::Idle => {}
        }

        #[cfg(feature = "trace-rich")]
        {
            use orrery_core::trace::PlacementChange;
            let rich: alloc::vec::Vec<PlacementChange> = changes
                .placements
                .iter()
                .map(|&idx| {
                    let p = self.carousel.placement(idx as usize);
                    PlacementChange {
                        item_index: idx,
                        angle_deg: p.angle_deg,
                        depth: p.depth,
                    }
                })
                .collect();
            tracer.placement_changes(self.carousel.frame_index(), &rich);
        }

        tracer.frame_summary(&FrameSummary {
            frame_index: self.carousel.frame_index(),
            now,
            focus: changes.focus,
            placements_changed: changes.placements.len(),
            content_changed: changes.content.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use orrery_core::card::Card;
    use orrery_core::carousel::CarouselConfig;
    use orrery_core::input::NavKey;

    use super::*;

    fn carousel(n: usize) -> Carousel {
        let cards: Vec<Card> = (0..n)
            .map(|i| Card::new(format!("card {i}"), format!("img/{i}.webp")))
            .collect();
        Carousel::new(
            cards,
            CarouselConfig::standard(ScriptClock::TIMEBASE),
            HostTime(0),
        )
        .unwrap()
    }

    #[test]
    fn autoplay_walks_the_ring_unattended() {
        let mut driver = Driver::new(carousel(6), 16);
        let stats = driver.run_for(13_000, &mut Tracer::none());
        // Fires at 4s, 8s, 12s.
        assert_eq!(stats.autoplay_advanced, 3);
        assert_eq!(stats.autoplay_skipped, 0);
        assert_eq!(driver.carousel().focus(), 3);
    }

    #[test]
    fn rapid_keys_drop_inside_settle_window() {
        let mut driver = Driver::new(carousel(6), 16);
        driver.schedule(100, InputEvent::Key(NavKey::ArrowRight));
        driver.schedule(200, InputEvent::Key(NavKey::ArrowRight));
        driver.schedule(300, InputEvent::Key(NavKey::ArrowRight));
        // Past the 800ms latch from the first accept.
        driver.schedule(1000, InputEvent::Key(NavKey::ArrowRight));

        let stats = driver.run_for(2000, &mut Tracer::none());
        assert_eq!(stats.nav_accepted, 2);
        assert_eq!(stats.nav_dropped, 2);
        assert_eq!(driver.carousel().focus(), 2);
    }

    #[test]
    fn hover_freezes_autoplay_for_its_duration() {
        let mut driver = Driver::new(carousel(6), 16);
        driver.schedule(1000, InputEvent::PointerEnter);
        driver.schedule(9000, InputEvent::PointerLeave);

        // Hovered across what would have been the 4s and 8s fires; after the
        // leave, a fresh window fires at 13s.
        let stats = driver.run_for(13_500, &mut Tracer::none());
        assert_eq!(stats.autoplay_advanced, 1);
        assert_eq!(driver.carousel().focus(), 1);
    }

    #[test]
    fn user_navigation_near_the_fire_drops_the_fire() {
        let mut driver = Driver::new(carousel(6), 16);
        driver.schedule(3900, InputEvent::Key(NavKey::ArrowRight));

        let stats = driver.run_for(4100, &mut Tracer::none());
        assert_eq!(stats.nav_accepted, 1);
        assert_eq!(stats.autoplay_skipped, 1);
        assert_eq!(stats.autoplay_advanced, 0);
        assert_eq!(driver.carousel().focus(), 1);
    }

    #[test]
    fn settle_counted_once_per_transition() {
        let mut driver = Driver::new(carousel(4), 16);
        driver.schedule(100, InputEvent::Select(2));
        let stats = driver.run_for(2000, &mut Tracer::none());
        assert_eq!(stats.settles, 1);
    }

    #[test]
    fn focus_move_touches_every_item_once() {
        let mut driver = Driver::new(carousel(5), 16);
        driver.schedule(100, InputEvent::Key(NavKey::ArrowRight));
        let stats = driver.run_for(500, &mut Tracer::none());
        // One accepted move recomputes all 5 placements, exactly once.
        assert_eq!(stats.placement_updates, 5);
    }

    #[test]
    fn deterministic_replay_produces_identical_stats() {
        let run = || {
            let mut driver = Driver::new(carousel(6), 16);
            driver.schedule(500, InputEvent::Key(NavKey::ArrowRight));
            driver.schedule(2000, InputEvent::PointerEnter);
            driver.schedule(3000, InputEvent::PointerLeave);
            driver.schedule(9000, InputEvent::Select(4));
            driver.run_for(15_000, &mut Tracer::none())
        };
        assert_eq!(run(), run());
    }

    #[test]
    #[should_panic(expected = "timeline order")]
    fn out_of_order_schedule_panics() {
        let mut driver = Driver::new(carousel(3), 16);
        driver.schedule(500, InputEvent::PointerEnter);
        driver.schedule(100, InputEvent::PointerLeave);
    }
}
