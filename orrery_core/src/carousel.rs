// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel engine façade.
//!
//! [`Carousel`] owns the pieces and wires them into the tick protocol:
//!
//! ```text
//!   host event ──► on_input() ──► Navigator (latch, wraparound)
//!                                     │ accepted
//!                                     ▼
//!   host tick ──► on_tick() ──► settle latch ──► poll Autoplay
//!                                     │
//!                                     ▼
//!            drain dirty channels ──► recompute Placements ──► FrameChanges
//! ```
//!
//! The engine holds no timers and schedules no callbacks; every deferred
//! effect is a deadline released by a later `on_tick(now)`. A host that drops
//! the carousel drops the deadlines with it, so nothing can fire after
//! teardown.

use alloc::vec::Vec;
use core::fmt;

use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use crate::autoplay::Autoplay;
use crate::card::Card;
use crate::dirty;
use crate::input::{InputEvent, NavKey};
use crate::nav::{NavOutcome, Navigator};
use crate::ring::Placement;
use crate::time::{Duration, HostTime, Timebase};

/// Carousel construction parameters.
///
/// The interval and transition defaults mirror the classic landing-page
/// shelf: a 4 s autoplay cadence and an 800 ms settle.
#[derive(Clone, Copy, Debug)]
pub struct CarouselConfig {
    /// Ring radius: distance of the item circle from the viewing axis.
    pub radius: f64,
    /// How long the settling latch holds after an accepted navigation.
    pub transition: Duration,
    /// Autoplay advance cadence.
    pub autoplay_interval: Duration,
    /// Whether autoplay is armed at construction.
    pub autoplay_on_start: bool,
}

impl CarouselConfig {
    /// Default configuration for the given host timebase.
    #[must_use]
    pub const fn standard(timebase: Timebase) -> Self {
        Self {
            radius: 300.0,
            transition: Duration::from_millis(800, timebase),
            autoplay_interval: Duration::from_millis(4000, timebase),
            autoplay_on_start: true,
        }
    }
}

/// Error returned when a carousel is constructed with no items.
///
/// An empty collection is a host configuration bug, reported at the boundary
/// rather than tolerated internally: with `N = 0` there is no valid focus and
/// no layout to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyCarousel;

impl fmt::Display for EmptyCarousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("carousel requires at least one card")
    }
}

impl core::error::Error for EmptyCarousel {}

/// What the autoplay controller did during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoplayOutcome {
    /// No fire was due.
    #[default]
    Idle,
    /// A fire was due and the focus advanced.
    Advanced,
    /// A fire was due but the navigator was settling; the fire was dropped.
    Skipped,
}

/// The set of changes produced by a single [`Carousel::on_tick`] call.
///
/// `placements` and `content` carry the indices of items whose pose or
/// display record changed since the previous tick; hosts use them to apply
/// incremental updates and read current values back through
/// [`Carousel::placement`] and [`Carousel::card`].
#[derive(Clone, Debug, Default)]
pub struct FrameChanges {
    /// Items whose placement was recomputed this tick.
    pub placements: Vec<u32>,
    /// Items whose display record was replaced.
    pub content: Vec<u32>,
    /// The focus index after this tick (for dot-indicator highlighting).
    pub focus: usize,
    /// Whether the settling latch released during this tick.
    pub settled: bool,
    /// What autoplay did during this tick.
    pub autoplay: AutoplayOutcome,
}

/// A circular carousel of display cards.
///
/// Single-threaded by construction: the owning host holds the only handle,
/// and `&mut self` is the only mutation path. Events are applied in the
/// order the host delivers them.
#[derive(Debug)]
pub struct Carousel {
    cards: Vec<Card>,
    nav: Navigator,
    autoplay: Autoplay,
    radius: f64,
    placements: Vec<Placement>,
    dirty: DirtyTracker<u32>,
    frame_index: u64,
}

impl Carousel {
    /// Creates a carousel over `cards`, focused at index 0, with initial
    /// placements computed immediately (no transition).
    ///
    /// Returns [`EmptyCarousel`] if `cards` is empty.
    pub fn new(
        cards: Vec<Card>,
        config: CarouselConfig,
        now: HostTime,
    ) -> Result<Self, EmptyCarousel> {
        if cards.is_empty() {
            return Err(EmptyCarousel);
        }
        let len = cards.len();

        let mut tracker = DirtyTracker::with_cycle_handling(CycleHandling::Error);
        // Every item's pose depends on the synthetic focus key (slot `len`).
        #[expect(
            clippy::cast_possible_truncation,
            reason = "item counts are small; a carousel never approaches u32::MAX cards"
        )]
        let focus_key = len as u32;
        for i in 0..focus_key {
            let _ = tracker.add_dependency(i, focus_key, dirty::PLACEMENT);
        }

        let placements = (0..len)
            .map(|i| Placement::compute(i, 0, len, config.radius))
            .collect();

        let autoplay = if config.autoplay_on_start {
            Autoplay::armed(config.autoplay_interval, now)
        } else {
            Autoplay::paused(config.autoplay_interval)
        };

        Ok(Self {
            cards,
            nav: Navigator::new(len, config.transition),
            autoplay,
            radius: config.radius,
            placements,
            dirty: tracker,
            frame_index: 0,
        })
    }

    /// Returns the number of cards.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Never true; construction rejects empty collections.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the current focus index.
    #[inline]
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.nav.focus()
    }

    /// Returns whether a transition is currently in flight.
    #[inline]
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.nav.is_settling()
    }

    /// Returns whether autoplay is currently armed.
    #[inline]
    #[must_use]
    pub const fn is_auto_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Returns the number of ticks processed so far.
    #[inline]
    #[must_use]
    pub const fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Returns the display record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn card(&self, index: usize) -> &Card {
        assert!(
            index < self.cards.len(),
            "card index {index} out of range (len {})",
            self.cards.len()
        );
        &self.cards[index]
    }

    /// Returns the current placement of the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn placement(&self, index: usize) -> Placement {
        assert!(
            index < self.placements.len(),
            "placement index {index} out of range (len {})",
            self.placements.len()
        );
        self.placements[index]
    }

    /// Returns all current placements, indexed by item.
    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Replaces the display record at `index` in place.
    ///
    /// The item's pose is unaffected; only the CONTENT channel is marked.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_card(&mut self, index: usize, card: Card) {
        assert!(
            index < self.cards.len(),
            "card index {index} out of range (len {})",
            self.cards.len()
        );
        self.cards[index] = card;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "index was bounds-checked against the card count, which fits u32"
        )]
        self.dirty.mark(index as u32, dirty::CONTENT);
    }

    /// Routes a host input event.
    ///
    /// Returns the navigation outcome for key and select events, `None` for
    /// pointer events (which only pause or resume autoplay).
    pub fn on_input(&mut self, event: InputEvent, now: HostTime) -> Option<NavOutcome> {
        match event {
            InputEvent::Key(NavKey::ArrowLeft) => {
                let outcome = self.nav.prev(now);
                self.after_nav(outcome);
                Some(outcome)
            }
            InputEvent::Key(NavKey::ArrowRight) => {
                let outcome = self.nav.next(now);
                self.after_nav(outcome);
                Some(outcome)
            }
            InputEvent::Select(index) => {
                #[expect(
                    clippy::cast_possible_wrap,
                    reason = "dot indices come from the host's render of at most len dots"
                )]
                let outcome = self.nav.go_to(index as i64, now);
                self.after_nav(outcome);
                Some(outcome)
            }
            InputEvent::PointerEnter => {
                self.autoplay.pause();
                None
            }
            InputEvent::PointerLeave => {
                self.autoplay.resume(now);
                None
            }
        }
    }

    /// Advances the engine by one host tick.
    ///
    /// In order: releases the settling latch if its deadline passed, polls
    /// autoplay (a due fire advances only when the navigator is idle;
    /// otherwise it is dropped), then drains the dirty channels and
    /// recomputes placements for affected items.
    pub fn on_tick(&mut self, now: HostTime) -> FrameChanges {
        self.frame_index += 1;

        let settled = self.nav.settle(now);

        let mut autoplay = AutoplayOutcome::Idle;
        if self.autoplay.poll(now) {
            if self.nav.is_settling() {
                autoplay = AutoplayOutcome::Skipped;
            } else {
                let outcome = self.nav.next(now);
                self.after_nav(outcome);
                autoplay = AutoplayOutcome::Advanced;
            }
        }

        let focus_key = self.focus_key();
        let total = self.cards.len();
        let focus = self.nav.focus();

        // Drain PLACEMENT — the focus key itself is synthetic; recompute and
        // report only real item indices.
        let placements: Vec<u32> = self
            .dirty
            .drain(dirty::PLACEMENT)
            .affected()
            .deterministic()
            .run()
            .filter(|&idx| idx != focus_key)
            .collect();
        for &idx in &placements {
            self.placements[idx as usize] = Placement::compute(idx as usize, focus, total, self.radius);
        }

        // Drain CONTENT — no recomputation; hosts read the new card directly.
        let content: Vec<u32> = self
            .dirty
            .drain(dirty::CONTENT)
            .deterministic()
            .run()
            .collect();

        FrameChanges {
            placements,
            content,
            focus,
            settled,
            autoplay,
        }
    }

    /// Marks every item's placement stale after an accepted focus move.
    fn after_nav(&mut self, outcome: NavOutcome) {
        if outcome.is_accepted() {
            let focus_key = self.focus_key();
            self.dirty
                .mark_with(focus_key, dirty::PLACEMENT, &EagerPolicy);
        }
    }

    fn focus_key(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "item counts are small; a carousel never approaches u32::MAX cards"
        )]
        let key = self.cards.len() as u32;
        key
    }
}
