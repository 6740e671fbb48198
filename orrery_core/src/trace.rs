// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the tick loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! tick-loop instrumentation calls at each stage. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates [`PlacementChange`] events plus
//!   the corresponding `TraceSink` method.

use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What the autoplay controller did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutoplayKind {
    /// A due fire advanced the focus.
    Advanced,
    /// A due fire was dropped because a transition was settling.
    Skipped,
    /// The controller was paused (pointer entered the carousel).
    Paused,
    /// The controller was re-armed (pointer left the carousel).
    Resumed,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted at the start of each engine tick.
#[derive(Clone, Copy, Debug)]
pub struct TickEvent {
    /// Monotonic tick counter.
    pub frame_index: u64,
    /// Host time the tick was delivered with.
    pub now: HostTime,
    /// Focus index entering the tick.
    pub focus: usize,
    /// Whether a transition was in flight entering the tick.
    pub settling: bool,
}

/// Emitted when a navigation request is accepted.
#[derive(Clone, Copy, Debug)]
pub struct NavAcceptedEvent {
    /// Host time of the request.
    pub now: HostTime,
    /// Focus index before the move.
    pub from: usize,
    /// Focus index after the move.
    pub to: usize,
}

/// Emitted when a navigation request is dropped by the settling latch.
#[derive(Clone, Copy, Debug)]
pub struct NavDroppedEvent {
    /// Host time of the request.
    pub now: HostTime,
    /// The signed target index that was requested.
    pub target: i64,
    /// The focus that remained in place.
    pub focus: usize,
}

/// Emitted when a settling latch releases.
#[derive(Clone, Copy, Debug)]
pub struct SettleEvent {
    /// Tick counter of the releasing tick.
    pub frame_index: u64,
    /// Host time the latch released at.
    pub now: HostTime,
    /// The focus that just finished settling.
    pub focus: usize,
}

/// Emitted for autoplay controller activity.
#[derive(Clone, Copy, Debug)]
pub struct AutoplayEvent {
    /// Host time of the activity.
    pub now: HostTime,
    /// What happened.
    pub kind: AutoplayKind,
}

/// Per-tick change summary.
#[derive(Clone, Copy, Debug)]
pub struct FrameSummary {
    /// Tick counter.
    pub frame_index: u64,
    /// Host time of the tick.
    pub now: HostTime,
    /// Focus index leaving the tick.
    pub focus: usize,
    /// Number of items whose placement was recomputed.
    pub placements_changed: usize,
    /// Number of items whose display record was replaced.
    pub content_changed: usize,
}

/// A per-tick placement change record.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct PlacementChange {
    /// Index of the item that moved.
    pub item_index: u32,
    /// New ring angle in degrees.
    pub angle_deg: f64,
    /// New normalized depth (0 = back, 1 = front).
    pub depth: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the tick loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called at the start of each engine tick.
    fn on_tick(&mut self, e: &TickEvent) {
        _ = e;
    }

    /// Called when a navigation request is accepted.
    fn on_nav_accepted(&mut self, e: &NavAcceptedEvent) {
        _ = e;
    }

    /// Called when a navigation request is dropped.
    fn on_nav_dropped(&mut self, e: &NavDroppedEvent) {
        _ = e;
    }

    /// Called when a settling latch releases.
    fn on_settle(&mut self, e: &SettleEvent) {
        _ = e;
    }

    /// Called on autoplay controller activity.
    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        _ = e;
    }

    /// Called with the per-tick change summary.
    fn on_frame_summary(&mut self, s: &FrameSummary) {
        _ = s;
    }

    /// Called with per-tick placement changes (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_placement_changes(&mut self, frame_index: u64, changes: &[PlacementChange]) {
        _ = (frame_index, changes);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`TickEvent`].
    #[inline]
    pub fn tick(&mut self, e: &TickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavAcceptedEvent`].
    #[inline]
    pub fn nav_accepted(&mut self, e: &NavAcceptedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_nav_accepted(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavDroppedEvent`].
    #[inline]
    pub fn nav_dropped(&mut self, e: &NavDroppedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_nav_dropped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SettleEvent`].
    #[inline]
    pub fn settle(&mut self, e: &SettleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_settle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AutoplayEvent`].
    #[inline]
    pub fn autoplay(&mut self, e: &AutoplayEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_autoplay(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameSummary`].
    #[inline]
    pub fn frame_summary(&mut self, s: &FrameSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_frame_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }

    /// Emits per-tick placement changes (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn placement_changes(&mut self, frame_index: u64, changes: &[PlacementChange]) {
        if let Some(s) = &mut self.sink {
            s.on_placement_changes(frame_index, changes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_all_events() {
        let mut sink = NoopSink;
        let mut tracer = Tracer::new(&mut sink);
        tracer.tick(&TickEvent {
            frame_index: 0,
            now: HostTime(0),
            focus: 0,
            settling: false,
        });
        tracer.nav_accepted(&NavAcceptedEvent {
            now: HostTime(1),
            from: 0,
            to: 1,
        });
        tracer.autoplay(&AutoplayEvent {
            now: HostTime(2),
            kind: AutoplayKind::Advanced,
        });
    }

    #[test]
    fn none_tracer_is_silent() {
        let mut tracer = Tracer::none();
        tracer.settle(&SettleEvent {
            frame_index: 3,
            now: HostTime(100),
            focus: 2,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn counting_sink_observes_events() {
        #[derive(Default)]
        struct Counting {
            ticks: u32,
            navs: u32,
        }
        impl TraceSink for Counting {
            fn on_tick(&mut self, _e: &TickEvent) {
                self.ticks += 1;
            }
            fn on_nav_accepted(&mut self, _e: &NavAcceptedEvent) {
                self.navs += 1;
            }
        }

        let mut sink = Counting::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.tick(&TickEvent {
                frame_index: 0,
                now: HostTime(0),
                focus: 0,
                settling: false,
            });
            tracer.tick(&TickEvent {
                frame_index: 1,
                now: HostTime(16),
                focus: 0,
                settling: false,
            });
            tracer.nav_accepted(&NavAcceptedEvent {
                now: HostTime(20),
                from: 0,
                to: 1,
            });
        }
        assert_eq!(sink.ticks, 2);
        assert_eq!(sink.navs, 1);
    }
}
