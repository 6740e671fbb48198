// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to milliseconds using a [`Timebase`].

use std::io::Write;

use orrery_core::time::Timebase;
use orrery_core::trace::{
    AutoplayEvent, AutoplayKind, FrameSummary, NavAcceptedEvent, NavDroppedEvent, PlacementChange,
    SettleEvent, TickEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    fn host_ms(&self, t: orrery_core::time::HostTime) -> f64 {
        self.timebase.ticks_to_nanos(t.ticks()) as f64 / 1_000_000.0
    }
}

fn autoplay_name(kind: AutoplayKind) -> &'static str {
    match kind {
        AutoplayKind::Advanced => "advanced",
        AutoplayKind::Skipped => "skipped",
        AutoplayKind::Paused => "paused",
        AutoplayKind::Resumed => "resumed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_tick(&mut self, e: &TickEvent) {
        let _ = writeln!(
            self.writer,
            "[tick] frame={} now={:.1}ms focus={} settling={}",
            e.frame_index,
            self.host_ms(e.now),
            e.focus,
            e.settling,
        );
    }

    fn on_nav_accepted(&mut self, e: &NavAcceptedEvent) {
        let _ = writeln!(
            self.writer,
            "[nav] at {:.1}ms {} -> {}",
            self.host_ms(e.now),
            e.from,
            e.to,
        );
    }

    fn on_nav_dropped(&mut self, e: &NavDroppedEvent) {
        let _ = writeln!(
            self.writer,
            "[nav:drop] at {:.1}ms target={} focus stays {}",
            self.host_ms(e.now),
            e.target,
            e.focus,
        );
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        let _ = writeln!(
            self.writer,
            "[settle] frame={} at {:.1}ms focus={}",
            e.frame_index,
            self.host_ms(e.now),
            e.focus,
        );
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        let _ = writeln!(
            self.writer,
            "[autoplay] at {:.1}ms {}",
            self.host_ms(e.now),
            autoplay_name(e.kind),
        );
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        let _ = writeln!(
            self.writer,
            "[summary] frame={} focus={} placements={} content={}",
            s.frame_index,
            s.focus,
            s.placements_changed,
            s.content_changed,
        );
    }

    fn on_placement_changes(&mut self, frame_index: u64, changes: &[PlacementChange]) {
        let _ = writeln!(
            self.writer,
            "[placements] frame={frame_index} moved={}",
            changes.len(),
        );
    }
}
