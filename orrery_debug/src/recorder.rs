// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory trace recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] by storing every event as a
//! [`RecordedEvent`]. Recordings can be inspected directly or exported to
//! Chrome Trace Event Format via [`chrome::export`](crate::chrome::export).

use orrery_core::trace::{
    AutoplayEvent, FrameSummary, NavAcceptedEvent, NavDroppedEvent, PlacementChange, SettleEvent,
    TickEvent, TraceSink,
};

/// One recorded trace event.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// An engine tick began.
    Tick(TickEvent),
    /// A navigation request was accepted.
    NavAccepted(NavAcceptedEvent),
    /// A navigation request was dropped.
    NavDropped(NavDroppedEvent),
    /// A settling latch released.
    Settle(SettleEvent),
    /// Autoplay controller activity.
    Autoplay(AutoplayEvent),
    /// Per-tick change summary.
    FrameSummary(FrameSummary),
    /// Per-tick placement changes.
    PlacementChanges {
        /// Tick counter.
        frame_index: u64,
        /// The items that moved, with their new ring angle and depth.
        changes: Vec<PlacementChange>,
    },
}

/// Records every event it receives for later inspection or export.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder, returning the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the recording is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TraceSink for RecorderSink {
    fn on_tick(&mut self, e: &TickEvent) {
        self.events.push(RecordedEvent::Tick(*e));
    }

    fn on_nav_accepted(&mut self, e: &NavAcceptedEvent) {
        self.events.push(RecordedEvent::NavAccepted(*e));
    }

    fn on_nav_dropped(&mut self, e: &NavDroppedEvent) {
        self.events.push(RecordedEvent::NavDropped(*e));
    }

    fn on_settle(&mut self, e: &SettleEvent) {
        self.events.push(RecordedEvent::Settle(*e));
    }

    fn on_autoplay(&mut self, e: &AutoplayEvent) {
        self.events.push(RecordedEvent::Autoplay(*e));
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.events.push(RecordedEvent::FrameSummary(*s));
    }

    fn on_placement_changes(&mut self, frame_index: u64, changes: &[PlacementChange]) {
        self.events.push(RecordedEvent::PlacementChanges {
            frame_index,
            changes: changes.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use orrery_core::time::HostTime;
    use orrery_core::trace::AutoplayKind;

    use super::*;

    #[test]
    fn records_events_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_tick(&TickEvent {
            frame_index: 0,
            now: HostTime(0),
            focus: 0,
            settling: false,
        });
        rec.on_autoplay(&AutoplayEvent {
            now: HostTime(4_000_000_000),
            kind: AutoplayKind::Advanced,
        });
        assert_eq!(rec.len(), 2);
        assert!(matches!(rec.events()[0], RecordedEvent::Tick(_)));
        assert!(matches!(
            rec.events()[1],
            RecordedEvent::Autoplay(AutoplayEvent {
                kind: AutoplayKind::Advanced,
                ..
            })
        ));
    }
}
