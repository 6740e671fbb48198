// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] takes a recording from a [`RecorderSink`](crate::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use orrery_core::time::Timebase;

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
/// Settling transitions appear as duration events (an accepted navigation
/// opens a `B`/`E` pair closed by the matching settle); everything else is an
/// instant event.
pub fn export(
    recorded: &[RecordedEvent],
    timebase: Timebase,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for event in recorded {
        match event {
            RecordedEvent::Tick(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Tick",
                    "cat": "Engine",
                    "ts": ticks_to_us(e.now.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "frame_index": e.frame_index,
                        "focus": e.focus,
                        "settling": e.settling,
                    }
                }));
            }
            RecordedEvent::NavAccepted(e) => {
                events.push(json!({
                    "ph": "B",
                    "name": "Transition",
                    "cat": "Nav",
                    "ts": ticks_to_us(e.now.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "from": e.from,
                        "to": e.to,
                    }
                }));
            }
            RecordedEvent::Settle(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": "Transition",
                    "cat": "Nav",
                    "ts": ticks_to_us(e.now.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "frame_index": e.frame_index,
                        "focus": e.focus,
                    }
                }));
            }
            RecordedEvent::NavDropped(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "NavDropped",
                    "cat": "Nav",
                    "ts": ticks_to_us(e.now.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "target": e.target,
                        "focus": e.focus,
                    }
                }));
            }
            RecordedEvent::Autoplay(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Autoplay",
                    "cat": "Autoplay",
                    "ts": ticks_to_us(e.now.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "kind": format!("{:?}", e.kind),
                    }
                }));
            }
            RecordedEvent::FrameSummary(s) => {
                events.push(json!({
                    "ph": "i",
                    "name": "FrameSummary",
                    "cat": "Summary",
                    "ts": ticks_to_us(s.now.ticks(), timebase),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "frame_index": s.frame_index,
                        "focus": s.focus,
                        "placements_changed": s.placements_changed,
                        "content_changed": s.content_changed,
                    }
                }));
            }
            RecordedEvent::PlacementChanges {
                frame_index,
                changes,
            } => {
                events.push(json!({
                    "ph": "i",
                    "name": "PlacementChanges",
                    "cat": "Rich",
                    "ts": 0,
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "frame_index": frame_index,
                        "count": changes.len(),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}
