// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core engine for a circular 3D carousel.
//!
//! `orrery_core` positions an ordered collection of display cards on a
//! virtual ring in pseudo-3D space and manages the interaction state machine
//! around it: rate-limited navigation, autoplay with hover pause/resume, and
//! incremental change reporting. It is `no_std` compatible (with `alloc`) and
//! owns no timers or threads — the host supplies `now` with every call, and
//! all deferred behavior is deadlines compared against it.
//!
//! # Architecture
//!
//! The crate is organized around a tick protocol that turns host events and
//! clock readings into incremental pose updates:
//!
//! ```text
//!   Host input ──► Carousel::on_input() ──► Navigator (latch, wraparound)
//!                                               │
//!   Host clock ──► Carousel::on_tick() ◄────────┘
//!                        │
//!                        ├─► settle latch ─► Autoplay::poll()
//!                        │
//!                        └─► drain dirty ─► Placement::compute() ─► FrameChanges
//! ```
//!
//! **[`ring`]** — Pure circular geometry. Maps an item's offset from the
//! focus to angle, 3D position, facing rotation, and the depth-derived
//! opacity/scale/stacking cues.
//!
//! **[`nav`]** — Navigation state machine with a settling latch. Requests
//! during a transition are dropped, not queued; indices wrap with Euclidean
//! modulo.
//!
//! **[`autoplay`]** — Recurring advance deadline with pause/resume. Fires
//! that land mid-transition are dropped by the engine.
//!
//! **[`carousel`]** — The façade wiring the pieces together, with
//! multi-channel dirty tracking (via `understory_dirty`) so hosts only
//! re-render items that changed.
//!
//! **[`card`]** — Opaque display records the engine positions but never
//! interprets.
//!
//! **[`input`]** — The host-facing event vocabulary.
//!
//! **[`time`]** — Monotonic host time, tick-denominated durations, and the
//! rational timebase for millisecond configuration.
//!
//! **[`transform`]** — 3D affine transform type for composing an item's
//! translate/rotate/scale pose into a single matrix.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! tick-loop instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-item
//!   placement change events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod autoplay;
pub mod card;
pub mod carousel;
pub mod dirty;
pub mod input;
pub mod nav;
pub mod ring;
pub mod time;
pub mod trace;
pub mod transform;
