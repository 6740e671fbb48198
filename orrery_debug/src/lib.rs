// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for orrery
//! diagnostics.
//!
//! This crate provides [`TraceSink`](orrery_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory event recording for later export.
//! - [`chrome::export`] — writes Chrome Trace Event Format JSON from a
//!   recording.

pub mod chrome;
pub mod pretty;
pub mod recorder;
