// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing input vocabulary.
//!
//! Hosts translate their native events (DOM events, winit events, terminal
//! keys) into [`InputEvent`]s and feed them to
//! [`Carousel::on_input`](crate::carousel::Carousel::on_input). The engine
//! defines only the events it reacts to; everything else stays in the host.

/// Navigation keys the carousel responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Move focus to the previous item.
    ArrowLeft,
    /// Move focus to the next item.
    ArrowRight,
}

/// A discrete input event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A navigation key was pressed.
    ///
    /// Keyboard navigation does not pause autoplay; it is rate-limited only
    /// by the settling latch.
    Key(NavKey),
    /// The pointer entered the carousel region; autoplay pauses so the user
    /// can inspect the focused item.
    PointerEnter,
    /// The pointer left the carousel region; autoplay resumes with a fresh
    /// interval window.
    PointerLeave,
    /// A dot-indicator (or item) was activated, requesting direct focus.
    Select(usize),
}
