// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Orrery uses multi-channel dirty tracking (via [`understory_dirty`]) so a
//! host only re-renders the items that actually changed. Each channel is an
//! independent category of change.
//!
//! # Propagation semantics
//!
//! - **Propagating** — [`PLACEMENT`] uses
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) with dependency edges
//!   from every item to a synthetic *focus key* (slot index `N`, one past
//!   the last item). A focus move marks the focus key; propagation then
//!   reaches every item, because each item's pose is a function of the
//!   focus. Single-item replacement never touches this channel — swapping a
//!   card leaves its pose unchanged.
//!
//! - **Local-only** — [`CONTENT`] is marked with the default policy when a
//!   card is replaced in place. Only the replaced item appears in the drain
//!   output.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`Carousel::on_tick`](crate::carousel::Carousel::on_tick) drains both
//! channels and surfaces the results as
//! [`FrameChanges`](crate::carousel::FrameChanges).

use understory_dirty::Channel;

/// An item's projected pose changed — placement must be recomputed.
pub const PLACEMENT: Channel = Channel::new(0);

/// An item's display record was replaced — pose unchanged, content stale.
pub const CONTENT: Channel = Channel::new(1);
