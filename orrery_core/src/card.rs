// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display records for carousel items.
//!
//! A [`Card`] is the opaque content the engine positions: the engine never
//! interprets these fields, it only hands them back to the host alongside a
//! [`Placement`](crate::ring::Placement). Identity is the card's index in the
//! carousel's ordered collection; the order defines angular position and
//! visual neighbor relationships.

use alloc::string::String;

/// One item's display record.
///
/// All fields are opaque to the engine. `image` and `link` are references
/// into host-owned content (asset keys, URLs, route names) rather than loaded
/// resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Card {
    /// Headline text.
    pub title: String,
    /// Reference to the item's artwork.
    pub image: String,
    /// Short body text shown with the focused item.
    pub summary: String,
    /// Category label (used by hosts for badges/filtering).
    pub category: String,
    /// Navigation target when the focused item is activated.
    pub link: String,
}

impl Card {
    /// Creates a card with the given title and artwork reference, leaving the
    /// remaining fields empty.
    #[must_use]
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            ..Self::default()
        }
    }
}
