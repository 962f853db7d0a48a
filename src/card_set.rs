//! Presentation handles attached to card identities.
//!
//! A renderer keeps one [`CardSet`] per card art and looks up handles by
//! [`CardRole`]. Rule engines only ever see the identities returned by
//! [`CardSet::playing_cards`].

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;

/// The part a piece of card art plays on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardRole {
    /// The face of a playing card.
    Playing(Card),
    /// The back shown for face-down cards.
    Back,
    /// The placeholder drawn for an empty pile.
    Space,
    /// One of several stack-depth images, by index.
    Stack(usize),
}

/// A registry of presentation handles, one per [`CardRole`].
///
/// `H` is opaque to this crate: a texture id, a bitmap, a file path.
#[derive(Debug, Clone)]
pub struct CardSet<H> {
    /// Handles by role.
    handles: HashMap<CardRole, H>,
    /// Playing-card identities in insertion order.
    order: Vec<Card>,
}

impl<H> CardSet<H> {
    /// Creates an empty card set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Attaches `handle` to `role`, returning the handle it replaces.
    pub fn insert(&mut self, role: CardRole, handle: H) -> Option<H> {
        let previous = self.handles.insert(role, handle);
        if previous.is_none() {
            if let CardRole::Playing(card) = role {
                self.order.push(card);
            }
        }
        previous
    }

    /// Detaches and returns the handle for `role`.
    pub fn remove(&mut self, role: CardRole) -> Option<H> {
        let removed = self.handles.remove(&role);
        if removed.is_some() {
            if let CardRole::Playing(card) = role {
                self.order.retain(|&c| c != card);
            }
        }
        removed
    }

    /// Returns the handle for `role`.
    #[must_use]
    pub fn get(&self, role: CardRole) -> Option<&H> {
        self.handles.get(&role)
    }

    /// Returns the face handle for `card`.
    #[must_use]
    pub fn face(&self, card: Card) -> Option<&H> {
        self.get(CardRole::Playing(card))
    }

    /// Returns whether `card` has a face handle.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.handles.contains_key(&CardRole::Playing(card))
    }

    /// Returns the playing-card identities in insertion order.
    #[must_use]
    pub fn playing_cards(&self) -> &[Card] {
        &self.order
    }

    /// Returns the number of handles of any role.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns whether the set holds no handles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H> Default for CardSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FromIterator<(CardRole, H)> for CardSet<H> {
    fn from_iter<I: IntoIterator<Item = (CardRole, H)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (role, handle) in iter {
            set.insert(role, handle);
        }
        set
    }
}
