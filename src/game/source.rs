//! Deck ownership shared by every engine.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{Deck, ShuffleSeed};
use crate::error::RemapError;

/// The cards an engine was initialised with, plus the deck they live in
/// while off the table.
#[derive(Debug, Clone, Default)]
pub(crate) struct CardSource {
    /// Undealt cards.
    pub(crate) deck: Deck,
    /// The source the engine was bound to.
    playing_cards: Vec<Card>,
    /// Seed for the next reshuffle; taken once, then the generator continues.
    seed: Option<ShuffleSeed>,
}

impl CardSource {
    /// A source whose cards are all already on the table.
    pub(crate) fn in_play(cards: Vec<Card>) -> Self {
        Self {
            deck: Deck::new(),
            playing_cards: cards,
            seed: None,
        }
    }

    pub(crate) fn bind(&mut self, cards: &[Card], seed: ShuffleSeed) {
        self.playing_cards = cards.to_vec();
        self.deck.set_cards(cards.to_vec());
        self.seed = Some(seed);
    }

    pub(crate) fn playing_cards(&self) -> &[Card] {
        &self.playing_cards
    }

    /// Returns cards from the table to the deck.
    pub(crate) fn gather(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.deck.add_cards(cards);
    }

    /// Puts the deck into canonical order, then shuffles it, so the deal
    /// depends only on the seed and not on how the last game ended.
    pub(crate) fn reshuffle(&mut self) {
        self.deck.sort();
        self.deck
            .shuffle(self.seed.take().unwrap_or(ShuffleSeed::Continue));
    }

    /// Adopts `cards` as the source if it covers every card in `in_play`.
    pub(crate) fn remap(
        &mut self,
        mut in_play: impl Iterator<Item = Card>,
        cards: &[Card],
    ) -> Result<(), RemapError> {
        let lookup = Deck::from_cards(cards.to_vec());
        if let Some(missing) = in_play.find(|card| lookup.card(card.suit, card.rank).is_none()) {
            log::warn!("rejected card source: {missing} is missing");
            return Err(RemapError::MissingCard(missing));
        }

        log::debug!("remapped card source to {} cards", cards.len());
        self.playing_cards = lookup.into_cards();
        Ok(())
    }
}
