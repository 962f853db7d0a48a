//! Ordered card collections with sorting and seeded shuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};

/// Seed applied to a fresh deck's generator until it is explicitly reseeded.
const DEFAULT_SEED: u64 = 0x5EED_CA4D;

/// The order a deck was last arranged in.
///
/// The tag is advisory: it lets [`Deck::sort`] and [`Deck::reverse_sort`]
/// skip work, but it is not re-validated against the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeckOrder {
    /// Clubs, Diamonds, Hearts, Spades; Ace to King within each suit.
    Forward,
    /// The exact mirror of [`DeckOrder::Forward`].
    Reverse,
    /// Shuffled, or of unknown order.
    #[default]
    Random,
}

/// How a shuffle seeds the deck's generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShuffleSeed {
    /// Reseed deterministically from the given value.
    Fixed(u64),
    /// Reseed from operating system entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    Entropy,
    /// Keep using the generator's current state.
    Continue,
}

#[cfg(feature = "std")]
impl Default for ShuffleSeed {
    /// Entropy when the standard library is available.
    fn default() -> Self {
        Self::Entropy
    }
}

#[cfg(not(feature = "std"))]
impl Default for ShuffleSeed {
    fn default() -> Self {
        Self::Continue
    }
}

impl From<i64> for ShuffleSeed {
    /// Maps the integer seed convention: positive values are fixed seeds,
    /// zero asks for entropy and negative values continue the current state.
    fn from(seed: i64) -> Self {
        match seed {
            1.. => Self::Fixed(seed.unsigned_abs()),
            0 => Self::default(),
            _ => Self::Continue,
        }
    }
}

/// A mutable ordered sequence of cards.
///
/// Index 0 is the top of the deck and `len() - 1` is the bottom. The deck
/// owns its random number generator so that shuffles are reproducible per
/// instance.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck.
    cards: Vec<Card>,
    /// The order the cards were last arranged in.
    order: DeckOrder,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an empty deck.
    ///
    /// The generator starts from a fixed seed; use [`Deck::shuffle`] with
    /// [`ShuffleSeed::Fixed`] or [`ShuffleSeed::Entropy`] to reseed it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            order: DeckOrder::Random,
            rng: ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
        }
    }

    /// Creates a deck holding the given cards, in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut deck = Self::new();
        deck.cards = cards;
        deck
    }

    /// Replaces the contents of the deck. The order becomes
    /// [`DeckOrder::Random`].
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.order = DeckOrder::Random;
    }

    /// Appends cards to the bottom of the deck. The order becomes
    /// [`DeckOrder::Random`] if anything was added.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        let before = self.cards.len();
        self.cards.extend(cards);
        if self.cards.len() != before {
            self.order = DeckOrder::Random;
        }
    }

    /// Removes and returns every card, top first.
    pub fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards in the deck, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards, top first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the order the deck was last arranged in.
    #[must_use]
    pub const fn order(&self) -> DeckOrder {
        self.order
    }

    /// Returns the first card matching `suit` and `rank`.
    #[must_use]
    pub fn card(&self, suit: Suit, rank: Option<Rank>) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .find(|card| card.suit == suit && card.rank == rank)
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the top card (index 0).
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the bottom card (index `len() - 1`).
    #[must_use]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Removes the card at `index`, keeping the rest in order.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Removes the top card.
    pub fn remove_top_card(&mut self) -> Option<Card> {
        self.remove_at(0)
    }

    /// Removes the bottom card.
    pub fn remove_bottom_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes the first card matching `suit` and `rank`.
    pub fn remove_card(&mut self, suit: Suit, rank: Option<Rank>) -> Option<Card> {
        let index = self
            .cards
            .iter()
            .position(|card| card.suit == suit && card.rank == rank)?;
        Some(self.cards.remove(index))
    }

    /// Removes every card of `suit`, returned in deck order.
    pub fn remove_cards_of_suit(&mut self, suit: Suit) -> Vec<Card> {
        self.extract(|card| card.suit == suit)
    }

    /// Removes every card of `rank`, returned in deck order.
    pub fn remove_cards_of_rank(&mut self, rank: Rank) -> Vec<Card> {
        self.extract(|card| card.is_rank(rank))
    }

    fn extract(&mut self, mut matches: impl FnMut(&Card) -> bool) -> Vec<Card> {
        let (taken, kept): (Vec<Card>, Vec<Card>) = core::mem::take(&mut self.cards)
            .into_iter()
            .partition(|card| matches(card));
        self.cards = kept;
        taken
    }

    /// Shuffles the deck into a uniformly random permutation.
    ///
    /// With the same [`ShuffleSeed::Fixed`] seed and the same starting order
    /// the result is always the same.
    pub fn shuffle(&mut self, seed: ShuffleSeed) {
        match seed {
            ShuffleSeed::Fixed(value) => self.rng = ChaCha8Rng::seed_from_u64(value),
            #[cfg(feature = "std")]
            ShuffleSeed::Entropy => self.rng = ChaCha8Rng::from_os_rng(),
            ShuffleSeed::Continue => {}
        }

        self.cards.shuffle(&mut self.rng);
        self.order = DeckOrder::Random;
    }

    /// Sorts the deck into [`DeckOrder::Forward`].
    ///
    /// Does nothing if the deck is already in forward order. Jokers keep
    /// their relative order after the ranked cards.
    pub fn sort(&mut self) {
        self.sort_into(DeckOrder::Forward);
    }

    /// Sorts the deck into [`DeckOrder::Reverse`].
    ///
    /// Does nothing if the deck is already in reverse order. Jokers keep
    /// their relative order after the ranked cards.
    pub fn reverse_sort(&mut self) {
        self.sort_into(DeckOrder::Reverse);
    }

    fn sort_into(&mut self, order: DeckOrder) {
        if self.order == order {
            return;
        }

        // `None` keys (jokers) sort last; the sort is stable.
        self.cards
            .sort_by_key(|card| card.sort_key(order).map_or((1, (0, 0)), |key| (0, key)));
        self.order = order;
    }

    /// Reverses the sequence of cards.
    ///
    /// Forward becomes Reverse and vice versa; a random deck stays random.
    pub fn reverse(&mut self) {
        self.cards.reverse();
        self.order = match self.order {
            DeckOrder::Forward => DeckOrder::Reverse,
            DeckOrder::Reverse => DeckOrder::Forward,
            DeckOrder::Random => DeckOrder::Random,
        };
    }

    /// Arranges the deck into `order`.
    ///
    /// Requesting [`DeckOrder::Random`] always reshuffles, continuing the
    /// current generator state.
    pub fn arrange(&mut self, order: DeckOrder) {
        match order {
            DeckOrder::Forward => self.sort(),
            DeckOrder::Reverse => self.reverse_sort(),
            DeckOrder::Random => self.shuffle(ShuffleSeed::Continue),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
