//! Klondike: seven columns, four suit-bound foundations, a reserve and a
//! discard pile.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::deck::{Deck, ShuffleSeed};
use crate::error::{MoveError, RegionError, RemapError};
use crate::options::KlondikeOptions;
use crate::region::{CardTableRegion, RegionKind};

use super::{CardSource, RuleEngine};

mod moves;

/// Number of tableau columns.
pub const COLUMNS: usize = 7;
/// Number of foundations.
pub const FOUNDATIONS: usize = 4;

/// A place on the Klondike table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KlondikeRegion {
    /// The whole face-up run of a column.
    Column(usize),
    /// Only the last card of a column.
    ColumnEnd(usize),
    /// A foundation.
    Foundation(usize),
    /// The reserve (stock).
    Reserve,
    /// The discard (waste) pile.
    Discard,
}

impl From<KlondikeRegion> for CardTableRegion {
    fn from(region: KlondikeRegion) -> Self {
        match region {
            KlondikeRegion::Column(index) => Self::new(RegionKind::Column, index),
            KlondikeRegion::ColumnEnd(index) => Self::new(RegionKind::ColumnEnd, index),
            KlondikeRegion::Foundation(index) => Self::new(RegionKind::Foundation, index),
            KlondikeRegion::Reserve => Self::new(RegionKind::Reserve, 0),
            KlondikeRegion::Discard => Self::new(RegionKind::Discard, 0),
        }
    }
}

impl TryFrom<CardTableRegion> for KlondikeRegion {
    type Error = RegionError;

    fn try_from(region: CardTableRegion) -> Result<Self, Self::Error> {
        let CardTableRegion { kind, index } = region;
        let (limit, build): (usize, fn(usize) -> Self) = match kind {
            RegionKind::Column => (COLUMNS, Self::Column),
            RegionKind::ColumnEnd => (COLUMNS, Self::ColumnEnd),
            RegionKind::Foundation => (FOUNDATIONS, Self::Foundation),
            RegionKind::Reserve => (1, |_| Self::Reserve),
            RegionKind::Discard => (1, |_| Self::Discard),
            RegionKind::Row => return Err(RegionError::WrongKind(kind)),
        };

        if index >= limit {
            return Err(RegionError::IndexOutOfRange(index));
        }
        Ok(build(index))
    }
}

/// A complete Klondike position, used to set up a table directly.
///
/// The last card of every pile is its top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KlondikeLayout {
    /// Face-up cards of each column.
    pub columns: [Vec<Card>; COLUMNS],
    /// Face-down cards beneath each column.
    pub face_down_columns: [Vec<Card>; COLUMNS],
    /// Foundation piles.
    pub foundations: [Vec<Card>; FOUNDATIONS],
    /// Undealt cards; the last one is drawn first.
    pub reserve: Vec<Card>,
    /// Drawn cards; the last one is playable.
    pub discard: Vec<Card>,
}

/// A Klondike rule engine.
///
/// # Example
///
/// ```
/// use patience::{Klondike, KlondikeRegion, RuleEngine, ShuffleSeed, standard_deck};
///
/// let mut game = Klondike::with_seed(&standard_deck(), ShuffleSeed::Fixed(7));
/// assert_eq!(game.reserve().len(), 24);
/// assert_eq!(game.click(KlondikeRegion::Reserve), Some(KlondikeRegion::Discard));
/// assert_eq!(game.discard().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Klondike {
    /// Game options.
    options: KlondikeOptions,
    /// Source cards and the undealt deck.
    source: CardSource,
    /// Face-up cards of each column.
    columns: [Vec<Card>; COLUMNS],
    /// Face-down cards beneath each column.
    face_down_columns: [Vec<Card>; COLUMNS],
    /// Foundation piles.
    foundations: [Vec<Card>; FOUNDATIONS],
    /// Suit each foundation accepts, bound by its first ace.
    foundation_suits: [Option<Suit>; FOUNDATIONS],
    /// Undealt cards.
    reserve: Vec<Card>,
    /// Drawn cards.
    discard: Vec<Card>,
    /// Times the discard pile has been turned back into the reserve.
    redeals: u32,
}

impl Klondike {
    /// Creates an uninitialised game with default options.
    ///
    /// Every pile is empty, so no move is legal until
    /// [`RuleEngine::initialise`] and [`RuleEngine::restart`] are called.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(KlondikeOptions::default())
    }

    /// Creates an uninitialised game with the given options.
    #[must_use]
    pub fn with_options(options: KlondikeOptions) -> Self {
        Self {
            options,
            source: CardSource::default(),
            columns: Default::default(),
            face_down_columns: Default::default(),
            foundations: Default::default(),
            foundation_suits: [None; FOUNDATIONS],
            reserve: Vec::new(),
            discard: Vec::new(),
            redeals: 0,
        }
    }

    /// Creates a game from `cards` and deals it with an entropy seed, or
    /// by continuing the fixed-state generator without `std`.
    #[must_use]
    pub fn with_cards(cards: &[Card]) -> Self {
        Self::with_seed(cards, ShuffleSeed::default())
    }

    /// Creates a game from `cards` and deals it with `seed`.
    #[must_use]
    pub fn with_seed(cards: &[Card], seed: ShuffleSeed) -> Self {
        let mut game = Self::new();
        game.initialise(cards, seed);
        game.restart();
        game
    }

    /// Creates a game in the given position.
    ///
    /// A non-empty foundation is bound to the suit of its bottom card. The
    /// cards of the layout become the engine's playing cards.
    #[must_use]
    pub fn with_layout(layout: KlondikeLayout, options: KlondikeOptions) -> Self {
        let KlondikeLayout {
            columns,
            face_down_columns,
            foundations,
            reserve,
            discard,
        } = layout;

        let mut game = Self::with_options(options);
        game.foundation_suits =
            core::array::from_fn(|index| foundations[index].first().map(|card| card.suit));
        game.columns = columns;
        game.face_down_columns = face_down_columns;
        game.foundations = foundations;
        game.reserve = reserve;
        game.discard = discard;
        game.source = CardSource::in_play(game.table_cards().collect());
        game
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &KlondikeOptions {
        &self.options
    }

    /// Returns the face-up cards of each column.
    #[must_use]
    pub const fn columns(&self) -> &[Vec<Card>; COLUMNS] {
        &self.columns
    }

    /// Returns the face-down cards beneath each column.
    #[must_use]
    pub const fn face_down_columns(&self) -> &[Vec<Card>; COLUMNS] {
        &self.face_down_columns
    }

    /// Returns the foundation piles.
    #[must_use]
    pub const fn foundations(&self) -> &[Vec<Card>; FOUNDATIONS] {
        &self.foundations
    }

    /// Returns the suit each foundation is bound to, if any.
    #[must_use]
    pub const fn foundation_suits(&self) -> &[Option<Suit>; FOUNDATIONS] {
        &self.foundation_suits
    }

    /// Returns the reserve; its last card is drawn first.
    #[must_use]
    pub fn reserve(&self) -> &[Card] {
        &self.reserve
    }

    /// Returns the discard pile; its last card is playable.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the cards not currently on the table.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.source.deck
    }

    /// Returns how many times the discard pile has been recycled.
    #[must_use]
    pub const fn redeals(&self) -> u32 {
        self.redeals
    }

    /// Iterates over every card on the table.
    fn table_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.columns
            .iter()
            .chain(&self.face_down_columns)
            .chain(&self.foundations)
            .chain([&self.reserve, &self.discard])
            .flatten()
            .copied()
    }

    fn reset_bindings(&mut self) {
        self.foundation_suits = [None; FOUNDATIONS];
        self.redeals = 0;
    }
}

impl Default for Klondike {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine for Klondike {
    type Region = KlondikeRegion;

    fn initialise(&mut self, cards: &[Card], seed: ShuffleSeed) {
        self.columns = Default::default();
        self.face_down_columns = Default::default();
        self.foundations = Default::default();
        self.reserve.clear();
        self.discard.clear();
        self.reset_bindings();
        self.source.bind(cards, seed);
    }

    fn restart(&mut self) {
        self.gather_cards();
        self.source.reshuffle();
        log::debug!("klondike: restarting with {} cards", self.source.deck.len());
        self.deal();
    }

    fn deal(&mut self) {
        self.gather_cards();
        self.reset_bindings();

        let deck = &mut self.source.deck;
        for (index, (column, face_down)) in self
            .columns
            .iter_mut()
            .zip(self.face_down_columns.iter_mut())
            .enumerate()
        {
            face_down.extend((0..index).map_while(|_| deck.remove_top_card()));
            column.extend(deck.remove_top_card());
        }
        self.reserve = deck.take_cards();

        log::debug!(
            "klondike: dealt {} cards to the reserve",
            self.reserve.len()
        );
    }

    fn gather_cards(&mut self) {
        let mut gathered = Vec::new();
        for pile in self
            .columns
            .iter_mut()
            .chain(self.face_down_columns.iter_mut())
            .chain(self.foundations.iter_mut())
            .chain([&mut self.reserve, &mut self.discard])
        {
            gathered.append(pile);
        }

        if !gathered.is_empty() {
            log::debug!("klondike: gathered {} cards", gathered.len());
        }
        self.source.gather(gathered);
    }

    fn check_move(&self, from: KlondikeRegion, to: KlondikeRegion) -> Result<(), MoveError> {
        self.check(from, to)
    }

    fn move_cards(&mut self, from: KlondikeRegion, to: KlondikeRegion) -> bool {
        if self.check(from, to).is_err() {
            return false;
        }

        self.apply(from, to);
        log::trace!("klondike: moved {from:?} -> {to:?}");
        true
    }

    fn click(&mut self, from: KlondikeRegion) -> Option<KlondikeRegion> {
        let to = match from {
            KlondikeRegion::Reserve => Some(KlondikeRegion::Discard),
            KlondikeRegion::Discard | KlondikeRegion::Column(_) | KlondikeRegion::ColumnEnd(_) => {
                (0..FOUNDATIONS)
                    .map(KlondikeRegion::Foundation)
                    .find(|&to| self.check(from, to).is_ok())
            }
            KlondikeRegion::Foundation(_) => None,
        }?;

        self.move_cards(from, to).then_some(to)
    }

    fn is_game_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.last().is_some_and(|card| card.is_rank(Rank::King)))
    }

    fn playing_cards(&self) -> &[Card] {
        self.source.playing_cards()
    }

    fn set_playing_cards(&mut self, cards: &[Card]) -> Result<(), RemapError> {
        let in_play: Vec<Card> = self
            .table_cards()
            .chain(self.source.deck.iter().copied())
            .collect();
        self.source.remap(in_play.into_iter(), cards)
    }
}
