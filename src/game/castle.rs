//! Beleaguered Castle: eight rows, aces pre-placed on the foundations, and
//! single-card moves that build down regardless of suit.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::deck::{Deck, ShuffleSeed};
use crate::error::{MoveError, RegionError, RemapError};
use crate::region::{CardTableRegion, RegionKind};

use super::{CardSource, RuleEngine};

/// Number of tableau rows.
pub const ROWS: usize = 8;
/// Number of foundations, one per standard suit.
pub const FOUNDATIONS: usize = 4;

/// A place on the Beleaguered Castle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastleRegion {
    /// A tableau row; only its last card moves.
    Row(usize),
    /// The foundation of the suit with this [`Suit::index`].
    Foundation(usize),
}

impl From<CastleRegion> for CardTableRegion {
    fn from(region: CastleRegion) -> Self {
        match region {
            CastleRegion::Row(index) => Self::new(RegionKind::Row, index),
            CastleRegion::Foundation(index) => Self::new(RegionKind::Foundation, index),
        }
    }
}

impl TryFrom<CardTableRegion> for CastleRegion {
    type Error = RegionError;

    fn try_from(region: CardTableRegion) -> Result<Self, Self::Error> {
        match region.kind {
            RegionKind::Row if region.index < ROWS => Ok(Self::Row(region.index)),
            RegionKind::Foundation if region.index < FOUNDATIONS => {
                Ok(Self::Foundation(region.index))
            }
            RegionKind::Row | RegionKind::Foundation => {
                Err(RegionError::IndexOutOfRange(region.index))
            }
            kind => Err(RegionError::WrongKind(kind)),
        }
    }
}

/// A complete Beleaguered Castle position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastleLayout {
    /// Tableau rows; the last card of each is its top.
    pub rows: [Vec<Card>; ROWS],
    /// Foundations indexed by suit.
    pub foundations: [Vec<Card>; FOUNDATIONS],
}

/// A Beleaguered Castle rule engine.
#[derive(Debug, Clone, Default)]
pub struct BeleagueredCastle {
    /// Source cards and the undealt deck.
    source: CardSource,
    /// Tableau rows.
    rows: [Vec<Card>; ROWS],
    /// Foundations indexed by suit.
    foundations: [Vec<Card>; FOUNDATIONS],
}

impl BeleagueredCastle {
    /// Creates an uninitialised game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
    #[must_use]
    pub fn with_layout(layout: CastleLayout) -> Self {
        let mut game = Self {
            source: CardSource::default(),
            rows: layout.rows,
            foundations: layout.foundations,
        };
        game.source = CardSource::in_play(game.table_cards().collect());
        game
    }

    /// Returns the tableau rows.
    #[must_use]
    pub const fn rows(&self) -> &[Vec<Card>; ROWS] {
        &self.rows
    }

    /// Returns the foundations, indexed by suit.
    #[must_use]
    pub const fn foundations(&self) -> &[Vec<Card>; FOUNDATIONS] {
        &self.foundations
    }

    /// Returns the cards not currently on the table.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.source.deck
    }

    fn table_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.rows
            .iter()
            .chain(&self.foundations)
            .flatten()
            .copied()
    }

    const fn in_range(region: CastleRegion) -> bool {
        match region {
            CastleRegion::Row(index) => index < ROWS,
            CastleRegion::Foundation(index) => index < FOUNDATIONS,
        }
    }
}

impl RuleEngine for BeleagueredCastle {
    type Region = CastleRegion;

    fn initialise(&mut self, cards: &[Card], seed: ShuffleSeed) {
        self.rows = Default::default();
        self.foundations = Default::default();
        self.source.bind(cards, seed);
    }

    fn restart(&mut self) {
        self.gather_cards();
        self.source.reshuffle();
        log::debug!("castle: restarting with {} cards", self.source.deck.len());
        self.deal();
    }

    fn deal(&mut self) {
        self.gather_cards();

        let deck = &mut self.source.deck;
        for suit in Suit::STANDARD {
            if let (Some(index), Some(ace)) = (suit.index(), deck.remove_card(suit, Some(Rank::Ace)))
            {
                self.foundations[index].push(ace);
            }
        }

        for (position, card) in deck.take_cards().into_iter().enumerate() {
            self.rows[position % ROWS].push(card);
        }

        log::debug!(
            "castle: dealt {} aces and {} row cards",
            self.foundations.iter().map(Vec::len).sum::<usize>(),
            self.rows.iter().map(Vec::len).sum::<usize>()
        );
    }

    fn gather_cards(&mut self) {
        let mut gathered = Vec::new();
        for pile in self.rows.iter_mut().chain(self.foundations.iter_mut()) {
            gathered.append(pile);
        }

        if !gathered.is_empty() {
            log::debug!("castle: gathered {} cards", gathered.len());
        }
        self.source.gather(gathered);
    }

    fn check_move(&self, from: CastleRegion, to: CastleRegion) -> Result<(), MoveError> {
        if !Self::in_range(from) || !Self::in_range(to) {
            return Err(MoveError::InvalidRegion);
        }

        let CastleRegion::Row(src) = from else {
            return Err(MoveError::UnsupportedMove);
        };
        let card = *self.rows[src].last().ok_or(MoveError::EmptySource)?;

        match to {
            CastleRegion::Row(dst) if dst == src => Err(MoveError::SameRegion),
            CastleRegion::Row(dst) => match self.rows[dst].last() {
                Some(&top) if !card.is_one_below(top) => Err(MoveError::RankMismatch),
                _ => Ok(()),
            },
            CastleRegion::Foundation(dst) => {
                if card.suit.index() != Some(dst) {
                    return Err(MoveError::SuitMismatch);
                }
                match self.foundations[dst].last() {
                    None if card.is_rank(Rank::Ace) => Ok(()),
                    None => Err(MoveError::NotAnAce),
                    Some(&top) if top.is_one_below(card) => Ok(()),
                    Some(_) => Err(MoveError::RankMismatch),
                }
            }
        }
    }

    fn move_cards(&mut self, from: CastleRegion, to: CastleRegion) -> bool {
        if self.check_move(from, to).is_err() {
            return false;
        }

        let CastleRegion::Row(src) = from else {
            return false;
        };
        let Some(card) = self.rows[src].pop() else {
            return false;
        };
        match to {
            CastleRegion::Row(dst) => self.rows[dst].push(card),
            CastleRegion::Foundation(dst) => self.foundations[dst].push(card),
        }

        log::trace!("castle: moved {card} {from:?} -> {to:?}");
        true
    }

    fn click(&mut self, from: CastleRegion) -> Option<CastleRegion> {
        let CastleRegion::Row(src) = from else {
            return None;
        };
        let index = self.rows.get(src)?.last()?.suit.index()?;
        let to = CastleRegion::Foundation(index);

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
