//! Rule engines and the contract they share.
//!
//! Every game implements [`RuleEngine`] over its own closed region type.
//! Callers that only hold a [`CardTableRegion`] use the provided
//! `*_table_*` methods, or [`AnyGame`] when the game is chosen at runtime.

use crate::card::Card;
use crate::deck::ShuffleSeed;
use crate::error::{MoveError, RegionError, RemapError};
use crate::region::CardTableRegion;

pub mod castle;
pub mod klondike;
mod source;

pub use castle::{BeleagueredCastle, CastleLayout, CastleRegion};
pub use klondike::{Klondike, KlondikeLayout, KlondikeRegion};

pub(crate) use source::CardSource;

/// The operations every solitaire rule engine provides.
///
/// Engines own their deck and piles. They never draw anything; the caller
/// queries legality, requests moves and re-reads the pile views.
pub trait RuleEngine {
    /// The places a card can be addressed in this game.
    type Region: Copy
        + Eq
        + core::fmt::Debug
        + Into<CardTableRegion>
        + TryFrom<CardTableRegion, Error = RegionError>;

    /// Binds the source cards and the seed for the next deal. Does not deal.
    fn initialise(&mut self, cards: &[Card], seed: ShuffleSeed);

    /// Resets bindings, gathers every card, reshuffles and deals.
    ///
    /// The seed given to [`RuleEngine::initialise`] applies to the first
    /// restart after it; later restarts continue the same generator.
    fn restart(&mut self);

    /// Distributes the deck into fresh piles.
    fn deal(&mut self);

    /// Moves every card on the table back into the deck.
    fn gather_cards(&mut self);

    /// Checks whether moving from `from` to `to` is legal.
    ///
    /// # Errors
    ///
    /// Returns the reason the move is rejected.
    fn check_move(&self, from: Self::Region, to: Self::Region) -> Result<(), MoveError>;

    /// Returns whether moving from `from` to `to` is legal.
    fn is_legal_move(&self, from: Self::Region, to: Self::Region) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Performs the move if it is legal. Returns whether anything moved.
    fn move_cards(&mut self, from: Self::Region, to: Self::Region) -> bool;

    /// Performs the single-region action for `from`, such as drawing from
    /// the reserve. Returns the region that received cards.
    fn click(&mut self, from: Self::Region) -> Option<Self::Region>;

    /// Returns whether the game has been won.
    fn is_game_won(&self) -> bool;

    /// Returns the cards the engine was initialised with.
    fn playing_cards(&self) -> &[Card];

    /// Replaces the source cards without disturbing the table.
    ///
    /// # Errors
    ///
    /// Returns an error, and changes nothing, if a card currently in play
    /// has no counterpart in `cards`.
    fn set_playing_cards(&mut self, cards: &[Card]) -> Result<(), RemapError>;

    /// [`RuleEngine::is_legal_move`] over generic regions. Malformed regions
    /// are never legal.
    fn is_legal_table_move(&self, from: CardTableRegion, to: CardTableRegion) -> bool {
        match (Self::Region::try_from(from), Self::Region::try_from(to)) {
            (Ok(from), Ok(to)) => self.is_legal_move(from, to),
            _ => false,
        }
    }

    /// [`RuleEngine::move_cards`] over generic regions. Malformed regions
    /// never move anything.
    fn move_table_cards(&mut self, from: CardTableRegion, to: CardTableRegion) -> bool {
        match (Self::Region::try_from(from), Self::Region::try_from(to)) {
            (Ok(from), Ok(to)) => self.move_cards(from, to),
            _ => false,
        }
    }

    /// [`RuleEngine::click`] over generic regions.
    fn click_table(&mut self, from: CardTableRegion) -> Option<CardTableRegion> {
        let from = Self::Region::try_from(from).ok()?;
        self.click(from).map(Into::into)
    }
}

/// The games this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameKind {
    /// Klondike, with a reserve and a discard pile.
    Klondike,
    /// Beleaguered Castle, with eight rows and pre-placed aces.
    BeleagueredCastle,
}

/// A rule engine chosen at runtime, addressed with [`CardTableRegion`].
#[derive(Debug, Clone)]
pub enum AnyGame {
    /// A Klondike game.
    Klondike(Klondike),
    /// A Beleaguered Castle game.
    BeleagueredCastle(BeleagueredCastle),
}

macro_rules! dispatch {
    ($game:expr, $engine:ident => $body:expr) => {
        match $game {
            AnyGame::Klondike($engine) => $body,
            AnyGame::BeleagueredCastle($engine) => $body,
        }
    };
}

impl AnyGame {
    /// Creates an uninitialised engine of the given kind.
    #[must_use]
    pub fn new(kind: GameKind) -> Self {
        match kind {
            GameKind::Klondike => Self::Klondike(Klondike::new()),
            GameKind::BeleagueredCastle => Self::BeleagueredCastle(BeleagueredCastle::new()),
        }
    }

    /// Returns which game this is.
    #[must_use]
    pub const fn kind(&self) -> GameKind {
        match self {
            Self::Klondike(_) => GameKind::Klondike,
            Self::BeleagueredCastle(_) => GameKind::BeleagueredCastle,
        }
    }

    /// See [`RuleEngine::initialise`].
    pub fn initialise(&mut self, cards: &[Card], seed: ShuffleSeed) {
        dispatch!(self, engine => engine.initialise(cards, seed));
    }

    /// See [`RuleEngine::restart`].
    pub fn restart(&mut self) {
        dispatch!(self, engine => engine.restart());
    }

    /// See [`RuleEngine::is_legal_table_move`].
    #[must_use]
    pub fn is_legal_move(&self, from: CardTableRegion, to: CardTableRegion) -> bool {
        dispatch!(self, engine => engine.is_legal_table_move(from, to))
    }

    /// See [`RuleEngine::move_table_cards`].
    pub fn move_cards(&mut self, from: CardTableRegion, to: CardTableRegion) -> bool {
        dispatch!(self, engine => engine.move_table_cards(from, to))
    }

    /// See [`RuleEngine::click_table`].
    pub fn click(&mut self, from: CardTableRegion) -> Option<CardTableRegion> {
        dispatch!(self, engine => engine.click_table(from))
    }

    /// See [`RuleEngine::is_game_won`].
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        dispatch!(self, engine => engine.is_game_won())
    }

    /// See [`RuleEngine::set_playing_cards`].
    ///
    /// # Errors
    ///
    /// Returns an error if a card in play is missing from `cards`.
    pub fn set_playing_cards(&mut self, cards: &[Card]) -> Result<(), RemapError> {
        dispatch!(self, engine => engine.set_playing_cards(cards))
    }
}
