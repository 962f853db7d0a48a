//! Error types for engine operations.
//!
//! None of these are fatal. The boolean move API collapses them into
//! `false`; [`crate::game::RuleEngine::check_move`] exposes the reason.

use thiserror::Error;

use crate::card::Card;
use crate::region::RegionKind;

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A region does not name a pile in this game.
    #[error("region does not name a pile in this game")]
    InvalidRegion,
    /// Source and destination are the same pile.
    #[error("source and destination are the same pile")]
    SameRegion,
    /// There is no card to move.
    #[error("source pile is empty")]
    EmptySource,
    /// The game has no rule for this pair of regions.
    #[error("unsupported move between these regions")]
    UnsupportedMove,
    /// Only a King may start an empty column.
    #[error("only a king may be placed on an empty column")]
    NotAKing,
    /// The destination column still has face-down cards.
    #[error("destination column has face-down cards")]
    OccupiedColumn,
    /// The moved card is not one rank below the destination.
    #[error("rank does not follow the destination card")]
    RankMismatch,
    /// The moved card has the same colour as the destination.
    #[error("colours must alternate")]
    ColourMismatch,
    /// The moved card's suit does not match the foundation.
    #[error("suit does not match the foundation")]
    SuitMismatch,
    /// An empty foundation only accepts an Ace.
    #[error("an empty foundation only accepts an ace")]
    NotAnAce,
    /// A single card can only leave a column whose face-up run is that card.
    #[error("column has more than one face-up card")]
    MultipleFaceUp,
    /// Both the reserve and the discard pile are empty.
    #[error("nothing left to draw")]
    NothingToDraw,
    /// The reserve is empty and no redeals remain.
    #[error("no redeals remain")]
    RedealLimitReached,
}

/// Errors converting a [`crate::region::CardTableRegion`] into a game region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegionError {
    /// The game has no piles of this kind.
    #[error("this game has no {0:?} piles")]
    WrongKind(RegionKind),
    /// The index is past the last pile of its kind.
    #[error("pile index {0} is out of range")]
    IndexOutOfRange(usize),
}

/// Errors replacing an engine's playing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemapError {
    /// A card in play has no counterpart in the new source.
    #[error("card {0} is missing from the new card source")]
    MissingCard(Card),
}
