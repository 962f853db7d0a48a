//! Solitaire rule engines with optional `no_std` support.
//!
//! The crate provides a card and deck model, game-agnostic table regions,
//! and rule engines for Klondike ([`Klondike`]) and Beleaguered Castle
//! ([`BeleagueredCastle`]) behind the shared [`RuleEngine`] trait. Engines
//! work on card identities only; presentation handles live in a separate
//! [`CardSet`].
//!
//! # Example
//!
//! ```
//! use patience::{Klondike, KlondikeRegion, RuleEngine, ShuffleSeed, standard_deck};
//!
//! let mut game = Klondike::with_seed(&standard_deck(), ShuffleSeed::Fixed(42));
//! assert_eq!(game.columns()[6].len(), 1);
//! assert_eq!(game.face_down_columns()[6].len(), 6);
//! assert!(game.is_legal_move(KlondikeRegion::Reserve, KlondikeRegion::Discard));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod card_set;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod region;

// Re-export main types
pub use card::{Card, Colour, DECK_SIZE, Rank, Suit, standard_deck};
pub use card_set::{CardRole, CardSet};
pub use deck::{Deck, DeckOrder, ShuffleSeed};
pub use error::{MoveError, RegionError, RemapError};
pub use game::{
    AnyGame, BeleagueredCastle, CastleLayout, CastleRegion, GameKind, Klondike, KlondikeLayout,
    KlondikeRegion, RuleEngine,
};
pub use options::KlondikeOptions;
pub use region::{CardTableRegion, RegionKind};
