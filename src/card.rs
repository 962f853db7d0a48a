//! Card identity types.

extern crate alloc;

use alloc::vec::Vec;

use crate::deck::DeckOrder;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// The red joker.
    RedJoker,
    /// The black joker.
    BlackJoker,
}

impl Suit {
    /// The four standard suits in canonical (forward) order.
    pub const STANDARD: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the position of a standard suit in [`Suit::STANDARD`].
    ///
    /// Jokers have no position and return `None`.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Clubs => Some(0),
            Self::Diamonds => Some(1),
            Self::Hearts => Some(2),
            Self::Spades => Some(3),
            Self::RedJoker | Self::BlackJoker => None,
        }
    }

    /// Returns the standard suit at `index`, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::STANDARD.len() {
            Some(Self::STANDARD[index])
        } else {
            None
        }
    }

    /// Returns the colour of the suit.
    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Self::Diamonds | Self::Hearts | Self::RedJoker => Colour::Red,
            Self::Clubs | Self::Spades | Self::BlackJoker => Colour::Black,
        }
    }

    /// Returns whether this is one of the two jokers.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::RedJoker | Self::BlackJoker)
    }
}

/// Card colour, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colour {
    /// Hearts, diamonds and the red joker.
    Red,
    /// Clubs, spades and the black joker.
    Black,
}

/// Card rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Converts a numeric value in `1..=13` into a rank.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self::ALL[value as usize - 1])
        } else {
            None
        }
    }

    /// Returns the numeric value of the rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank one above this one, or `None` for a King.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// Returns the rank one below this one, or `None` for an Ace.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        Self::from_value(self.value() - 1)
    }
}

/// A playing card identity.
///
/// Cards carry no presentation data; see [`crate::card_set::CardSet`] for
/// attaching face images or other handles to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card, `None` for jokers.
    pub rank: Option<Rank>,
}

impl Card {
    /// Creates a new ranked card.
    ///
    /// Note: This function does not reject joker suits. A ranked joker is
    /// accepted but never fits a foundation.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank: Some(rank),
        }
    }

    /// Creates a rankless joker of the given suit.
    #[must_use]
    pub const fn joker(suit: Suit) -> Self {
        Self { suit, rank: None }
    }

    /// Returns the colour of the card.
    #[must_use]
    pub const fn colour(self) -> Colour {
        self.suit.colour()
    }

    /// Returns whether the card has the given rank.
    #[must_use]
    pub fn is_rank(self, rank: Rank) -> bool {
        self.rank == Some(rank)
    }

    /// Returns whether the rank of `self` is exactly one below the rank of
    /// `other`, ignoring suit.
    ///
    /// A Six is one below a Seven. Jokers are never one below anything.
    #[must_use]
    pub fn is_one_below(self, other: Self) -> bool {
        match (self.rank, other.rank) {
            (Some(mine), Some(theirs)) => mine.next() == Some(theirs),
            _ => false,
        }
    }

    /// Returns the ordering key of the card for a canonical sort.
    ///
    /// Cards without a canonical slot (jokers, or the `Random` order) map to
    /// `None`, which sorts after every ranked card.
    #[must_use]
    pub fn sort_key(self, order: DeckOrder) -> Option<(usize, u8)> {
        let suit = self.suit.index()?;
        let rank = self.rank?.value();
        match order {
            DeckOrder::Forward => Some((suit, rank)),
            DeckOrder::Reverse => Some((3 - suit, 13 - rank)),
            DeckOrder::Random => None,
        }
    }
}

impl core::fmt::Display for Card {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let suit = match self.suit {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
            Suit::RedJoker => return f.write_str("RJ"),
            Suit::BlackJoker => return f.write_str("BJ"),
        };
        let rank = match self.rank {
            Some(Rank::Ace) => "A",
            Some(Rank::Two) => "2",
            Some(Rank::Three) => "3",
            Some(Rank::Four) => "4",
            Some(Rank::Five) => "5",
            Some(Rank::Six) => "6",
            Some(Rank::Seven) => "7",
            Some(Rank::Eight) => "8",
            Some(Rank::Nine) => "9",
            Some(Rank::Ten) => "T",
            Some(Rank::Jack) => "J",
            Some(Rank::Queen) => "Q",
            Some(Rank::King) => "K",
            None => "?",
        };
        write!(f, "{rank}{suit}")
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;

/// Returns the 52 standard cards in forward order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}
