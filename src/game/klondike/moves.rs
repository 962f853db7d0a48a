use crate::card::{Card, Rank};
use crate::error::MoveError;

use super::{COLUMNS, FOUNDATIONS, Klondike, KlondikeRegion};

impl Klondike {
    const fn in_range(region: KlondikeRegion) -> bool {
        match region {
            KlondikeRegion::Column(index) | KlondikeRegion::ColumnEnd(index) => index < COLUMNS,
            KlondikeRegion::Foundation(index) => index < FOUNDATIONS,
            KlondikeRegion::Reserve | KlondikeRegion::Discard => true,
        }
    }

    /// The single rule authority: `move_cards` applies exactly what this accepts.
    pub(super) fn check(&self, from: KlondikeRegion, to: KlondikeRegion) -> Result<(), MoveError> {
        use KlondikeRegion::{Column, ColumnEnd, Discard, Foundation, Reserve};

        if !Self::in_range(from) || !Self::in_range(to) {
            return Err(MoveError::InvalidRegion);
        }

        match (from, to) {
            (Column(src) | ColumnEnd(src), Column(dst)) if src == dst => Err(MoveError::SameRegion),
            (Column(src), Column(dst)) => {
                let first = *self.columns[src].first().ok_or(MoveError::EmptySource)?;
                self.check_column_target(first, dst)
            }
            (ColumnEnd(src), Column(dst)) => {
                let card = self.single_face_up(src)?;
                self.check_column_target(card, dst)
            }
            (ColumnEnd(src), Foundation(dst)) => {
                let card = *self.columns[src].last().ok_or(MoveError::EmptySource)?;
                self.check_foundation_target(card, dst)
            }
            (Column(src), Foundation(dst)) => {
                let card = self.single_face_up(src)?;
                self.check_foundation_target(card, dst)
            }
            (Discard, Column(dst)) => {
                let card = *self.discard.last().ok_or(MoveError::EmptySource)?;
                self.check_column_target(card, dst)
            }
            (Discard, Foundation(dst)) => {
                let card = *self.discard.last().ok_or(MoveError::EmptySource)?;
                self.check_foundation_target(card, dst)
            }
            (Reserve, Discard) => self.check_draw(),
            _ => Err(MoveError::UnsupportedMove),
        }
    }

    /// Returns the only face-up card of a column.
    fn single_face_up(&self, column: usize) -> Result<Card, MoveError> {
        match self.columns[column].as_slice() {
            [] => Err(MoveError::EmptySource),
            [card] => Ok(*card),
            _ => Err(MoveError::MultipleFaceUp),
        }
    }

    /// Kings start empty columns; otherwise ranks descend and colours alternate.
    fn check_column_target(&self, card: Card, column: usize) -> Result<(), MoveError> {
        let Some(&top) = self.columns[column].last() else {
            if !self.face_down_columns[column].is_empty() {
                return Err(MoveError::OccupiedColumn);
            }
            return if card.is_rank(Rank::King) {
                Ok(())
            } else {
                Err(MoveError::NotAKing)
            };
        };

        if !card.is_one_below(top) {
            return Err(MoveError::RankMismatch);
        }
        if card.colour() == top.colour() {
            return Err(MoveError::ColourMismatch);
        }
        Ok(())
    }

    /// An unbound or matching empty foundation takes an Ace; a started one
    /// takes the next rank of its bound suit.
    fn check_foundation_target(&self, card: Card, foundation: usize) -> Result<(), MoveError> {
        let bound = self.foundation_suits[foundation];

        let Some(&top) = self.foundations[foundation].last() else {
            if bound.is_some_and(|suit| suit != card.suit) || card.suit.is_joker() {
                return Err(MoveError::SuitMismatch);
            }
            return if card.is_rank(Rank::Ace) {
                Ok(())
            } else {
                Err(MoveError::NotAnAce)
            };
        };

        if card.suit != bound.unwrap_or(top.suit) {
            return Err(MoveError::SuitMismatch);
        }
        if !top.is_one_below(card) {
            return Err(MoveError::RankMismatch);
        }
        Ok(())
    }

    fn check_draw(&self) -> Result<(), MoveError> {
        if !self.reserve.is_empty() {
            return Ok(());
        }
        if self.discard.is_empty() {
            return Err(MoveError::NothingToDraw);
        }
        if self
            .options
            .redeal_limit
            .is_some_and(|limit| self.redeals >= limit)
        {
            return Err(MoveError::RedealLimitReached);
        }
        Ok(())
    }

    /// Executes a move already accepted by [`Klondike::check`].
    pub(super) fn apply(&mut self, from: KlondikeRegion, to: KlondikeRegion) {
        use KlondikeRegion::{Column, ColumnEnd, Discard, Foundation, Reserve};

        match (from, to) {
            (Column(src), Column(dst)) => {
                let mut run = core::mem::take(&mut self.columns[src]);
                self.columns[dst].append(&mut run);
                self.reveal(src);
            }
            (ColumnEnd(src), Column(dst)) => {
                if let Some(card) = self.columns[src].pop() {
                    self.columns[dst].push(card);
                }
                self.reveal(src);
            }
            (Column(src) | ColumnEnd(src), Foundation(dst)) => {
                if let Some(card) = self.columns[src].pop() {
                    self.place_on_foundation(card, dst);
                }
                self.reveal(src);
            }
            (Discard, Column(dst)) => {
                if let Some(card) = self.discard.pop() {
                    self.columns[dst].push(card);
                }
            }
            (Discard, Foundation(dst)) => {
                if let Some(card) = self.discard.pop() {
                    self.place_on_foundation(card, dst);
                }
            }
            (Reserve, Discard) => self.draw(),
            _ => {}
        }
    }

    fn place_on_foundation(&mut self, card: Card, foundation: usize) {
        if card.is_rank(Rank::Ace) {
            self.foundation_suits[foundation] = Some(card.suit);
        }
        self.foundations[foundation].push(card);
    }

    /// Turns the top face-down card over once a column has no face-up cards.
    fn reveal(&mut self, column: usize) {
        if self.columns[column].is_empty() {
            if let Some(card) = self.face_down_columns[column].pop() {
                log::trace!("klondike: revealed {card} in column {column}");
                self.columns[column].push(card);
            }
        }
    }

    /// Draws up to `draw_count` cards (at least one), first turning the discard pile back
    /// over if the reserve is empty.
    ///
    /// Cards move one at a time, so drawing from a recycled reserve restores
    /// the discard pile to the order it had before recycling.
    fn draw(&mut self) {
        if self.reserve.is_empty() {
            let mut recycled = core::mem::take(&mut self.discard);
            recycled.reverse();
            self.reserve = recycled;
            self.redeals += 1;
            log::debug!("klondike: redeal {}", self.redeals);
        }

        for _ in 0..self.options.draw_count.max(1) {
            let Some(card) = self.reserve.pop() else {
                break;
            };
            self.discard.push(card);
        }
    }
}
