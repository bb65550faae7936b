//! Scratchcard scoring.
//!
//! Each card lists winning numbers and drawn numbers. Points double per
//! match past the first. Matches also win copies of the following cards,
//! which cascade.

use lib::prelude::*;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Errors raised while validating a card table.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("expected `Card` prefix")]
    BadPrefix,
    #[error("out of sequence card id; expected {expected}, but got {actual}")]
    OutOfSequence { expected: u32, actual: u32 },
}

/// A single scratchcard.
#[derive(Debug)]
pub struct Card {
    id: u32,
    winning: Vec<u32>,
    drawn: Vec<u32>,
}

lib::from_input! {
    |(Split(((W(tag), id), Split((winning, drawn))))): Split<':', ((W<&str>, u32), Split<'|', (Vec<u32>, Vec<u32>)>)>| -> Card {
        if tag != "Card" {
            return Err(CardError::BadPrefix.into());
        }

        Ok(Card { id, winning, drawn })
    }
}

impl Card {
    /// The card id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// How many of the drawn numbers are winning numbers.
    ///
    /// Duplicates count once on either side.
    pub fn match_count(&self) -> usize {
        let mut count = 0;

        for (n, value) in self.drawn.iter().enumerate() {
            if self.drawn[..n].contains(value) {
                continue;
            }

            if self.winning.contains(value) {
                count += 1;
            }
        }

        count
    }

    /// The point value of the card, doubling per match past the first.
    ///
    /// Computed in the closed form `2^(n - 1)`, saturating when the match
    /// count exceeds what the width can express.
    pub fn points(&self) -> u64 {
        match self.match_count() {
            0 => 0,
            n => 1u64.checked_shl(n as u32 - 1).unwrap_or(u64::MAX),
        }
    }
}

/// Parse a table of cards, one per line.
///
/// Card ids must run sequentially from 1, so that every card only ever wins
/// copies of cards below it.
pub fn parse(mut input: IStr) -> Result<Vec<Card>> {
    let mut cards = Vec::new();

    while !input.is_empty() {
        input.ws()?;

        if input.is_empty() {
            break;
        }

        let card = input.line::<Card>()?;
        let expected = cards.len() as u32 + 1;

        if card.id != expected {
            return Err(CardError::OutOfSequence {
                expected,
                actual: card.id,
            }
            .into());
        }

        cards.push(card);
    }

    Ok(cards)
}

/// Total points over the card table.
pub fn total_points(cards: &[Card]) -> u64 {
    cards.iter().map(Card::points).sum()
}

/// Total number of cards after the win cascade, originals included.
///
/// Walks the table bottom-up so every card's copy count is known before any
/// card that wins it is visited. Wins past the end of the table are clipped.
pub fn total_cards(cards: &[Card]) -> u64 {
    let mut copies = vec![1u64; cards.len()];

    for (index, card) in cards.iter().enumerate().rev() {
        let end = cards.len().min(index + 1 + card.match_count());
        let won: u64 = copies[index + 1..end].iter().sum();
        copies[index] += won;
    }

    copies.iter().sum()
}
