use std::fmt;

use serde::{Deserialize, Serialize};

/// A single Skip-Bo card. Cards carry no identity beyond their face.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Numbered card between 1 and 12.
    Number(u8),
    /// The wild card. Plays as whatever value a build pile needs.
    SkipBo,
}

pub const MIN_CARD_VALUE: u8 = 1;
pub const MAX_CARD_VALUE: u8 = 12;
pub const COPIES_PER_VALUE: usize = 12;
pub const SKIP_BO_COUNT: usize = 18;
/// 12 copies of each value plus the wilds: 162 cards in play.
pub const DECK_SIZE: usize = COPIES_PER_VALUE * MAX_CARD_VALUE as usize + SKIP_BO_COUNT;
pub const HAND_SIZE: usize = 5;
pub const DISCARD_PILE_COUNT: usize = 4;
pub const BUILD_PILE_COUNT: usize = 4;
/// Most cards a single discard pile may hold.
pub const DISCARD_PILE_CAP: usize = 20;

impl Card {
    /// True for the wild card.
    #[inline]
    pub fn is_skip_bo(&self) -> bool {
        matches!(self, Card::SkipBo)
    }

    /// Numeric face value; `None` for the wild.
    #[inline]
    pub fn value(&self) -> Option<u8> {
        match self {
            Card::Number(value) => Some(*value),
            Card::SkipBo => None,
        }
    }

    /// Whether this card can stand in for rank `value` on a build pile. The
    /// wild stands in for any rank, including ones no numbered card carries.
    #[inline]
    pub fn matches_value(&self, value: usize) -> bool {
        matches!(self, Card::SkipBo) || self.value().is_some_and(|v| usize::from(v) == value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(value) => write!(f, "{value}"),
            Card::SkipBo => f.write_str("SB"),
        }
    }
}

/// The full 162-card deck in deterministic (unshuffled) order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for value in MIN_CARD_VALUE..=MAX_CARD_VALUE {
        for _ in 0..COPIES_PER_VALUE {
            deck.push(Card::Number(value));
        }
    }
    deck.extend(std::iter::repeat(Card::SkipBo).take(SKIP_BO_COUNT));
    deck
}
