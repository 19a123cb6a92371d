use serde::{Deserialize, Serialize};

use crate::card::{BUILD_PILE_COUNT, DISCARD_PILE_COUNT, HAND_SIZE};

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// One attempted card movement, in the encoding the surrounding UI and
/// transport layers speak.
///
/// Sources: `0` stock-pile top, `1..=5` hand slot `source - 1`, `6..=9`
/// discard pile `source - 6` top. Destinations: `0..=3` build pile, `4..=7`
/// own discard pile `destination - 4`. Every byte value is representable;
/// out-of-range values are malformed and the engine treats them exactly like
/// illegal moves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub card_source: u8,
    pub card_destination: u8,
}

/// Location a card is taken from, decoded from the wire encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CardSource {
    /// Top card of the active player's stock pile.
    Stock,
    /// Card held in a hand slot, by slot index.
    Hand(usize),
    /// Top card of one of the active player's discard piles.
    Discard(usize),
}

/// Location a card is placed on, decoded from the wire encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CardDestination {
    /// Shared build pile, by index.
    Build(usize),
    /// One of the active player's own discard piles.
    Discard(usize),
}

impl Action {
    pub const fn new(card_source: u8, card_destination: u8) -> Self {
        Self {
            card_source,
            card_destination,
        }
    }

    /// Play from `source` onto the given build pile. A pile index past the
    /// build area would encode a discard destination instead.
    pub fn play(source: CardSource, build_pile: usize) -> Self {
        debug_assert!(build_pile < BUILD_PILE_COUNT);
        Self::new(source.encode(), build_pile as u8)
    }

    /// Move a hand slot onto one of the four personal discard piles.
    pub fn discard(hand_slot: usize, discard_pile: usize) -> Self {
        debug_assert!(hand_slot < HAND_SIZE);
        debug_assert!(discard_pile < DISCARD_PILE_COUNT);
        Self::new(1 + hand_slot as u8, 4 + discard_pile as u8)
    }

    /// Decoded source, or `None` when the encoding is out of range.
    pub fn source(&self) -> Option<CardSource> {
        match self.card_source {
            0 => Some(CardSource::Stock),
            1..=5 => Some(CardSource::Hand(usize::from(self.card_source) - 1)),
            6..=9 => Some(CardSource::Discard(usize::from(self.card_source) - 6)),
            _ => None,
        }
    }

    /// Decoded destination, or `None` when the encoding is out of range.
    pub fn destination(&self) -> Option<CardDestination> {
        match self.card_destination {
            0..=3 => Some(CardDestination::Build(usize::from(self.card_destination))),
            4..=7 => Some(CardDestination::Discard(
                usize::from(self.card_destination) - 4,
            )),
            _ => None,
        }
    }

    /// Every well-formed source/destination pairing, in encoding order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..10).flat_map(|source| (0..8).map(move |destination| Action::new(source, destination)))
    }
}

impl CardSource {
    /// Wire encoding of this source. Indices must be in range; a hand slot
    /// beyond `HAND_SIZE` would collide with the discard-pile encodings.
    pub fn encode(self) -> u8 {
        match self {
            CardSource::Stock => 0,
            CardSource::Hand(slot) => {
                debug_assert!(slot < HAND_SIZE);
                1 + slot as u8
            }
            CardSource::Discard(pile) => {
                debug_assert!(pile < DISCARD_PILE_COUNT);
                6 + pile as u8
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_decode_to_their_regions() {
        assert_eq!(Action::new(0, 0).source(), Some(CardSource::Stock));
        assert_eq!(Action::new(3, 0).source(), Some(CardSource::Hand(2)));
        assert_eq!(Action::new(9, 0).source(), Some(CardSource::Discard(3)));
        assert_eq!(Action::new(10, 0).source(), None);
    }

    #[test]
    fn destinations_decode_to_their_regions() {
        assert_eq!(
            Action::new(0, 2).destination(),
            Some(CardDestination::Build(2))
        );
        assert_eq!(
            Action::new(0, 7).destination(),
            Some(CardDestination::Discard(3))
        );
        assert_eq!(Action::new(0, 8).destination(), None);
    }

    #[test]
    fn constructors_encode_like_the_wire() {
        assert_eq!(Action::play(CardSource::Stock, 1), Action::new(0, 1));
        assert_eq!(Action::play(CardSource::Hand(4), 0), Action::new(5, 0));
        assert_eq!(Action::play(CardSource::Discard(0), 3), Action::new(6, 3));
        assert_eq!(Action::discard(0, 0), Action::new(1, 4));
        assert_eq!(Action::discard(4, 3), Action::new(5, 7));
    }

    #[test]
    fn all_spans_the_encoding_grid_once() {
        let actions: Vec<Action> = Action::all().collect();
        assert_eq!(actions.len(), 80);
        assert_eq!(actions.first(), Some(&Action::new(0, 0)));
        assert_eq!(actions.last(), Some(&Action::new(9, 7)));
    }

    #[test]
    #[should_panic(expected = "build_pile < BUILD_PILE_COUNT")]
    fn play_rejects_out_of_range_build_piles() {
        let _ = Action::play(CardSource::Stock, 4);
    }

    #[test]
    #[should_panic(expected = "hand_slot < HAND_SIZE")]
    fn discard_rejects_out_of_range_hand_slots() {
        let _ = Action::discard(5, 0);
    }

    #[test]
    #[should_panic(expected = "discard_pile < DISCARD_PILE_COUNT")]
    fn discard_rejects_out_of_range_piles() {
        let _ = Action::discard(0, 4);
    }
}
