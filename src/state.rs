use std::array::from_fn;

use serde::{Deserialize, Serialize};

use crate::action::{Action, CardSource, PlayerId};
use crate::card::{BUILD_PILE_COUNT, Card, DISCARD_PILE_COUNT, HAND_SIZE};

/// Everything a single player owns.
///
/// All fields are public: the engine computes transitions, callers decide what
/// to hide when presenting the state to an opponent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    /// Exactly five slots. `None` marks a slot emptied by a play and not yet
    /// refilled. Slot positions are stable: playing from slot 2 leaves slots
    /// 0, 1, 3 and 4 untouched.
    pub hand: [Option<Card>; HAND_SIZE],
    /// Index 0 is the bottom card; only the last card is playable.
    pub stock_pile: Vec<Card>,
    /// Four piles, index 0 the bottom of each. Only the last card of a pile
    /// is playable.
    pub discard_piles: [Vec<Card>; DISCARD_PILE_COUNT],
}

impl PlayerState {
    /// A player with nothing dealt yet.
    pub fn new() -> Self {
        Self {
            hand: [None; HAND_SIZE],
            stock_pile: Vec::new(),
            discard_piles: from_fn(|_| Vec::new()),
        }
    }

    /// The card a source currently offers, if any. Out-of-range indices and
    /// empty piles both yield `None`.
    pub fn card_at(&self, source: CardSource) -> Option<Card> {
        match source {
            CardSource::Stock => self.stock_pile.last().copied(),
            CardSource::Hand(slot) => self.hand.get(slot).copied().flatten(),
            CardSource::Discard(pile) => self.discard_top(pile),
        }
    }

    pub fn stock_top(&self) -> Option<Card> {
        self.stock_pile.last().copied()
    }

    pub fn discard_top(&self, pile: usize) -> Option<Card> {
        self.discard_piles
            .get(pile)
            .and_then(|pile| pile.last())
            .copied()
    }

    /// True when every hand slot is empty.
    pub fn hand_is_empty(&self) -> bool {
        self.hand.iter().all(Option::is_none)
    }

    /// Number of hand slots waiting for a card.
    pub fn empty_hand_slots(&self) -> usize {
        self.hand.iter().filter(|slot| slot.is_none()).count()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Record of the most recent transition attempt, valid or not.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastStep {
    pub action: Action,
    pub taken_by: PlayerId,
    pub was_valid: bool,
}

/// A complete snapshot of a Skip-Bo game.
///
/// Plain data with public fields. Transitions never mutate in place:
/// [`GameState::apply_action`](crate::game) takes `&self` and returns the
/// successor state, so old snapshots stay usable for replay and comparison.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    /// One entry per player; the index is the player id.
    pub player_states: Vec<PlayerState>,
    pub current_player: PlayerId,
    /// Four shared piles built up from 1 to 12. Index 0 is the bottom card.
    pub build_piles: [Vec<Card>; BUILD_PILE_COUNT],
    /// Face-down deck. Index 0 is the bottom card; cards are drawn from the
    /// end.
    pub draw_pile: Vec<Card>,
    /// Cards from completed build piles, waiting to be reshuffled into the
    /// draw pile.
    pub completed_build_piles: Vec<Card>,
    /// Completed turns so far. A turn ends when a player discards.
    pub num_turns: u32,
    /// Consecutive invalid actions; any valid action resets this to zero.
    pub invalid_actions_count: u32,
    pub last_step: Option<LastStep>,
}

impl GameState {
    /// A state with the right shape and nothing dealt: all hands empty, all
    /// piles empty, counters at zero.
    pub fn empty(num_players: usize) -> Self {
        Self {
            player_states: vec![PlayerState::new(); num_players],
            current_player: 0,
            build_piles: from_fn(|_| Vec::new()),
            draw_pile: Vec::new(),
            completed_build_piles: Vec::new(),
            num_turns: 0,
            invalid_actions_count: 0,
            last_step: None,
        }
    }

    /// Number of cards across every zone. Dealing and transitions conserve
    /// this, so for a dealt standard game it always equals
    /// [`DECK_SIZE`](crate::card::DECK_SIZE).
    pub fn total_cards(&self) -> usize {
        let mut total = self.draw_pile.len() + self.completed_build_piles.len();
        total += self.build_piles.iter().map(Vec::len).sum::<usize>();
        for player in &self.player_states {
            total += player.stock_pile.len();
            total += player.hand.iter().flatten().count();
            total += player.discard_piles.iter().map(Vec::len).sum::<usize>();
        }
        total
    }
}
