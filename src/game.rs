use std::mem;

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::{Action, CardDestination, CardSource, PlayerId};
use crate::card::{Card, DECK_SIZE, DISCARD_PILE_CAP, HAND_SIZE, MAX_CARD_VALUE, full_deck};
use crate::error::GameError;
use crate::state::{GameState, LastStep};

/// Parameters for dealing a fresh game.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub stock_pile_size: usize,
}

impl GameConfig {
    /// Checks the player count and that the standard deck can cover the deal
    /// (`num_players * (stock_pile_size + 5)` cards).
    pub fn new(num_players: usize, stock_pile_size: usize) -> Result<Self, GameError> {
        if num_players == 0 {
            return Err(GameError::NotEnoughPlayers);
        }
        let required = num_players.saturating_mul(stock_pile_size.saturating_add(HAND_SIZE));
        if required > DECK_SIZE {
            return Err(GameError::NotEnoughCards {
                required,
                available: DECK_SIZE,
            });
        }
        Ok(Self {
            num_players,
            stock_pile_size,
        })
    }
}

impl Default for GameConfig {
    /// Two players with 20-card stock piles.
    fn default() -> Self {
        Self {
            num_players: 2,
            stock_pile_size: 20,
        }
    }
}

impl GameState {
    /// Deal a fresh game: build the standard 162-card deck, shuffle it with
    /// `rng` and hand out cards per `config`.
    pub fn deal<R>(config: GameConfig, rng: &mut R) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
    {
        let mut deck = full_deck();
        deck.shuffle(rng);
        Self::deal_from_deck(config, deck)
    }

    /// Deal from an explicit deck instead of a freshly shuffled one. The end
    /// of `deck` is its top; each player in order receives five hand cards
    /// and then `config.stock_pile_size` stock cards, consumed top-down.
    /// Whatever remains becomes the draw pile.
    pub fn deal_from_deck(config: GameConfig, mut deck: Vec<Card>) -> Result<Self, GameError> {
        if config.num_players == 0 {
            return Err(GameError::NotEnoughPlayers);
        }
        let required = config
            .num_players
            .saturating_mul(config.stock_pile_size.saturating_add(HAND_SIZE));
        if required > deck.len() {
            return Err(GameError::NotEnoughCards {
                required,
                available: deck.len(),
            });
        }

        let mut state = GameState::empty(config.num_players);
        // The capacity check above guarantees every pop below succeeds.
        for player in &mut state.player_states {
            for slot in &mut player.hand {
                *slot = deck.pop();
            }
            for _ in 0..config.stock_pile_size {
                if let Some(card) = deck.pop() {
                    player.stock_pile.push(card);
                }
            }
        }
        state.draw_pile = deck;
        debug!(
            "dealt {} players, {} stock cards each, {} left to draw",
            config.num_players,
            config.stock_pile_size,
            state.draw_pile.len()
        );
        Ok(state)
    }

    /// Whether `action` is legal for the current player in this state. Pure;
    /// calling it twice gives the same answer.
    ///
    /// Malformed encodings (outside the 10x8 source/destination grid) are
    /// simply invalid, never errors.
    ///
    /// # Panics
    ///
    /// Panics if `current_player` is out of range for `player_states`. States
    /// produced by dealing and transitions always keep it in range.
    pub fn is_action_valid(&self, action: Action) -> bool {
        let (Some(source), Some(destination)) = (action.source(), action.destination()) else {
            return false;
        };
        let player = &self.player_states[self.current_player];

        match destination {
            CardDestination::Build(pile) => match player.card_at(source) {
                Some(card) => card.matches_value(next_build_value(&self.build_piles[pile])),
                None => false,
            },
            // Only hand cards may be discarded, and never onto a full pile.
            CardDestination::Discard(pile) => {
                matches!(source, CardSource::Hand(_))
                    && player.card_at(source).is_some()
                    && player.discard_piles[pile].len() < DISCARD_PILE_CAP
            }
        }
    }

    /// Apply one action for the current player and return the successor
    /// state. `self` is never touched, so callers can keep old snapshots for
    /// replay or comparison.
    ///
    /// An invalid action still produces a successor: `last_step` records the
    /// attempt with `was_valid == false`, `invalid_actions_count` goes up by
    /// one and every other field stays as it was. A valid action resets the
    /// counter, moves the card, retires a build pile that reaches 12, refills
    /// the hand when it empties, and on a discard hands the turn to the next
    /// player. `rng` is only consulted when a refill forces a reshuffle.
    ///
    /// # Panics
    ///
    /// Panics if `current_player` is out of range for `player_states`. States
    /// produced by dealing and transitions always keep it in range.
    pub fn apply_action<R>(&self, action: Action, rng: &mut R) -> GameState
    where
        R: Rng + ?Sized,
    {
        let actor = self.current_player;
        let was_valid = self.is_action_valid(action);
        let mut next = self.clone();
        next.last_step = Some(LastStep {
            action,
            taken_by: actor,
            was_valid,
        });

        if !was_valid {
            next.invalid_actions_count += 1;
            debug!(
                "player {actor} tried source {} -> destination {}, rejected",
                action.card_source, action.card_destination
            );
            return next;
        }
        next.invalid_actions_count = 0;

        // A valid action always decodes and always finds a card.
        let (Some(source), Some(destination)) = (action.source(), action.destination()) else {
            return next;
        };
        let Some(card) = next.take_card(source) else {
            return next;
        };
        trace!(
            "player {actor} plays {card} (source {} -> destination {})",
            action.card_source, action.card_destination
        );

        match destination {
            CardDestination::Build(pile) => {
                next.build_piles[pile].push(card);
                if next.build_piles[pile].len() == MAX_CARD_VALUE as usize {
                    let completed = mem::take(&mut next.build_piles[pile]);
                    next.completed_build_piles.extend(completed);
                    debug!("build pile {pile} completed and set aside");
                }
            }
            CardDestination::Discard(pile) => {
                next.player_states[actor].discard_piles[pile].push(card);
            }
        }

        if next.player_states[actor].hand_is_empty() {
            next.draw_cards(actor, rng);
        }

        if matches!(destination, CardDestination::Discard(_)) {
            next.current_player = (actor + 1) % next.player_states.len();
            next.num_turns += 1;
            next.draw_cards(next.current_player, rng);
        }

        next
    }

    /// The game ends the moment any stock pile is empty.
    pub fn is_game_over(&self) -> bool {
        self.player_states
            .iter()
            .any(|player| player.stock_pile.is_empty())
    }

    /// The player who emptied their stock pile, if anyone has.
    pub fn winner(&self) -> Option<PlayerId> {
        self.player_states
            .iter()
            .position(|player| player.stock_pile.is_empty())
    }

    /// Every action the current player could legally take, in encoding order.
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::all()
            .filter(|action| self.is_action_valid(*action))
            .collect()
    }

    fn take_card(&mut self, source: CardSource) -> Option<Card> {
        let player = &mut self.player_states[self.current_player];
        match source {
            CardSource::Stock => player.stock_pile.pop(),
            CardSource::Hand(slot) => player.hand.get_mut(slot).and_then(Option::take),
            CardSource::Discard(pile) => player.discard_piles.get_mut(pile).and_then(Vec::pop),
        }
    }

    /// Refill `player`'s empty hand slots from the draw pile. When the draw
    /// pile holds fewer cards than there are empty slots, the completed
    /// build-pile cards are folded back in and the whole pile reshuffled
    /// first. Stops quietly once both are dry.
    fn draw_cards<R>(&mut self, player: PlayerId, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let empty_slots = self.player_states[player].empty_hand_slots();
        if empty_slots > self.draw_pile.len() {
            debug!(
                "folding {} completed cards back into the draw pile",
                self.completed_build_piles.len()
            );
            let mut pile = mem::take(&mut self.completed_build_piles);
            pile.append(&mut self.draw_pile);
            pile.shuffle(rng);
            self.draw_pile = pile;
        }
        for slot in &mut self.player_states[player].hand {
            if slot.is_none() {
                match self.draw_pile.pop() {
                    Some(card) => *slot = Some(card),
                    None => break,
                }
            }
        }
    }
}

/// The rank the next card played on `pile` must match. A full twelve-card
/// pile asks for 13, which only the wild satisfies.
pub fn next_build_value(pile: &[Card]) -> usize {
    pile.len() + 1
}

/// Cutoffs for abandoning a game that is going nowhere, matching the limits
/// used when the engine drives a training loop.
#[derive(Clone, Copy, Debug)]
pub struct TruncationRule {
    /// Give up after this many completed turns.
    pub max_turns: u32,
    /// Give up once the draw pile and completed cards together fall below
    /// this count.
    pub min_reserve_cards: usize,
    /// Give up after this many consecutive invalid actions.
    pub max_invalid_streak: u32,
}

impl Default for TruncationRule {
    fn default() -> Self {
        Self {
            max_turns: 1000,
            min_reserve_cards: 20,
            max_invalid_streak: 500,
        }
    }
}

impl TruncationRule {
    /// Whether `state` should be abandoned under this rule.
    pub fn should_truncate(&self, state: &GameState) -> bool {
        state.num_turns >= self.max_turns
            || state.draw_pile.len() + state.completed_build_piles.len() < self.min_reserve_cards
            || state.invalid_actions_count >= self.max_invalid_streak
    }
}
