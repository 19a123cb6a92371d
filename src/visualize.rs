use std::fmt::Write;

use crate::action::{Action, CardDestination, CardSource};
use crate::card::Card;
use crate::game::next_build_value;
use crate::state::GameState;

/// Render a state as a short human-readable report, one zone per line.
pub fn render_state(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "It's player {}'s turn.", state.current_player);
    if let Some(player) = state.player_states.get(state.current_player) {
        let _ = writeln!(out, "Current player hand: {}", hand_display(&player.hand));
    }
    for (idx, player) in state.player_states.iter().enumerate() {
        let stock_top = player
            .stock_top()
            .map(|card| card.to_string())
            .unwrap_or_else(|| String::from("--"));
        let discard_tops = player
            .discard_piles
            .iter()
            .map(|pile| {
                pile.last()
                    .map(|card| card.to_string())
                    .unwrap_or_else(|| String::from("--"))
            })
            .collect::<Vec<_>>()
            .join(" ");
        let discard_sizes = player
            .discard_piles
            .iter()
            .map(|pile| pile.len().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            "Player {idx}: stock {} cards (top: {stock_top}), discard tops: {discard_tops}, discard sizes: {discard_sizes}",
            player.stock_pile.len(),
        );
    }
    let _ = writeln!(out, "Build piles:");
    for (idx, pile) in state.build_piles.iter().enumerate() {
        let sequence = if pile.is_empty() {
            String::from("[-]")
        } else {
            let seq = pile
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("[{seq}]")
        };
        let _ = writeln!(out, "  [{idx}] next {}  {}", next_build_value(pile), sequence);
    }
    let _ = writeln!(out, "Draw pile: {} cards", state.draw_pile.len());
    let _ = writeln!(out, "Turns taken so far: {}", state.num_turns);
    out
}

/// Describe `action` as attempted by the current player. Works for any
/// encoding, including malformed ones and moves that would be rejected.
pub fn describe_action(state: &GameState, action: Action) -> String {
    let player = state.player_states.get(state.current_player);
    let card = action
        .source()
        .and_then(|source| player.and_then(|p| p.card_at(source)));
    let card_text = card
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("nothing"));
    format!(
        "Player {} plays {} from their {} to {}",
        state.current_player,
        card_text,
        source_name(action.source()),
        destination_name(action.destination()),
    )
}

fn hand_display(hand: &[Option<Card>]) -> String {
    hand.iter()
        .map(|slot| match slot {
            Some(card) => card.to_string(),
            None => String::from("--"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn source_name(source: Option<CardSource>) -> String {
    match source {
        Some(CardSource::Stock) => String::from("stock pile"),
        Some(CardSource::Hand(slot)) => format!("hand slot {slot}"),
        Some(CardSource::Discard(pile)) => format!("discard pile {pile}"),
        None => String::from("unknown source"),
    }
}

fn destination_name(destination: Option<CardDestination>) -> String {
    match destination {
        Some(CardDestination::Build(pile)) => format!("build pile {pile}"),
        Some(CardDestination::Discard(pile)) => format!("discard pile {pile}"),
        None => String::from("unknown destination"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> GameState {
        let mut state = GameState::empty(2);
        state.player_states[0].hand = [
            Some(Card::Number(5)),
            None,
            Some(Card::SkipBo),
            None,
            Some(Card::Number(12)),
        ];
        state.player_states[0].stock_pile = vec![Card::Number(3), Card::Number(8)];
        state.player_states[1].discard_piles[2] = vec![Card::Number(4)];
        state.build_piles[0] = vec![Card::Number(1), Card::SkipBo];
        state.draw_pile = vec![Card::Number(9); 30];
        state.num_turns = 6;
        state
    }

    #[test]
    fn render_includes_every_zone() {
        let text = render_state(&sample_state());
        assert!(text.contains("It's player 0's turn."));
        assert!(text.contains("Current player hand: 5 -- SB -- 12"));
        assert!(text.contains("Player 0: stock 2 cards (top: 8)"));
        assert!(text.contains("[0] next 3  [1 SB]"));
        assert!(text.contains("Draw pile: 30 cards"));
        assert!(text.contains("Turns taken so far: 6"));
    }

    #[test]
    fn describe_names_sources_and_destinations() {
        let state = sample_state();
        assert_eq!(
            describe_action(&state, Action::new(0, 1)),
            "Player 0 plays 8 from their stock pile to build pile 1"
        );
        assert_eq!(
            describe_action(&state, Action::new(3, 5)),
            "Player 0 plays SB from their hand slot 2 to discard pile 1"
        );
        assert_eq!(
            describe_action(&state, Action::new(2, 4)),
            "Player 0 plays nothing from their hand slot 1 to discard pile 0"
        );
        assert_eq!(
            describe_action(&state, Action::new(42, 99)),
            "Player 0 plays nothing from their unknown source to unknown destination"
        );
    }
}
