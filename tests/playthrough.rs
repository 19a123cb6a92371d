use rand::SeedableRng;
use rand::rngs::StdRng;

use skipbo_engine::card::DECK_SIZE;
use skipbo_engine::{GameConfig, GameError, GameState, TruncationRule, render_state, winner_points};

#[test]
fn seeded_game_conserves_cards_throughout() -> Result<(), GameError> {
    let config = GameConfig::new(2, 10)?;
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut state = GameState::deal(config, &mut rng)?;
    let rule = TruncationRule::default();

    let mut steps = 0u32;
    while !state.is_game_over() && !rule.should_truncate(&state) && steps < 20_000 {
        // Deterministic driver: always take the first legal action.
        let Some(action) = state.legal_actions().into_iter().next() else {
            break;
        };
        state = state.apply_action(action, &mut rng);
        assert_eq!(state.total_cards(), DECK_SIZE);
        assert!(state.last_step.as_ref().is_some_and(|step| step.was_valid));
        assert_eq!(state.invalid_actions_count, 0);
        steps += 1;
    }

    let report = render_state(&state);
    assert!(report.contains("turn"));

    if state.is_game_over() {
        let winner = state.winner().unwrap();
        assert!(state.player_states[winner].stock_pile.is_empty());
        assert!(winner_points(&state, winner) >= 25);
    }
    Ok(())
}

#[test]
fn four_player_game_rotates_cleanly() -> Result<(), GameError> {
    let config = GameConfig::new(4, 5)?;
    let mut rng = StdRng::seed_from_u64(11);
    let mut state = GameState::deal(config, &mut rng)?;
    let rule = TruncationRule::default();

    for _ in 0..5_000 {
        if state.is_game_over() || rule.should_truncate(&state) {
            break;
        }
        let Some(action) = state.legal_actions().into_iter().next() else {
            break;
        };
        let stepped = state.apply_action(action, &mut rng);
        assert!(stepped.current_player < 4);
        // The turn only moves on after a discard, one seat at a time.
        if stepped.num_turns == state.num_turns {
            assert_eq!(stepped.current_player, state.current_player);
        } else {
            assert_eq!(stepped.num_turns, state.num_turns + 1);
            assert_eq!(stepped.current_player, (state.current_player + 1) % 4);
        }
        state = stepped;
    }
    assert_eq!(state.total_cards(), DECK_SIZE);
    Ok(())
}
