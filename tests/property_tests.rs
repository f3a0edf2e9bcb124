//! Property tests for the scoring algebra and turn rotation.

use proptest::prelude::*;

use pig_dice::core::{Action, Die, Player, ScriptedRolls};
use pig_dice::game::{Game, ScriptedActions, TurnOutcome};

fn sum(faces: &[u8]) -> u32 {
    faces.iter().map(|&f| u32::from(f)).sum()
}

proptest! {
    /// Accumulating rolls (no 1s) never touches the score, and the
    /// turn total is always the running sum of the faces.
    #[test]
    fn prop_accumulating_preserves_score(faces in prop::collection::vec(2u8..=6, 0..40)) {
        let mut player = Player::new("Player 1");
        let mut running = 0u32;

        for &face in &faces {
            player.add_to_turn_total(face);
            running += u32::from(face);
            prop_assert_eq!(player.turn_total(), running);
            prop_assert_eq!(player.score(), 0);
        }
    }

    /// Busting zeroes the turn total and never changes the score,
    /// whatever was banked before or on the table.
    #[test]
    fn prop_bust_zeroes_turn_not_score(
        banked in prop::collection::vec(2u8..=6, 0..20),
        on_table in prop::collection::vec(2u8..=6, 0..20),
    ) {
        let mut player = Player::new("Player 1");
        for &face in &banked {
            player.add_to_turn_total(face);
        }
        player.hold();
        for &face in &on_table {
            player.add_to_turn_total(face);
        }

        player.reset_turn_total();

        prop_assert_eq!(player.turn_total(), 0);
        prop_assert_eq!(player.score(), sum(&banked));
    }

    /// Holding banks exactly the turn total and zeroes it.
    #[test]
    fn prop_hold_banks_exactly_the_turn_total(
        first in prop::collection::vec(2u8..=6, 0..20),
        second in prop::collection::vec(2u8..=6, 0..20),
    ) {
        let mut player = Player::new("Player 1");

        for &face in &first {
            player.add_to_turn_total(face);
        }
        player.hold();
        prop_assert_eq!(player.score(), sum(&first));
        prop_assert_eq!(player.turn_total(), 0);

        for &face in &second {
            player.add_to_turn_total(face);
        }
        player.hold();
        prop_assert_eq!(player.score(), sum(&first) + sum(&second));
        prop_assert_eq!(player.turn_total(), 0);
    }

    /// A turn that ends in a bust forfeits exactly the accumulated sum
    /// at the game level too.
    #[test]
    fn prop_bust_turn_forfeits_the_running_sum(faces in prop::collection::vec(2u8..=6, 0..30)) {
        let mut scripted: Vec<u8> = faces.clone();
        scripted.push(1);

        let die = Die::new(ScriptedRolls::sequence(scripted));
        let mut game = Game::with_die(2, die).unwrap();
        let mut script = ScriptedActions::new(vec![Action::Roll; faces.len() + 1]);

        let outcome = game.play_turn(&mut script, &mut ());

        prop_assert_eq!(outcome, Some(TurnOutcome::Busted { forfeited: sum(&faces) }));
        prop_assert!(game.players().iter().all(|p| p.score() == 0));
        prop_assert_eq!(game.winner(), None);
    }

    /// Rotation is a strict round robin over the roster while nobody
    /// has won.
    #[test]
    fn prop_rotation_is_round_robin(players in 2usize..=6, turns in 0usize..40) {
        let die = Die::new(ScriptedRolls::sequence([]));
        let mut game = Game::with_die(players, die).unwrap();
        // Empty-handed holds bank nothing, so nobody can win.
        let mut script = ScriptedActions::new(vec![Action::Hold; turns]);

        for _ in 0..turns {
            game.play_turn(&mut script, &mut ());
        }

        prop_assert_eq!(game.current_player().index(), turns % players);
        prop_assert_eq!(game.winner(), None);
    }

    /// Reset always restores every score to zero and clears the
    /// winner; a second reset changes nothing.
    #[test]
    fn prop_reset_is_idempotent(rounds in prop::collection::vec(2u8..=6, 1..30)) {
        let die = Die::new(ScriptedRolls::sequence(rounds.clone()));
        let mut game = Game::with_die(2, die).unwrap();

        // Bank one face per turn until the script runs out.
        let mut actions = Vec::new();
        for _ in &rounds {
            actions.push(Action::Roll);
            actions.push(Action::Hold);
        }
        let mut script = ScriptedActions::new(actions);
        for _ in &rounds {
            if game.winner().is_some() {
                break;
            }
            game.play_turn(&mut script, &mut ());
        }

        game.reset_game();
        let after_once: Vec<_> = game.players().to_vec();
        game.reset_game();

        prop_assert_eq!(game.players(), &after_once[..]);
        prop_assert_eq!(game.winner(), None);
        prop_assert!(game.players().iter().all(|p| p.score() == 0));
    }
}
