//! Action providers: where roll/hold decisions come from.
//!
//! The game asks the active player's controller for the next action
//! with a blocking call. The console front end implements this over
//! stdin; tests script the decisions; [`HoldAt`] is a minimal policy
//! for driving whole games without input.

use crate::core::{Action, Player};
use std::collections::VecDeque;

/// Supplies the active player's next action.
///
/// The call is synchronous: the game does not advance until an action
/// is returned. The `player` argument is the active player's current
/// state, so controllers can display or reason about the turn total.
pub trait ActionProvider {
    /// Decide the next action for the given player.
    fn next_action(&mut self, player: &Player) -> Action;
}

/// Replays a fixed sequence of actions, for tests.
///
/// Panics when the script runs out: a test that plays more turns than
/// it scripted should fail loudly.
#[derive(Clone, Debug)]
pub struct ScriptedActions {
    actions: VecDeque<Action>,
}

impl ScriptedActions {
    /// Script the given actions in order.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl ActionProvider for ScriptedActions {
    fn next_action(&mut self, _player: &Player) -> Action {
        self.actions
            .pop_front()
            .expect("scripted action sequence exhausted")
    }
}

/// Rolls until the turn total reaches a threshold, then holds.
///
/// The classic "hold at 20" strategy. Useful for driving complete
/// games deterministically given a seeded die.
#[derive(Clone, Copy, Debug)]
pub struct HoldAt {
    threshold: u32,
}

impl HoldAt {
    /// Hold once the turn total is at least `threshold`.
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl ActionProvider for HoldAt {
    fn next_action(&mut self, player: &Player) -> Action {
        if player.turn_total() >= self.threshold {
            Action::Hold
        } else {
            Action::Roll
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_actions_replay_in_order() {
        let mut script = ScriptedActions::new([Action::Roll, Action::Roll, Action::Hold]);
        let player = Player::new("Player 1");

        assert_eq!(script.next_action(&player), Action::Roll);
        assert_eq!(script.next_action(&player), Action::Roll);
        assert_eq!(script.next_action(&player), Action::Hold);
    }

    #[test]
    #[should_panic(expected = "scripted action sequence exhausted")]
    fn test_scripted_actions_exhausted() {
        let mut script = ScriptedActions::new([Action::Hold]);
        let player = Player::new("Player 1");

        script.next_action(&player);
        script.next_action(&player);
    }

    #[test]
    fn test_hold_at_threshold() {
        let mut bot = HoldAt::new(20);
        let mut player = Player::new("Player 1");

        assert_eq!(bot.next_action(&player), Action::Roll);

        for _ in 0..4 {
            player.add_to_turn_total(5);
        }
        assert_eq!(player.turn_total(), 20);
        assert_eq!(bot.next_action(&player), Action::Hold);
    }

    #[test]
    fn test_hold_at_zero_always_holds() {
        let mut bot = HoldAt::new(0);
        let player = Player::new("Player 1");

        assert_eq!(bot.next_action(&player), Action::Hold);
    }
}
