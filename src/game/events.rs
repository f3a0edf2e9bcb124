//! Game events and the notification sink.
//!
//! The state machine never prints. Everything observable is published
//! as a [`GameEvent`] to an [`EventSink`], so front ends (console,
//! tests, anything else) decide how to render or record it. Events are
//! purely observational: nothing a sink does can affect game state.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One line of the final standings, in roster order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// The player's name.
    pub name: String,
    /// Their banked score when the game ended.
    pub score: u32,
}

/// Everything observable that happens during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game is starting.
    GameStart,

    /// The given player's turn begins.
    TurnStart {
        /// The active player.
        player: PlayerId,
    },

    /// The active player rolled the die.
    Rolled {
        /// The active player.
        player: PlayerId,
        /// The face that came up, in `1..=6`.
        face: u8,
    },

    /// The active player rolled a 1 and forfeits the turn total.
    Bust {
        /// The active player.
        player: PlayerId,
        /// Points that were on the table and are now lost.
        forfeited: u32,
    },

    /// The active player held, banking the turn total.
    Held {
        /// The active player.
        player: PlayerId,
        /// Points banked by this hold.
        banked: u32,
        /// The player's score after banking.
        score: u32,
    },

    /// A player reached the win threshold; the game is over.
    GameOver {
        /// The winner.
        winner: PlayerId,
    },

    /// Final scores in roster order, emitted once after `GameOver`.
    Standings(Vec<Standing>),
}

/// Receives game events.
///
/// Implementations must not assume any particular event ordering
/// beyond: `GameStart` first, `Standings` last, `GameOver` before
/// `Standings`.
pub trait EventSink {
    /// Observe one event.
    fn notify(&mut self, event: &GameEvent);
}

/// Records every event, mainly for tests.
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards every event.
impl EventSink for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<GameEvent> = Vec::new();

        sink.notify(&GameEvent::GameStart);
        sink.notify(&GameEvent::TurnStart {
            player: PlayerId::new(0),
        });

        assert_eq!(
            sink,
            vec![
                GameEvent::GameStart,
                GameEvent::TurnStart {
                    player: PlayerId::new(0)
                },
            ]
        );
    }

    #[test]
    fn test_unit_sink_discards() {
        let mut sink = ();
        sink.notify(&GameEvent::GameStart);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::Held {
            player: PlayerId::new(1),
            banked: 12,
            score: 47,
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
