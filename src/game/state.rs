//! The game itself: roster, turn rotation, bust and hold rules, win
//! detection.
//!
//! ## Turn state machine
//!
//! Each turn loops on the active player's controller:
//!
//! - **Roll** a 1: bust. The turn total is forfeited, the turn ends.
//! - **Roll** 2..=6: the face joins the turn total, loop again.
//! - **Hold**: the turn total is banked into the score, the turn ends.
//!
//! The win check runs exactly once per turn, after the bust or hold,
//! never after an intermediate roll. A turn total can therefore sail
//! past 100 mid-turn without ending the game; only the hold that banks
//! it does. Busting zeroes the turn total before the check, so a bust
//! can never win.

use crate::core::{Action, Die, GameRng, Player, PlayerId, RollSource, BUST_FACE};
use crate::game::controller::ActionProvider;
use crate::game::error::GameError;
use crate::game::events::{EventSink, GameEvent, Standing};

/// Banked score that ends the game.
pub const WIN_THRESHOLD: u32 = 100;

/// How a completed turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player rolled a 1.
    Busted {
        /// Points that were forfeited.
        forfeited: u32,
    },
    /// The player held.
    Held {
        /// Points that were banked.
        banked: u32,
    },
}

/// A game of Pig: a fixed roster, one shared die, and a winner slot
/// that is written at most once.
///
/// ## Example
///
/// ```
/// use pig_dice::core::{Action, Die, PlayerId, ScriptedRolls};
/// use pig_dice::game::{Game, ScriptedActions};
///
/// let die = Die::new(ScriptedRolls::sequence([3, 1]));
/// let mut game = Game::with_die(2, die).unwrap();
/// let mut script = ScriptedActions::new([Action::Roll, Action::Roll]);
///
/// // Player 1 rolls a 3, then busts on the 1 and the turn passes.
/// game.play_turn(&mut script, &mut ());
/// assert_eq!(game.player(PlayerId::new(0)).score(), 0);
/// assert_eq!(game.current_player(), PlayerId::new(1));
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    players: Vec<Player>,
    current: PlayerId,
    die: Die<R>,
    winner: Option<PlayerId>,
}

impl Game<GameRng> {
    /// Create a game with the default seeded die.
    ///
    /// Players are named "Player 1" through "Player N" in turn order.
    pub fn new(num_players: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_die(num_players, Die::seeded(seed))
    }
}

impl<R: RollSource> Game<R> {
    /// Create a game over a specific die.
    ///
    /// Rejects rosters smaller than 2 or larger than 255.
    pub fn with_die(num_players: usize, die: Die<R>) -> Result<Self, GameError> {
        if num_players < 2 {
            return Err(GameError::TooFewPlayers { got: num_players });
        }
        if num_players > 255 {
            return Err(GameError::TooManyPlayers { got: num_players });
        }

        let players = (0..num_players)
            .map(|i| Player::new(format!("Player {}", i + 1)))
            .collect();

        Ok(Self {
            players,
            current: PlayerId::new(0),
            die,
            winner: None,
        })
    }

    /// Number of seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is (or would be next).
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The winner, once a player has held at or past [`WIN_THRESHOLD`].
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// A player's state by roster index.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Current scores in roster order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| Standing {
                name: p.name().to_string(),
                score: p.score(),
            })
            .collect()
    }

    /// Run one complete turn for the active player.
    ///
    /// Loops on the controller until a bust or hold ends the turn, then
    /// performs the once-per-turn win check and, if nobody has won,
    /// rotates to the next player.
    ///
    /// Returns `None` without touching any state if the game already
    /// has a winner.
    pub fn play_turn(
        &mut self,
        controller: &mut dyn ActionProvider,
        sink: &mut dyn EventSink,
    ) -> Option<TurnOutcome> {
        if self.winner.is_some() {
            return None;
        }

        let current = self.current;
        sink.notify(&GameEvent::TurnStart { player: current });

        let outcome = loop {
            let action = controller.next_action(&self.players[current.index()]);

            match action {
                Action::Roll => {
                    let face = self.die.roll();
                    sink.notify(&GameEvent::Rolled {
                        player: current,
                        face,
                    });

                    let player = &mut self.players[current.index()];
                    if face == BUST_FACE {
                        let forfeited = player.turn_total();
                        player.reset_turn_total();
                        sink.notify(&GameEvent::Bust {
                            player: current,
                            forfeited,
                        });
                        break TurnOutcome::Busted { forfeited };
                    }
                    player.add_to_turn_total(face);
                }
                Action::Hold => {
                    let player = &mut self.players[current.index()];
                    let banked = player.turn_total();
                    player.hold();
                    let score = player.score();
                    sink.notify(&GameEvent::Held {
                        player: current,
                        banked,
                        score,
                    });
                    break TurnOutcome::Held { banked };
                }
            }
        };

        // Once per turn, after bust or hold. A bust zeroed the turn
        // total above, so only a hold can push the score over the line.
        if self.players[current.index()].score() >= WIN_THRESHOLD {
            self.winner = Some(current);
            sink.notify(&GameEvent::GameOver { winner: current });
        } else {
            let next = (current.index() + 1) % self.players.len();
            self.current = PlayerId::new(next as u8);
        }

        Some(outcome)
    }

    /// Play turns until someone wins, then emit the final standings.
    pub fn play_game(&mut self, controller: &mut dyn ActionProvider, sink: &mut dyn EventSink) {
        sink.notify(&GameEvent::GameStart);

        while self.winner.is_none() {
            self.play_turn(controller, sink);
        }

        sink.notify(&GameEvent::Standings(self.standings()));
    }

    /// Start a rematch with the same roster and die.
    ///
    /// Clears the winner and zeroes every score. Turn totals are
    /// already zero at turn boundaries, so they are left alone, as is
    /// the rotation position. Idempotent.
    pub fn reset_game(&mut self) {
        self.winner = None;
        for player in &mut self.players {
            player.reset_score();
        }
    }
}
