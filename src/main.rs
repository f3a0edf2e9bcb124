//! Terminal front end for Pig.
//!
//! Owns everything the engine deliberately does not: argument parsing,
//! prompting, printing, and the play-again loop. Game rules all live
//! in the library.

use std::io::{self, BufRead, Write};

use clap::Parser;

use pig_dice::{
    Action, ActionProvider, EventSink, Game, GameError, GameEvent, Player, PlayerId,
};

#[derive(Parser, Debug)]
#[command(name = "pig", about = "Play the dice game Pig at the terminal.")]
struct Args {
    /// Number of players at the table.
    #[arg(long = "num-players", default_value_t = 2)]
    num_players: usize,

    /// Seed for the die. Omit for a random game.
    #[arg(long)]
    seed: Option<u64>,
}

/// Read one trimmed line from stdin, exiting cleanly on EOF.
fn read_line() -> String {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
    }
}

fn prompt(text: &str) -> String {
    print!("{text}");
    let _ = io::stdout().flush();
    read_line()
}

/// Asks the human at the keyboard, re-asking until the input parses.
struct ConsoleController;

impl ActionProvider for ConsoleController {
    fn next_action(&mut self, player: &Player) -> Action {
        loop {
            println!(
                "Current turn total: {}, Current score: {}",
                player.turn_total(),
                player.score()
            );
            match prompt("Enter 'r' to roll or 'h' to hold: ").parse() {
                Ok(action) => return action,
                Err(err) => println!("{err}"),
            }
        }
    }
}

/// Renders game events as console messages.
struct ConsoleSink {
    names: Vec<String>,
}

impl ConsoleSink {
    fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }
}

impl EventSink for ConsoleSink {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStart => println!("Welcome to the Pig Game!"),
            GameEvent::TurnStart { player } => println!("{}'s turn!", self.name(*player)),
            GameEvent::Rolled { face, .. } => println!("Rolled: {face}"),
            GameEvent::Bust { player, .. } => println!(
                "{} rolled a 1. Turn over with no points added.",
                self.name(*player)
            ),
            GameEvent::Held { player, score, .. } => {
                println!("{} holds. Total score: {}", self.name(*player), score);
            }
            GameEvent::GameOver { winner } => {
                println!("{} wins the game!", self.name(*winner));
            }
            GameEvent::Standings(standings) => {
                println!("Game over!");
                for standing in standings {
                    println!("{}: {}", standing.name, standing.score);
                }
            }
        }
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut game = Game::new(args.num_players, seed)?;

    let names = game
        .players()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    let mut sink = ConsoleSink { names };
    let mut controller = ConsoleController;

    loop {
        game.play_game(&mut controller, &mut sink);

        if !prompt("Do you want to play again? (y/n): ").eq_ignore_ascii_case("y") {
            break;
        }

        game.reset_game();
        println!("\nStarting a new game...\n");
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
