//! Example that plays a game without a window and prints what happened.
//!
//! This example shows how to:
//! - Generate an array from a seed with `ArrayGenerator`
//! - Drive a `SortGame` with the `Autopilot`
//! - Read back the event transcript
//!
//! # Usage
//!
//! ```sh
//! cargo run --example autoplay
//! ```
//!
//! Pick the game and replay a specific array (seeds are logged by the games):
//!
//! ```sh
//! cargo run --example autoplay -- --game selection --seed 42
//! ```
//!
//! Sort explicit values instead of a generated array:
//!
//! ```sh
//! cargo run --example autoplay -- --values 42,17,93,8,55,61,29,74
//! ```

use std::{fmt::Display, process};

use clap::{Parser, ValueEnum};
use sortwalk_game::{Autopilot, GameKind};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    Gnome,
    Selection,
}

impl From<Game> for GameKind {
    fn from(game: Game) -> Self {
        match game {
            Game::Gnome => GameKind::Gnome,
            Game::Selection => GameKind::Selection,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Game to play.
    #[arg(long, value_name = "GAME", default_value = "gnome")]
    game: Game,

    /// Seed of the generated array. Random if omitted.
    #[arg(long, value_name = "SEED", conflicts_with = "values")]
    seed: Option<u64>,

    /// Comma-separated values to sort instead of a generated array.
    #[arg(long, value_name = "VALUES", value_delimiter = ',')]
    values: Vec<u32>,

    /// Maximum ticks and confirmations before giving up.
    #[arg(long, value_name = "COUNT", default_value_t = Autopilot::DEFAULT_MAX_STEPS)]
    max_steps: u64,
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(1);
    })
}

fn main() {
    let args = Args::parse();
    let kind = GameKind::from(args.game);

    let values = if args.values.is_empty() {
        let generator = or_exit(kind.config().generator());
        let generated = match args.seed {
            Some(seed) => generator.generate_with_seed(seed),
            None => generator.generate(),
        };
        println!("Seed:");
        println!("  {}", generated.seed);
        println!();
        generated.values
    } else {
        args.values
    };

    let mut game = or_exit(kind.new_game_with_values(kind.config(), &values));
    println!("{}", kind.title());
    println!("  {}", game.array_line());
    println!();

    let transcript = or_exit(Autopilot::new(args.max_steps).run(game.as_mut()));

    println!("Events:");
    for event in &transcript.events {
        println!("  {event}");
    }
    println!();

    println!("Result:");
    println!("  {}", game.array_line());
    println!("  ticks: {}", transcript.ticks);
    println!("  confirmations: {}", transcript.confirmations);
}
