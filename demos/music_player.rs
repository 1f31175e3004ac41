//! Music Player
//!
//! This example drives the three-state music player through its buttons.
//!
//! Key concepts:
//! - A total transition table (every button works in every state)
//! - Rejected presses that keep the player where it is
//! - Checkpoint and resume
//!
//! Run with: cargo run --example music_player
//! Set RUST_LOG=debug to see rejected presses logged as well.

use patterncore::checkpoint::Checkpoint;
use patterncore::machine::StateMachine;
use patterncore::player::{music_player_table, PlayerAction, PlayerState};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    println!("=== Music Player Example ===\n");

    let table = Arc::new(music_player_table());
    let mut player = StateMachine::new(PlayerState::Stopped, Arc::clone(&table)).unwrap();
    println!("{}", player.describe());

    for action in [
        PlayerAction::Pause,
        PlayerAction::Play,
        PlayerAction::Pause,
        PlayerAction::Play,
        PlayerAction::Stop,
    ] {
        let result = player.apply(action);
        println!("[{:?}] {} ({})", action, result.message, result.disposition);
        println!("{}", player.describe());
    }

    println!("\nPath: {:?}", player.history().get_path());
    println!(
        "Rejected presses: {} of {}",
        player.metadata().rejected,
        player.metadata().applied
    );

    // Save, restore and keep going.
    let json = player.checkpoint().to_json().unwrap();
    let checkpoint: Checkpoint<PlayerState, PlayerAction> = Checkpoint::from_json(&json).unwrap();
    let mut resumed = StateMachine::resume(checkpoint, table).unwrap();

    match resumed.apply_named("Play") {
        Ok(result) => println!("\nAfter resume: {}", result.message),
        Err(err) => println!("\nAfter resume: {err}"),
    }
    if let Err(err) = resumed.apply_named("Rewind") {
        println!("Unknown button: {err}");
    }

    println!("\n=== Example Complete ===");
}
