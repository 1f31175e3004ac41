//! Cricket Roster
//!
//! This example shares player objects across matches.
//!
//! Key concepts:
//! - One shared profile per (name, bowling style, batting style)
//! - Per-match figures passed in at use time, never stored
//!
//! Run with: cargo run --example cricket_roster
//! Set RUST_LOG=debug to see each profile being created.

use patterncore::flyweight::{Flyweight, MatchStats, Roster};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    println!("=== Cricket Roster Example ===\n");

    let roster = Roster::new();
    let matches = [
        ("First Test", MatchStats { runs: 40, wickets: 0 }, MatchStats { runs: 4, wickets: 3 }),
        ("Second Test", MatchStats { runs: 112, wickets: 1 }, MatchStats { runs: 0, wickets: 5 }),
    ];

    for (label, kohli_stats, yadav_stats) in matches {
        let kohli = roster
            .player("Virat Kohli", "Right arm medium", "Right hand")
            .unwrap();
        let yadav = roster
            .player("Umesh Yadav", "Right arm fast", "Right hand")
            .unwrap();

        println!("{label}:");
        println!("  {}", kohli.render(&kohli_stats));
        println!("  {}", yadav.render(&yadav_stats));
    }

    let first = roster.player("Virat Kohli", "Right arm medium", "Right hand").unwrap();
    let second = roster.player("Virat Kohli", "Right arm medium", "Right hand").unwrap();
    println!("\nSame profile reused: {}", Arc::ptr_eq(&first, &second));
    println!("Distinct profiles: {}", roster.len());

    if let Err(err) = roster.player("", "Right arm fast", "Right hand") {
        println!("Rejected: {err}");
    }

    println!("\n=== Example Complete ===");
}
