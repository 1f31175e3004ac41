//! Expense Approval
//!
//! This example routes expenses through a chain of approvers.
//!
//! Key concepts:
//! - Handlers evaluated strictly in attachment order
//! - Policies loaded from JSON and checked for unreachable tiers
//! - `Unhandled` surfaced when no approver accepts
//!
//! Run with: cargo run --example expense_approval

use patterncore::chain::{ApprovalPolicy, Expense, HandleOutcome};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    println!("=== Expense Approval Example ===\n");

    let chain = ApprovalPolicy::standard().build_chain().unwrap();
    println!("Chain: {}\n", chain.handler_names().join(" -> "));

    for expense in [
        Expense::described(500.0, "Team lunch"),
        Expense::described(3000.0, "Conference tickets"),
        Expense::described(20000.0, "New servers"),
    ] {
        match chain.handle(&expense) {
            HandleOutcome::Handled { output, .. } => {
                println!("{}: {}", expense.description, output.message)
            }
            HandleOutcome::Unhandled => println!("{}: nobody can approve", expense.description),
        }
    }

    // A policy without a catch-all leaves large expenses unresolved.
    let capped = ApprovalPolicy::from_json(
        r#"{ "tiers": [
            { "name": "Manager", "limit": 1000 },
            { "name": "Director", "limit": 10000 }
        ] }"#,
    )
    .unwrap();
    let chain = capped.build_chain().unwrap();
    let outcome = chain.handle(&Expense::new(20000.0));
    println!("\nWithout a CEO, $20000 handled: {}", outcome.is_handled());

    // Misordered tiers are caught before any expense is routed.
    let broken = ApprovalPolicy::from_json(
        r#"{ "tiers": [
            { "name": "Director", "limit": 10000 },
            { "name": "Manager", "limit": 1000 }
        ] }"#,
    );
    if let Err(err) = broken {
        println!("Rejected policy: {err}");
    }

    println!("\n=== Example Complete ===");
}
