//! End-to-end runs of the three reference scenarios.

use patterncore::chain::{ApprovalPolicy, ApprovalTier, Expense, HandleOutcome, ThresholdHandler};
use patterncore::flyweight::{Flyweight, MatchStats, Roster};
use patterncore::machine::{MachineError, SharedStateMachine, StateMachine};
use patterncore::player::{music_player_table, PlayerAction, PlayerState};
use patterncore::HandlerChain;
use std::sync::Arc;
use std::thread;

#[test]
fn music_player_walks_through_the_reference_sequence() {
    let mut player = StateMachine::new(PlayerState::Stopped, music_player_table()).unwrap();
    assert_eq!(player.describe(), "Currently: Music Player is stopped.");

    let results = player.apply_all([
        PlayerAction::Play,
        PlayerAction::Pause,
        PlayerAction::Play,
        PlayerAction::Stop,
    ]);

    let observed: Vec<PlayerState> = results.iter().map(|r| r.state).collect();
    assert_eq!(
        observed,
        vec![
            PlayerState::Playing,
            PlayerState::Paused,
            PlayerState::Playing,
            PlayerState::Stopped,
        ]
    );
    assert!(results.iter().all(|r| r.is_accepted()));
    assert_eq!(
        player.history().get_path(),
        vec![
            &PlayerState::Stopped,
            &PlayerState::Playing,
            &PlayerState::Paused,
            &PlayerState::Playing,
            &PlayerState::Stopped,
        ]
    );
}

#[test]
fn unknown_button_name_is_an_invalid_action() {
    let mut player = StateMachine::new(PlayerState::Stopped, music_player_table()).unwrap();

    let err = player.apply_named("Rewind").unwrap_err();
    assert!(matches!(err, MachineError::InvalidAction { ref name } if name == "Rewind"));
    assert!(player.history().is_empty());

    let result = player.apply_named("Play").unwrap();
    assert_eq!(result.state, PlayerState::Playing);
}

#[test]
fn shared_player_applies_actions_atomically() {
    let player = SharedStateMachine::new(
        StateMachine::new(PlayerState::Stopped, music_player_table()).unwrap(),
    );

    thread::scope(|scope| {
        for _ in 0..4 {
            let player = player.clone();
            scope.spawn(move || {
                for _ in 0..50 {
                    player.apply(PlayerAction::Play);
                    player.apply(PlayerAction::Stop);
                }
            });
        }
    });

    let history = player.history();
    assert_eq!(history.len(), 400);
    assert!(history.is_contiguous());
}

#[test]
fn expense_approval_routes_to_the_reference_approvers() {
    let chain = ApprovalPolicy::standard().build_chain().unwrap();

    let approvers: Vec<Option<String>> = [500.0, 3000.0, 20000.0]
        .into_iter()
        .map(|amount| chain.handle(&Expense::new(amount)).handler().map(str::to_string))
        .collect();

    assert_eq!(
        approvers,
        vec![
            Some("Manager".to_string()),
            Some("Director".to_string()),
            Some("CEO".to_string()),
        ]
    );
}

#[test]
fn chain_without_catch_all_reports_unhandled() {
    let policy = ApprovalPolicy {
        tiers: vec![
            ApprovalTier::capped("Manager", 1000.0),
            ApprovalTier::capped("Director", 10000.0),
        ],
    };
    let chain = policy.build_chain().unwrap();

    assert!(matches!(chain.handle(&Expense::new(20000.0)), HandleOutcome::Unhandled));
}

#[test]
fn hand_assembled_chain_prefers_the_earlier_handler() {
    let mut chain: HandlerChain<Expense, &'static str> = HandlerChain::new();
    chain
        .attach(ThresholdHandler::new("Generous", 5000.0, |_: &str, _: &Expense| "generous"))
        .attach(ThresholdHandler::new("Strict", 100.0, |_: &str, _: &Expense| "strict"));

    let outcome = chain.handle(&Expense::new(50.0));
    assert_eq!(outcome.handler(), Some("Generous"));
    assert_eq!(outcome.into_output(), Some("generous"));
}

#[test]
fn cricket_roster_shares_players_across_matches() {
    let roster = Roster::new();
    let mut scorecard = Vec::new();

    for (runs, wickets) in [(40, 0), (12, 1)] {
        let kohli = roster
            .player("Virat Kohli", "Right arm medium", "Right hand")
            .unwrap();
        let yadav = roster
            .player("Umesh Yadav", "Right arm fast", "Right hand")
            .unwrap();
        scorecard.push(kohli.render(&MatchStats { runs, wickets }));
        scorecard.push(yadav.render(&MatchStats { runs: wickets, wickets: runs % 3 }));
    }

    assert_eq!(roster.len(), 2);
    assert_eq!(scorecard[0], "Virat Kohli scored 40 and took 0");
    assert_eq!(scorecard[2], "Virat Kohli scored 12 and took 1");
}

#[test]
fn concurrent_roster_lookups_agree_on_one_instance() {
    let roster = Roster::new();

    let profiles: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let roster = &roster;
                scope.spawn(move || {
                    roster
                        .player("Umesh Yadav", "Right arm fast", "Right hand")
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(roster.len(), 1);
    assert!(profiles.iter().all(|p| Arc::ptr_eq(p, &profiles[0])));
}
