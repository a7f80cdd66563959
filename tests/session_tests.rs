//! Game lifecycle integration tests.
//!
//! These walk a session through whole games the way a host shell would:
//! draw, reorder, evaluate, advance, play again.

use bout_time::core::{EngineError, GameRng, SessionConfig};
use bout_time::events::{EventCatalog, EventId, HistoricalEvent};
use bout_time::session::{Advance, GameSession, SessionPhase, Tick};
use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn on(year: i32, name: &str) -> HistoricalEvent {
    HistoricalEvent::new(
        name,
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        format!("https://example.org/{}", name),
    )
}

const A: EventId = EventId(0);
const B: EventId = EventId(1);
const C: EventId = EventId(2);
const D: EventId = EventId(3);

/// A(2020) B(2019) C(2021) D(2018)
fn scenario_catalog() -> EventCatalog {
    EventCatalog::new(vec![on(2020, "A"), on(2019, "B"), on(2021, "C"), on(2018, "D")])
}

/// Rearrange the current round into `target` using swaps only.
fn arrange(session: &mut GameSession, target: [EventId; 4]) {
    for slot in 0..target.len() {
        let ids = session.current_round().unwrap().ids().to_vec();
        let from = ids.iter().position(|&id| id == target[slot]).unwrap();
        session.swap(slot, from).unwrap();
    }
    assert_eq!(session.current_round().unwrap().ids(), &target);
}

// =============================================================================
// Scenarios
// =============================================================================

/// [A, B, C, D] is not chronological: nothing scored, one round played.
#[test]
fn test_unordered_round_scores_nothing() {
    init_tracing();
    let mut session = GameSession::start(SessionConfig::default(), scenario_catalog(), GameRng::new(1)).unwrap();
    arrange(&mut session, [A, B, C, D]);

    let outcome = session.evaluate().unwrap();
    assert!(!outcome.is_correct);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.rounds_played, 1);
}

/// [D, B, A, C] is chronological and scores a point.
#[test]
fn test_ordered_round_scores() {
    init_tracing();
    let mut session = GameSession::start(SessionConfig::default(), scenario_catalog(), GameRng::new(2)).unwrap();
    arrange(&mut session, [D, B, A, C]);

    let outcome = session.evaluate().unwrap();
    assert!(outcome.is_correct);
    assert_eq!(outcome.score, 1);
    assert_eq!(session.score(), 1);
}

/// A one-round game completes after one evaluation and only `play_again` continues it.
#[test]
fn test_single_round_game() {
    init_tracing();
    let config = SessionConfig::new().with_rounds(1);
    let mut session = GameSession::start(config, scenario_catalog(), GameRng::new(3)).unwrap();

    session.evaluate().unwrap();
    assert_eq!(session.phase(), SessionPhase::Complete);

    let before = session.current_round().unwrap().clone();
    assert_eq!(session.next_round(), Ok(Advance::SessionComplete));
    assert_eq!(session.current_round().unwrap(), &before);
    assert_eq!(session.rounds_played(), 1);

    session.play_again().unwrap();
    assert_eq!(session.phase(), SessionPhase::RoundInProgress);
    assert_eq!(session.score(), 0);
    assert_eq!(session.rounds_played(), 0);
}

// =============================================================================
// Host-shell flows
// =============================================================================

/// Drive a default six-round game with the countdown, scoring every other round.
#[test]
fn test_timed_six_round_game() {
    init_tracing();
    let mut session = GameSession::start(SessionConfig::default(), scenario_catalog(), GameRng::new(4)).unwrap();

    for round in 1..=6u32 {
        if round % 2 == 0 {
            arrange(&mut session, [D, B, A, C]);
        } else {
            arrange(&mut session, [C, A, B, D]);
        }

        let mut countdown = session.countdown();
        let mut warned = false;
        loop {
            match countdown.tick() {
                Tick::Running { .. } => {}
                Tick::Warning { .. } => warned = true,
                Tick::Expired => break,
            }
        }
        assert!(warned);

        let outcome = session.evaluate().unwrap();
        assert_eq!(outcome.is_correct, round % 2 == 0);
        assert_eq!(outcome.rounds_played, round);

        if round < 6 {
            assert_eq!(session.phase(), SessionPhase::RoundResolved);
            assert_eq!(session.next_round(), Ok(Advance::NewRound));
        }
    }

    assert!(session.is_complete());
    assert_eq!(session.score_card().to_string(), "3/6");
}

/// The arrow controls only ever exchange neighbours.
#[test]
fn test_arrow_controls() {
    let mut session = GameSession::start(SessionConfig::default(), scenario_catalog(), GameRng::new(5)).unwrap();
    arrange(&mut session, [A, B, C, D]);

    session.move_down(0).unwrap();
    session.move_down(1).unwrap();
    session.move_up(3).unwrap();
    assert_eq!(session.current_round().unwrap().ids(), &[B, C, D, A]);

    assert_eq!(
        session.move_up(0),
        Err(EngineError::IndexOutOfRange { index: 0, len: 4 })
    );
    assert_eq!(
        session.move_down(3),
        Err(EngineError::IndexOutOfRange { index: 4, len: 4 })
    );
}

/// Links follow the event, not the slot.
#[test]
fn test_event_link_follows_swaps() {
    let mut session = GameSession::start(SessionConfig::default(), scenario_catalog(), GameRng::new(6)).unwrap();
    arrange(&mut session, [A, B, C, D]);
    assert_eq!(session.event_link(0).unwrap(), "https://example.org/A");

    session.swap(0, 2).unwrap();
    assert_eq!(session.event_link(0).unwrap(), "https://example.org/C");
    assert_eq!(session.event_link(2).unwrap(), "https://example.org/A");
}

/// A bad swap reports an error and leaves the order alone.
#[test]
fn test_bad_swap_changes_nothing() {
    let mut session = GameSession::start(SessionConfig::default(), scenario_catalog(), GameRng::new(7)).unwrap();
    let before = session.current_round().unwrap().clone();

    assert_eq!(
        session.swap(1, 5),
        Err(EngineError::IndexOutOfRange { index: 5, len: 4 })
    );
    assert_eq!(session.current_round().unwrap(), &before);
}

/// Same seed, same game.
#[test]
fn test_seeded_sessions_match() {
    let catalog: EventCatalog = (0..30).map(|i| on(1800 + i, &format!("e{}", i))).collect();
    let mut first = GameSession::start(SessionConfig::default(), catalog.clone(), GameRng::new(77)).unwrap();
    let mut second = GameSession::start(SessionConfig::default(), catalog, GameRng::new(77)).unwrap();

    for _ in 0..5 {
        assert_eq!(first.current_round().unwrap(), second.current_round().unwrap());
        first.evaluate().unwrap();
        second.evaluate().unwrap();
        first.next_round().unwrap();
        second.next_round().unwrap();
    }
}
