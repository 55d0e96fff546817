//! Match engine integration tests over the registered catalog.

use duel_arena::agents::{Agent, RandomAgent, ScriptedAgent};
use duel_arena::arena::{Match, MatchEngine, MatchPhase};
use duel_arena::core::{ArenaError, GameSettings, MatchConfig, PlayerId, PlayerMap};
use duel_arena::games::{BoxedGame, GameRegistry, Nim, Othello, WordLadderDuel};
use duel_arena::rules::grid::{Cell, Grid};
use duel_arena::rules::{Game, Outcome};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn catalog() -> Vec<BoxedGame> {
    let registry = GameRegistry::with_builtin_games();
    let settings = GameSettings::default();
    registry
        .names()
        .into_iter()
        .map(|name| registry.create(name, &settings).unwrap())
        .collect()
}

// =============================================================================
// Random Play
// =============================================================================

#[test]
fn test_random_matches_finish_for_every_game() {
    init_tracing();

    for game in catalog() {
        let name = game.name().to_string();
        for seed in 0..3 {
            let engine = MatchEngine::new(game.clone(), MatchConfig::default().with_seed(seed));
            match engine.play_random() {
                Ok(report) => {
                    assert_eq!(report.game, name);
                    assert!(report.outcome.is_decided(), "{name} ended undecided");
                    assert!(report.plies > 0, "{name} ended before any move");
                }
                // Kings can shuffle for a long time in checkers.
                Err(ArenaError::PlyLimit { .. }) if name == "checkers" => {}
                Err(err) => panic!("{name} (seed {seed}) failed: {err}"),
            }
        }
    }
}

#[test]
fn test_random_matches_are_reproducible() {
    for game in catalog() {
        let engine = MatchEngine::new(game, MatchConfig::default().with_seed(77).with_max_plies(300));
        let first = engine.play_random();
        let second = engine.play_random();

        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(ArenaError::PlyLimit { .. }), Err(ArenaError::PlyLimit { .. })) => {}
            (a, b) => panic!("runs diverged: {a:?} vs {b:?}"),
        }
    }
}

// =============================================================================
// Step-by-step Sessions
// =============================================================================

#[test]
fn test_session_tracks_plies_and_phase() {
    let game = Nim::new(4, 2);
    let engine = MatchEngine::new(game, MatchConfig::default());
    let mut session = engine.start().unwrap();
    let mut agents = PlayerMap::from_array([
        ScriptedAgent::new("a", ["1", "1"]),
        ScriptedAgent::new("b", ["1", "1"]),
    ]);

    let mut phases = Vec::new();
    while session.phase() == MatchPhase::InProgress {
        phases.push(session.step(&mut agents).unwrap());
    }

    assert_eq!(
        phases,
        vec![MatchPhase::InProgress, MatchPhase::InProgress, MatchPhase::InProgress, MatchPhase::Terminal]
    );
    assert_eq!(session.plies(), 4);
    assert_eq!(session.outcome().unwrap(), Outcome::Winner(PlayerId::SECOND));
}

#[test]
fn test_othello_pass_keeps_turns_in_sync() {
    // Player 0 (X) has no capture; player 1 (O) can still capture.
    let game = Othello::new(4);
    let mut state = game.reset();
    state.board = Grid::from_rows(
        ["OXOO", " XOX", "XXOO", "OO X"]
            .iter()
            .map(|row| {
                row.chars()
                    .map(|ch| match ch {
                        'X' => Cell::of(PlayerId::FIRST),
                        'O' => Cell::of(PlayerId::SECOND),
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect(),
    );
    state.to_move = PlayerId::FIRST;

    let mut session = Match::from_state(&game, MatchConfig::default(), state).unwrap();
    assert_eq!(session.current(), PlayerId::FIRST);

    let mut agents = PlayerMap::from_array([RandomAgent::new(1), RandomAgent::new(2)]);
    session.step(&mut agents).unwrap();

    // The only legal action was the pass; O is on move next.
    assert_eq!(session.current(), PlayerId::SECOND);
    assert_eq!(session.state().to_move, PlayerId::SECOND);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_scripted_agent_running_out_aborts() {
    let engine = MatchEngine::new(Nim::new(10, 2), MatchConfig::default());
    let mut agents = PlayerMap::from_array([ScriptedAgent::new("a", ["1"]), ScriptedAgent::new("b", ["1"])]);

    let err = engine.play(&mut agents).unwrap_err();
    assert!(matches!(err, ArenaError::NoLegalActions { agent } if agent == "a"));
}

#[test]
fn test_malformed_agent_action_reports_legal_set() {
    let game = WordLadderDuel::new("cold", "warm", None::<Vec<String>>);
    let engine = MatchEngine::new(game, MatchConfig::default());
    let mut agents = PlayerMap::from_array([
        ScriptedAgent::new("typo", ["colds"]),
        ScriptedAgent::new("idle", Vec::<String>::new()),
    ]);

    match engine.play(&mut agents).unwrap_err() {
        ArenaError::IllegalAgentAction { agent, action, legal } => {
            assert_eq!(agent, "typo");
            assert_eq!(action, "colds");
            assert!(legal.iter().any(|w| w == "cord"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_boxed_agents_on_boxed_game() {
    let registry = GameRegistry::with_builtin_games();
    let game = registry.create("tictactoe", &GameSettings::default()).unwrap();
    let engine = MatchEngine::new(game, MatchConfig::default());
    let mut agents: PlayerMap<Box<dyn Agent<BoxedGame>>> = PlayerMap::from_array([
        Box::new(ScriptedAgent::new("x", ["4", "0", "8"])),
        Box::new(ScriptedAgent::new("o", ["1", "2"])),
    ]);

    let report = engine.play(&mut agents).unwrap();

    assert_eq!(report.outcome, Outcome::Winner(PlayerId::FIRST));
    assert_eq!(report.plies, 5);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["game"], "tictactoe");
}
