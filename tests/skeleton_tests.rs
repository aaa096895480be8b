//! Integration tests for the skeleton entry point.

use std::any::type_name;
use std::cell::RefCell;
use std::rc::Rc;

use breakout_runner::agents::TestPlayer;
use breakout_runner::runner::{Agent, GameRunner, RunnerConfig, SoloGameRunner};
use breakout_runner::skeleton::{self, TEST_CASE};

// =============================================================================
// Recording runner
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    SetAgent(&'static str),
    SetTestCase(String),
    Start,
}

/// Records every call; `start` answers with the configured result.
struct RecordingRunner {
    calls: Rc<RefCell<Vec<Call>>>,
    result: Result<&'static str, String>,
}

impl RecordingRunner {
    fn new(result: Result<&'static str, String>) -> (Self, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let runner = Self {
            calls: Rc::clone(&calls),
            result,
        };
        (runner, calls)
    }
}

impl GameRunner for RecordingRunner {
    type Report = &'static str;
    type Error = String;

    fn set_agent<A: Agent + Default + 'static>(&mut self) {
        self.calls.borrow_mut().push(Call::SetAgent(type_name::<A>()));
    }

    fn set_test_case(&mut self, name: &str) {
        self.calls.borrow_mut().push(Call::SetTestCase(name.to_string()));
    }

    fn start(&mut self) -> Result<Self::Report, Self::Error> {
        self.calls.borrow_mut().push(Call::Start);
        self.result.clone()
    }
}

fn expected_calls() -> Vec<Call> {
    vec![
        Call::SetAgent(type_name::<TestPlayer>()),
        Call::SetTestCase("test1.json".to_string()),
        Call::Start,
    ]
}

// =============================================================================
// Call sequence
// =============================================================================

#[test]
fn test_configures_then_starts() {
    let (runner, calls) = RecordingRunner::new(Ok("valid"));
    skeleton::run(runner).unwrap();

    assert_eq!(*calls.borrow(), expected_calls());
}

#[test]
fn test_fixture_name() {
    assert_eq!(TEST_CASE, "test1.json");
}

#[test]
fn test_repeated_runs_are_identical() {
    let (first, first_calls) = RecordingRunner::new(Ok("valid"));
    let (second, second_calls) = RecordingRunner::new(Ok("valid"));

    skeleton::run(first).unwrap();
    skeleton::run(second).unwrap();

    assert_eq!(*first_calls.borrow(), *second_calls.borrow());
    assert_eq!(*second_calls.borrow(), expected_calls());
}

// =============================================================================
// Results
// =============================================================================

#[test]
fn test_report_returned() {
    let (runner, _) = RecordingRunner::new(Ok("valid"));
    assert_eq!(skeleton::run(runner), Ok("valid"));
}

#[test]
fn test_start_failure_propagates_unchanged() {
    let (runner, calls) = RecordingRunner::new(Err("engine fault".to_string()));
    assert_eq!(skeleton::run(runner), Err("engine fault".to_string()));

    // The failure happens after full configuration.
    assert_eq!(*calls.borrow(), expected_calls());
}

// =============================================================================
// Real runner
// =============================================================================

fn fixture_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config")
}

#[test]
fn test_bundled_fixture_plays_to_an_outcome() {
    let config = RunnerConfig::new()
        .with_test_case_dir(fixture_dir())
        .with_timeouts(false);
    let report = skeleton::run(SoloGameRunner::with_config(config)).unwrap();

    assert_eq!(report.test_case, TEST_CASE);
    assert!(report.agent.ends_with("TestPlayer"));
    assert!(report.turns_played() >= 1);
    assert!(report.turns_played() <= 200);
    assert!(report.summary.len() <= report.turns_played());
    assert!(!report.outcome.message().is_empty());
}

#[test]
fn test_bundled_fixture_is_deterministic() {
    let config = RunnerConfig::new()
        .with_test_case_dir(fixture_dir())
        .with_timeouts(false);

    let first = skeleton::run(SoloGameRunner::with_config(config.clone())).unwrap();
    let second = skeleton::run(SoloGameRunner::with_config(config)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_fixture_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunnerConfig::new().with_test_case_dir(dir.path());
    assert!(skeleton::run(SoloGameRunner::with_config(config)).is_err());
}
