//! End-to-end dispatch flows through the store
//!
//! Drives the store the way the terminal front-end does and checks the
//! invariants that must hold after every transition.

use std::sync::{Arc, Mutex};

use libquizflow::{
    Action, AnswerCountPolicy, AppState, LoggingMiddleware, Middleware, QuizSetup, Store,
};

fn setup(policy: AnswerCountPolicy) -> QuizSetup {
    QuizSetup {
        policy,
        ..QuizSetup::default()
    }
}

fn scenario_store(policy: AnswerCountPolicy) -> Store {
    let setup = setup(policy);
    let state = AppState::with_order(&setup, ["99", "11", "33", "13", "42"]).unwrap();
    Store::with_state(state, setup, vec![Box::new(LoggingMiddleware::new())])
}

fn assert_invariants(state: &AppState) {
    assert!(state.current_index() < state.question_count());
    assert_eq!(
        state.current_question().id,
        state.question_order()[state.current_index()]
    );
    assert!(state.answers().values().all(|text| !text.is_empty()));
}

#[test]
fn test_answer_navigate_clear_scenario() {
    let mut store = scenario_store(AnswerCountPolicy::Tracked);

    store.dispatch(Action::answer("99", "a"));
    assert_eq!(store.state().answered_count(), 1);
    assert_eq!(store.state().answer("99"), Some("a"));
    assert_eq!(store.state().answers().len(), 1);

    store.dispatch(Action::NextQuestion);
    assert_eq!(store.state().current_index(), 1);
    assert_eq!(store.state().current_question().id, "11");

    store.dispatch(Action::answer("99", ""));
    assert!(store.state().answers().is_empty());
    assert_eq!(store.state().answered_count(), 0);
}

#[test]
fn test_answering_everything_enables_completion() {
    let mut store = scenario_store(AnswerCountPolicy::Tracked);

    for step in 0..5 {
        let id = store.state().current_question().id.clone();
        store.dispatch(Action::answer(id, format!("answer {}", step)));
        assert!(!store.state().all_answered() || step == 4);
        store.dispatch(Action::NextQuestion);
        assert_invariants(store.state());
    }

    assert_eq!(store.state().answered_count(), 5);
    assert!(store.state().all_answered());

    store.dispatch(Action::Submit);
    assert!(store.state().submitted());

    let report = store.state().report();
    assert_eq!(report.answered, 5);
    assert!(report.answers.iter().all(|a| a.answer.is_some()));
}

#[test]
fn test_count_matches_answers_under_tracked_policy() {
    let mut store = scenario_store(AnswerCountPolicy::Tracked);
    let script = [
        Action::answer("11", ""),
        Action::answer("99", "x"),
        Action::answer("99", "xy"),
        Action::NextQuestion,
        Action::answer("33", "z"),
        Action::answer("42", ""),
        Action::answer("99", ""),
        Action::answer("99", ""),
        Action::PreviousQuestion,
        Action::PreviousQuestion,
        Action::answer("13", "w"),
    ];

    for action in script {
        store.dispatch(action);
        let state = store.state();
        assert_eq!(state.answered_count(), state.answers().len() as i64);
        assert_invariants(state);
    }
}

#[test]
fn test_legacy_policy_reproduces_negative_count() {
    let mut store = scenario_store(AnswerCountPolicy::Legacy);

    store.dispatch(Action::answer("13", ""));
    store.dispatch(Action::answer("13", ""));

    assert_eq!(store.state().answered_count(), -2);
    assert!(store.state().answers().is_empty());

    // Filling every answer can no longer reach the full count
    for id in ["99", "11", "33", "13", "42"] {
        store.dispatch(Action::answer(id, "filled"));
    }
    assert_eq!(store.state().answered_count(), 3);
    assert!(!store.state().all_answered());
}

#[test]
fn test_init_leaves_state_identical() {
    let mut store = scenario_store(AnswerCountPolicy::Tracked);
    store.dispatch(Action::answer("99", "kept"));
    store.dispatch(Action::NextQuestion);

    let before = store.state().clone();
    store.dispatch(Action::Init);
    assert_eq!(store.state(), &before);
}

#[test]
fn test_double_submit_equals_single_submit() {
    let mut once = scenario_store(AnswerCountPolicy::Tracked);
    once.dispatch(Action::Submit);

    let mut twice = scenario_store(AnswerCountPolicy::Tracked);
    twice.dispatch(Action::Submit);
    twice.dispatch(Action::Submit);

    assert_eq!(once.state(), twice.state());
}

#[test]
fn test_middleware_runs_once_before_reducer() {
    let log: Arc<Mutex<Vec<(String, usize)>>> = Arc::new(Mutex::new(Vec::new()));

    let recorder = {
        let log = Arc::clone(&log);
        move |action: Action, state: &AppState| {
            log.lock()
                .unwrap()
                .push((action.name().to_string(), state.current_index()));
            action
        }
    };

    let setup = QuizSetup::default();
    let state = AppState::with_order(&setup, ["99", "11", "33", "13", "42"]).unwrap();
    let middleware: Vec<Box<dyn Middleware>> =
        vec![Box::new(LoggingMiddleware::new()), Box::new(recorder)];
    let mut store = Store::with_state(state, setup, middleware);

    store.dispatch(Action::NextQuestion);
    store.dispatch(Action::NextQuestion);

    // Each entry sees the index from before its own action was applied
    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        vec![
            ("next_question".to_string(), 0),
            ("next_question".to_string(), 1),
        ]
    );
}

#[test]
fn test_rewriting_middleware_changes_what_reducer_sees() {
    let block_submit = |action: Action, _: &AppState| match action {
        Action::Submit => Action::Init,
        other => other,
    };

    let middleware: Vec<Box<dyn Middleware>> = vec![Box::new(block_submit)];
    let mut store = Store::new(QuizSetup::default(), middleware);
    store.dispatch(Action::Submit);

    assert!(!store.state().submitted());
}

#[test]
fn test_channel_subscriber_sees_every_snapshot() {
    let mut store = scenario_store(AnswerCountPolicy::Tracked);
    let (_id, rx) = store.subscribe_channel();

    store.dispatch(Action::answer("99", "a"));
    store.dispatch(Action::NextQuestion);

    let snapshots: Vec<AppState> = rx.try_iter().collect();
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[0].answered_count(), 0);
    assert_eq!(snapshots[1].answered_count(), 1);
    assert_eq!(snapshots[2].current_question().id, "11");
    assert_eq!(&snapshots[2], store.state());
}

#[test]
fn test_unsubscribing_unknown_id_is_noop() {
    let mut a = scenario_store(AnswerCountPolicy::Tracked);
    let mut b = scenario_store(AnswerCountPolicy::Tracked);

    let (id_from_b, _rx) = b.subscribe_channel();
    b.unsubscribe(id_from_b);

    let (_id, _rx_a) = a.subscribe_channel();
    assert_eq!(a.subscriber_count(), 1);

    // Ids are per store; a second removal of the same id changes nothing
    assert!(!b.unsubscribe(id_from_b));
    assert_eq!(b.subscriber_count(), 0);
    assert_eq!(a.subscriber_count(), 1);
}

#[test]
fn test_random_orders_keep_invariants() {
    for _ in 0..20 {
        let mut store = Store::new(QuizSetup::default(), Vec::new());
        assert_invariants(store.state());

        for action in [
            Action::PreviousQuestion,
            Action::NextQuestion,
            Action::NextQuestion,
            Action::NextQuestion,
            Action::NextQuestion,
            Action::NextQuestion,
            Action::PreviousQuestion,
        ] {
            store.dispatch(action);
            assert_invariants(store.state());
        }
        assert_eq!(store.state().current_index(), 3);
    }
}
