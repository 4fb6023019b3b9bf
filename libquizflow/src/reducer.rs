//! Pure reducer function for state transitions
//!
//! `(Option<State>, Action) -> State`. The reducer has no side effects: no
//! logging, no I/O, no randomness beyond shuffling the order of a brand new
//! state. Every transition either applies or is a no-op; none can fail.

use std::collections::btree_map::Entry;

use crate::actions::Action;
use crate::state::{AnswerCountPolicy, AppState, QuizSetup};

/// Reducer entry point used by the store
///
/// A missing state is first replaced by a freshly shuffled initial state
/// built from `setup`, then the action is applied to it.
pub fn reduce(state: Option<AppState>, action: Action, setup: &QuizSetup) -> AppState {
    let state = state.unwrap_or_else(|| AppState::initial(setup));
    apply(state, action)
}

/// Apply an action to an existing state
pub fn apply(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::Init => state,

        Action::AnswerQuestion { id, text } => {
            if text.is_empty() {
                let removed = state.answers.remove(&id).is_some();
                match state.policy {
                    AnswerCountPolicy::Tracked if !removed => {}
                    _ => state.answered_count -= 1,
                }
            } else {
                match state.answers.entry(id) {
                    Entry::Occupied(mut entry) => {
                        entry.insert(text);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(text);
                        state.answered_count += 1;
                    }
                }
            }
            state
        }

        Action::NextQuestion => {
            if !state.is_last() {
                let index = state.current_index + 1;
                state.reposition(index);
            }
            state
        }

        Action::PreviousQuestion => {
            if !state.is_first() {
                let index = state.current_index - 1;
                state.reposition(index);
            }
            state
        }

        Action::Submit => AppState {
            submitted: true,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_state(policy: AnswerCountPolicy) -> AppState {
        let setup = QuizSetup {
            policy,
            ..QuizSetup::default()
        };
        AppState::with_order(&setup, ["99", "11", "33", "13", "42"]).unwrap()
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = scenario_state(AnswerCountPolicy::Tracked);
        let before = state.clone();

        let new_state = apply(state.clone(), Action::answer("99", "a"));

        assert_eq!(state, before);
        assert_eq!(new_state.answer("99"), Some("a"));
    }

    #[test]
    fn test_reduce_builds_initial_state_when_absent() {
        let setup = QuizSetup::default();
        let state = reduce(None, Action::Init, &setup);

        assert_eq!(state.current_index(), 0);
        assert_eq!(state.answered_count(), 0);
        assert_eq!(state.current_question().id, state.question_order()[0]);
        assert!(!state.submitted());
    }

    #[test]
    fn test_reduce_applies_action_to_fresh_state() {
        let setup = QuizSetup::default();
        let state = reduce(None, Action::NextQuestion, &setup);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_reduce_keeps_existing_state() {
        let existing = scenario_state(AnswerCountPolicy::Tracked);
        let state = reduce(Some(existing.clone()), Action::Init, &QuizSetup::default());
        assert_eq!(state, existing);
    }

    #[test]
    fn test_overwrite_does_not_increment() {
        let state = scenario_state(AnswerCountPolicy::Tracked);
        let state = apply(state, Action::answer("99", "a"));
        let state = apply(state, Action::answer("99", "ab"));

        assert_eq!(state.answered_count(), 1);
        assert_eq!(state.answer("99"), Some("ab"));
    }

    #[test]
    fn test_clear_unset_answer_tracked() {
        let state = scenario_state(AnswerCountPolicy::Tracked);
        let state = apply(state, Action::answer("11", ""));

        assert_eq!(state.answered_count(), 0);
        assert!(state.answers().is_empty());
    }

    #[test]
    fn test_clear_unset_answer_legacy_goes_negative() {
        let state = scenario_state(AnswerCountPolicy::Legacy);
        let state = apply(state, Action::answer("11", ""));

        assert_eq!(state.answered_count(), -1);
        assert!(state.answers().is_empty());
    }

    #[test]
    fn test_clear_set_answer_same_under_both_policies() {
        for policy in [AnswerCountPolicy::Tracked, AnswerCountPolicy::Legacy] {
            let state = scenario_state(policy);
            let state = apply(state, Action::answer("42", "x"));
            let state = apply(state, Action::answer("42", ""));
            assert_eq!(state.answered_count(), 0, "{:?}", policy);
        }
    }

    #[test]
    fn test_next_and_previous_move_current_question() {
        let state = scenario_state(AnswerCountPolicy::Tracked);

        let state = apply(state, Action::NextQuestion);
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.current_question().id, "11");

        let state = apply(state, Action::PreviousQuestion);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_question().id, "99");
    }

    #[test]
    fn test_boundaries_are_noops() {
        let state = scenario_state(AnswerCountPolicy::Tracked);
        let at_start = apply(state.clone(), Action::PreviousQuestion);
        assert_eq!(at_start, state);

        let mut state = state;
        for _ in 0..4 {
            state = apply(state, Action::NextQuestion);
        }
        assert_eq!(state.current_index(), 4);
        assert_eq!(state.current_question().id, "42");

        let at_end = apply(state.clone(), Action::NextQuestion);
        assert_eq!(at_end, state);
    }

    #[test]
    fn test_submit_is_idempotent() {
        let state = scenario_state(AnswerCountPolicy::Tracked);
        let once = apply(state, Action::Submit);
        let twice = apply(once.clone(), Action::Submit);

        assert!(once.submitted());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_submit_does_not_require_all_answers() {
        let state = scenario_state(AnswerCountPolicy::Tracked);
        let state = apply(state, Action::Submit);
        assert!(state.submitted());
        assert_eq!(state.answered_count(), 0);
    }
}
