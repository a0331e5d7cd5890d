use std::sync::Once;

use mediaday_core::{update, Effect, FormState, Msg, RetrievalOutcome, StatusMessage};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(mediaday_logging::initialize_for_tests);
}

fn fill_form(state: FormState, identifier: &str, name: &str) -> FormState {
    let (state, _) = update(state, Msg::IdentifierChanged(identifier.to_string()));
    let (state, _) = update(state, Msg::NameChanged(name.to_string()));
    state
}

#[test]
fn edits_store_fields_verbatim() {
    init_logging();
    let state = fill_form(FormState::new(), "  12345678A ", "Ana:María ");
    let view = state.view();

    assert_eq!(view.identifier, "  12345678A ");
    assert_eq!(view.name, "Ana:María ");
    assert_eq!(view.status, None);
    assert_eq!(view.status_line, "");
    assert!(view.dirty);
}

#[test]
fn latest_edit_replaces_previous_value() {
    init_logging();
    let state = fill_form(FormState::new(), "111", "First");
    let state = fill_form(state, "222", "Second");

    let (_state, effects) = update(state, Msg::Submitted);
    assert_eq!(
        effects,
        vec![Effect::Retrieve {
            request_id: 1,
            identifier: "222".to_string(),
            name: "Second".to_string(),
        }]
    );
}

#[test]
fn submit_sets_processing_and_emits_retrieve() {
    init_logging();
    let state = fill_form(FormState::new(), "123", "User");
    let (mut state, effects) = update(state, Msg::Submitted);

    assert_eq!(
        effects,
        vec![Effect::Retrieve {
            request_id: 1,
            identifier: "123".to_string(),
            name: "User".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.status, Some(StatusMessage::Processing));
    assert_eq!(view.status_line, "Procesando...");
    assert_eq!(view.in_flight, 1);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn empty_fields_are_submitted() {
    init_logging();
    let (_state, effects) = update(FormState::new(), Msg::Submitted);

    assert_eq!(
        effects,
        vec![Effect::Retrieve {
            request_id: 1,
            identifier: String::new(),
            name: String::new(),
        }]
    );
}

#[test]
fn each_retrieval_writes_status_exactly_twice() {
    init_logging();
    let state = fill_form(FormState::new(), "123", "User");
    let (state, _) = update(state, Msg::Submitted);
    assert_eq!(state.status_writes(), 1);

    let (state, effects) = update(
        state,
        Msg::RetrievalFinished {
            request_id: 1,
            outcome: RetrievalOutcome::Downloaded,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.status_writes(), 2);
    assert_eq!(state.view().in_flight, 0);
    assert_eq!(
        state.view().status_line,
        "¡Descarga completada! Revisa tu carpeta de descargas."
    );
}

#[test]
fn request_ids_increase_per_submit() {
    init_logging();
    let state = fill_form(FormState::new(), "123", "User");
    let (state, first) = update(state, Msg::Submitted);
    let (state, second) = update(state, Msg::Submitted);

    let ids: Vec<_> = first
        .iter()
        .chain(second.iter())
        .map(|effect| match effect {
            Effect::Retrieve { request_id, .. } => *request_id,
        })
        .collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(state.view().in_flight, 2);
    assert_eq!(state.in_flight_requests(), vec![1, 2]);
}

#[test]
fn overlapping_requests_last_write_wins() {
    init_logging();
    let state = fill_form(FormState::new(), "123", "User");
    let (state, _) = update(state, Msg::Submitted);
    let (state, _) = update(state, Msg::Submitted);

    // The second request finishes first; the first one's result is shown.
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            request_id: 2,
            outcome: RetrievalOutcome::Downloaded,
        },
    );
    assert_eq!(state.view().in_flight, 1);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            request_id: 1,
            outcome: RetrievalOutcome::NotFound,
        },
    );

    assert_eq!(state.view().in_flight, 0);
    assert_eq!(state.view().status, Some(StatusMessage::NotFound));
    assert_eq!(state.status_writes(), 4);
}

#[test]
fn unknown_request_completion_still_updates_status() {
    init_logging();
    let (state, _) = update(
        FormState::new(),
        Msg::RetrievalFinished {
            request_id: 99,
            outcome: RetrievalOutcome::VerificationFailure,
        },
    );

    assert_eq!(state.view().status, Some(StatusMessage::VerificationFailure));
    assert_eq!(state.view().in_flight, 0);
}
