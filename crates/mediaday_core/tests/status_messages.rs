use mediaday_core::{
    update, FormState, Msg, RetrievalOutcome, StatusMessage, VERIFICATION_FAILURE_TEXT,
};

fn finish_with(outcome: RetrievalOutcome) -> String {
    let (state, _) = update(FormState::new(), Msg::IdentifierChanged("123".to_string()));
    let (state, _) = update(state, Msg::NameChanged("User".to_string()));
    let (state, _) = update(state, Msg::Submitted);
    let (state, _) = update(
        state,
        Msg::RetrievalFinished {
            request_id: 1,
            outcome,
        },
    );
    state.view().status_line
}

#[test]
fn not_found_names_missing_photos() {
    let line = finish_with(RetrievalOutcome::NotFound);
    assert!(line.contains("No hay fotos asociadas a este jugador"));
    assert_eq!(line, "Error (404): No hay fotos asociadas a este jugador");
}

#[test]
fn server_error_shows_status_and_text() {
    let line = finish_with(RetrievalOutcome::ServerError {
        status: 500,
        status_text: "Internal Error".to_string(),
    });
    assert_eq!(line, "Error (500): Internal Error");
}

#[test]
fn server_error_with_empty_text() {
    let line = finish_with(RetrievalOutcome::ServerError {
        status: 599,
        status_text: String::new(),
    });
    assert_eq!(line, "Error (599): ");
}

#[test]
fn verification_failure_text() {
    let line = finish_with(RetrievalOutcome::VerificationFailure);
    assert_eq!(line, VERIFICATION_FAILURE_TEXT);
}

#[test]
fn success_and_terminal_flags() {
    assert!(!StatusMessage::Processing.is_terminal());
    assert!(StatusMessage::Downloaded.is_terminal());
    assert!(StatusMessage::Downloaded.is_success());
    assert!(!StatusMessage::NotFound.is_success());
    assert!(StatusMessage::VerificationFailure.is_terminal());
}
