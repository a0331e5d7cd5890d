use mediaday_logging::mediaday_debug;

use crate::{Effect, FormState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::IdentifierChanged(value) => {
            state.set_identifier(value);
            Vec::new()
        }
        Msg::NameChanged(value) => {
            state.set_name(value);
            Vec::new()
        }
        Msg::Submitted => {
            // Fields go out verbatim: no trimming, no validation, empty allowed.
            let identifier = state.identifier().to_owned();
            let name = state.name().to_owned();
            let request_id = state.begin_request();
            mediaday_debug!("Submitted request {}", request_id);
            vec![Effect::Retrieve {
                request_id,
                identifier,
                name,
            }]
        }
        Msg::RetrievalFinished {
            request_id,
            outcome,
        } => {
            state.finish_request(request_id, &outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
