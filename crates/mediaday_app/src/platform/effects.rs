use std::sync::Arc;

use mediaday_client::{
    ClientEvent, ClientHandle, DownloadDirSink, ReqwestContentFetcher, RetrievalClient,
};
use mediaday_core::{Effect, Msg, RequestId, RetrievalOutcome};
use mediaday_logging::{mediaday_info, mediaday_warn, redacted};

use super::config::AppConfig;

/// Executes core effects against the retrieval client and turns completions
/// back into messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(config: &AppConfig) -> Self {
        let fetcher = ReqwestContentFetcher::new(config.client_settings());
        let sink = DownloadDirSink::new(config.output_dir.clone());
        let client = RetrievalClient::new(Arc::new(fetcher), Arc::new(sink));
        Self {
            client: ClientHandle::new(client),
        }
    }

    /// Starts every effect; requests the worker cannot take come back as
    /// already-failed completions.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut rejected = Vec::new();
        for effect in effects {
            match effect {
                Effect::Retrieve {
                    request_id,
                    identifier,
                    name,
                } => {
                    mediaday_info!(
                        "Retrieve request_id={} identifier={} name={}",
                        request_id,
                        redacted(&identifier),
                        redacted(&name)
                    );
                    if let Err(err) = self.client.enqueue(request_id, identifier, name) {
                        mediaday_warn!("Request {} not started: {}", request_id, err);
                        rejected.push(unverified(request_id));
                    }
                }
            }
        }
        rejected
    }

    #[cfg(test)]
    pub(crate) fn shutdown(&mut self) {
        self.client.shutdown();
    }

    /// Blocks until the next retrieval finishes.
    pub fn next_msg(&self) -> Option<Msg> {
        self.client.recv().map(map_event)
    }
}

/// Completion for a request that never got an answer.
pub fn unverified(request_id: RequestId) -> Msg {
    Msg::RetrievalFinished {
        request_id,
        outcome: RetrievalOutcome::VerificationFailure,
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::RetrievalCompleted {
            request_id,
            outcome,
        } => Msg::RetrievalFinished {
            request_id,
            outcome: map_outcome(outcome),
        },
    }
}

fn map_outcome(outcome: mediaday_client::RetrievalOutcome) -> RetrievalOutcome {
    match outcome {
        mediaday_client::RetrievalOutcome::Saved(saved) => {
            mediaday_info!("Saved {} to {:?}", saved.file_name, saved.location);
            RetrievalOutcome::Downloaded
        }
        mediaday_client::RetrievalOutcome::NotFound => RetrievalOutcome::NotFound,
        mediaday_client::RetrievalOutcome::HttpStatus {
            status,
            status_text,
        } => RetrievalOutcome::ServerError {
            status,
            status_text,
        },
        mediaday_client::RetrievalOutcome::VerificationFailed(err) => {
            mediaday_warn!("Verification failed: {}", err);
            RetrievalOutcome::VerificationFailure
        }
    }
}
