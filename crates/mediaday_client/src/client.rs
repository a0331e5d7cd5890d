use std::sync::Arc;

use mediaday_logging::{mediaday_debug, mediaday_info, mediaday_warn, redacted};

use crate::{
    basic_authorization, decode_artifact, Artifact, ArtifactSink, ContentFetcher,
    RetrievalError, RetrievalOutcome, SavedArtifact,
};

/// Turns an identity pair into a saved archive or a classified failure.
///
/// Holds no per-call state: every `retrieve` fetches, decodes and saves anew.
#[derive(Clone)]
pub struct RetrievalClient {
    fetcher: Arc<dyn ContentFetcher>,
    sink: Arc<dyn ArtifactSink>,
}

impl RetrievalClient {
    pub fn new(fetcher: Arc<dyn ContentFetcher>, sink: Arc<dyn ArtifactSink>) -> Self {
        Self { fetcher, sink }
    }

    pub async fn retrieve(&self, identifier: &str, name: &str) -> RetrievalOutcome {
        mediaday_debug!(
            "Retrieving content for identifier={} name={}",
            redacted(identifier),
            redacted(name)
        );
        let authorization = basic_authorization(identifier, name);

        let response = match self.fetcher.fetch(&authorization).await {
            Ok(response) => response,
            Err(err) => return self.verification_failed(err.into()),
        };

        if response.is_success() {
            return match self.save_body(&response.body) {
                Ok(saved) => {
                    mediaday_info!("Artifact saved: {} bytes", saved.byte_len);
                    RetrievalOutcome::Saved(saved)
                }
                Err(err) => self.verification_failed(err),
            };
        }

        if response.status == 404 {
            mediaday_info!("No artifact for the given identity pair");
            return RetrievalOutcome::NotFound;
        }

        mediaday_warn!(
            "Content request failed: {} {}",
            response.status,
            response.status_text
        );
        RetrievalOutcome::HttpStatus {
            status: response.status,
            status_text: response.status_text,
        }
    }

    fn save_body(&self, body: &str) -> Result<SavedArtifact, RetrievalError> {
        let bytes = decode_artifact(body)?;
        let artifact = Artifact::zip(bytes);
        Ok(self.sink.save(&artifact)?)
    }

    fn verification_failed(&self, err: RetrievalError) -> RetrievalOutcome {
        mediaday_warn!("Retrieval could not be verified: {}", err);
        RetrievalOutcome::VerificationFailed(err)
    }
}
