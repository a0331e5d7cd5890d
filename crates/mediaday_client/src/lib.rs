//! Media day client: authenticated zip retrieval and artifact saving.
mod client;
mod credentials;
mod decode;
mod engine;
mod fetch;
mod persist;
mod sink;
mod types;

pub use client::RetrievalClient;
pub use credentials::basic_authorization;
pub use decode::{decode_artifact, DecodeError};
pub use engine::ClientHandle;
pub use fetch::{ClientSettings, ContentFetcher, ContentResponse, ReqwestContentFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use sink::{
    Artifact, ArtifactSink, DownloadDirSink, SavedArtifact, ARTIFACT_FILE_NAME,
    ARTIFACT_MIME_TYPE,
};
pub use types::{
    ClientEvent, ClientStopped, FailureKind, FetchError, RequestId, RetrievalError,
    RetrievalOutcome,
};
