use std::fmt;

pub const PROCESSING_TEXT: &str = "Procesando...";
pub const DOWNLOADED_TEXT: &str = "¡Descarga completada! Revisa tu carpeta de descargas.";
pub const NOT_FOUND_TEXT: &str = "No hay fotos asociadas a este jugador";
pub const VERIFICATION_FAILURE_TEXT: &str =
    "No se puede verificar que exista relación entre el número de documento y el nombre proporcionado";

/// The fixed set of status line messages shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Processing,
    Downloaded,
    NotFound,
    ServerError { status: u16, status_text: String },
    VerificationFailure,
}

impl StatusMessage {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StatusMessage::Processing)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StatusMessage::Downloaded)
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Processing => f.write_str(PROCESSING_TEXT),
            StatusMessage::Downloaded => f.write_str(DOWNLOADED_TEXT),
            StatusMessage::NotFound => write!(f, "Error (404): {NOT_FOUND_TEXT}"),
            StatusMessage::ServerError {
                status,
                status_text,
            } => write!(f, "Error ({status}): {status_text}"),
            StatusMessage::VerificationFailure => f.write_str(VERIFICATION_FAILURE_TEXT),
        }
    }
}
