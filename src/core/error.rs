use thiserror::Error;

/// Errors that can occur while turning an upload into report data.
///
/// Extraction degradations (missing optional nodes, unparsable dates or
/// amounts) are *not* errors — they resolve to sentinel strings in the
/// record. Only schema-breaking failures reach this type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InformeError {
    /// The upload was empty or unreadable.
    #[error("archivo vacío o no legible")]
    Empty,

    /// The payload is not well-formed XML.
    #[error("el archivo no parece un XSIG/XML válido: {0}")]
    Xml(String),

    /// A request-level field failed validation.
    #[error("error de validación: {0}")]
    Validation(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "motivo_no_conformidad").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for InformeError {
    fn from(e: ValidationError) -> Self {
        InformeError::Validation(e.to_string())
    }
}
