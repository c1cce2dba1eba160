use unistroke_core::GeometryError;

/// Errors returned by the recognizer.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecognizeError {
    #[error("no templates registered")]
    EmptyTemplateLibrary,

    #[error("invalid recognizer params: {0}")]
    InvalidParams(String),

    #[error("scores do not line up with the {expected} registered templates ({actual} given)")]
    ForeignScores { expected: usize, actual: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
