/// Errors produced by the geometric pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("degenerate path ({points} points, arc length {length})")]
    DegeneratePath { points: usize, length: f64 },

    #[error("zero bounding extent (width={width}, height={height})")]
    ZeroExtent { width: f64, height: f64 },

    #[error("path length mismatch ({left} vs {right} points)")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid sample count {requested} (need at least 2)")]
    InvalidSampleCount { requested: usize },
}
