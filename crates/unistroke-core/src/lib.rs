//! Geometry for single-stroke gesture matching.
//!
//! This crate is intentionally small and purely geometric. It turns raw point
//! sequences into canonical paths and measures rotation-optimized distances
//! between them; template storage and I/O live in the `unistroke` crate.

mod error;
mod geometry;
mod golden_section;
mod logger;
mod matching;
mod normalize;

pub use error::GeometryError;
pub use geometry::{
    arc_length, bounding_extent, centroid, interpolate, pointwise_distance, rotate_about,
    translate_by, BoundingExtent, Point,
};
pub use golden_section::{golden_section_min, GoldenSectionBracket, SearchOutcome, INV_PHI};
pub use matching::{
    distance_at_angle, distance_at_best_angle, score_from_distance, AngleMatch, SearchParams,
};
pub use normalize::{
    indicative_angle, normalize, resample, rotate_to_indicative_angle, scale_to_square,
    translate_to_origin, CanonicalPath, NormalizeParams, ZeroExtentPolicy,
};

#[cfg(feature = "tracing")]
pub use logger::{init_tracing, trace_filter, TraceFormat};

pub use logger::{init_with_level, level_from_verbosity};
