//! Rotation-optimized distance between canonical paths.

use crate::geometry::{centroid, mean_paired_distance, pointwise_distance, rotate_about};
use crate::golden_section::golden_section_min;
use crate::normalize::resample;
use crate::{GeometryError, Point};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Angular window of the rotation search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Half-width of the search window (degrees), searched as `[-r, +r]`.
    pub angle_range_deg: f64,
    /// Stop once the bracket is at most this wide (degrees).
    pub angle_precision_deg: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            angle_range_deg: 45.0,
            angle_precision_deg: 2.0,
        }
    }
}

/// Best rotation found for a candidate against one template.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleMatch {
    /// Rotation applied to the candidate (radians).
    pub angle: f64,
    /// Mean pointwise distance at `angle`.
    pub distance: f64,
    pub iterations: usize,
}

/// Candidate resampled to the template length when the two disagree.
fn aligned<'a>(template: &[Point], candidate: &'a [Point]) -> Result<Cow<'a, [Point]>, GeometryError> {
    if candidate.len() == template.len() {
        Ok(Cow::Borrowed(candidate))
    } else {
        Ok(Cow::Owned(resample(candidate, template.len())?))
    }
}

/// Mean pointwise distance after rotating `candidate` by `theta` radians about
/// its centroid.
pub fn distance_at_angle(
    template: &[Point],
    candidate: &[Point],
    theta: f64,
) -> Result<f64, GeometryError> {
    let candidate = aligned(template, candidate)?;
    let c = centroid(&candidate)?;
    let rotated = rotate_about(&candidate, theta, c);
    pointwise_distance(&rotated, template)
}

/// Smallest distance over rotations of `candidate` within the search window.
///
/// The unrotated distance is always part of the result, so this never does
/// worse than `distance_at_angle(template, candidate, 0.0)`.
pub fn distance_at_best_angle(
    template: &[Point],
    candidate: &[Point],
    params: &SearchParams,
) -> Result<AngleMatch, GeometryError> {
    let candidate = aligned(template, candidate)?;
    let c = centroid(&candidate)?;

    let objective = |theta: f64| {
        let rotated = rotate_about(&candidate, theta, c);
        mean_paired_distance(&rotated, template)
    };

    let range = params.angle_range_deg.abs().to_radians();
    let outcome = golden_section_min(
        -range,
        range,
        params.angle_precision_deg.to_radians(),
        objective,
    );

    let unrotated = mean_paired_distance(&candidate, template);
    let (angle, distance) = if unrotated <= outcome.value {
        (0.0, unrotated)
    } else {
        (outcome.argument, outcome.value)
    };

    Ok(AngleMatch {
        angle,
        distance,
        iterations: outcome.iterations,
    })
}

/// Map a mean distance to a similarity score using the half-diagonal of the
/// reference square. Not clamped: large distances go negative.
#[inline]
pub fn score_from_distance(distance: f64, square_size: f64) -> f64 {
    1.0 - distance / (0.5 * (2.0 * square_size * square_size).sqrt())
}
