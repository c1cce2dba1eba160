//! Canonicalization of raw strokes.
//!
//! The pipeline is fixed: resample to `sample_count` points evenly spaced by
//! arc length, rotate about the centroid so the first point sits on the
//! reference axis, scale into a `square_size` box and move the centroid to the
//! origin. Templates and recognition input must go through the same
//! parameters or their distances are meaningless.

use crate::geometry::{bounding_extent, centroid, interpolate, rotate_about, translate_by};
use crate::{arc_length, GeometryError, Point};
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Relative size below which a bounding-box side counts as zero.
const ZERO_EXTENT_REL: f64 = 1e-9;

/// What to do when one side of the bounding box collapses to zero
/// (a perfectly straight horizontal or vertical stroke).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroExtentPolicy {
    /// Scale the flat axis with the factor of the other axis.
    #[default]
    ScaleUniformly,
    /// Fail with [`GeometryError::ZeroExtent`].
    Reject,
}

/// Parameters of the normalization pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeParams {
    /// Number of points in a canonical path.
    pub sample_count: usize,
    /// Side of the reference square.
    pub square_size: f64,
    /// Aspect ratio (short side / long side) below which a stroke is treated
    /// as one-dimensional and scaled uniformly. `0.0` always scales each axis
    /// independently.
    pub one_dimensional_ratio: f64,
    pub zero_extent: ZeroExtentPolicy,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            sample_count: 64,
            square_size: 250.0,
            one_dimensional_ratio: 0.30,
            zero_extent: ZeroExtentPolicy::ScaleUniformly,
        }
    }
}

/// A path that went through [`normalize`].
///
/// Always holds exactly `sample_count` points centered on the origin. It can
/// only be produced by the pipeline (or by reversing another canonical path).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CanonicalPath {
    points: Vec<Point>,
}

impl CanonicalPath {
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Same points in reverse temporal order.
    pub fn reversed(&self) -> CanonicalPath {
        CanonicalPath {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl AsRef<[Point]> for CanonicalPath {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

/// Run the full pipeline on a raw stroke.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(path, params), fields(points = path.len()))
)]
pub fn normalize(path: &[Point], params: &NormalizeParams) -> Result<CanonicalPath, GeometryError> {
    let resampled = resample(path, params.sample_count)?;
    let rotated = rotate_to_indicative_angle(&resampled)?;
    let scaled = scale_to_square(&rotated, params)?;
    let points = translate_to_origin(&scaled)?;
    Ok(CanonicalPath { points })
}

/// Resample `path` into exactly `n` points evenly spaced along its arc length.
///
/// The first output point is the first input point. If floating point drift
/// stops the walk one point short, the last input point is appended.
pub fn resample(path: &[Point], n: usize) -> Result<Vec<Point>, GeometryError> {
    if n < 2 {
        return Err(GeometryError::InvalidSampleCount { requested: n });
    }
    let length = arc_length(path);
    if path.len() < 2 || !length.is_finite() || length <= 0.0 {
        return Err(GeometryError::DegeneratePath {
            points: path.len(),
            length,
        });
    }

    let interval = length / (n - 1) as f64;
    let mut out = Vec::with_capacity(n);
    out.push(path[0]);

    let mut walked = 0.0;
    let mut prev = path[0];
    let mut i = 1;
    while i < path.len() && out.len() < n {
        let cur = path[i];
        let d = nalgebra::distance(&prev, &cur);
        if walked + d >= interval && d > 0.0 {
            let q = interpolate(prev, cur, (interval - walked) / d);
            out.push(q);
            // The new point starts the next segment; `cur` is revisited.
            prev = q;
            walked = 0.0;
        } else {
            walked += d;
            prev = cur;
            i += 1;
        }
    }

    if out.len() < n {
        debug!("resample padded {} trailing point(s)", n - out.len());
        let last = path[path.len() - 1];
        out.resize(n, last);
    }
    Ok(out)
}

/// Angle that brings the first point onto the reference axis when the path is
/// rotated about its centroid.
pub fn indicative_angle(path: &[Point]) -> Result<f64, GeometryError> {
    let c = centroid(path)?;
    let first = path[0];
    Ok(PI - (first.y - c.y).atan2(first.x - c.x))
}

pub fn rotate_to_indicative_angle(path: &[Point]) -> Result<Vec<Point>, GeometryError> {
    let c = centroid(path)?;
    let theta = indicative_angle(path)?;
    Ok(rotate_about(path, theta, c))
}

/// Scale `path` into the reference square.
///
/// Each axis is scaled independently unless the stroke is (nearly) one
/// dimensional, see [`NormalizeParams::one_dimensional_ratio`] and
/// [`ZeroExtentPolicy`].
pub fn scale_to_square(path: &[Point], params: &NormalizeParams) -> Result<Vec<Point>, GeometryError> {
    let ext = bounding_extent(path)?;
    let long = ext.max_side();
    if long <= 0.0 {
        return Err(GeometryError::ZeroExtent {
            width: ext.width,
            height: ext.height,
        });
    }

    let flat = ext.min_side() <= ZERO_EXTENT_REL * long;
    if flat && params.zero_extent == ZeroExtentPolicy::Reject {
        return Err(GeometryError::ZeroExtent {
            width: ext.width,
            height: ext.height,
        });
    }

    let s = params.square_size;
    let (sx, sy) = if flat || ext.min_side() / long < params.one_dimensional_ratio {
        (s / long, s / long)
    } else {
        (s / ext.width, s / ext.height)
    };

    Ok(path
        .iter()
        .map(|p| Point::new(p.x * sx, p.y * sy))
        .collect())
}

/// Translate so that the centroid lands on the origin.
pub fn translate_to_origin(path: &[Point]) -> Result<Vec<Point>, GeometryError> {
    let c = centroid(path)?;
    Ok(translate_by(path, -c.coords))
}
