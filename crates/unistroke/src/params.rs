use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use unistroke_core::{NormalizeParams, SearchParams};

use crate::io::GestureIoError;
use crate::RecognizeError;

/// Configuration for [`crate::Recognizer`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerParams {
    /// Normalization applied to templates and inputs alike.
    pub normalize: NormalizeParams,
    /// Rotation search window.
    pub search: SearchParams,
}

impl RecognizerParams {
    /// Reject settings the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), RecognizeError> {
        let n = &self.normalize;
        if n.sample_count < 2 {
            return Err(RecognizeError::InvalidParams(format!(
                "sample_count must be at least 2 (got {})",
                n.sample_count
            )));
        }
        if !n.square_size.is_finite() || n.square_size <= 0.0 {
            return Err(RecognizeError::InvalidParams(format!(
                "square_size must be positive (got {})",
                n.square_size
            )));
        }
        if !(0.0..=1.0).contains(&n.one_dimensional_ratio) {
            return Err(RecognizeError::InvalidParams(format!(
                "one_dimensional_ratio must be in [0, 1] (got {})",
                n.one_dimensional_ratio
            )));
        }
        let s = &self.search;
        if !s.angle_range_deg.is_finite() || s.angle_range_deg < 0.0 {
            return Err(RecognizeError::InvalidParams(format!(
                "angle_range_deg must be non-negative (got {})",
                s.angle_range_deg
            )));
        }
        if !s.angle_precision_deg.is_finite() || s.angle_precision_deg <= 0.0 {
            return Err(RecognizeError::InvalidParams(format!(
                "angle_precision_deg must be positive (got {})",
                s.angle_precision_deg
            )));
        }
        Ok(())
    }

    /// Load params from a JSON file. Missing fields take their defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GestureIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write params to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), GestureIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
