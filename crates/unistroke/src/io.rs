//! JSON persistence for raw gestures and gesture libraries.
//!
//! Files hold raw (unnormalized) strokes. Templates are rebuilt through the
//! recognizer on load, so a library stays valid if the params change.

use crate::{RecognizeError, Recognizer, RecognizerParams};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use unistroke_core::Point;

#[derive(thiserror::Error, Debug)]
pub enum GestureIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum LibraryError {
    #[error(transparent)]
    Io(#[from] GestureIoError),
    #[error("gesture #{index} '{name}': {source}")]
    Gesture {
        index: usize,
        name: String,
        #[source]
        source: RecognizeError,
    },
    #[error(transparent)]
    Recognize(#[from] RecognizeError),
}

/// A raw stroke saved under a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureRecord {
    pub name: String,
    /// `[x, y]` pairs in drawing order.
    pub points: Vec<[f64; 2]>,
}

impl GestureRecord {
    pub fn from_points(name: impl Into<String>, points: &[Point]) -> Self {
        Self {
            name: name.into(),
            points: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.points.iter().map(|&[x, y]| Point::new(x, y)).collect()
    }

    /// Load a gesture from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GestureIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this gesture to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), GestureIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// File that a gesture named `name` is saved to inside `dir`.
pub fn gesture_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    let stem = if name.is_empty() { "gesture" } else { name };
    dir.as_ref().join(format!("{stem}.json"))
}

/// An ordered set of raw gestures, optionally with the params to use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureLibrary {
    #[serde(default)]
    pub params: Option<RecognizerParams>,
    #[serde(default)]
    pub gestures: Vec<GestureRecord>,
}

impl GestureLibrary {
    /// Load a library from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GestureIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load a library, or start an empty one if the file does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GestureIoError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_json(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write this library to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), GestureIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn push(&mut self, record: GestureRecord) {
        self.gestures.push(record);
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    /// Params stored in the library, or the defaults.
    pub fn recognizer_params(&self) -> RecognizerParams {
        self.params.clone().unwrap_or_default()
    }

    /// Build a recognizer holding every gesture as a template, in file order.
    pub fn build_recognizer(&self) -> Result<Recognizer, LibraryError> {
        let mut recognizer = Recognizer::new(self.recognizer_params())?;
        for (index, g) in self.gestures.iter().enumerate() {
            recognizer
                .add_template(g.name.clone(), &g.to_points())
                .map_err(|source| LibraryError::Gesture {
                    index,
                    name: g.name.clone(),
                    source,
                })?;
        }
        info!("built recognizer with {} template(s)", recognizer.len());
        Ok(recognizer)
    }
}
