//! Single-stroke gesture recognition against a library of named templates.
//!
//! This crate provides:
//! - [`Recognizer`]: owns the templates and exposes `add_template` / `recognize`,
//! - JSON persistence for raw gestures and libraries ([`GestureRecord`], [`GestureLibrary`]),
//! - (feature `cli`) the `unistroke` command-line tool.
//!
//! Geometry (resampling, indicative-angle rotation, scaling, the golden-section
//! rotation search) lives in `unistroke-core`, re-exported as [`core`].
//!
//! ## Quickstart
//!
//! ```
//! use unistroke::{Point, Recognizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut recognizer = Recognizer::default();
//! recognizer.add_template("line", &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)])?;
//!
//! let stroke = [Point::new(0.0, 0.0), Point::new(50.0, 1.0), Point::new(100.0, 0.0)];
//! let best = recognizer.recognize(&stroke)?;
//! assert_eq!(best.name(), "line");
//! assert!(best.score > 0.9);
//! # Ok(())
//! # }
//! ```
//!
//! `recognize` takes `&self` and never mutates templates, so a recognizer can
//! be shared across threads once built. Use [`Recognizer::record_scores`] to
//! keep the last scores on the templates for display.

mod error;
mod io;
mod params;
mod recognizer;
mod template;

pub use unistroke_core as core;

pub use error::RecognizeError;
pub use io::{gesture_path, GestureIoError, GestureLibrary, GestureRecord, LibraryError};
pub use params::RecognizerParams;
pub use recognizer::{best_score, Match, Recognizer, TemplateScore, UNNAMED_TEMPLATE};
pub use template::Template;

pub use unistroke_core::{
    CanonicalPath, GeometryError, NormalizeParams, Point, SearchParams, ZeroExtentPolicy,
};
