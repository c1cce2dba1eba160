//! Nearest-template recognition.
//!
//! Every template is compared against the input in both stroke directions,
//! each at its best rotation within the search window. The template with the
//! strictly smallest distance wins; on ties the earlier template is kept.

use log::{debug, warn};
use serde::Serialize;
use unistroke_core::{
    distance_at_best_angle, normalize, score_from_distance, AngleMatch, CanonicalPath, Point,
};

use crate::{RecognizeError, RecognizerParams, Template};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Name used when a template is added with an empty name.
pub const UNNAMED_TEMPLATE: &str = "no name gesture";

/// Per-template outcome of one recognition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TemplateScore {
    /// Index of the template in insertion order.
    pub index: usize,
    /// Best mean distance over both stroke directions.
    pub distance: f64,
    /// Similarity clamped to `[0, 1]`.
    pub score: f64,
    /// Unclamped similarity, negative for very poor matches.
    pub raw_score: f64,
    /// Candidate rotation (radians) at the best distance.
    pub angle: f64,
    /// Whether the reversed template gave the best distance.
    pub reversed: bool,
}

/// Winning template of a recognition.
#[derive(Clone, Copy, Debug)]
pub struct Match<'a> {
    pub template: &'a Template,
    pub index: usize,
    pub score: f64,
    pub raw_score: f64,
    pub distance: f64,
    pub angle: f64,
    pub reversed: bool,
}

impl Match<'_> {
    #[inline]
    pub fn name(&self) -> &str {
        self.template.name()
    }
}

/// Template library plus the recognition pipeline.
#[derive(Clone, Debug, Default)]
pub struct Recognizer {
    params: RecognizerParams,
    templates: Vec<Template>,
}

impl Recognizer {
    /// Create an empty recognizer after validating `params`.
    pub fn new(params: RecognizerParams) -> Result<Self, RecognizeError> {
        params.validate()?;
        Ok(Self {
            params,
            templates: Vec::new(),
        })
    }

    #[inline]
    pub fn params(&self) -> &RecognizerParams {
        &self.params
    }

    #[inline]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    #[inline]
    pub fn template(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Normalize a raw stroke with this recognizer's params.
    pub fn canonicalize(&self, path: &[Point]) -> Result<CanonicalPath, RecognizeError> {
        normalize(path, &self.params.normalize).map_err(|e| {
            warn!("rejected stroke with {} points: {e}", path.len());
            RecognizeError::from(e)
        })
    }

    /// Normalize `path` and store it as a new template. Returns its index.
    ///
    /// Names need not be unique; an empty name becomes [`UNNAMED_TEMPLATE`].
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        path: &[Point],
    ) -> Result<usize, RecognizeError> {
        let mut name = name.into();
        if name.is_empty() {
            name = UNNAMED_TEMPLATE.to_string();
        }
        let canonical = self.canonicalize(path)?;
        debug!("template #{} '{}' from {} points", self.templates.len(), name, path.len());
        self.templates.push(Template::new(name, canonical));
        Ok(self.templates.len() - 1)
    }

    /// Score `path` against every template, in insertion order.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, path), fields(points = path.len(), templates = self.templates.len()))
    )]
    pub fn score_all(&self, path: &[Point]) -> Result<Vec<TemplateScore>, RecognizeError> {
        let candidate = self.canonicalize(path)?;
        if self.templates.is_empty() {
            return Err(RecognizeError::EmptyTemplateLibrary);
        }

        self.templates
            .iter()
            .enumerate()
            .map(|(index, template)| self.score_template(index, template, &candidate))
            .collect()
    }

    fn score_template(
        &self,
        index: usize,
        template: &Template,
        candidate: &CanonicalPath,
    ) -> Result<TemplateScore, RecognizeError> {
        let search = &self.params.search;
        let forward = distance_at_best_angle(template.path().points(), candidate.points(), search)?;
        let backward =
            distance_at_best_angle(template.reversed_path().points(), candidate.points(), search)?;

        let (best, reversed): (AngleMatch, bool) = if backward.distance < forward.distance {
            (backward, true)
        } else {
            (forward, false)
        };

        let raw_score = score_from_distance(best.distance, self.params.normalize.square_size);
        debug!(
            "template #{index} '{}': distance {:.3} score {:.4}{}",
            template.name(),
            best.distance,
            raw_score,
            if reversed { " (reversed)" } else { "" }
        );

        Ok(TemplateScore {
            index,
            distance: best.distance,
            score: raw_score.clamp(0.0, 1.0),
            raw_score,
            angle: best.angle,
            reversed,
        })
    }

    /// Find the template closest to `path`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, path), fields(points = path.len()))
    )]
    pub fn recognize(&self, path: &[Point]) -> Result<Match<'_>, RecognizeError> {
        let scores = self.score_all(path)?;
        let best = best_score(&scores).ok_or(RecognizeError::EmptyTemplateLibrary)?;
        let template = &self.templates[best.index];
        debug!("best match '{}' score {:.4}", template.name(), best.score);

        Ok(Match {
            template,
            index: best.index,
            score: best.score,
            raw_score: best.raw_score,
            distance: best.distance,
            angle: best.angle,
            reversed: best.reversed,
        })
    }

    /// Store each score on its template so UIs can show the last result.
    ///
    /// `scores` must come from [`Recognizer::score_all`] on this recognizer:
    /// one entry per template, in template order. Anything else is rejected
    /// and no template is touched.
    pub fn record_scores(&mut self, scores: &[TemplateScore]) -> Result<(), RecognizeError> {
        let misplaced = scores.iter().enumerate().any(|(i, s)| s.index != i);
        if scores.len() != self.templates.len() || misplaced {
            return Err(RecognizeError::ForeignScores {
                expected: self.templates.len(),
                actual: scores.len(),
            });
        }
        for (t, s) in self.templates.iter_mut().zip(scores) {
            t.set_last_score(s.score);
        }
        Ok(())
    }
}

/// First entry with the strictly smallest distance.
pub fn best_score(scores: &[TemplateScore]) -> Option<&TemplateScore> {
    let mut best: Option<&TemplateScore> = None;
    for s in scores {
        match best {
            Some(b) if s.distance >= b.distance => {}
            _ => best = Some(s),
        }
    }
    best
}
