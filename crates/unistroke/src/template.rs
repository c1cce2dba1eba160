use serde::Serialize;
use unistroke_core::CanonicalPath;

/// A named canonical path stored by the recognizer.
#[derive(Clone, Debug, Serialize)]
pub struct Template {
    name: String,
    path: CanonicalPath,
    /// Score from the last recognition recorded with
    /// [`crate::Recognizer::record_scores`]. Diagnostic only.
    last_score: Option<f64>,
}

impl Template {
    pub fn new(name: impl Into<String>, path: CanonicalPath) -> Self {
        Self {
            name: name.into(),
            path,
            last_score: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> &CanonicalPath {
        &self.path
    }

    /// The path in reverse order, used to match strokes drawn end-to-start.
    pub fn reversed_path(&self) -> CanonicalPath {
        self.path.reversed()
    }

    #[inline]
    pub fn last_score(&self) -> Option<f64> {
        self.last_score
    }

    pub fn set_last_score(&mut self, score: f64) {
        self.last_score = Some(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unistroke_core::{normalize, NormalizeParams, Point};

    fn template() -> Template {
        let stroke = [
            Point::new(0.0, 0.0),
            Point::new(30.0, 70.0),
            Point::new(90.0, 10.0),
        ];
        let path = normalize(&stroke, &NormalizeParams::default()).expect("normalize");
        Template::new("vee", path)
    }

    #[test]
    fn reversed_path_runs_backwards() {
        let t = template();
        let rev = t.reversed_path();
        let fwd = t.path().points();
        assert_eq!(rev.len(), fwd.len());
        for (a, b) in rev.points().iter().zip(fwd.iter().rev()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn reversing_twice_restores_order() {
        let t = template();
        assert_eq!(&t.reversed_path().reversed(), t.path());
    }

    #[test]
    fn last_score_starts_empty() {
        let mut t = template();
        assert_eq!(t.name(), "vee");
        assert_eq!(t.last_score(), None);
        t.set_last_score(0.75);
        assert_eq!(t.last_score(), Some(0.75));
    }
}
