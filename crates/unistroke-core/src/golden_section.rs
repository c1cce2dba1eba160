//! Golden-section minimization of a unimodal scalar function.
//!
//! The bracket is an explicit value so callers (and tests) can step it one
//! iteration at a time. Each step reuses one interior evaluation and computes
//! exactly one new one.

use serde::{Deserialize, Serialize};

/// Inverse golden ratio, `(√5 − 1) / 2`.
pub const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Current search interval `[lo, hi]` and its two interior probes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoldenSectionBracket {
    pub lo: f64,
    pub hi: f64,
    /// Lower interior probe and its value.
    pub x1: f64,
    pub f1: f64,
    /// Upper interior probe and its value.
    pub x2: f64,
    pub f2: f64,
}

impl GoldenSectionBracket {
    /// Place both interior probes in `[lo, hi]` and evaluate them.
    pub fn new<F: FnMut(f64) -> f64>(lo: f64, hi: f64, f: &mut F) -> Self {
        let x1 = lower_probe(lo, hi);
        let x2 = upper_probe(lo, hi);
        Self {
            lo,
            hi,
            x1,
            f1: f(x1),
            x2,
            f2: f(x2),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.hi - self.lo).abs()
    }

    /// Shrink the bracket towards the lower probe value.
    pub fn step<F: FnMut(f64) -> f64>(&mut self, f: &mut F) {
        if self.f1 < self.f2 {
            self.hi = self.x2;
            self.x2 = self.x1;
            self.f2 = self.f1;
            self.x1 = lower_probe(self.lo, self.hi);
            self.f1 = f(self.x1);
        } else {
            self.lo = self.x1;
            self.x1 = self.x2;
            self.f1 = self.f2;
            self.x2 = upper_probe(self.lo, self.hi);
            self.f2 = f(self.x2);
        }
    }

    /// Better of the two interior probes as `(argument, value)`.
    pub fn best(&self) -> (f64, f64) {
        if self.f1 <= self.f2 {
            (self.x1, self.f1)
        } else {
            (self.x2, self.f2)
        }
    }
}

#[inline]
fn lower_probe(lo: f64, hi: f64) -> f64 {
    INV_PHI * lo + (1.0 - INV_PHI) * hi
}

#[inline]
fn upper_probe(lo: f64, hi: f64) -> f64 {
    (1.0 - INV_PHI) * lo + INV_PHI * hi
}

/// Result of [`golden_section_min`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub argument: f64,
    pub value: f64,
    pub iterations: usize,
}

/// Minimize `f` on `[lo, hi]` until the bracket is no wider than `tolerance`.
///
/// Terminates after `ceil(log(width / tolerance) / log(φ))` steps; a
/// non-positive tolerance is clamped so the loop stays bounded.
pub fn golden_section_min<F: FnMut(f64) -> f64>(
    lo: f64,
    hi: f64,
    tolerance: f64,
    mut f: F,
) -> SearchOutcome {
    let tolerance = tolerance.max(f64::EPSILON * (hi - lo).abs().max(1.0));
    let mut bracket = GoldenSectionBracket::new(lo, hi, &mut f);
    let mut iterations = 0;
    while bracket.width() > tolerance {
        bracket.step(&mut f);
        iterations += 1;
    }
    let (argument, value) = bracket.best();
    SearchOutcome {
        argument,
        value,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inverse_phi_matches_definition() {
        assert_relative_eq!(INV_PHI, 0.5 * (5.0_f64.sqrt() - 1.0), epsilon = 1e-15);
    }

    #[test]
    fn finds_parabola_minimum() {
        let out = golden_section_min(-45.0, 45.0, 1e-6, |x| (x - 7.5) * (x - 7.5) + 1.0);
        assert_relative_eq!(out.argument, 7.5, epsilon = 1e-5);
        assert_relative_eq!(out.value, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn ninety_degree_bracket_converges_in_bounded_steps() {
        let lo = (-45.0_f64).to_radians();
        let hi = 45.0_f64.to_radians();
        let tol = 2.0_f64.to_radians();
        let mut calls = 0;
        let out = golden_section_min(lo, hi, tol, |x| {
            calls += 1;
            x.abs()
        });
        assert!(out.iterations >= 7 && out.iterations <= 10, "{}", out.iterations);
        // two initial probes plus one per step
        assert_eq!(calls, out.iterations + 2);
    }

    #[test]
    fn each_step_shrinks_by_golden_ratio() {
        let mut f = |x: f64| (x - 0.3).abs();
        let mut b = GoldenSectionBracket::new(-1.0, 1.0, &mut f);
        for _ in 0..5 {
            let before = b.width();
            b.step(&mut f);
            assert_relative_eq!(b.width(), before * INV_PHI, epsilon = 1e-12);
            assert!(b.lo <= 0.3 && 0.3 <= b.hi);
        }
    }
}
