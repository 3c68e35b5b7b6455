//! Importance and score formulas.

/// Default damping exponent applied to effort.
pub const DEFAULT_ALPHA: f64 = 0.7;

/// Floor for effort in the score denominator.
pub const EFFORT_EPSILON: f64 = 1e-6;

/// Computes importance and the final priority score.
pub trait ScoringStrategy: Send + Sync {
    /// Blend of impact, layer weight and leverage.
    fn importance_core(&self, impact: f64, leverage: f64, layer_weight: f64) -> f64;

    /// Final score from importance, urgency and effort.
    fn score(&self, importance_core: f64, urgency_multiplier: f64, effort: f64) -> f64;
}

/// Power-law scoring.
///
/// ```text
/// importance = 0.5·impact + 0.3·(layer_weight·5.0/1.3) + 0.2·leverage
/// score      = importance·urgency / max(effort, ε)^α
/// ```
///
/// The layer term is rescaled so the top weight (1.30) maps to 5.0, the same
/// range as impact. Larger `alpha` punishes high-effort tasks harder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerScoring {
    alpha: f64,
}

impl PowerScoring {
    /// Create a strategy with the given damping exponent.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Damping exponent.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for PowerScoring {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

impl ScoringStrategy for PowerScoring {
    fn importance_core(&self, impact: f64, leverage: f64, layer_weight: f64) -> f64 {
        0.5 * impact + 0.3 * (layer_weight * 5.0 / 1.3) + 0.2 * leverage
    }

    fn score(&self, importance_core: f64, urgency_multiplier: f64, effort: f64) -> f64 {
        let effort = effort.max(EFFORT_EPSILON);
        (importance_core * urgency_multiplier) / effort.powf(self.alpha)
    }
}
