//! Task model - the unit of work that gets ranked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::classification::{Quadrant, Tag};

/// Owner assigned when the input does not name one.
pub const DEFAULT_OWNER: &str = "me";

/// Layer label assigned when the input does not name one.
pub const DEFAULT_LAYER: &str = "Support";

/// A task with its input attributes and the fields derived from them.
///
/// Input attributes come from a loader. Derived attributes are written by a
/// single computation pass and hold neutral defaults until then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Short descriptive title
    pub title: String,

    /// Person responsible for the task
    pub owner: String,

    /// Due date, if any
    pub deadline: Option<NaiveDate>,

    /// Estimated time in hours
    pub time_est: f64,

    /// Energy needed to do the work
    pub energy: Energy,

    /// Free-form category label, as written by the user
    pub layer: String,

    /// Expected impact (0-5)
    pub impact: f64,

    /// Multiplier effect of the task (0-5)
    pub leverage: f64,

    /// Difficulty or resistance (>0, usually 1-5)
    pub effort: f64,

    /// Free-form notes
    pub notes: String,

    /// Weight of the normalized layer
    #[serde(default = "neutral")]
    pub layer_weight: f64,

    /// Deadline-driven score boost
    #[serde(default = "neutral")]
    pub urgency_multiplier: f64,

    /// Blend of impact, layer weight and leverage before urgency and effort
    #[serde(default)]
    pub importance_core: f64,

    /// Final priority score
    #[serde(default)]
    pub score: f64,

    /// Eisenhower quadrant
    #[serde(default)]
    pub quadrant: Option<Quadrant>,

    /// Heuristic tag
    #[serde(default)]
    pub tag: Option<Tag>,

    /// Signed days until the deadline (negative when overdue)
    #[serde(default)]
    pub days_to_deadline: Option<i64>,
}

fn neutral() -> f64 {
    1.0
}

impl Task {
    /// Create a task with the given title and default inputs.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            owner: DEFAULT_OWNER.to_string(),
            deadline: None,
            time_est: 1.0,
            energy: Energy::default(),
            layer: DEFAULT_LAYER.to_string(),
            impact: 3.0,
            leverage: 3.0,
            effort: 2.0,
            notes: String::new(),
            layer_weight: 1.0,
            urgency_multiplier: 1.0,
            importance_core: 0.0,
            score: 0.0,
            quadrant: None,
            tag: None,
            days_to_deadline: None,
        }
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Set the deadline.
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the time estimate in hours.
    pub fn with_time_est(mut self, hours: f64) -> Self {
        self.time_est = hours;
        self
    }

    /// Set the energy level.
    pub fn with_energy(mut self, energy: Energy) -> Self {
        self.energy = energy;
        self
    }

    /// Set the layer label.
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    /// Set impact, leverage and effort at once.
    pub fn with_scores(mut self, impact: f64, leverage: f64, effort: f64) -> Self {
        self.impact = impact;
        self.leverage = leverage;
        self.effort = effort;
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Canonical category of this task's layer label.
    pub fn category(&self) -> Category {
        Category::normalize(&self.layer)
    }

    /// Tag label, empty when no tag applies.
    pub fn tag_label(&self) -> &'static str {
        self.tag.map(|t| t.as_str()).unwrap_or("")
    }

    /// Quadrant label, empty before computation.
    pub fn quadrant_label(&self) -> &'static str {
        self.quadrant.map(|q| q.as_str()).unwrap_or("")
    }
}

/// Energy a task demands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    /// Can be done when tired
    Low,
    /// Normal focus
    #[default]
    Medium,
    /// Needs full focus
    High,
}

impl Energy {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Medium => "medium",
            Energy::High => "high",
        }
    }

    /// Parse a trimmed, case-insensitive label. Empty input means medium.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "medium" => Some(Energy::Medium),
            "low" => Some(Energy::Low),
            "high" => Some(Energy::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Energy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
