//! Fills in the derived fields of a task.

use prio_core::{Date, Task};
use tracing::trace;

use crate::{
    Classifier, DefaultLayerPolicy, DefaultUrgencyPolicy, EisenhowerClassifier, LayerPolicy,
    PowerScoring, ScoringStrategy, UrgencyPolicy,
};

/// Computes layer weight, urgency, importance, score, quadrant, tag and
/// days-to-deadline for tasks against one reference date.
pub struct TaskComputer {
    today: Date,
    layers: Box<dyn LayerPolicy>,
    urgency: Box<dyn UrgencyPolicy>,
    classifier: Box<dyn Classifier>,
    scoring: Box<dyn ScoringStrategy>,
}

impl TaskComputer {
    /// Create a computer with the default policies.
    pub fn new(today: Date) -> Self {
        Self {
            today,
            layers: Box::new(DefaultLayerPolicy),
            urgency: Box::new(DefaultUrgencyPolicy),
            classifier: Box::new(EisenhowerClassifier),
            scoring: Box::new(PowerScoring::default()),
        }
    }

    /// Set the layer weight policy.
    pub fn with_layer_policy(mut self, policy: Box<dyn LayerPolicy>) -> Self {
        self.layers = policy;
        self
    }

    /// Set the urgency policy.
    pub fn with_urgency_policy(mut self, policy: Box<dyn UrgencyPolicy>) -> Self {
        self.urgency = policy;
        self
    }

    /// Set the classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the scoring strategy.
    pub fn with_scoring(mut self, scoring: Box<dyn ScoringStrategy>) -> Self {
        self.scoring = scoring;
        self
    }

    /// Use power scoring with the given damping exponent.
    pub fn with_alpha(self, alpha: f64) -> Self {
        self.with_scoring(Box::new(PowerScoring::new(alpha)))
    }

    /// Reference date.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Compute all derived fields of `task` in place and return it.
    ///
    /// Later fields depend on earlier ones, so the order is fixed.
    pub fn compute(&self, mut task: Task) -> Task {
        let today = self.today;

        task.layer_weight = self.layers.weight(&task.layer);
        task.urgency_multiplier = self.urgency.urgency_multiplier(task.deadline, today);
        task.importance_core =
            self.scoring
                .importance_core(task.impact, task.leverage, task.layer_weight);
        task.score = self
            .scoring
            .score(task.importance_core, task.urgency_multiplier, task.effort);
        task.quadrant = Some(self.classifier.quadrant(task.impact, task.deadline, today));
        task.tag = self
            .classifier
            .tag(task.time_est, task.impact, task.deadline, today);
        task.days_to_deadline = self.urgency.days_to_deadline(task.deadline, today);

        trace!("Computed '{}': score {:.3}", task.title, task.score);
        task
    }

    /// Compute every task of a batch, preserving order.
    pub fn compute_all(&self, tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().map(|t| self.compute(t)).collect()
    }
}
