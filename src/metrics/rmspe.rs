use crate::*;
use log::{debug, trace};

/// Root Mean Square Percentage Error (RMSPE) over the numeric predictions of a test set.
///
/// Pairs with a missing target or a missing prediction are skipped, so the statistic only
/// reflects instances with complete data. Actual values of zero are not special-cased: the
/// statistic becomes infinite (or NaN if the prediction is zero too).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rmspe {
    actual: Vec<Value>,
    predicted: Vec<Value>,
}

impl Rmspe {
    pub const NAME: &'static str = "RMSPE";

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded pairs
    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }

    /// Recorded actual values in insertion order
    pub fn actual(&self) -> &[Value] {
        &self.actual
    }

    /// Recorded predictions in insertion order
    pub fn predicted(&self) -> &[Value] {
        &self.predicted
    }

    /// Appends all pairs recorded by `other`, e.g. when combining per-shard results
    pub fn merge(&mut self, other: Rmspe) {
        self.actual.extend(other.actual);
        self.predicted.extend(other.predicted);
    }

    fn compute(&self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        let sum: Value = self
            .actual
            .iter()
            .zip(self.predicted.iter())
            .map(|(a, p)| {
                let term = (a - p) / a;
                term * term
            })
            .sum();
        let result = (sum / self.len() as Value).sqrt();
        debug!("{} over {} pairs: {}", Self::NAME, self.len(), result);
        Some(result)
    }
}

impl EvaluationMetric for Rmspe {
    fn applies_to_nominal_class(&self) -> bool {
        false
    }

    fn applies_to_numeric_class(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Root Mean Square Percentage Error"
    }

    fn statistic_names(&self) -> Vec<&'static str> {
        vec![Self::NAME]
    }

    fn statistic(&self, stat_name: &str) -> Option<Value> {
        if stat_name != Self::NAME {
            return None;
        }
        self.compute()
    }

    // undefined for nominal targets
    fn record_nominal(&mut self, _predicted_distribution: &[Value], _instance: &Instance) {}

    fn record_numeric(&mut self, predicted_value: Value, instance: &Instance) {
        if instance.class_is_missing() || is_missing_value(predicted_value) {
            trace!(
                "Skipping pair with missing value (actual: {}, predicted: {})",
                instance.class_value(),
                predicted_value
            );
            return;
        }
        self.actual.push(instance.class_value());
        self.predicted.push(predicted_value);
    }
}
