use crate::*;

/// Capabilities shared by every metric the evaluation loop can drive.
///
/// The host feeds one test instance at a time through `record_nominal` or `record_numeric`,
/// depending on the class type, and may query statistics at any point.
pub trait EvaluationMetric: std::fmt::Debug {
    /// Whether the metric can be computed when the class is nominal
    fn applies_to_nominal_class(&self) -> bool;

    /// Whether the metric can be computed when the class is numeric
    fn applies_to_numeric_class(&self) -> bool;

    fn applies_to(&self, class_type: ClassType) -> bool {
        match class_type {
            ClassType::Nominal => self.applies_to_nominal_class(),
            ClassType::Numeric => self.applies_to_numeric_class(),
        }
    }

    fn name(&self) -> &'static str;

    /// Short description (algorithm, formulas etc.)
    fn description(&self) -> &'static str;

    /// Names of the statistics this metric computes, in report order
    fn statistic_names(&self) -> Vec<&'static str>;

    /// Value of the named statistic, or `None` if it can't be computed for some reason
    fn statistic(&self, stat_name: &str) -> Option<Value>;

    /// Whether larger values of the statistic are better
    fn statistic_is_maximisable(&self, _stat_name: &str) -> bool {
        false
    }

    /// Updates the statistics for the current test instance when the class is nominal
    fn record_nominal(&mut self, predicted_distribution: &[Value], instance: &Instance);

    /// Updates the statistics for the current test instance when the class is numeric
    fn record_numeric(&mut self, predicted_value: Value, instance: &Instance);

    /// Formatted block with one line per statistic, suitable for console output
    fn to_summary_string(&self) -> String {
        self.statistic_names()
            .into_iter()
            .map(|stat_name| summary_line(stat_name, self.statistic(stat_name)))
            .collect()
    }
}
