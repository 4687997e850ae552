use crate::*;
use log::{info, warn};

/// Drives a set of metrics over the test instances of one evaluation run
#[derive(Debug)]
pub struct Evaluation {
    class_type: ClassType,
    metrics: Vec<Box<dyn EvaluationMetric>>,
    num_instances: usize,
}

impl Evaluation {
    /// Keeps the requested metrics that can be computed for `class_type`
    pub fn new(class_type: ClassType, kinds: &[MetricKind]) -> Self {
        let metrics = kinds
            .iter()
            .map(|kind| kind.create())
            .filter(|metric| {
                let applies = metric.applies_to(class_type);
                if !applies {
                    warn!(
                        "{} can't be computed for a {:?} class, ignoring it.",
                        metric.name(),
                        class_type
                    );
                }
                applies
            })
            .collect();
        Self {
            class_type,
            metrics,
            num_instances: 0,
        }
    }

    /// Uses every registered metric that applies to `class_type`
    pub fn for_class(class_type: ClassType) -> Self {
        Self::new(class_type, &MetricKind::applicable_to(class_type))
    }

    pub fn class_type(&self) -> ClassType {
        self.class_type
    }

    /// Number of instances passed to the metrics so far, including ones with missing values
    pub fn num_instances(&self) -> usize {
        self.num_instances
    }

    pub fn metrics(&self) -> &[Box<dyn EvaluationMetric>] {
        &self.metrics
    }

    pub fn metric(&self, name: &str) -> Option<&dyn EvaluationMetric> {
        self.metrics
            .iter()
            .find(|metric| metric.name() == name)
            .map(|metric| &**metric)
    }

    pub fn evaluate_numeric(&mut self, predicted_value: Value, instance: &Instance) {
        for metric in self.metrics.iter_mut() {
            metric.record_numeric(predicted_value, instance);
        }
        self.num_instances += 1;
    }

    pub fn evaluate_nominal(&mut self, predicted_distribution: &[Value], instance: &Instance) {
        for metric in self.metrics.iter_mut() {
            metric.record_nominal(predicted_distribution, instance);
        }
        self.num_instances += 1;
    }

    /// Feeds numeric predictions read from a CSV file
    pub fn evaluate_records(&mut self, records: &[PredictionRecord]) {
        for record in records {
            self.evaluate_numeric(record.predicted_value(), &record.instance());
        }
        info!(
            "Evaluated {} instances with {} metrics.",
            self.num_instances,
            self.metrics.len()
        );
    }

    pub fn statistic(&self, metric_name: &str, stat_name: &str) -> Option<Value> {
        self.metric(metric_name)
            .and_then(|metric| metric.statistic(stat_name))
    }

    /// Every statistic of every metric, in registry order
    pub fn statistics(&self) -> Vec<StatisticRecord> {
        self.metrics
            .iter()
            .flat_map(|metric| {
                metric
                    .statistic_names()
                    .into_iter()
                    .map(move |stat_name| StatisticRecord {
                        metric: String::from(metric.name()),
                        statistic: String::from(stat_name),
                        value: metric.statistic(stat_name),
                    })
            })
            .collect()
    }

    pub fn to_summary_string(&self) -> String {
        self.metrics
            .iter()
            .map(|metric| metric.to_summary_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::*;

    fn rossmann_like_records() -> Vec<PredictionRecord> {
        vec![
            PredictionRecord {
                actual: Some(100.0),
                predicted: Some(110.0),
            },
            PredictionRecord {
                actual: None,
                predicted: Some(12.0),
            },
            PredictionRecord {
                actual: Some(200.0),
                predicted: Some(190.0),
            },
            PredictionRecord {
                actual: Some(80.0),
                predicted: None,
            },
            PredictionRecord {
                actual: Some(50.0),
                predicted: Some(55.0),
            },
        ]
    }

    #[test]
    fn numeric_class_selects_rmspe() {
        let evaluation = Evaluation::for_class(ClassType::Numeric);
        assert_eq!(1, evaluation.metrics().len());
        assert!(evaluation.metric("RMSPE").is_some());
    }

    #[test]
    fn nominal_class_drops_numeric_only_metrics() {
        let evaluation = Evaluation::new(ClassType::Nominal, &[MetricKind::Rmspe]);
        assert!(evaluation.metrics().is_empty());
        assert_eq!("", evaluation.to_summary_string());
    }

    #[test]
    fn records_with_missing_values_are_counted_but_not_recorded() {
        let mut evaluation = Evaluation::for_class(ClassType::Numeric);
        evaluation.evaluate_records(&rossmann_like_records());
        assert_eq!(5, evaluation.num_instances());
        let actual = evaluation.statistic("RMSPE", "RMSPE").unwrap();
        assert_abs_diff_eq!(0.0075f64.sqrt(), actual, epsilon = 1e-12);
    }

    #[test]
    fn nominal_predictions_leave_metrics_untouched() {
        let mut evaluation = Evaluation::for_class(ClassType::Numeric);
        evaluation.evaluate_nominal(&[0.3, 0.7], &Instance::new(1.0));
        assert_eq!(1, evaluation.num_instances());
        assert_eq!(None, evaluation.statistic("RMSPE", "RMSPE"));
    }

    #[test]
    fn unknown_metric_or_statistic_is_missing() {
        let mut evaluation = Evaluation::for_class(ClassType::Numeric);
        evaluation.evaluate_numeric(90.0, &Instance::new(100.0));
        assert_eq!(None, evaluation.statistic("MAE", "MAE"));
        assert_eq!(None, evaluation.statistic("RMSPE", "MAE"));
    }

    #[test]
    fn statistics_list_every_metric() {
        let mut evaluation = Evaluation::for_class(ClassType::Numeric);
        let before = evaluation.statistics();
        assert_eq!(1, before.len());
        assert_eq!(None, before[0].value);
        evaluation.evaluate_numeric(90.0, &Instance::new(100.0));
        let after = evaluation.statistics();
        assert_eq!("RMSPE", after[0].metric);
        assert_eq!("RMSPE", after[0].statistic);
        assert_abs_diff_eq!(0.1, after[0].value.unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn summary_contains_one_line_per_metric() {
        let mut evaluation = Evaluation::for_class(ClassType::Numeric);
        evaluation.evaluate_records(&rossmann_like_records());
        let expected = format!("RMSPE{}0.0866\n", " ".repeat(36));
        assert_eq!(expected, evaluation.to_summary_string());
    }
}
