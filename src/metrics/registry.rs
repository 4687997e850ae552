use crate::*;
use strum::VariantNames;

/// Metrics known to the evaluation loop
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, strum::EnumString, strum::EnumVariantNames, strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MetricKind {
    #[strum(serialize = "rmspe")]
    Rmspe,
}

impl MetricKind {
    /// Names accepted by `from_str`
    pub fn names() -> &'static [&'static str] {
        Self::VARIANTS
    }

    /// A fresh, empty metric of this kind
    pub fn create(&self) -> Box<dyn EvaluationMetric> {
        match self {
            MetricKind::Rmspe => Box::new(Rmspe::new()),
        }
    }

    /// All registered kinds whose metric can be computed for `class_type`
    pub fn applicable_to(class_type: ClassType) -> Vec<MetricKind> {
        use strum::IntoEnumIterator;
        MetricKind::iter()
            .filter(|kind| kind.create().applies_to(class_type))
            .collect()
    }
}
