use crate::{is_missing_value, Value, MISSING_VALUE};

/// A test instance as seen by the metrics: only its target value matters here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    class_value: Value,
}

impl Instance {
    /// A missing-value sentinel passed as `class_value` marks the target as missing
    pub fn new(class_value: Value) -> Self {
        Self { class_value }
    }
    pub fn with_missing_class() -> Self {
        Self::new(MISSING_VALUE)
    }
    pub fn class_is_missing(&self) -> bool {
        is_missing_value(self.class_value)
    }
    /// Raw target value. Returns the missing-value sentinel when the target is not set.
    pub fn class_value(&self) -> Value {
        self.class_value
    }
}

impl From<Option<Value>> for Instance {
    fn from(class_value: Option<Value>) -> Self {
        match class_value {
            Some(value) => Instance::new(value),
            None => Instance::with_missing_class(),
        }
    }
}
