mod instance;

pub use instance::*;

/// Type of the target attribute of an evaluation run
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClassType {
    /// Categorical target, predictions are class distributions
    Nominal,
    /// Real-valued target, predictions are single values
    Numeric,
}
