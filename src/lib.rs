pub mod eval;
pub mod io;
pub mod metrics;
pub mod types;

pub use eval::*;
pub use io::*;
pub use metrics::*;
pub use types::*;

pub type Value = f64;

/// Sentinel used by the host's data representation for "value not available"
pub const MISSING_VALUE: Value = f64::NAN;

pub fn is_missing_value(value: Value) -> bool {
    value.is_nan()
}
