mod evaluation;
#[cfg(feature = "batch")]
mod sharded;

pub use evaluation::*;
#[cfg(feature = "batch")]
pub use sharded::*;
