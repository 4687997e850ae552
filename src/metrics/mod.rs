mod metric;
mod registry;
mod rmspe;

pub use metric::*;
pub use registry::*;
pub use rmspe::*;
