pub mod registry;
pub mod schedule;

pub use registry::*;
pub use schedule::*;
