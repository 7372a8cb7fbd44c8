pub mod snapshot;
pub mod report;

pub use snapshot::*;
pub use report::*;
