pub mod associate;
pub mod metrics;
pub mod snapshot;
