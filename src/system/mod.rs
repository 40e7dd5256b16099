pub mod collector;
pub mod engine;
pub mod error;
pub mod report;
pub mod sampler;
pub mod scan;
pub mod snapshot;
