//! Model module containing data structures

mod metrics;

pub use metrics::Metrics;
