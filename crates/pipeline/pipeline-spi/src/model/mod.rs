//! Model module containing data structures

mod observation;
mod sample;
mod split;

pub use observation::{FeatureVector, Observation};
pub use sample::{columns, LabeledSample, ScaledSample};
pub use split::{Partition, Split};
