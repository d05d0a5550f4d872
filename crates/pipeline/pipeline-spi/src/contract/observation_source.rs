//! Observation source trait

use crate::error::Result;
use crate::model::Observation;

/// Source of dated concentration readings
///
/// Implementations return observations sorted ascending by date.
pub trait ObservationSource {
    /// Read every observation
    fn load(&self) -> Result<Vec<Observation>>;

    /// Human-readable description used in log output
    fn describe(&self) -> String;
}
