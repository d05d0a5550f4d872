//! Access to the calendar date of a row

use crate::model::{LabeledSample, Observation, ScaledSample};
use chrono::NaiveDate;

/// Rows that carry a calendar date and can be split on it
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for Observation {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for LabeledSample {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ScaledSample {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
