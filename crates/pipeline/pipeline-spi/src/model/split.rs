//! Date-based train / evaluation split

use crate::error::{PipelineError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two sides of a [`Split`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Partition {
    Training,
    Evaluation,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Training => write!(f, "training"),
            Partition::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// Rows before the cutoff (truncated) and rows on or after it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split<T> {
    /// Leading training candidates kept after truncation, in original order
    pub train: Vec<T>,
    /// Every row dated on or after the cutoff
    pub eval: Vec<T>,
    /// Number of rows before the cutoff, prior to truncation
    pub train_candidates: usize,
    pub cutoff: NaiveDate,
}

impl<T> Split<T> {
    /// Fail with [`PipelineError::EmptyPartition`] if either side is empty
    pub fn ensure_usable(&self) -> Result<()> {
        if self.train.is_empty() {
            return Err(self.empty(Partition::Training));
        }
        if self.eval.is_empty() {
            return Err(self.empty(Partition::Evaluation));
        }
        Ok(())
    }

    /// Transform every row while keeping the partition layout
    pub fn try_map<U, F>(self, mut f: F) -> Result<Split<U>>
    where
        F: FnMut(T) -> Result<U>,
    {
        Ok(Split {
            train: self.train.into_iter().map(&mut f).collect::<Result<_>>()?,
            eval: self.eval.into_iter().map(&mut f).collect::<Result<_>>()?,
            train_candidates: self.train_candidates,
            cutoff: self.cutoff,
        })
    }

    fn empty(&self, partition: Partition) -> PipelineError {
        PipelineError::EmptyPartition {
            partition: partition.to_string(),
            cutoff: self.cutoff.to_string(),
        }
    }
}
