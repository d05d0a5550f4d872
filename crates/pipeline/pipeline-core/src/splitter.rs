//! Calendar cutoff split

use chrono::NaiveDate;
use pipeline_spi::{Dated, Split};

/// Split rows on a calendar cutoff
///
/// Rows dated strictly before `cutoff` are training candidates, everything
/// else is evaluation. Only the first `max_train_samples` candidates, in
/// their original order, are kept for training. Never fails: call
/// [`Split::ensure_usable`] before fitting on the result.
pub fn split_by_date<T: Dated>(
    rows: Vec<T>,
    cutoff: NaiveDate,
    max_train_samples: usize,
) -> Split<T> {
    let (mut train, eval): (Vec<T>, Vec<T>) =
        rows.into_iter().partition(|row| row.date() < cutoff);

    let train_candidates = train.len();
    train.truncate(max_train_samples);

    Split {
        train,
        eval,
        train_candidates,
        cutoff,
    }
}
