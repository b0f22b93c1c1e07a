use thiserror::Error;
use torricelli_core::{ParameterError, constraint::ConstraintError};
use uom::si::{f64::Time, time::minute};

use super::Case;
use crate::transient::euler;

/// Why a single case in a sweep failed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RowError {
    #[error("invalid tank area: {0}")]
    Geometry(#[source] ConstraintError),

    #[error(transparent)]
    Parameters(#[from] ParameterError),

    #[error(transparent)]
    Solve(#[from] euler::Error),
}

/// The outcome of one case.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub case: Case,

    /// Total drain time, or the reason the case failed.
    pub outcome: Result<Time, RowError>,
}

impl Row {
    /// Returns the drain time in minutes, rounded to two decimal places.
    ///
    /// `None` if the case failed.
    #[must_use]
    pub fn drain_minutes(&self) -> Option<f64> {
        self.outcome
            .as_ref()
            .ok()
            .map(|time| (time.get::<minute>() * 100.0).round() / 100.0)
    }
}

/// The rows produced by a sweep, in case order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub rows: Vec<Row>,
}

impl Report {
    /// Returns the rows whose case failed.
    pub fn failures(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.outcome.is_err())
    }

    /// Returns the rows whose case drained.
    pub fn successes(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.outcome.is_ok())
    }
}
