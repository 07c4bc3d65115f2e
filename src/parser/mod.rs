//! CSV ingestion for the two input files (SRP).
//!
//! This module is responsible for turning raw CSV rows into domain types,
//! applying the rejection and defaulting policy in one place.

mod settings;
mod syslog;

pub use settings::{load_settings, parse_lease_duration, parse_settings, ADDRESS_BLOCK_MARKER};
pub use syslog::{load_syslog, parse_syslog, SYSLOG_TIMESTAMP_FORMAT};

/// Outcome of validating a single field.
///
/// Defaulting and rejection are tagged explicitly rather than buried in
/// error suppression, so the policy is testable in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome<T> {
    /// The field parsed as-is.
    Valid(T),
    /// The field was unusable and a documented default was substituted.
    Defaulted(T),
    /// The field was unusable and the row carrying it must be dropped.
    Rejected,
}

impl<T> FieldOutcome<T> {
    /// The parsed or defaulted value, if the field was not rejected.
    pub fn value(self) -> Option<T> {
        match self {
            FieldOutcome::Valid(v) | FieldOutcome::Defaulted(v) => Some(v),
            FieldOutcome::Rejected => None,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, FieldOutcome::Defaulted(_))
    }
}

/// Split one CSV line into fields.
///
/// The upstream exports are plain comma-separated values with no quoting
/// or embedded commas, so a straight split is sufficient.
pub(crate) fn split_csv_line(line: &str) -> Vec<&str> {
    line.split(',').collect()
}
