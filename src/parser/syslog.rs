//! DHCP syslog CSV parsing.
//!
//! The syslog export is newest-first. The analysis passes require the
//! opposite, so the whole file is materialized and the row order reversed
//! before parsing. Downstream code relies on the resulting ascending
//! timestamp order and never re-sorts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::Ipv4Addr;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::domain::LeaseEvent;
use crate::error::{AppError, RecordError};

/// Timestamp layout in the syslog export: naive local time with
/// microseconds, e.g. `2026-01-15T12:00:00.123456`.
pub const SYSLOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Field positions in a syslog row.
mod fields {
    pub const TIMESTAMP: usize = 0;
    pub const CLIENT_MAC: usize = 2;
    pub const LEASED_ADDRESS: usize = 4;
    pub const SERVER_ADDRESS: usize = 6;
    pub const MIN_FIELDS: usize = 7;
}

/// Parse one syslog row into a lease event.
fn parse_row(row: &[&str]) -> Result<LeaseEvent, RecordError> {
    if row.len() < fields::MIN_FIELDS {
        return Err(RecordError::TooFewFields {
            expected: fields::MIN_FIELDS,
            found: row.len(),
        });
    }

    let leased_addr: Ipv4Addr = row[fields::LEASED_ADDRESS]
        .parse()
        .map_err(|_| RecordError::InvalidAddress(row[fields::LEASED_ADDRESS].to_string()))?;

    let timestamp = NaiveDateTime::parse_from_str(row[fields::TIMESTAMP], SYSLOG_TIMESTAMP_FORMAT)
        .map_err(|_| RecordError::InvalidTimestamp(row[fields::TIMESTAMP].to_string()))?;

    Ok(LeaseEvent::new(
        timestamp,
        row[fields::CLIENT_MAC],
        leased_addr,
        row[fields::SERVER_ADDRESS],
    ))
}

/// Read the syslog CSV and produce lease events, oldest first.
///
/// Rows with an unparseable leased address or timestamp never enter the
/// stream; this also disposes of the header row, whose address column is
/// a column name. Address rejections are routine and logged at debug,
/// timestamp rejections at warn.
pub fn parse_syslog<R: BufRead>(reader: R) -> Result<Vec<LeaseEvent>, AppError> {
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

    let mut events = Vec::new();
    for line in lines.iter().rev() {
        let row = super::split_csv_line(line);
        match parse_row(&row) {
            Ok(event) => events.push(event),
            Err(err @ RecordError::InvalidTimestamp(_)) => {
                tracing::warn!(%err, "rejecting syslog row");
            }
            Err(err) => {
                tracing::debug!(%err, "rejecting syslog row");
            }
        }
    }

    tracing::info!(leases = events.len(), "finished parsing syslog CSV");
    Ok(events)
}

/// Open and parse the syslog CSV at `path`.
pub fn load_syslog(path: &Path) -> Result<Vec<LeaseEvent>, AppError> {
    tracing::info!(path = %path.display(), "parsing DHCP syslog CSV in reverse order");
    let file = File::open(path)?;
    parse_syslog(BufReader::new(file))
}
