//! DHCP settings CSV parsing.
//!
//! The settings export mixes record types in one file; only address-block
//! rows contribute network blocks to the catalog.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::Ipv4Addr;
use std::path::Path;

use crate::domain::{NetworkBlock, NetworkCatalog, DEFAULT_LEASE_SECS};
use crate::error::AppError;
use crate::parser::FieldOutcome;

/// Record-type sentinel for rows that describe an address block.
pub const ADDRESS_BLOCK_MARKER: &str = "ipamdhcp-v3-addressblock";

/// Field positions in an address-block row.
mod fields {
    pub const RECORD_TYPE: usize = 0;
    pub const NAME: usize = 1;
    pub const NETWORK_ADDRESS: usize = 4;
    pub const LEASE_SECONDS: usize = 10;
    pub const MIN_FIELDS: usize = 11;
}

/// Parse a raw lease-duration field.
///
/// Accepts a non-negative integer; anything else (empty, signs, text,
/// values past u32) falls back to the documented one-hour default.
pub fn parse_lease_duration(raw: &str) -> FieldOutcome<u32> {
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(secs) = raw.parse::<u32>() {
            return FieldOutcome::Valid(secs);
        }
    }
    FieldOutcome::Defaulted(DEFAULT_LEASE_SECS)
}

/// Read the settings CSV and build the network catalog.
///
/// Row-level problems (missing fields, bad representative address) drop
/// the row with a diagnostic and never abort the file.
pub fn parse_settings<R: BufRead>(reader: R) -> Result<NetworkCatalog, AppError> {
    let mut catalog = NetworkCatalog::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let row = super::split_csv_line(&line);

        if row.get(fields::RECORD_TYPE).copied() != Some(ADDRESS_BLOCK_MARKER) {
            continue;
        }

        if row.len() < fields::MIN_FIELDS {
            tracing::warn!(
                line = lineno + 1,
                fields = row.len(),
                "settings row too short, skipping"
            );
            continue;
        }

        let raw_addr = row[fields::NETWORK_ADDRESS];
        let addr: Ipv4Addr = match raw_addr.parse() {
            Ok(addr) => addr,
            Err(_) => {
                tracing::warn!(
                    line = lineno + 1,
                    address = raw_addr,
                    "settings row has invalid network address, skipping"
                );
                continue;
            }
        };

        let lease = parse_lease_duration(row[fields::LEASE_SECONDS]);
        if lease.is_defaulted() {
            tracing::debug!(
                line = lineno + 1,
                network = raw_addr,
                default = DEFAULT_LEASE_SECS,
                "lease duration unusable, applying default"
            );
        }
        let lease_secs = lease
            .value()
            .unwrap_or(DEFAULT_LEASE_SECS);

        catalog.insert(NetworkBlock::new(row[fields::NAME], addr, lease_secs));
    }

    tracing::info!(networks = catalog.len(), "finished parsing settings CSV");
    Ok(catalog)
}

/// Open and parse the settings CSV at `path`.
pub fn load_settings(path: &Path) -> Result<NetworkCatalog, AppError> {
    tracing::info!(path = %path.display(), "parsing DHCP settings CSV");
    let file = File::open(path)?;
    parse_settings(BufReader::new(file))
}
