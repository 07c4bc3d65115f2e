//! Lease-to-network correlation (SRP).
//!
//! This module maps lease events onto the network catalog and produces
//! the per-network groupings and lease counts used by the reports.

mod network_correlator;

pub use network_correlator::{client_lease_counts, correlate, Correlation};
