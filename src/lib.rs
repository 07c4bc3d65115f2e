//! Leasecheck - DHCP lease log analyzer.
//!
//! Correlates a chronological DHCP lease log against configured network
//! blocks and flags clients that renew before their lease time is up.
//! One offline batch pass: parse both CSVs, run the correlation and
//! misbehavior passes, render the report.

pub mod config;
pub mod correlator;
pub mod detector;
pub mod domain;
pub mod error;
pub mod parser;
pub mod reporter;

use std::collections::HashMap;

use crate::correlator::{client_lease_counts, correlate};
use crate::detector::MisbehaviorDetector;
use crate::domain::{LeaseEvent, NetworkCatalog};

/// Everything the reporter needs, computed in one deterministic pass.
#[derive(Debug, Default, Clone)]
pub struct AnalysisReport {
    /// Top clients by lease count, descending, ties in first-seen order.
    pub top_clients: Vec<(String, u64)>,
    /// Top networks by matched lease count, same tie policy.
    pub top_networks: Vec<(String, u64)>,
    /// Configured lease duration per network display identity.
    pub lease_durations: HashMap<String, u32>,
    /// (client, network, count) sorted by descending count.
    pub misbehavior_summary: Vec<(String, String, u64)>,
    /// Distinct clients with at least one premature renewal.
    pub misbehaving_client_count: usize,
}

/// Run the full analysis over an already-ordered event stream.
///
/// `events` must be ascending by timestamp (the syslog parser guarantees
/// this); the passes assume the order and never sort. The function holds
/// no state across calls: the same inputs always produce the same report.
pub fn analyze(
    catalog: &NetworkCatalog,
    events: &[LeaseEvent],
    top_clients: usize,
    top_networks: usize,
) -> AnalysisReport {
    let clients = client_lease_counts(events);
    let correlation = correlate(events, catalog);
    let misbehavior = MisbehaviorDetector::new(catalog).detect(events);

    let lease_durations = catalog
        .blocks()
        .map(|block| (block.network.clone(), block.lease_duration_secs))
        .collect();

    AnalysisReport {
        top_clients: clients.top(top_clients),
        top_networks: correlation.lease_counts.top(top_networks),
        lease_durations,
        misbehavior_summary: misbehavior.summary(),
        misbehaving_client_count: misbehavior.client_count(),
    }
}
