//! Premature-renewal detection over the chronological lease stream.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDateTime};

use crate::domain::{LeaseEvent, NetworkCatalog, Tally};

/// How the detector classified one event.
///
/// Returned from [`MisbehaviorDetector::observe`] so the transition
/// policy is observable in tests without inspecting internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Address matched no catalog block; event skipped entirely.
    Unmatched,
    /// First event for this client; baseline established, never a violation.
    FirstSeen,
    /// Event timestamp precedes the client's last recorded timestamp;
    /// skipped without touching the baseline.
    OutOfOrder,
    /// Client renewed before its lease duration elapsed.
    PrematureRenewal,
    /// Renewal at or after lease expiry; nothing wrong.
    Renewal,
}

/// Final output of one detection pass.
#[derive(Debug, Default, Clone)]
pub struct MisbehaviorReport {
    /// Premature renewals per (client, network display identity).
    tally: Tally<(String, String)>,
}

impl MisbehaviorReport {
    /// Count for one (client, network) pair.
    pub fn count(&self, client: &str, network: &str) -> u64 {
        self.tally
            .get(&(client.to_string(), network.to_string()))
    }

    /// Number of distinct clients with at least one premature renewal.
    pub fn client_count(&self) -> usize {
        self.tally
            .keys()
            .map(|(client, _)| client.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.tally.is_empty()
    }

    /// All (client, network, count) entries sorted by descending count.
    ///
    /// The sort is stable, so equal counts keep first-encountered order.
    pub fn summary(&self) -> Vec<(String, String, u64)> {
        self.tally
            .ranked()
            .into_iter()
            .map(|((client, network), count)| (client, network, count))
            .collect()
    }
}

/// Tracks per-client lease timing against the catalog's lease durations.
///
/// One instance covers one pass over the stream; state never leaks
/// between runs. The stream is assumed ascending by timestamp, but that
/// invariant is not trusted: an event older than the client's recorded
/// baseline is skipped without advancing the baseline, so one corrupt
/// timestamp cannot turn every later comparison against a stale baseline
/// into a storm of false positives.
pub struct MisbehaviorDetector<'a> {
    catalog: &'a NetworkCatalog,
    last_seen: HashMap<String, NaiveDateTime>,
    report: MisbehaviorReport,
}

impl<'a> MisbehaviorDetector<'a> {
    pub fn new(catalog: &'a NetworkCatalog) -> Self {
        Self {
            catalog,
            last_seen: HashMap::new(),
            report: MisbehaviorReport::default(),
        }
    }

    /// Feed one event through the per-client state machine.
    pub fn observe(&mut self, event: &LeaseEvent) -> Observation {
        let Some(block) = self.catalog.lookup(event.leased_addr) else {
            return Observation::Unmatched;
        };

        let Some(&last) = self.last_seen.get(&event.client_id) else {
            self.last_seen
                .insert(event.client_id.clone(), event.timestamp);
            return Observation::FirstSeen;
        };

        let delta = event.timestamp - last;
        if delta < Duration::zero() {
            tracing::warn!(
                client = %event.client_id,
                last = %last,
                current = %event.timestamp,
                "skipping out-of-order lease event"
            );
            return Observation::OutOfOrder;
        }

        let observation = if delta < Duration::seconds(i64::from(block.lease_duration_secs)) {
            self.report
                .tally
                .increment((event.client_id.clone(), block.network.clone()));
            Observation::PrematureRenewal
        } else {
            Observation::Renewal
        };

        self.last_seen
            .insert(event.client_id.clone(), event.timestamp);
        observation
    }

    /// Run the whole stream through the detector and take the report.
    pub fn detect(mut self, events: &[LeaseEvent]) -> MisbehaviorReport {
        tracing::info!(events = events.len(), "identifying misbehaving clients");
        for event in events {
            self.observe(event);
        }
        let report = self.report;
        tracing::info!(clients = report.client_count(), "found misbehaving clients");
        report
    }
}
