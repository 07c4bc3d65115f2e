//! Correlation of lease events to their owning network blocks.

use std::collections::HashMap;

use crate::domain::{LeaseEvent, NetworkCatalog, Tally};

/// Result of one correlation pass.
///
/// Both outputs come from the same pass: the grouped event log feeds the
/// per-network detail report, the tally feeds the top-N ranking. Events
/// whose address matches no catalog block appear in neither.
#[derive(Debug, Default, Clone)]
pub struct Correlation {
    /// Network display identity -> the events that landed in it, in
    /// stream order. Bucket order is first-match order.
    buckets: Vec<(String, Vec<LeaseEvent>)>,
    index: HashMap<String, usize>,
    /// Lease count per network display identity.
    pub lease_counts: Tally<String>,
}

impl Correlation {
    /// Events grouped per network, in first-match order.
    pub fn events_by_network(&self) -> impl Iterator<Item = (&str, &[LeaseEvent])> {
        self.buckets
            .iter()
            .map(|(network, events)| (network.as_str(), events.as_slice()))
    }

    /// Events recorded against one network.
    pub fn events_for(&self, network: &str) -> Option<&[LeaseEvent]> {
        self.index
            .get(network)
            .map(|&pos| self.buckets[pos].1.as_slice())
    }

    /// Total number of events that matched some network.
    pub fn matched_events(&self) -> usize {
        self.buckets.iter().map(|(_, events)| events.len()).sum()
    }

    fn record(&mut self, network: &str, event: &LeaseEvent) {
        let pos = match self.index.get(network) {
            Some(&pos) => pos,
            None => {
                self.index.insert(network.to_string(), self.buckets.len());
                self.buckets.push((network.to_string(), Vec::new()));
                self.buckets.len() - 1
            }
        };
        self.buckets[pos].1.push(event.clone());
        self.lease_counts.increment(network.to_string());
    }
}

/// Map every event to the first catalog block containing its address.
///
/// Unmatched events are excluded from both outputs; that is a normal
/// outcome, not an error. The pass holds no state of its own, so running
/// it twice on the same inputs yields identical results.
pub fn correlate(events: &[LeaseEvent], catalog: &NetworkCatalog) -> Correlation {
    tracing::info!(events = events.len(), "correlating DHCP leases to networks");

    let mut correlation = Correlation::default();
    for event in events {
        if let Some(block) = catalog.lookup(event.leased_addr) {
            correlation.record(&block.network, event);
        }
    }

    tracing::info!(
        matched = correlation.matched_events(),
        networks = correlation.lease_counts.len(),
        "finished correlating leases"
    );
    correlation
}

/// Count leases per client over the whole stream.
///
/// Counts every event, matched or not: the client ranking reflects raw
/// DHCP activity, not just traffic inside configured blocks.
pub fn client_lease_counts(events: &[LeaseEvent]) -> Tally<String> {
    let mut tally = Tally::new();
    for event in events {
        tally.increment(event.client_id.clone());
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NetworkBlock;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::net::Ipv4Addr;

    fn ts(secs: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + chrono::Duration::seconds(secs as i64)
    }

    fn event(client: &str, addr: [u8; 4], secs: u32) -> LeaseEvent {
        LeaseEvent::new(ts(secs), client, Ipv4Addr::from(addr), "10.0.0.1")
    }

    fn catalog() -> NetworkCatalog {
        let mut catalog = NetworkCatalog::new();
        catalog.insert(NetworkBlock::new("corp", Ipv4Addr::new(10, 10, 0, 0), 3600));
        catalog.insert(NetworkBlock::new("guest", Ipv4Addr::new(10, 20, 0, 0), 600));
        catalog
    }

    #[test]
    fn groups_events_by_owning_network() {
        let events = vec![
            event("aa:bb", [10, 10, 1, 1], 0),
            event("cc:dd", [10, 20, 1, 1], 10),
            event("aa:bb", [10, 10, 1, 2], 20),
        ];
        let correlation = correlate(&events, &catalog());

        assert_eq!(correlation.events_for("10.10.0.0").unwrap().len(), 2);
        assert_eq!(correlation.events_for("10.20.0.0").unwrap().len(), 1);
        assert_eq!(correlation.lease_counts.get(&"10.10.0.0".to_string()), 2);
        assert_eq!(correlation.lease_counts.get(&"10.20.0.0".to_string()), 1);
    }

    #[test]
    fn unmatched_events_excluded_from_both_outputs() {
        let events = vec![
            event("aa:bb", [192, 168, 1, 1], 0),
            event("aa:bb", [10, 10, 1, 1], 10),
        ];
        let correlation = correlate(&events, &catalog());

        assert_eq!(correlation.matched_events(), 1);
        assert_eq!(correlation.lease_counts.len(), 1);
        assert!(correlation.events_for("192.168.0.0").is_none());
    }

    #[test]
    fn empty_catalog_matches_nothing() {
        let events = vec![event("aa:bb", [10, 10, 1, 1], 0)];
        let correlation = correlate(&events, &NetworkCatalog::new());
        assert_eq!(correlation.matched_events(), 0);
        assert!(correlation.lease_counts.is_empty());
    }

    #[test]
    fn correlate_is_idempotent() {
        let events = vec![
            event("aa:bb", [10, 10, 1, 1], 0),
            event("cc:dd", [10, 20, 1, 1], 10),
            event("ee:ff", [172, 16, 0, 1], 20),
        ];
        let catalog = catalog();

        let first = correlate(&events, &catalog);
        let second = correlate(&events, &catalog);

        assert_eq!(first.lease_counts.ranked(), second.lease_counts.ranked());
        let a: Vec<_> = first.events_by_network().collect();
        let b: Vec<_> = second.events_by_network().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn client_counts_include_unmatched_events() {
        let events = vec![
            event("aa:bb", [10, 10, 1, 1], 0),
            event("aa:bb", [203, 0, 113, 9], 10),
            event("cc:dd", [10, 20, 1, 1], 20),
        ];
        let counts = client_lease_counts(&events);

        assert_eq!(counts.get(&"aa:bb".to_string()), 2);
        assert_eq!(counts.get(&"cc:dd".to_string()), 1);
    }

    #[test]
    fn client_ranking_truncates_to_n() {
        let events = vec![
            event("aa:bb", [10, 10, 1, 1], 0),
            event("aa:bb", [10, 10, 1, 1], 1),
            event("cc:dd", [10, 10, 1, 2], 2),
            event("cc:dd", [10, 10, 1, 2], 3),
            event("cc:dd", [10, 10, 1, 2], 4),
            event("ee:ff", [10, 10, 1, 3], 5),
        ];
        let top = client_lease_counts(&events).top(2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ("cc:dd".to_string(), 3));
        assert_eq!(top[1], ("aa:bb".to_string(), 2));
    }
}
