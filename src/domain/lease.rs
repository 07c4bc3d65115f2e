//! Lease events observed in the DHCP syslog.

use std::net::Ipv4Addr;

use chrono::NaiveDateTime;

/// A single lease grant or renewal pulled from the DHCP syslog.
///
/// Events are immutable once created. The stream handed to the analysis
/// passes is ascending by `timestamp` (oldest first); the syslog parser
/// establishes that order, the analysis code only assumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaseEvent {
    /// When the lease was issued. The syslog carries naive local
    /// timestamps with microsecond precision, no timezone.
    pub timestamp: NaiveDateTime,
    /// The client's MAC address, treated as an opaque identifier.
    pub client_id: String,
    /// The address handed to the client.
    pub leased_addr: Ipv4Addr,
    /// The DHCP server that issued the lease.
    pub server_id: String,
}

impl LeaseEvent {
    pub fn new(
        timestamp: NaiveDateTime,
        client_id: impl Into<String>,
        leased_addr: Ipv4Addr,
        server_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            client_id: client_id.into(),
            leased_addr,
            server_id: server_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn new_stores_fields() {
        let event = LeaseEvent::new(
            ts(12, 0, 0),
            "aa:bb:cc:dd:ee:ff",
            Ipv4Addr::new(10, 10, 3, 7),
            "10.10.0.1",
        );

        assert_eq!(event.client_id, "aa:bb:cc:dd:ee:ff");
        assert_eq!(event.leased_addr, Ipv4Addr::new(10, 10, 3, 7));
        assert_eq!(event.server_id, "10.10.0.1");
        assert_eq!(event.timestamp, ts(12, 0, 0));
    }

    #[test]
    fn clone_is_equal() {
        let event = LeaseEvent::new(
            ts(0, 0, 0),
            "de:ad:be:ef:00:01",
            Ipv4Addr::new(192, 168, 1, 100),
            "192.168.1.1",
        );
        assert_eq!(event.clone(), event);
    }
}
