//! Domain models for DHCP lease analysis.
//!
//! This module contains the core domain types that are independent
//! of any infrastructure concerns (SRP, DIP).

mod lease;
mod network;
mod tally;

pub use lease::LeaseEvent;
pub use network::{NetworkBlock, NetworkCatalog, DEFAULT_LEASE_SECS, SYNTHESIZED_PREFIX_LEN};
pub use tally::Tally;
