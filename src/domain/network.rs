//! Network blocks and the catalog used for address containment lookups.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use ipnet::Ipv4Net;

/// Lease duration applied when the configuration carries no usable value.
pub const DEFAULT_LEASE_SECS: u32 = 3600;

/// The prefix length synthesized for every configured block.
///
/// The upstream IPAM export does not carry a mask we trust, so every
/// block is treated as a /16 anchored at its representative address.
/// Known limitation: blocks narrower or wider than /16 are misrepresented,
/// and overlapping /16s are possible by construction.
pub const SYNTHESIZED_PREFIX_LEN: u8 = 16;

/// A configured DHCP network block.
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkBlock {
    /// Containment range, synthesized as `<network>/16`.
    pub cidr: Ipv4Net,
    /// Name of the block in the source configuration.
    pub name: String,
    /// The representative address string, used as the block's display
    /// identity in all reports.
    pub network: String,
    /// Configured lease time in seconds.
    pub lease_duration_secs: u32,
}

impl NetworkBlock {
    /// Build a block from a representative address and a lease duration.
    ///
    /// The CIDR is always `<addr>/16` regardless of the block's real size.
    pub fn new(name: impl Into<String>, addr: Ipv4Addr, lease_duration_secs: u32) -> Self {
        let cidr = Ipv4Net::new(addr, SYNTHESIZED_PREFIX_LEN)
            .expect("/16 is a valid IPv4 prefix length");
        Self {
            cidr,
            name: name.into(),
            network: addr.to_string(),
            lease_duration_secs,
        }
    }

    /// Whether this block's range contains the given address.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.cidr.contains(&addr)
    }
}

/// The set of configured network blocks, in configuration order.
///
/// Blocks may overlap (every block is a /16), so `lookup` is an explicit
/// linear scan that short-circuits on the first containing block. The scan
/// order is insertion order, which makes overlap resolution deterministic:
/// the block configured first wins.
#[derive(Debug, Default, Clone)]
pub struct NetworkCatalog {
    blocks: Vec<NetworkBlock>,
    /// CIDR -> position in `blocks`, for last-write-wins replacement.
    index: HashMap<Ipv4Net, usize>,
}

impl NetworkCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block, keyed by its CIDR.
    ///
    /// A repeated CIDR overwrites the earlier block in place, keeping the
    /// original position in the scan order (map semantics: last write wins).
    pub fn insert(&mut self, block: NetworkBlock) {
        match self.index.get(&block.cidr) {
            Some(&pos) => self.blocks[pos] = block,
            None => {
                self.index.insert(block.cidr, self.blocks.len());
                self.blocks.push(block);
            }
        }
    }

    /// Find the first block (in insertion order) containing `addr`.
    pub fn lookup(&self, addr: Ipv4Addr) -> Option<&NetworkBlock> {
        self.blocks.iter().find(|block| block.contains(addr))
    }

    /// Iterate blocks in insertion order.
    pub fn blocks(&self) -> impl Iterator<Item = &NetworkBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
