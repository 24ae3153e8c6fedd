//! Calculation output types.

use super::CidrBlock;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Text shown in place of a usable address when a block has none.
pub const NOT_APPLICABLE: &str = "N/A";

/// Facts derived from one address and prefix length.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationResult {
    /// Prefix length the facts were computed for.
    pub prefix: u8,
    /// Dotted form of the subnet mask.
    pub subnet_mask: Ipv4Addr,
    /// Lowest address in the block.
    pub network_address: Ipv4Addr,
    /// Highest address in the block.
    pub broadcast_address: Ipv4Addr,
    /// First host address, `None` for a /31.
    #[serde(serialize_with = "serialize_usable")]
    pub first_usable_ip: Option<Ipv4Addr>,
    /// Last host address, `None` for a /31.
    #[serde(serialize_with = "serialize_usable")]
    pub last_usable_ip: Option<Ipv4Addr>,
    /// Number of addresses in the block.
    pub total_addresses: u64,
}

/// Render a usable address, or [`NOT_APPLICABLE`].
pub fn usable_to_string(addr: Option<Ipv4Addr>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn serialize_usable<S>(addr: &Option<Ipv4Addr>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&usable_to_string(*addr))
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Network Address: {}", self.network_address)?;
        writeln!(f, "Broadcast Address: {}", self.broadcast_address)?;
        writeln!(f, "First Usable IP: {}", usable_to_string(self.first_usable_ip))?;
        writeln!(f, "Last Usable IP: {}", usable_to_string(self.last_usable_ip))?;
        write!(f, "Total Addresses: {}", self.total_addresses)
    }
}

/// One slice of a partitioned parent block.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDescriptor {
    pub cidr: CidrBlock,
    pub total_addresses: u64,
}

impl fmt::Display for SubnetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} addresses)", self.cidr, self.total_addresses)
    }
}
