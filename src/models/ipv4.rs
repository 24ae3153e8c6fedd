//! IPv4 address and CIDR notation utilities.
//!
//! Addresses are handled as big-endian `u32` values (most significant octet first).
//! [`CidrBlock`] pairs an address with a prefix length.

use crate::error::{CalcError, Result};
use crate::validators::{is_valid_ipv4_text, is_valid_prefix_text};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-decimal text into a 32-bit address.
///
/// Leading zeros in a group are accepted and read as decimal (`"010"` is 10).
///
/// # Examples
/// ```
/// use cidr_subnet_calc::models::parse_address;
/// assert_eq!(parse_address("192.168.1.0").unwrap(), 0xC0A80100);
/// ```
pub fn parse_address(text: &str) -> Result<u32> {
    if !is_valid_ipv4_text(text) {
        return Err(CalcError::InvalidAddress(text.to_string()));
    }
    text.split('.').try_fold(0u32, |acc, octet| {
        let octet: u8 = octet
            .parse()
            .map_err(|_| CalcError::InvalidAddress(text.to_string()))?;
        Ok((acc << 8) + u32::from(octet))
    })
}

/// Format a 32-bit address as dotted-decimal text.
pub fn format_address(value: u32) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|octet| octet.to_string())
        .collect::<Vec<String>>()
        .join(".")
}

/// Parse `/N` text into a prefix length in 0..=32.
pub fn parse_prefix(text: &str) -> Result<u8> {
    if !is_valid_prefix_text(text) {
        return Err(CalcError::prefix(text, "expected '/' followed by 1-2 digits"));
    }
    let len: u8 = text[1..]
        .parse()
        .map_err(|_| CalcError::prefix(text, "not a number"))?;
    if len > MAX_LENGTH {
        return Err(CalcError::prefix(text, "must be between 0 and 32"));
    }
    Ok(len)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(CalcError::prefix(&format!("/{len}"), "must be between 0 and 32"))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        // u64 so that a shift by 32 (prefix 0) is defined
        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: u32, len: u8) -> Result<u32> {
    Ok(addr & get_cidr_mask(len)?)
}

/// Calculate the broadcast address for a given address and prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> Result<u32> {
    Ok(addr | !get_cidr_mask(len)?)
}

/// Number of addresses in a block of the given prefix length.
///
/// Returned as u64 since a /0 holds 2^32 addresses.
pub fn block_size(len: u8) -> Result<u64> {
    if len > MAX_LENGTH {
        Err(CalcError::prefix(&format!("/{len}"), "must be between 0 and 32"))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// IPv4 address with CIDR prefix length.
///
/// The address is kept as given; it is not required to be the network address.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash, PartialEq, PartialOrd)]
pub struct CidrBlock {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl CidrBlock {
    /// Create a new [`CidrBlock`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<CidrBlock> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = match addr_cidr.find('/') {
            Some(pos) => addr_cidr.split_at(pos),
            None => return Err(CalcError::prefix(addr_cidr, "missing '/prefix'")),
        };
        let addr = parse_address(addr)?;
        let prefix = parse_prefix(prefix)?;
        Ok(CidrBlock {
            addr: Ipv4Addr::from(addr),
            prefix,
        })
    }

    /// Subnet mask of this block.
    pub fn mask(&self) -> Ipv4Addr {
        // prefix is validated on construction, only a hand built struct can fail
        Ipv4Addr::from(get_cidr_mask(self.prefix).unwrap_or(u32::MAX))
    }

    /// Lowest (network) address in the block.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & u32::from(self.mask()))
    }

    /// Highest (broadcast) address in the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !u32::from(self.mask()))
    }

    /// Total number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix.min(MAX_LENGTH))
    }

    /// True if `addr` is the block's network address.
    pub fn is_aligned(&self) -> bool {
        self.addr == self.network()
    }
}

impl FromStr for CidrBlock {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        CidrBlock::new(s)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_address("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_address("10.0.0.1").unwrap(), 0x0A000001);
        assert_eq!(parse_address("10.0.0.010").unwrap(), 0x0A00000A);
        assert_eq!(
            parse_address("256.1.1.1").unwrap_err(),
            CalcError::InvalidAddress("256.1.1.1".to_string())
        );
        assert!(parse_address("1.2.3").is_err());
    }

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(0), "0.0.0.0");
        assert_eq!(format_address(u32::MAX), "255.255.255.255");
        assert_eq!(format_address(0xC0A80180), "192.168.1.128");
    }

    #[test]
    fn test_address_round_trip() {
        let mut v: u32 = 1;
        for _ in 0..2000 {
            assert_eq!(parse_address(&format_address(v)).unwrap(), v);
            assert_eq!(format_address(v), Ipv4Addr::from(v).to_string());
            v = v.wrapping_mul(2654435761).wrapping_add(12345);
        }
        for text in ["1.2.3.4", "172.16.254.1", "0.0.0.255", "255.0.0.0"] {
            assert_eq!(format_address(parse_address(text).unwrap()), text);
        }
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("/0").unwrap(), 0);
        assert_eq!(parse_prefix("/32").unwrap(), 32);
        assert_eq!(parse_prefix("/08").unwrap(), 8);
        assert!(matches!(
            parse_prefix("/33"),
            Err(CalcError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            parse_prefix("24"),
            Err(CalcError::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn test_cut_and_broadcast() {
        let ip = parse_address("192.168.1.42").unwrap();
        assert_eq!(format_address(cut_addr(ip, 24).unwrap()), "192.168.1.0");
        assert_eq!(format_address(cut_addr(ip, 16).unwrap()), "192.168.0.0");
        assert_eq!(format_address(cut_addr(ip, 0).unwrap()), "0.0.0.0");
        assert_eq!(
            format_address(broadcast_addr(ip, 24).unwrap()),
            "192.168.1.255"
        );
        assert_eq!(
            format_address(broadcast_addr(ip, 0).unwrap()),
            "255.255.255.255"
        );
        assert_eq!(
            format_address(broadcast_addr(ip, 32).unwrap()),
            "192.168.1.42"
        );
        assert!(cut_addr(ip, 33).is_err());
        assert!(broadcast_addr(ip, 33).is_err());
    }

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(0).unwrap(), 4294967296);
        assert_eq!(block_size(24).unwrap(), 256);
        assert_eq!(block_size(31).unwrap(), 2);
        assert_eq!(block_size(32).unwrap(), 1);
        assert!(block_size(33).is_err());
    }

    #[test]
    fn test_cidr_block() {
        let block = CidrBlock::new("10.2.3.4/16").unwrap();
        assert_eq!(block.to_string(), "10.2.3.4/16");
        assert_eq!(block.network(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(block.broadcast(), Ipv4Addr::new(10, 2, 255, 255));
        assert_eq!(block.mask(), Ipv4Addr::new(255, 255, 0, 0));
        assert_eq!(block.size(), 65536);
        assert!(!block.is_aligned());
        assert!(CidrBlock::new("10.2.0.0/16").unwrap().is_aligned());

        assert!(matches!(
            CidrBlock::new("10.0.0.0"),
            Err(CalcError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            CidrBlock::new("10.0.0.256/8"),
            Err(CalcError::InvalidAddress(_))
        ));
        assert!("10.0.0.0/40".parse::<CidrBlock>().is_err());
    }

    #[test]
    fn test_cidr_block_serde() {
        let block: CidrBlock = serde_json::from_str("\"10.0.0.0/24\"").unwrap();
        assert_eq!(block, CidrBlock::new("10.0.0.0/24").unwrap());
        assert_eq!(serde_json::to_string(&block).unwrap(), "\"10.0.0.0/24\"");
        assert!(serde_json::from_str::<CidrBlock>("\"10.0.0.0/x\"").is_err());
    }

    #[test]
    fn test_cidr_block_cmp() {
        let ip1 = CidrBlock::new("10.0.0.1/24").unwrap();
        let ip2 = CidrBlock::new("10.0.0.2/24").unwrap();
        let ip3 = CidrBlock::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 >= ip3);
    }
}
