//! IPv4 CIDR calculator.
//!
//! Computes block boundaries from an address and prefix length, and partitions a
//! parent block into equally sized subnets. Everything here is pure arithmetic on
//! text input; nothing is shared between calls.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
mod validators;

pub use error::{CalcError, Result};
pub use models::{CalculationResult, CidrBlock, SubnetDescriptor};
pub use validators::{is_valid_ipv4_text, is_valid_prefix_text};

/// Calculate network facts for `ip_address` (e.g. "192.168.1.0") and `cidr_mask` (e.g. "/24").
///
/// # Examples
/// ```
/// use cidr_subnet_calc::calculate_cidr;
/// let r = calculate_cidr("192.168.1.0", "/24").unwrap();
/// assert_eq!(r.broadcast_address.to_string(), "192.168.1.255");
/// assert_eq!(r.total_addresses, 256);
/// ```
pub fn calculate_cidr(ip_address: &str, cidr_mask: &str) -> Result<CalculationResult> {
    log::debug!("calculate_cidr({ip_address}, {cidr_mask})");
    let address = models::parse_address(ip_address)?;
    let prefix = models::parse_prefix(cidr_mask)?;
    processing::compute_block_facts(address, prefix)
}

/// Split `parent_cidr` (e.g. "10.0.0.0/24") into `subnet_count` subnets of `subnet_mask` (e.g. "/26").
pub fn calculate_subnets(
    parent_cidr: &str,
    subnet_count: u64,
    subnet_mask: &str,
) -> Result<Vec<SubnetDescriptor>> {
    processing::partition(parent_cidr, subnet_count, subnet_mask)
}
