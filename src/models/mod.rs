//! Domain models for CIDR calculations.
//!
//! - [`CidrBlock`] - IPv4 address with prefix length
//! - [`CalculationResult`] - facts derived for one block
//! - [`SubnetDescriptor`] - one slice of a partitioned block

mod ipv4;
mod result;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, format_address, get_cidr_mask, parse_address,
    parse_prefix, CidrBlock, MAX_LENGTH,
};
pub use result::{usable_to_string, CalculationResult, SubnetDescriptor, NOT_APPLICABLE};
