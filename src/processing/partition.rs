//! Split a parent block into equally sized subnets.

use crate::error::{CalcError, Result};
use crate::models::{
    block_size, format_address, parse_address, parse_prefix, CidrBlock, SubnetDescriptor,
    MAX_LENGTH,
};
use crate::validators::{is_valid_ipv4_text, is_valid_prefix_text};
use std::net::Ipv4Addr;

/// Enumerate `subnet_count` subnets of `subnet_prefix_text` size inside `parent_cidr_text`.
///
/// Checks run in order and stop at the first failure:
/// 1. subnet mask syntax
/// 2. parent address syntax
/// 3. parent prefix
/// 4. subnet prefix must be > parent prefix and <= 32
/// 5. `subnet_count` must fit, the error carries the maximum
///
/// Subnets start at the parent address as given and are returned in ascending order.
/// A count of zero returns an empty list.
///
/// # Examples
/// ```
/// use cidr_subnet_calc::processing::partition;
/// let subnets = partition("10.0.0.0/24", 2, "/25").unwrap();
/// assert_eq!(subnets[1].cidr.to_string(), "10.0.0.128/25");
/// ```
pub fn partition(
    parent_cidr_text: &str,
    subnet_count: u64,
    subnet_prefix_text: &str,
) -> Result<Vec<SubnetDescriptor>> {
    log::debug!("partition({parent_cidr_text}, {subnet_count}, {subnet_prefix_text})");

    if !is_valid_prefix_text(subnet_prefix_text) {
        return Err(CalcError::prefix(
            subnet_prefix_text,
            "expected '/' followed by 1-2 digits",
        ));
    }

    let (parent_addr_text, parent_prefix_text) = match parent_cidr_text.find('/') {
        Some(pos) => parent_cidr_text.split_at(pos),
        None => (parent_cidr_text, ""),
    };
    if !is_valid_ipv4_text(parent_addr_text) {
        return Err(CalcError::InvalidAddress(parent_addr_text.to_string()));
    }

    let parent_prefix = parse_prefix(parent_prefix_text)?;
    let subnet_prefix: u8 = subnet_prefix_text[1..]
        .parse()
        .map_err(|_| CalcError::prefix(subnet_prefix_text, "not a number"))?;

    if subnet_prefix <= parent_prefix || subnet_prefix > MAX_LENGTH {
        return Err(CalcError::InvalidSubnetPrefix {
            parent: parent_prefix,
            subnet: subnet_prefix,
        });
    }

    let available = 1u64 << (subnet_prefix - parent_prefix);
    if subnet_count > available {
        return Err(CalcError::SubnetCountExceeded {
            requested: subnet_count,
            max: available,
            subnet_prefix,
        });
    }

    let parent_addr = parse_address(parent_addr_text)?;
    let parent = CidrBlock {
        addr: Ipv4Addr::from(parent_addr),
        prefix: parent_prefix,
    };
    if !parent.is_aligned() {
        log::warn!(
            "Parent {parent} is not a network address (network is {}), subnets start at {parent_addr_text}",
            parent.network()
        );
    }

    let step = block_size(subnet_prefix)?;
    let mut subnets = Vec::with_capacity(subnet_count.min(available) as usize);
    for i in 0..subnet_count {
        let base = u64::from(parent_addr) + i * step;
        let base = u32::try_from(base).map_err(|_| CalcError::AddressOverflow {
            base: format_address(parent_addr),
            index: i,
        })?;
        subnets.push(SubnetDescriptor {
            cidr: CidrBlock {
                addr: Ipv4Addr::from(base),
                prefix: subnet_prefix,
            },
            total_addresses: step,
        });
    }

    log::debug!("partition(): {} subnets of /{subnet_prefix}", subnets.len());
    Ok(subnets)
}
