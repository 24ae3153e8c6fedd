//! Network, broadcast and usable range for a single block.

use crate::error::{CalcError, Result};
use crate::models::{block_size, broadcast_addr, cut_addr, get_cidr_mask, CalculationResult};
use std::net::Ipv4Addr;

/// Derive the block facts for `address` under `prefix`.
///
/// `address` need not be the network address; the network is derived from it.
///
/// * /31 has no usable host range (point-to-point), both usable fields are `None`.
/// * /32 is a single host, the address is its own first and last usable address.
/// * Everything else uses network+1 ..= broadcast-1.
pub fn compute_block_facts(address: u32, prefix: u8) -> Result<CalculationResult> {
    if prefix > 32 {
        return Err(CalcError::prefix(
            &format!("/{prefix}"),
            "must be between 0 and 32",
        ));
    }
    let mask = get_cidr_mask(prefix)?;
    let network = cut_addr(address, prefix)?;
    let broadcast = broadcast_addr(address, prefix)?;
    log::trace!("compute_block_facts(): mask={mask:#010x} network={network:#010x} broadcast={broadcast:#010x}");

    let (first_usable, last_usable) = match prefix {
        31 => (None, None),
        32 => (Some(network), Some(broadcast)),
        _ => (Some(network + 1), Some(broadcast - 1)),
    };

    Ok(CalculationResult {
        prefix,
        subnet_mask: Ipv4Addr::from(mask),
        network_address: Ipv4Addr::from(network),
        broadcast_address: Ipv4Addr::from(broadcast),
        first_usable_ip: first_usable.map(Ipv4Addr::from),
        last_usable_ip: last_usable.map(Ipv4Addr::from),
        total_addresses: block_size(prefix)?,
    })
}
