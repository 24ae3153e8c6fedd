//! CSV output formatting.

use super::terminal::format_field;
use crate::models::{usable_to_string, CalculationResult, SubnetDescriptor};
use itertools::Itertools;

/// Header plus a single row describing one block.
pub fn result_csv(result: &CalculationResult) -> String {
    let header = [
        "network", "broadcast", "mask", "first_usable", "last_usable", "total",
    ]
    .iter()
    .map(|h| format_field(h, 0))
    .join(",");
    let row = [
        format_field(result.network_address, 0),
        format_field(result.broadcast_address, 0),
        format_field(format!("{}/{}", result.subnet_mask, result.prefix), 0),
        format_field(usable_to_string(result.first_usable_ip), 0),
        format_field(usable_to_string(result.last_usable_ip), 0),
        format_field(result.total_addresses, 0),
    ]
    .iter()
    .join(",");
    format!("{header}\n{row}")
}

/// Header plus one row per subnet, aligned for reading in a terminal.
pub fn subnets_csv(subnets: &[SubnetDescriptor]) -> String {
    let header = format!(
        "{},{},{}",
        format_field("cnt", 6),
        format_field("subnet_cidr", 20),
        format_field("total", 12)
    );
    let rows = subnets.iter().enumerate().map(|(i, s)| {
        format!(
            "{},{},{}",
            format_field(i + 1, 6),
            format_field(s.cidr, 20),
            format_field(s.total_addresses, 12)
        )
    });
    std::iter::once(header).chain(rows).join("\n")
}
