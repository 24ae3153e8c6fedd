//! Terminal output utilities.

use crate::models::{usable_to_string, CalculationResult, SubnetDescriptor};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Labelled list of block facts, one per line.
pub fn result_table(result: &CalculationResult) -> String {
    let rows = [
        ("Network Address", result.network_address.to_string()),
        ("Broadcast Address", result.broadcast_address.to_string()),
        (
            "Subnet Mask",
            format!("{} (/{})", result.subnet_mask, result.prefix),
        ),
        ("First Usable IP", usable_to_string(result.first_usable_ip)),
        ("Last Usable IP", usable_to_string(result.last_usable_ip)),
        ("Total Addresses", result.total_addresses.to_string()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<18} {}", format!("{label}:").bold(), value.green()))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Numbered subnet list with address counts.
pub fn subnet_table(subnets: &[SubnetDescriptor]) -> String {
    if subnets.is_empty() {
        return format!("{}", "No subnets".yellow());
    }
    subnets
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{:>5}  {:<18} {:>10} addresses",
                i + 1,
                s.cidr.to_string().green(),
                s.total_addresses
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}
