//! Output formatting for calculation results.
//!
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//!
//! JSON output goes straight through serde_json.

mod csv;
mod terminal;

pub use csv::{result_csv, subnets_csv};
pub use terminal::{format_field, result_table, subnet_table};

use crate::config::OutputFormat;
use crate::models::{CalculationResult, SubnetDescriptor};
use std::error::Error;

/// Render block facts in the requested format.
pub fn render_result(
    result: &CalculationResult,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    Ok(match format {
        OutputFormat::Table => result_table(result),
        OutputFormat::Csv => result_csv(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    })
}

/// Render a subnet list in the requested format.
pub fn render_subnets(
    subnets: &[SubnetDescriptor],
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    Ok(match format {
        OutputFormat::Table => subnet_table(subnets),
        OutputFormat::Csv => subnets_csv(subnets),
        OutputFormat::Json => serde_json::to_string_pretty(subnets)?,
    })
}
