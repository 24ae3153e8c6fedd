//! Error types for CIDR calculations.

/// Result alias used by every calculation in this crate.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Validation failures raised by the calculator.
///
/// None of these are retryable; the message is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Invalid IPv4 address format: '{0}'")]
    InvalidAddress(String),

    #[error("Invalid CIDR mask '{input}': {reason}")]
    InvalidPrefix { input: String, reason: &'static str },

    #[error("Subnet mask /{subnet} must be greater than parent prefix /{parent} and <= 32")]
    InvalidSubnetPrefix { parent: u8, subnet: u8 },

    #[error("Cannot create {requested} subnets of /{subnet_prefix}: maximum is {max}")]
    SubnetCountExceeded {
        requested: u64,
        max: u64,
        subnet_prefix: u8,
    },

    #[error("Subnet {index} starting from {base} overflows the IPv4 address space")]
    AddressOverflow { base: String, index: u64 },
}

impl CalcError {
    pub(crate) fn prefix(input: &str, reason: &'static str) -> Self {
        CalcError::InvalidPrefix {
            input: input.to_string(),
            reason,
        }
    }
}
