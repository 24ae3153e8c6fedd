//! Syntax checks for user supplied address and mask text.
//!
//! These run before any arithmetic and can also be used by input layers for live feedback.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // [0-9] rather than \d, regex crate \d also matches non-ASCII digits.
    static ref IPV4_RE: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
    static ref PREFIX_RE: Regex = Regex::new(r"^/[0-9]{1,2}$").expect("Invalid Regex?");
}

/// True if `s` is four dot separated decimal groups, each in 0..=255.
///
/// # Examples
/// ```
/// use cidr_subnet_calc::is_valid_ipv4_text;
/// assert!(is_valid_ipv4_text("192.168.1.0"));
/// assert!(!is_valid_ipv4_text("256.1.1.1"));
/// ```
pub fn is_valid_ipv4_text(s: &str) -> bool {
    match IPV4_RE.captures(s) {
        Some(caps) => caps
            .iter()
            .skip(1)
            .flatten()
            .all(|m| m.as_str().parse::<u16>().map_or(false, |v| v <= 255)),
        None => false,
    }
}

/// True if `s` is a `/` followed by one or two decimal digits.
///
/// The value is not range checked here, `/99` passes.
pub fn is_valid_prefix_text(s: &str) -> bool {
    PREFIX_RE.is_match(s)
}
