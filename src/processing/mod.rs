//! CIDR calculation logic.
//!
//! - [`block_facts`] - network, broadcast and usable range of one block
//! - [`partition`] - splitting a parent block into equal subnets

mod block_facts;
mod partition;

// Re-export public functions
pub use block_facts::compute_block_facts;
pub use partition::partition;
