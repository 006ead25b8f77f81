//! Subnet computation logic.
//!
//! - [`calc_subnet`] - the pure calculation from two text inputs to a
//!   [`crate::models::SubnetResult`]

mod calc;

// Re-export public functions
pub use calc::calc_subnet;
