//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and address math
//! used throughout the application:
//! - [`parse_addr`] / [`parse_prefix`] - input validation
//! - [`get_cidr_mask`], [`cut_addr`], [`broadcast_addr`] - u32 subnet
//!   arithmetic
//! - [`SubnetResult`] - the computed output record

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, parse_addr, parse_prefix, MAX_LENGTH,
};
pub use subnet::SubnetResult;
