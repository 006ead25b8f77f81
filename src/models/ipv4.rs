//! IPv4 input parsing and subnet bit arithmetic.
//!
//! Dotted-quad text, the 4-byte sequence and the `u32` form all
//! interconvert losslessly via the std [`Ipv4Addr`] `From` impls
//! (big-endian, first segment is the most significant byte). Every
//! derived value is computed with fixed-width unsigned 32-bit
//! arithmetic.

use crate::error::SubnetError;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse dotted-quad text into an address.
///
/// Accepts exactly 4 dot-separated base-10 segments, each in 0-255.
/// Whitespace around the whole input is ignored. Segments must be
/// plain ASCII digits (leading zeros are fine and normalize away);
/// anything else, a wrong segment count, or an out-of-range value is
/// an [`SubnetError::InvalidAddress`] with no partial data.
pub fn parse_addr(input: &str) -> Result<Ipv4Addr, SubnetError> {
    let trimmed = input.trim();
    let invalid = || SubnetError::InvalidAddress(trimmed.to_string());

    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }

    let mut bytes = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // Parse into u32 so "999" fails the range check below instead
        // of overflowing a u8 parse.
        let value: u32 = part.parse().map_err(|_| invalid())?;
        if value > 255 {
            return Err(invalid());
        }
        bytes[i] = value as u8;
    }

    Ok(Ipv4Addr::from(bytes))
}

/// Parse prefix-length text into an integer in 0-32.
///
/// Same segment rules as [`parse_addr`]: trimmed, plain base-10
/// digits only. Everything else is an [`SubnetError::InvalidPrefix`].
pub fn parse_prefix(input: &str) -> Result<u8, SubnetError> {
    let trimmed = input.trim();
    let invalid = || SubnetError::InvalidPrefix(trimmed.to_string());

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let prefix: u8 = trimmed.parse().map_err(|_| invalid())?;
    if prefix > MAX_LENGTH {
        return Err(invalid());
    }
    Ok(prefix)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// The shift runs at u64 width so prefix 0 yields the all-zero mask
/// without ever evaluating a shift-by-32 on a u32.
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Network address for a given IP and prefix length: host bits cleared.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Broadcast address for a given IP and prefix length: host bits set.
///
/// The mask complement is taken at 32-bit width; a wider or signed
/// complement would corrupt every downstream value.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | !mask;
    Ok(Ipv4Addr::from(broadcast_bits))
}
