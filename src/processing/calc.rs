//! Core subnet computation.
//!
//! Stateless and side-effect free: two text inputs in, one record or
//! one validation error out.

use crate::error::SubnetError;
use crate::models::{
    broadcast_addr, cut_addr, get_cidr_mask, parse_addr, parse_prefix, SubnetResult,
};
use std::net::Ipv4Addr;

/// Compute the subnet record for an address and prefix, both raw text.
///
/// Validation runs before any arithmetic, address first: the first
/// failing input aborts with its error and no partial result. Usable
/// host range follows the /31 (point-to-point, both addresses usable)
/// and /32 (single host) conventions; for every other prefix it is
/// `network+1` through `broadcast-1` inclusive.
pub fn calc_subnet(addr_text: &str, prefix_text: &str) -> Result<SubnetResult, SubnetError> {
    let addr = parse_addr(addr_text)?;
    let prefix = parse_prefix(prefix_text)?;

    let mask = get_cidr_mask(prefix)?;
    let network = cut_addr(addr, prefix)?;
    let broadcast = broadcast_addr(addr, prefix)?;

    let host_range = match prefix {
        32 => format!("single-host network: only {network} is usable"),
        31 => format!("/31 point-to-point: {network} and {broadcast} are both usable"),
        _ => {
            // Width >= 2 host bits, so network+1 <= broadcast-1 and
            // neither endpoint can wrap.
            let first_host = Ipv4Addr::from(u32::from(network) + 1);
            let last_host = Ipv4Addr::from(u32::from(broadcast) - 1);
            format!("{first_host} ~ {last_host}")
        }
    };

    log::debug!("calc_subnet({addr_text:?}, {prefix_text:?}) -> {network}/{prefix}");

    Ok(SubnetResult {
        cidr_name: format!("{network}/{prefix}"),
        subnet_mask: Ipv4Addr::from(mask).to_string(),
        network_address: network.to_string(),
        broadcast_address: broadcast.to_string(),
        block_range: format!("{network} ~ {broadcast}"),
        host_range,
    })
}
