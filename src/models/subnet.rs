//! Computed subnet record.

use serde::Serialize;

/// The result of one subnet calculation, fully rendered.
///
/// All six fields are the display strings the presentation layer
/// shows as-is; nothing here is retained between invocations.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// CIDR name, `<network>/<prefix>`.
    pub cidr_name: String,
    /// Subnet mask in dotted form.
    pub subnet_mask: String,
    /// Network address (all host bits zero).
    pub network_address: String,
    /// Broadcast address (all host bits one).
    pub broadcast_address: String,
    /// Inclusive network-to-broadcast block range.
    pub block_range: String,
    /// Human-readable usable-host-range description.
    pub host_range: String,
}
