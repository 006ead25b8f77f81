//! Terminal output for a computed subnet record.

use crate::models::SubnetResult;
use colored::Colorize;

/// Pad a label to a fixed column width.
fn format_label(label: &str, width: usize) -> String {
    format!("{label:<width$}")
}

/// Print the six result fields as a labeled table on stdout.
pub fn print_result(result: &SubnetResult) {
    const WIDTH: usize = 19;

    println!("{}{}", format_label("CIDR:", WIDTH).bold(), result.cidr_name);
    println!(
        "{}{}",
        format_label("Subnet mask:", WIDTH).bold(),
        result.subnet_mask
    );
    println!(
        "{}{}",
        format_label("Network address:", WIDTH).bold(),
        result.network_address
    );
    println!(
        "{}{}",
        format_label("Broadcast address:", WIDTH).bold(),
        result.broadcast_address
    );
    println!(
        "{}{}",
        format_label("Block range:", WIDTH).bold(),
        result.block_range
    );
    println!(
        "{}{}",
        format_label("Usable hosts:", WIDTH).bold(),
        result.host_range
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_label_short() {
        assert_eq!(format_label("CIDR:", 10), "CIDR:     ");
    }

    #[test]
    fn test_format_label_exact() {
        assert_eq!(format_label("Block:", 6), "Block:");
    }

    #[test]
    fn test_format_label_long() {
        assert_eq!(format_label("Broadcast address:", 5), "Broadcast address:");
    }
}
