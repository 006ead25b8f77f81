//! JSON output for a computed subnet record.

use crate::models::SubnetResult;
use std::error::Error;

/// Render the record as pretty-printed JSON.
pub fn to_json(result: &SubnetResult) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Print the record as JSON to stdout.
pub fn print_json(result: &SubnetResult) -> Result<(), Box<dyn Error>> {
    println!("{}", to_json(result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::calc_subnet;

    #[test]
    fn test_json_has_all_six_fields() {
        let result = calc_subnet("192.168.1.10", "24").unwrap();
        let json = to_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["cidr_name"], "192.168.1.0/24");
        assert_eq!(value["subnet_mask"], "255.255.255.0");
        assert_eq!(value["network_address"], "192.168.1.0");
        assert_eq!(value["broadcast_address"], "192.168.1.255");
        assert_eq!(value["block_range"], "192.168.1.0 ~ 192.168.1.255");
        assert_eq!(value["host_range"], "192.168.1.1 ~ 192.168.1.254");
    }
}
