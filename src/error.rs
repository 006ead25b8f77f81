//! Validation errors for the subnet calculator.

use std::error::Error;
use std::fmt;

/// Validation failure for one of the two calculator inputs.
///
/// Both variants are user-input errors, never internal failures: the
/// caller surfaces the message and re-prompts. Each carries the
/// offending (trimmed) input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Address text is not 4 dot-separated integers each in 0-255.
    InvalidAddress(String),
    /// Prefix is not an integer in 0-32.
    InvalidPrefix(String),
}

impl fmt::Display for SubnetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubnetError::InvalidAddress(input) => write!(
                f,
                "invalid IPv4 address {input:?}, expected dotted-quad like 192.168.1.10"
            ),
            SubnetError::InvalidPrefix(_) => {
                write!(f, "prefix must be an integer between 0 and 32")
            }
        }
    }
}

impl Error for SubnetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_message_names_input() {
        let err = SubnetError::InvalidAddress("999.1.1.1".to_string());
        let msg = err.to_string();
        assert!(msg.contains("999.1.1.1"), "message was: {msg}");
        assert!(msg.contains("192.168.1.10"), "message was: {msg}");
    }

    #[test]
    fn test_prefix_message() {
        let err = SubnetError::InvalidPrefix("33".to_string());
        assert_eq!(
            err.to_string(),
            "prefix must be an integer between 0 and 32"
        );
    }
}
