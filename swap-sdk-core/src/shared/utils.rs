//! Utility functions for the swap SDK core
//! 
//! This module contains address validation and checksumming helpers.

use crate::shared::constants::{ADDRESS_HEX_LENGTH, ADDRESS_LENGTH, ADDRESS_PREFIX};
use crate::shared::error::SdkError;
use crate::shared::types::SdkResult;
use sha3::{Digest, Keccak256};

/// Validate an address and return its EIP-55 checksummed form.
///
/// All-lowercase and all-uppercase input is accepted as is. Mixed-case input
/// must already carry a correct checksum.
pub fn validate_and_parse_address(address: &str) -> SdkResult<String> {
    validate_address_format(address)?;
    let hex_digits = &address[ADDRESS_PREFIX.len()..];
    let checksummed = to_checksum_address(hex_digits);

    let has_lower = hex_digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex_digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && checksummed != address {
        return Err(SdkError::invalid_address(format!("{} has a bad checksum", address)));
    }

    Ok(checksummed)
}

/// Validate address syntax (prefix, length, hex digits)
pub fn validate_address_format(address: &str) -> SdkResult<()> {
    if !address.starts_with(ADDRESS_PREFIX) {
        return Err(SdkError::invalid_address(format!(
            "{} must start with 0x",
            address
        )));
    }

    if address.len() != ADDRESS_LENGTH {
        return Err(SdkError::invalid_address(format!(
            "{} must be {} characters long",
            address, ADDRESS_LENGTH
        )));
    }

    if !address[ADDRESS_PREFIX.len()..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SdkError::invalid_address(format!(
            "{} contains invalid hex characters",
            address
        )));
    }

    Ok(())
}

/// Apply EIP-55 casing to 40 hex digits (no prefix)
fn to_checksum_address(hex_digits: &str) -> String {
    let lower = hex_digits.to_ascii_lowercase();
    let hash = keccak256(lower.as_bytes());

    let mut result = String::with_capacity(ADDRESS_LENGTH);
    result.push_str(ADDRESS_PREFIX);
    for (i, ch) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if nibble >= 8 {
            result.push(ch.to_ascii_uppercase());
        } else {
            result.push(ch);
        }
    }
    debug_assert_eq!(result.len(), ADDRESS_PREFIX.len() + ADDRESS_HEX_LENGTH);
    result
}

/// Calculate Keccak-256 hash
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WETH_MAINNET: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

    #[test]
    fn test_checksums_lowercase_input() {
        let parsed = validate_and_parse_address("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")
            .expect("valid address");
        assert_eq!(parsed, WETH_MAINNET);
    }

    #[test]
    fn test_checksums_uppercase_input() {
        let parsed = validate_and_parse_address("0xC02AAA39B223FE8D0A0E5C4F27EAD9083C756CC2")
            .expect("valid address");
        assert_eq!(parsed, WETH_MAINNET);
    }

    #[test]
    fn test_known_checksums() {
        // EIP-55 reference vectors
        for address in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            assert_eq!(validate_and_parse_address(&address.to_lowercase()).unwrap(), address);
        }
    }

    #[test]
    fn test_invalid_addresses() {
        // No 0x
        assert!(matches!(
            validate_and_parse_address("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            Err(SdkError::InvalidAddress(_))
        ));
        // Too short
        assert!(validate_and_parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc").is_err());
        // Too long
        assert!(validate_and_parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc22").is_err());
        // Invalid char
        assert!(validate_and_parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Ccg").is_err());
        assert!(validate_and_parse_address("").is_err());
    }

    #[test]
    fn test_bad_checksum_is_rejected() {
        // last letter's case flipped
        let result = validate_and_parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756CC2");
        assert!(matches!(result, Err(SdkError::InvalidAddress(_))));
    }

    #[test]
    fn test_non_ascii_input_is_rejected() {
        // 42 bytes but not hex
        let address = format!("0x{}é", "a".repeat(38));
        assert_eq!(address.len(), 42);
        assert!(validate_and_parse_address(&address).is_err());
    }

    proptest! {
        #[test]
        fn prop_canonicalization_is_idempotent(bytes in prop::array::uniform20(any::<u8>())) {
            let input = format!("0x{}", hex::encode(bytes));
            let once = validate_and_parse_address(&input).unwrap();
            let twice = validate_and_parse_address(&once).unwrap();
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.to_lowercase(), input);
        }
    }
}
