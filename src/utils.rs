use ethers::types::U256;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serializer;

static HASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^0x([A-Fa-f0-9]{64})$").expect("valid hash pattern"));

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^0x([A-Fa-f0-9]{40})$").expect("valid address pattern"));

/// True for a 0x-prefixed 32 byte hex string (transaction or block hash).
pub fn is_valid_hash(string: &str) -> bool {
    HASH_PATTERN.is_match(string)
}

/// True for a 0x-prefixed 20 byte hex string.
pub fn is_valid_address(string: &str) -> bool {
    ADDRESS_PATTERN.is_match(string)
}

/// Parses a decimal, non-negative integer that fits in a u64.
pub fn parse_int(string: &str) -> Option<u64> {
    string.parse::<u64>().ok()
}

/// Serializes a quantity as a decimal string (e.g., wei amounts).
///
/// Keeps values readable in both the table and JSON outputs.
pub(crate) fn u256_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

/// As for [`u256_decimal`] with an absent value serialized as null.
pub(crate) fn option_u256_decimal<S: Serializer>(
    value: &Option<U256>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_str(&v.to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const HASH: &str = "0xb11f3c2c5bd49ce4b19b61107dea54c7eecf49e0a0bec88374c066a12b808df8";

    #[test]
    fn test_valid_hash() {
        assert!(is_valid_hash(HASH));
        assert!(is_valid_hash(&HASH.to_uppercase().replacen("0X", "0x", 1)));
    }

    #[test]
    fn test_invalid_hash() {
        // Missing prefix.
        assert!(!is_valid_hash(&HASH[2..]));
        // Too short.
        assert!(!is_valid_hash(&HASH[..65]));
        // Too long.
        assert!(!is_valid_hash(&format!("{HASH}0")));
        // Non-hex char.
        assert!(!is_valid_hash(&HASH.replace('b', "g")));
        assert!(!is_valid_hash(""));
    }

    #[test]
    fn test_valid_address() {
        assert!(is_valid_address("0x00000000000000adc04c56bf30ac9d3c0aaf14dc"));
        assert!(!is_valid_address("0x00000000000000adc04c56bf30ac9d3c0aaf14d"));
        assert!(!is_valid_address(HASH));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("17190873"), Some(17190873));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("-1"), None);
        assert_eq!(parse_int("0x10"), None);
        assert_eq!(parse_int("18446744073709551616"), None);
    }
}
