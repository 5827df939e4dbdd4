//! Utility functions for the display core
//!
//! This module contains address helpers shared by the profile resolver and
//! the list membership controller.

use crate::shared::constants::ADDRESS_SEPARATOR;

/// Abbreviate an address to `prefix_len` leading and `suffix_len` trailing
/// characters joined by the separator.
///
/// Both parts are clamped to the address, so short addresses still get the
/// separator and may repeat characters.
pub fn abbreviate_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address
        .chars()
        .skip(char_count.saturating_sub(suffix_len))
        .collect();
    format!("{}{}{}", prefix, ADDRESS_SEPARATOR, suffix)
}

/// Normalize an address for comparison (lowercase only, whitespace is kept)
pub fn normalize_address(address: &str) -> String {
    address.to_lowercase()
}

/// Case-insensitive address equality
pub fn addresses_equal(left: &str, right: &str) -> bool {
    normalize_address(left) == normalize_address(right)
}

/// Treat empty strings the same as a missing value
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

    #[test]
    fn test_abbreviate_address() {
        assert_eq!(abbreviate_address(ADDRESS, 4, 4), "0x74...d8b6");
        assert_eq!(abbreviate_address(ADDRESS, 6, 4), "0x742d...d8b6");
    }

    #[test]
    fn test_abbreviate_short_address_keeps_separator() {
        assert_eq!(abbreviate_address("12345678", 4, 4), "1234...5678");
        assert_eq!(abbreviate_address("123456789", 4, 4), "1234...6789");
        assert_eq!(abbreviate_address("0x1234", 4, 4), "0x12...1234");
        // Parts overlap or repeat once the address is shorter than either length
        assert_eq!(abbreviate_address("0x12", 4, 4), "0x12...0x12");
        assert_eq!(abbreviate_address("ab", 4, 4), "ab...ab");
        assert_eq!(abbreviate_address("", 4, 4), "...");
    }

    #[test]
    fn test_addresses_equal() {
        assert!(addresses_equal(ADDRESS, &ADDRESS.to_lowercase()));
        assert!(addresses_equal(ADDRESS, &ADDRESS.to_uppercase()));
        assert!(!addresses_equal(ADDRESS, "0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn test_addresses_equal_does_not_trim() {
        assert_eq!(normalize_address(" 0xABC "), " 0xabc ");
        assert!(!addresses_equal(" 0xabc ", "0xABC"));
        assert!(addresses_equal(" 0xabc ", " 0xABC "));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("dave.eth")), Some("dave.eth"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }
}
