//! Title derivation
//!
//! This module turns raw camel-case file and directory identifiers into the
//! human-readable titles shown in the documentation navigation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{STRIPPED_PREFIXES, TITLE_CORRECTIONS, VERBATIM_PREFIX};

/// Derives a human-readable title from a camel-case identifier
///
/// Identifiers starting with a well-known interface prefix are returned
/// verbatim. Otherwise the recognised module-name prefix is stripped, the
/// remainder is split into words at every uppercase letter, and the fixed
/// acronym corrections are applied to the joined result.
///
/// The identifier must not be empty; that is a caller contract, not a
/// runtime error path.
///
/// # Arguments
/// * `identifier` - The raw file or directory base name
///
/// # Returns
/// * `String` - The derived title
///
/// # Examples
/// ```
/// use doc_sync::title::derive_title;
///
/// assert_eq!(derive_title("RMRKCore"), "Core");
/// assert_eq!(derive_title("IERC721"), "IERC721");
/// ```
pub fn derive_title(identifier: &str) -> String {
    debug_assert!(!identifier.is_empty(), "identifier must not be empty");

    if identifier.starts_with(VERBATIM_PREFIX) {
        return identifier.to_string();
    }

    let spaced = split_camel_case(strip_module_prefix(identifier));
    apply_corrections(spaced)
}

/// Strips the first matching module-name prefix, checked in declaration order
fn strip_module_prefix(identifier: &str) -> &str {
    for prefix in STRIPPED_PREFIXES {
        if let Some(rest) = identifier.strip_prefix(prefix) {
            return rest;
        }
    }
    identifier
}

/// Splits a camel-case string into space-separated words
///
/// A new word starts at every uppercase letter; the first character always
/// starts the first word and is uppercased in the output.
fn split_camel_case(value: &str) -> String {
    static UPPERCASE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\p{Lu}").expect("Failed to compile regex pattern for split_camel_case")
    });

    let spaced = UPPERCASE.replace_all(value, " $0");
    capitalize_first(spaced.trim_start())
}

/// Uppercases the first character of a string, leaving the rest untouched
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Applies the fixed acronym corrections, in order
///
/// The corrections are unconditional and idempotent: reapplying them to an
/// already corrected title produces no further change.
fn apply_corrections(title: String) -> String {
    TITLE_CORRECTIONS
        .iter()
        .fold(title, |current, (from, to)| current.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_module_prefix() {
        assert_eq!(derive_title("RMRKCore"), "Core");
        assert_eq!(derive_title("RMRKNestableMultiAsset"), "Nestable Multi Asset");
        assert_eq!(derive_title("IRMRKNestable"), "Nestable");
    }

    #[test]
    fn test_interface_names_are_kept_verbatim() {
        assert_eq!(derive_title("IERC721"), "IERC721");
        assert_eq!(derive_title("IERC6220"), "IERC6220");
    }

    #[test]
    fn test_splits_at_every_uppercase_letter() {
        assert_eq!(derive_title("tokenAttributes"), "Token Attributes");
        assert_eq!(derive_title("readyToUse"), "Ready To Use");
        assert_eq!(derive_title("catalog"), "Catalog");
    }

    #[test]
    fn test_collapses_spelled_out_acronyms() {
        assert_eq!(
            derive_title("RMRKMultiAssetURIStorage"),
            "Multi Asset URI Storage"
        );
        assert_eq!(derive_title("RMRKERC20Holder"), "ERC20 Holder");
        assert_eq!(derive_title("RMRKErc721Holder"), "ERC721 Holder");
    }

    #[test]
    fn test_corrections_are_idempotent() {
        let once = derive_title("RMRKMultiAssetURIStorage");
        let twice = TITLE_CORRECTIONS
            .iter()
            .fold(once.clone(), |current, (from, to)| current.replace(from, to));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_character_is_uppercased() {
        assert_eq!(derive_title("equippable"), "Equippable");
        assert_eq!(derive_title("access"), "Access");
    }
}
