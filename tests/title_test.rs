use doc_sync::title::derive_title;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_title_for_plain_identifiers() {
        // One space before every uppercase letter except the first character
        assert_eq!(derive_title("multiasset"), "Multiasset");
        assert_eq!(derive_title("readyToUse"), "Ready To Use");
        assert_eq!(derive_title("tokenAttributes"), "Token Attributes");
        assert_eq!(derive_title("nestableTokenURI"), "Nestable Token URI");
    }

    #[test]
    fn test_derive_title_strips_recognised_prefixes() {
        assert_eq!(derive_title("RMRKCore"), "Core");
        assert_eq!(derive_title("RMRKEquippable"), "Equippable");
        assert_eq!(derive_title("IRMRKMultiAsset"), "Multi Asset");
    }

    #[test]
    fn test_derive_title_keeps_interface_names() {
        assert_eq!(derive_title("IERC721"), "IERC721");
        assert_eq!(derive_title("IERC5773"), "IERC5773");
    }

    #[test]
    fn test_derive_title_collapses_acronyms() {
        assert_eq!(
            derive_title("RMRKMultiAssetURIStorage"),
            "Multi Asset URI Storage"
        );
        assert_eq!(derive_title("RMRKERC721Holder"), "ERC721 Holder");
    }

    #[test]
    fn test_derive_title_is_deterministic() {
        let first = derive_title("RMRKNestableMultiAssetImpl");
        let second = derive_title("RMRKNestableMultiAssetImpl");
        assert_eq!(first, second);
    }

    #[test]
    fn test_space_count_matches_uppercase_transitions() {
        // "equippableViews" has exactly one uppercase letter after the first
        // character, so the title holds exactly one space.
        let title = derive_title("equippableViews");
        assert_eq!(title, "Equippable Views");
        assert_eq!(title.matches(' ').count(), 1);

        // The first character being uppercase does not produce a leading space
        let title = derive_title("Catalog");
        assert_eq!(title, "Catalog");
        assert!(!title.starts_with(' '));
    }
}
