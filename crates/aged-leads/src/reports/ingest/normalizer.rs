/// Cleans a categorical cell (status, work location) from a warehouse
/// export: strips BOM/zero-width characters and collapses runs of
/// whitespace. Case is preserved since status matching is exact.
pub fn normalize_token(value: &str) -> Option<String> {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Exact-match comparison of two categorical cells after normalization.
/// Used by callers applying the work-location pre-filter.
pub fn tokens_match(left: &str, right: &str) -> bool {
    normalize_token(left) == normalize_token(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_bom_and_collapses_whitespace() {
        assert_eq!(
            normalize_token("\u{feff}  New   York  ").as_deref(),
            Some("New York")
        );
        assert_eq!(normalize_token("   ").as_deref(), None);
        assert_eq!(normalize_token("\u{200b}").as_deref(), None);
    }

    #[test]
    fn tokens_match_is_exact_on_case() {
        assert!(tokens_match(" New  York", "New York"));
        assert!(!tokens_match("new york", "New York"));
    }
}
