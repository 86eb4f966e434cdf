/// Trims and lowercases user input so it can be compared against
/// [`contains_folded`] haystacks.
pub fn fold_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Case-insensitive substring test; `folded_needle` must already be lowercase.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_and_matches() {
        let needle = fold_query("  MoBy ");
        assert_eq!(needle, "moby");
        assert!(contains_folded("Moby Dick", &needle));
        assert!(contains_folded("THE MOBY YEARS", &needle));
        assert!(!contains_folded("Dick", &needle));
    }

    #[test]
    fn handles_non_ascii_case() {
        assert!(contains_folded("Ærø Æventyr", &fold_query("ÆVENTYR")));
    }
}
