// Utility functions

/// Marker stored in the `winner` column for award winners.
pub const WIN_MARKER: &str = "yes";

/// Case-insensitive check against the win marker, ignoring surrounding whitespace.
pub fn is_affirmative(marker: &str) -> bool {
    marker.trim().eq_ignore_ascii_case(WIN_MARKER)
}

/// Parses a year written as text, e.g. `" 1980 "`.
pub fn parse_year(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_is_case_insensitive() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yess"));
    }

    #[test]
    fn parse_year_trims_and_rejects_garbage() {
        assert_eq!(parse_year(" 1980 "), Some(1980));
        assert_eq!(parse_year("19x0"), None);
        assert_eq!(parse_year(""), None);
    }
}
