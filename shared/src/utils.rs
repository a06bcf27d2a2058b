//! # Shared Utility Functions
//!
//! Small helpers used by the frontend when presenting API data.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{display_name, split_tags};
//!
//! assert_eq!(display_name(Some("Tuan"), Some("Anh")), "Tuan Anh");
//! assert_eq!(split_tags("rust, wasm , web"), vec!["rust", "wasm", "web"]);
//! ```

/// Join optional first/last names into a display name, trimming the result.
///
/// Returns an empty string when both parts are absent, which callers treat
/// as "keep the default heading".
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    let first = first.unwrap_or("").trim();
    let last = last.unwrap_or("").trim();
    format!("{} {}", first, last).trim().to_string()
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_and_trims() {
        assert_eq!(display_name(Some("Tuan"), Some("Anh")), "Tuan Anh");
        assert_eq!(display_name(Some("Tuan"), None), "Tuan");
        assert_eq!(display_name(None, Some("Anh")), "Anh");
        assert_eq!(display_name(None, None), "");
    }

    #[test]
    fn split_tags_drops_empty_entries() {
        assert_eq!(split_tags("a,, b ,c,"), vec!["a", "b", "c"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ").is_empty());
    }
}
