use regex::Regex;

/// Normalizes a display name before it becomes part of a registry key.
/// Keeps whitespace and case variants of the same name from forking ids.
pub fn normalize(input: &str) -> String {
    let replace = Regex::new(r"[_]").unwrap();
    let mut s = replace.replace_all(input, " ").into_owned();

    let clean_re = Regex::new(r"[^A-Za-z0-9- ]").unwrap();
    s = clean_re.replace_all(&s, "").into_owned();

    s = s.trim().to_string();

    let collapse = Regex::new(r" +").unwrap();
    collapse.replace_all(&s, " ").into_owned().to_lowercase()
}

/// Registry key for a (board, expert, candidate) triple. Empty when any
/// component normalizes to nothing, which callers treat as unassignable.
pub fn triple_key(board: &str, expert: &str, candidate: &str) -> String {
    let board = normalize(board);
    let expert = normalize(expert);
    let candidate = normalize(candidate);

    if board.is_empty() || expert.is_empty() || candidate.is_empty() {
        return String::new();
    }

    format!("{board}_{expert}_{candidate}")
}

#[cfg(test)]
mod tests {
    use super::{normalize, triple_key};

    #[test]
    fn test_basic() {
        assert_eq!(normalize("hello_world"), "hello world");
        assert_eq!(normalize("Rust-lang"), "rust-lang");
        assert_eq!(normalize("clean-this_text!"), "clean-this text");
    }

    #[test]
    fn test_leading_trailing_spaces() {
        assert_eq!(normalize("   hello   "), "hello");
        assert_eq!(normalize("  multiple   spaces  "), "multiple spaces");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(normalize("!@#$%^&*()"), "");
        assert_eq!(normalize("abc123!@#"), "abc123");
    }

    #[test]
    fn test_key_is_stable_across_spacing() {
        assert_eq!(
            triple_key("Senior Engineer", " Alice  Moreau ", "Sam Carter"),
            triple_key("senior engineer", "alice moreau", "sam  carter"),
        );
    }

    #[test]
    fn test_key_empty_when_component_empty() {
        assert_eq!(triple_key("Senior Engineer", "!!!", "Sam Carter"), "");
        assert_eq!(triple_key("", "Alice", "Sam"), "");
    }
}
