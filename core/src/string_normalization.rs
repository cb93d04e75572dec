use unidecode::unidecode;

/// Folds a display name for loose comparison: accents to ASCII, lowercase,
/// single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
