/// Lowercases and trims a display name. Internal whitespace is left alone.
pub fn normalize_name(value: &str) -> String {
    value.trim().to_lowercase()
}
