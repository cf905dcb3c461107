/// Lowercases and trims an email. No alias or plus-address folding.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}
