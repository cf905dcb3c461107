/// Canonicalizes a phone number into a comparable dialable form.
///
/// Rules apply in order over the digit-only form:
/// ten digits get `+1`, eleven digits starting with `1` get `+`,
/// a leading `00` becomes `+`, a leading `+` is kept, and anything else
/// falls through as bare digits. Never fails; no digits yields `""`.
pub fn normalize_phone(value: &str) -> String {
    let trimmed = value.trim();
    let digits: String = trimmed.chars().filter(|ch| ch.is_ascii_digit()).collect();

    if digits.is_empty() {
        return String::new();
    }

    if digits.len() == 10 {
        return format!("+1{digits}");
    }

    if digits.len() == 11 && digits.starts_with('1') {
        return format!("+{digits}");
    }

    if trimmed.starts_with("00") {
        return format!("+{}", &digits[2..]);
    }

    if trimmed.starts_with('+') {
        return format!("+{digits}");
    }

    digits
}
