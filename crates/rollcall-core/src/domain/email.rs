use once_cell::sync::Lazy;
use regex::Regex;

// Local and domain parts exclude whitespace, '@', and ','; roster rows
// are comma-separated.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^@\s,]+@[^@\s,]+\.[^@\s,]+$").expect("email pattern compiles")
});

pub fn normalize_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

pub fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    EMAIL_RE.is_match(trimmed)
}
