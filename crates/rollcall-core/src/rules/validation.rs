use crate::domain::email::{is_valid_email, normalize_email};
use crate::error::CoreError;

/// Checks a raw submission and returns the normalized (trimmed, lowercased)
/// address on success.
pub fn validate_email(raw: &str) -> Result<String, CoreError> {
    let Some(normalized) = normalize_email(raw) else {
        return Err(CoreError::EmptyEmail);
    };
    if !is_valid_email(&normalized) {
        return Err(CoreError::InvalidEmail(raw.trim().to_string()));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::validate_email;
    use crate::error::CoreError;

    #[test]
    fn validate_email_rejects_empty_input() {
        assert_eq!(validate_email(""), Err(CoreError::EmptyEmail));
        assert_eq!(validate_email("  \t "), Err(CoreError::EmptyEmail));
    }

    #[test]
    fn validate_email_reports_the_offending_input() {
        let err = validate_email(" not-an-email ").unwrap_err();
        assert_eq!(err, CoreError::InvalidEmail("not-an-email".to_string()));
    }

    #[test]
    fn validate_email_normalizes_case() {
        let value = validate_email("Ada.Lovelace@Example.COM").expect("valid");
        assert_eq!(value, "ada.lovelace@example.com");
    }
}
