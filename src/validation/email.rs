//! Email and blank-field helpers

use super::outcome::{RejectionReason, ValidationOutcome};
use once_cell::sync::Lazy;
use regex::Regex;

/// Conservative well-formedness check, not a deliverability check
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Check `text` against the `local@domain.tld` pattern
///
/// # Examples
///
/// ```
/// use labkit::validation::validate_email;
///
/// assert!(validate_email("a.b+tag@sub.example.co").is_valid);
/// assert!(!validate_email("not-an-email").is_valid);
/// ```
pub fn validate_email(text: &str) -> ValidationOutcome {
    validate_email_with(text, true)
}

/// Same as [`validate_email`], choosing the error verbosity
pub fn validate_email_with(text: &str, verbose: bool) -> ValidationOutcome {
    if EMAIL_RE.is_match(text) {
        ValidationOutcome::valid()
    } else {
        tracing::debug!(reason = RejectionReason::InvalidEmail.tag(), "Email rejected");
        ValidationOutcome::rejected(RejectionReason::InvalidEmail, verbose)
    }
}

/// True when the value is absent or the empty string
///
/// No trimming: a string of spaces is not blank.
pub fn is_blank(text: Option<&str>) -> bool {
    matches!(text, None | Some(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plus_and_subdomains() {
        assert!(validate_email("a.b+tag@sub.example.co").is_valid);
        assert!(validate_email("mario_rossi%x@lab-analisi.it").is_valid);
    }

    #[test]
    fn test_email_rejections() {
        for bad in [
            "not-an-email",
            "",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user@example.c0m",
            "us er@example.com",
        ] {
            let outcome = validate_email(bad);
            assert!(!outcome.is_valid, "{bad:?} should be rejected");
            assert_eq!(outcome.reason, Some(RejectionReason::InvalidEmail));
        }
    }

    #[test]
    fn test_email_terse_reason() {
        let outcome = validate_email_with("nope", false);
        assert_eq!(outcome.error.as_deref(), Some("invalid_email"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(!is_blank(Some("   ")));
        assert!(!is_blank(Some("x")));
    }
}
