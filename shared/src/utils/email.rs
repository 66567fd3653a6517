//! Email address helpers
//!
//! Emails are the natural key of the identity store, so every layer uses
//! the same normalization: surrounding whitespace removed, lowercased.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of an address per RFC 5321
pub const MAX_EMAIL_LENGTH: usize = 320;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Normalize an email address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic syntactic check: one `@`, a dotted domain, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain.
///
/// ```
/// use tg_shared::utils::email::mask_email;
/// assert_eq!(mask_email("alice@example.com"), "a***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
