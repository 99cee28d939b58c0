//! Field validators
//!
//! These are the single source of truth for what a valid contact form looks
//! like. The relay and the client both call them on trimmed input.

use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of characters in a trimmed name
pub const MIN_NAME_CHARS: usize = 2;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Check that `s` is a deliverable-looking `local@domain.tld` address.
///
/// The three parts must be non-empty and free of whitespace and `@`, and the
/// whole address must also parse as an RFC 5322 addr-spec. That rules out
/// things like empty domain labels or stray specials in the local part.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s) && EmailAddress::parse_with_options(s, Default::default()).is_ok()
}

/// Check that a name has at least two characters once trimmed.
pub fn is_valid_name(s: &str) -> bool {
    s.trim().chars().count() >= MIN_NAME_CHARS
}

/// Check that a message is not blank.
pub fn is_valid_message(s: &str) -> bool {
    !s.trim().is_empty()
}
