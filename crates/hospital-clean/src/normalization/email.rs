//! Email normalization.

use hospital_model::NOT_AVAILABLE;

use super::{is_null_marker, trim_spaces};

/// Truncated addresses seen in the CMCHIS export.
///
/// Dataset-specific cleanup data, not a general validity rule. A value that
/// equals one of these exactly is discarded.
pub const JUNK_EMAIL_FRAGMENTS: [&str; 12] = [
    "m", "om", "l.com", "ices.com", "ail.com", "s.com", "are.com", "e.com", "ls.com", "ndia.com",
    ".com", ".in",
];

/// Shortest value kept as an address.
pub const MIN_EMAIL_LEN: usize = 5;

/// Normalizes an email address.
///
/// Trims and lower-cases. Returns [`NOT_AVAILABLE`] for empty or null-marker
/// values, values shorter than [`MIN_EMAIL_LEN`] characters, values without
/// an `@`, and known junk fragments.
pub fn clean_email(raw: &str) -> String {
    let email = trim_spaces(raw).to_lowercase();
    if is_null_marker(&email)
        || email.chars().count() < MIN_EMAIL_LEN
        || !email.contains('@')
        || JUNK_EMAIL_FRAGMENTS.contains(&email.as_str())
    {
        return NOT_AVAILABLE.to_string();
    }
    email
}
