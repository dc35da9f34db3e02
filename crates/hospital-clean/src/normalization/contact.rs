//! Contact number normalization.

use std::sync::LazyLock;

use hospital_model::NOT_AVAILABLE;
use regex::Regex;

/// Placeholder number repeated across unrelated rows of the CMCHIS export.
pub const DUMMY_CONTACT: &str = "9898989898";

/// Fewest digits kept as a phone number.
pub const MIN_CONTACT_DIGITS: usize = 6;

/// Anything that is not a Unicode decimal digit (`Nd`).
static NON_DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D").expect("Invalid non-digit regex"));

/// Normalizes a contact number to its digits.
///
/// Everything except decimal digits is dropped; no reformatting or country
/// code handling is done. Digits from any script are kept as written, so a
/// full-width `９８７６５４３２１０` stays full-width. Returns
/// [`NOT_AVAILABLE`] when no digits remain, when more than five digits are
/// all the same (`1111111111`), for `"0"`, for fewer than
/// [`MIN_CONTACT_DIGITS`] digits, and for [`DUMMY_CONTACT`].
///
/// The function is idempotent: its output cleans to itself.
pub fn clean_contact(raw: &str) -> String {
    let digits = NON_DIGIT_REGEX.replace_all(raw, "");
    if is_junk_number(&digits) {
        return NOT_AVAILABLE.to_string();
    }
    digits.into_owned()
}

fn is_junk_number(digits: &str) -> bool {
    let Some(first) = digits.chars().next() else {
        return true;
    };
    let count = digits.chars().count();
    let repeated = count > 5 && digits.chars().all(|d| d == first);
    repeated || digits == "0" || count < MIN_CONTACT_DIGITS || digits == DUMMY_CONTACT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_digits_only() {
        assert_eq!(clean_contact("98765 43210"), "9876543210");
        assert_eq!(clean_contact("+91-44-2829 3333"), "914428293333");
        assert_eq!(clean_contact("(0452) 258-0000"), "04522580000");
    }

    #[test]
    fn test_keeps_non_ascii_decimal_digits() {
        assert_eq!(clean_contact("９８７６５４３２１０"), "９８７６５４３２１０");
        assert_eq!(clean_contact("Tel: ९८७६५ ४३२१०"), "९८७६५४३२१०");
    }

    #[test]
    fn test_counts_digits_not_bytes() {
        assert_eq!(clean_contact("１２３４５"), NOT_AVAILABLE);
        assert_eq!(clean_contact("１１１１１１"), NOT_AVAILABLE);
    }

    #[test]
    fn test_rejects_repeated_digits() {
        assert_eq!(clean_contact("111-111-1111"), NOT_AVAILABLE);
        assert_eq!(clean_contact("8888888888"), NOT_AVAILABLE);
        assert_eq!(clean_contact("000000"), NOT_AVAILABLE);
    }

    #[test]
    fn test_rejects_short_and_zero() {
        assert_eq!(clean_contact("0"), NOT_AVAILABLE);
        assert_eq!(clean_contact("12345"), NOT_AVAILABLE);
        assert_eq!(clean_contact("123456"), "123456");
    }

    #[test]
    fn test_rejects_missing_and_dummy() {
        assert_eq!(clean_contact(""), NOT_AVAILABLE);
        assert_eq!(clean_contact("N/A"), NOT_AVAILABLE);
        assert_eq!(clean_contact("98989 89898"), NOT_AVAILABLE);
    }

    #[test]
    fn test_is_idempotent_on_examples() {
        for raw in ["98765 43210", "111-111-1111", "", "0", "N/A", "044-2345 6789", "９８７６５４３２１０"] {
            let once = clean_contact(raw);
            assert_eq!(clean_contact(&once), once, "input {raw:?}");
        }
    }
}
