//! Per-field normalization.
//!
//! Every function here is total and returns
//! [`NOT_AVAILABLE`](hospital_model::NOT_AVAILABLE) for empty, placeholder,
//! or junk input.

pub mod contact;
pub mod email;
pub mod text;

pub use contact::clean_contact;
pub use email::clean_email;
pub use text::clean_text;

/// Spreadsheet and dataframe spellings of "no value".
pub(crate) const NULL_MARKERS: [&str; 3] = ["nan", "none", "null"];

pub(crate) fn is_null_marker(value: &str) -> bool {
    value.is_empty()
        || NULL_MARKERS
            .iter()
            .any(|marker| value.eq_ignore_ascii_case(marker))
}

/// Whitespace as the source export's tooling sees it: Unicode `White_Space`
/// plus the ASCII information separators `\x1c`..=`\x1f`.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub(crate) fn trim_spaces(value: &str) -> &str {
    value.trim_matches(is_space)
}
