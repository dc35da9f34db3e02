//! Free-text normalization for names, places, and specialty lists.

use hospital_model::NOT_AVAILABLE;

use super::{is_null_marker, is_space, trim_spaces};

/// Normalizes a free-text field.
///
/// Trims, collapses whitespace runs to a single space, and title-cases the
/// result. Empty values and `nan`/`none`/`null` (any case) become
/// [`NOT_AVAILABLE`].
pub fn clean_text(raw: &str) -> String {
    let trimmed = trim_spaces(raw);
    if is_null_marker(trimmed) {
        return NOT_AVAILABLE.to_string();
    }
    let collapsed = trimmed
        .split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    title_case(&collapsed)
}

/// Title-cases the first cased character after any uncased one and
/// lower-cases the rest, so `"st. john's"` becomes `"St. John'S"`.
///
/// Uses Unicode titlecase mappings where they differ from uppercase
/// (`ß` -> `Ss`, `ǆ` -> `ǅ`, ligatures) and lower-cases a word-final `Σ`
/// to `ς`.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        let cased = is_cased(c);
        if cased && previous_cased {
            if c == 'Σ' && ends_word(chars.as_str()) {
                out.push('ς');
            } else {
                out.extend(c.to_lowercase());
            }
        } else if cased {
            push_titlecase(&mut out, c);
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || is_titlecase_letter(c)
}

/// Letters of general category `Lt`, which are neither upper nor lower.
fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c,
        '\u{1c5}'
            | '\u{1c8}'
            | '\u{1cb}'
            | '\u{1f2}'
            | '\u{1f88}'..='\u{1f8f}'
            | '\u{1f98}'..='\u{1f9f}'
            | '\u{1fa8}'..='\u{1faf}'
            | '\u{1fbc}'
            | '\u{1fcc}'
            | '\u{1ffc}'
    )
}

/// Characters skipped when deciding whether a `Σ` ends its word.
fn is_case_ignorable(c: char) -> bool {
    matches!(
        c,
        '\'' | '.' | ':' | '^' | '`' | '\u{ad}' | '\u{b7}' | '\u{2018}' | '\u{2019}'
            | '\u{300}'..='\u{36f}'
    )
}

fn ends_word(rest: &str) -> bool {
    rest.chars()
        .find(|c| !is_case_ignorable(*c))
        .is_none_or(|c| !is_cased(c))
}

fn push_titlecase(out: &mut String, c: char) {
    let mapped = match c {
        'ß' => "Ss",
        '\u{fb00}' => "Ff",
        '\u{fb01}' => "Fi",
        '\u{fb02}' => "Fl",
        '\u{fb03}' => "Ffi",
        '\u{fb04}' => "Ffl",
        '\u{fb05}' | '\u{fb06}' => "St",
        '\u{587}' => "\u{535}\u{582}",
        '\u{fb13}' => "\u{544}\u{576}",
        '\u{fb14}' => "\u{544}\u{565}",
        '\u{fb15}' => "\u{544}\u{56b}",
        '\u{fb16}' => "\u{54e}\u{576}",
        '\u{fb17}' => "\u{544}\u{56d}",
        '\u{1c4}'..='\u{1c6}' => "\u{1c5}",
        '\u{1c7}'..='\u{1c9}' => "\u{1c8}",
        '\u{1ca}'..='\u{1cc}' => "\u{1cb}",
        '\u{1f1}'..='\u{1f3}' => "\u{1f2}",
        '\u{1fb3}' | '\u{1fbc}' => "\u{1fbc}",
        '\u{1fc3}' | '\u{1fcc}' => "\u{1fcc}",
        '\u{1ff3}' | '\u{1ffc}' => "\u{1ffc}",
        '\u{1fb2}' => "\u{1fba}\u{345}",
        '\u{1fb4}' => "\u{386}\u{345}",
        '\u{1fb7}' => "\u{391}\u{342}\u{345}",
        '\u{1fc2}' => "\u{1fca}\u{345}",
        '\u{1fc4}' => "\u{389}\u{345}",
        '\u{1fc7}' => "\u{397}\u{342}\u{345}",
        '\u{1ff2}' => "\u{1ffa}\u{345}",
        '\u{1ff4}' => "\u{38f}\u{345}",
        '\u{1ff7}' => "\u{3a9}\u{342}\u{345}",
        // Iota-subscript forms title-case to their own Lt row.
        '\u{1f80}'..='\u{1faf}' => {
            out.push(char::from_u32(u32::from(c) | 0x08).unwrap_or(c));
            return;
        }
        // Georgian Mkhedruli has uppercase forms but titlecases to itself.
        '\u{10d0}'..='\u{10fa}' | '\u{10fd}'..='\u{10ff}' => {
            out.push(c);
            return;
        }
        _ => {
            out.extend(c.to_uppercase());
            return;
        }
    };
    out.push_str(mapped);
}
