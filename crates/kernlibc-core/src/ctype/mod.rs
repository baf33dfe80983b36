//! Byte classification for the single-byte ASCII character model.
//!
//! There is no locale: every predicate answers for the "C" locale, and any
//! byte above `0x7F` is in no class at all.

/// `[A-Z]`
#[inline]
pub const fn is_upper(c: u8) -> bool {
    matches!(c, b'A'..=b'Z')
}

/// `[a-z]`
#[inline]
pub const fn is_lower(c: u8) -> bool {
    matches!(c, b'a'..=b'z')
}

/// `[A-Za-z]`
#[inline]
pub const fn is_alpha(c: u8) -> bool {
    is_upper(c) || is_lower(c)
}

/// `[0-9]`
#[inline]
pub const fn is_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'9')
}

#[inline]
pub const fn is_alnum(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}

/// `[0-9A-Fa-f]`
#[inline]
pub const fn is_xdigit(c: u8) -> bool {
    is_digit(c) || matches!(c, b'a'..=b'f' | b'A'..=b'F')
}

/// Space or horizontal tab.
#[inline]
pub const fn is_blank(c: u8) -> bool {
    matches!(c, b' ' | b'\t')
}

/// Space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// This is the set `strtol` skips before the sign.
#[inline]
pub const fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Control characters: `0x00..=0x1F` and DEL.
#[inline]
pub const fn is_cntrl(c: u8) -> bool {
    c < 0x20 || c == 0x7F
}

/// The four ASCII punctuation ranges: `!`..`/`, `:`..`@`, `[`..`` ` ``,
/// `{`..`~`.
#[inline]
pub const fn is_punct(c: u8) -> bool {
    matches!(c, 0x21..=0x2F | 0x3A..=0x40 | 0x5B..=0x60 | 0x7B..=0x7E)
}

/// Visible glyphs: punctuation or alphanumeric.
#[inline]
pub const fn is_graph(c: u8) -> bool {
    is_punct(c) || is_alnum(c)
}

/// Visible glyphs plus the space character.
#[inline]
pub const fn is_print(c: u8) -> bool {
    is_graph(c) || c == b' '
}

#[inline]
pub const fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + (b'a' - b'A') } else { c }
}

#[inline]
pub const fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - (b'a' - b'A') } else { c }
}

/// Value of `c` as a digit in `base` (2..=36), letters case-insensitive.
///
/// Returns `None` when `c` is not a digit of that base.
#[inline]
pub const fn digit_value(c: u8, base: u32) -> Option<u32> {
    let value = match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'a'..=b'z' => (c - b'a') as u32 + 10,
        b'A'..=b'Z' => (c - b'A') as u32 + 10,
        _ => return None,
    };
    if value < base { Some(value) } else { None }
}
