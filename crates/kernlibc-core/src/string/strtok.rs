//! String tokenization with a caller-owned cursor: strtok_r and strsep.
//!
//! Both functions overwrite the delimiter that ends a token with a NUL byte
//! and report tokens as `(start, len)` pairs into the same buffer. The resume
//! position is handed back to the caller, who passes it to the next call, so
//! any number of scans can run at once. The legacy `strtok` with hidden
//! process-wide state is only offered at the C boundary (`kernlibc-abi`),
//! built on [`strtok_r`].

/// Returns true if byte `b` is in the NUL-terminated `delimiters` set.
fn is_delim(b: u8, delimiters: &[u8]) -> bool {
    delimiters.iter().take_while(|&&d| d != 0).any(|&d| d == b)
}

/// Reentrant string tokenizer.
///
/// POSIX `strtok_r`. Starting at `save_ptr`, skips a run of delimiter bytes,
/// then takes the longest run of non-delimiter bytes as the token. Empty
/// fields between adjacent delimiters are therefore never returned.
///
/// `s` is the NUL-terminated byte string to tokenize.
/// `delimiters` is a NUL-terminated byte slice of delimiter characters.
/// `save_ptr` is the saved position (0 for the first call).
///
/// Returns `Some((token_start, token_len, new_save_ptr))` for the next
/// token, or `None` once no non-delimiter bytes remain.
pub fn strtok_r(s: &mut [u8], delimiters: &[u8], save_ptr: usize) -> Option<(usize, usize, usize)> {
    let len = s.len();
    let mut pos = save_ptr;

    while pos < len && s[pos] != 0 && is_delim(s[pos], delimiters) {
        pos += 1;
    }
    if pos >= len || s[pos] == 0 {
        return None;
    }

    let token_start = pos;
    while pos < len && s[pos] != 0 && !is_delim(s[pos], delimiters) {
        pos += 1;
    }
    let token_len = pos - token_start;

    // Terminate the token and resume after the consumed delimiter. At the
    // end of the string the cursor stays on the terminator.
    if pos < len && s[pos] != 0 {
        s[pos] = 0;
        pos += 1;
    }

    Some((token_start, token_len, pos))
}

/// Splits off the next possibly-empty field.
///
/// BSD `strsep`. Unlike [`strtok_r`], adjacent delimiters produce empty
/// fields. `cursor` is `Some(0)` for the first call; the returned cursor is
/// `None` after the last field, and a `None` cursor yields `None`.
///
/// Returns `Some((field_start, field_len, next_cursor))`.
pub fn strsep(
    s: &mut [u8],
    delimiters: &[u8],
    cursor: Option<usize>,
) -> Option<(usize, usize, Option<usize>)> {
    let start = cursor?;
    let len = s.len();
    let mut pos = start.min(len);

    while pos < len && s[pos] != 0 {
        if is_delim(s[pos], delimiters) {
            s[pos] = 0;
            return Some((start, pos - start, Some(pos + 1)));
        }
        pos += 1;
    }
    Some((start.min(len), pos - start.min(len), None))
}
