//! String operations: strlen, strcmp, strncmp, strcpy, strncpy, strcat,
//! strncat, strchr.
//!
//! Strings are `&[u8]` slices in which a NUL byte marks the logical end. A
//! slice without a NUL is treated as terminated at its last byte, so no
//! function here reads past the slice or past the first NUL.
//!
//! `strcpy` and `strcat` keep the C contract that the caller sizes the
//! destination; violating it panics on the slice bound instead of writing
//! out of bounds. The `try_` variants report the shortfall as `None`.

/// Length of a NUL-terminated byte string (not counting the NUL).
///
/// Equivalent to C `strlen`. Returns `s.len()` when no NUL is present.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

#[inline]
fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

/// Compares two NUL-terminated byte strings.
///
/// Equivalent to C `strcmp`. Returns the difference of the first pair of
/// differing bytes taken as unsigned, or `0` if both strings end together.
pub fn strcmp(s1: &[u8], s2: &[u8]) -> i32 {
    let mut i = 0;
    loop {
        let a = byte_at(s1, i);
        let b = byte_at(s2, i);
        if a != b || a == 0 {
            return i32::from(a) - i32::from(b);
        }
        i += 1;
    }
}

/// Compares at most `n` bytes of two NUL-terminated byte strings.
///
/// Equivalent to C `strncmp`: like [`strcmp`], but a difference beyond the
/// first `n` bytes is not seen.
pub fn strncmp(s1: &[u8], s2: &[u8], n: usize) -> i32 {
    for i in 0..n {
        let a = byte_at(s1, i);
        let b = byte_at(s2, i);
        if a != b || a == 0 {
            return i32::from(a) - i32::from(b);
        }
    }
    0
}

/// Copies `src` through its terminator into `dest`.
///
/// Equivalent to C `strcpy`. Returns the number of bytes written, NUL
/// included.
///
/// # Panics
///
/// Panics if `dest` cannot hold `strlen(src) + 1` bytes.
pub fn strcpy(dest: &mut [u8], src: &[u8]) -> usize {
    let src_len = strlen(src);
    dest[..src_len].copy_from_slice(&src[..src_len]);
    dest[src_len] = 0;
    src_len + 1
}

/// Checked [`strcpy`]: returns `None` and leaves `dest` untouched when it is
/// too small.
pub fn try_strcpy(dest: &mut [u8], src: &[u8]) -> Option<usize> {
    if dest.len() <= strlen(src) {
        return None;
    }
    Some(strcpy(dest, src))
}

/// Copies exactly `n` bytes into `dest`.
///
/// Equivalent to C `strncpy`. When `src` ends before `n` bytes, the rest of
/// the `n` bytes are zero-filled. When `src` is `n` bytes or longer, `dest`
/// is NOT NUL-terminated.
///
/// `n` is clamped to `dest.len()`; returns the number of bytes written.
pub fn strncpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let count = n.min(dest.len());
    let copy_len = strlen(src).min(count);
    dest[..copy_len].copy_from_slice(&src[..copy_len]);
    dest[copy_len..count].fill(0);
    count
}

/// Appends `src` at the terminator of `dest`.
///
/// Equivalent to C `strcat`. Returns the length of the combined string
/// (not counting the NUL).
///
/// # Panics
///
/// Panics if `dest` cannot hold the combined string plus NUL.
pub fn strcat(dest: &mut [u8], src: &[u8]) -> usize {
    let dest_len = strlen(dest);
    dest_len + strcpy(&mut dest[dest_len..], src) - 1
}

/// Checked [`strcat`]: returns `None` and leaves `dest` untouched when the
/// result would not fit.
pub fn try_strcat(dest: &mut [u8], src: &[u8]) -> Option<usize> {
    let total = strlen(dest) + strlen(src);
    if dest.len() <= total {
        return None;
    }
    Some(strcat(dest, src))
}

/// Appends at most `n` bytes of `src` to `dest`, always terminating.
///
/// Equivalent to C `strncat`. Returns the combined length.
///
/// # Panics
///
/// Panics if `dest` cannot hold the combined string plus NUL.
pub fn strncat(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let dest_len = strlen(dest);
    let src_len = strlen(src).min(n);
    let total = dest_len + src_len;
    dest[dest_len..total].copy_from_slice(&src[..src_len]);
    dest[total] = 0;
    total
}

/// Index of the first `c` in `s`.
///
/// Equivalent to C `strchr`. The terminator is itself a candidate, so
/// `strchr(s, 0)` is the index of the NUL (or `s.len()` when the slice has
/// none).
pub fn strchr(s: &[u8], c: u8) -> Option<usize> {
    let len = strlen(s);
    if c == 0 {
        return Some(len);
    }
    s[..len].iter().position(|&b| b == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strlen_stops_at_nul_or_slice_end() {
        assert_eq!(strlen(b"hello\0"), 5);
        assert_eq!(strlen(b"\0"), 0);
        assert_eq!(strlen(b"ab\0cd\0"), 2);
        assert_eq!(strlen(b"abc"), 3);
    }

    #[test]
    fn strcmp_orders_strings() {
        assert_eq!(strcmp(b"abc\0", b"abc\0"), 0);
        assert!(strcmp(b"abc\0", b"abd\0") < 0);
        assert!(strcmp(b"abd\0", b"abc\0") > 0);
        assert!(strcmp(b"ab\0", b"abc\0") < 0);
        assert!(strcmp(b"abc\0", b"ab\0") > 0);
    }

    #[test]
    fn strcmp_returns_unsigned_byte_difference() {
        assert_eq!(strcmp(b"a\0", b"c\0"), -2);
        assert_eq!(strcmp(&[0xFF, 0], b"a\0"), 0xFF - i32::from(b'a'));
    }

    #[test]
    fn strcmp_ignores_bytes_after_terminator() {
        assert_eq!(strcmp(b"ab\0x", b"ab\0y"), 0);
    }

    #[test]
    fn strncmp_bounds_the_comparison() {
        assert_eq!(strncmp(b"abcdef\0", b"abcxyz\0", 3), 0);
        assert!(strncmp(b"abcdef\0", b"abcxyz\0", 4) < 0);
        assert_eq!(strncmp(b"ab\0x", b"ab\0y", 4), 0);
        assert_eq!(strncmp(b"x\0", b"y\0", 0), 0);
    }

    #[test]
    fn strcpy_copies_terminator() {
        let mut buf = [0xFFu8; 10];
        assert_eq!(strcpy(&mut buf, b"hello\0"), 6);
        assert_eq!(&buf[..7], b"hello\0\xFF");
    }

    #[test]
    #[should_panic]
    fn strcpy_panics_on_short_destination() {
        let mut buf = [0u8; 3];
        strcpy(&mut buf, b"hello\0");
    }

    #[test]
    fn try_strcpy_reports_short_destination() {
        let mut buf = [0x11u8; 5];
        assert_eq!(try_strcpy(&mut buf, b"hello\0"), None);
        assert_eq!(buf, [0x11; 5]);
        assert_eq!(try_strcpy(&mut buf, b"hell\0"), Some(5));
    }

    #[test]
    fn strncpy_zero_fills_remainder() {
        let mut buf = [0xFFu8; 10];
        assert_eq!(strncpy(&mut buf, b"hi\0", 5), 5);
        assert_eq!(&buf[..6], b"hi\0\0\0\xFF");
    }

    #[test]
    fn strncpy_truncates_without_terminator() {
        let mut buf = [0xFFu8; 3];
        strncpy(&mut buf, b"hello\0", 3);
        assert_eq!(&buf, b"hel");
    }

    #[test]
    fn strcat_appends_at_terminator() {
        let mut buf = [0u8; 12];
        strcpy(&mut buf, b"hello\0");
        assert_eq!(strcat(&mut buf, b" world\0"), 11);
        assert_eq!(&buf, b"hello world\0");
    }

    #[test]
    fn try_strcat_reports_overflow() {
        let mut buf = *b"abc\0\0";
        assert_eq!(try_strcat(&mut buf, b"de\0"), None);
        assert_eq!(&buf, b"abc\0\0");
        assert_eq!(try_strcat(&mut buf, b"d\0"), Some(4));
        assert_eq!(&buf, b"abcd\0");
    }

    #[test]
    fn strncat_limits_and_terminates() {
        let mut buf = [0xFFu8; 10];
        strcpy(&mut buf, b"hi\0");
        assert_eq!(strncat(&mut buf, b"there\0", 3), 5);
        assert_eq!(&buf[..6], b"hithe\0");
    }

    #[test]
    fn strchr_finds_byte_or_terminator() {
        assert_eq!(strchr(b"hello\0", b'l'), Some(2));
        assert_eq!(strchr(b"hello\0", b'z'), None);
        assert_eq!(strchr(b"hello\0", 0), Some(5));
        assert_eq!(strchr(b"he\0llo\0", b'l'), None);
    }
}
