//! Numeric conversion: atoi, atol, itoa, strtol, strtoul.
//!
//! Parsing never wraps. The accumulator is checked against a cutoff before
//! each multiply-add, and an out-of-range value saturates at the limit of
//! the target [`LongWidth`] while the remaining digits are still consumed.

use crate::ctype::{digit_value, is_space, is_xdigit};
use crate::limits::LongWidth;

/// Result of a string-to-number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    /// Positive value above the maximum; the result is clamped to it.
    Overflow,
    /// Negative value below the minimum; the result is clamped to it.
    Underflow,
    /// Base was neither 0 nor in `2..=36`; nothing was consumed.
    InvalidBase,
}

/// Digits used by [`itoa`], indexed by digit value.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Sign and radix found ahead of the digits.
struct NumberPrefix {
    negative: bool,
    base: u32,
    digits_at: usize,
}

/// Digit run accumulated against a magnitude limit.
struct Accumulated {
    magnitude: u64,
    end: usize,
    any_digits: bool,
    overflow: bool,
}

/// Skips whitespace and one sign, then resolves the radix.
///
/// Base 0 picks 16 for a `0x`/`0X` prefix, 8 for a leading `0`, 10 otherwise.
/// The hex prefix is consumed (for base 0 or 16) only when a hex digit
/// follows it, so `"0x"` parses as the single digit `0`.
fn number_prefix(s: &[u8], base: i32) -> Option<NumberPrefix> {
    let len = s.len();
    let mut i = 0;
    while i < len && is_space(s[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < len && (s[i] == b'-' || s[i] == b'+') {
        negative = s[i] == b'-';
        i += 1;
    }

    let hex_prefix = i + 2 < len
        && s[i] == b'0'
        && (s[i + 1] == b'x' || s[i + 1] == b'X')
        && is_xdigit(s[i + 2]);

    let base = match base {
        0 if hex_prefix => {
            i += 2;
            16
        }
        0 if i < len && s[i] == b'0' => 8,
        0 => 10,
        16 => {
            if hex_prefix {
                i += 2;
            }
            16
        }
        2..=36 => base as u32,
        _ => return None,
    };

    Some(NumberPrefix {
        negative,
        base,
        digits_at: i,
    })
}

/// Consumes the maximal digit run starting at `start`, saturating once the
/// magnitude would pass `limit`.
fn accumulate(s: &[u8], start: usize, base: u32, limit: u64) -> Accumulated {
    let radix = u64::from(base);
    let cutoff = limit / radix;
    let cutlim = limit % radix;

    let mut acc = Accumulated {
        magnitude: 0,
        end: start,
        any_digits: false,
        overflow: false,
    };

    while acc.end < s.len() {
        let Some(digit) = digit_value(s[acc.end], base) else {
            break;
        };
        let digit = u64::from(digit);
        acc.any_digits = true;
        acc.end += 1;

        if acc.overflow {
            continue;
        }
        if acc.magnitude > cutoff || (acc.magnitude == cutoff && digit > cutlim) {
            acc.overflow = true;
        } else {
            acc.magnitude = acc.magnitude * radix + digit;
        }
    }
    acc
}

// ----------------------------------------------------------------------------
// Signed
// ----------------------------------------------------------------------------

/// Parses a signed integer saturating at the limits of `width`.
///
/// Returns `(value, consumed_bytes, status)`. When no digits are found the
/// result is `(0, 0, Success)`: zero bytes consumed, so a C end pointer
/// equals the start of the input.
pub fn strtol_width(s: &[u8], base: i32, width: LongWidth) -> (i64, usize, ConversionStatus) {
    let Some(prefix) = number_prefix(s, base) else {
        return (0, 0, ConversionStatus::InvalidBase);
    };

    let limit = if prefix.negative {
        width.signed_min().unsigned_abs()
    } else {
        width.signed_max() as u64
    };
    let acc = accumulate(s, prefix.digits_at, prefix.base, limit);

    if !acc.any_digits {
        return (0, 0, ConversionStatus::Success);
    }
    if acc.overflow {
        return if prefix.negative {
            (width.signed_min(), acc.end, ConversionStatus::Underflow)
        } else {
            (width.signed_max(), acc.end, ConversionStatus::Overflow)
        };
    }

    let value = if prefix.negative {
        (acc.magnitude as i64).wrapping_neg()
    } else {
        acc.magnitude as i64
    };
    (value, acc.end, ConversionStatus::Success)
}

/// [`strtol_width`] at the target's native `long` width.
pub fn strtol_impl(s: &[u8], base: i32) -> (i64, usize, ConversionStatus) {
    strtol_width(s, base, LongWidth::NATIVE)
}

/// C `strtol`: returns `(value, consumed_bytes)`.
pub fn strtol(s: &[u8], base: i32) -> (i64, usize) {
    let (val, len, _) = strtol_impl(s, base);
    (val, len)
}

// ----------------------------------------------------------------------------
// Unsigned
// ----------------------------------------------------------------------------

/// Parses an unsigned integer saturating at the maximum of `width`.
///
/// A leading `-` is accepted and negates the result modulo `2^width`, as C
/// does; whether that is meaningful is the caller's concern.
pub fn strtoul_width(s: &[u8], base: i32, width: LongWidth) -> (u64, usize, ConversionStatus) {
    let Some(prefix) = number_prefix(s, base) else {
        return (0, 0, ConversionStatus::InvalidBase);
    };

    let max = width.unsigned_max();
    let acc = accumulate(s, prefix.digits_at, prefix.base, max);

    if !acc.any_digits {
        return (0, 0, ConversionStatus::Success);
    }
    if acc.overflow {
        return (max, acc.end, ConversionStatus::Overflow);
    }

    let value = if prefix.negative {
        acc.magnitude.wrapping_neg() & max
    } else {
        acc.magnitude
    };
    (value, acc.end, ConversionStatus::Success)
}

/// [`strtoul_width`] at the target's native `long` width.
pub fn strtoul_impl(s: &[u8], base: i32) -> (u64, usize, ConversionStatus) {
    strtoul_width(s, base, LongWidth::NATIVE)
}

/// C `strtoul`: returns `(value, consumed_bytes)`.
pub fn strtoul(s: &[u8], base: i32) -> (u64, usize) {
    let (val, len, _) = strtoul_impl(s, base);
    (val, len)
}

// ----------------------------------------------------------------------------
// atoi / itoa
// ----------------------------------------------------------------------------

/// C `atoi`. Best effort: out-of-range input keeps the low 32 bits of the
/// `long` parse, with no overflow report.
pub fn atoi(s: &[u8]) -> i32 {
    let (val, _, _) = strtol_impl(s, 10);
    val as i32
}

/// C `atol`.
pub fn atol(s: &[u8]) -> i64 {
    let (val, _, _) = strtol_impl(s, 10);
    val
}

/// Renders `value` in `base` (2..=36) into `buf`, NUL-terminated.
///
/// Digits are `0-9a-z`; negative values get a leading `-` in every base.
/// Returns the rendered length without the NUL, or `None` (with `buf`
/// untouched) for an invalid base or a buffer that cannot hold the text and
/// its terminator.
pub fn itoa(value: i64, base: u32, buf: &mut [u8]) -> Option<usize> {
    if !(2..=36).contains(&base) {
        return None;
    }

    // 64 binary digits plus a sign is the longest rendering.
    let mut scratch = [0u8; 65];
    let mut pos = scratch.len();
    let mut magnitude = value.unsigned_abs();
    let radix = u64::from(base);
    loop {
        pos -= 1;
        scratch[pos] = DIGITS[(magnitude % radix) as usize];
        magnitude /= radix;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        pos -= 1;
        scratch[pos] = b'-';
    }

    let text = &scratch[pos..];
    if buf.len() <= text.len() {
        return None;
    }
    buf[..text.len()].copy_from_slice(text);
    buf[text.len()] = 0;
    Some(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoi_basic() {
        assert_eq!(atoi(b"42"), 42);
        assert_eq!(atoi(b"-42"), -42);
        assert_eq!(atoi(b"   123abc"), 123);
        assert_eq!(atoi(b"abc"), 0);
        assert_eq!(atol(b"-9000000000"), -9_000_000_000);
    }

    #[test]
    fn strtol_base10() {
        assert_eq!(strtol(b"123456", 10), (123456, 6));
        assert_eq!(strtol(b"  -17xyz", 10), (-17, 5));
        assert_eq!(strtol(b"+8", 10), (8, 2));
    }

    #[test]
    fn strtol_base16_prefix() {
        assert_eq!(strtol(b"0xFF", 16), (255, 4));
        assert_eq!(strtol(b"0Xff", 16), (255, 4));
        assert_eq!(strtol(b"FF", 16), (255, 2));
        assert_eq!(strtol(b"-0x10", 16), (-16, 5));
    }

    #[test]
    fn strtol_auto_base() {
        assert_eq!(strtol(b"0x10", 0), (16, 4));
        assert_eq!(strtol(b"010", 0), (8, 3));
        assert_eq!(strtol(b"10", 0), (10, 2));
        assert_eq!(strtol(b"0", 0), (0, 1));
        assert_eq!(strtol(b"09", 0), (0, 1));
    }

    #[test]
    fn strtol_letters_case_insensitive() {
        assert_eq!(strtol(b"zZ", 36), (35 * 36 + 35, 2));
        assert_eq!(strtol(b"1012", 2), (5, 3));
    }

    #[test]
    fn strtol_0x_edge_cases() {
        assert_eq!(strtol(b"0xz", 0), (0, 1));
        assert_eq!(strtol(b"0xz", 16), (0, 1));
        assert_eq!(strtol(b"0x", 0), (0, 1));
        assert_eq!(strtol(b"0x1", 0), (1, 3));
    }

    #[test]
    fn strtol_no_digits_consumes_nothing() {
        assert_eq!(strtol(b"", 10), (0, 0));
        assert_eq!(strtol(b"   ", 10), (0, 0));
        assert_eq!(strtol(b"-", 10), (0, 0));
        assert_eq!(strtol(b" +x", 10), (0, 0));
    }

    #[test]
    fn strtol_invalid_base() {
        assert_eq!(strtol_impl(b"10", 1), (0, 0, ConversionStatus::InvalidBase));
        assert_eq!(strtol_impl(b"10", 37), (0, 0, ConversionStatus::InvalidBase));
        assert_eq!(strtol_impl(b"10", -2), (0, 0, ConversionStatus::InvalidBase));
        assert_eq!(strtoul_impl(b"10", 99), (0, 0, ConversionStatus::InvalidBase));
    }

    #[test]
    fn strtol_saturates_at_32_bits() {
        let (val, len, status) = strtol_width(b"99999999999", 10, LongWidth::Bits32);
        assert_eq!((val, len, status), (i64::from(i32::MAX), 11, ConversionStatus::Overflow));

        let (val, len, status) = strtol_width(b"-99999999999", 10, LongWidth::Bits32);
        assert_eq!((val, len, status), (i64::from(i32::MIN), 12, ConversionStatus::Underflow));

        assert_eq!(
            strtol_width(b"2147483647", 10, LongWidth::Bits32),
            (2_147_483_647, 10, ConversionStatus::Success)
        );
        assert_eq!(
            strtol_width(b"-2147483648", 10, LongWidth::Bits32),
            (-2_147_483_648, 11, ConversionStatus::Success)
        );
        assert_eq!(
            strtol_width(b"2147483648", 10, LongWidth::Bits32).2,
            ConversionStatus::Overflow
        );
    }

    #[test]
    fn strtol_saturates_at_64_bits() {
        let (val, _, status) = strtol_width(b"9223372036854775807", 10, LongWidth::Bits64);
        assert_eq!((val, status), (i64::MAX, ConversionStatus::Success));

        let (val, _, status) = strtol_width(b"9223372036854775808", 10, LongWidth::Bits64);
        assert_eq!((val, status), (i64::MAX, ConversionStatus::Overflow));

        let (val, _, status) = strtol_width(b"-9223372036854775808", 10, LongWidth::Bits64);
        assert_eq!((val, status), (i64::MIN, ConversionStatus::Success));

        let (val, _, status) = strtol_width(b"-9223372036854775809", 10, LongWidth::Bits64);
        assert_eq!((val, status), (i64::MIN, ConversionStatus::Underflow));
    }

    #[test]
    fn strtol_overflow_keeps_consuming_digits() {
        let (val, len, status) = strtol_width(b"123456789012345678901234;", 10, LongWidth::Bits64);
        assert_eq!(val, i64::MAX);
        assert_eq!(len, 24);
        assert_eq!(status, ConversionStatus::Overflow);
    }

    #[test]
    fn strtoul_limits() {
        let (val, _, status) = strtoul_width(b"18446744073709551615", 10, LongWidth::Bits64);
        assert_eq!((val, status), (u64::MAX, ConversionStatus::Success));

        let (val, _, status) = strtoul_width(b"18446744073709551616", 10, LongWidth::Bits64);
        assert_eq!((val, status), (u64::MAX, ConversionStatus::Overflow));

        let (val, _, status) = strtoul_width(b"4294967296", 10, LongWidth::Bits32);
        assert_eq!((val, status), (u64::from(u32::MAX), ConversionStatus::Overflow));
    }

    #[test]
    fn strtoul_negation_wraps_within_width() {
        assert_eq!(strtoul_width(b"-1", 10, LongWidth::Bits64).0, u64::MAX);
        assert_eq!(strtoul_width(b"-1", 10, LongWidth::Bits32).0, u64::from(u32::MAX));
        assert_eq!(strtoul_width(b"-2", 10, LongWidth::Bits32).0, u64::from(u32::MAX - 1));
    }

    #[test]
    fn itoa_renders_bases_and_sign() {
        let mut buf = [0xFFu8; 70];
        assert_eq!(itoa(0, 10, &mut buf), Some(1));
        assert_eq!(&buf[..2], b"0\0");
        assert_eq!(itoa(-255, 16, &mut buf), Some(3));
        assert_eq!(&buf[..4], b"-ff\0");
        assert_eq!(itoa(5, 2, &mut buf), Some(3));
        assert_eq!(&buf[..4], b"101\0");
        assert_eq!(itoa(35, 36, &mut buf), Some(1));
        assert_eq!(&buf[..2], b"z\0");
        assert_eq!(itoa(i64::MIN, 2, &mut buf), Some(65));
        assert_eq!(buf[0], b'-');
        assert_eq!(buf[65], 0);
    }

    #[test]
    fn itoa_rejects_bad_base_and_short_buffer() {
        let mut buf = [0x11u8; 3];
        assert_eq!(itoa(1, 1, &mut buf), None);
        assert_eq!(itoa(1, 37, &mut buf), None);
        assert_eq!(itoa(-10, 10, &mut buf), None);
        assert_eq!(buf, [0x11; 3]);
        assert_eq!(itoa(99, 10, &mut buf), Some(2));
    }

    #[test]
    fn itoa_strtol_round_trip() {
        let samples = [
            0,
            1,
            -1,
            42,
            -42,
            1_000_000_007,
            i64::from(i32::MAX),
            i64::from(i32::MIN),
            i64::MAX,
            i64::MIN,
            i64::MIN + 1,
        ];
        let mut buf = [0u8; 80];
        for base in 2..=36u32 {
            for &value in &samples {
                let len = itoa(value, base, &mut buf).unwrap();
                let (parsed, consumed, status) =
                    strtol_width(&buf[..len], base as i32, LongWidth::Bits64);
                assert_eq!(parsed, value, "base {base}");
                assert_eq!(consumed, len);
                assert_eq!(status, ConversionStatus::Success);
            }
        }
    }
}
