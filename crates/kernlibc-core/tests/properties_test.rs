//! Cross-module properties of the core primitives.

use std::cmp::Ordering;

use kernlibc_core::limits::LongWidth;
use kernlibc_core::stdio::snprintf;
use kernlibc_core::stdlib::{itoa, strtol_width, strtoul_width, ConversionStatus};
use kernlibc_core::string::{memmove, strcmp, strsep, strtok_r};

const SAMPLES: &[i64] = &[
    0,
    1,
    -1,
    7,
    -36,
    255,
    4096,
    -65_535,
    123_456_789,
    i32::MAX as i64,
    i32::MIN as i64,
    i64::MAX,
    i64::MIN,
    i64::MIN + 1,
];

#[test]
fn itoa_then_strtol_round_trips_every_base() {
    for base in 2..=36u32 {
        for &value in SAMPLES {
            let mut buf = [0u8; 72];
            let len = itoa(value, base, &mut buf).unwrap();
            let (parsed, consumed, status) =
                strtol_width(&buf, base as i32, LongWidth::Bits64);
            assert_eq!(
                (parsed, consumed, status),
                (value, len, ConversionStatus::Success),
                "value {value} base {base} text {:?}",
                std::str::from_utf8(&buf[..len])
            );
        }
    }
}

#[test]
fn parsers_saturate_at_the_target_width() {
    assert_eq!(
        strtol_width(b"99999999999\0", 10, LongWidth::Bits32),
        (i64::from(i32::MAX), 11, ConversionStatus::Overflow)
    );
    assert_eq!(
        strtol_width(b"-99999999999\0", 10, LongWidth::Bits32),
        (i64::from(i32::MIN), 12, ConversionStatus::Underflow)
    );
    assert_eq!(
        strtol_width(b"99999999999999999999\0", 10, LongWidth::Bits64),
        (i64::MAX, 20, ConversionStatus::Overflow)
    );
    assert_eq!(
        strtol_width(b"-99999999999999999999\0", 10, LongWidth::Bits64),
        (i64::MIN, 21, ConversionStatus::Underflow)
    );
    assert_eq!(
        strtoul_width(b"ffffffffff\0", 16, LongWidth::Bits32),
        (u64::from(u32::MAX), 10, ConversionStatus::Overflow)
    );
}

#[test]
fn strcmp_is_antisymmetric() {
    let words: [&[u8]; 7] = [b"\0", b"a\0", b"ab\0", b"abc\0", b"abd\0", b"b\0", b"\xff\0"];
    for a in words {
        assert_eq!(strcmp(a, a), 0);
        for b in words {
            assert_eq!(strcmp(a, b), -strcmp(b, a));
            assert_eq!(strcmp(a, b).cmp(&0), a.cmp(b), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn strtok_r_exhausts_after_last_token() {
    let mut buf = *b"a,b,,c\0";
    let mut save = 0;
    let mut tokens = Vec::new();
    while let Some((start, len, next)) = strtok_r(&mut buf, b",\0", save) {
        tokens.push(buf[start..start + len].to_vec());
        save = next;
    }
    assert_eq!(tokens, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    assert_eq!(strtok_r(&mut buf, b",\0", save), None);
}

#[test]
fn strsep_reports_empty_fields_then_ends() {
    let mut buf = *b"a,b,,c\0";
    let mut cursor = Some(0);
    let mut fields = Vec::new();
    while let Some((start, len, next)) = strsep(&mut buf, b",\0", cursor) {
        fields.push(buf[start..start + len].to_vec());
        cursor = next;
    }
    assert_eq!(fields.len(), 4);
    assert!(fields[2].is_empty());
    assert_eq!(cursor, None);
}

#[test]
fn memmove_matches_copy_through_temporary() {
    let original: Vec<u8> = (0..32).collect();
    for src in 0..32 {
        for dst in 0..32 {
            for n in [0, 1, 5, 16, 31] {
                let mut buf = original.clone();
                let moved = memmove(&mut buf, dst, src, n);

                let mut expected = original.clone();
                let count = n.min(32 - dst).min(32 - src);
                let temp = original[src..src + count].to_vec();
                expected[dst..dst + count].copy_from_slice(&temp);

                assert_eq!(moved, count);
                assert_eq!(buf, expected, "dst {dst} src {src} n {n}");
            }
        }
    }
}

#[test]
fn snprintf_never_touches_bytes_past_capacity() {
    let formats: [&[u8]; 4] = [b"val=%d\0", b"[%d|%d|%d]\0", b"%%%d%%\0", b"%x%s%d%\0"];
    let args = [i32::MIN, 0, i32::MAX];
    for format in formats {
        for capacity in 0..40 {
            let mut buf = [0xA5u8; 48];
            let written = snprintf(&mut buf, capacity, format, &args);
            assert!(written <= capacity);
            assert!(buf[capacity..].iter().all(|&b| b == 0xA5));
        }
    }
}

#[test]
fn snprintf_val_examples() {
    let mut buf = [0u8; 8];
    assert_eq!(snprintf(&mut buf, 8, b"val=%d\0", &[42]), 6);
    assert_eq!(&buf[..6], b"val=42");

    let mut buf = [0u8; 8];
    assert_eq!(snprintf(&mut buf, 4, b"val=%d\0", &[42]), 4);
    assert_eq!(&buf[..4], b"val=");
    assert_eq!(&buf[4..], &[0; 4]);
}

#[test]
fn ordering_of_compares_follows_unsigned_bytes() {
    assert_eq!(
        kernlibc_core::string::memcmp(&[0x80], &[0x7f], 1),
        Ordering::Greater
    );
}
