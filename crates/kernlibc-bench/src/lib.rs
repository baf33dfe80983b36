//! Benchmark inputs shared by the criterion suites in `benches/`.

/// Byte counts every size-parameterized benchmark sweeps.
pub const SIZES: &[usize] = &[16, 64, 256, 1024, 4096, 65536];

/// `len` copies of `fill` followed by a terminator.
#[must_use]
pub fn c_string(len: usize, fill: u8) -> Vec<u8> {
    let mut s = vec![fill; len];
    s.push(0);
    s
}

/// Numeric strings of increasing width, each NUL-terminated.
pub const NUMERIC_INPUTS: &[(&str, &[u8])] = &[
    ("short", b"42\0"),
    ("int_max", b"2147483647\0"),
    ("long_min", b"-9223372036854775808\0"),
    ("saturating", b"99999999999999999999999\0"),
    ("hex_prefixed", b"  0x7fffffffffffffff\0"),
];
