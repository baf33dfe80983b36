#![no_main]
use libfuzzer_sys::fuzz_target;

use kernlibc_core::stdio::format_bounded;

const SENTINEL: u8 = 0xA5;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let capacity = usize::from(data[0]) % 64;
    let format = &data[1..];
    let args: Vec<i32> = format
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let mut buf = [SENTINEL; 96];
    let outcome = format_bounded(&mut buf, capacity, format, &args);

    assert!(outcome.written <= capacity);
    assert!(outcome.args_used <= args.len());
    assert!(buf[capacity..].iter().all(|&b| b == SENTINEL));
    if outcome.truncated {
        assert_eq!(outcome.written, capacity);
    }
});
