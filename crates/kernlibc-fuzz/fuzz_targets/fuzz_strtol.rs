#![no_main]
use libfuzzer_sys::fuzz_target;

use kernlibc_core::limits::LongWidth;
use kernlibc_core::stdlib::{ConversionStatus, itoa, strtol_width, strtoul_width};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let base = i32::from(data[0] % 40);
    let text = &data[1..];

    for width in [LongWidth::Bits32, LongWidth::Bits64] {
        let (value, consumed, status) = strtol_width(text, base, width);
        assert!(consumed <= text.len());
        assert!(value >= width.signed_min() && value <= width.signed_max());
        match status {
            ConversionStatus::Overflow => assert_eq!(value, width.signed_max()),
            ConversionStatus::Underflow => assert_eq!(value, width.signed_min()),
            ConversionStatus::InvalidBase => assert_eq!((value, consumed), (0, 0)),
            ConversionStatus::Success => {}
        }

        let (uvalue, uconsumed, _) = strtoul_width(text, base, width);
        assert!(uconsumed <= text.len());
        assert!(uvalue <= width.unsigned_max());

        // A clean in-range parse in a valid base renders and parses back.
        if status == ConversionStatus::Success && (2..=36).contains(&base) {
            let mut buf = [0u8; 72];
            let len = itoa(value, base as u32, &mut buf).unwrap_or(0);
            assert!(len > 0);
            assert_eq!(strtol_width(&buf, base, width), (value, len, ConversionStatus::Success));
        }
    }
});
