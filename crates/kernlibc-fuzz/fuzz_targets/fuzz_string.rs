#![no_main]
use libfuzzer_sys::fuzz_target;

use kernlibc_core::string;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte splits the input into two strings.
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let (a, b) = data[1..].split_at(split - 1);

    let len = string::strlen(a);
    assert!(len <= a.len());
    assert!(a[..len].iter().all(|&c| c != 0));

    assert_eq!(string::strcmp(a, b), -string::strcmp(b, a));
    assert_eq!(string::strcmp(a, a), 0);
    let n = usize::from(data[0]);
    assert_eq!(string::strncmp(a, b, n), -string::strncmp(b, a, n));

    // Checked copies refuse rather than overflow.
    let mut dst = vec![0xA5u8; n];
    if let Some(copied) = string::try_strcpy(&mut dst, a) {
        assert_eq!(copied, len + 1);
        assert_eq!(&dst[..len], &a[..len]);
        assert_eq!(dst[len], 0);
    } else {
        assert!(dst.len() <= len);
    }

    // memmove agrees with a copy through a temporary.
    let mut buf = data.to_vec();
    let dst_off = usize::from(data[1]) % buf.len();
    let src_off = usize::from(data[0]) % buf.len();
    let count = (buf.len() - dst_off).min(buf.len() - src_off);
    let temp = buf[src_off..src_off + count].to_vec();
    let mut expected = buf.clone();
    expected[dst_off..dst_off + count].copy_from_slice(&temp);
    assert_eq!(string::memmove(&mut buf, dst_off, src_off, usize::MAX), count);
    assert_eq!(buf, expected);

    // Tokenizers never report a token outside the buffer.
    let mut tok = a.to_vec();
    let mut save = 0;
    while let Some((start, tlen, next)) = string::strtok_r(&mut tok, b",; \0", save) {
        assert!(start + tlen <= tok.len());
        assert!(tlen > 0);
        assert!(next > save);
        save = next;
    }
    let mut sep = a.to_vec();
    let mut cursor = Some(0);
    while let Some((start, flen, next)) = string::strsep(&mut sep, b",\0", cursor) {
        assert!(start + flen <= sep.len());
        cursor = next;
    }
});
