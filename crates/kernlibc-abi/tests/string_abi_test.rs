//! Integration tests for the `<string.h>` entry points.

use std::ffi::{CStr, c_char};
use std::ptr;
use std::sync::Mutex;

use kernlibc_abi::metrics::global_metrics;
use kernlibc_abi::string_abi::{
    memchr, memcpy, memmove, strcat, strchr, strcmp, strcpy, strlen, strncat, strncpy, strsep,
    strtok,
};

// `strtok` keeps one process-wide cursor; tests that use it run one at a time.
static STRTOK_LOCK: Mutex<()> = Mutex::new(());

fn as_str(buf: &[u8]) -> &str {
    CStr::from_bytes_until_nul(buf).unwrap().to_str().unwrap()
}

#[test]
fn memcpy_returns_destination() {
    let src = *b"kernel";
    let mut dst = [0u8; 6];
    let ret = unsafe { memcpy(dst.as_mut_ptr().cast(), src.as_ptr().cast(), 6) };
    assert_eq!(ret, dst.as_mut_ptr().cast());
    assert_eq!(&dst, b"kernel");
}

#[test]
fn memmove_matches_copy_through_temporary() {
    for (dst, src) in [(0usize, 5usize), (5, 0), (3, 4), (4, 3), (7, 7)] {
        let mut buf: Vec<u8> = (0..32).collect();
        let mut expected = buf.clone();
        let tmp = expected[src..src + 20].to_vec();
        expected[dst..dst + 20].copy_from_slice(&tmp);

        let base = buf.as_mut_ptr();
        unsafe { memmove(base.add(dst).cast(), base.add(src).cast(), 20) };
        assert_eq!(buf, expected, "dst={dst} src={src}");
    }
}

#[test]
fn memchr_finds_nul_inside_region() {
    let buf = *b"ab\0cd";
    let hit = unsafe { memchr(buf.as_ptr().cast(), 0, 5) };
    assert_eq!(hit as usize - buf.as_ptr() as usize, 2);
    assert!(unsafe { memchr(buf.as_ptr().cast(), i32::from(b'z'), 5) }.is_null());
}

#[test]
fn copy_and_concatenate() {
    let mut buf = [0xFFu8; 16];
    unsafe {
        strcpy(buf.as_mut_ptr().cast(), c"boot".as_ptr());
        strcat(buf.as_mut_ptr().cast(), c":".as_ptr());
        strncat(buf.as_mut_ptr().cast(), c"stage2".as_ptr(), 5);
        assert_eq!(strlen(buf.as_ptr().cast()), 10);
    }
    assert_eq!(as_str(&buf), "boot:stage");
    assert_eq!(buf[11], 0xFF);
}

#[test]
fn strncpy_exact_count() {
    let mut buf = [0xFFu8; 8];
    unsafe { strncpy(buf.as_mut_ptr().cast(), c"ab".as_ptr(), 5) };
    assert_eq!(&buf, b"ab\0\0\0\xFF\xFF\xFF");

    let mut buf = [0xFFu8; 4];
    unsafe { strncpy(buf.as_mut_ptr().cast(), c"abcdef".as_ptr(), 3) };
    assert_eq!(&buf, b"abc\xFF");
}

#[test]
fn strcmp_sign_symmetry() {
    let words = [c"", c"a", c"ab", c"abc", c"abd", c"b", c"\x7f", c"\xff"];
    for a in words {
        assert_eq!(unsafe { strcmp(a.as_ptr(), a.as_ptr()) }, 0);
        for b in words {
            let ab = unsafe { strcmp(a.as_ptr(), b.as_ptr()) };
            let ba = unsafe { strcmp(b.as_ptr(), a.as_ptr()) };
            assert_eq!(ab, -ba, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn strchr_terminator_is_a_candidate() {
    let s = c"path/to";
    unsafe {
        let slash = strchr(s.as_ptr(), i32::from(b'/'));
        assert_eq!(slash as usize - s.as_ptr() as usize, 4);
        let end = strchr(s.as_ptr(), 0);
        assert_eq!(end as usize - s.as_ptr() as usize, 7);
        assert!(strchr(s.as_ptr(), i32::from(b'x')).is_null());
    }
}

#[test]
fn strtok_global_cursor_exhausts_and_resets() {
    let _guard = STRTOK_LOCK.lock().unwrap();
    let before = global_metrics().snapshot();

    let mut buf = *b"a,b,,c\0";
    let delim = c",".as_ptr();
    let mut tokens = Vec::new();
    unsafe {
        let mut tok = strtok(buf.as_mut_ptr().cast(), delim);
        while !tok.is_null() {
            tokens.push(CStr::from_ptr(tok).to_str().unwrap().to_owned());
            tok = strtok(ptr::null_mut(), delim);
        }
        // Cursor is back to null: resuming yields nothing.
        assert!(strtok(ptr::null_mut(), delim).is_null());
    }

    assert_eq!(tokens, ["a", "b", "c"]);
    assert_eq!(&buf, b"a\0b\0,c\0");
    assert!(global_metrics().snapshot().since(&before).tokenizer_resets >= 1);
}

#[test]
fn strtok_restart_abandons_previous_scan() {
    let _guard = STRTOK_LOCK.lock().unwrap();
    let mut first = *b"x y z\0";
    let mut second = *b"1 2\0";
    let delim = c" ".as_ptr();
    unsafe {
        strtok(first.as_mut_ptr().cast(), delim);
        let tok = strtok(second.as_mut_ptr().cast(), delim);
        assert_eq!(CStr::from_ptr(tok).to_bytes(), b"1");
        let tok = strtok(ptr::null_mut(), delim);
        assert_eq!(CStr::from_ptr(tok).to_bytes(), b"2");
        assert!(strtok(ptr::null_mut(), delim).is_null());
    }
}

#[test]
fn strsep_walks_empty_fields() {
    let mut buf = *b"k=,v\0";
    let mut cursor: *mut c_char = buf.as_mut_ptr().cast();
    let delim = c"=,".as_ptr();
    let mut fields = Vec::new();
    unsafe {
        loop {
            let field = strsep(&mut cursor, delim);
            if field.is_null() {
                break;
            }
            fields.push(CStr::from_ptr(field).to_str().unwrap().to_owned());
        }
    }
    assert_eq!(fields, ["k", "", "v"]);
    assert!(cursor.is_null());
}
