//! ABI layer for `<string.h>` functions.
//!
//! Pointers are trusted: the caller guarantees that every region is valid
//! for the byte counts the C contract names, and that strings are
//! NUL-terminated. Nothing here checks for null except where C itself
//! gives null a meaning (`strtok`, `strtok_r`, `strsep`).

use core::ffi::{c_char, c_int, c_void};
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};
use core::slice;

use kernlibc_core::string as core_string;

use crate::metrics::{AbiMetrics, global_metrics};
use crate::util::{c_str, c_str_mut, c_strlen, c_strnlen};

// ---------------------------------------------------------------------------
// Memory primitives
// ---------------------------------------------------------------------------

abi_fn! {
    /// C `memcpy`: copies `n` bytes from `src` to `dst`. The regions must
    /// not overlap.
    fn memcpy(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
        let d = dst.cast::<u8>();
        let s = src.cast::<u8>();
        let mut i = 0;
        while i < n {
            *d.add(i) = *s.add(i);
            i += 1;
        }
        dst
    }
}

abi_fn! {
    /// C `memmove`: copies `n` bytes, correct for overlapping regions.
    ///
    /// Copies backward when `dst` lies above `src` and forward otherwise, so
    /// every source byte is read before it can be overwritten.
    fn memmove(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
        let d = dst.cast::<u8>();
        let s = src.cast::<u8>();
        if (d as usize) > (s as usize) {
            let mut i = n;
            while i > 0 {
                i -= 1;
                *d.add(i) = *s.add(i);
            }
        } else if (d as usize) < (s as usize) {
            let mut i = 0;
            while i < n {
                *d.add(i) = *s.add(i);
                i += 1;
            }
        }
        dst
    }
}

abi_fn! {
    /// C `memset`. A zero fill goes through [`memclr`].
    fn memset(dst: *mut c_void, value: c_int, n: usize) -> *mut c_void {
        let byte = value as u8;
        if byte == 0 {
            return memclr(dst, n);
        }
        let d = dst.cast::<u8>();
        let mut i = 0;
        while i < n {
            *d.add(i) = byte;
            i += 1;
        }
        dst
    }
}

abi_fn! {
    /// Zeroes `n` bytes at `dst`.
    fn memclr(dst: *mut c_void, n: usize) -> *mut c_void {
        let d = dst.cast::<u8>();
        let mut i = 0;
        while i < n {
            *d.add(i) = 0;
            i += 1;
        }
        dst
    }
}

abi_fn! {
    /// C `memcmp`: `-1`, `0` or `1` by the first differing unsigned byte.
    fn memcmp(a: *const c_void, b: *const c_void, n: usize) -> c_int {
        let a = a.cast::<u8>();
        let b = b.cast::<u8>();
        let mut i = 0;
        while i < n {
            let (x, y) = (*a.add(i), *b.add(i));
            if x != y {
                return if x < y { -1 } else { 1 };
            }
            i += 1;
        }
        0
    }
}

abi_fn! {
    /// C `memchr`: first byte equal to `value` (as `unsigned char`) in the
    /// first `n` bytes, or null.
    fn memchr(haystack: *const c_void, value: c_int, n: usize) -> *mut c_void {
        let h = haystack.cast::<u8>();
        let needle = value as u8;
        let mut i = 0;
        while i < n {
            if *h.add(i) == needle {
                return h.add(i).cast_mut().cast();
            }
            i += 1;
        }
        ptr::null_mut()
    }
}

// ---------------------------------------------------------------------------
// String primitives
// ---------------------------------------------------------------------------

abi_fn! {
    /// C `strlen`.
    fn strlen(s: *const c_char) -> usize {
        c_strlen(s)
    }
}

abi_fn! {
    /// C `strcmp`: difference of the first differing unsigned bytes.
    fn strcmp(a: *const c_char, b: *const c_char) -> c_int {
        core_string::strcmp(c_str(a), c_str(b))
    }
}

abi_fn! {
    /// C `strncmp`. Reads neither string past its terminator nor past `n`
    /// bytes, so arrays without a terminator are fine when they hold at
    /// least `n` bytes.
    fn strncmp(a: *const c_char, b: *const c_char, n: usize) -> c_int {
        if n == 0 {
            return 0;
        }
        let a_len = (c_strnlen(a, n) + 1).min(n);
        let b_len = (c_strnlen(b, n) + 1).min(n);
        core_string::strncmp(
            slice::from_raw_parts(a.cast::<u8>(), a_len),
            slice::from_raw_parts(b.cast::<u8>(), b_len),
            n,
        )
    }
}

abi_fn! {
    /// C `strcpy`. `dst` must hold `strlen(src) + 1` bytes.
    fn strcpy(dst: *mut c_char, src: *const c_char) -> *mut c_char {
        let src = c_str(src);
        let dest = slice::from_raw_parts_mut(dst.cast::<u8>(), src.len());
        core_string::strcpy(dest, src);
        dst
    }
}

abi_fn! {
    /// C `strncpy`: writes exactly `n` bytes, zero-filling after a short
    /// source and leaving `dst` unterminated after a long one.
    fn strncpy(dst: *mut c_char, src: *const c_char, n: usize) -> *mut c_char {
        if n == 0 {
            return dst;
        }
        let src = slice::from_raw_parts(src.cast::<u8>(), c_strnlen(src, n));
        let dest = slice::from_raw_parts_mut(dst.cast::<u8>(), n);
        core_string::strncpy(dest, src, n);
        dst
    }
}

abi_fn! {
    /// C `strcat`. `dst` must hold the combined string and its terminator.
    fn strcat(dst: *mut c_char, src: *const c_char) -> *mut c_char {
        let src = c_str(src);
        let total = c_strlen(dst) + src.len();
        core_string::strcat(slice::from_raw_parts_mut(dst.cast::<u8>(), total), src);
        dst
    }
}

abi_fn! {
    /// C `strncat`: appends at most `n` bytes of `src` and always
    /// terminates. `dst` must hold `strlen(dst) + min(n, strlen(src)) + 1`
    /// bytes.
    fn strncat(dst: *mut c_char, src: *const c_char, n: usize) -> *mut c_char {
        let src = slice::from_raw_parts(src.cast::<u8>(), c_strnlen(src, n));
        let total = c_strlen(dst) + src.len() + 1;
        core_string::strncat(slice::from_raw_parts_mut(dst.cast::<u8>(), total), src, n);
        dst
    }
}

abi_fn! {
    /// C `strchr`. Searching for `0` finds the terminator.
    fn strchr(s: *const c_char, c: c_int) -> *mut c_char {
        match core_string::strchr(c_str(s), c as u8) {
            Some(i) => s.add(i).cast_mut(),
            None => ptr::null_mut(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tokenizers
// ---------------------------------------------------------------------------

abi_fn! {
    /// POSIX `strtok_r`.
    ///
    /// A non-null `s` starts a new scan; a null `s` resumes at `*save_ptr`.
    /// Once the scan is exhausted `*save_ptr` becomes null and every further
    /// resume returns null.
    fn strtok_r(s: *mut c_char, delim: *const c_char, save_ptr: *mut *mut c_char) -> *mut c_char {
        let current = if s.is_null() { *save_ptr } else { s };
        if current.is_null() {
            return ptr::null_mut();
        }

        match core_string::strtok_r(c_str_mut(current), c_str(delim), 0) {
            Some((start, _, next)) => {
                *save_ptr = current.add(next);
                current.add(start)
            }
            None => {
                *save_ptr = ptr::null_mut();
                ptr::null_mut()
            }
        }
    }
}

/// Resume position of the legacy [`strtok`]. Null when no scan is active.
static STRTOK_CURSOR: AtomicPtr<c_char> = AtomicPtr::new(ptr::null_mut());

abi_fn! {
    /// C `strtok`: [`strtok_r`] over one process-wide cursor.
    ///
    /// The cursor is shared by every caller. Interleaving two scans, from
    /// two threads or from a nested loop, corrupts both; use [`strtok_r`]
    /// for anything but a single sequential scan.
    fn strtok(s: *mut c_char, delim: *const c_char) -> *mut c_char {
        let mut cursor = STRTOK_CURSOR.load(Ordering::Relaxed);
        let had_scan = !s.is_null() || !cursor.is_null();
        let token = strtok_r(s, delim, &mut cursor);
        STRTOK_CURSOR.store(cursor, Ordering::Relaxed);
        if had_scan && token.is_null() {
            AbiMetrics::inc(&global_metrics().tokenizer_resets);
        }
        token
    }
}

abi_fn! {
    /// BSD `strsep`: returns the field at `*string_ptr`, possibly empty, and
    /// advances `*string_ptr` past the delimiter that ended it (to null after
    /// the last field).
    fn strsep(string_ptr: *mut *mut c_char, delim: *const c_char) -> *mut c_char {
        let start = *string_ptr;
        if start.is_null() {
            return ptr::null_mut();
        }
        match core_string::strsep(c_str_mut(start), c_str(delim), Some(0)) {
            Some((_, _, next)) => {
                *string_ptr = match next {
                    Some(offset) => start.add(offset),
                    None => ptr::null_mut(),
                };
                start
            }
            None => {
                *string_ptr = ptr::null_mut();
                ptr::null_mut()
            }
        }
    }
}
