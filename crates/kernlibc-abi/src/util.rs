//! Raw C string helpers shared by the entry points.

use core::ffi::c_char;
use core::slice;

/// Length of the NUL-terminated string at `s`.
///
/// # Safety
///
/// `s` must point to a readable NUL-terminated string.
pub(crate) unsafe fn c_strlen(s: *const c_char) -> usize {
    let mut n = 0;
    while unsafe { *s.add(n) } != 0 {
        n += 1;
    }
    n
}

/// Length of the string at `s`, looking at no more than `max` bytes.
///
/// # Safety
///
/// `s` must be readable up to its terminator or `max` bytes, whichever
/// comes first.
pub(crate) unsafe fn c_strnlen(s: *const c_char, max: usize) -> usize {
    let mut n = 0;
    while n < max && unsafe { *s.add(n) } != 0 {
        n += 1;
    }
    n
}

/// The string at `s` as a byte slice, terminator included.
///
/// # Safety
///
/// Same as [`c_strlen`]; the string must outlive `'a` and not be written
/// through another pointer meanwhile.
pub(crate) unsafe fn c_str<'a>(s: *const c_char) -> &'a [u8] {
    unsafe { slice::from_raw_parts(s.cast::<u8>(), c_strlen(s) + 1) }
}

/// Mutable view of the string at `s`, terminator included.
///
/// # Safety
///
/// Same as [`c_str`], plus `s` must be writable and not aliased.
pub(crate) unsafe fn c_str_mut<'a>(s: *mut c_char) -> &'a mut [u8] {
    unsafe { slice::from_raw_parts_mut(s.cast::<u8>(), c_strlen(s) + 1) }
}
