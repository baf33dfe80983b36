//! ABI layer for the numeric conversions of `<stdlib.h>`.
//!
//! There is no `errno` in the kernel: saturation is visible only through
//! the returned limit value and the `conversion_saturations` counter.

use core::ffi::{c_char, c_int, c_long, c_ulong};
use core::ptr;

use kernlibc_core::stdlib::{self as core_stdlib, ConversionStatus};

use crate::metrics::{AbiMetrics, global_metrics};
use crate::util::c_str;

/// Longest `itoa` rendering of an `int`: 32 binary digits, a sign and NUL.
const ITOA_MAX: usize = 34;

fn note_status(status: ConversionStatus) {
    if matches!(status, ConversionStatus::Overflow | ConversionStatus::Underflow) {
        AbiMetrics::inc(&global_metrics().conversion_saturations);
    }
}

abi_fn! {
    /// C `atoi`: decimal parse with no error reporting.
    fn atoi(s: *const c_char) -> c_int {
        core_stdlib::atoi(c_str(s))
    }
}

abi_fn! {
    /// Renders `value` in `base` (2 to 36, digits `0-9a-z`) into `buf`,
    /// NUL-terminated.
    ///
    /// `buf` must hold the rendering: up to 34 bytes for base 2. An invalid
    /// base leaves `buf` untouched and returns null; otherwise returns `buf`.
    fn itoa(value: c_int, buf: *mut c_char, base: c_int) -> *mut c_char {
        let Ok(base) = u32::try_from(base) else {
            return ptr::null_mut();
        };
        let mut text = [0u8; ITOA_MAX];
        match core_stdlib::itoa(i64::from(value), base, &mut text) {
            Some(len) => {
                ptr::copy_nonoverlapping(text.as_ptr(), buf.cast::<u8>(), len + 1);
                buf
            }
            None => ptr::null_mut(),
        }
    }
}

abi_fn! {
    /// C `strtol` at the native `long` width.
    ///
    /// When `endptr` is non-null it receives the first unparsed byte, or
    /// `nptr` itself when no digits were found.
    fn strtol(nptr: *const c_char, endptr: *mut *mut c_char, base: c_int) -> c_long {
        let (value, consumed, status) = core_stdlib::strtol_impl(c_str(nptr), base);
        note_status(status);
        if !endptr.is_null() {
            *endptr = nptr.add(consumed).cast_mut();
        }
        value as c_long
    }
}

abi_fn! {
    /// C `strtoul` at the native `long` width. A leading `-` negates the
    /// magnitude modulo `ULONG_MAX + 1`.
    fn strtoul(nptr: *const c_char, endptr: *mut *mut c_char, base: c_int) -> c_ulong {
        let (value, consumed, status) = core_stdlib::strtoul_impl(c_str(nptr), base);
        note_status(status);
        if !endptr.is_null() {
            *endptr = nptr.add(consumed).cast_mut();
        }
        value as c_ulong
    }
}
