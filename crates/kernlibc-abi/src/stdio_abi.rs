//! ABI layer for bounded formatted output.
//!
//! Rust cannot define C-variadic functions on stable, so the entry point
//! takes its `%d` arguments as an array. A C-side `snprintf` macro or shim
//! packs the arguments and calls [`snprintf_args`].

use core::ffi::{c_char, c_int};
use core::slice;

use kernlibc_core::stdio::format_bounded;

use crate::metrics::{AbiMetrics, global_metrics};
use crate::util::c_str;

abi_fn! {
    /// Formats `format` into `out`, writing at most `capacity` bytes.
    ///
    /// Supports `%%` and `%d` only; `%d` directives consume `args[0..nargs]`
    /// in order. The output is truncated at `capacity` and never
    /// NUL-terminated. Returns the number of bytes written.
    ///
    /// `out` may be null only when `capacity` is zero, and `args` only when
    /// `nargs` is zero.
    fn snprintf_args(
        out: *mut c_char,
        capacity: usize,
        format: *const c_char,
        args: *const c_int,
        nargs: usize,
    ) -> c_int {
        let out: &mut [u8] = if out.is_null() || capacity == 0 {
            &mut []
        } else {
            slice::from_raw_parts_mut(out.cast::<u8>(), capacity)
        };
        let args: &[c_int] = if args.is_null() || nargs == 0 {
            &[]
        } else {
            slice::from_raw_parts(args, nargs)
        };

        let outcome = format_bounded(out, capacity, c_str(format), args);
        if outcome.truncated {
            AbiMetrics::inc(&global_metrics().format_truncations);
        }
        c_int::try_from(outcome.written).unwrap_or(c_int::MAX)
    }
}
