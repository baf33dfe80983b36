//! Helper macros for ABI function generation.

/// Generate an `extern "C"` entry point, unmangled under `export-symbols`.
///
/// # Usage
///
/// ```ignore
/// abi_fn! {
///     /// Doc comment for the function.
///     fn my_func(arg1: Type1, arg2: Type2) -> ReturnType {
///         // body; raw pointer operations need no extra `unsafe` block
///     }
/// }
/// ```
macro_rules! abi_fn {
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? ) -> $ret:ty
        $body:block
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
        #[allow(unused_unsafe)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) -> $ret {
            unsafe { $body }
        }
    };
}

/// Generate `<ctype.h>` entry points from core predicates and mappings.
///
/// Arguments outside `0..=255` (including `EOF`) classify as false and map
/// to themselves.
macro_rules! ctype_fns {
    (
        classify { $($cname:ident => $pred:path),* $(,)? }
        convert { $($mname:ident => $map:path),* $(,)? }
    ) => {
        $(
            #[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
            pub extern "C" fn $cname(c: c_int) -> c_int {
                match u8::try_from(c) {
                    Ok(byte) => c_int::from($pred(byte)),
                    Err(_) => 0,
                }
            }
        )*
        $(
            #[cfg_attr(feature = "export-symbols", unsafe(no_mangle))]
            pub extern "C" fn $mname(c: c_int) -> c_int {
                match u8::try_from(c) {
                    Ok(byte) => c_int::from($map(byte)),
                    Err(_) => c,
                }
            }
        )*
    };
}
