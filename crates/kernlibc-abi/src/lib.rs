// Every entry point takes raw pointers straight from C callers; the shared
// contract is stated once per module instead of on each function.
#![allow(clippy::missing_safety_doc)]
//! # kernlibc-abi
//!
//! `extern "C"` boundary for the kernel libc.
//!
//! Each function converts its raw pointers into slices of the extent the C
//! contract promises and delegates to the safe implementations in
//! `kernlibc-core`. The memory primitives are the exception: they are plain
//! byte loops, because the slice methods core uses lower to calls to these
//! very symbols.
//!
//! ```text
//! kernel C code -> entry point (this crate) -> kernlibc-core -> return
//! ```
//!
//! With the `export-symbols` feature the functions carry their C names
//! unmangled. Without it they are ordinary Rust items with the C calling
//! convention, which is what host tests and benchmarks link against.

#![cfg_attr(not(test), no_std)]
// Keep LLVM from turning the mem* loops back into calls to themselves.
#![no_builtins]

#[macro_use]
mod macros;

mod util;

pub mod ctype_abi;
pub mod metrics;
pub mod stdio_abi;
pub mod stdlib_abi;
pub mod string_abi;
