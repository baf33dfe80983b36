//! # kernlibc-core
//!
//! Safe Rust implementations of the freestanding kernel C library.
//!
//! Every function operates on caller-owned byte slices: no allocation, no
//! locale, no floating point. The raw-pointer C surface lives in
//! `kernlibc-abi` and delegates here.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ctype;
pub mod limits;
pub mod stdio;
pub mod stdlib;
pub mod string;
