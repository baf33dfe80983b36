//! String and memory operations.
//!
//! Implements the `<string.h>` subset the kernel uses, as safe Rust over
//! byte slices.

pub mod mem;
pub mod str;
pub mod strtok;

pub use mem::{memchr, memclr, memcmp, memcpy, memmove, memset};
pub use str::{
    strcat, strchr, strcmp, strcpy, strlen, strncat, strncmp, strncpy, try_strcat, try_strcpy,
};
pub use strtok::{strsep, strtok_r};
