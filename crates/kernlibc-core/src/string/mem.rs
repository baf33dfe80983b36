//! Memory operations: memcpy, memmove, memset, memclr, memcmp, memchr.
//!
//! Safe counterparts of the raw `mem*` primitives. Every length is clamped to
//! the slices involved, so none of these can index out of bounds.

use core::cmp::Ordering;

/// Copies `n` bytes from `src` to `dest`.
///
/// Equivalent to C `memcpy`. Distinct slices cannot overlap; use [`memmove`]
/// to shift bytes inside one buffer. Only copies `min(n, src.len(),
/// dest.len())` bytes.
///
/// Returns the number of bytes actually copied.
pub fn memcpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let count = n.min(dest.len()).min(src.len());
    dest[..count].copy_from_slice(&src[..count]);
    count
}

/// Moves `n` bytes inside `buf` from offset `src` to offset `dst`.
///
/// Equivalent to C `memmove` where both pointers lie in the same object. The
/// copy direction is chosen from the offsets (backward when `dst > src`,
/// forward otherwise), so overlapping ranges come out as if copied through a
/// temporary, with no scratch storage.
///
/// `n` is clamped so that neither range runs past the end of `buf`.
/// Returns the number of bytes moved.
pub fn memmove(buf: &mut [u8], dst: usize, src: usize, n: usize) -> usize {
    let len = buf.len();
    if dst >= len || src >= len {
        return 0;
    }
    let count = n.min(len - dst).min(len - src);

    if dst > src {
        for i in (0..count).rev() {
            buf[dst + i] = buf[src + i];
        }
    } else if dst < src {
        for i in 0..count {
            buf[dst + i] = buf[src + i];
        }
    }
    count
}

/// Fills the first `n` bytes of `dest` with `value`.
///
/// Equivalent to C `memset`. A zero fill goes through [`memclr`].
///
/// Returns the number of bytes written.
pub fn memset(dest: &mut [u8], value: u8, n: usize) -> usize {
    if value == 0 {
        return memclr(dest, n);
    }
    let count = n.min(dest.len());
    for byte in &mut dest[..count] {
        *byte = value;
    }
    count
}

/// Zeroes the first `n` bytes of `dest`.
///
/// Returns the number of bytes cleared.
pub fn memclr(dest: &mut [u8], n: usize) -> usize {
    let count = n.min(dest.len());
    dest[..count].fill(0);
    count
}

/// Compares the first `n` bytes of `a` and `b` as unsigned bytes.
///
/// Equivalent to C `memcmp`; the ordering is that of the first differing
/// byte. Only `min(n, a.len(), b.len())` bytes are compared.
pub fn memcmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    let count = n.min(a.len()).min(b.len());
    for (x, y) in a[..count].iter().zip(&b[..count]) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

/// Index of the first `needle` byte within the first `n` bytes of `haystack`.
///
/// Equivalent to C `memchr`.
pub fn memchr(haystack: &[u8], needle: u8, n: usize) -> Option<usize> {
    let count = n.min(haystack.len());
    haystack[..count].iter().position(|&b| b == needle)
}
