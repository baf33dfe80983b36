//! ABI layer for `<ctype.h>` character classification and conversion.
//!
//! Pure compute: no pointers, so these are safe to call. Each function
//! takes the C `int` argument, delegates to `kernlibc_core::ctype` for
//! values in `0..=255`, and treats anything else (`EOF` included) as
//! outside every class.

use core::ffi::c_int;

use kernlibc_core::ctype;

ctype_fns! {
    classify {
        isalnum => ctype::is_alnum,
        isalpha => ctype::is_alpha,
        isblank => ctype::is_blank,
        iscntrl => ctype::is_cntrl,
        isdigit => ctype::is_digit,
        isgraph => ctype::is_graph,
        islower => ctype::is_lower,
        isprint => ctype::is_print,
        ispunct => ctype::is_punct,
        isspace => ctype::is_space,
        isupper => ctype::is_upper,
        isxdigit => ctype::is_xdigit,
    }
    convert {
        tolower => ctype::to_lower,
        toupper => ctype::to_upper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_in_range() {
        assert_eq!(isalpha(c_int::from(b'q')), 1);
        assert_eq!(isdigit(c_int::from(b'q')), 0);
        assert_eq!(isspace(c_int::from(b'\t')), 1);
        assert_eq!(isxdigit(c_int::from(b'F')), 1);
    }

    #[test]
    fn eof_and_out_of_range() {
        assert_eq!(isalpha(-1), 0);
        assert_eq!(isprint(256), 0);
        assert_eq!(toupper(-1), -1);
        assert_eq!(tolower(300), 300);
    }

    #[test]
    fn case_mapping() {
        assert_eq!(toupper(c_int::from(b'a')), c_int::from(b'A'));
        assert_eq!(tolower(c_int::from(b'Z')), c_int::from(b'z'));
        assert_eq!(toupper(c_int::from(b'1')), c_int::from(b'1'));
    }
}
