//! Integer limits (`<limits.h>`).
//!
//! `long` follows the target data model: 64 bits on LP64 targets, 32 bits
//! otherwise. Parsing routines that saturate pick their bounds from a
//! [`LongWidth`].

pub const CHAR_BIT: u32 = 8;

pub const SCHAR_MAX: i8 = i8::MAX;
pub const SCHAR_MIN: i8 = i8::MIN;
pub const UCHAR_MAX: u8 = u8::MAX;

pub const SHRT_MAX: i16 = i16::MAX;
pub const SHRT_MIN: i16 = i16::MIN;
pub const USHRT_MAX: u16 = u16::MAX;

pub const INT_MAX: i32 = i32::MAX;
pub const INT_MIN: i32 = i32::MIN;
pub const UINT_MAX: u32 = u32::MAX;

pub const LONG_MAX: i64 = LongWidth::NATIVE.signed_max();
pub const LONG_MIN: i64 = LongWidth::NATIVE.signed_min();
pub const ULONG_MAX: u64 = LongWidth::NATIVE.unsigned_max();

/// Bit width of the `long` a conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongWidth {
    /// ILP32: `long` is 32 bits.
    Bits32,
    /// LP64: `long` is 64 bits.
    Bits64,
}

impl LongWidth {
    /// Width of `long` on the compilation target.
    #[cfg(target_pointer_width = "64")]
    pub const NATIVE: Self = Self::Bits64;
    #[cfg(not(target_pointer_width = "64"))]
    pub const NATIVE: Self = Self::Bits32;

    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    #[must_use]
    pub const fn signed_max(self) -> i64 {
        match self {
            Self::Bits32 => i32::MAX as i64,
            Self::Bits64 => i64::MAX,
        }
    }

    #[must_use]
    pub const fn signed_min(self) -> i64 {
        match self {
            Self::Bits32 => i32::MIN as i64,
            Self::Bits64 => i64::MIN,
        }
    }

    #[must_use]
    pub const fn unsigned_max(self) -> u64 {
        match self {
            Self::Bits32 => u32::MAX as u64,
            Self::Bits64 => u64::MAX,
        }
    }
}
