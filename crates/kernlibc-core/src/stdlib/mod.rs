//! Standard library utilities (`<stdlib.h>` subset): integer conversion.

pub mod conversion;

pub use conversion::{
    ConversionStatus, atoi, atol, itoa, strtol, strtol_impl, strtol_width, strtoul, strtoul_impl,
    strtoul_width,
};
