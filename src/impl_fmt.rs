//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;


macro_rules! impl_fmt_radix {
    ($trait:ident, $base:literal, $prefix:literal) => {
        impl fmt::$trait for Integer {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let magnitude = self.magnitude_string($base)?;
                f.pad_integral(!self.is_negative(), $prefix, &magnitude)
            }
        }
    };
}

impl_fmt_radix!(Display, 10, "");
impl_fmt_radix!(Binary, 2, "0b");
impl_fmt_radix!(Octal, 8, "0o");
impl_fmt_radix!(LowerHex, 16, "0x");

impl fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.magnitude_string(16)?.to_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &magnitude)
    }
}
