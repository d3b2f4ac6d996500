//! Conversions between digit vectors and native values
//!
//! * [`integral`]: native unsigned integers (at most two digits)
//! * [`floating`]: `f32` and `f64`
//! * [`string`]: base 2 to 64 token strings
//!

pub mod integral;
pub mod floating;
pub mod string;

pub use self::integral::{digits_from_integral, integral_from_digits};
pub use self::floating::{digits_from_floating_point, floating_point_from_digits};
pub use self::string::{digits_from_string, string_from_digits, token_values_from_digits};
