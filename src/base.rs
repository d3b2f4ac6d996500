//! Validation of token bases and detection of base prefixes

use crate::Error;


/// Smallest supported token base
pub const MIN_BASE: u32 = 2;

/// Largest supported token base
pub const MAX_BASE: u32 = 64;

/// Largest base in which a leading `+` or `-` is read as a sign
///
/// Base 63 and above use `+` as a token.
pub const MAX_SIGNED_BASE: u32 = 62;


/// Return error if base is not in `[MIN_BASE, MAX_BASE]`
pub fn ensure_base_supported(base: u32) -> Result<(), Error> {
    if base < MIN_BASE || base > MAX_BASE {
        return Err(Error::InvalidArgument(format!(
            "base {} is not supported (must be within {}..={})", base, MIN_BASE, MAX_BASE
        )));
    }
    Ok(())
}


/// Base implied by the leading characters of a token string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BasePrefix {
    /// Number of leading characters making up the prefix (0, 1, or 2)
    pub prefix_length: usize,
    /// Detected base (2, 8, 10, or 16)
    pub base: u32,
}

impl BasePrefix {
    const DECIMAL: BasePrefix = BasePrefix { prefix_length: 0, base: 10 };
    const OCTAL: BasePrefix = BasePrefix { prefix_length: 1, base: 8 };
    const BINARY: BasePrefix = BasePrefix { prefix_length: 2, base: 2 };
    const HEXADECIMAL: BasePrefix = BasePrefix { prefix_length: 2, base: 16 };
}

/// Detect `0b`, `0x`, or `0` prefix in first two tokens
///
/// Anything else (including an empty string or a lone `0`) is decimal.
///
pub fn base_prefix_from_string(tokens: &[u8]) -> BasePrefix {
    match tokens {
        [b'0', second, ..] => match second | 0x20 {
            b'b' => BasePrefix::BINARY,
            b'x' => BasePrefix::HEXADECIMAL,
            _ => BasePrefix::OCTAL,
        },
        _ => BasePrefix::DECIMAL,
    }
}


#[cfg(test)]
mod test {
    use super::*;

    mod ensure_base_supported {
        use super::*;

        #[test]
        fn accepts_2_through_64() {
            for base in 2..=64 {
                assert!(ensure_base_supported(base).is_ok(), "{}", base);
            }
        }

        macro_rules! impl_case {
            ($name:ident: $base:literal) => {
                #[test]
                fn $name() {
                    let err = ensure_base_supported($base).unwrap_err();
                    assert!(matches!(err, Error::InvalidArgument(_)));
                }
            };
        }

        impl_case!(case_0: 0);
        impl_case!(case_1: 1);
        impl_case!(case_65: 65);
        impl_case!(case_256: 256);
    }

    mod base_prefix_from_string {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $input:literal => $len:literal, $base:literal) => {
                #[test]
                fn $name() {
                    let prefix = base_prefix_from_string($input);
                    assert_eq!(prefix, BasePrefix { prefix_length: $len, base: $base });
                }
            };
        }

        impl_case!(case_0x: b"0x" => 2, 16);
        impl_case!(case_0X1f: b"0X1f" => 2, 16);
        impl_case!(case_0b101: b"0b101" => 2, 2);
        impl_case!(case_0B1: b"0B1" => 2, 2);
        impl_case!(case_017: b"017" => 1, 8);
        impl_case!(case_00: b"00" => 1, 8);
        impl_case!(case_0: b"0" => 0, 10);
        impl_case!(case_empty: b"" => 0, 10);
        impl_case!(case_123: b"123" => 0, 10);
        impl_case!(case_x0: b"x0" => 0, 10);
    }
}
