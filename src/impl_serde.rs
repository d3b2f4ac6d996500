//!
//! Support for serde implementations
//!
//! Integers serialize as decimal strings. Deserialization also accepts
//! native integers and floats (truncated toward zero).
//!
use crate::*;
use serde_crate::{de, ser};
use stdlib::convert::TryFrom;
use stdlib::str::FromStr;


impl ser::Serialize for Integer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct an Integer
struct IntegerVisitor;

impl<'de> de::Visitor<'de> for IntegerVisitor {
    type Value = Integer;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or formatted integer string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Integer, E>
    where
        E: de::Error,
    {
        Integer::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Integer, E>
    where
        E: de::Error,
    {
        Ok(Integer::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Integer, E>
    where
        E: de::Error,
    {
        Ok(Integer::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Integer, E>
    where
        E: de::Error,
    {
        Ok(Integer::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Integer, E>
    where
        E: de::Error,
    {
        Ok(Integer::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Integer, E>
    where
        E: de::Error,
    {
        Integer::try_from(value).map_err(|err| E::custom(format!("{}", err)))
    }
}

impl<'de> de::Deserialize<'de> for Integer {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(IntegerVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let n: Integer = $input.parse().unwrap();
                    assert_tokens(&n, &[expected]);
                }
            }
        }

        impl_case!(case_0: "0" => "0");
        impl_case!(case_50: "50" => "50");
        impl_case!(case_n50: "-50" => "-50");
        impl_case!(case_0xff: "0xff" => "255");
        impl_case!(case_2p64: "18446744073709551616" => "18446744073709551616");
        impl_case!(case_n2p128: "-340282366920938463463374607431768211456" => "-340282366920938463463374607431768211456");
    }

    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ : -$input:literal ) => {
                $( paste! { impl_case!([< case_n $input _ $ttype:lower >] : $ttype : -$input); } )*
            };
            ( $( $ttype:ident ),+ : $input:literal ) => {
                $( paste! { impl_case!([< case_ $input _ $ttype:lower >] : $ttype : $input); } )*
            };
            ($name:ident : $type:ident : $input:literal) => {
                #[test]
                fn $name() {
                    let expected = Integer::from($input);
                    let token = Token::$type($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 0);
        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 1);
        impl_case!(I8, I16, I32, I64 : -1);
        impl_case!(I64: -99999999999i64);
        impl_case!(I64: -9_223_372_036_854_775_808i64);
        impl_case!(U64: 18_446_744_073_709_551_615u64);
    }

    mod serde_deserialize_float {
        use super::*;

        macro_rules! impl_case {
            ( $name:ident : $input:literal => $ttype:ident : $expected:literal ) => {
                paste! {
                    #[test]
                    fn [< $name _ $ttype:lower >]() {
                        let expected: Integer = $expected.parse().unwrap();
                        let token = Token::$ttype($input);
                        assert_de_tokens(&expected, &[token]);
                    }
                }
            };
            ( $name:ident : $input:literal => $( $ttype:ident ),+ : $expected:literal ) => {
                $( impl_case!($name : $input => $ttype : $expected); )*
            };
        }

        impl_case!(case_1d0 : 1.0 => F32, F64 : "1");
        impl_case!(case_1d9 : 1.9 => F32, F64 : "1");
        impl_case!(case_n2d5 : -2.5 => F32, F64 : "-2");
        impl_case!(case_0d1 : 0.1 => F32, F64 : "0");
        impl_case!(case_1e20 : 1e20 => F64 : "100000000000000000000");
        impl_case!(case_2p64 : 18446744073709551616.0 => F32, F64 : "18446744073709551616");
    }

    #[test]
    fn deserialize_invalid_str() {
        assert_de_tokens_error::<Integer>(&[Token::Str("12?")], "invalid token '?' for base 10");
        assert_de_tokens_error::<Integer>(&[Token::Str("")], "cannot parse empty token string");
    }

    #[test]
    fn deserialize_nan() {
        assert_de_tokens_error::<Integer>(
            &[Token::F64(f64::NAN)],
            "cannot convert non-finite floating point value to digits",
        );
    }
}
