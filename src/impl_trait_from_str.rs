use crate::*;
use stdlib::str::FromStr;

impl FromStr for Integer {
    type Err = Error;

    /// Parse with base detected from a `0b`, `0x`, or `0` prefix
    #[inline]
    fn from_str(s: &str) -> Result<Integer, Error> {
        Integer::from_str_radix(s, 0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $sign:ident [$($digits:expr),*]) => {
            #[test]
            fn $name() {
                let n = Integer::from_str($input).unwrap();
                assert_eq!(n.sign(), Sign::$sign);
                assert_eq!(n.magnitude(), &[$($digits),*]);
            }
        };
    }

    impl_case!(case_0: "0" => Zero [0]);
    impl_case!(case_n0: "-0" => Zero [0]);
    impl_case!(case_000: "000" => Zero [0]);
    impl_case!(case_123: "123" => Positive [123]);
    impl_case!(case_p123: "+123" => Positive [123]);
    impl_case!(case_n123: "-123" => Negative [123]);
    impl_case!(case_0x1f: "0x1f" => Positive [31]);
    impl_case!(case_0x1F: "0X1F" => Positive [31]);
    impl_case!(case_n0xff: "-0xff" => Negative [255]);
    impl_case!(case_0b101: "0b101" => Positive [5]);
    impl_case!(case_0_17: "017" => Positive [15]);
    impl_case!(case_2p64: "18446744073709551616" => Positive [0, 1]);
    impl_case!(case_0x_2p128: "0x100000000000000000000000000000000" => Positive [0, 0, 1]);
    impl_case!(case_n_u64_max: "-18446744073709551615" => Negative [18446744073709551615]);
}


#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            fn $name() {
                let err = Integer::from_str($input).unwrap_err();
                assert_eq!(err, Error::InvalidArgument($exp.to_string()));
            }
        };
    }

    impl_case!(case_empty: "" => "cannot parse empty token string");
    impl_case!(case_only_sign: "-" => "cannot parse empty token string");
    impl_case!(case_only_prefix: "0x" => "cannot parse empty token string");
    impl_case!(case_bad_token: "12?3" => "invalid token '?' for base 10");
    impl_case!(case_bad_octal: "019" => "invalid token '9' for base 8");
    impl_case!(case_bad_binary: "0b102" => "invalid token '2' for base 2");
    impl_case!(case_double_sign: "--1" => "invalid token '-' for base 10");
    impl_case!(case_decimal_point: "1.5" => "invalid token '.' for base 10");
    impl_case!(case_whitespace: " 1" => "invalid token ' ' for base 10");
}
