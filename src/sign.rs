//! Three-valued sign of an Integer

use crate::stdlib::ops::{Mul, MulAssign, Neg};


/// Sign of an [`Integer`](crate::Integer), stored apart from its magnitude
///
/// Ordered `Negative < Zero < Positive`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    /// Negate: swaps Negative and Positive, Zero is fixed
    #[inline]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Algebraic product of two signs
    #[inline]
    pub fn compose(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }

    /// -1, 0, or 1
    #[inline]
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

impl Default for Sign {
    fn default() -> Sign {
        Sign::Zero
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        self.flip()
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        self.compose(other)
    }
}

impl MulAssign for Sign {
    #[inline]
    fn mul_assign(&mut self, other: Sign) {
        *self = self.compose(other);
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use super::Sign::*;

    macro_rules! impl_case {
        ($name:ident: $a:ident * $b:ident => $c:ident) => {
            #[test]
            fn $name() {
                assert_eq!($a * $b, $c);
                assert_eq!($b * $a, $c);
                assert_eq!($a.compose($b), $c);

                let mut s = $a;
                s *= $b;
                assert_eq!(s, $c);
            }
        };
    }

    impl_case!(case_neg_neg: Negative * Negative => Positive);
    impl_case!(case_neg_pos: Negative * Positive => Negative);
    impl_case!(case_pos_pos: Positive * Positive => Positive);
    impl_case!(case_neg_zero: Negative * Zero => Zero);
    impl_case!(case_pos_zero: Positive * Zero => Zero);
    impl_case!(case_zero_zero: Zero * Zero => Zero);

    #[test]
    fn negation() {
        assert_eq!(-Negative, Positive);
        assert_eq!(-Positive, Negative);
        assert_eq!(-Zero, Zero);
        assert_eq!(Positive.flip().flip(), Positive);
    }

    #[test]
    fn ordering() {
        assert!(Negative < Zero);
        assert!(Zero < Positive);
        assert_eq!(Negative.as_i8(), -1);
        assert_eq!(Positive.as_i8(), 1);
    }
}
