// \file src/context.rs

//! A `Context` object is the set of parameters that choose between
//! otherwise equivalent algorithms.
//!
//! Results never depend on the context, only the route taken to compute
//! them does.

use crate::stdlib::num::NonZeroUsize;

// const DEFAULT_DIVISION_THRESHOLD: usize = ${RUST_TASTYINT_DIVISION_THRESHOLD} or 96;
include!(concat!(env!("OUT_DIR"), "/default_division_threshold.rs"));


/// Parameters of arithmetic operations on digit vectors
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// Divisors with at least this many digits use divide-and-conquer
    /// division
    division_threshold: usize,
}

impl Context {
    /// Create context with given division threshold
    pub fn new(division_threshold: NonZeroUsize) -> Self {
        log::debug!("division threshold: {} digits", division_threshold);
        Self { division_threshold: division_threshold.get() }
    }

    /// Return copy of context with new division threshold
    ///
    /// A threshold of zero is treated as one.
    ///
    pub fn with_division_threshold(&self, division_threshold: usize) -> Self {
        log::debug!("division threshold: {} digits", division_threshold);
        Self { division_threshold: division_threshold.max(1) }
    }

    /// Minimum divisor length, in digits, for divide-and-conquer division
    pub fn division_threshold(&self) -> usize {
        self.division_threshold
    }
}

impl Default for Context {
    fn default() -> Self {
        Self { division_threshold: DEFAULT_DIVISION_THRESHOLD }
    }
}


#[cfg(test)]
mod test_context {
    use super::*;

    #[test]
    fn default_threshold() {
        let ctx = Context::default();
        assert_eq!(ctx.division_threshold(), DEFAULT_DIVISION_THRESHOLD);
        assert!(ctx.division_threshold() > 0);
    }

    #[test]
    fn default_threshold_above_crossover() {
        // divide-and-conquer only pays off for divisors past ~64 digits
        if option_env!("RUST_TASTYINT_DIVISION_THRESHOLD").is_none() {
            assert_eq!(DEFAULT_DIVISION_THRESHOLD, 96);
            assert!(Context::default().division_threshold() > 64);
        }
    }

    #[test]
    fn with_division_threshold() {
        let ctx = Context::default().with_division_threshold(100);
        assert_eq!(ctx.division_threshold(), 100);

        let ctx = ctx.with_division_threshold(0);
        assert_eq!(ctx.division_threshold(), 1);
    }

    #[test]
    fn new() {
        let threshold = NonZeroUsize::new(7).unwrap();
        assert_eq!(Context::new(threshold).division_threshold(), 7);
    }
}
