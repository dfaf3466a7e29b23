//! # Compute strategies
//!
//! Three interchangeable implementations of the same elementwise operation,
//! `output[i] = input[i] * input[i] + input[i]`:
//!
//! - [`Strategy::Scalar`]: one element per iteration.
//! - [`Strategy::Avx2`]: eight elements per iteration with 256-bit FMA
//!   intrinsics, selected only after runtime CPU feature detection.
//! - [`Strategy::Portable`]: eight-lane batches through the `wide` crate,
//!   which lowers to the best instruction set the target supports.
//!
//! All three are semantically equivalent up to floating-point rounding and
//! are driven through the same [`Strategy::run`] entry point.

pub mod avx2;
pub mod portable;

use crate::error::{Error, Result};

/// The closed set of kernel implementations under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Plain element-at-a-time loop, the reference implementation
    Scalar,
    /// Hand-written AVX2/FMA intrinsics with a scalar remainder loop
    Avx2,
    /// `wide::f32x8` batches with a scalar remainder loop
    Portable,
}

impl Strategy {
    /// Every strategy, in the order the benchmark runs them
    pub const ALL: [Strategy; 3] = [Strategy::Scalar, Strategy::Avx2, Strategy::Portable];

    /// Short label used in measurements and benchmark IDs
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Scalar => "scalar",
            Strategy::Avx2 => "avx2-intrinsic",
            Strategy::Portable => "portable-simd",
        }
    }

    /// Returns `true` when the strategy executes its native code path on
    /// this host rather than the scalar fallback
    pub fn is_supported(&self) -> bool {
        match self {
            Strategy::Avx2 => avx2::is_supported(),
            Strategy::Scalar | Strategy::Portable => true,
        }
    }

    /// Compute `output[i] = input[i] * input[i] + input[i]` for every index
    ///
    /// The buffers must have the same length; on success the output is
    /// fully overwritten. [`Strategy::Avx2`] silently takes the scalar
    /// kernel on CPUs without `avx2` and `fma`.
    pub fn run(&self, input: &[f32], output: &mut [f32]) -> Result<()> {
        if input.len() != output.len() {
            return Err(Error::length_mismatch(input.len(), output.len()));
        }

        match self {
            Strategy::Scalar => fma_scalar(input, output),
            Strategy::Avx2 => {
                if avx2::is_supported() {
                    avx2::fma(input, output);
                } else {
                    log::debug!("avx2/fma not detected, taking the scalar kernel instead");
                    fma_scalar(input, output);
                }
            }
            Strategy::Portable => portable::fma(input, output),
        }

        Ok(())
    }
}

/// Scalar reference kernel, one element per iteration
pub fn fma_scalar(input: &[f32], output: &mut [f32]) {
    for (out, &x) in output.iter_mut().zip(input) {
        *out = x * x + x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;
    use rstest::rstest;

    #[rstest]
    #[case::scalar(Strategy::Scalar)]
    #[case::avx2(Strategy::Avx2)]
    #[case::portable(Strategy::Portable)]
    fn test_fixed_vector(#[case] strategy: Strategy) -> Result<()> {
        let input = [0.5, 2.0, -1.0, 0.0];
        let mut output = [0.0f32; 4];
        strategy.run(&input, &mut output)?;
        assert_eq!(output, [0.75, 6.0, 0.0, 0.0]);
        Ok(())
    }

    #[rstest]
    #[case::avx2(Strategy::Avx2)]
    #[case::portable(Strategy::Portable)]
    fn test_agrees_with_scalar_on_random_data(#[case] strategy: Strategy) -> Result<()> {
        // Lengths straddling the 8-lane block width, including a tail
        for len in [0, 1, 7, 8, 11, 64, 1000, 1027] {
            let input = Vector::random_unit(len)?;
            let mut expected = Vector::zeroed(len)?;
            let mut actual = Vector::zeroed(len)?;

            fma_scalar(input.as_slice(), expected.as_mut_slice());
            strategy.run(input.as_slice(), actual.as_mut_slice())?;

            for (i, (e, a)) in expected
                .as_slice()
                .iter()
                .zip(actual.as_slice())
                .enumerate()
            {
                assert!(
                    (e - a).abs() <= 1e-6,
                    "len {} index {}: expected {}, got {}",
                    len,
                    i,
                    e,
                    a
                );
            }
        }
        Ok(())
    }

    #[rstest]
    #[case::scalar(Strategy::Scalar)]
    #[case::avx2(Strategy::Avx2)]
    #[case::portable(Strategy::Portable)]
    fn test_empty_input(#[case] strategy: Strategy) -> Result<()> {
        strategy.run(&[], &mut [])
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let input = [1.0f32; 8];
        let mut output = [0.0f32; 4];
        let err = Strategy::Scalar.run(&input, &mut output).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 8,
                actual: 4
            }
        ));
        // Nothing was written before the rejection
        assert_eq!(output, [0.0; 4]);
    }

    #[test]
    fn test_strategy_names_are_distinct() {
        let names: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 3);
        assert!(names.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_scalar_and_portable_always_supported() {
        assert!(Strategy::Scalar.is_supported());
        assert!(Strategy::Portable.is_supported());
    }
}
