//! AVX2/FMA intrinsic kernel for x86_64.
//!
//! The kernel is only reachable after [`is_supported`] confirms `avx2` and
//! `fma` at runtime; on other CPUs or architectures the dispatcher in
//! [`super::Strategy::run`] takes the scalar kernel.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Number of `f32` lanes in one 256-bit register
pub const LANES: usize = 8;

/// Returns `true` when the host CPU can execute the intrinsic kernel
#[cfg(target_arch = "x86_64")]
pub fn is_supported() -> bool {
    is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
}

/// Always `false` off x86_64
#[cfg(not(target_arch = "x86_64"))]
pub fn is_supported() -> bool {
    false
}

/// Compute `v*v + v` with `_mm256_fmadd_ps`, eight floats per iteration
///
/// Lengths that are not a multiple of [`LANES`] finish with a scalar
/// remainder loop. Callers must have checked [`is_supported`] and that the
/// slices have equal length.
#[cfg(target_arch = "x86_64")]
pub fn fma(input: &[f32], output: &mut [f32]) {
    debug_assert!(is_supported());
    debug_assert_eq!(input.len(), output.len());

    // SAFETY: the avx2 and fma features were verified at runtime above.
    unsafe { fma_fmadd(input, output) }
}

/// Fallback stub so the dispatcher compiles on other architectures; never
/// selected because [`is_supported`] is `false` there
#[cfg(not(target_arch = "x86_64"))]
pub fn fma(input: &[f32], output: &mut [f32]) {
    super::fma_scalar(input, output)
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
unsafe fn fma_fmadd(input: &[f32], output: &mut [f32]) {
    let len = input.len();
    let chunks = len / LANES;

    for i in 0..chunks {
        let offset = i * LANES;
        let v = _mm256_loadu_ps(input.as_ptr().add(offset));
        let res = _mm256_fmadd_ps(v, v, v);
        _mm256_storeu_ps(output.as_mut_ptr().add(offset), res);
    }

    // Scalar tail for the remainder, fused like the vector body
    for i in chunks * LANES..len {
        output[i] = input[i].mul_add(input[i], input[i]);
    }
}
