//! Portable SIMD kernel built on `wide::f32x8`.
//!
//! `wide` picks the widest instruction set the compilation target offers
//! (AVX2/SSE on x86_64, NEON on aarch64, scalar otherwise), so this kernel
//! runs everywhere without feature detection.

use wide::f32x8;

/// Number of `f32` lanes in one batch
pub const LANES: usize = 8;

/// Compute `v*v + v` in eight-lane batches with a fused multiply-add
///
/// Lengths that are not a multiple of [`LANES`] finish with a scalar
/// remainder loop. Callers must have checked that the slices have equal
/// length.
pub fn fma(input: &[f32], output: &mut [f32]) {
    debug_assert_eq!(input.len(), output.len());

    let len = input.len();
    let chunks = len / LANES;

    for i in 0..chunks {
        let offset = i * LANES;
        let v = f32x8::from(&input[offset..offset + LANES]);
        let res = v.mul_add(v, v);
        output[offset..offset + LANES].copy_from_slice(&res.to_array());
    }

    // Scalar tail for the remainder, fused like the vector body
    for i in chunks * LANES..len {
        output[i] = input[i].mul_add(input[i], input[i]);
    }
}
