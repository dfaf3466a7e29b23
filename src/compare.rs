//! Cross-checks the result buffers produced by the three strategies.
//!
//! An index counts as mismatched unless all three values agree pairwise
//! within the configured tolerance. NaN never agrees with anything,
//! including itself.

use crate::error::{Error, Result};

/// Outcome of walking three result buffers index by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MismatchSummary {
    /// Number of indices where the three results do not agree pairwise
    pub mismatches: usize,
    /// Total number of indices compared
    pub total: usize,
}

/// Returns `true` when `a` and `b` differ by at most `tolerance`
///
/// NaN on either side makes the pair not-close in both directions.
pub fn close_within(a: f32, b: f32, tolerance: f32) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() <= tolerance
}

/// Count the indices at which the three outputs fail to agree pairwise
///
/// All three slices must have the same length. Mismatching indices are
/// logged at debug level with the three values.
pub fn compare_outputs(
    scalar: &[f32],
    avx2: &[f32],
    portable: &[f32],
    tolerance: f32,
) -> Result<MismatchSummary> {
    if avx2.len() != scalar.len() {
        return Err(Error::length_mismatch(scalar.len(), avx2.len()));
    }
    if portable.len() != scalar.len() {
        return Err(Error::length_mismatch(scalar.len(), portable.len()));
    }

    let mut mismatches = 0;
    for (i, ((&s, &a), &p)) in scalar.iter().zip(avx2).zip(portable).enumerate() {
        let agree = close_within(s, a, tolerance)
            && close_within(s, p, tolerance)
            && close_within(a, p, tolerance);
        if !agree {
            log::debug!(
                "mismatch at index {}: scalar={} avx2={} portable={}",
                i,
                s,
                a,
                p
            );
            mismatches += 1;
        }
    }

    Ok(MismatchSummary {
        mismatches,
        total: scalar.len(),
    })
}
