//! Perceptual pixel-difference table.
//!
//! One table entry per signed channel delta, indexed by `256 + delta` for
//! deltas in `-256..=255`. The curve is a normalized log-Cauchy shape that
//! rises from `0` at a delta of zero to `65536` at the extremes, so a few
//! strong outliers cost less than a broad mismatch. Scaling by `65536`
//! keeps the entries integer-valued with 16 bits of resolution.
use crate::error::SynthError;

use num_traits::ToPrimitive;

/// Number of entries in the difference table.
pub(crate) const DIFF_TABLE_LEN: usize = 512;

/// Build the channel-delta penalty table for the given sensitivity.
///
/// `autism` of `0` degenerates to a discrete table: `0` for an exact match
/// and the maximum penalty for everything else.
pub(crate) fn build_diff_table(autism: f64) -> Result<Vec<i32>, SynthError> {
    let mut table = Vec::new();
    table.try_reserve_exact(DIFF_TABLE_LEN)?;

    if autism > 0.0 {
        let norm = ((1.0 / autism).powi(2) + 1.0).ln();
        for delta in -256_i32..256 {
            let x = f64::from(delta) / 256.0 / autism;
            let entry = ((x.powi(2) + 1.0).ln() / norm * 65536.0)
                .round()
                .to_i32()
                .ok_or("Difference table entry out of range")?;
            table.push(entry);
        }
    } else {
        for delta in -256_i32..256 {
            table.push(if delta == 0 { 0 } else { 65536 });
        }
    }

    Ok(table)
}
