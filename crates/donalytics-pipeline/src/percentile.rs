//! Nearest-rank percentile and round-half-up.
//!
//! The rank for percentile `p` over `n` values is `p/100 * n` rounded half
//! up and clamped into `1..=n`. It is computed in integers as
//! `(p * n + 50) / 100`, which is exactly round-half-up of the rational
//! `p * n / 100` with no floating-point error.

use donalytics_core::{Decimal, Percentile};

/// 1-based nearest rank for `percentile` over `count` values.
///
/// Returns `None` when `count` is zero.
///
/// # Examples
///
/// ```
/// use donalytics_core::{Decimal, Percentile};
/// use donalytics_pipeline::percentile::nearest_rank;
///
/// let p50 = Percentile::new(50).unwrap();
/// assert_eq!(nearest_rank(p50, 3), Some(2));
/// assert_eq!(nearest_rank(Percentile::new(0).unwrap(), 3), Some(1));
/// ```
pub fn nearest_rank(percentile: Percentile, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let scaled = u128::from(percentile.get()) * count as u128 + 50;
    let rank = usize::try_from(scaled / 100).unwrap_or(count);
    Some(rank.clamp(1, count))
}

/// Value at the nearest rank of an already sorted slice.
pub fn percentile_of_sorted(sorted: &[Decimal], percentile: Percentile) -> Option<Decimal> {
    let rank = nearest_rank(percentile, sorted.len())?;
    sorted.get(rank - 1).copied()
}

/// Nearest-rank percentile of values in any order.
///
/// The values are sorted into a scratch copy before ranking. Returns `None`
/// for an empty slice.
pub fn nearest_rank_percentile(values: &[Decimal], percentile: Percentile) -> Option<Decimal> {
    let mut sorted = values.to_vec();
    sorted.sort();
    percentile_of_sorted(&sorted, percentile)
}

/// Rounds to a whole number with halves going up.
///
/// Takes `floor(x)`; if the fractional remainder `x - floor(x)` is below
/// one half the floor is kept, otherwise `ceil(x)` is used. So `2.5 -> 3`,
/// `2.4 -> 2`, and `-0.5 -> 0` (never banker's rounding). The result is
/// exact and normalized, so it displays without a fractional part.
pub fn round_half_up(x: Decimal) -> Decimal {
    let floor = x.floor();
    let rounded = if x - floor < Decimal::new(5, 1) {
        floor
    } else {
        x.ceil()
    };
    rounded.normalize()
}
