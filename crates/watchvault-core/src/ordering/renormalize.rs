use super::{sort_by_position, OrderingError, Positioned};
use crate::types::PositionUpdate;

/// Smallest gap between adjacent positions, or `None` with fewer than two items.
pub fn min_adjacent_gap<T: Positioned>(items: &[T]) -> Option<f64> {
    let mut positions: Vec<f64> = items.iter().map(Positioned::position).collect();
    positions.sort_by(f64::total_cmp);
    positions
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .min_by(f64::total_cmp)
}

/// Whether any two adjacent positions are closer than `min_gap`.
///
/// Equal positions (a gap of zero) always qualify: their order is no longer
/// determined by position alone.
pub fn needs_renormalization<T: Positioned>(items: &[T], min_gap: f64) -> bool {
    match min_adjacent_gap(items) {
        Some(gap) => gap <= 0.0 || gap < min_gap,
        None => false,
    }
}

/// Plan fresh positions `0, stride, 2 * stride, …` in current order.
///
/// Only items whose position actually changes appear in the plan, so an
/// already-normalized collection produces no writes. Nothing is applied;
/// persist the plan and feed it to [`super::apply_updates`].
pub fn renormalize<T: Positioned + Clone>(
    items: &[T],
    stride: f64,
) -> Result<Vec<PositionUpdate>, OrderingError> {
    if !stride.is_finite() || stride <= 0.0 {
        return Err(OrderingError::InvalidStride { stride });
    }

    let mut sorted = items.to_vec();
    sort_by_position(&mut sorted);

    Ok(sorted
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let position = index as f64 * stride;
            (item.position() != position).then(|| PositionUpdate {
                id: item.id().clone(),
                position,
            })
        })
        .collect())
}
