//! `place` and `renormalize`

use anyhow::{bail, Result};
use std::io::Write;
use watchvault_core::{
    apply_updates, compute_insert_position, needs_renormalization, renormalize as plan_renormalize,
    sort_by_position, OrderedItem, OrderingConfig,
};

/// Items named after their argument index, sorted by position.
///
/// NaN and infinities are rejected; they have no place in a total order of
/// real positions.
fn sorted_items(positions: &[f64]) -> Result<Vec<OrderedItem>> {
    if let Some((i, p)) = positions.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        bail!("Invalid position at argument {i}: {p}");
    }

    let mut items: Vec<OrderedItem> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| OrderedItem::new(format!("#{i}"), *p))
        .collect();
    sort_by_position(&mut items);
    Ok(items)
}

pub fn place(
    positions: &[f64],
    index: usize,
    config: &OrderingConfig,
    out: &mut impl Write,
) -> Result<()> {
    let mut items = sorted_items(positions)?;
    let position = compute_insert_position(&items, index)?;
    writeln!(out, "{position}")?;

    items.insert(index, OrderedItem::new("new", position));
    if needs_renormalization(&items, config.min_gap) {
        tracing::warn!(
            min_gap = config.min_gap,
            "Adjacent positions are too close; run `watchvault renormalize`"
        );
    }
    Ok(())
}

/// Prints the new position of every input, in argument order.
pub fn renormalize(positions: &[f64], config: &OrderingConfig, out: &mut impl Write) -> Result<()> {
    let mut items = sorted_items(positions)?;
    let plan = plan_renormalize(&items, config.renormalize_stride)?;
    tracing::debug!(changed = plan.len(), total = items.len(), "Planned renormalization");
    apply_updates(&mut items, &plan);

    let mut by_input = vec![0.0; positions.len()];
    for item in &items {
        if let Some(i) = item.id.as_str().strip_prefix('#').and_then(|s| s.parse::<usize>().ok()) {
            by_input[i] = item.position;
        }
    }
    for position in by_input {
        writeln!(out, "{position}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<Vec<String>> {
        let mut out = Vec::new();
        f(&mut out)?;
        Ok(String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect())
    }

    #[test]
    fn place_prints_midpoint() {
        let config = OrderingConfig::default();
        let printed = lines(|out| place(&[0.0, 1.0, 2.0, 3.0, 4.0], 3, &config, out)).unwrap();
        assert_eq!(printed, ["2.5"]);
    }

    #[test]
    fn place_sorts_unordered_input() {
        let config = OrderingConfig::default();
        let printed = lines(|out| place(&[4.0, 0.0, 2.0], 0, &config, out)).unwrap();
        assert_eq!(printed, ["-1"]);
    }

    #[test]
    fn place_into_empty_container() {
        let config = OrderingConfig::default();
        assert_eq!(lines(|out| place(&[], 0, &config, out)).unwrap(), ["0"]);
    }

    #[test]
    fn place_rejects_index_past_end() {
        let config = OrderingConfig::default();
        assert!(lines(|out| place(&[0.0, 1.0], 3, &config, out)).is_err());
    }

    #[test]
    fn non_finite_positions_are_rejected() {
        let config = OrderingConfig::default();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = lines(|out| place(&[1.0, bad], 1, &config, out)).unwrap_err();
            assert!(err.to_string().contains("argument 1"), "{err}");
            assert!(lines(|out| renormalize(&[bad], &config, out)).is_err());
        }
    }

    #[test]
    fn renormalize_keeps_argument_order() {
        let config = OrderingConfig {
            renormalize_stride: 10.0,
            ..OrderingConfig::default()
        };
        let printed = lines(|out| renormalize(&[0.75, -3.0, 0.5], &config, out)).unwrap();
        assert_eq!(printed, ["20", "0", "10"]);
    }
}
