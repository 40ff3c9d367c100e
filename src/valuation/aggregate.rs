// Weighted multi-source valuation aggregation with confidence scoring.
//
// Combines a product's per-type valuation estimates into a single weighted
// average plus a 0-100 "safety" score. The central estimate honors the
// operator-assigned trust weights; the safety score deliberately does not:
// it reflects raw agreement between sources, so an operator can trust one
// source more for the number while still being warned when sources disagree.

use tracing::debug;

use crate::model::{ConfigsByProduct, ValuationSummary, ValuationsByProduct, WeightMap};
use crate::valuation::stats::{sample_stats, EPSILON};

// ---------------------------------------------------------------------------
// Activation policy
// ---------------------------------------------------------------------------

/// Whether a valuation type is active for a specific product.
///
/// The override records are backward-compatible opt-outs:
/// - no configs for the product at all: every type is active;
/// - configs exist but none mention this type: the type is active;
/// - a matching config exists: its `is_active` flag decides.
///
/// Total over all inputs; never fails.
pub fn is_type_active_for_product(
    product_id: u64,
    type_id: u32,
    configs_by_product: &ConfigsByProduct,
) -> bool {
    let Some(configs) = configs_by_product.get(&product_id) else {
        return true;
    };
    configs
        .iter()
        .find(|c| c.valuation_type_id == type_id)
        .map(|c| c.is_active)
        .unwrap_or(true)
}

// ---------------------------------------------------------------------------
// Weighted aggregation
// ---------------------------------------------------------------------------

/// Compute the weighted average valuation and safety score for a product.
///
/// A type contributes only if it is in `enabled_types`, active for the
/// product per the override records, and the product has an observed entry
/// for it. Weights default to 1.0 for types absent from the weight map.
///
/// The average is rounded half-away-from-zero to the nearest whole
/// currency unit (`f64::round`).
///
/// Returns `None` when no usable data exists: no active enabled types, no
/// observed entries for the surviving types, or a total weight of zero
/// (all-zero-weight configurations mean "no confident estimate", not 0).
pub fn compute_weighted_valuation(
    product_id: u64,
    enabled_types: &[u32],
    valuations_by_product: &ValuationsByProduct,
    weights: &WeightMap,
    configs_by_product: &ConfigsByProduct,
) -> Option<ValuationSummary> {
    let active_types: Vec<u32> = enabled_types
        .iter()
        .copied()
        .filter(|&t| is_type_active_for_product(product_id, t, configs_by_product))
        .collect();
    if active_types.is_empty() {
        debug!(product_id, "no active valuation types for product");
        return None;
    }

    let entries = valuations_by_product.get(&product_id);

    // (raw valuation, weight) for every type that survives all three filters.
    let mut contributing: Vec<(f64, f64)> = Vec::new();
    for type_id in active_types {
        let Some(entry) =
            entries.and_then(|all| all.iter().find(|e| e.valuation_type_id == type_id))
        else {
            debug!(product_id, type_id, "no observed entry for type, skipping");
            continue;
        };
        let weight = weights.get(&type_id).copied().unwrap_or(1.0);
        contributing.push((entry.valuation, weight));
    }
    if contributing.is_empty() {
        return None;
    }

    let total_weight: f64 = contributing.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        debug!(product_id, "total weight is zero, no confident estimate");
        return None;
    }

    let weighted_sum: f64 = contributing.iter().map(|(v, w)| v * w).sum();
    let average = (weighted_sum / total_weight).round() as i64;

    // Dispersion is unweighted on purpose: it measures agreement between
    // independent sources, not the trust assigned to them.
    let safety_percent = if contributing.len() == 1 {
        100
    } else {
        let values: Vec<f64> = contributing.iter().map(|(v, _)| *v).collect();
        let stats = sample_stats(&values);
        if stats.mean.abs() < EPSILON {
            // Coefficient of variation is undefined for a zero mean.
            0
        } else {
            let pct = 100.0 - (stats.stdev / stats.mean.abs()) * 100.0;
            pct.round().max(0.0) as u8
        }
    };

    Some(ValuationSummary {
        average,
        safety_percent,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
