// Domain types shared across the crate.
//
// These mirror the JSON shapes served by the listings API: valuation types,
// per-product valuation entries, and per-product activation overrides.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// An inventory product whose market value is being tracked.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Valuation types and entries
// ---------------------------------------------------------------------------

/// A named method of estimating an item's market value
/// (e.g. "market average", "recent sale price").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValuationType {
    pub id: u32,
    pub name: String,
}

/// One observed estimate for one product from one valuation type.
///
/// A product has at most one entry per valuation type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValuationEntry {
    pub valuation_type_id: u32,
    pub valuation: f64,
    /// When the estimate was scraped/recorded. Absent for manual entries.
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Per-product per-type activation override.
///
/// Absence of any config record for a product means all types are active
/// for that product (backward-compatible default).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductTypeConfig {
    pub product_id: u64,
    pub valuation_type_id: u32,
    pub is_active: bool,
}

/// Aggregated valuation output for a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValuationSummary {
    /// Weighted average, rounded to the nearest whole currency unit.
    pub average: i64,
    /// 0-100 confidence score derived from the unweighted dispersion
    /// among contributing sources.
    pub safety_percent: u8,
}

// ---------------------------------------------------------------------------
// Lookup maps
// ---------------------------------------------------------------------------

/// All observed valuation entries, keyed by product id.
pub type ValuationsByProduct = HashMap<u64, Vec<ValuationEntry>>;

/// All activation overrides, keyed by product id.
pub type ConfigsByProduct = HashMap<u64, Vec<ProductTypeConfig>>;

/// Operator-assigned trust multipliers, keyed by valuation type id.
/// Types absent from the map carry the default weight of 1.0.
pub type WeightMap = HashMap<u32, f64>;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// A point-in-time export of the API data needed for offline valuation:
/// products, their observed entries, and the activation overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub products: Vec<Product>,
    /// Observed entries keyed by product id (JSON object keys are strings;
    /// serde parses them to ids).
    #[serde(default)]
    pub valuations: ValuationsByProduct,
    #[serde(default)]
    pub configs: Vec<ProductTypeConfig>,
}

impl Snapshot {
    /// Group the flat override records by product id for lookup.
    pub fn configs_by_product(&self) -> ConfigsByProduct {
        let mut map: ConfigsByProduct = HashMap::new();
        for config in &self.configs {
            map.entry(config.product_id).or_default().push(config.clone());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_parses_from_api_shaped_json() {
        let json = r#"{
            "products": [{"id": 1, "name": "Console"}],
            "valuations": {
                "1": [
                    {"valuation_type_id": 1, "valuation": 1000.0},
                    {"valuation_type_id": 2, "valuation": 2000.0,
                     "recorded_at": "2026-01-15T12:00:00Z"}
                ]
            },
            "configs": [
                {"product_id": 1, "valuation_type_id": 2, "is_active": false}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).expect("valid snapshot");
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.valuations[&1].len(), 2);
        assert!(snapshot.valuations[&1][1].recorded_at.is_some());

        let configs = snapshot.configs_by_product();
        assert_eq!(configs[&1].len(), 1);
        assert!(!configs[&1][0].is_active);
    }

    #[test]
    fn snapshot_sections_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert!(snapshot.valuations.is_empty());
        assert!(snapshot.configs.is_empty());
    }
}
