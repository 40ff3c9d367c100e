// Valuation engine: dispersion statistics and weighted aggregation.

pub mod aggregate;
pub mod stats;

pub use aggregate::{compute_weighted_valuation, is_type_active_for_product};
pub use stats::{sample_stats, SampleStats};
