// Dispersion statistics over a set of observed valuations.

/// Mean and standard deviation for a set of raw valuations.
#[derive(Debug, Clone, Copy)]
pub struct SampleStats {
    pub mean: f64,
    pub stdev: f64,
}

/// Threshold below which a mean or standard deviation is treated as zero.
pub(crate) const EPSILON: f64 = 1e-9;

/// Compute mean and standard deviation for a slice of values.
///
/// Returns `SampleStats { mean: 0.0, stdev: 0.0 }` for an empty slice.
/// Uses the population standard deviation (N denominator), since the
/// contributing entries are the full set of observed sources rather than
/// a sample drawn from a larger population.
pub fn sample_stats(values: &[f64]) -> SampleStats {
    if values.is_empty() {
        return SampleStats {
            mean: 0.0,
            stdev: 0.0,
        };
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    SampleStats {
        mean,
        stdev: variance.sqrt(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
