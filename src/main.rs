// Begbot entry point: offline valuation report.
//
// Startup sequence:
// 1. Initialize tracing (log to stderr; stdout carries the report)
// 2. Load config
// 3. Read the JSON snapshot of products, valuations, and overrides
// 4. Compute and print every product's weighted valuation

use std::path::Path;

use anyhow::Context;
use tracing::info;

use begbot::config;
use begbot::model::Snapshot;
use begbot::valuation::compute_weighted_valuation;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .context("usage: begbot <snapshot.json> [begbot.toml]")?;
    let config_path = args.next().unwrap_or_else(|| "defaults/begbot.toml".into());

    let config = config::load_config_from(Path::new(&config_path))
        .with_context(|| format!("failed to load configuration from {config_path}"))?;
    info!(
        "Config loaded: {} enabled types, {} weights",
        config.enabled_types.len(),
        config.weights.len()
    );

    let text = std::fs::read_to_string(&snapshot_path)
        .with_context(|| format!("failed to read snapshot {snapshot_path}"))?;
    let snapshot: Snapshot =
        serde_json::from_str(&text).context("failed to parse snapshot JSON")?;
    info!("Snapshot loaded: {} products", snapshot.products.len());

    let configs_by_product = snapshot.configs_by_product();

    for product in &snapshot.products {
        let summary = compute_weighted_valuation(
            product.id,
            &config.enabled_types,
            &snapshot.valuations,
            &config.weights,
            &configs_by_product,
        );
        match summary {
            Some(s) => println!(
                "{:>8}  {:<40} avg {:>10}  safety {:>3}%",
                product.id, product.name, s.average, s.safety_percent
            ),
            None => println!("{:>8}  {:<40} no estimate", product.id, product.name),
        }
    }

    Ok(())
}

/// Initialize tracing to stderr so the report on stdout stays clean.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("begbot=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
