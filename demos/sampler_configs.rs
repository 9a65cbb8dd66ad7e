// Example: sampler_configs.rs
// Shows the sampler presets and loads an override from TOML.
//
// Usage:
//     cargo run --example sampler_configs [-- <config.toml>]

use std::env;

use anyhow::Result;
use bs_greeks_lib::{default_configs, sample_curve, OptionParameters, SamplerConfig, SweepKind};

fn describe(name: &str, config: &SamplerConfig) {
    println!("{name}:");
    println!("   Points per curve: {}", config.sample_count);
    println!(
        "   Spot range (x strike): {:.2} - {:.2}",
        config.underlying_range.lower, config.underlying_range.upper
    );
    println!(
        "   Greeks spot range (x strike): {:.2} - {:.2}",
        config.greeks_underlying_range.lower, config.greeks_underlying_range.upper
    );
    println!(
        "   Volatility range: {:.2} - {:.2}",
        config.volatility_range.lower, config.volatility_range.upper
    );
    println!(
        "   Scales: vega /{}, rho /{}, theta /{}\n",
        config.vega_scale, config.rho_scale, config.days_per_year
    );
}

fn main() -> Result<()> {
    println!("Sampler Configuration Presets\n");

    describe("1. Standard (interactive charts)", &default_configs::standard());
    describe("2. Fine (exported charts)", &default_configs::fine());
    describe("3. Coarse (previews)", &default_configs::coarse());

    let config = match env::args().nth(1) {
        Some(path) => {
            println!("Loading sampler config from {path}");
            SamplerConfig::from_file(&path)?
        }
        None => SamplerConfig::from_toml_str(
            r#"
sample_count = 60

[volatility_range]
lower = 0.05
upper = 0.90
"#,
        )?,
    };
    describe("4. Loaded", &config);

    let params = OptionParameters::new(100.0, 100.0, 0.05, 1.0, 0.2)?;
    for kind in SweepKind::ALL {
        let curve = sample_curve(&params, kind, &config)?;
        println!(
            "{kind:?}: {} samples over {} ({} excluded)",
            curve.len(),
            kind.swept_input().name(),
            curve.excluded.len()
        );
    }

    Ok(())
}
