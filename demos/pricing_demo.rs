// Example: pricing_demo.rs
// Prices the textbook at-the-money option, prints raw and display-scaled
// Greeks, then walks a short strike ladder through the percent-form boundary.
//
// Usage:
//     RUST_LOG=debug cargo run --example pricing_demo

use std::error::Error;

use bs_greeks_lib::{evaluate, evaluate_boundary, BoundaryInputs, PricingError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================\n");

    // S=100, K=100, r=5%, T=1y, σ=20%
    let valuation = evaluate(100.0, 100.0, 0.05, 1.0, 0.2)?;
    println!("Reference option (S=100, K=100, r=5%, T=1y, vol=20%)");
    println!("  Call price: {:.4}", valuation.pricing.call_price);
    println!("  Put price:  {:.4}", valuation.pricing.put_price);

    let g = &valuation.greeks;
    println!("\nRaw Greeks (annual theta, rho per unit rate):");
    println!("  {:<8} {:>12} {:>12}", "", "call", "put");
    println!("  {:<8} {:>12.4} {:>12.4}", "delta", g.delta_call, g.delta_put);
    println!("  {:<8} {:>12.4} {:>12.4}", "gamma", g.gamma, g.gamma);
    println!("  {:<8} {:>12.4} {:>12.4}", "vega", g.vega, g.vega);
    println!("  {:<8} {:>12.4} {:>12.4}", "theta", g.theta_call, g.theta_put);
    println!("  {:<8} {:>12.4} {:>12.4}", "rho", g.rho_call, g.rho_put);

    let report = evaluate_boundary(&BoundaryInputs::default())?;
    let shown = report.display();
    println!("\nDisplay Greeks (theta per day, rho per point):");
    println!("  theta call/put: {:.5} / {:.5}", shown.theta_call, shown.theta_put);
    println!("  rho call/put:   {:.5} / {:.5}", shown.rho_call, shown.rho_put);

    // Strike ladder in percent form, the way a request payload arrives
    println!("\nStrike ladder (rate 5%, vol 20%):");
    println!("{:<8} {:<12} {:<12} {:<10}", "Strike", "Call", "Put", "Delta");
    println!("{}", "-".repeat(42));
    for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
        let inputs = BoundaryInputs {
            strike_price: strike,
            ..BoundaryInputs::default()
        };
        let report = evaluate_boundary(&inputs)?;
        println!(
            "{:<8.0} {:<12.4} {:<12.4} {:<10.4}",
            strike, report.pricing.call_price, report.pricing.put_price, report.greeks.delta_call
        );
    }

    // Degenerate inputs come back as typed errors, never as NaN prices
    println!("\nDegenerate inputs:");
    for (label, result) in [
        ("zero volatility", evaluate(100.0, 100.0, 0.05, 1.0, 0.0)),
        ("expired", evaluate(100.0, 100.0, 0.05, 0.0, 0.2)),
        ("zero spot", evaluate(0.0, 100.0, 0.05, 1.0, 0.2)),
    ] {
        match result {
            Ok(v) => println!("  {label}: unexpected price {:.4}", v.pricing.call_price),
            Err(PricingError::Domain(e)) => println!("  {label}: {e}"),
            Err(e) => return Err(e.into()),
        }
    }

    let malformed = BoundaryInputs::from_strs(Some("abc"), None, None, None, None);
    if let Err(e) = malformed {
        println!("  malformed stock price: {e}");
    }

    Ok(())
}
