// Example: plot_curves.rs
// Samples every sweep kind for one option and draws each curve to an SVG,
// with the reference markers as dashed vertical lines. Excluded samples
// break the line instead of being drawn as zero.
//
// Usage:
//     cargo run --example plot_curves -- [S K r T vol] [--csv]
//
// Rate and volatility are given in percent. Charts are written to
// curve_<kind>.svg in the working directory; with --csv the sampled values
// are also written to curve_<kind>.csv.

use std::env;
use std::error::Error;

use bs_greeks_lib::sampling::export::write_csv_file;
use bs_greeks_lib::{default_configs, sample_curve, BoundaryInputs, Curve, SweepKind};
use plotters::prelude::*;
use tracing_subscriber::EnvFilter;

fn file_stem(kind: SweepKind) -> &'static str {
    match kind {
        SweepKind::PriceVsUnderlying => "price_vs_underlying",
        SweepKind::PriceVsVolatility => "price_vs_volatility",
        SweepKind::GreeksVsUnderlying => "greeks_vs_underlying",
        SweepKind::GreeksVsVolatility => "greeks_vs_volatility",
    }
}

/// Split a series at excluded samples so each run of valid points is drawn
/// as its own polyline.
fn segments(series: &[(f64, Option<f64>)]) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for &(x, y) in series {
        match y {
            Some(y) => current.push((x, y)),
            None if !current.is_empty() => out.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn y_bounds(curve: &Curve) -> (f64, f64) {
    let mut lo = 0.0_f64;
    let mut hi = 0.0_f64;
    for sample in &curve.samples {
        for &v in sample.values.iter().flatten() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if hi - lo < 1e-9 {
        hi = lo + 1.0;
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}

fn plot(curve: &Curve, path: &str) -> Result<(), Box<dyn Error>> {
    let xs = curve.xs();
    let (x_min, x_max) = match (xs.first(), xs.last()) {
        (Some(&a), Some(&b)) => (a, b),
        _ => return Err("empty curve".into()),
    };
    let (y_min, y_max) = y_bounds(curve);

    let root = SVGBackend::new(path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("{:?}", curve.kind), ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(curve.kind.swept_input().name())
        .y_desc("value")
        .draw()?;

    for (i, name) in curve.series_names().iter().enumerate() {
        let Some(series) = curve.series(name) else {
            continue;
        };
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(
                segments(&series)
                    .into_iter()
                    .map(|seg| PathElement::new(seg, color.stroke_width(2))),
            )?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    // Excluded samples sit on the axis as hollow circles
    chart.draw_series(
        curve
            .excluded
            .iter()
            .map(|e| Circle::new((e.x, 0.0), 3, BLACK.stroke_width(1))),
    )?;

    // Dashed vertical marker lines
    for marker in &curve.markers {
        let span = marker.y_max - marker.y_min;
        let dash = if span > 0.0 { span / 40.0 } else { 0.0 };
        let mut dashes = Vec::new();
        let mut y = marker.y_min;
        while dash > 0.0 && y < marker.y_max {
            let end = (y + dash).min(marker.y_max);
            dashes.push(vec![(marker.x, y), (marker.x, end)]);
            y += 2.0 * dash;
        }
        chart
            .draw_series(
                dashes
                    .into_iter()
                    .map(|d| PathElement::new(d, BLACK.mix(0.6).stroke_width(1))),
            )?
            .label(marker.label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.6)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let export_csv = args.iter().any(|a| a == "--csv");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    let inputs = match positional.as_slice() {
        [] => BoundaryInputs::default(),
        &[s, k, r, t, v] => {
            BoundaryInputs::from_strs(Some(s), Some(k), Some(r), Some(t), Some(v))?
        }
        _ => {
            eprintln!("Usage: plot_curves [S K r T vol] [--csv]  (rate and vol in percent)");
            std::process::exit(1);
        }
    };
    let params = inputs.to_parameters()?;
    let config = default_configs::standard();

    println!(
        "Sampling S={} K={} r={}% T={} vol={}%",
        inputs.stock_price,
        inputs.strike_price,
        inputs.interest_rate,
        inputs.maturity,
        inputs.volatility
    );

    for kind in SweepKind::ALL {
        let curve = sample_curve(&params, kind, &config)?;
        let stem = format!("curve_{}", file_stem(kind));

        let svg = format!("{stem}.svg");
        plot(&curve, &svg)?;
        println!(
            "{kind:?}: {} points, {} excluded -> {svg}",
            curve.len(),
            curve.excluded.len()
        );

        if export_csv {
            let csv = format!("{stem}.csv");
            write_csv_file(&curve, &csv)?;
            println!("  values written to {csv}");
        }
    }

    Ok(())
}
