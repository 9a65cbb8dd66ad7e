use tracing::{debug, warn};

use super::config::{SamplerConfig, SweepRange};
use super::types::{Curve, ExcludedPoint, ReferenceMarker, Sample, SweepKind, SweptInput};
use crate::error::{PricingError, Result};
use crate::model_params::OptionParameters;
use crate::models::bs::BlackScholes;

/// `count` evenly spaced points from `lower` to `upper`, both included.
pub fn linspace(lower: f64, upper: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![lower],
        _ => {
            let last = (count - 1) as f64;
            let span = upper - lower;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        upper
                    } else {
                        lower + span * (i as f64 / last)
                    }
                })
                .collect()
        }
    }
}

/// Sweep one input of `params` and evaluate the engine at every point.
///
/// Points the engine rejects with a domain error (a sweep that reaches zero
/// volatility, for instance) stay in the curve with no values and are listed
/// in [`Curve::excluded`]; the sweep itself carries on. The curve always has
/// exactly `config.sample_count` samples in ascending x.
///
/// Errors are reserved for sweeps that cannot be set up at all: an invalid
/// config, non-finite anchor parameters, a non-positive strike when the
/// spot range is defined relative to it, or an axis that overflows or is too
/// narrow to hold `sample_count` distinct points.
pub fn sample_curve(
    params: &OptionParameters,
    kind: SweepKind,
    config: &SamplerConfig,
) -> Result<Curve> {
    config.validate()?;
    params.check_finite()?;

    let range = sweep_range(params, kind, config)?;
    let xs = linspace(range.lower, range.upper, config.sample_count);
    if xs.windows(2).any(|w| w[0] >= w[1]) {
        return Err(PricingError::InvalidSweep {
            reason: format!(
                "{} range [{}, {}] is too narrow for {} distinct points",
                kind.swept_input().name(),
                range.lower,
                range.upper,
                config.sample_count
            ),
        });
    }

    let mut samples = Vec::with_capacity(xs.len());
    let mut excluded = Vec::new();

    for (index, &x) in xs.iter().enumerate() {
        let point = match kind.swept_input() {
            SweptInput::Spot => params.with_spot(x),
            SweptInput::Volatility => params.with_volatility(x),
        };
        match evaluate_point(&point, kind, config) {
            Ok(values) => samples.push(Sample {
                x,
                values: Some(values),
            }),
            Err(PricingError::Domain(error)) => {
                excluded.push(ExcludedPoint { index, x, error });
                samples.push(Sample { x, values: None });
            }
            Err(other) => return Err(other),
        }
    }

    let markers = reference_markers(params, kind, &samples);

    if excluded.is_empty() {
        debug!(?kind, samples = samples.len(), "curve sampled");
    } else {
        warn!(
            ?kind,
            samples = samples.len(),
            excluded = excluded.len(),
            first_excluded_x = excluded[0].x,
            "curve sampled with excluded points"
        );
    }

    Ok(Curve {
        kind,
        samples,
        markers,
        excluded,
    })
}

fn sweep_range(
    params: &OptionParameters,
    kind: SweepKind,
    config: &SamplerConfig,
) -> Result<SweepRange> {
    let range = match kind {
        SweepKind::PriceVsUnderlying => relative_to_strike(params, config.underlying_range)?,
        SweepKind::GreeksVsUnderlying => {
            relative_to_strike(params, config.greeks_underlying_range)?
        }
        SweepKind::PriceVsVolatility | SweepKind::GreeksVsVolatility => config.volatility_range,
    };
    // linspace needs finite bounds and a finite span
    let span = range.upper - range.lower;
    if !(range.lower.is_finite() && range.upper.is_finite() && span.is_finite()) {
        return Err(PricingError::InvalidSweep {
            reason: format!(
                "{} axis [{}, {}] overflows",
                kind.swept_input().name(),
                range.lower,
                range.upper
            ),
        });
    }
    Ok(range)
}

fn relative_to_strike(params: &OptionParameters, relative: SweepRange) -> Result<SweepRange> {
    if params.strike <= 0.0 {
        return Err(PricingError::InvalidSweep {
            reason: format!(
                "spot range is relative to the strike, which must be positive (got {})",
                params.strike
            ),
        });
    }
    Ok(relative.scaled(params.strike))
}

fn evaluate_point(
    point: &OptionParameters,
    kind: SweepKind,
    config: &SamplerConfig,
) -> Result<Vec<f64>> {
    let engine = BlackScholes::new(*point)?;
    let values = match kind {
        SweepKind::PriceVsUnderlying | SweepKind::PriceVsVolatility => {
            let pricing = engine.pricing()?;
            vec![pricing.call_price, pricing.put_price]
        }
        SweepKind::GreeksVsUnderlying => vec![
            engine.delta_call()?,
            engine.gamma()?,
            engine.vega()? / config.vega_scale,
            engine.theta_call()? / config.days_per_year,
        ],
        SweepKind::GreeksVsVolatility => vec![
            engine.delta_call()?,
            engine.gamma()?,
            engine.vega()? / config.vega_scale,
            engine.theta_call()? / config.days_per_year,
            engine.rho_call()? / config.rho_scale,
        ],
    };
    Ok(values)
}

fn reference_markers(
    params: &OptionParameters,
    kind: SweepKind,
    samples: &[Sample],
) -> Vec<ReferenceMarker> {
    let (y_min, y_max) = match kind {
        SweepKind::PriceVsUnderlying | SweepKind::PriceVsVolatility => {
            (0.0, fold_column(samples, None, f64::max).unwrap_or(0.0))
        }
        // delta is column 0, daily theta column 3
        SweepKind::GreeksVsUnderlying => (
            fold_column(samples, Some(3), f64::min).unwrap_or(0.0),
            fold_column(samples, Some(0), f64::max).unwrap_or(0.0),
        ),
        SweepKind::GreeksVsVolatility => (
            fold_column(samples, None, f64::min).unwrap_or(0.0),
            fold_column(samples, None, f64::max).unwrap_or(0.0),
        ),
    };

    let marker = |label, x| ReferenceMarker {
        label,
        x,
        y_min,
        y_max,
    };
    match kind.swept_input() {
        SweptInput::Spot => vec![
            marker("strike", params.strike),
            marker("spot", params.spot),
        ],
        SweptInput::Volatility => vec![marker("volatility", params.volatility)],
    }
}

/// Fold one column (or every column when `None`) over the valid samples.
fn fold_column(
    samples: &[Sample],
    column: Option<usize>,
    op: fn(f64, f64) -> f64,
) -> Option<f64> {
    samples
        .iter()
        .filter_map(|s| s.values.as_deref())
        .flat_map(|values| match column {
            Some(c) => values[c..=c].iter(),
            None => values.iter(),
        })
        .copied()
        .reduce(op)
}
