//! # BS-Greeks-Lib: Black-Scholes Pricing, Greeks and Sensitivity Curves
//!
//! `bs-greeks-lib` prices European calls and puts in closed form under the
//! Black-Scholes model, computes their Greeks, and samples curves of those
//! quantities over a range of underlying prices or volatilities for charting.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: call/put prices and eight Greeks from one shared d1/d2
//! - **Domain Checks**: degenerate inputs are reported as [`DomainError`], never as NaN
//! - **Curve Sampler**: price and Greek sweeps over spot or volatility with reference markers
//! - **Boundary Helpers**: percent/decimal conversion and display scaling kept out of the formulas
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks_lib::{evaluate, sample_curve, default_configs, OptionParameters, SweepKind};
//!
//! // S=100, K=100, r=5%, T=1y, σ=20%
//! let valuation = evaluate(100.0, 100.0, 0.05, 1.0, 0.2)?;
//! assert!((valuation.pricing.call_price - 10.45).abs() < 0.01);
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 1.0, 0.2)?;
//! let curve = sample_curve(&params, SweepKind::PriceVsUnderlying, &default_configs::standard())?;
//! assert_eq!(curve.len(), 100);
//! # Ok::<(), bs_greeks_lib::PricingError>(())
//! ```
//!
//! ## Units
//!
//! The engine works in decimals: a 5% rate is `0.05`. Theta is per year, vega
//! and rho per unit of volatility and rate. [`BoundaryInputs`] accepts percent
//! input and [`conversion`] provides the per-day and per-point scalings used
//! for display.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod conversion;
pub mod error;
pub mod model_params;
pub mod models;
pub mod sampling;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{DomainError, InputError, PricingError, Result};
pub use model_params::{BoundaryInputs, OptionParameters};
pub use models::bs::{BlackScholes, GreeksResult, PricingResult, Valuation};

pub use conversion::{DisplayGreeks, ValuationReport};
pub use sampling::{
    sample_curve, Curve, ExcludedPoint, ReferenceMarker, Sample, SamplerConfig, SweepKind,
    SweepRange,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sampler settings.
///
/// All presets share the default ranges (spot in `[0.5·K, 1.5·K]`, volatility
/// in `[1%, 50%]`) and differ only in the number of points per curve.
pub mod default_configs {
    use crate::sampling::SamplerConfig;

    /// 100 points per curve.
    ///
    /// ```rust
    /// use bs_greeks_lib::default_configs;
    ///
    /// assert_eq!(default_configs::standard().sample_count, 100);
    /// ```
    pub fn standard() -> SamplerConfig {
        SamplerConfig::standard()
    }

    /// 400 points per curve, for exported or printed charts.
    pub fn fine() -> SamplerConfig {
        SamplerConfig::fine()
    }

    /// 25 points per curve, for previews.
    pub fn coarse() -> SamplerConfig {
        SamplerConfig::coarse()
    }
}

// ================================================================================================
// SINGLE-POINT EVALUATION
// ================================================================================================

/// Price a call and a put and compute all eight Greeks for one parameter tuple.
///
/// Inputs are in decimal form (`rate = 0.05` for 5%, `volatility = 0.2` for 20%).
///
/// # Errors
///
/// * [`InputError::NonFinite`] if any input is NaN or infinite
/// * [`DomainError::NonPositivePrice`] if `spot <= 0` or `strike <= 0`
/// * [`DomainError::DegenerateVolatilityOrMaturity`] if `volatility <= 0` or `maturity <= 0`
///
/// # Example
///
/// ```rust
/// use bs_greeks_lib::{evaluate, DomainError, PricingError};
///
/// let err = evaluate(100.0, 100.0, 0.05, 0.0, 0.2).unwrap_err();
/// assert!(matches!(
///     err,
///     PricingError::Domain(DomainError::DegenerateVolatilityOrMaturity { .. })
/// ));
/// ```
pub fn evaluate(
    spot: f64,
    strike: f64,
    rate: f64,
    maturity: f64,
    volatility: f64,
) -> Result<Valuation> {
    let params = OptionParameters::new(spot, strike, rate, maturity, volatility)?;
    BlackScholes::new(params)?.valuation()
}

/// Evaluate percent-form boundary inputs and package the result for display.
///
/// Rate and volatility are divided by 100 on the way in and multiplied by 100
/// in the returned report.
pub fn evaluate_boundary(inputs: &BoundaryInputs) -> Result<ValuationReport> {
    let params = inputs.to_parameters()?;
    let valuation = BlackScholes::new(params)?.valuation()?;
    Ok(ValuationReport::new(&params, &valuation))
}
