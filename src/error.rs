//! Error types for pricing, boundary parsing and curve sampling.
//!
//! The pricing engine never hands a NaN or infinite value back to its caller:
//! every degenerate input is reported as a [`DomainError`] instead.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Inputs for which the Black-Scholes formulas are undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DomainError {
    /// `ln(S/K)` is undefined when either price is zero or negative.
    #[error("non-positive price: spot={spot}, strike={strike}")]
    NonPositivePrice { spot: f64, strike: f64 },

    /// `σ·√T` is zero (or imaginary), so d1 divides by zero.
    #[error("degenerate volatility or maturity: volatility={volatility}, maturity={maturity}")]
    DegenerateVolatilityOrMaturity { volatility: f64, maturity: f64 },

    /// Finite inputs whose evaluation still overflowed.
    #[error("non-finite result for {quantity}")]
    NonFiniteResult { quantity: &'static str },
}

/// Problems with raw scalars arriving from outside the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("malformed scalar for {field}: {raw:?}")]
    MalformedScalar { field: &'static str, raw: String },

    #[error("non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Top-level error returned by the public API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Input(#[from] InputError),

    /// The sweep itself is ill-formed (bad range, too few samples, undefined axis).
    #[error("invalid sweep: {reason}")]
    InvalidSweep { reason: String },
}

impl PricingError {
    /// Returns the domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            PricingError::Domain(e) => Some(e),
            _ => None,
        }
    }
}
