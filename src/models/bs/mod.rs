//! Closed-form Black-Scholes pricing for European options without dividends.
//!
//! [`BlackScholes`] validates one [`OptionParameters`] tuple and computes d1,
//! d2, √T and the discount factor once. Prices and every Greek in
//! [`greeks`] are derived from those shared terms, so a call price, a put
//! price and their sensitivities for the same tuple are always mutually
//! consistent.

pub mod greeks;

use crate::error::{DomainError, Result};
use crate::model_params::OptionParameters;
use crate::models::normal;

pub use greeks::GreeksResult;

/// Call and put prices for one parameter tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
}

/// Prices and Greeks computed from the same d1/d2.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    pub pricing: PricingResult,
    pub greeks: GreeksResult,
}

/// A validated parameter tuple with its d1/d2 decomposition.
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    params: OptionParameters,
    sqrt_t: f64,
    /// e^{-rT}
    discount: f64,
    d1: f64,
    d2: f64,
}

impl BlackScholes {
    /// Validate `params` and precompute the shared terms.
    ///
    /// Prices are checked before volatility and maturity, so `S = 0, T = 0`
    /// reports [`DomainError::NonPositivePrice`].
    pub fn new(params: OptionParameters) -> Result<Self> {
        params.check_finite()?;

        let OptionParameters {
            spot: s,
            strike: k,
            rate: r,
            maturity: t,
            volatility: sigma,
        } = params;

        if s <= 0.0 || k <= 0.0 {
            return Err(DomainError::NonPositivePrice {
                spot: s,
                strike: k,
            }
            .into());
        }
        if sigma <= 0.0 || t <= 0.0 {
            return Err(DomainError::DegenerateVolatilityOrMaturity {
                volatility: sigma,
                maturity: t,
            }
            .into());
        }

        let sqrt_t = t.sqrt();
        let sigma_sqrt_t = sigma * sqrt_t;
        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;

        Ok(Self {
            params,
            sqrt_t,
            discount: (-r * t).exp(),
            d1: finite("d1", d1)?,
            d2: finite("d2", d2)?,
        })
    }

    pub fn params(&self) -> &OptionParameters {
        &self.params
    }

    pub fn d1(&self) -> f64 {
        self.d1
    }

    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// `S·Φ(d1) − K·e^{−rT}·Φ(d2)`
    pub fn call_price(&self) -> Result<f64> {
        let p = &self.params;
        let price = p.spot * normal::cdf(self.d1)
            - p.strike * self.discount * normal::cdf(self.d2);
        finite("call_price", price)
    }

    /// `K·e^{−rT}·Φ(−d2) − S·Φ(−d1)`
    pub fn put_price(&self) -> Result<f64> {
        let p = &self.params;
        let price = p.strike * self.discount * normal::cdf(-self.d2)
            - p.spot * normal::cdf(-self.d1);
        finite("put_price", price)
    }

    pub fn pricing(&self) -> Result<PricingResult> {
        Ok(PricingResult {
            call_price: self.call_price()?,
            put_price: self.put_price()?,
        })
    }

    /// Full single-point result bundle.
    pub fn valuation(&self) -> Result<Valuation> {
        Ok(Valuation {
            pricing: self.pricing()?,
            greeks: self.greeks()?,
        })
    }
}

pub(crate) fn finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFiniteResult { quantity }.into())
    }
}

/// d1 for `params`.
pub fn d1(params: &OptionParameters) -> Result<f64> {
    Ok(BlackScholes::new(*params)?.d1())
}

/// d2 for `params`.
pub fn d2(params: &OptionParameters) -> Result<f64> {
    Ok(BlackScholes::new(*params)?.d2())
}

/// Price of a European call.
pub fn call_price(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.call_price()
}

/// Price of a European put.
pub fn put_price(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.put_price()
}

/// Prices and all Greeks for `params`.
pub fn valuation(params: &OptionParameters) -> Result<Valuation> {
    BlackScholes::new(*params)?.valuation()
}
