//! Presentation scalings layered on top of the raw engine output.
//!
//! The engine reports theta per year and rho per unit of rate. Displays
//! usually want theta per calendar day and rho per percentage point; those
//! conversions happen here and only here.

use crate::model_params::{decimal_to_percent, OptionParameters};
use crate::models::bs::{GreeksResult, PricingResult, Valuation};

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const RHO_SCALE: f64 = 100.0;
pub const VEGA_SCALE: f64 = 100.0;

/// Annual theta to a per-day figure.
#[inline]
pub fn daily_theta(theta: f64, days_per_year: f64) -> f64 {
    theta / days_per_year
}

/// Rho per percentage point of rate.
#[inline]
pub fn scaled_rho(rho: f64, scale: f64) -> f64 {
    rho / scale
}

/// Vega per percentage point of volatility.
#[inline]
pub fn scaled_vega(vega: f64, scale: f64) -> f64 {
    vega / scale
}

/// Greeks as shown to a user: deltas, gamma and vega are raw, theta is daily
/// and rho is divided by 100.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayGreeks {
    pub delta_call: f64,
    pub delta_put: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta_call: f64,
    pub theta_put: f64,
    pub rho_call: f64,
    pub rho_put: f64,
}

impl From<&GreeksResult> for DisplayGreeks {
    fn from(g: &GreeksResult) -> Self {
        Self {
            delta_call: g.delta_call,
            delta_put: g.delta_put,
            gamma: g.gamma,
            vega: g.vega,
            theta_call: daily_theta(g.theta_call, DAYS_PER_YEAR),
            theta_put: daily_theta(g.theta_put, DAYS_PER_YEAR),
            rho_call: scaled_rho(g.rho_call, RHO_SCALE),
            rho_put: scaled_rho(g.rho_put, RHO_SCALE),
        }
    }
}

/// A valuation together with the inputs that produced it, with rate and
/// volatility re-expressed in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationReport {
    pub stock_price: f64,
    pub strike_price: f64,
    /// Percent.
    pub interest_rate: f64,
    pub maturity: f64,
    /// Percent.
    pub volatility: f64,
    pub pricing: PricingResult,
    /// Raw annualised Greeks.
    pub greeks: GreeksResult,
}

impl ValuationReport {
    pub fn new(params: &OptionParameters, valuation: &Valuation) -> Self {
        Self {
            stock_price: params.spot,
            strike_price: params.strike,
            interest_rate: decimal_to_percent(params.rate),
            maturity: params.maturity,
            volatility: decimal_to_percent(params.volatility),
            pricing: valuation.pricing,
            greeks: valuation.greeks,
        }
    }

    pub fn display(&self) -> DisplayGreeks {
        DisplayGreeks::from(&self.greeks)
    }
}
