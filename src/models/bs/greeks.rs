//! First- and second-order sensitivities in raw, annualised units.
//!
//! Theta is per year and rho/vega are per unit (not per percentage point) of
//! rate/volatility. Display scalings live in [`crate::conversion`].

use super::{finite, BlackScholes};
use crate::error::Result;
use crate::model_params::OptionParameters;
use crate::models::normal;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    pub delta_call: f64,
    pub delta_put: f64,
    /// Shared by call and put.
    pub gamma: f64,
    /// Shared by call and put.
    pub vega: f64,
    pub theta_call: f64,
    pub theta_put: f64,
    pub rho_call: f64,
    pub rho_put: f64,
}

impl BlackScholes {
    /// `Φ(d1)`
    pub fn delta_call(&self) -> Result<f64> {
        finite("delta_call", normal::cdf(self.d1))
    }

    /// `Φ(d1) − 1`
    pub fn delta_put(&self) -> Result<f64> {
        finite("delta_put", normal::cdf(self.d1) - 1.0)
    }

    /// `φ(d1) / (S·σ·√T)`
    pub fn gamma(&self) -> Result<f64> {
        let p = &self.params;
        finite(
            "gamma",
            normal::pdf(self.d1) / (p.spot * p.volatility * self.sqrt_t),
        )
    }

    /// `S·√T·φ(d1)`
    pub fn vega(&self) -> Result<f64> {
        finite("vega", self.params.spot * self.sqrt_t * normal::pdf(self.d1))
    }

    /// `−(S·φ(d1)·σ)/(2√T) − r·K·e^{−rT}·Φ(d2)`
    pub fn theta_call(&self) -> Result<f64> {
        let p = &self.params;
        let carry = p.rate * p.strike * self.discount * normal::cdf(self.d2);
        finite("theta_call", self.theta_decay() - carry)
    }

    /// `−(S·φ(d1)·σ)/(2√T) + r·K·e^{−rT}·Φ(−d2)`
    pub fn theta_put(&self) -> Result<f64> {
        let p = &self.params;
        let carry = p.rate * p.strike * self.discount * normal::cdf(-self.d2);
        finite("theta_put", self.theta_decay() + carry)
    }

    /// `K·T·e^{−rT}·Φ(d2)`
    pub fn rho_call(&self) -> Result<f64> {
        let p = &self.params;
        finite(
            "rho_call",
            p.strike * p.maturity * self.discount * normal::cdf(self.d2),
        )
    }

    /// `−K·T·e^{−rT}·Φ(−d2)`
    pub fn rho_put(&self) -> Result<f64> {
        let p = &self.params;
        finite(
            "rho_put",
            -p.strike * p.maturity * self.discount * normal::cdf(-self.d2),
        )
    }

    pub fn greeks(&self) -> Result<GreeksResult> {
        Ok(GreeksResult {
            delta_call: self.delta_call()?,
            delta_put: self.delta_put()?,
            gamma: self.gamma()?,
            vega: self.vega()?,
            theta_call: self.theta_call()?,
            theta_put: self.theta_put()?,
            rho_call: self.rho_call()?,
            rho_put: self.rho_put()?,
        })
    }

    // volatility term shared by both thetas
    fn theta_decay(&self) -> f64 {
        let p = &self.params;
        -(p.spot * normal::pdf(self.d1) * p.volatility) / (2.0 * self.sqrt_t)
    }
}

pub fn delta_call(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.delta_call()
}

pub fn delta_put(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.delta_put()
}

pub fn gamma(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.gamma()
}

pub fn vega(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.vega()
}

pub fn theta_call(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.theta_call()
}

pub fn theta_put(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.theta_put()
}

pub fn rho_call(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.rho_call()
}

pub fn rho_put(params: &OptionParameters) -> Result<f64> {
    BlackScholes::new(*params)?.rho_put()
}

/// All Greeks for `params`.
pub fn greeks(params: &OptionParameters) -> Result<GreeksResult> {
    BlackScholes::new(*params)?.greeks()
}
