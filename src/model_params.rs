//! Parameter containers for the pricing engine and the boundary that feeds it.
//!
//! [`OptionParameters`] is the only thing the engine sees and is always in
//! decimal form. [`BoundaryInputs`] mirrors what a form or JSON request
//! carries (rate and volatility in percent) and performs the percent to
//! decimal conversion exactly once, in [`BoundaryInputs::to_parameters`].

use crate::error::{InputError, Result};

/// The five Black-Scholes inputs, in decimal form.
///
/// Construction only checks finiteness. Range checks (positive prices,
/// positive volatility and maturity) belong to the engine, which reports them
/// as [`crate::DomainError`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Current underlying price S.
    pub spot: f64,
    /// Strike price K.
    pub strike: f64,
    /// Annualised continuously compounded risk-free rate r (0.05 = 5%).
    pub rate: f64,
    /// Time to expiry T in years.
    pub maturity: f64,
    /// Annualised volatility σ (0.2 = 20%).
    pub volatility: f64,
}

impl OptionParameters {
    pub fn new(spot: f64, strike: f64, rate: f64, maturity: f64, volatility: f64) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            rate,
            maturity,
            volatility,
        };
        params.check_finite()?;
        Ok(params)
    }

    /// Fails with [`InputError::NonFinite`] naming the first non-finite field.
    pub fn check_finite(&self) -> Result<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field, value }.into());
            }
        }
        Ok(())
    }

    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ]
    }
}

/// Raw scalars as they arrive at the request boundary.
///
/// Field names follow the request payload. `interest_rate` and `volatility`
/// are percentages ("5" means 5%). Missing fields take the defaults
/// 100 / 100 / 5% / 1y / 20%.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoundaryInputs {
    pub stock_price: f64,
    pub strike_price: f64,
    /// Percent.
    pub interest_rate: f64,
    /// Years.
    pub maturity: f64,
    /// Percent.
    pub volatility: f64,
}

impl Default for BoundaryInputs {
    fn default() -> Self {
        Self {
            stock_price: 100.0,
            strike_price: 100.0,
            interest_rate: 5.0,
            maturity: 1.0,
            volatility: 20.0,
        }
    }
}

impl BoundaryInputs {
    /// Parse each field from text, as submitted by a form.
    ///
    /// `None` falls back to the field default; blank text is treated the same
    /// way. Anything else must parse as a finite `f64`.
    pub fn from_strs(
        stock_price: Option<&str>,
        strike_price: Option<&str>,
        interest_rate: Option<&str>,
        maturity: Option<&str>,
        volatility: Option<&str>,
    ) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            stock_price: parse_or("stock_price", stock_price, defaults.stock_price)?,
            strike_price: parse_or("strike_price", strike_price, defaults.strike_price)?,
            interest_rate: parse_or("interest_rate", interest_rate, defaults.interest_rate)?,
            maturity: parse_or("maturity", maturity, defaults.maturity)?,
            volatility: parse_or("volatility", volatility, defaults.volatility)?,
        })
    }

    /// Convert to engine units: rate and volatility are divided by 100 here
    /// and nowhere else.
    pub fn to_parameters(&self) -> Result<OptionParameters> {
        OptionParameters::new(
            self.stock_price,
            self.strike_price,
            percent_to_decimal(self.interest_rate),
            self.maturity,
            percent_to_decimal(self.volatility),
        )
    }
}

/// Parse a single boundary scalar. Rejects text that is not a number and
/// numbers that are not finite ("inf", "NaN").
pub fn parse_scalar(field: &'static str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::MalformedScalar {
            field,
            raw: raw.to_string(),
        })?;
    if !value.is_finite() {
        return Err(InputError::MalformedScalar {
            field,
            raw: raw.to_string(),
        }
        .into());
    }
    Ok(value)
}

fn parse_or(field: &'static str, raw: Option<&str>, default: f64) -> Result<f64> {
    match raw {
        Some(text) if !text.trim().is_empty() => parse_scalar(field, text),
        _ => Ok(default),
    }
}

#[inline]
pub fn percent_to_decimal(pct: f64) -> f64 {
    pct / 100.0
}

#[inline]
pub fn decimal_to_percent(decimal: f64) -> f64 {
    decimal * 100.0
}
