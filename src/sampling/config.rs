#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use anyhow::Context;

use crate::conversion::{DAYS_PER_YEAR, RHO_SCALE, VEGA_SCALE};
use crate::error::{PricingError, Result};

/// Inclusive bounds of a swept input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRange {
    pub lower: f64,
    pub upper: f64,
}

impl SweepRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.lower * factor, self.upper * factor)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(self.lower.is_finite() && self.upper.is_finite()) || self.lower >= self.upper {
            return Err(PricingError::InvalidSweep {
                reason: format!(
                    "{name} must satisfy lower < upper with finite bounds, got [{}, {}]",
                    self.lower, self.upper
                ),
            });
        }
        Ok(())
    }
}

/// Sampling configuration shared by every sweep kind.
///
/// Underlying ranges are multiples of the strike; the volatility range is an
/// absolute decimal range. Every field has a default, so a TOML file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Points per curve, endpoints included.
    #[cfg_attr(feature = "serde", serde(default = "default_sample_count"))]
    pub sample_count: usize,

    /// Spot range for price curves, as multiples of K.
    #[cfg_attr(feature = "serde", serde(default = "default_underlying_range"))]
    pub underlying_range: SweepRange,

    /// Spot range for Greek curves, as multiples of K.
    #[cfg_attr(feature = "serde", serde(default = "default_underlying_range"))]
    pub greeks_underlying_range: SweepRange,

    /// Absolute volatility range.
    #[cfg_attr(feature = "serde", serde(default = "default_volatility_range"))]
    pub volatility_range: SweepRange,

    /// Vega is divided by this before it is put on a Greek curve.
    #[cfg_attr(feature = "serde", serde(default = "default_vega_scale"))]
    pub vega_scale: f64,

    /// Rho is divided by this before it is put on a Greek curve.
    #[cfg_attr(feature = "serde", serde(default = "default_rho_scale"))]
    pub rho_scale: f64,

    /// Annual theta is divided by this to get a daily figure.
    #[cfg_attr(feature = "serde", serde(default = "default_days_per_year"))]
    pub days_per_year: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            underlying_range: default_underlying_range(),
            greeks_underlying_range: default_underlying_range(),
            volatility_range: default_volatility_range(),
            vega_scale: default_vega_scale(),
            rho_scale: default_rho_scale(),
            days_per_year: default_days_per_year(),
        }
    }
}

impl SamplerConfig {
    /// 100 points over the default ranges.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Dense curves for print-quality charts.
    pub fn fine() -> Self {
        Self {
            sample_count: 400,
            ..Self::default()
        }
    }

    /// Few points, for previews and quick checks.
    pub fn coarse() -> Self {
        Self {
            sample_count: 25,
            ..Self::default()
        }
    }

    pub fn with_sample_count(self, sample_count: usize) -> Self {
        Self {
            sample_count,
            ..self
        }
    }

    /// Reject configurations no sweep can honour.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 2 {
            return Err(PricingError::InvalidSweep {
                reason: format!("sample_count must be at least 2, got {}", self.sample_count),
            });
        }
        self.underlying_range.validate("underlying_range")?;
        self.greeks_underlying_range
            .validate("greeks_underlying_range")?;
        self.volatility_range.validate("volatility_range")?;

        for (name, value) in [
            ("vega_scale", self.vega_scale),
            ("rho_scale", self.rho_scale),
            ("days_per_year", self.days_per_year),
        ] {
            if !value.is_finite() || value == 0.0 {
                return Err(PricingError::InvalidSweep {
                    reason: format!("{name} must be finite and non-zero, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse sampler config")?;
        config.validate().context("invalid sampler config")?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sampler config {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

fn default_sample_count() -> usize {
    100
}

fn default_underlying_range() -> SweepRange {
    SweepRange::new(0.5, 1.5)
}

fn default_volatility_range() -> SweepRange {
    SweepRange::new(0.01, 0.50)
}

fn default_vega_scale() -> f64 {
    VEGA_SCALE
}

fn default_rho_scale() -> f64 {
    RHO_SCALE
}

fn default_days_per_year() -> f64 {
    DAYS_PER_YEAR
}
