use crate::error::DomainError;

/// Which input is swept and which quantities are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepKind {
    /// Call and put price over spot.
    PriceVsUnderlying,
    /// Call and put price over volatility.
    PriceVsVolatility,
    /// Call delta, gamma, scaled vega and daily call theta over spot.
    GreeksVsUnderlying,
    /// The same Greeks plus scaled call rho, over volatility.
    GreeksVsVolatility,
}

impl SweepKind {
    pub const ALL: [SweepKind; 4] = [
        SweepKind::PriceVsUnderlying,
        SweepKind::PriceVsVolatility,
        SweepKind::GreeksVsUnderlying,
        SweepKind::GreeksVsVolatility,
    ];

    pub fn swept_input(&self) -> SweptInput {
        match self {
            SweepKind::PriceVsUnderlying | SweepKind::GreeksVsUnderlying => SweptInput::Spot,
            SweepKind::PriceVsVolatility | SweepKind::GreeksVsVolatility => SweptInput::Volatility,
        }
    }

    /// Names of the y-series, in the order they appear in [`Sample::values`].
    pub fn series_names(&self) -> &'static [&'static str] {
        match self {
            SweepKind::PriceVsUnderlying | SweepKind::PriceVsVolatility => &["call", "put"],
            SweepKind::GreeksVsUnderlying => &["delta", "gamma", "vega", "theta"],
            SweepKind::GreeksVsVolatility => &["delta", "gamma", "vega", "theta", "rho"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweptInput {
    Spot,
    Volatility,
}

impl SweptInput {
    pub fn name(&self) -> &'static str {
        match self {
            SweptInput::Spot => "spot",
            SweptInput::Volatility => "volatility",
        }
    }
}

/// One point of a curve. `values` is `None` when the engine rejected this
/// point; the x position is kept so the curve length never changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    pub x: f64,
    pub values: Option<Vec<f64>>,
}

/// Vertical annotation line at `x` spanning `[y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReferenceMarker {
    pub label: &'static str,
    pub x: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// A sweep point the engine could not evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExcludedPoint {
    pub index: usize,
    pub x: f64,
    pub error: DomainError,
}

/// Sampled curve, ascending in x.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Curve {
    pub kind: SweepKind,
    pub samples: Vec<Sample>,
    pub markers: Vec<ReferenceMarker>,
    pub excluded: Vec<ExcludedPoint>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True when every point was evaluated.
    pub fn is_complete(&self) -> bool {
        self.excluded.is_empty()
    }

    pub fn series_names(&self) -> &'static [&'static str] {
        self.kind.series_names()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    /// (x, y) pairs for one named series, with `None` at excluded points.
    pub fn series(&self, name: &str) -> Option<Vec<(f64, Option<f64>)>> {
        let column = self.series_names().iter().position(|n| *n == name)?;
        Some(
            self.samples
                .iter()
                .map(|s| (s.x, s.values.as_ref().map(|v| v[column])))
                .collect(),
        )
    }

    /// Valid values of one series, in x order.
    pub fn values_of(&self, name: &str) -> Option<Vec<f64>> {
        self.series(name)
            .map(|pairs| pairs.into_iter().filter_map(|(_, y)| y).collect())
    }

    pub fn marker(&self, label: &str) -> Option<&ReferenceMarker> {
        self.markers.iter().find(|m| m.label == label)
    }
}
