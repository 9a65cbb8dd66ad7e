
use bs_greeks_lib::models::bs;
use bs_greeks_lib::sampling::export::write_csv;
use bs_greeks_lib::sampling::linspace;
use bs_greeks_lib::{
    default_configs, sample_curve, DomainError, PricingError, SamplerConfig, SweepKind,
    SweepRange,
};
use test_utils::{assert_close, params, reference_params};

/// Every sweep kind yields exactly the configured number of samples,
/// strictly ascending in x.
#[test]
fn test_curve_length_and_ordering() {
    let p = params(95.0, 110.0, 0.03, 0.5, 0.3);
    for config in [
        default_configs::standard(),
        default_configs::fine(),
        default_configs::coarse(),
        SamplerConfig::default().with_sample_count(2),
    ] {
        for kind in SweepKind::ALL {
            let curve = sample_curve(&p, kind, &config).expect("sweep must succeed");
            assert_eq!(curve.len(), config.sample_count, "{kind:?}");
            assert!(curve.is_complete(), "{kind:?} excluded {:?}", curve.excluded);
            let xs = curve.xs();
            assert!(
                xs.windows(2).all(|w| w[0] < w[1]),
                "{kind:?} not strictly ascending"
            );
            for sample in &curve.samples {
                let values = sample.values.as_ref().expect("complete curve");
                assert_eq!(values.len(), kind.series_names().len());
            }
        }
    }
}

#[test]
fn test_price_vs_underlying_range_and_markers() {
    let p = params(105.0, 100.0, 0.05, 1.0, 0.2);
    let config = SamplerConfig::default();
    let curve = sample_curve(&p, SweepKind::PriceVsUnderlying, &config).unwrap();

    let xs = curve.xs();
    assert_close(xs[0], 50.0, 1e-12, "first spot");
    assert_eq!(*xs.last().unwrap(), 150.0);

    let calls = curve.values_of("call").unwrap();
    let puts = curve.values_of("put").unwrap();
    let max_price = calls.iter().chain(puts.iter()).copied().fold(0.0, f64::max);

    let strike = curve.marker("strike").expect("strike marker");
    let spot = curve.marker("spot").expect("spot marker");
    assert_eq!(strike.x, 100.0);
    assert_eq!(spot.x, 105.0);
    for m in [strike, spot] {
        assert_eq!(m.y_min, 0.0);
        assert_eq!(m.y_max, max_price);
    }
    assert_eq!(curve.markers.len(), 2);

    // each sample is the engine evaluated at that spot
    let (x, y) = curve.series("call").unwrap()[37];
    assert_eq!(y, Some(bs::call_price(&p.with_spot(x)).unwrap()));
}

#[test]
fn test_price_vs_volatility_range_and_marker() {
    let p = reference_params();
    let config = SamplerConfig::default();
    let curve = sample_curve(&p, SweepKind::PriceVsVolatility, &config).unwrap();

    let xs = curve.xs();
    assert_eq!(xs[0], 0.01);
    assert_eq!(xs[99], 0.50);
    assert_eq!(curve.markers.len(), 1);
    let marker = curve.marker("volatility").unwrap();
    assert_eq!(marker.x, 0.2);
    assert!(marker.y_max > 10.0, "max price over the sweep {}", marker.y_max);
}

/// Call is non-decreasing in spot; call and put are non-decreasing in volatility.
#[test]
fn test_monotonicity_along_sweeps() {
    let p = params(100.0, 100.0, 0.05, 1.0, 0.2);
    let config = default_configs::fine();

    let by_spot = sample_curve(&p, SweepKind::PriceVsUnderlying, &config).unwrap();
    let calls = by_spot.values_of("call").unwrap();
    assert!(calls.windows(2).all(|w| w[1] >= w[0] - 1e-12));

    let by_vol = sample_curve(&p, SweepKind::PriceVsVolatility, &config).unwrap();
    for name in ["call", "put"] {
        let prices = by_vol.values_of(name).unwrap();
        assert!(
            prices.windows(2).all(|w| w[1] >= w[0] - 1e-12),
            "{name} decreased with volatility"
        );
    }
}

#[test]
fn test_greeks_vs_underlying_scaling() {
    let p = reference_params();
    let config = SamplerConfig::default();
    let curve = sample_curve(&p, SweepKind::GreeksVsUnderlying, &config).unwrap();
    assert_eq!(curve.series_names(), &["delta", "gamma", "vega", "theta"]);

    let (x, values) = {
        let s = &curve.samples[60];
        (s.x, s.values.clone().unwrap())
    };
    let g = bs::greeks::greeks(&p.with_spot(x)).unwrap();
    assert_eq!(values[0], g.delta_call);
    assert_eq!(values[1], g.gamma);
    assert_close(values[2], g.vega / 100.0, 1e-15, "vega / 100");
    assert_close(values[3], g.theta_call / 365.0, 1e-15, "theta / 365");

    let deltas = curve.values_of("delta").unwrap();
    let thetas = curve.values_of("theta").unwrap();
    let marker = curve.marker("spot").unwrap();
    assert_eq!(marker.y_max, deltas.iter().copied().fold(f64::MIN, f64::max));
    assert_eq!(marker.y_min, thetas.iter().copied().fold(f64::MAX, f64::min));
    assert!(marker.y_min < 0.0);
}

#[test]
fn test_greeks_vs_volatility_includes_rho() {
    let p = reference_params();
    let config = SamplerConfig::default();
    let curve = sample_curve(&p, SweepKind::GreeksVsVolatility, &config).unwrap();
    let rho = curve.series("rho").unwrap();
    let (x, y) = rho[10];
    let expected = bs::greeks::rho_call(&p.with_volatility(x)).unwrap() / 100.0;
    assert_close(y.unwrap(), expected, 1e-15, "rho / 100");
    assert!(curve.series("missing").is_none());
}

/// A sweep that starts at zero volatility keeps its length; the degenerate
/// point is reported and carries no values.
#[test]
fn test_degenerate_points_are_excluded_not_fatal() {
    let p = reference_params();
    let config = SamplerConfig {
        volatility_range: SweepRange::new(0.0, 0.5),
        ..SamplerConfig::default()
    };

    for kind in [SweepKind::PriceVsVolatility, SweepKind::GreeksVsVolatility] {
        let curve = sample_curve(&p, kind, &config).unwrap();
        assert_eq!(curve.len(), 100);
        assert_eq!(curve.excluded.len(), 1);
        let excluded = curve.excluded[0];
        assert_eq!(excluded.index, 0);
        assert_eq!(excluded.x, 0.0);
        assert!(matches!(
            excluded.error,
            DomainError::DegenerateVolatilityOrMaturity { .. }
        ));
        assert!(curve.samples[0].values.is_none());
        assert!(curve.samples[1..].iter().all(|s| s.values.is_some()));
    }
}

#[test]
fn test_underlying_sweep_through_zero_spot() {
    let p = reference_params();
    let config = SamplerConfig {
        underlying_range: SweepRange::new(-0.5, 1.5),
        sample_count: 5,
        ..SamplerConfig::default()
    };
    // spots: -50, 0, 50, 100, 150
    let curve = sample_curve(&p, SweepKind::PriceVsUnderlying, &config).unwrap();
    let indices: Vec<usize> = curve.excluded.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1]);
    assert!(curve
        .excluded
        .iter()
        .all(|e| matches!(e.error, DomainError::NonPositivePrice { .. })));
    // markers only look at valid samples
    assert!(curve.markers.iter().all(|m| m.y_max > 0.0));
}

#[test]
fn test_every_point_excluded_at_zero_maturity() {
    let mut p = reference_params();
    p.maturity = 0.0;
    for kind in SweepKind::ALL {
        let curve = sample_curve(&p, kind, &default_configs::coarse()).unwrap();
        assert_eq!(curve.len(), 25);
        assert_eq!(curve.excluded.len(), 25);
        assert!(curve.markers.iter().all(|m| m.y_min == 0.0 && m.y_max == 0.0));
    }
}

#[test]
fn test_ill_formed_sweeps_are_errors() {
    let p = reference_params();

    let too_few = SamplerConfig::default().with_sample_count(1);
    assert!(matches!(
        sample_curve(&p, SweepKind::PriceVsUnderlying, &too_few),
        Err(PricingError::InvalidSweep { .. })
    ));

    let inverted = SamplerConfig {
        volatility_range: SweepRange::new(0.5, 0.01),
        ..SamplerConfig::default()
    };
    assert!(matches!(
        sample_curve(&p, SweepKind::PriceVsVolatility, &inverted),
        Err(PricingError::InvalidSweep { .. })
    ));

    let zero_strike = params(100.0, 0.0, 0.05, 1.0, 0.2);
    let config = SamplerConfig::default();
    assert!(matches!(
        sample_curve(&zero_strike, SweepKind::GreeksVsUnderlying, &config),
        Err(PricingError::InvalidSweep { .. })
    ));
    // the volatility axis does not depend on the strike
    let curve = sample_curve(&zero_strike, SweepKind::PriceVsVolatility, &config).unwrap();
    assert_eq!(curve.excluded.len(), 100);
}

#[test]
fn test_overflowing_axis_is_a_sweep_error() {
    // 1.5 * K overflows to infinity
    let huge_strike = params(1e308, 1.5e308, 0.05, 1.0, 0.2);
    let err = sample_curve(&huge_strike, SweepKind::PriceVsUnderlying, &SamplerConfig::default())
        .unwrap_err();
    assert!(matches!(err, PricingError::InvalidSweep { .. }), "{err:?}");

    let wide = SamplerConfig {
        underlying_range: SweepRange::new(0.5, 1e307),
        ..SamplerConfig::default()
    };
    let err = sample_curve(&reference_params(), SweepKind::PriceVsUnderlying, &wide).unwrap_err();
    assert!(matches!(err, PricingError::InvalidSweep { .. }), "{err:?}");

    // finite bounds whose span overflows
    let span = SamplerConfig {
        volatility_range: SweepRange::new(-1e308, 1e308),
        ..SamplerConfig::default()
    };
    let err = sample_curve(&reference_params(), SweepKind::PriceVsVolatility, &span).unwrap_err();
    assert!(matches!(err, PricingError::InvalidSweep { .. }), "{err:?}");
}

#[test]
fn test_range_too_narrow_for_distinct_points() {
    let narrow = SamplerConfig {
        volatility_range: SweepRange::new(0.2, 0.2 + 1e-15),
        ..SamplerConfig::default()
    };
    for kind in [SweepKind::PriceVsVolatility, SweepKind::GreeksVsVolatility] {
        assert!(matches!(
            sample_curve(&reference_params(), kind, &narrow),
            Err(PricingError::InvalidSweep { .. })
        ));
    }

    // the same range is fine with two points
    let curve = sample_curve(
        &reference_params(),
        SweepKind::PriceVsVolatility,
        &narrow.with_sample_count(2),
    )
    .unwrap();
    let xs = curve.xs();
    assert!(xs[0] < xs[1]);
}

#[test]
fn test_linspace_endpoints() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    let xs = linspace(0.01, 0.5, 100);
    assert_eq!(xs.len(), 100);
    assert_eq!(xs[0], 0.01);
    assert_eq!(xs[99], 0.5);
    assert_close(xs[1] - xs[0], 0.49 / 99.0, 1e-15, "step");
}

#[test]
fn test_csv_export_round_trip() {
    let p = reference_params();
    let config = SamplerConfig {
        volatility_range: SweepRange::new(0.0, 0.4),
        sample_count: 5,
        ..SamplerConfig::default()
    };
    let curve = sample_curve(&p, SweepKind::PriceVsVolatility, &config).unwrap();

    let mut buf = Vec::new();
    write_csv(&curve, &mut buf).expect("export must succeed");

    let mut rdr = csv::Reader::from_reader(buf.as_slice());
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["volatility", "call", "put"]
    );

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 5);
    // excluded first point keeps x, leaves prices blank
    assert_eq!(&rows[0][0], "0");
    assert_eq!(&rows[0][1], "");
    let call: f64 = rows[2][1].parse().unwrap();
    assert_eq!(call, curve.samples[2].values.as_ref().unwrap()[0]);
}
