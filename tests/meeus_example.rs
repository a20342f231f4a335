mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use lunar_ephem::fundamental_arguments::{reduce_degrees, FundamentalArguments};
use lunar_ephem::moon_position::{LunarComputation, MoonPosition};
use lunar_ephem::periodic_series::sum_meeus_series;
use lunar_ephem::position::assemble;
use lunar_ephem::time::{iso_to_jde, jde_to_calendar_date};

use crate::common::{assert_position_close, meeus_example_expected, MEEUS_EXAMPLE_JDE};

#[test]
fn test_fundamental_arguments_of_example() {
    let args = FundamentalArguments::from_jde(MEEUS_EXAMPLE_JDE);

    assert_abs_diff_eq!(args.dynamical_time, -0.0772211, epsilon = 1e-7);
    assert_abs_diff_eq!(args.mean_elongation, 113.842304, epsilon = 1e-3);
    assert_abs_diff_eq!(args.sun_mean_anomaly, 97.643514, epsilon = 1e-6);
    assert_abs_diff_eq!(args.moon_mean_anomaly, 5.150833, epsilon = 1e-6);
    assert_abs_diff_eq!(args.argument_of_latitude, 219.889721, epsilon = 1e-6);
    assert_abs_diff_eq!(args.venus_action, 109.57, epsilon = 1e-2);
    assert_abs_diff_eq!(args.jupiter_action, 123.78, epsilon = 1e-2);
    assert_abs_diff_eq!(args.flattening_action, 229.53, epsilon = 1e-2);
    assert_abs_diff_eq!(args.eccentricity, 1.000194, epsilon = 1e-6);
}

#[test]
fn test_pipeline_stage_by_stage() {
    let args = FundamentalArguments::from_jde(MEEUS_EXAMPLE_JDE);
    let sums = sum_meeus_series(&args);
    let (corrected, ecliptic) = assemble(&args, &sums);

    assert_abs_diff_eq!(corrected.longitude, -1_127_527.03, epsilon = 0.1);
    assert_abs_diff_eq!(corrected.latitude, -3_224_463.90, epsilon = 0.1);
    assert_abs_diff_eq!(corrected.distance, -16_590_875.18, epsilon = 0.1);

    let run = LunarComputation::run(MEEUS_EXAMPLE_JDE);
    assert_eq!(run.arguments, args);
    assert_eq!(run.periodic_sums, sums);
    assert_eq!(run.corrected_sums, corrected);
    assert_eq!(run.ecliptic, ecliptic);
}

#[test]
fn test_full_position_of_example() {
    let moon = MoonPosition::at_jde(MEEUS_EXAMPLE_JDE);
    assert_position_close(&moon, &meeus_example_expected(), 1e-6, 1e-4);
}

#[test]
fn test_example_from_iso_date() {
    let jde = iso_to_jde("1992-04-12T00:00:00 TT").unwrap();
    let moon = MoonPosition::at_jde(jde);
    assert_relative_eq!(moon.longitude, 133.162655, epsilon = 1e-6);

    let date = jde_to_calendar_date(moon.jde);
    assert_eq!((date.year, date.month), (1992, 4));
}

#[test]
fn test_reduce_degrees_properties() {
    assert_eq!(reduce_degrees(0.0), 0.0);
    assert_eq!(reduce_degrees(360.0), 0.0);
    assert_abs_diff_eq!(reduce_degrees(-13.6), 346.4, epsilon = 1e-12);
    assert_abs_diff_eq!(reduce_degrees(721.3), 1.3, epsilon = 1e-6);

    for x in [-1234.5, -0.25, 12.0, 359.999, 4000.1] {
        let r = reduce_degrees(x);
        assert!((0.0..360.0).contains(&r));
        assert_abs_diff_eq!(reduce_degrees(x + 360.0), r, epsilon = 1e-9);
        assert_eq!(reduce_degrees(r), r);
    }
}

#[test]
fn test_bit_identical_runs() {
    let a = MoonPosition::at_jde(MEEUS_EXAMPLE_JDE);
    let b = MoonPosition::at_jde(MEEUS_EXAMPLE_JDE);
    assert_eq!(a.longitude.to_bits(), b.longitude.to_bits());
    assert_eq!(a.latitude.to_bits(), b.latitude.to_bits());
    assert_eq!(a.distance.to_bits(), b.distance.to_bits());
}

#[test]
fn test_far_epochs_are_extrapolated() {
    for jde in [0.0, 1_000_000.0, 5_000_000.0] {
        let moon = MoonPosition::at_jde(jde);
        assert!(moon.longitude.is_finite());
        assert!(moon.latitude.is_finite());
        assert!(moon.distance.is_finite());
    }

    let moon = MoonPosition::at_jde(f64::INFINITY);
    assert!(moon.longitude.is_nan());
}
