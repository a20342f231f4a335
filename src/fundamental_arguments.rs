//! # Fundamental arguments of the lunar theory
//!
//! Converts a Julian Ephemeris Day into the dynamical time `T` (Julian centuries since
//! J2000.0) and evaluates the polynomial expressions of Meeus, *Astronomical Algorithms*,
//! chapter 47, for:
//!
//! | Symbol | Field                                       |
//! |--------|---------------------------------------------|
//! | L′     | [`FundamentalArguments::mean_longitude`]       |
//! | D      | [`FundamentalArguments::mean_elongation`]      |
//! | M      | [`FundamentalArguments::sun_mean_anomaly`]     |
//! | M′     | [`FundamentalArguments::moon_mean_anomaly`]    |
//! | F      | [`FundamentalArguments::argument_of_latitude`] |
//! | A1     | [`FundamentalArguments::venus_action`]         |
//! | A2     | [`FundamentalArguments::jupiter_action`]       |
//! | A3     | [`FundamentalArguments::flattening_action`]    |
//! | E      | [`FundamentalArguments::eccentricity`]         |
//!
//! All angles are in degrees, reduced to `[0, 360)` with [`reduce_degrees`] (see its
//! documentation for the rounding at the upper bound).
//! The functions are total: NaN or infinite input propagates to the output.

use crate::constants::{
    Degree, JulianCenturies, DAYS_PER_JULIAN_CENTURY, FULL_CIRCLE_DEG, J2000_JDE, JDE,
};
use crate::periodic_terms::{
    ARGUMENT_OF_LATITUDE_COEFFS, EARTH_ECCENTRICITY_COEFFS, FLATTENING_ACTION_COEFFS,
    JUPITER_ACTION_COEFFS, MEAN_ELONGATION_COEFFS, MEAN_LONGITUDE_COEFFS,
    MOON_MEAN_ANOMALY_COEFFS, SUN_MEAN_ANOMALY_COEFFS, VENUS_ACTION_COEFFS,
};

/// Reduce an angle in degrees to the half-open interval `[0, 360)`.
///
/// The reduction is a floating-point remainder followed by a shift of negative results,
/// so `reduce_degrees(0.0) == 0.0`, `reduce_degrees(360.0) == 0.0` and the function is
/// idempotent on already reduced values. For inputs far outside one period the remainder
/// keeps the rounding error of the input magnitude (`reduce_degrees(721.3)` is
/// `1.2999999999999545`).
///
/// The shift of a negative remainder is rounded like any addition: a remainder closer
/// to zero than half an ulp of 360 (e.g. `-1e-20`) comes back as exactly `360.0`, so
/// the upper bound of the interval is only reached in that case.
#[inline]
pub fn reduce_degrees(value: Degree) -> Degree {
    let value = value % FULL_CIRCLE_DEG;
    if value < 0.0 {
        value + FULL_CIRCLE_DEG
    } else {
        value
    }
}

/// Dynamical time `T`, in Julian centuries elapsed since J2000.0.
///
/// Arguments
/// ---------
/// * `jde`: Julian Ephemeris Day.
///
/// Return
/// ------
/// * `T = (jde − 2451545.0) / 36525`
#[inline]
pub fn dynamical_time(jde: JDE) -> JulianCenturies {
    (jde - J2000_JDE) / DAYS_PER_JULIAN_CENTURY
}

/// Evaluate a polynomial given by its coefficients in ascending powers, with Horner's method.
#[inline]
pub(crate) fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// The fundamental arguments of the lunar series at one epoch.
///
/// A `Default` value is the zeroed state of a computation that has not been run yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FundamentalArguments {
    /// Dynamical time T (Julian centuries since J2000.0)
    pub dynamical_time: JulianCenturies,
    /// L′, Moon mean longitude
    pub mean_longitude: Degree,
    /// D, mean elongation of the Moon
    pub mean_elongation: Degree,
    /// M, Sun mean anomaly
    pub sun_mean_anomaly: Degree,
    /// M′, Moon mean anomaly
    pub moon_mean_anomaly: Degree,
    /// F, Moon argument of latitude
    pub argument_of_latitude: Degree,
    /// A1, action of Venus
    pub venus_action: Degree,
    /// A2, action of Jupiter
    pub jupiter_action: Degree,
    /// A3, flattening of the Earth
    pub flattening_action: Degree,
    /// E, eccentricity correction factor (dimensionless, ≈ 1 near J2000)
    pub eccentricity: f64,
}

impl FundamentalArguments {
    /// Compute every fundamental argument for a Julian Ephemeris Day.
    ///
    /// Arguments
    /// ---------
    /// * `jde`: Julian Ephemeris Day.
    ///
    /// Return
    /// ------
    /// * The arguments at `jde`; angles in degrees within `[0, 360)`.
    ///
    /// # See also
    /// * [`FundamentalArguments::from_dynamical_time`] – same computation from `T` directly
    pub fn from_jde(jde: JDE) -> Self {
        Self::from_dynamical_time(dynamical_time(jde))
    }

    /// Compute every fundamental argument for a dynamical time `t` (Julian centuries).
    pub fn from_dynamical_time(t: JulianCenturies) -> Self {
        let angle = |coeffs: &[f64]| reduce_degrees(horner(coeffs, t));

        FundamentalArguments {
            dynamical_time: t,
            mean_longitude: angle(&MEAN_LONGITUDE_COEFFS),
            mean_elongation: angle(&MEAN_ELONGATION_COEFFS),
            sun_mean_anomaly: angle(&SUN_MEAN_ANOMALY_COEFFS),
            moon_mean_anomaly: angle(&MOON_MEAN_ANOMALY_COEFFS),
            argument_of_latitude: angle(&ARGUMENT_OF_LATITUDE_COEFFS),
            venus_action: angle(&VENUS_ACTION_COEFFS),
            jupiter_action: angle(&JUPITER_ACTION_COEFFS),
            flattening_action: angle(&FLATTENING_ACTION_COEFFS),
            eccentricity: horner(&EARTH_ECCENTRICITY_COEFFS, t),
        }
    }
}

#[cfg(test)]
mod fundamental_arguments_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    const MEEUS_EXAMPLE_JDE: f64 = 2448724.5;

    mod tests_reduce {
        use super::*;

        #[test]
        fn test_reduce_above_one_turn() {
            // Not exactly 1.3: the remainder keeps the rounding of 721.3
            assert_abs_diff_eq!(reduce_degrees(721.3), 1.3, epsilon = 1e-6);
            assert_ne!(reduce_degrees(721.3), 1.3);
        }

        #[test]
        fn test_reduce_in_range() {
            assert_eq!(reduce_degrees(13.6), 13.6);
        }

        #[test]
        fn test_reduce_negative() {
            assert_abs_diff_eq!(reduce_degrees(-13.6), 346.4, epsilon = 1e-6);
        }

        #[test]
        fn test_reduce_bounds() {
            assert_eq!(reduce_degrees(0.0), 0.0);
            assert_eq!(reduce_degrees(360.0), 0.0);
            assert_eq!(reduce_degrees(-360.0), 0.0);
        }

        #[test]
        fn test_reduce_is_idempotent_and_periodic() {
            for &x in &[-1234.5, -0.25, 0.1, 42.0, 359.999, 1e5 + 0.3] {
                let r = reduce_degrees(x);
                assert!((0.0..360.0).contains(&r), "{x} reduced to {r}");
                assert_eq!(reduce_degrees(r), r);
                assert_abs_diff_eq!(reduce_degrees(x + 360.0), r, epsilon = 1e-9);
            }
        }

        #[test]
        fn test_reduce_tiny_negative_rounds_to_full_turn() {
            assert_eq!(reduce_degrees(-1e-20), 360.0);
            assert!(reduce_degrees(-1e-13) < 360.0);
        }

        #[test]
        fn test_reduce_non_finite() {
            assert!(reduce_degrees(f64::NAN).is_nan());
            assert!(reduce_degrees(f64::INFINITY).is_nan());
        }
    }

    #[test]
    fn test_dynamical_time() {
        assert_abs_diff_eq!(
            dynamical_time(MEEUS_EXAMPLE_JDE),
            -0.0772211,
            epsilon = 1e-6
        );
        assert_eq!(dynamical_time(J2000_JDE), 0.0);
        assert_eq!(dynamical_time(J2000_JDE + DAYS_PER_JULIAN_CENTURY), 1.0);
    }

    #[test]
    fn test_horner() {
        // 1 + 2t + 3t²
        assert_eq!(horner(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_eq!(horner(&[5.0], 10.0), 5.0);
    }

    #[test]
    fn test_meeus_example_arguments() {
        let args = FundamentalArguments::from_jde(MEEUS_EXAMPLE_JDE);

        assert_abs_diff_eq!(args.mean_longitude, 134.290182, epsilon = 1e-6);
        assert_abs_diff_eq!(args.mean_elongation, 113.842, epsilon = 1e-3);
        assert_abs_diff_eq!(args.sun_mean_anomaly, 97.643514, epsilon = 1e-6);
        assert_abs_diff_eq!(args.moon_mean_anomaly, 5.150833, epsilon = 1e-6);
        assert_abs_diff_eq!(args.argument_of_latitude, 219.889721, epsilon = 1e-6);
        assert_abs_diff_eq!(args.venus_action, 109.57, epsilon = 1e-2);
        assert_abs_diff_eq!(args.jupiter_action, 123.78, epsilon = 1e-2);
        assert_abs_diff_eq!(args.flattening_action, 229.53, epsilon = 1e-2);
        assert_abs_diff_eq!(args.eccentricity, 1.000194, epsilon = 1e-6);
    }

    #[test]
    fn test_arguments_at_j2000() {
        let args = FundamentalArguments::from_jde(J2000_JDE);

        assert_eq!(args.dynamical_time, 0.0);
        assert_eq!(args.mean_longitude, 218.3164477);
        assert_eq!(args.mean_elongation, 297.8501921);
        assert_eq!(args.eccentricity, 1.0);
    }

    #[test]
    fn test_default_is_zeroed() {
        let args = FundamentalArguments::default();
        assert_eq!(args.dynamical_time, 0.0);
        assert_eq!(args.mean_longitude, 0.0);
        assert_eq!(args.eccentricity, 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let args = FundamentalArguments::from_jde(f64::NAN);
        assert!(args.dynamical_time.is_nan());
        assert!(args.mean_longitude.is_nan());
        assert!(args.eccentricity.is_nan());
    }

    #[test]
    fn test_far_epochs_stay_reduced() {
        for &jde in &[0.0, 1_000_000.5, 5_373_484.5] {
            let args = FundamentalArguments::from_jde(jde);
            for angle in [
                args.mean_longitude,
                args.mean_elongation,
                args.sun_mean_anomaly,
                args.moon_mean_anomaly,
                args.argument_of_latitude,
                args.venus_action,
                args.jupiter_action,
                args.flattening_action,
            ] {
                assert!((0.0..360.0).contains(&angle));
            }
        }
    }
}
