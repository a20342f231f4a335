//! # Position assembly
//!
//! Turns the periodic series into geocentric ecliptic coordinates:
//!
//! 1. add the additive terms due to Venus (A1), Jupiter (A2) and the flattening of the
//!    Earth (A3) to Σl and Σb,
//! 2. rescale the sums (10⁻⁶ degree, 10⁻³ km),
//! 3. add them to the mean longitude L′ and to the mean Earth–Moon distance.

use crate::constants::{
    Degree, Kilometer, ANGULAR_SERIES_SCALE, DISTANCE_SERIES_SCALE, MEAN_EARTH_MOON_DISTANCE,
    RADEG,
};
use crate::fundamental_arguments::{reduce_degrees, FundamentalArguments};
use crate::periodic_series::SeriesSums;
use crate::periodic_terms::{LATITUDE_ADDITIVE_COEFFS, LONGITUDE_ADDITIVE_COEFFS};

/// Geocentric ecliptic coordinates of the Moon, referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EclipticPosition {
    /// λ, geocentric longitude in `[0, 360)`
    pub longitude: Degree,
    /// β, geocentric latitude
    pub latitude: Degree,
    /// Δ, distance between the centers of the Earth and the Moon
    pub distance: Kilometer,
}

/// Add the planetary additive terms to the series sums.
///
/// ```text
/// Σl += 3958 sin A1 + 1962 sin(L′ − F) + 318 sin A2
/// Σb += −2235 sin L′ + 382 sin A3 + 175 sin(A1 − F) + 175 sin(A1 + F)
///       + 127 sin(L′ − M′) − 115 sin(L′ + M′)
/// ```
///
/// Σr has no additive term and is returned unchanged.
pub fn apply_additive_terms(arguments: &FundamentalArguments, sums: &SeriesSums) -> SeriesSums {
    let sin_deg = |x: Degree| (x * RADEG).sin();

    let l_prime = arguments.mean_longitude;
    let m_prime = arguments.moon_mean_anomaly;
    let f = arguments.argument_of_latitude;
    let a1 = arguments.venus_action;
    let a2 = arguments.jupiter_action;
    let a3 = arguments.flattening_action;

    let [cl1, cl2, cl3] = LONGITUDE_ADDITIVE_COEFFS;
    let longitude =
        sums.longitude + cl1 * sin_deg(a1) + cl2 * sin_deg(l_prime - f) + cl3 * sin_deg(a2);

    let [cb1, cb2, cb3, cb4, cb5, cb6] = LATITUDE_ADDITIVE_COEFFS;
    let latitude = sums.latitude
        + cb1 * sin_deg(l_prime)
        + cb2 * sin_deg(a3)
        + cb3 * sin_deg(a1 - f)
        + cb4 * sin_deg(a1 + f)
        + cb5 * sin_deg(l_prime - m_prime)
        + cb6 * sin_deg(l_prime + m_prime);

    SeriesSums {
        longitude,
        distance: sums.distance,
        latitude,
    }
}

/// Build the ecliptic position from the corrected series sums.
///
/// Arguments
/// ---------
/// * `arguments`: fundamental arguments of the epoch (provides L′).
/// * `corrected`: series sums **including** the additive terms
///   (see [`apply_additive_terms`]).
///
/// Return
/// ------
/// * `λ = L′ + Σl/10⁶` reduced with [`reduce_degrees`], `β = Σb/10⁶`,
///   `Δ = 385000.56 + Σr/10³`.
pub fn ecliptic_position(
    arguments: &FundamentalArguments,
    corrected: &SeriesSums,
) -> EclipticPosition {
    EclipticPosition {
        longitude: reduce_degrees(
            arguments.mean_longitude + corrected.longitude / ANGULAR_SERIES_SCALE,
        ),
        latitude: corrected.latitude / ANGULAR_SERIES_SCALE,
        distance: MEAN_EARTH_MOON_DISTANCE + corrected.distance / DISTANCE_SERIES_SCALE,
    }
}

/// Apply the additive terms and assemble the position in one step.
///
/// Return
/// ------
/// * The corrected sums and the resulting ecliptic position.
pub fn assemble(
    arguments: &FundamentalArguments,
    sums: &SeriesSums,
) -> (SeriesSums, EclipticPosition) {
    let corrected = apply_additive_terms(arguments, sums);
    (corrected, ecliptic_position(arguments, &corrected))
}

#[cfg(test)]
mod position_test {
    use super::*;
    use crate::periodic_series::sum_meeus_series;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_sums_give_mean_position() {
        let args = FundamentalArguments {
            mean_longitude: 10.0,
            ..FundamentalArguments::default()
        };
        let pos = ecliptic_position(&args, &SeriesSums::default());

        assert_eq!(pos.longitude, 10.0);
        assert_eq!(pos.latitude, 0.0);
        assert_eq!(pos.distance, MEAN_EARTH_MOON_DISTANCE);
    }

    #[test]
    fn test_longitude_is_reduced() {
        let args = FundamentalArguments {
            mean_longitude: 359.5,
            ..FundamentalArguments::default()
        };
        let sums = SeriesSums {
            longitude: 1_000_000.0,
            ..SeriesSums::default()
        };
        let pos = ecliptic_position(&args, &sums);
        assert_abs_diff_eq!(pos.longitude, 0.5, epsilon = 1e-12);

        // A sum just below zero rounds back to the full turn
        let pos = ecliptic_position(
            &FundamentalArguments::default(),
            &SeriesSums {
                longitude: -1e-14,
                ..SeriesSums::default()
            },
        );
        assert_eq!(pos.longitude, 360.0);
    }

    #[test]
    fn test_additive_terms_leave_distance_untouched() {
        let args = FundamentalArguments::from_jde(2448724.5);
        let sums = SeriesSums {
            longitude: 1.0,
            distance: 2.0,
            latitude: 3.0,
        };
        let corrected = apply_additive_terms(&args, &sums);
        assert_eq!(corrected.distance, 2.0);
        assert_abs_diff_eq!(corrected.longitude - 1.0, 2037.481856, epsilon = 1e-5);
    }

    #[test]
    fn test_meeus_example_assembly() {
        let args = FundamentalArguments::from_jde(2448724.5);
        let (corrected, pos) = assemble(&args, &sum_meeus_series(&args));

        assert_abs_diff_eq!(corrected.longitude, -1127527.033355, epsilon = 0.1);
        assert_abs_diff_eq!(corrected.latitude, -3224463.902493, epsilon = 0.1);
        assert_abs_diff_eq!(corrected.distance, -16590875.183568, epsilon = 0.1);

        assert_abs_diff_eq!(pos.longitude, 133.162655, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.latitude, -3.224464, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.distance, 368409.684816, epsilon = 1e-6);
    }
}
