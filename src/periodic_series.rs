//! # Periodic series summation
//!
//! Evaluates the two 60-term trigonometric series of the truncated ELP2000 theory:
//!
//! ```text
//! Σl = Σ  Σl_i · E^|m_i| · sin(d_i·D + m_i·M + m′_i·M′ + f_i·F)     (table 47.A)
//! Σr = Σ  Σr_i · E^|m_i| · cos(d_i·D + m_i·M + m′_i·M′ + f_i·F)     (table 47.A)
//! Σb = Σ  Σb_j · E^|m_j| · sin(d_j·D + m_j·M + m′_j·M′ + f_j·F)     (table 47.B)
//! ```
//!
//! Terms are accumulated in ascending row order. Floating-point addition is not
//! associative, so any other order gives results that differ in the last bits.

use crate::fundamental_arguments::FundamentalArguments;
use crate::periodic_terms::{
    LatitudeTerm, LongitudeDistanceTerm, LATITUDE_TERMS, LONGITUDE_DISTANCE_TERMS,
};

/// Accumulated periodic series.
///
/// `longitude` and `latitude` are in 10⁻⁶ degree, `distance` in 10⁻³ km (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesSums {
    /// Σl
    pub longitude: f64,
    /// Σr
    pub distance: f64,
    /// Σb
    pub latitude: f64,
}

/// Sum the longitude/distance and latitude series for a set of fundamental arguments.
///
/// Arguments
/// ---------
/// * `arguments`: fundamental arguments at the epoch of interest.
/// * `longitude_table`: rows of the longitude/distance series.
/// * `latitude_table`: rows of the latitude series.
///
/// Return
/// ------
/// * The raw series sums, without the additive planetary terms.
///
/// # See also
/// * [`sum_meeus_series`] – same summation over the built-in tables
/// * [`crate::position::apply_additive_terms`] – adds the Venus/Jupiter/flattening terms
pub fn sum_periodic_terms(
    arguments: &FundamentalArguments,
    longitude_table: &[LongitudeDistanceTerm],
    latitude_table: &[LatitudeTerm],
) -> SeriesSums {
    let e = arguments.eccentricity;

    let (longitude, distance) =
        longitude_table
            .iter()
            .fold((0.0, 0.0), |(sum_l, sum_r), term| {
                let scale = e.powi(term.multipliers.eccentricity_power());
                let (sin_arg, cos_arg) = term.multipliers.argument(arguments).sin_cos();
                (
                    sum_l + term.sigma_l * scale * sin_arg,
                    sum_r + term.sigma_r * scale * cos_arg,
                )
            });

    let latitude = latitude_table.iter().fold(0.0, |sum_b, term| {
        let scale = e.powi(term.multipliers.eccentricity_power());
        sum_b + term.sigma_b * scale * term.multipliers.argument(arguments).sin()
    });

    SeriesSums {
        longitude,
        distance,
        latitude,
    }
}

/// Sum the built-in Meeus tables 47.A and 47.B.
pub fn sum_meeus_series(arguments: &FundamentalArguments) -> SeriesSums {
    sum_periodic_terms(arguments, &LONGITUDE_DISTANCE_TERMS, &LATITUDE_TERMS)
}
