//! # Periodic terms of the truncated ELP2000 lunar theory
//!
//! Static coefficient tables of Meeus, *Astronomical Algorithms* (2nd ed.), chapter 47:
//!
//! - [`LONGITUDE_DISTANCE_TERMS`]: 60 rows of multipliers of (D, M, M′, F) with the
//!   longitude sine amplitude Σl (10⁻⁶ degree) and the distance cosine amplitude Σr (10⁻³ km),
//! - [`LATITUDE_TERMS`]: 60 rows with their own multipliers and the latitude sine amplitude
//!   Σb (10⁻⁶ degree),
//! - the polynomial coefficients of every fundamental argument, in ascending powers of the
//!   dynamical time `T`,
//! - the amplitudes of the additive terms due to Venus, Jupiter and the flattening of the Earth.
//!
//! Everything here is `const` data: the tables are never mutated and need no initialization.

use crate::constants::Radian;
use crate::constants::RADEG;
use crate::fundamental_arguments::FundamentalArguments;

/// Number of rows in each periodic series.
pub const SERIES_LEN: usize = 60;

// -------------------------------------------------------------------------------------------------
// Fundamental argument polynomials (degrees, ascending powers of T)
// -------------------------------------------------------------------------------------------------

/// Moon mean longitude L′, referred to the mean equinox of date,
/// including the constant term of the light-time effect (−0″.70)
pub const MEAN_LONGITUDE_COEFFS: [f64; 5] = [
    218.3164477,
    481267.88123421,
    -0.0015786,
    1.0 / 538841.0,
    -1.0 / 65194000.0,
];

/// Mean elongation of the Moon D
pub const MEAN_ELONGATION_COEFFS: [f64; 5] = [
    297.8501921,
    445267.1114034,
    -0.0018819,
    1.0 / 545868.0,
    -1.0 / 113065000.0,
];

/// Sun mean anomaly M
pub const SUN_MEAN_ANOMALY_COEFFS: [f64; 4] =
    [357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0];

/// Moon mean anomaly M′
pub const MOON_MEAN_ANOMALY_COEFFS: [f64; 5] = [
    134.9633964,
    477198.8675055,
    0.0087414,
    1.0 / 69699.0,
    -1.0 / 14712000.0,
];

/// Moon argument of latitude F (mean distance of the Moon from its ascending node)
pub const ARGUMENT_OF_LATITUDE_COEFFS: [f64; 5] = [
    93.2720950,
    483202.0175233,
    -0.0036539,
    -1.0 / 3526000.0,
    1.0 / 863310000.0,
];

/// A1, action of Venus
pub const VENUS_ACTION_COEFFS: [f64; 2] = [119.75, 131.849];

/// A2, action of Jupiter
pub const JUPITER_ACTION_COEFFS: [f64; 2] = [53.09, 479264.290];

/// A3, term due to the flattening of the Earth
pub const FLATTENING_ACTION_COEFFS: [f64; 2] = [313.45, 481266.484];

/// E, decrease of the eccentricity of the Earth orbit (dimensionless)
pub const EARTH_ECCENTRICITY_COEFFS: [f64; 3] = [1.0, -0.002516, -0.0000074];

// -------------------------------------------------------------------------------------------------
// Additive terms (10⁻⁶ degree)
// -------------------------------------------------------------------------------------------------

/// Amplitudes of sin A1, sin(L′ − F) and sin A2 added to Σl
pub const LONGITUDE_ADDITIVE_COEFFS: [f64; 3] = [3958.0, 1962.0, 318.0];

/// Amplitudes of sin L′, sin A3, sin(A1 − F), sin(A1 + F), sin(L′ − M′) and sin(L′ + M′)
/// added to Σb
pub const LATITUDE_ADDITIVE_COEFFS: [f64; 6] = [-2235.0, 382.0, 175.0, 175.0, 127.0, -115.0];

// -------------------------------------------------------------------------------------------------
// Periodic term records
// -------------------------------------------------------------------------------------------------

/// Integer multipliers of the arguments (D, M, M′, F) of one periodic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentMultipliers {
    pub mean_elongation: i8,
    pub sun_mean_anomaly: i8,
    pub moon_mean_anomaly: i8,
    pub argument_of_latitude: i8,
}

impl ArgumentMultipliers {
    /// Build the multipliers from a `[D, M, M′, F]` row.
    pub const fn new(row: [i8; 4]) -> Self {
        ArgumentMultipliers {
            mean_elongation: row[0],
            sun_mean_anomaly: row[1],
            moon_mean_anomaly: row[2],
            argument_of_latitude: row[3],
        }
    }

    /// Power of the eccentricity factor E applied to the term amplitude.
    ///
    /// Terms whose argument contains the Sun mean anomaly M (or −M) are multiplied by E,
    /// terms containing 2M (or −2M) by E². The exponent is therefore `|M|`.
    #[inline]
    pub fn eccentricity_power(&self) -> i32 {
        i32::from(self.sun_mean_anomaly.unsigned_abs())
    }

    /// Argument `D·d + M·m + M′·m′ + F·f` of the term, in radians.
    ///
    /// The linear combination is formed in degrees and converted once, so the
    /// result does not depend on how the fundamental arguments were reduced.
    #[inline]
    pub fn argument(&self, arguments: &FundamentalArguments) -> Radian {
        (f64::from(self.mean_elongation) * arguments.mean_elongation
            + f64::from(self.sun_mean_anomaly) * arguments.sun_mean_anomaly
            + f64::from(self.moon_mean_anomaly) * arguments.moon_mean_anomaly
            + f64::from(self.argument_of_latitude) * arguments.argument_of_latitude)
            * RADEG
    }
}

/// One row of the longitude/distance series (Meeus table 47.A).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudeDistanceTerm {
    pub multipliers: ArgumentMultipliers,
    /// Coefficient of the sine in longitude, 10⁻⁶ degree
    pub sigma_l: f64,
    /// Coefficient of the cosine in distance, 10⁻³ km
    pub sigma_r: f64,
}

impl LongitudeDistanceTerm {
    pub const fn new(row: [i8; 4], sigma_l: f64, sigma_r: f64) -> Self {
        LongitudeDistanceTerm {
            multipliers: ArgumentMultipliers::new(row),
            sigma_l,
            sigma_r,
        }
    }
}

/// One row of the latitude series (Meeus table 47.B).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeTerm {
    pub multipliers: ArgumentMultipliers,
    /// Coefficient of the sine in latitude, 10⁻⁶ degree
    pub sigma_b: f64,
}

impl LatitudeTerm {
    pub const fn new(row: [i8; 4], sigma_b: f64) -> Self {
        LatitudeTerm {
            multipliers: ArgumentMultipliers::new(row),
            sigma_b,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Tables
// -------------------------------------------------------------------------------------------------

/// Periodic terms for the longitude (Σl) and the distance (Σr) of the Moon.
#[rustfmt::skip]
pub const LONGITUDE_DISTANCE_TERMS: [LongitudeDistanceTerm; SERIES_LEN] = [
    LongitudeDistanceTerm::new([0, 0, 1, 0], 6288774.0, -20905355.0),
    LongitudeDistanceTerm::new([2, 0, -1, 0], 1274027.0, -3699111.0),
    LongitudeDistanceTerm::new([2, 0, 0, 0], 658314.0, -2955968.0),
    LongitudeDistanceTerm::new([0, 0, 2, 0], 213618.0, -569925.0),
    LongitudeDistanceTerm::new([0, 1, 0, 0], -185116.0, 48888.0),
    LongitudeDistanceTerm::new([0, 0, 0, 2], -114332.0, -3149.0),
    LongitudeDistanceTerm::new([2, 0, -2, 0], 58793.0, 246158.0),
    LongitudeDistanceTerm::new([2, -1, -1, 0], 57066.0, -152138.0),
    LongitudeDistanceTerm::new([2, 0, 1, 0], 53322.0, -170733.0),
    LongitudeDistanceTerm::new([2, -1, 0, 0], 45758.0, -204586.0),
    LongitudeDistanceTerm::new([0, 1, -1, 0], -40923.0, -129620.0),
    LongitudeDistanceTerm::new([1, 0, 0, 0], -34720.0, 108743.0),
    LongitudeDistanceTerm::new([0, 1, 1, 0], -30383.0, 104755.0),
    LongitudeDistanceTerm::new([2, 0, 0, -2], 15327.0, 10321.0),
    LongitudeDistanceTerm::new([0, 0, 1, 2], -12528.0, 0.0),
    LongitudeDistanceTerm::new([0, 0, 1, -2], 10980.0, 79661.0),
    LongitudeDistanceTerm::new([4, 0, -1, 0], 10675.0, -34782.0),
    LongitudeDistanceTerm::new([0, 0, 3, 0], 10034.0, -23210.0),
    LongitudeDistanceTerm::new([4, 0, -2, 0], 8548.0, -21636.0),
    LongitudeDistanceTerm::new([2, 1, -1, 0], -7888.0, 24208.0),
    LongitudeDistanceTerm::new([2, 1, 0, 0], -6766.0, 30824.0),
    LongitudeDistanceTerm::new([1, 0, -1, 0], -5163.0, -8379.0),
    LongitudeDistanceTerm::new([1, 1, 0, 0], 4987.0, -16675.0),
    LongitudeDistanceTerm::new([2, -1, 1, 0], 4036.0, -12831.0),
    LongitudeDistanceTerm::new([2, 0, 2, 0], 3994.0, -10445.0),
    LongitudeDistanceTerm::new([4, 0, 0, 0], 3861.0, -11650.0),
    LongitudeDistanceTerm::new([2, 0, -3, 0], 3665.0, 14403.0),
    LongitudeDistanceTerm::new([0, 1, -2, 0], -2689.0, -7003.0),
    LongitudeDistanceTerm::new([2, 0, -1, 2], -2602.0, 0.0),
    LongitudeDistanceTerm::new([2, -1, -2, 0], 2390.0, 10056.0),
    LongitudeDistanceTerm::new([1, 0, 1, 0], -2348.0, 6322.0),
    LongitudeDistanceTerm::new([2, -2, 0, 0], 2236.0, -9884.0),
    LongitudeDistanceTerm::new([0, 1, 2, 0], -2120.0, 5751.0),
    LongitudeDistanceTerm::new([0, 2, 0, 0], -2069.0, 0.0),
    LongitudeDistanceTerm::new([2, -2, -1, 0], 2048.0, -4950.0),
    LongitudeDistanceTerm::new([2, 0, 1, -2], -1773.0, 4130.0),
    LongitudeDistanceTerm::new([2, 0, 0, 2], -1595.0, 0.0),
    LongitudeDistanceTerm::new([4, -1, -1, 0], 1215.0, -3958.0),
    LongitudeDistanceTerm::new([0, 0, 2, 2], -1110.0, 0.0),
    LongitudeDistanceTerm::new([3, 0, -1, 0], -892.0, 3258.0),
    LongitudeDistanceTerm::new([2, 1, 1, 0], -810.0, 2616.0),
    LongitudeDistanceTerm::new([4, -1, -2, 0], 759.0, -1897.0),
    LongitudeDistanceTerm::new([0, 2, -1, 0], -713.0, -2117.0),
    LongitudeDistanceTerm::new([2, 2, -1, 0], -700.0, 2354.0),
    LongitudeDistanceTerm::new([2, 1, -2, 0], 691.0, 0.0),
    LongitudeDistanceTerm::new([2, -1, 0, -2], 596.0, 0.0),
    LongitudeDistanceTerm::new([4, 0, 1, 0], 549.0, -1423.0),
    LongitudeDistanceTerm::new([0, 0, 4, 0], 537.0, -1117.0),
    LongitudeDistanceTerm::new([4, -1, 0, 0], 520.0, -1571.0),
    LongitudeDistanceTerm::new([1, 0, -2, 0], -487.0, -1739.0),
    LongitudeDistanceTerm::new([2, 1, 0, -2], -399.0, 0.0),
    LongitudeDistanceTerm::new([0, 0, 2, -2], -381.0, -4421.0),
    LongitudeDistanceTerm::new([1, 1, 1, 0], 351.0, 0.0),
    LongitudeDistanceTerm::new([3, 0, -2, 0], -340.0, 0.0),
    LongitudeDistanceTerm::new([4, 0, -3, 0], 330.0, 0.0),
    LongitudeDistanceTerm::new([2, -1, 2, 0], 327.0, 0.0),
    LongitudeDistanceTerm::new([0, 2, 1, 0], -323.0, 1165.0),
    LongitudeDistanceTerm::new([1, 1, -1, 0], 299.0, 0.0),
    LongitudeDistanceTerm::new([2, 0, 3, 0], 294.0, 0.0),
    LongitudeDistanceTerm::new([2, 0, -1, -2], 0.0, 8752.0),
];

/// Periodic terms for the latitude (Σb) of the Moon.
///
/// Rows 12 and 46 carry `F = +1`; with them the 1992-04-12 worked example gives
/// β = −3.224464°.
#[rustfmt::skip]
pub const LATITUDE_TERMS: [LatitudeTerm; SERIES_LEN] = [
    LatitudeTerm::new([0, 0, 0, 1], 5128122.0),
    LatitudeTerm::new([0, 0, 1, 1], 280602.0),
    LatitudeTerm::new([0, 0, 1, -1], 277693.0),
    LatitudeTerm::new([2, 0, 0, -1], 173237.0),
    LatitudeTerm::new([2, 0, -1, 1], 55413.0),
    LatitudeTerm::new([2, 0, -1, -1], 46271.0),
    LatitudeTerm::new([2, 0, 0, 1], 32573.0),
    LatitudeTerm::new([0, 0, 2, 1], 17198.0),
    LatitudeTerm::new([2, 0, 1, -1], 9266.0),
    LatitudeTerm::new([0, 0, 2, -1], 8822.0),
    LatitudeTerm::new([2, -1, 0, -1], 8216.0),
    LatitudeTerm::new([2, 0, -2, 1], 4324.0),
    LatitudeTerm::new([2, 0, 1, 1], 4200.0),
    LatitudeTerm::new([2, 1, 0, -1], -3359.0),
    LatitudeTerm::new([2, -1, -1, 1], 2463.0),
    LatitudeTerm::new([2, -1, 0, 1], 2211.0),
    LatitudeTerm::new([2, -1, -1, -1], 2065.0),
    LatitudeTerm::new([0, 1, -1, -1], -1870.0),
    LatitudeTerm::new([4, 0, -1, -1], 1828.0),
    LatitudeTerm::new([0, 1, 0, 1], -1794.0),
    LatitudeTerm::new([0, 0, 0, 3], -1749.0),
    LatitudeTerm::new([0, 1, -1, 1], -1565.0),
    LatitudeTerm::new([1, 0, 0, 1], -1491.0),
    LatitudeTerm::new([0, 1, 1, 1], -1475.0),
    LatitudeTerm::new([0, 1, 1, -1], -1410.0),
    LatitudeTerm::new([0, 1, 0, -1], -1344.0),
    LatitudeTerm::new([1, 0, 0, -1], -1335.0),
    LatitudeTerm::new([0, 0, 3, 1], 1107.0),
    LatitudeTerm::new([4, 0, 0, -1], 1021.0),
    LatitudeTerm::new([4, 0, -1, 1], 833.0),
    LatitudeTerm::new([0, 0, 1, -3], 777.0),
    LatitudeTerm::new([4, 0, -2, 1], 671.0),
    LatitudeTerm::new([2, 0, 0, -3], 607.0),
    LatitudeTerm::new([2, 0, 2, -1], 596.0),
    LatitudeTerm::new([2, -1, 1, -1], 491.0),
    LatitudeTerm::new([2, 0, -2, 1], -451.0),
    LatitudeTerm::new([0, 0, 3, -1], 439.0),
    LatitudeTerm::new([2, 0, 2, 1], 422.0),
    LatitudeTerm::new([2, 0, -3, -1], 421.0),
    LatitudeTerm::new([2, 1, -1, 1], -366.0),
    LatitudeTerm::new([2, 1, 0, 1], -351.0),
    LatitudeTerm::new([4, 0, 0, 1], 331.0),
    LatitudeTerm::new([2, -1, 1, 1], 315.0),
    LatitudeTerm::new([2, -2, 0, -1], 302.0),
    LatitudeTerm::new([0, 0, 1, 3], -283.0),
    LatitudeTerm::new([2, 1, 1, 1], -229.0),
    LatitudeTerm::new([1, 1, 0, -1], 223.0),
    LatitudeTerm::new([1, 1, 0, 1], 223.0),
    LatitudeTerm::new([0, 1, -2, -1], -220.0),
    LatitudeTerm::new([2, 1, -1, -1], -220.0),
    LatitudeTerm::new([1, 0, 1, 1], -185.0),
    LatitudeTerm::new([2, -1, -2, -1], 181.0),
    LatitudeTerm::new([0, 1, 2, 1], -177.0),
    LatitudeTerm::new([4, 0, -2, -1], 176.0),
    LatitudeTerm::new([4, -1, -1, -1], 166.0),
    LatitudeTerm::new([1, 0, 1, -1], -164.0),
    LatitudeTerm::new([4, 0, 1, -1], 132.0),
    LatitudeTerm::new([1, 0, -1, -1], -119.0),
    LatitudeTerm::new([4, -1, 0, -1], 115.0),
    LatitudeTerm::new([2, -2, 0, 1], 107.0),
];
