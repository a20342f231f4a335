//! # Coordinate conversions
//!
//! - Spherical ecliptic (λ, β, Δ) → rectangular geocentric ecliptic (x, y, z).
//! - Mean obliquity of the ecliptic (IAU 1976).
//! - Ecliptic → equatorial rotation and right ascension / declination.
//! - Equatorial horizontal parallax of the Moon.
//!
//! All frames are geocentric and referred to the mean equinox of date. Nutation is not
//! applied.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{
    Degree, JulianCenturies, Kilometer, Radian, EARTH_EQUATORIAL_RADIUS, RADEG, RADSEC,
};
use crate::fundamental_arguments::reduce_degrees;
use crate::position::EclipticPosition;

/// Convert spherical ecliptic coordinates into a rectangular vector.
///
/// Arguments
/// ---------
/// * `longitude`: λ in degrees.
/// * `latitude`: β in degrees.
/// * `distance`: Δ in kilometers.
///
/// Return
/// ------
/// * `(Δ cos β cos λ, Δ cos β sin λ, Δ sin β)` in kilometers.
pub fn ecliptic_to_cartesian(
    longitude: Degree,
    latitude: Degree,
    distance: Kilometer,
) -> Vector3<Kilometer> {
    let lambda = longitude * RADEG;
    let beta = latitude * RADEG;

    Vector3::new(
        distance * beta.cos() * lambda.cos(),
        distance * beta.cos() * lambda.sin(),
        distance * beta.sin(),
    )
}

impl EclipticPosition {
    /// Rectangular geocentric ecliptic coordinates of this position, in kilometers.
    pub fn to_cartesian(&self) -> Vector3<Kilometer> {
        ecliptic_to_cartesian(self.longitude, self.latitude, self.distance)
    }
}

/// Compute the mean obliquity of the ecliptic (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `t`: dynamical time in Julian centuries since J2000.0.
///
/// Returns
/// --------
/// * Mean obliquity ε₀ in radians.
///
/// Formula
/// -------
/// ```text
/// ε₀ = 23°26′21.448″ − 46.815″·T − 0.00059″·T² + 0.001813″·T³
/// ```
/// evaluated with Horner's method.
pub fn mean_obliquity(t: JulianCenturies) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.00059 * RADSEC;
    let ob3 = 0.001813 * RADSEC;

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Rotation of angle `alpha` (radians) around the coordinate axis `k` (0 = x, 1 = y, 2 = z).
///
/// The lunar frames only rotate about x (the equinox direction, see
/// [`ecliptic_to_equatorial_matrix`]); the y and z axes are kept for callers composing
/// other frame changes, such as an hour-angle rotation about z.
///
/// # Panics
/// If `k` is not 0, 1 or 2.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation matrix from the ecliptic to the equatorial frame of date.
///
/// The ecliptic frame is rotated by `+ε` around the common x-axis (the equinox direction):
/// `x_equ = R · x_ecl`.
pub fn ecliptic_to_equatorial_matrix(t: JulianCenturies) -> Matrix3<f64> {
    rotmt(mean_obliquity(t), 0)
}

/// Geocentric equatorial coordinates of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// α, right ascension in `[0, 360)`
    pub right_ascension: Degree,
    /// δ, declination
    pub declination: Degree,
    /// Rectangular equatorial coordinates, kilometers
    pub cartesian: Vector3<Kilometer>,
}

/// Rotate a rectangular ecliptic vector into the equatorial frame and
/// extract right ascension and declination.
///
/// Arguments
/// ---------
/// * `ecliptic`: rectangular ecliptic coordinates (any unit).
/// * `t`: dynamical time in Julian centuries (selects the obliquity of date).
///
/// Return
/// ------
/// * The equatorial position; angles in degrees.
pub fn ecliptic_to_equatorial(ecliptic: &Vector3<f64>, t: JulianCenturies) -> EquatorialPosition {
    let equ = ecliptic_to_equatorial_matrix(t) * ecliptic;
    let rho = equ.xy().norm();

    EquatorialPosition {
        right_ascension: reduce_degrees(equ.y.atan2(equ.x) / RADEG),
        declination: equ.z.atan2(rho) / RADEG,
        cartesian: equ,
    }
}

/// Equatorial horizontal parallax π of the Moon at a given distance.
///
/// `sin π = 6378.14 / Δ`. This is a property of the position; no topocentric
/// correction is derived from it.
pub fn horizontal_parallax(distance: Kilometer) -> Degree {
    (EARTH_EQUATORIAL_RADIUS / distance).asin() / RADEG
}
