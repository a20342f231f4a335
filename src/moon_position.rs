//! # Geocentric position of the Moon
//!
//! Entry point of the lunar pipeline:
//!
//! ```text
//! JDE ─► FundamentalArguments ─► SeriesSums ─► (corrected) SeriesSums ─► EclipticPosition ─► x, y, z
//! ```
//!
//! Every stage is a pure function; [`LunarComputation`] only bundles the intermediate
//! results so they can be inspected. A computation is built from scratch for each epoch;
//! no state is carried from one call to the next.
//!
//! ## Example
//!
//! ```rust
//! use lunar_ephem::moon_position::MoonPosition;
//!
//! // 1992 April 12, 0h TD
//! let moon = MoonPosition::at_jde(2448724.5);
//! assert!((moon.longitude - 133.162655).abs() < 1e-6);
//! assert!((moon.distance - 368409.68).abs() < 1e-2);
//! ```

use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::{Degree, Kilometer, JDE};
use crate::coordinates::{ecliptic_to_equatorial, horizontal_parallax, EquatorialPosition};
use crate::fundamental_arguments::FundamentalArguments;
use crate::periodic_series::{sum_meeus_series, SeriesSums};
use crate::position::{assemble, EclipticPosition};

/// Final geocentric position of the Moon at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Epoch, Julian Ephemeris Day
    pub jde: JDE,
    /// λ, geocentric ecliptic longitude in `[0, 360)`
    pub longitude: Degree,
    /// β, geocentric ecliptic latitude
    pub latitude: Degree,
    /// Δ, Earth–Moon distance
    pub distance: Kilometer,
    /// Rectangular geocentric ecliptic coordinates
    pub cartesian: Vector3<Kilometer>,
}

/// All intermediate results of one run of the lunar pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarComputation {
    pub arguments: FundamentalArguments,
    /// Periodic series as summed from the tables
    pub periodic_sums: SeriesSums,
    /// Periodic series plus the additive planetary terms
    pub corrected_sums: SeriesSums,
    pub ecliptic: EclipticPosition,
    pub position: MoonPosition,
}

impl LunarComputation {
    /// Run the full pipeline for a Julian Ephemeris Day.
    ///
    /// The function is total: dates far from J2000 are extrapolated (with degraded
    /// accuracy) and NaN/∞ inputs give NaN outputs.
    pub fn run(jde: JDE) -> Self {
        let arguments = FundamentalArguments::from_jde(jde);
        let periodic_sums = sum_meeus_series(&arguments);
        let (corrected_sums, ecliptic) = assemble(&arguments, &periodic_sums);

        LunarComputation {
            arguments,
            periodic_sums,
            corrected_sums,
            ecliptic,
            position: MoonPosition {
                jde,
                longitude: ecliptic.longitude,
                latitude: ecliptic.latitude,
                distance: ecliptic.distance,
                cartesian: ecliptic.to_cartesian(),
            },
        }
    }
}

impl MoonPosition {
    /// Geocentric position of the Moon at a Julian Ephemeris Day.
    ///
    /// # See also
    /// * [`LunarComputation::run`] – same computation, keeping the intermediate results
    pub fn at_jde(jde: JDE) -> Self {
        LunarComputation::run(jde).position
    }

    /// The ecliptic part of the position.
    pub fn ecliptic(&self) -> EclipticPosition {
        EclipticPosition {
            longitude: self.longitude,
            latitude: self.latitude,
            distance: self.distance,
        }
    }

    /// Right ascension and declination, referred to the mean equator and equinox of date.
    pub fn equatorial(&self) -> EquatorialPosition {
        let t = crate::fundamental_arguments::dynamical_time(self.jde);
        ecliptic_to_equatorial(&self.cartesian, t)
    }

    /// Equatorial horizontal parallax, in degrees.
    pub fn horizontal_parallax(&self) -> Degree {
        horizontal_parallax(self.distance)
    }

    /// Flat record used for serialization (CSV, JSON, …).
    pub fn record(&self) -> MoonPositionRecord {
        MoonPositionRecord {
            jde: self.jde,
            longitude_deg: self.longitude,
            latitude_deg: self.latitude,
            distance_km: self.distance,
            x_km: self.cartesian.x,
            y_km: self.cartesian.y,
            z_km: self.cartesian.z,
        }
    }
}

/// Serializable, flat view of a [`MoonPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPositionRecord {
    pub jde: JDE,
    pub longitude_deg: Degree,
    pub latitude_deg: Degree,
    pub distance_km: Kilometer,
    pub x_km: Kilometer,
    pub y_km: Kilometer,
    pub z_km: Kilometer,
}
