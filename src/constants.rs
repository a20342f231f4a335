//! # Constants and type definitions for lunar_ephem
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **type
//! aliases** shared by the lunar theory, the coordinate conversions and the reporting layer.
//!
//! ## Overview
//!
//! - Time origin and time units (J2000.0, Julian century)
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians)
//! - Fixed scales of the truncated ELP2000 series (Meeus, *Astronomical Algorithms*, ch. 47)
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Time
// -------------------------------------------------------------------------------------------------

/// Julian Ephemeris Day of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000_JDE: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// First Julian Day of the Gregorian calendar (1582-10-15)
pub const GREGORIAN_REFORM_JD: f64 = 2_299_161.0;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Full turn in degrees
pub const FULL_CIRCLE_DEG: f64 = 360.0;

// -------------------------------------------------------------------------------------------------
// Lunar theory scales
// -------------------------------------------------------------------------------------------------

/// Mean Earth–Moon distance used as the baseline of the distance series, in kilometers
pub const MEAN_EARTH_MOON_DISTANCE: f64 = 385_000.56;

/// Longitude and latitude series amplitudes are expressed in 10⁻⁶ degree
pub const ANGULAR_SERIES_SCALE: f64 = 1_000_000.0;

/// Distance series amplitudes are expressed in 10⁻³ kilometer
pub const DISTANCE_SERIES_SCALE: f64 = 1_000.0;

/// Earth equatorial radius in kilometers, as used by Meeus for the lunar parallax
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_378.14;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Julian Ephemeris Day (days, TT/TDB)
pub type JDE = f64;
/// Time in Julian centuries since J2000.0
pub type JulianCenturies = f64;
