//! Geocentric position of the Moon from the truncated ELP-2000/82 theory
//! (J. Meeus, *Astronomical Algorithms*, ch. 47).
//!
//! The pipeline is a chain of pure functions:
//! [`fundamental_arguments`] → [`periodic_series`] → [`position`] → [`coordinates`],
//! wrapped by [`moon_position::MoonPosition::at_jde`]. The outer layers ([`ephemeris`],
//! [`report`], [`time`]) tabulate, format and export the results.

pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod fundamental_arguments;
pub mod lunar_errors;
pub mod moon_position;
pub mod periodic_series;
pub mod periodic_terms;
pub mod position;
pub mod report;
pub mod time;
