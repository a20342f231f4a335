//! # Tabulated lunar ephemeris
//!
//! This module defines [`EphemerisSpan`], the configuration of a regularly sampled
//! ephemeris, with its validating builder, and [`ephemeris_series`], which evaluates the
//! lunar pipeline at every sample.
//!
//! ## Example
//!
//! ```rust
//! use lunar_ephem::ephemeris::{ephemeris_series, EphemerisSpan};
//!
//! let span = EphemerisSpan::builder()
//!     .start_jde(2448724.5)
//!     .end_jde(2448731.5)
//!     .step_days(1.0)
//!     .build()
//!     .unwrap();
//!
//! let table = ephemeris_series(&span);
//! assert_eq!(table.len(), 8);
//! ```
//!
//! Samples are `start + i · step` for `i = 0, 1, …` while the epoch does not exceed
//! `end`; computing every sample from its index keeps the epochs free of accumulated
//! rounding.

use std::cmp::Ordering::{Equal, Greater, Less};

use log::debug;

use crate::constants::{J2000_JDE, JDE};
use crate::lunar_errors::LunarError;
use crate::moon_position::MoonPosition;

/// Time span and sampling of a tabulated ephemeris.
///
/// Obtain one from [`EphemerisSpan::builder`] (validated) or [`EphemerisSpan::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisSpan {
    start_jde: JDE,
    end_jde: JDE,
    step_days: f64,
    max_samples: usize,
}

impl EphemerisSpan {
    /// Default span: two samples, J2000.0 and one day later.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`EphemerisSpanBuilder`] initialized with the default span.
    pub fn builder() -> EphemerisSpanBuilder {
        EphemerisSpanBuilder::new()
    }

    /// First epoch, Julian Ephemeris Day.
    pub fn start_jde(&self) -> JDE {
        self.start_jde
    }

    /// Last admissible epoch, Julian Ephemeris Day.
    pub fn end_jde(&self) -> JDE {
        self.end_jde
    }

    /// Sampling step, in days.
    pub fn step_days(&self) -> f64 {
        self.step_days
    }

    /// Upper bound on the number of samples.
    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Number of samples covered by the span.
    ///
    /// A span whose step does not advance from `start_jde` towards `end_jde` (zero,
    /// negative or NaN step, reversed bounds) holds no sample.
    pub fn sample_count(&self) -> usize {
        let steps = (self.end_jde - self.start_jde) / self.step_days;
        if !steps.is_finite() || steps < 0.0 {
            return 0;
        }
        (steps.floor() as usize).saturating_add(1)
    }

    /// Epochs of every sample, in increasing order.
    pub fn epochs(&self) -> impl Iterator<Item = JDE> + '_ {
        (0..self.sample_count()).map(move |i| self.start_jde + i as f64 * self.step_days)
    }
}

impl Default for EphemerisSpan {
    fn default() -> Self {
        EphemerisSpan {
            start_jde: J2000_JDE,
            end_jde: J2000_JDE + 1.0,
            step_days: 1.0,
            max_samples: 1_000_000,
        }
    }
}

/// Builder for [`EphemerisSpan`], with validation.
#[derive(Debug, Clone)]
pub struct EphemerisSpanBuilder {
    span: EphemerisSpan,
}

impl Default for EphemerisSpanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EphemerisSpanBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            span: EphemerisSpan::default(),
        }
    }

    pub fn start_jde(mut self, v: JDE) -> Self {
        self.span.start_jde = v;
        self
    }
    pub fn end_jde(mut self, v: JDE) -> Self {
        self.span.end_jde = v;
        self
    }
    pub fn step_days(mut self, v: f64) -> Self {
        self.span.step_days = v;
        self
    }
    pub fn max_samples(mut self, v: usize) -> Self {
        self.span.max_samples = v;
        self
    }

    // ---- Numeric helpers for PartialOrd (handle NaN as invalid) ----

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Return true iff a <= b and comparable (i.e., not NaN).
    #[inline]
    fn le(a: f64, b: f64) -> bool {
        matches!(a.partial_cmp(&b), Some(Less) | Some(Equal))
    }

    /// Finalize the builder and produce an [`EphemerisSpan`].
    ///
    /// Validation rules
    /// -----------------
    /// * `start_jde` and `end_jde` must be finite, with `start_jde ≤ end_jde`.
    /// * `step_days` must be finite and strictly positive.
    /// * `max_samples ≥ 1` and the span must not hold more than `max_samples` samples.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(EphemerisSpan)` if the span is valid.
    /// * `Err(LunarError::InvalidSpanParameter)` otherwise.
    pub fn build(self) -> Result<EphemerisSpan, LunarError> {
        let s = &self.span;

        if !s.start_jde.is_finite() || !s.end_jde.is_finite() {
            return Err(LunarError::InvalidSpanParameter(
                "start_jde and end_jde must be finite".into(),
            ));
        }
        if !Self::le(s.start_jde, s.end_jde) {
            return Err(LunarError::InvalidSpanParameter(
                "start_jde must be <= end_jde".into(),
            ));
        }
        if !s.step_days.is_finite() || !Self::gt0(s.step_days) {
            return Err(LunarError::InvalidSpanParameter(
                "step_days must be finite and > 0".into(),
            ));
        }
        if s.max_samples == 0 {
            return Err(LunarError::InvalidSpanParameter(
                "max_samples must be >= 1".into(),
            ));
        }

        let samples = ((s.end_jde - s.start_jde) / s.step_days).floor() + 1.0;
        if !Self::le(samples, s.max_samples as f64) {
            return Err(LunarError::InvalidSpanParameter(format!(
                "span holds {samples} samples, more than max_samples = {}",
                s.max_samples
            )));
        }

        Ok(self.span)
    }
}

/// Evaluate the Moon position at every epoch of a span.
///
/// Arguments
/// ---------
/// * `span`: a validated [`EphemerisSpan`].
///
/// Return
/// ------
/// * The positions, in increasing epoch order.
pub fn ephemeris_series(span: &EphemerisSpan) -> Vec<MoonPosition> {
    debug!(
        "Computing {} lunar positions from JDE {} to {} (step {} d)",
        span.sample_count(),
        span.start_jde,
        span.end_jde,
        span.step_days
    );

    span.epochs().map(MoonPosition::at_jde).collect()
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;

    #[test]
    fn test_default_span() {
        let span = EphemerisSpan::builder().build().unwrap();
        assert_eq!(span, EphemerisSpan::new());
        assert_eq!(span.sample_count(), 2);
        assert_eq!(span.epochs().collect::<Vec<_>>(), vec![J2000_JDE, J2000_JDE + 1.0]);
    }

    #[test]
    fn test_single_epoch_span() {
        let span = EphemerisSpan::builder()
            .start_jde(2448724.5)
            .end_jde(2448724.5)
            .build()
            .unwrap();
        assert_eq!(span.sample_count(), 1);

        let table = ephemeris_series(&span);
        assert_eq!(table, vec![MoonPosition::at_jde(2448724.5)]);
    }

    #[test]
    fn test_end_not_on_grid() {
        let span = EphemerisSpan::builder()
            .start_jde(0.0)
            .end_jde(1.0)
            .step_days(0.3)
            .build()
            .unwrap();
        let epochs: Vec<f64> = span.epochs().collect();
        assert_eq!(epochs.len(), 4);
        assert!(epochs.iter().all(|&e| e <= 1.0));
    }

    #[test]
    fn test_series_is_ordered() {
        let span = EphemerisSpan::builder()
            .start_jde(2460000.5)
            .end_jde(2460010.5)
            .step_days(0.5)
            .build()
            .unwrap();
        let table = ephemeris_series(&span);
        assert_eq!(table.len(), 21);
        assert!(table.windows(2).all(|w| w[0].jde < w[1].jde));
        assert_eq!(table[20].jde, 2460010.5);
    }

    #[test]
    fn test_unvalidated_span_holds_no_sample() {
        let zero_step = EphemerisSpan {
            step_days: 0.0,
            ..EphemerisSpan::default()
        };
        assert_eq!(zero_step.sample_count(), 0);
        assert!(ephemeris_series(&zero_step).is_empty());

        let point_zero_step = EphemerisSpan {
            end_jde: J2000_JDE,
            step_days: 0.0,
            ..EphemerisSpan::default()
        };
        assert_eq!(point_zero_step.sample_count(), 0);

        let backwards = EphemerisSpan {
            step_days: -1.0,
            ..EphemerisSpan::default()
        };
        assert_eq!(backwards.epochs().count(), 0);

        let nan_step = EphemerisSpan {
            step_days: f64::NAN,
            ..EphemerisSpan::default()
        };
        assert_eq!(nan_step.sample_count(), 0);
    }

    #[test]
    fn test_span_accessors() {
        let span = EphemerisSpan::builder()
            .start_jde(2448724.5)
            .end_jde(2448731.5)
            .step_days(0.25)
            .max_samples(100)
            .build()
            .unwrap();
        assert_eq!(span.start_jde(), 2448724.5);
        assert_eq!(span.end_jde(), 2448731.5);
        assert_eq!(span.step_days(), 0.25);
        assert_eq!(span.max_samples(), 100);
        assert_eq!(span.sample_count(), 29);
    }

    #[test]
    fn test_invalid_spans() {
        let err = |b: EphemerisSpanBuilder| b.build().unwrap_err();

        assert_eq!(
            err(EphemerisSpan::builder().start_jde(10.0).end_jde(5.0)),
            LunarError::InvalidSpanParameter("start_jde must be <= end_jde".into())
        );
        assert_eq!(
            err(EphemerisSpan::builder().step_days(0.0)),
            LunarError::InvalidSpanParameter("step_days must be finite and > 0".into())
        );
        assert_eq!(
            err(EphemerisSpan::builder().step_days(-1.0)),
            LunarError::InvalidSpanParameter("step_days must be finite and > 0".into())
        );
        assert_eq!(
            err(EphemerisSpan::builder().step_days(f64::NAN)),
            LunarError::InvalidSpanParameter("step_days must be finite and > 0".into())
        );
        assert_eq!(
            err(EphemerisSpan::builder().start_jde(f64::NAN)),
            LunarError::InvalidSpanParameter("start_jde and end_jde must be finite".into())
        );
        assert_eq!(
            err(EphemerisSpan::builder().max_samples(0)),
            LunarError::InvalidSpanParameter("max_samples must be >= 1".into())
        );
        assert!(matches!(
            err(EphemerisSpan::builder()
                .end_jde(J2000_JDE + 100.0)
                .max_samples(10)),
            LunarError::InvalidSpanParameter(_)
        ));
    }
}
