//! Simulation time model.
//!
//! # Design
//!
//! Time advances in continuous seconds, not discrete integer ticks: each call
//! to the engine's `step()` advances the clock by
//! `base_tick_sec * simulation_speed` simulated seconds, where
//! `simulation_speed` is a runtime-adjustable multiplier (see
//! `update_parameters`). Representing elapsed time as `f64` seconds keeps
//! that multiplier exact without forcing tick boundaries to realign.
//!
//! `SimTime` is the wall-clock-mapped instant; `SimClock` owns the mapping
//! from elapsed seconds to a UTC instant and formats it as ISO-8601 with
//! millisecond precision and a trailing `Z`, matching the wire format other
//! collaborators (the frontend, the optimizer adapter) expect on the wire.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulated instant, measured in seconds since the clock's
/// epoch (`SimClock::start`).
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Seconds elapsed from `earlier` to `self`. Negative if `self` is
    /// earlier than `earlier`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// Return the instant `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: f64) -> SimTime {
        SimTime(self.0 + secs)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between elapsed simulated seconds and wall-clock `DateTime<Utc>`.
///
/// `SimClock` is cheap to clone and holds no state beyond the epoch and the
/// current offset.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Wall-clock instant corresponding to `elapsed == SimTime::ZERO`.
    pub start: DateTime<Utc>,
    /// Elapsed simulated time since `start`.
    pub elapsed: SimTime,
    /// Simulated seconds advanced per `step()` call at `simulation_speed ==
    /// 1.0`. Defaults to 1.0 (one tick = one simulated second).
    pub base_tick_sec: f64,
}

impl SimClock {
    /// Create a clock anchored at `start`.
    pub fn new(start: DateTime<Utc>, base_tick_sec: f64) -> Self {
        Self {
            start,
            elapsed: SimTime::ZERO,
            base_tick_sec,
        }
    }

    /// Advance the clock by one step at the given `simulation_speed`
    /// multiplier. Returns the advanced-by amount in seconds.
    #[inline]
    pub fn advance(&mut self, simulation_speed: f64) -> f64 {
        let delta = self.base_tick_sec * simulation_speed;
        self.elapsed = self.elapsed.offset(delta);
        delta
    }

    /// The current simulated instant as a wall-clock `DateTime<Utc>`.
    pub fn now(&self) -> DateTime<Utc> {
        self.start + chrono::Duration::milliseconds((self.elapsed.0 * 1000.0).round() as i64)
    }

    /// Format `now()` as ISO-8601 UTC with millisecond precision and a
    /// trailing `Z`, e.g. `2026-07-28T09:00:03.500Z`.
    pub fn now_iso(&self) -> String {
        to_iso_utc(self.now())
    }

    /// Format an arbitrary instant, anchored to this clock's `start`, the
    /// same way `now_iso` does.
    pub fn instant_iso(&self, at: SimTime) -> String {
        let dt = self.start + chrono::Duration::milliseconds((at.0 * 1000.0).round() as i64);
        to_iso_utc(dt)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.elapsed, self.now_iso())
    }
}

/// Render `dt` as ISO-8601 UTC with millisecond precision and a `Z` suffix,
/// normalizing chrono's default `+00:00` offset notation.
pub fn to_iso_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
