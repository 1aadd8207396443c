//! # jph-calendar
//!
//! The holiday-determination engine: the statutory rule table, the
//! equinox-day estimator it depends on, and the [`Japan`] calendar that
//! resolves a civil date to an optional holiday name, substitute holidays
//! included.
//!
//! Everything here is a pure function of the date. There is no state, no
//! I/O, and no failure path: an invalid date cannot be constructed in the
//! first place, so the resolver is total.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and the `Japan` implementation.
pub mod calendar;

/// Equinox day estimation (era coefficient table).
pub mod equinox;

/// Holiday name constants.
pub mod names;

mod rules;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, Japan};
pub use equinox::{autumnal_equinox_day, vernal_equinox_day};
