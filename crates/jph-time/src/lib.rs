//! # jph-time
//!
//! Civil date types for jpholiday-rs: the serial-number [`Date`], the
//! Monday-first [`Weekday`], [`Month`], and the explicit [`UtcOffset`]
//! used to pin an instant to Japan's civil day.
//!
//! ## Features
//!
//! * `serde` — serialize `Date` as its ISO 8601 string form.
//! * `chrono` — conversions to and from `chrono::NaiveDate`, and
//!   construction from any `chrono::DateTime` at an explicit offset.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

/// Fixed UTC offsets, including the canonical `JST`.
pub mod zone;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use month::Month;
pub use weekday::Weekday;
pub use zone::{UtcOffset, JST};

pub use jph_core::Year;
