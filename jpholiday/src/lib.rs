//! # jpholiday
//!
//! Japanese national holidays, from the 1948 Public Holiday Law to the
//! present rule set: fixed days, floating "n-th Monday" days, the equinox
//! holidays, the imperial-ceremony one-offs, and substitute holidays.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `jph-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! jpholiday = "0.1"
//! ```
//!
//! ```rust
//! use jpholiday::calendar::{Calendar, Japan};
//! use jpholiday::time::Date;
//!
//! let new_year = Date::from_ymd(2024, 1, 1).unwrap();
//! assert_eq!(Japan.holiday_name(new_year), Some("元日"));
//!
//! // 2024-05-05 fell on a Sunday, so the Monday after is a substitute
//! let monday = Date::from_ymd(2024, 5, 6).unwrap();
//! assert_eq!(Japan.holiday_name(monday), Some("振替休日"));
//!
//! let ordinary = Date::from_ymd(2024, 6, 15).unwrap();
//! assert_eq!(Japan.holiday_name(ordinary), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, the `Result` alias, and date-string parsers.
pub use jph_core as core;

/// Civil date, weekday, month, and UTC-offset types.
pub use jph_time as time;

/// The holiday rule engine: `Calendar`, `Japan`, equinox estimation.
pub use jph_calendar as calendar;
