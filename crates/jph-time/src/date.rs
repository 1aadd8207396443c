//! `Date` — a civil calendar date stored as a serial number.
//!
//! Dates are represented as a count of days since an epoch: serial 1 is
//! **January 1, 1851**, the first year the equinox approximation covers.
//! The valid range runs through December 31, 2199. All dates are proleptic
//! Gregorian.
//!
//! A `Date` carries no time of day and no zone. An instant is turned into
//! a `Date` with [`Date::from_unix_timestamp`], which takes the civil
//! [`UtcOffset`] to observe it at.

use std::str::FromStr;

use jph_core::errors::{Error, Result};
use jph_core::{parsers, Year};

use crate::month::Month;
use crate::weekday::Weekday;
use crate::zone::UtcOffset;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// Leap days in years [1, 1850], subtracted so that serial 1 = 1851-01-01.
const LEAP_DAYS_BEFORE_EPOCH: i32 = 448;

/// Serial number of 1970-01-01, the unix epoch.
const UNIX_EPOCH_SERIAL: i32 = 43_465;

const SECONDS_PER_DAY: i64 = 86_400;

impl Date {
    /// Minimum valid date: January 1, 1851.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(127_470);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (1 = 1851-01-01).
    ///
    /// Returns an error if `serial` is outside the valid range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1851..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1851, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Civil date of the unix timestamp `secs` when observed at `offset`.
    ///
    /// ```
    /// use jph_time::{Date, JST};
    ///
    /// // 2020-12-31 20:00 UTC is already 2021-01-01 in Japan
    /// let d = Date::from_unix_timestamp(1_609_444_800, JST).unwrap();
    /// assert_eq!(d.to_string(), "2021-01-01");
    /// ```
    pub fn from_unix_timestamp(secs: i64, offset: UtcOffset) -> Result<Self> {
        let days = (secs + i64::from(offset.seconds())).div_euclid(SECONDS_PER_DAY);
        let serial = i64::from(UNIX_EPOCH_SERIAL) + days;
        let serial = i32::try_from(serial)
            .map_err(|_| Error::Date(format!("timestamp {secs} out of range")))?;
        Self::from_serial(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1851–2199).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = ymd_from_serial(self.0).1;
        Month::from_number(m).expect("serial decomposition yields months in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1851-01-01) was a Wednesday, index 2 in Monday-first
        // numbering, so the index of serial s is (s - 1 + 2) mod 7.
        let w = (self.0 + 1).rem_euclid(7) as u8;
        Weekday::from_index(w).expect("rem_euclid always in 0..=6")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` steps backwards).
    ///
    /// Returns an error if the result leaves the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction out of range");
    }
}

// ── Formatting and parsing ────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    /// Formats as ISO 8601 (`YYYY-MM-DD`), the canonical exchange form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses either exchange format: `YYYY-MM-DD` or `YYYY/M/D`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parsers::parse_iso_date(s)
            .or_else(|| parsers::parse_slash_date(s))
            .ok_or_else(|| Error::Parse(format!("unrecognised date string {s:?}")))?;
        Date::from_ymd(y, m, d)
    }
}

// ── Optional serde support ────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Optional chrono interop ───────────────────────────────────────────────────

#[cfg(feature = "chrono")]
mod chrono_interop {
    use super::Date;
    use crate::zone::UtcOffset;
    use jph_core::errors::{Error, Result};

    impl TryFrom<chrono::NaiveDate> for Date {
        type Error = Error;

        fn try_from(d: chrono::NaiveDate) -> Result<Self> {
            use chrono::Datelike;
            let year = u16::try_from(d.year())
                .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
            Date::from_ymd(year, d.month() as u8, d.day() as u8)
        }
    }

    impl From<Date> for chrono::NaiveDate {
        fn from(d: Date) -> chrono::NaiveDate {
            chrono::NaiveDate::from_ymd_opt(
                i32::from(d.year()),
                u32::from(d.month().number()),
                u32::from(d.day_of_month()),
            )
            .expect("every valid Date is a valid chrono::NaiveDate")
        }
    }

    impl Date {
        /// Civil date of `instant` when observed at `offset`.
        pub fn from_datetime_at<Tz: chrono::TimeZone>(
            instant: &chrono::DateTime<Tz>,
            offset: UtcOffset,
        ) -> Result<Self> {
            Self::from_unix_timestamp(instant.timestamp(), offset)
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year (proleptic Gregorian).
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number (1 = 1851-01-01).
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let y = i32::from(year);
    // Leap days in [1, year), relative to the epoch
    let prior = y - 1;
    let leap_days = prior / 4 - prior / 100 + prior / 400 - LEAP_DAYS_BEFORE_EPOCH;
    let mut serial = (y - 1851) * 365 + leap_days;
    serial += i32::from(MONTH_OFFSET[usize::from(month) - 1]);
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + i32::from(day)
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    // Estimate the year, then adjust until the serial falls within it
    let mut y = (serial / 365 + 1851) as Year;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = i32::from(days_in_month(y, m));
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
