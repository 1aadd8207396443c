//! `Calendar` trait and the `Japan` holiday calendar.

use jph_time::{Date, Month, Weekday};

use crate::names;
use crate::rules;

/// A national holiday calendar.
pub trait Calendar {
    /// Human-readable calendar name.
    fn name(&self) -> &str;

    /// Return the holiday name for `date`, or `None` for an ordinary day.
    fn holiday_name(&self, date: Date) -> Option<&'static str>;

    /// Return `true` if `date` is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Collect every holiday in the inclusive range `[from, to]`.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<(Date, &'static str)> {
        let mut holidays = Vec::new();
        let mut d = from;
        while d <= to {
            if let Some(name) = self.holiday_name(d) {
                holidays.push((d, name));
            }
            if d == to {
                break; // stepping past Date::MAX is out of range
            }
            d += 1;
        }
        holidays
    }
}

/// The Japanese national holiday calendar.
///
/// Covers the statutory rule set from the 1948 Public Holiday Law through
/// its amendments, the four imperial-ceremony one-offs, and the
/// substitute-holiday rules in force since 1973. Whether a date is a
/// holiday depends only on the date itself, so a single `Japan` value can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

impl Japan {
    /// Base table lookup for `date`, before substitute rules.
    fn base_name(date: Date) -> Option<&'static str> {
        rules::base_holiday(
            date.year(),
            date.month(),
            date.day_of_month(),
            date.weekday(),
        )
    }

    /// Base table lookup `offset_days` away from `date`.
    ///
    /// The substitute layer only ever looks back one day; routing the
    /// lookback through this helper keeps the recursion depth fixed at one.
    fn base_name_at_offset(date: Date, offset_days: i32) -> Option<&'static str> {
        let shifted = date.add_days(offset_days).ok()?;
        Self::base_name(shifted)
    }

    /// Substitute-holiday (furikae) rules, consulted only when the base
    /// table has nothing for `date`.
    fn substitute_name(date: Date) -> Option<&'static str> {
        let year = date.year();
        let weekday = date.weekday();
        if weekday == Weekday::Monday && year >= 1973 {
            // A Monday after a Sunday holiday is taken off
            if Self::base_name_at_offset(date, -1).is_some() {
                return Some(names::SUBSTITUTE_HOLIDAY);
            }
        } else if date.month() == Month::May
            && date.day_of_month() == 6
            && year >= 2007
            && matches!(weekday, Weekday::Tuesday | Weekday::Wednesday)
        {
            // May 6 mops up a Greenery/Children's Day weekend: with May 3
            // or 4 on Sunday the Monday substitute lands on another
            // holiday, so the day off shifts to Tuesday or Wednesday
            return Some(names::SUBSTITUTE_HOLIDAY);
        }
        None
    }
}

impl Calendar for Japan {
    fn name(&self) -> &str {
        "Japan"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        Self::base_name(date).or_else(|| Self::substitute_name(date))
    }
}
