//! The statutory holiday rule table.
//!
//! Six decades of holiday law, compressed into an ordered list of
//! declarative rows: month, closed year span, day condition, name. Rows
//! are evaluated in order and the first match wins, which reproduces the
//! precedence of the statute's amendments (April 29 changes name twice;
//! May 4 is the sandwiched citizens' holiday through 2006 and plain
//! Greenery Day from 2007).

use jph_core::Year;
use jph_time::{Month, Weekday};

use crate::equinox::{autumnal_equinox_day, vernal_equinox_day};
use crate::names;

/// Inclusive year span. `None` bounds are open ends.
#[derive(Clone, Copy)]
struct YearSpan {
    from: Option<Year>,
    until: Option<Year>,
}

impl YearSpan {
    const ALL: YearSpan = YearSpan { from: None, until: None };

    const fn since(from: Year) -> YearSpan {
        YearSpan { from: Some(from), until: None }
    }

    const fn between(from: Year, until: Year) -> YearSpan {
        YearSpan { from: Some(from), until: Some(until) }
    }

    const fn until(until: Year) -> YearSpan {
        YearSpan { from: None, until: Some(until) }
    }

    fn contains(&self, year: Year) -> bool {
        self.from.map_or(true, |f| f <= year) && self.until.map_or(true, |u| year <= u)
    }
}

/// Day condition of a rule row.
enum DayRule {
    /// An exact day of the month, any weekday.
    Fixed(u8),
    /// A Monday inside an inclusive day window (the floating holidays).
    MondayIn { from: u8, to: u8 },
    /// An exact day, but only when the weekday falls in the inclusive span.
    OnWeekdays { day: u8, from: Weekday, to: Weekday },
    /// The vernal equinox day, within its March window.
    VernalEquinox,
    /// The autumnal equinox day, within its September window.
    AutumnalEquinox,
    /// A Tuesday directly before the autumnal equinox — the Silver Week
    /// day sandwiched between Respect-for-the-Aged Day and the equinox.
    AutumnalEquinoxEve,
}

/// One row of the holiday table.
struct Rule {
    month: Month,
    years: YearSpan,
    day: DayRule,
    name: &'static str,
}

impl Rule {
    fn matches(&self, year: Year, day: u8, weekday: Weekday) -> bool {
        if !self.years.contains(year) {
            return false;
        }
        match self.day {
            DayRule::Fixed(d) => day == d,
            DayRule::MondayIn { from, to } => {
                weekday == Weekday::Monday && from <= day && day <= to
            }
            DayRule::OnWeekdays { day: d, from, to } => {
                day == d && from <= weekday && weekday <= to
            }
            DayRule::VernalEquinox => {
                (19..=22).contains(&day) && vernal_equinox_day(year) == Some(day)
            }
            DayRule::AutumnalEquinox => {
                (22..=24).contains(&day) && autumnal_equinox_day(year) == Some(day)
            }
            DayRule::AutumnalEquinoxEve => {
                weekday == Weekday::Tuesday
                    && (21..=23).contains(&day)
                    && autumnal_equinox_day(year) == Some(day + 1)
            }
        }
    }
}

/// Holidays decreed for single imperial ceremonies, exact dates only.
const CEREMONIAL: &[(Year, Month, u8, &str)] = &[
    (1959, Month::April, 10, names::CROWN_PRINCE_AKIHITO_WEDDING),
    (1989, Month::February, 24, names::EMPEROR_SHOWA_FUNERAL),
    (1990, Month::November, 12, names::ENTHRONEMENT_CEREMONY),
    (1993, Month::June, 9, names::CROWN_PRINCE_NARUHITO_WEDDING),
];

/// The ordered rule table.
//
// TODO: the 2020/2021 Olympic statutes moved Marine Day, and 2021 also
// moved Health-Sports Day; the table still applies the generic floating
// rules to those years.
const RULES: &[Rule] = &[
    // January
    Rule {
        month: Month::January,
        years: YearSpan::ALL,
        day: DayRule::Fixed(1),
        name: names::NEW_YEARS_DAY,
    },
    Rule {
        month: Month::January,
        years: YearSpan::between(1949, 1999),
        day: DayRule::Fixed(15),
        name: names::COMING_OF_AGE_DAY,
    },
    Rule {
        month: Month::January,
        years: YearSpan::since(2000),
        day: DayRule::MondayIn { from: 8, to: 14 },
        name: names::COMING_OF_AGE_DAY,
    },
    // February
    Rule {
        month: Month::February,
        years: YearSpan::since(1967),
        day: DayRule::Fixed(11),
        name: names::NATIONAL_FOUNDATION_DAY,
    },
    // March
    Rule {
        month: Month::March,
        years: YearSpan::ALL,
        day: DayRule::VernalEquinox,
        name: names::VERNAL_EQUINOX_DAY,
    },
    // April 29, renamed twice
    Rule {
        month: Month::April,
        years: YearSpan::until(1988),
        day: DayRule::Fixed(29),
        name: names::EMPERORS_BIRTHDAY,
    },
    Rule {
        month: Month::April,
        years: YearSpan::between(1989, 2006),
        day: DayRule::Fixed(29),
        name: names::GREENERY_DAY,
    },
    Rule {
        month: Month::April,
        years: YearSpan::since(2007),
        day: DayRule::Fixed(29),
        name: names::SHOWA_DAY,
    },
    // Golden Week
    Rule {
        month: Month::May,
        years: YearSpan::ALL,
        day: DayRule::Fixed(3),
        name: names::CONSTITUTION_MEMORIAL_DAY,
    },
    Rule {
        month: Month::May,
        years: YearSpan::between(1988, 2006),
        day: DayRule::OnWeekdays {
            day: 4,
            from: Weekday::Tuesday,
            to: Weekday::Saturday,
        },
        name: names::CITIZENS_HOLIDAY,
    },
    Rule {
        month: Month::May,
        years: YearSpan::since(2007),
        day: DayRule::Fixed(4),
        name: names::GREENERY_DAY,
    },
    Rule {
        month: Month::May,
        years: YearSpan::ALL,
        day: DayRule::Fixed(5),
        name: names::CHILDRENS_DAY,
    },
    // July
    Rule {
        month: Month::July,
        years: YearSpan::between(1996, 2002),
        day: DayRule::Fixed(20),
        name: names::MARINE_DAY,
    },
    Rule {
        month: Month::July,
        years: YearSpan::since(2003),
        day: DayRule::MondayIn { from: 15, to: 21 },
        name: names::MARINE_DAY,
    },
    // September
    Rule {
        month: Month::September,
        years: YearSpan::between(1966, 2002),
        day: DayRule::Fixed(15),
        name: names::RESPECT_FOR_THE_AGED_DAY,
    },
    Rule {
        month: Month::September,
        years: YearSpan::since(2003),
        day: DayRule::MondayIn { from: 15, to: 21 },
        name: names::RESPECT_FOR_THE_AGED_DAY,
    },
    Rule {
        month: Month::September,
        years: YearSpan::since(2009),
        day: DayRule::AutumnalEquinoxEve,
        name: names::CITIZENS_HOLIDAY,
    },
    Rule {
        month: Month::September,
        years: YearSpan::ALL,
        day: DayRule::AutumnalEquinox,
        name: names::AUTUMNAL_EQUINOX_DAY,
    },
    // October
    Rule {
        month: Month::October,
        years: YearSpan::between(1966, 1999),
        day: DayRule::Fixed(10),
        name: names::HEALTH_AND_SPORTS_DAY,
    },
    Rule {
        month: Month::October,
        years: YearSpan::since(2000),
        day: DayRule::MondayIn { from: 8, to: 14 },
        name: names::HEALTH_AND_SPORTS_DAY,
    },
    // November
    Rule {
        month: Month::November,
        years: YearSpan::ALL,
        day: DayRule::Fixed(3),
        name: names::CULTURE_DAY,
    },
    Rule {
        month: Month::November,
        years: YearSpan::ALL,
        day: DayRule::Fixed(23),
        name: names::LABOR_THANKSGIVING_DAY,
    },
    // December
    Rule {
        month: Month::December,
        years: YearSpan::since(1989),
        day: DayRule::Fixed(23),
        name: names::EMPERORS_BIRTHDAY,
    },
];

/// Base table lookup: ceremonial one-offs first, then the ordered rules.
///
/// Substitute holidays are layered on top of this by the calendar; the
/// table itself never produces 振替休日.
pub(crate) fn base_holiday(
    year: Year,
    month: Month,
    day: u8,
    weekday: Weekday,
) -> Option<&'static str> {
    for &(y, m, d, name) in CEREMONIAL {
        if (y, m, d) == (year, month, day) {
            return Some(name);
        }
    }
    RULES
        .iter()
        .find(|r| r.month == month && r.matches(year, day, weekday))
        .map(|r| r.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jph_time::Date;

    fn lookup(y: Year, m: u8, d: u8) -> Option<&'static str> {
        let date = Date::from_ymd(y, m, d).unwrap();
        base_holiday(date.year(), date.month(), date.day_of_month(), date.weekday())
    }

    #[test]
    fn new_years_day_every_year() {
        assert_eq!(lookup(1900, 1, 1), Some(names::NEW_YEARS_DAY));
        assert_eq!(lookup(2024, 1, 1), Some(names::NEW_YEARS_DAY));
    }

    #[test]
    fn coming_of_age_day_moves_in_2000() {
        // Fixed on the 15th through 1999
        assert_eq!(lookup(1949, 1, 15), Some(names::COMING_OF_AGE_DAY));
        assert_eq!(lookup(1999, 1, 15), Some(names::COMING_OF_AGE_DAY));
        assert_eq!(lookup(1948, 1, 15), None);
        // From 2000 the 15th is ordinary and the second Monday carries it
        assert_eq!(lookup(2000, 1, 15), None);
        assert_eq!(lookup(2000, 1, 10), Some(names::COMING_OF_AGE_DAY));
        assert_eq!(lookup(2024, 1, 8), Some(names::COMING_OF_AGE_DAY));
        // First Monday is outside the window
        assert_eq!(lookup(2024, 1, 1), Some(names::NEW_YEARS_DAY));
        assert_eq!(lookup(2024, 1, 15), None);
    }

    #[test]
    fn national_foundation_day_starts_1967() {
        assert_eq!(lookup(1966, 2, 11), None);
        assert_eq!(lookup(1967, 2, 11), Some(names::NATIONAL_FOUNDATION_DAY));
        assert_eq!(lookup(2024, 2, 11), Some(names::NATIONAL_FOUNDATION_DAY));
    }

    #[test]
    fn vernal_equinox_day_matches_the_estimate() {
        assert_eq!(lookup(2024, 3, 20), Some(names::VERNAL_EQUINOX_DAY));
        assert_eq!(lookup(2024, 3, 21), None);
        assert_eq!(lookup(1999, 3, 21), Some(names::VERNAL_EQUINOX_DAY));
        assert_eq!(lookup(1999, 3, 20), None);
    }

    #[test]
    fn april_29_changes_name_twice() {
        assert_eq!(lookup(1988, 4, 29), Some(names::EMPERORS_BIRTHDAY));
        assert_eq!(lookup(1989, 4, 29), Some(names::GREENERY_DAY));
        assert_eq!(lookup(2006, 4, 29), Some(names::GREENERY_DAY));
        assert_eq!(lookup(2007, 4, 29), Some(names::SHOWA_DAY));
    }

    #[test]
    fn citizens_holiday_on_may_4_needs_a_mid_week_day() {
        // 1988-05-04 was a Wednesday: the first sandwiched citizens' holiday
        assert_eq!(lookup(1988, 5, 4), Some(names::CITIZENS_HOLIDAY));
        // Not yet law in 1987
        assert_eq!(lookup(1987, 5, 4), None);
        // 1992-05-04 was a Monday: excluded (the substitute layer covers it)
        assert_eq!(lookup(1992, 5, 4), None);
        // 1997-05-04 was a Sunday: excluded
        assert_eq!(lookup(1997, 5, 4), None);
        // From 2007 May 4 is Greenery Day regardless of weekday
        assert_eq!(lookup(2008, 5, 4), Some(names::GREENERY_DAY));
    }

    #[test]
    fn golden_week_fixed_days() {
        assert_eq!(lookup(1950, 5, 3), Some(names::CONSTITUTION_MEMORIAL_DAY));
        assert_eq!(lookup(2024, 5, 3), Some(names::CONSTITUTION_MEMORIAL_DAY));
        assert_eq!(lookup(1950, 5, 5), Some(names::CHILDRENS_DAY));
        assert_eq!(lookup(2024, 5, 5), Some(names::CHILDRENS_DAY));
    }

    #[test]
    fn marine_day_moves_in_2003() {
        assert_eq!(lookup(1995, 7, 20), None);
        assert_eq!(lookup(1996, 7, 20), Some(names::MARINE_DAY));
        assert_eq!(lookup(2002, 7, 20), Some(names::MARINE_DAY));
        assert_eq!(lookup(2003, 7, 20), None);
        // Third Monday of July 2003 was the 21st
        assert_eq!(lookup(2003, 7, 21), Some(names::MARINE_DAY));
        // 2021 gets the generic rule: third Monday, not the shifted date
        assert_eq!(lookup(2021, 7, 19), Some(names::MARINE_DAY));
        assert_eq!(lookup(2021, 7, 23), None);
    }

    #[test]
    fn respect_for_the_aged_day_moves_in_2003() {
        assert_eq!(lookup(1965, 9, 15), None);
        assert_eq!(lookup(1966, 9, 15), Some(names::RESPECT_FOR_THE_AGED_DAY));
        assert_eq!(lookup(2002, 9, 15), Some(names::RESPECT_FOR_THE_AGED_DAY));
        // Third Monday of September 2003 was the 15th
        assert_eq!(lookup(2003, 9, 15), Some(names::RESPECT_FOR_THE_AGED_DAY));
        assert_eq!(lookup(2009, 9, 21), Some(names::RESPECT_FOR_THE_AGED_DAY));
    }

    #[test]
    fn silver_week_2009() {
        // Tuesday 2009-09-22 sits between the third Monday and the equinox
        assert_eq!(lookup(2009, 9, 21), Some(names::RESPECT_FOR_THE_AGED_DAY));
        assert_eq!(lookup(2009, 9, 22), Some(names::CITIZENS_HOLIDAY));
        assert_eq!(lookup(2009, 9, 23), Some(names::AUTUMNAL_EQUINOX_DAY));
        // Same alignment in 2015
        assert_eq!(lookup(2015, 9, 22), Some(names::CITIZENS_HOLIDAY));
        // No sandwich before 2009 even when the alignment occurs
        assert_eq!(lookup(2004, 9, 22), None);
    }

    #[test]
    fn autumnal_equinox_day_matches_the_estimate() {
        assert_eq!(lookup(2024, 9, 22), Some(names::AUTUMNAL_EQUINOX_DAY));
        assert_eq!(lookup(2024, 9, 23), None);
        assert_eq!(lookup(1999, 9, 23), Some(names::AUTUMNAL_EQUINOX_DAY));
    }

    #[test]
    fn health_sports_day_moves_in_2000() {
        assert_eq!(lookup(1965, 10, 10), None);
        assert_eq!(lookup(1966, 10, 10), Some(names::HEALTH_AND_SPORTS_DAY));
        assert_eq!(lookup(1999, 10, 10), Some(names::HEALTH_AND_SPORTS_DAY));
        assert_eq!(lookup(2000, 10, 10), None);
        // Second Monday of October 2000 was the 9th
        assert_eq!(lookup(2000, 10, 9), Some(names::HEALTH_AND_SPORTS_DAY));
    }

    #[test]
    fn november_fixed_days() {
        assert_eq!(lookup(1950, 11, 3), Some(names::CULTURE_DAY));
        assert_eq!(lookup(2024, 11, 3), Some(names::CULTURE_DAY));
        assert_eq!(lookup(2024, 11, 23), Some(names::LABOR_THANKSGIVING_DAY));
    }

    #[test]
    fn emperors_birthday_moves_to_december_in_1989() {
        assert_eq!(lookup(1988, 12, 23), None);
        assert_eq!(lookup(1989, 12, 23), Some(names::EMPERORS_BIRTHDAY));
        assert_eq!(lookup(2024, 12, 23), Some(names::EMPERORS_BIRTHDAY));
    }

    #[test]
    fn ceremonial_one_offs() {
        assert_eq!(lookup(1959, 4, 10), Some(names::CROWN_PRINCE_AKIHITO_WEDDING));
        assert_eq!(lookup(1989, 2, 24), Some(names::EMPEROR_SHOWA_FUNERAL));
        assert_eq!(lookup(1990, 11, 12), Some(names::ENTHRONEMENT_CEREMONY));
        assert_eq!(lookup(1993, 6, 9), Some(names::CROWN_PRINCE_NARUHITO_WEDDING));
        // The same month/day in neighbouring years is ordinary
        assert_eq!(lookup(1958, 4, 10), None);
        assert_eq!(lookup(1994, 6, 9), None);
    }

    #[test]
    fn ordinary_days_are_empty() {
        assert_eq!(lookup(2024, 6, 15), None);
        assert_eq!(lookup(2024, 8, 11), None); // Mountain Day is outside this table
        assert_eq!(lookup(1900, 2, 11), None);
    }
}
