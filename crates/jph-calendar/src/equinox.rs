//! Equinox day estimation.
//!
//! The equinox holidays are formally proclaimed year by year; for rule
//! evaluation the day of month is approximated with a linear drift term
//! plus an era-dependent base constant. The approximation is defined for
//! years 1851 through 2150 and yields exact integer days (floor, not
//! rounding), so rule matching is plain integer equality.

use jph_core::Year;

/// One row of the era coefficient table.
struct Era {
    from: Year,
    until: Year,
    vernal: f64,
    autumnal: f64,
}

/// Era coefficient table. Spans are inclusive and disjoint; years outside
/// every row have no defined equinox day.
const ERAS: &[Era] = &[
    Era { from: 2100, until: 2150, vernal: 21.8510, autumnal: 24.2488 },
    Era { from: 1980, until: 2099, vernal: 20.8431, autumnal: 23.2488 },
    Era { from: 1900, until: 1979, vernal: 20.8357, autumnal: 23.2588 },
    Era { from: 1851, until: 1899, vernal: 19.8277, autumnal: 22.2588 },
];

fn era(year: Year) -> Option<&'static Era> {
    ERAS.iter().find(|e| e.from <= year && year <= e.until)
}

/// Year-dependent drift term shared by both equinoxes.
///
/// The division must be a floating-point floor: for pre-1980 years the
/// quotient is negative and truncation would be off by one.
fn drift(year: Year) -> f64 {
    let t = f64::from(i32::from(year) - 1980);
    0.242194 * t - (t / 4.0).floor()
}

/// Day of March the vernal equinox falls on.
///
/// Returns `None` for years outside [1851, 2150], where the approximation
/// is undefined.
pub fn vernal_equinox_day(year: Year) -> Option<u8> {
    era(year).map(|e| (e.vernal + drift(year)).floor() as u8)
}

/// Day of September the autumnal equinox falls on.
///
/// Returns `None` for years outside [1851, 2150], where the approximation
/// is undefined.
pub fn autumnal_equinox_day(year: Year) -> Option<u8> {
    era(year).map(|e| (e.autumnal + drift(year)).floor() as u8)
}
