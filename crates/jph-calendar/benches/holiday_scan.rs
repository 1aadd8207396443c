//! Criterion benchmarks for the holiday resolver.
//!
//! The resolver is a pure table walk, so these mostly guard against the
//! rule table accidentally growing a slow path: a single lookup should
//! stay well under a microsecond and a century scan in the milliseconds.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use jph_calendar::{Calendar, Japan};
use jph_time::Date;

fn bench_single_lookup(c: &mut Criterion) {
    // An equinox substitute day exercises the deepest path: base miss,
    // lookback, second table walk
    let d = Date::from_ymd(2024, 9, 23).unwrap();
    c.bench_function("holiday_name/single", |b| {
        b.iter(|| Japan.holiday_name(black_box(d)))
    });
}

fn bench_century_scan(c: &mut Criterion) {
    let from = Date::from_ymd(1950, 1, 1).unwrap();
    let to = Date::from_ymd(2050, 12, 31).unwrap();
    c.bench_function("holidays_between/century", |b| {
        b.iter(|| Japan.holidays_between(black_box(from), black_box(to)))
    });
}

criterion_group!(benches, bench_single_lookup, bench_century_scan);
criterion_main!(benches);
