use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use workday_engine::{Calendar, CalendarConfig, MovedWorkday};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn bench_range_queries(c: &mut Criterion) {
    let cal = Calendar::new(CalendarConfig::hungarian().with_moved_workdays([
        MovedWorkday::new(date(2025, 5, 2), date(2025, 5, 17)),
        MovedWorkday::new(date(2025, 10, 24), date(2025, 10, 18)),
        MovedWorkday::new(date(2025, 12, 24), date(2025, 12, 13)),
    ]));
    let (start, end) = (date(2000, 1, 1), date(2049, 12, 31));

    c.bench_function("count_days_50_years", |b| {
        b.iter(|| cal.count_days(black_box(start), black_box(end)).unwrap())
    });
    c.bench_function("list_workdays_50_years", |b| {
        b.iter(|| cal.list_workdays(black_box(start), black_box(end)).unwrap())
    });
}

criterion_group!(benches, bench_range_queries);
criterion_main!(benches);
