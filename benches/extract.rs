use criterion::{criterion_group, criterion_main, Criterion, black_box};

use chrono::NaiveDate;
use padel_scrape::specs::{self, CssLayout};

const PAGE: &str = include_str!("../tests/fixtures/casapadel_calendar.html");

fn bench_extract(c: &mut Criterion) {
    let layout = CssLayout::casa_padel().expect("layout");
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");

    c.bench_function("extract_page", |b| {
        b.iter(|| {
            let sections = specs::extract_page(&layout, black_box(PAGE), date).expect("extract");
            black_box(sections.len())
        })
    });

    c.bench_function("parse_range", |b| {
        b.iter(|| black_box(specs::parse_range(black_box("20:30 > 22:00 (24,00 €)"))))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
