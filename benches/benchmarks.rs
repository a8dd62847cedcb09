use chrono::DateTime;
use criterion::{criterion_group, criterion_main, Criterion};
use temporal_mask::{expand, matches, TimeFields};

const BUSINESS_HOURS: &str = "W>=1 & W<=5 & h>=9 & h<=18";
const NESTED_MASK: &str = "Y >= 2019 & (M==5 | M==8) | (h > 8 & h < 6)";
const RELATIVE_MASK: &str = "W>=1 & W<=5 & h==now & m==now";
const A_MONDAY: &str = "2019-08-26T15:15:15Z";

fn monday() -> TimeFields {
    let timestamp = DateTime::parse_from_rfc3339(A_MONDAY).unwrap();
    TimeFields::from(&timestamp)
}

pub fn match_flat_mask(c: &mut Criterion) {
    let fields = monday();
    c.bench_function("match_flat_mask", |b| {
        b.iter(|| std::hint::black_box(matches(BUSINESS_HOURS, &fields)))
    });
}

pub fn match_nested_mask(c: &mut Criterion) {
    let fields = monday();
    c.bench_function("match_nested_mask", |b| {
        b.iter(|| std::hint::black_box(matches(NESTED_MASK, &fields)))
    });
}

pub fn expand_relative_mask(c: &mut Criterion) {
    let now = monday();
    c.bench_function("expand_relative_mask", |b| {
        b.iter(|| std::hint::black_box(expand(RELATIVE_MASK, &now)))
    });
}

criterion_group!(
    benches,
    match_flat_mask,
    match_nested_mask,
    expand_relative_mask
);
criterion_main!(benches);
