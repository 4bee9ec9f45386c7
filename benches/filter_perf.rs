//! Criterion benchmarks for window filtering.
//!
//! Typical targets:
//! - 1k files, 3 windows: < 1ms
//! - 100k files, 3 windows: < 100ms

use std::hint::black_box;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use rrgc::{FileRecord, Window, filter_by_window, filter_by_windows};

const HOUR: Duration = Duration::from_secs(3600);

/// One file every ten minutes, newest first, like a fresh directory listing.
fn files(count: usize) -> Vec<FileRecord> {
    let start = Utc.timestamp_opt(1_136_214_245, 0).unwrap();
    (0..count)
        .rev()
        .map(|idx| {
            let offset = chrono::Duration::minutes(10 * i64::try_from(idx).unwrap());
            FileRecord::new(format!("logs/backup-{idx:06}.tar.gz"), start + offset)
        })
        .collect()
}

fn generational() -> Vec<Window> {
    vec![
        Window::new(2 * HOUR, 5),
        Window::new(24 * HOUR, 4),
        Window::new(7 * 24 * HOUR, 3),
    ]
}

fn filter_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for count in [1_000usize, 10_000, 100_000] {
        let input = files(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("single_window", count), &input, |b, input| {
            let window = Window::new(HOUR, 24);
            b.iter(|| filter_by_window(black_box(input), black_box(&window)));
        });

        group.bench_with_input(BenchmarkId::new("generational", count), &input, |b, input| {
            let windows = generational();
            b.iter(|| filter_by_windows(black_box(input), black_box(&windows)));
        });
    }

    group.finish();
}

criterion_group!(benches, filter_benchmarks);
criterion_main!(benches);
