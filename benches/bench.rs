// Criterion benchmarks for Tutor Finder

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tutor_finder::core::{distance::haversine_distance, proximity::find_nearby};
use tutor_finder::models::{SearchQuery, Teacher};

fn create_teacher(id: usize, lat: f64, lon: f64) -> Teacher {
    Teacher::new(id as u32, &format!("Teacher {}", id), "Maths", lat, lon)
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(22.7196),
                black_box(75.8577),
                black_box(22.7250),
                black_box(75.8600),
            )
        });
    });
}

fn bench_find_nearby(c: &mut Criterion) {
    let query = SearchQuery {
        latitude: 22.7196,
        longitude: 75.8577,
        radius_km: 5.0,
    };

    let mut group = c.benchmark_group("find_nearby");

    for teacher_count in [10, 100, 1000, 10_000].iter() {
        let teachers: Vec<Teacher> = (0..*teacher_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.0007) % 0.5;
                create_teacher(i, 22.7196 + lat_offset, 75.8577 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("linear_scan", teacher_count),
            &teachers,
            |b, teachers| {
                b.iter(|| find_nearby(black_box(&query), black_box(teachers)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_haversine_distance, bench_find_nearby);

criterion_main!(benches);
