use criterion::{black_box, criterion_group, criterion_main, Criterion};
use epicenter::{EpicenterSolver, StationReading};

fn stations() -> Vec<StationReading> {
    vec![
        StationReading::new("A", (40.9453, 23.0), "12:00:00", "12:00:04", 2.0).unwrap(),
        StationReading::new("B", (40.6, 23.5685), "12:00:01", "12:00:06", 1.5).unwrap(),
        StationReading::new("C", (40.2337, 22.5176), "12:00:02", "12:00:08", 1.0).unwrap(),
    ]
}

fn reading(c: &mut Criterion) {
    c.bench_function("reading", |b| {
        b.iter(|| {
            StationReading::new(
                black_box("A"),
                black_box((40.9453, 23.0)),
                black_box("12:00:00"),
                black_box("12:00:04"),
                black_box(2.0),
            )
        })
    });
}

fn solve(c: &mut Criterion) {
    let solver = EpicenterSolver::default();
    let stations = stations();
    c.bench_function("solve", |b| b.iter(|| solver.solve(black_box(&stations))));
}

criterion_group!(benches, reading, solve);
criterion_main!(benches);
