//! Gap engine benchmarks over realistic crossing counts

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use railcore::app::models::{Crossing, Siding};
use railcore::app::services::gap_engine::{GapMode, compute_gaps, siding_breakdown};

fn build_crossings(count: usize) -> Vec<Crossing> {
    (0..count)
        .map(|i| Crossing {
            // Shuffle-ish ordering so the sort does real work
            milepost: ((i * 7919) % count) as f64 * 0.73,
            common_name: format!("CROSSING {}", i),
            road_name: format!("ROAD {}", i),
            protection: "GATES".to_string(),
            identifier: format!("{:06}X", i),
            state: Some("IA".to_string()),
            subdivision: Some("Kansas City Sub".to_string()),
        })
        .collect()
}

fn bench_compute_gaps(c: &mut Criterion) {
    let crossings = build_crossings(2000);

    c.bench_function("compute_gaps_threshold_2000", |b| {
        b.iter(|| {
            compute_gaps(
                black_box(&crossings),
                black_box(2000.0),
                black_box(250.0),
                GapMode::Threshold,
            )
        })
    });

    c.bench_function("compute_gaps_all_2000", |b| {
        b.iter(|| compute_gaps(black_box(&crossings), 0.0, 0.0, GapMode::All))
    });
}

fn bench_siding_breakdown(c: &mut Criterion) {
    let crossings = build_crossings(2000);
    let siding = Siding {
        name: "LONG SIDING".to_string(),
        start_milepost: Some(100.0),
        end_milepost: Some(400.0),
        state: Some("IA".to_string()),
        subdivision: Some("Kansas City Sub".to_string()),
    };

    c.bench_function("siding_breakdown_2000", |b| {
        b.iter(|| siding_breakdown(black_box(&siding), black_box(&crossings)))
    });
}

criterion_group!(benches, bench_compute_gaps, bench_siding_breakdown);
criterion_main!(benches);
