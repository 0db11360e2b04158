use criterion::{black_box, criterion_group, criterion_main, Criterion};

use intersection_control::control_system::movement::Movement;

// Exercises the geometric compatibility predicate over every ordered pair
// of valid movements (144 evaluations per iteration).
fn bench_compatibility(c: &mut Criterion) {
    c.bench_function("compatible_all_pairs", |b| {
        b.iter(|| {
            let mut compatible_pairs = 0u32;
            for &a in Movement::ALL.iter() {
                for &other in Movement::ALL.iter() {
                    if black_box(a).compatible_with(black_box(other)) {
                        compatible_pairs += 1;
                    }
                }
            }
            compatible_pairs
        })
    });
}

criterion_group!(benches, bench_compatibility);
criterion_main!(benches);
