use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use primefec::session::generate_matrix;
use primefec::{solve_with, Decoder, Encoder, SolveStrategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_solver(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let matrix = loop {
        let m = generate_matrix(&mut rng);
        if Decoder::default().is_invertible(&m).unwrap() {
            break m;
        }
    };
    let enc = Encoder::new(vec![2, 4, 1, 123, 12, 5, 1, 23, 5, 6, 1]).unwrap();
    let encoded = enc.encode_block(&matrix).unwrap();

    for strategy in [SolveStrategy::Strict, SolveStrategy::PartialPivot] {
        c.bench_with_input(
            BenchmarkId::new("solve", format!("{:?}", strategy)),
            &strategy,
            |b, &s| {
                b.iter(|| {
                    let mut m = matrix.clone();
                    let mut r = encoded.clone();
                    solve_with(&mut m, &mut r, s).unwrap()
                });
            },
        );
    }

    c.bench_function("encode_block", |b| b.iter(|| enc.encode_block(&matrix).unwrap()));
}

criterion_group!(solver_benches, bench_solver);
criterion_main!(solver_benches);
