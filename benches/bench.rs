use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tile_solver::{solve, solve_with, Board, ExpansionPolicy, Strategy};

const SIMPLE_INPUT: &str = "1 3 6 5 0 2 4 7 8";
const MEDIUM_INPUT: &str = "1 6 7 5 0 3 4 8 2";
const HARDER_INPUT: &str = "0 7 2 4 6 1 3 5 8";

fn criterion_bench(c: &mut Criterion) {
    for (name, input) in [
        ("simple", SIMPLE_INPUT),
        ("medium", MEDIUM_INPUT),
        ("harder", HARDER_INPUT),
    ] {
        let board: Board = input.parse().unwrap();
        for strategy in [Strategy::MisplacedTile, Strategy::ManhattanDistance] {
            c.bench_function(&format!("{name}/{strategy}"), |b| {
                b.iter(|| solve(black_box(&board), strategy))
            });
        }
    }

    c.bench_function("medium/uniform", |b| {
        let input: Board = MEDIUM_INPUT.parse().unwrap();
        b.iter(|| solve(black_box(&input), Strategy::UniformCost))
    });

    c.bench_function("medium/uniform-reference", |b| {
        let input: Board = MEDIUM_INPUT.parse().unwrap();
        b.iter(|| {
            solve_with(
                black_box(&input),
                Strategy::UniformCost,
                ExpansionPolicy::Reference,
            )
        })
    });
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
