use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::*;
use std::hint::black_box;

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_mines");

    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let start = (config.cols() / 2, config.rows() / 2);
        group.bench_with_input(BenchmarkId::from_parameter(difficulty), &config, |b, &config| {
            let mut generator = RandomMinefieldGenerator::new(0x5eed);
            b.iter(|| {
                let mut grid = Grid::new(config.size);
                place_mines(&mut grid, &mut generator, config.mines, black_box(start)).unwrap();
                grid
            });
        });
    }

    // near the densest quota a preset could legally carry
    let dense = GameConfig::new_unchecked((30, 16), 470);
    group.bench_function("dense", |b| {
        let mut generator = RandomMinefieldGenerator::new(0x5eed);
        b.iter(|| generator.generate(dense, black_box((15, 8))).unwrap());
    });

    group.finish();
}

fn full_game(c: &mut Criterion) {
    c.bench_function("first_reveal_hard", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut game = Game::new(Difficulty::Hard, seed);
            game.reveal(black_box((15, 8))).unwrap()
        });
    });
}

criterion_group!(benches, placement, full_game);
criterion_main!(benches);
