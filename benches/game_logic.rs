use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_rule::core::{try_rotate, Grid, Settings};
use tetris_rule::engine::{make_world, step_world, Env, InputSnapshot};
use tetris_rule::types::{Action, PieceDirection, PieceType, RotateDir};

fn bench_tick(c: &mut Criterion) {
    let settings = Settings::default();
    let input = InputSnapshot::new();

    c.bench_function("step_world_16ms", |b| {
        let mut world = make_world(&settings).unwrap();
        b.iter(|| {
            if world.is_gameover() {
                world = make_world(&settings).unwrap();
            }
            step_world(&mut world, &Env::new(&input, &settings, black_box(0.016)));
        })
    });
}

fn bench_hard_drop_tick(c: &mut Criterion) {
    let settings = Settings::default();
    let input = InputSnapshot::from_actions([Action::HardDrop]);

    c.bench_function("step_world_hard_drop", |b| {
        let mut world = make_world(&settings).unwrap();
        b.iter(|| {
            if world.is_gameover() {
                world = make_world(&settings).unwrap();
            }
            step_world(&mut world, &Env::new(&input, &settings, 0.0));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20, 10, 16, 16);
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    grid.fill(row, col, PieceType::I);
                }
            }
            grid.clear_full_rows()
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut grid = Grid::new(20, 10, 16, 16);
    grid.fill(5, 5, PieceType::Z);

    c.bench_function("try_rotate_kicked", |b| {
        b.iter(|| {
            try_rotate(
                &grid,
                black_box(PieceType::T),
                PieceDirection::North,
                3,
                4,
                RotateDir::Cw,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop_tick,
    bench_line_clear,
    bench_try_rotate
);
criterion_main!(benches);
