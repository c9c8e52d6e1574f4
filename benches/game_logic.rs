use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soliterminal::core::{Game, GameControl, Layout};
use soliterminal::types::Action;

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal", |b| b.iter(|| Game::deal(black_box(12345))));
}

fn bench_draw_cycle(c: &mut Criterion) {
    c.bench_function("draw_pile_full_cycle", |b| {
        b.iter(|| {
            let mut game = Game::deal(12345);
            for _ in 0..18 {
                game.open_card();
            }
            black_box(game)
        })
    });
}

fn bench_finish_game(c: &mut Criterion) {
    c.bench_function("finish_near_ending", |b| {
        b.iter(|| {
            let mut game = Game::near_ending();
            for i in 0..4 {
                game.move_cards(6 + i, 0, 2 + i);
            }
            black_box(game.is_won())
        })
    });
}

fn bench_cursor_walk(c: &mut Criterion) {
    let actions = [
        Action::Down,
        Action::Right,
        Action::Right,
        Action::Up,
        Action::Left,
        Action::Down,
        Action::Down,
        Action::Up,
    ];
    let mut control = GameControl::new(Game::deal(12345), Layout::game());

    c.bench_function("cursor_walk", |b| {
        b.iter(|| {
            for &action in &actions {
                control.action(black_box(action));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_draw_cycle,
    bench_finish_game,
    bench_cursor_walk
);
criterion_main!(benches);
