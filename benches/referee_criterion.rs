use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_referee::game_state::chess_types::{MoveRequest, Square};
use chess_referee::game_state::game_state::GameState;
use chess_referee::utils::random_playout::{play_random_game, PlayoutConfig};

fn playout_plies() -> u16 {
    std::env::var("REFEREE_PLAYOUT_PLIES")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(120)
        .max(1)
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("referee_legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let start = GameState::new_game();
    group.bench_function("start_position", |b| {
        b.iter(|| black_box(start.legal_moves().len()))
    });

    let mut middle = GameState::new_game();
    for ((fr, fc), (tr, tc)) in [((6, 4), (4, 4)), ((1, 4), (3, 4)), ((7, 6), (5, 5)), ((0, 1), (2, 2))] {
        middle
            .attempt_move(MoveRequest::new(Square::at(fr, fc), Square::at(tr, tc)))
            .expect("opening move should be legal");
    }
    group.bench_function("after_four_plies", |b| {
        b.iter(|| black_box(middle.check_state().expect("kings present")))
    });

    group.finish();
}

fn bench_random_playouts(c: &mut Criterion) {
    let max_plies = playout_plies();

    let mut group = c.benchmark_group("referee_random_playout");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    group.bench_function(format!("plies_{max_plies}"), |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let result = play_random_game(&PlayoutConfig { max_plies, seed })
                .expect("playout should run");
            black_box(result.played_moves.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_legal_moves, bench_random_playouts);
criterion_main!(benches);
