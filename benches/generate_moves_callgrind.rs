use chive::HiveGame;
use gungraun::{library_benchmark, library_benchmark_group, main, Callgrind, EventKind, LibraryBenchmarkConfig};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::hint::black_box;

/// Plays `turns` random legal moves from a fresh game, replaying the whole
/// sequence inside `setup` so the instrumented call starts from a dirty
/// legal-move cache just like a real caller's first query of a turn.
fn setup(turns: u32) -> HiveGame {
    let mut rng = StdRng::seed_from_u64(u64::from(turns));
    let mut game = HiveGame::new();
    for _ in 0..turns {
        if game.is_game_over() {
            break;
        }
        let legal = game.legal_moves();
        let mv = legal.choose(&mut rng).expect("legal_moves is never empty while the game is live").clone();
        game.apply_move(&mv);
    }
    game
}

#[library_benchmark(setup = setup)]
#[bench::opening(2)]
#[bench::mid_game(20)]
#[bench::dense(60)]
#[bench::late_game(120)]
fn bench_legal_moves(game: HiveGame) -> usize {
    black_box(game.legal_moves().len())
}

library_benchmark_group!(
    name = bench_legal_moves_group;
    benchmarks = bench_legal_moves
);

main!(
    config = LibraryBenchmarkConfig::default()
        .tool(Callgrind::default().soft_limits([(EventKind::Ir, 5.0)]));
    library_benchmark_groups = bench_legal_moves_group
);
