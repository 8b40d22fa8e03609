use chive::{HiveGame, Move};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Records the move sequence of a random playout rather than the resulting
/// `HiveGame` itself: `legal_moves()` memoizes, so replaying from scratch
/// before each timed iteration is what actually exercises the generator
/// instead of returning a cached clone on every call after the first.
fn random_playout(turns: u32, seed: u64) -> Vec<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = HiveGame::new();
    let mut history = vec![];
    for _ in 0..turns {
        if game.is_game_over() {
            break;
        }
        let legal = game.legal_moves();
        let mv = legal.choose(&mut rng).expect("legal_moves is never empty while the game is live").clone();
        game.apply_move(&mv);
        history.push(mv);
    }
    history
}

fn replay(history: &[Move]) -> HiveGame {
    let mut game = HiveGame::new();
    for mv in history {
        game.apply_move(mv);
    }
    game
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let scenarios = [
        ("opening", random_playout(2, 1)),
        ("mid_game", random_playout(20, 2)),
        ("dense", random_playout(60, 3)),
        ("late_game", random_playout(120, 4)),
    ];

    for (name, history) in &scenarios {
        group.bench_with_input(name.to_string(), history, |b, history| {
            b.iter_batched(|| replay(history), |game| game.legal_moves(), BatchSize::SmallInput);
        });
    }

    group.finish();
}

criterion_group!(benches, bench_legal_moves);
criterion_main!(benches);
