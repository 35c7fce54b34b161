use board_state::{core::fen, core::premove::destinations, BoardState, Key};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - ";

fn all_premoves(state: &BoardState) -> usize {
    state
        .pieces
        .keys()
        .map(|origin| destinations(&state.pieces, *origin, true).len())
        .sum()
}

fn opening(mut state: BoardState) -> BoardState {
    for (origin, dest) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("g8", "f6")] {
        if let (Ok(origin), Ok(dest)) = (origin.parse::<Key>(), dest.parse::<Key>()) {
            state.user_move(origin, dest);
        }
    }
    state.run_deferred();
    state
}

fn utils_benchmark(c: &mut Criterion) {
    c.bench_function("read fen", |b| b.iter(|| fen::read(black_box(KIWIPETE))));
    c.bench_function("write fen", |b| {
        let state = BoardState::default();
        b.iter(|| black_box(&state).fen())
    });
    c.bench_function("score", |b| {
        let state = BoardState::default();
        b.iter(|| black_box(&state).score())
    });
    c.bench_function("material diff", |b| {
        let state = BoardState::default();
        b.iter(|| black_box(&state).material_diff())
    });
}

fn premove_benchmark(c: &mut Criterion) {
    for (id, setup) in [("premoves base", fen::INITIAL), ("premoves kiwipete", KIWIPETE)] {
        c.bench_function(id, |b| {
            let state = BoardState::from_config(board_state::Config {
                fen: Some(setup.to_string()),
                ..Default::default()
            })
            .expect("Bench FEN should be valid");
            b.iter(|| all_premoves(black_box(&state)))
        });
    }
    c.bench_function("opening moves", |b| {
        b.iter(|| opening(black_box(BoardState::default())))
    });
}

criterion_group!(benches, utils_benchmark, premove_benchmark);
criterion_main!(benches);
