use criterion::{Criterion, criterion_group, criterion_main};
use ttt_engine::board::{Board, Mark};
use ttt_engine::bot::best_move;

fn bench_first_reply(c: &mut Criterion) {
    c.bench_function("search_first_reply", |b| {
        let mut board = Board::new();
        board.place(4, Mark::X);
        b.iter(|| best_move(board, Mark::O));
    });
}

fn bench_midgame_reply(c: &mut Criterion) {
    c.bench_function("search_midgame_reply", |b| {
        let mut board = Board::new();
        for (index, mark) in [
            (4, Mark::X),
            (0, Mark::O),
            (8, Mark::X),
            (2, Mark::O),
            (6, Mark::X),
        ] {
            board.place(index, mark);
        }
        b.iter(|| best_move(board, Mark::O));
    });
}

criterion_group!(benches, bench_first_reply, bench_midgame_reply);
criterion_main!(benches);
