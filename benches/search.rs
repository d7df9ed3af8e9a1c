//! Benchmarks for the exhaustive move search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rust_wordgrid::board::Board;
use rust_wordgrid::core::{Axis, Coord, Hand, Tile};
use rust_wordgrid::dictionary::WordSet;
use rust_wordgrid::search::{MoveSearch, SearchConfig};

const WORDS: &str = "at\nta\nto\non\nno\nit\nin\nis\nas\nax\nex\nox\nqi\nza\n\
eat\ntea\nate\nten\nnet\ntie\nsit\nsat\nrat\nart\ntar\nore\nroe\none\neon\ncat\nact\naxe\ntax\n\
rate\ntear\nstar\nrats\nnote\ntone\nsnow\nowns\nrise\nsire\nstone\nnotes\nonset\nrates\nstare";

fn mid_game_board() -> Board {
    let mut board = Board::new();
    for (word, row, col, axis) in [
        ("STONE", 7, 5, Axis::Horizontal),
        ("TAX", 7, 6, Axis::Vertical),
        ("RATE", 4, 9, Axis::Vertical),
    ] {
        let anchor = Coord::new(row, col);
        for (i, letter) in word.chars().enumerate() {
            let coord = axis.coord(axis.fixed(anchor), axis.along(anchor) + i);
            let _ = board.place(coord, Tile::new(letter));
        }
    }
    board
}

fn bench_best_move(c: &mut Criterion) {
    let dict = WordSet::from_text(WORDS);
    let hand = Hand::from_letters("AERST?N");

    let mut group = c.benchmark_group("best_move");
    for prefilter in [true, false] {
        group.bench_with_input(
            BenchmarkId::new("opening", prefilter),
            &prefilter,
            |b, &prefilter| {
                let mut search = MoveSearch::new(SearchConfig::default().with_prefilter(prefilter));
                let mut board = Board::new();
                b.iter(|| search.best_move(black_box(&dict), &mut board, true, black_box(&hand)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("mid_game", prefilter),
            &prefilter,
            |b, &prefilter| {
                let mut search = MoveSearch::new(SearchConfig::default().with_prefilter(prefilter));
                let mut board = mid_game_board();
                b.iter(|| search.best_move(black_box(&dict), &mut board, false, black_box(&hand)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_best_move);
criterion_main!(benches);
