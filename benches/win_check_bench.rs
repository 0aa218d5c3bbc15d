use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sichuan_mahjong::{Tile, WinChecker};

/// 胡牌判定基准：标准 14 张胡牌手
fn bench_winning_hand(c: &mut Criterion) {
    let tiles = vec![
        Tile::Wan(1),
        Tile::Wan(1),
        Tile::Wan(2),
        Tile::Wan(3),
        Tile::Wan(4),
        Tile::Wan(5),
        Tile::Wan(6),
        Tile::Wan(7),
        Tile::Tong(5),
        Tile::Tong(5),
        Tile::Tong(5),
        Tile::Tiao(2),
        Tile::Tiao(3),
        Tile::Tiao(4),
    ];

    c.bench_function("win_check_winning", |b| {
        b.iter(|| WinChecker::is_winning(black_box(&tiles), 0))
    });
}

/// 胡牌判定基准：需要完整回溯的拒绝手
fn bench_losing_hand(c: &mut Criterion) {
    let tiles = vec![
        Tile::Wan(1),
        Tile::Wan(1),
        Tile::Wan(2),
        Tile::Wan(4),
        Tile::Wan(5),
        Tile::Wan(7),
        Tile::Wan(8),
        Tile::Tong(1),
        Tile::Tong(3),
        Tile::Tong(5),
        Tile::Tong(5),
        Tile::Tiao(2),
        Tile::Tiao(6),
        Tile::Tiao(9),
    ];

    c.bench_function("win_check_losing", |b| {
        b.iter(|| WinChecker::is_winning(black_box(&tiles), 0))
    });
}

criterion_group!(benches, bench_winning_hand, bench_losing_hand);
criterion_main!(benches);
