use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{place_food, Board, GameSession, SessionRng, SnakeConfig};
use tui_snake::types::{CellState, Coord, SessionState};

fn playing_session() -> GameSession {
    let config = SnakeConfig {
        wrap_around: true,
        ..SnakeConfig::default()
    }
    .with_seed(12345);
    let mut session = GameSession::new(config).unwrap();
    session.request_transition(SessionState::Play).unwrap();
    session
}

/// Half-filled board in a checkerboard pattern.
fn checkered_board() -> Board {
    let mut board = Board::new(20, 20);
    for y in 0..20 {
        for x in 0..20 {
            if (x + y) % 2 == 0 {
                board.set(Coord::new(x, y), CellState::SnakeBody);
            }
        }
    }
    board
}

fn bench_tick(c: &mut Criterion) {
    let mut session = playing_session();
    let interval = session.snake().tick_interval_ms();

    c.bench_function("movement_tick", |b| {
        b.iter(|| {
            if session.state() != SessionState::Play {
                session.request_transition(SessionState::Menu).unwrap();
                session.request_transition(SessionState::Play).unwrap();
            }
            black_box(session.frame(None, black_box(interval)).unwrap());
        })
    });
}

fn bench_idle_frame(c: &mut Criterion) {
    let mut session = playing_session();

    c.bench_function("idle_frame_16ms", |b| {
        b.iter(|| {
            // Short of a full tick interval, then reset so it never moves.
            black_box(session.frame(None, black_box(16)).unwrap());
            if session.timer_ms() > 150 {
                session.request_transition(SessionState::Pause).unwrap();
                session.request_transition(SessionState::Menu).unwrap();
                session.request_transition(SessionState::Play).unwrap();
            }
        })
    });
}

fn bench_free_cells(c: &mut Criterion) {
    let board = checkered_board();
    let mut buf = Vec::with_capacity(400);

    c.bench_function("free_cells_into_20x20", |b| {
        b.iter(|| {
            board.free_cells_into(&mut buf);
            black_box(buf.len());
        })
    });
}

fn bench_place_food(c: &mut Criterion) {
    let board = checkered_board();
    let mut rng = SessionRng::new(7);

    c.bench_function("place_food_20x20", |b| {
        b.iter(|| {
            let mut board = board.clone();
            black_box(place_food(&mut board, &mut rng));
        })
    });
}

fn bench_verify_invariants(c: &mut Criterion) {
    let session = playing_session();

    c.bench_function("verify_invariants", |b| {
        b.iter(|| black_box(session.verify_invariants()))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_idle_frame,
    bench_free_cells,
    bench_place_food,
    bench_verify_invariants
);
criterion_main!(benches);
