//! Full rounds driven through the public API

use glam::Vec2;
use simply_snakes::consts::SIM_DT;
use simply_snakes::sim::{Arena, ArenaConfig, Bounds, Collision, Direction, Side};

fn arena_250() -> Arena {
    Arena::new(ArenaConfig {
        bounds: Bounds::new(250.0, 250.0, 240.0),
        head_size_fraction: 0.02,
        color_a: [0.2, 0.9, 0.3, 1.0],
        color_b: [0.2, 0.5, 1.0, 1.0],
    })
}

fn run_until_round_ends(arena: &mut Arena, max_ticks: u32) -> Option<(u32, Side, Collision)> {
    (0..max_ticks).find_map(|tick| {
        arena
            .update(SIM_DT)
            .map(|outcome| (tick, outcome.loser, outcome.cause))
    })
}

#[test]
fn moving_right_covers_one_unit_per_tick() {
    let mut arena = arena_250();
    let start = arena.competitor(Side::A).pos;

    // Idle ticks neither move the head nor lay trail
    for _ in 0..5 {
        arena.update(SIM_DT);
    }
    assert!(arena.trails().is_empty());
    assert_eq!(arena.competitor(Side::A).pos, start);

    arena.set_direction(Side::A, Direction::Right);
    assert_eq!(arena.trails().len(), 1);
    for n in 1..=50 {
        assert!(arena.update(SIM_DT).is_none());
        let x = arena.competitor(Side::A).pos.x;
        assert!((x - (start.x + n as f32)).abs() < 1e-3);
    }
}

#[test]
fn leaving_through_the_left_wall_gives_b_the_point() {
    let mut arena = arena_250();
    arena.set_direction(Side::A, Direction::Left);
    arena.set_direction(Side::B, Direction::Up);

    let (_, loser, cause) = run_until_round_ends(&mut arena, 500).expect("round ends");
    assert_eq!((loser, cause), (Side::A, Collision::Wall));
    assert_eq!(arena.scores(), (0, 1));
    assert!(arena.trails().is_empty());

    let a = arena.competitor(Side::A);
    let b = arena.competitor(Side::B);
    assert!((a.center() - Vec2::new(250.0 / 3.0, 125.0)).length() < 1e-4);
    assert!((b.center() - Vec2::new(500.0 / 3.0, 125.0)).length() < 1e-4);
    assert_eq!(a.direction, Direction::Idle);
    assert_eq!(b.direction, Direction::Idle);
}

#[test]
fn climbing_into_the_status_bar_ends_the_round() {
    let mut arena = arena_250();
    arena.set_direction(Side::B, Direction::Up);

    let (tick, loser, cause) = run_until_round_ends(&mut arena, 500).expect("round ends");
    assert_eq!((loser, cause), (Side::B, Collision::StatusBar));
    // Head top starts at 127.5 and must reach 240
    assert_eq!(tick, 112);
    assert_eq!(arena.scores(), (1, 0));
}

#[test]
fn b_crossing_a_trail_loses() {
    let mut arena = arena_250();
    // A lays a horizontal trail to the right, passing under B's column
    arena.set_direction(Side::A, Direction::Down);
    for _ in 0..20 {
        assert!(arena.update(SIM_DT).is_none());
    }
    arena.set_direction(Side::A, Direction::Right);
    for _ in 0..120 {
        assert!(arena.update(SIM_DT).is_none());
    }

    arena.set_direction(Side::B, Direction::Down);
    let (_, loser, cause) = run_until_round_ends(&mut arena, 200).expect("round ends");
    assert_eq!(loser, Side::B);
    assert!(matches!(cause, Collision::Trail(_)));
    assert_eq!(arena.scores(), (1, 0));
}

#[test]
fn scores_accumulate_across_rounds() {
    let mut arena = arena_250();
    let mut last = arena.scores();
    for round in 0..4 {
        let side = if round % 2 == 0 { Side::A } else { Side::B };
        arena.set_direction(side, Direction::Down);
        run_until_round_ends(&mut arena, 500).expect("round ends");

        let scores = arena.scores();
        assert!(scores.0 >= last.0 && scores.1 >= last.1);
        last = scores;
    }
    assert_eq!(arena.scores(), (2, 2));
    assert_eq!(arena.round(), 4);
}

#[test]
fn no_reversal_from_any_heading() {
    for heading in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        let mut arena = arena_250();
        arena.set_direction(Side::A, heading);
        let trails = arena.trails().len();

        assert!(!arena.set_direction(Side::A, heading.opposite()));
        assert_eq!(arena.competitor(Side::A).direction, heading);
        assert_eq!(arena.trails().len(), trails);
    }
}

#[test]
fn turn_segment_blocks_the_other_competitor() {
    let mut arena = arena_250();
    // A stops short of B and turns up; B heading left runs into the new segment
    let b_pos = arena.competitor(Side::B).pos;
    arena.set_direction(Side::A, Direction::Right);
    for _ in 0..70 {
        assert!(arena.update(SIM_DT).is_none());
    }
    let a_pos = arena.competitor(Side::A).pos;
    assert!(a_pos.x < b_pos.x);
    arena.set_direction(Side::A, Direction::Up);
    arena.set_direction(Side::B, Direction::Left);

    let (_, loser, _) = run_until_round_ends(&mut arena, 200).expect("round ends");
    assert_eq!(loser, Side::B);
}
