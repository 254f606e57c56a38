//! Gameplay scenarios driven through the public engine API.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use thesquare::square::{
    Action, Direction, GameEngine, GameStatus, Narration, Presence, RobotKind, RoomId, Square,
    SquareError, KEY, SCREWDRIVER,
};

fn room(x: u8, y: u8) -> RoomId {
    RoomId::new(x, y).unwrap()
}

fn act(engine: &mut GameEngine, word: &str, second: Option<&str>) -> Vec<Narration> {
    engine.step(&Action::verb(word, second)).events
}

#[test]
fn every_room_exists_with_in_range_exits_only() {
    let square = Square::empty();
    for y in 1..=5u8 {
        for x in 1..=5u8 {
            let r = square.get(x, y).expect("room in range");
            assert_eq!(r.has_exit(Direction::North), y < 5);
            assert_eq!(r.has_exit(Direction::South), y > 1);
            assert_eq!(r.has_exit(Direction::East), x < 5);
            assert_eq!(r.has_exit(Direction::West), x > 1);
        }
    }
    assert!(square.get(0, 1).is_none());
    assert!(square.get(6, 6).is_none());
}

#[test]
fn north_then_south_returns_to_start() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    let events = act(&mut engine, "go", Some("north"));
    assert_eq!(events, vec![Narration::Moved { room: room(1, 2) }]);
    act(&mut engine, "go", Some("south"));
    assert_eq!(engine.player_room(), room(1, 1));
    assert_eq!(engine.turns(), 2);
}

#[test]
fn blocked_movement_keeps_player_in_place() {
    let mut square = Square::empty();
    square.room_mut(room(1, 1)).lock_exit(Direction::North);
    let mut engine = GameEngine::from_parts(square, &[]);

    let events = act(&mut engine, "go", Some("north"));
    assert_eq!(
        events,
        vec![Narration::Error(SquareError::ExitLocked {
            direction: Direction::North
        })]
    );
    let events = act(&mut engine, "go", Some("west"));
    assert!(matches!(
        events.as_slice(),
        [Narration::Error(SquareError::NoSuchExit { .. })]
    ));
    assert_eq!(engine.player_room(), room(1, 1));
}

#[test]
fn lock_without_key_leaves_door_alone() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    let before = engine.exit_locks(room(1, 1));
    let events = act(&mut engine, "lock", Some("north"));
    assert_eq!(events, vec![Narration::Error(SquareError::MissingKey)]);
    assert_eq!(engine.exit_locks(room(1, 1)), before);
}

#[test]
fn key_locks_and_unlocks_a_door() {
    let mut square = Square::empty();
    square.room_mut(room(1, 1)).add_item(KEY);
    let mut engine = GameEngine::from_parts(square, &[]);

    act(&mut engine, "pick-up", Some(KEY));
    act(&mut engine, "lock", Some("east"));
    assert!(engine.square().room(room(1, 1)).is_exit_locked(Direction::East));

    let events = act(&mut engine, "go", Some("east"));
    assert!(matches!(
        events.as_slice(),
        [Narration::Error(SquareError::ExitLocked { .. })]
    ));

    act(&mut engine, "unlock", Some("east"));
    let events = act(&mut engine, "unlock", Some("east"));
    assert_eq!(
        events,
        vec![Narration::Error(SquareError::AlreadyUnlocked {
            direction: Direction::East
        })]
    );
    act(&mut engine, "go", Some("east"));
    assert_eq!(engine.player_room(), room(2, 1));
}

#[test]
fn inventory_holds_one_item_and_round_trips() {
    let mut square = Square::empty();
    square.room_mut(room(1, 1)).add_item(KEY);
    square.room_mut(room(1, 1)).add_item(SCREWDRIVER);
    let mut engine = GameEngine::from_parts(square, &[]);

    act(&mut engine, "pick-up", Some(KEY));
    let events = act(&mut engine, "pick-up", Some(SCREWDRIVER));
    assert_eq!(
        events,
        vec![Narration::Error(SquareError::AlreadyCarrying {
            item: KEY.to_string()
        })]
    );
    assert_eq!(engine.player().inventory(), Some(KEY));
    assert!(engine.square().room(room(1, 1)).has_item(SCREWDRIVER));

    act(&mut engine, "drop", Some(KEY));
    assert_eq!(engine.player().inventory(), None);
    assert_eq!(engine.square().room(room(1, 1)).items().len(), 2);
}

#[test]
fn unarmed_player_meeting_bishop_loses() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[(RobotKind::Bishop, room(1, 2))]);
    let report = engine.step(&Action::verb("go", Some("north")));
    assert_eq!(report.status, GameStatus::Lost);
    assert!(report.events.iter().any(|e| matches!(
        e,
        Narration::Error(err) if err.is_fatal()
    )));

    let after = engine.step(&Action::verb("go", Some("south")));
    assert!(after.events.is_empty());
    assert_eq!(engine.player_room(), room(1, 2));
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn armed_player_disables_bishop_for_good() {
    let mut square = Square::empty();
    square.room_mut(room(1, 1)).add_item(SCREWDRIVER);
    // Bishop boxed in so it cannot run from the screwdriver.
    for direction in [Direction::North, Direction::South, Direction::East] {
        square.room_mut(room(1, 2)).lock_exit(direction);
    }
    let mut engine = GameEngine::from_parts(square, &[(RobotKind::Bishop, room(1, 2))]);

    act(&mut engine, "pick-up", Some(SCREWDRIVER));
    let events = act(&mut engine, "go", Some("north"));
    assert!(events.contains(&Narration::RobotDisabled {
        kind: RobotKind::Bishop
    }));
    assert_eq!(engine.presence(room(1, 2)), Presence::Disabled);

    act(&mut engine, "drop", Some(SCREWDRIVER));
    for _ in 0..3 {
        let events = act(&mut engine, "search", None);
        assert!(!events.iter().any(|e| e.is_robot_activity()));
    }
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.robot_kind_at(room(1, 2)), Some(RobotKind::Bishop));
    assert_eq!(engine.summary().robots_disabled, 1);
}

#[test]
fn reaching_exit_wins() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    for _ in 0..4 {
        act(&mut engine, "go", Some("east"));
    }
    for _ in 0..3 {
        act(&mut engine, "go", Some("north"));
    }
    assert_eq!(engine.status(), GameStatus::Playing);
    let report = engine.step(&Action::verb("go", Some("north")));
    assert_eq!(report.status, GameStatus::Won);
    assert_eq!(report.events.last(), Some(&Narration::Escaped));
    assert_eq!(engine.turns(), 8);
}

#[test]
fn random_worlds_keep_robots_apart() {
    let moves = ["north", "east", "south", "west", "north", "north", "east"];
    for seed in 0..40u64 {
        let mut engine = GameEngine::new(&mut StdRng::seed_from_u64(seed));
        assert_eq!(engine.robots().len(), 2);
        assert!(engine
            .robot_positions()
            .iter()
            .all(|(_, r)| *r != room(1, 1)));
        let keys = engine.square().item_count(KEY);
        let screwdrivers = engine.square().item_count(SCREWDRIVER);
        assert!((1..=4).contains(&keys), "seed {} keys {}", seed, keys);
        assert!((1..=4).contains(&screwdrivers));

        for dir in moves.iter().cycle().take(30) {
            if engine.status().is_terminal() {
                break;
            }
            engine.step(&Action::verb("go", Some(dir)));
            let rooms: HashSet<RoomId> =
                engine.robot_positions().into_iter().map(|(_, r)| r).collect();
            assert_eq!(rooms.len(), 2, "seed {} robots share a room", seed);
        }
    }
}

#[test]
fn same_seed_same_world() {
    let a = GameEngine::new(&mut StdRng::seed_from_u64(1234));
    let b = GameEngine::new(&mut StdRng::seed_from_u64(1234));
    assert_eq!(a.robot_positions(), b.robot_positions());
    for id in a.square().room_ids() {
        assert_eq!(a.square().room(id).items(), b.square().room(id).items());
    }
}

#[test]
fn room_ids_from_outside_are_range_checked() {
    assert!(RoomId::new(6, 6).is_none());
    assert!(RoomId::new(0, 1).is_none());
    assert!(serde_json::from_str::<RoomId>(r#"{"x":6,"y":6}"#).is_err());

    let corner: RoomId = serde_json::from_str(r#"{"x":5,"y":5}"#).unwrap();
    let engine = GameEngine::from_parts(Square::empty(), &[(RobotKind::Rook, corner)]);
    assert_eq!(engine.robot_kind_at(room(5, 5)), Some(RobotKind::Rook));
    assert_eq!((corner.x(), corner.y()), (5, 5));
}
