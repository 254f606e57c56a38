//! Terminal session transcripts over in-memory input.

use std::io::Cursor;
use thesquare::config::{Config, DisplayConfig};
use thesquare::console::run;
use thesquare::square::{GameEngine, GameStatus, RobotKind, RoomId, Square};

fn play(engine: &mut GameEngine, input: &str, config: &Config) -> (GameStatus, String) {
    play_bytes(engine, input.as_bytes(), config)
}

fn play_bytes(engine: &mut GameEngine, input: &[u8], config: &Config) -> (GameStatus, String) {
    let mut out = Vec::new();
    let status = run(engine, Cursor::new(input), &mut out, config).unwrap();
    (status, String::from_utf8(out).unwrap())
}

#[test]
fn help_map_move_and_quit() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    let (status, out) = play(&mut engine, "help\nmap\ngo north\nquit\n", &Config::default());

    assert_eq!(status, GameStatus::Quit);
    assert!(out.contains("Welcome to The Square."));
    assert!(out.contains("Your action words are:"));
    assert!(out.contains("go  quit  help  drop  lock  map  pick-up  search  unlock"));
    assert!(out.contains("Game Map:"));
    assert!(out.contains("You are in room (1,2)"));
    assert!(out.trim_end().ends_with("Thank you for playing. Goodbye."));
    // map and help are free
    assert_eq!(engine.turns(), 1);
}

#[test]
fn end_of_input_quits() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    let (status, out) = play(&mut engine, "go east", &Config::default());
    assert_eq!(status, GameStatus::Quit);
    assert_eq!(engine.player_room(), RoomId::new(2, 1).unwrap());
    assert!(out.contains("Goodbye."));
}

#[test]
fn rejected_lines_are_reported() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    let (_, out) = play(
        &mut engine,
        "dance\ngo\nquit now\ngo up\nlock north\n",
        &Config::default(),
    );
    assert!(out.contains("I don't know what you mean..."));
    assert!(out.contains("Go where?"));
    assert!(out.contains("Quit what?"));
    assert!(out.contains("There is no door to the up!"));
    assert!(out.contains("You need a key for that door."));
}

#[test]
fn scripted_escape_wins() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    let script = "go east\ngo east\ngo east\ngo east\ngo north\ngo north\ngo north\ngo north\nsearch\n";
    let (status, out) = play(&mut engine, script, &Config::default());
    assert_eq!(status, GameStatus::Won);
    assert!(out.contains("Congratulations!"));
    // the session stops reading once the game is over
    assert!(!out.contains("No items in the room."));
}

#[test]
fn robot_announcements_follow_display_config() {
    let rook = [(RobotKind::Rook, RoomId::new(3, 3).unwrap())];

    let mut engine = GameEngine::from_parts(Square::empty(), &rook);
    let (_, loud) = play(&mut engine, "search\n", &Config::default());
    assert!(loud.contains("Rook moves to room (3,2)"));
    assert!(loud.contains("Rook locks the door to the south (room (3,2))."));

    let mut quiet = Config::default();
    quiet.display = DisplayConfig {
        announce_robot_moves: false,
        ..DisplayConfig::default()
    };
    let mut engine = GameEngine::from_parts(Square::empty(), &rook);
    let (_, muted) = play(&mut engine, "search\n", &quiet);
    assert!(!muted.contains("Rook"));
    assert_eq!(engine.robot_kind_at(RoomId::new(3, 2).unwrap()), Some(RobotKind::Rook));
}

#[test]
fn custom_prompt_is_used() {
    let mut config = Config::default();
    config.game.prompt = "square> ".to_string();
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    let (_, out) = play(&mut engine, "quit\n", &config);
    assert!(out.contains("square> "));
}

#[test]
fn undecodable_line_is_an_unknown_command() {
    let mut engine = GameEngine::from_parts(Square::empty(), &[]);
    let (status, out) = play_bytes(
        &mut engine,
        b"go north\n\xff\xfe\ngo south\nquit\n",
        &Config::default(),
    );
    assert_eq!(status, GameStatus::Quit);
    assert!(out.contains("I don't know what you mean..."));
    assert_eq!(engine.player_room(), RoomId::new(1, 1).unwrap());
    assert_eq!(engine.turns(), 3);
}
