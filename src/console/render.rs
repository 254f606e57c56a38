//! Text rendering for the terminal: map, help, and narration lines.
//!
//! Everything here reads the engine through its query methods only.

use std::fmt::Write as _;

use crate::config::DisplayConfig;
use crate::square::{GameEngine, Narration, Presence, RobotKind, RoomId, GRID_SIZE};

use super::parser::vocabulary;

/// ASCII map, top row is y=5. Followed by the door status of the player's room and a legend.
pub fn render_map(engine: &GameEngine, display: &DisplayConfig) -> String {
    let mut out = String::from("Game Map:\n");
    let here = engine.player_room();
    for y in (1..=GRID_SIZE).rev() {
        let row: Vec<String> = (1..=GRID_SIZE)
            .filter_map(|x| RoomId::new(x, y))
            .map(|id| {
                if id == here {
                    'P'.to_string()
                } else {
                    room_glyph(engine, id, display).to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(" "));
    }

    out.push_str("\nDoor Status in Current Room:\n");
    for (direction, locked) in engine.exit_locks(here) {
        let _ = writeln!(
            out,
            "{}: {}",
            direction,
            if locked { "Locked" } else { "Unlocked" }
        );
    }

    out.push_str("\nLegend:\nP - Player\n");
    if display.reveal_robot_kinds {
        out.push_str("R - Rook\nB - Bishop\nr/b - Disabled robot\n");
    } else {
        out.push_str("@ - Active robot\nx - Disabled robot\n");
    }
    out.push_str(". - Empty Room\n");
    out
}

fn room_glyph(engine: &GameEngine, id: RoomId, display: &DisplayConfig) -> char {
    let presence = engine.presence(id);
    if display.reveal_robot_kinds {
        let glyph = match engine.robot_kind_at(id) {
            Some(RobotKind::Rook) => 'R',
            Some(RobotKind::Bishop) => 'B',
            None => return '.',
        };
        if presence == Presence::Disabled {
            glyph.to_ascii_lowercase()
        } else {
            glyph
        }
    } else {
        match presence {
            Presence::None => '.',
            Presence::Active => '@',
            Presence::Disabled => 'x',
        }
    }
}

pub fn help_text(engine: &GameEngine) -> String {
    format!(
        "You are trapped in The Square\n\
         and must find your way out.\n\
         Beware of Bishop & Rook.\n\
         \n\
         Your action words are:\n\
         {}\n\
         You are in room id {}\n",
        vocabulary(),
        engine.player_room()
    )
}

pub fn goodbye() -> &'static str {
    "Thank you for playing. Goodbye."
}

/// Text for one event, or `None` when the event shows nothing.
pub fn narrate(event: &Narration, engine: &GameEngine, display: &DisplayConfig) -> Option<String> {
    if event.is_robot_activity() && !display.announce_robot_moves {
        return None;
    }
    let text = match event {
        Narration::Welcome { room } => format!(
            "\nWelcome to The Square.\nType 'help' if you need help.\nYou are in room id {}\n",
            room
        ),
        Narration::MapRequested => render_map(engine, display),
        Narration::HelpRequested => help_text(engine),
        Narration::Error(e) => e.to_string(),
        Narration::Moved { room } => format!("You are in room {}", room),
        Narration::PickedUp { item } => format!("You picked up: {}", item),
        Narration::Dropped { item } => format!("You dropped: {}", item),
        Narration::Locked { direction } => format!("You locked the door to the {}.", direction),
        Narration::Unlocked { direction } => {
            format!("You unlocked the door to the {}.", direction)
        }
        Narration::Searched(contents) => contents.to_string().trim_end().to_string(),
        Narration::RobotMoved { kind, room } => format!("{} moves to room {}", kind, room),
        Narration::DoorToggled {
            kind,
            direction,
            target,
            locked,
        } => format!(
            "{} {} the door to the {} (room {}).",
            kind,
            if *locked { "locks" } else { "unlocks" },
            direction,
            target
        ),
        Narration::RobotDisabled { kind } => format!(
            "You encountered a {} and disabled it with your screwdriver.",
            kind
        ),
        Narration::HarmlessEncounter { kind } => {
            format!("You encountered a {}, but nothing happens.", kind)
        }
        Narration::Escaped => "Congratulations! You've reached the Exit and won the game!".into(),
        Narration::Quit => return None,
    };
    Some(text)
}
