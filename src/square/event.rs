use super::errors::SquareError;
use super::room::RoomContents;
use super::types::{Direction, RobotKind, RoomId};

/// Something that happened during a turn, in the order it happened.
///
/// The engine never prints; a renderer turns these into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    Welcome { room: RoomId },
    /// The player asked for the map; nothing else happened.
    MapRequested,
    /// The player asked for help; nothing else happened.
    HelpRequested,
    /// A handler refused the action, or a fatal encounter ended the game.
    Error(SquareError),
    Moved { room: RoomId },
    PickedUp { item: String },
    Dropped { item: String },
    Locked { direction: Direction },
    Unlocked { direction: Direction },
    Searched(RoomContents),
    RobotMoved { kind: RobotKind, room: RoomId },
    DoorToggled {
        kind: RobotKind,
        direction: Direction,
        target: RoomId,
        locked: bool,
    },
    RobotDisabled { kind: RobotKind },
    HarmlessEncounter { kind: RobotKind },
    Escaped,
    Quit,
}

impl Narration {
    /// Robot activity the display may choose to hide.
    pub fn is_robot_activity(&self) -> bool {
        matches!(
            self,
            Narration::RobotMoved { .. } | Narration::DoorToggled { .. }
        )
    }
}
