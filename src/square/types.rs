//! Shared value types for The Square: coordinates, directions, item tags and robot tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of the square grid.
pub const GRID_SIZE: u8 = 5;

/// Room the player starts in.
pub const START_ROOM: RoomId = RoomId { x: 1, y: 1 };

/// Reaching this room wins the game.
pub const EXIT_ROOM: RoomId = RoomId {
    x: GRID_SIZE,
    y: GRID_SIZE,
};

/// Item tag that lets the player lock and unlock doors.
pub const KEY: &str = "key";

/// Item tag that disables robots on contact.
pub const SCREWDRIVER: &str = "screwdriver";

/// Cardinal exit direction. `north` increases y, `east` increases x.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Canonical order used for every tie-break and for door listings.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Coordinate delta `(dx, dy)` of one step in this direction.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

/// Room identity: a coordinate pair with both axes in `1..=GRID_SIZE`.
///
/// Only [`RoomId::new`] and [`RoomId::step`] build one outside this module, so every
/// id in circulation indexes a real room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "RawRoomId")]
pub struct RoomId {
    pub(super) x: u8,
    pub(super) y: u8,
}

#[derive(Deserialize)]
struct RawRoomId {
    x: u8,
    y: u8,
}

impl TryFrom<RawRoomId> for RoomId {
    type Error = String;

    fn try_from(raw: RawRoomId) -> Result<Self, Self::Error> {
        RoomId::new(raw.x, raw.y)
            .ok_or_else(|| format!("room ({},{}) is off the grid", raw.x, raw.y))
    }
}

impl RoomId {
    /// Returns `None` when either coordinate is off the grid.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if Self::in_bounds(x as i16, y as i16) {
            Some(RoomId { x, y })
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    pub fn in_bounds(x: i16, y: i16) -> bool {
        let max = GRID_SIZE as i16;
        (1..=max).contains(&x) && (1..=max).contains(&y)
    }

    /// Neighboring coordinate one step away, if it lies on the grid.
    pub fn step(self, direction: Direction) -> Option<RoomId> {
        let (dx, dy) = direction.offset();
        let nx = self.x as i16 + dx as i16;
        let ny = self.y as i16 + dy as i16;
        if Self::in_bounds(nx, ny) {
            Some(RoomId {
                x: nx as u8,
                y: ny as u8,
            })
        } else {
            None
        }
    }

    /// Manhattan distance `|dx| + |dy|`.
    pub fn distance(self, other: RoomId) -> u32 {
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();
        dx + dy
    }

    /// Row-major slot (y outer, x inner), used for storage and turn order.
    pub fn index(self) -> usize {
        (self.y as usize - 1) * GRID_SIZE as usize + (self.x as usize - 1)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Robot variant tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RobotKind {
    Rook,
    Bishop,
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotKind::Rook => f.write_str("Rook"),
            RobotKind::Bishop => f.write_str("Bishop"),
        }
    }
}

/// Handle to a robot owned by the engine; rooms store this, never the robot itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RobotId(pub usize);

/// Robot presence in a room as exposed to renderers, without the variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    None,
    Active,
    Disabled,
}
