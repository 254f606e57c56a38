//! A single cell of The Square: exits, per-exit locks, loose items and at most one robot.

use std::collections::BTreeMap;
use std::fmt;

use super::errors::SquareError;
use super::types::{Direction, Presence, RobotId, RoomId};

#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    exits: BTreeMap<Direction, RoomId>,
    /// Only directions with an exit have an entry here.
    locks: BTreeMap<Direction, bool>,
    items: Vec<String>,
    robot: Option<RobotId>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Room {
            id,
            exits: BTreeMap::new(),
            locks: BTreeMap::new(),
            items: Vec::new(),
            robot: None,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    // ------------------------------------------------------------------
    // Exits and locks
    // ------------------------------------------------------------------

    /// Wire an exit; the door starts unlocked.
    pub fn set_exit(&mut self, direction: Direction, neighbor: RoomId) {
        self.exits.insert(direction, neighbor);
        self.locks.insert(direction, false);
    }

    /// No-op when there is no exit that way.
    pub fn lock_exit(&mut self, direction: Direction) {
        if let Some(locked) = self.locks.get_mut(&direction) {
            *locked = true;
        }
    }

    /// No-op when there is no exit that way.
    pub fn unlock_exit(&mut self, direction: Direction) {
        if let Some(locked) = self.locks.get_mut(&direction) {
            *locked = false;
        }
    }

    /// Flip the lock of an existing exit. Returns the new state, or `None` if there is no exit.
    pub fn toggle_exit(&mut self, direction: Direction) -> Option<bool> {
        let locked = self.locks.get_mut(&direction)?;
        *locked = !*locked;
        Some(*locked)
    }

    /// Missing exits read as unlocked.
    pub fn is_exit_locked(&self, direction: Direction) -> bool {
        self.locks.get(&direction).copied().unwrap_or(false)
    }

    pub fn has_exit(&self, direction: Direction) -> bool {
        self.exits.contains_key(&direction)
    }

    /// Neighbor through `direction`, ignoring locks.
    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// Where a traveller ends up going `direction` from here.
    pub fn destination(&self, direction: Direction) -> Result<RoomId, SquareError> {
        if self.is_exit_locked(direction) {
            return Err(SquareError::ExitLocked { direction });
        }
        self.neighbor(direction)
            .ok_or_else(|| SquareError::NoSuchExit {
                direction: direction.to_string(),
            })
    }

    /// Existing exits in canonical direction order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(d).map(|to| (d, to)))
    }

    /// Lock state of every existing exit, in canonical direction order.
    pub fn exit_locks(&self) -> Vec<(Direction, bool)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.locks.get(&d).map(|locked| (d, *locked)))
            .collect()
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Removes one instance of `item`.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    // ------------------------------------------------------------------
    // Occupancy
    // ------------------------------------------------------------------

    pub fn set_robot(&mut self, robot: RobotId) {
        debug_assert!(self.robot.is_none(), "room {} already occupied", self.id);
        self.robot = Some(robot);
    }

    pub fn clear_robot(&mut self) -> Option<RobotId> {
        self.robot.take()
    }

    pub fn robot(&self) -> Option<RobotId> {
        self.robot
    }

    pub fn has_robot(&self) -> bool {
        self.robot.is_some()
    }

    /// What a `search` of this room reveals. The caller supplies robot presence
    /// because the room only knows which robot, not its state.
    pub fn contents(&self, robot: Presence) -> RoomContents {
        RoomContents {
            room: self.id,
            items: self.items.clone(),
            robot,
        }
    }
}

/// Result of searching a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomContents {
    pub room: RoomId,
    pub items: Vec<String>,
    pub robot: Presence,
}

impl fmt::Display for RoomContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            writeln!(f, "No items in the room.")?;
        } else {
            writeln!(f, "Items in the room: {}.", self.items.join(", "))?;
        }
        match self.robot {
            Presence::None => Ok(()),
            Presence::Active => writeln!(f, "There is an active robot in the room."),
            Presence::Disabled => writeln!(f, "There is a disabled robot in the room."),
        }
    }
}
