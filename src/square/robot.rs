//! Robots and their movement strategies.
//!
//! A robot is a variant tag plus a one-way disabled flag. Its position lives in the
//! room occupancy slots, so strategies are handed the room the robot is in.
//!
//! - Rook approaches the player through unlocked, robot-free exits, then flips the lock
//!   of whichever exit of its starting room points most directly at the player.
//! - Bishop approaches the player, or runs away while the player holds a screwdriver.
//!
//! Every tie goes to the first direction in `Direction::ALL`.

use log::trace;

use super::room::Room;
use super::types::{Direction, RobotKind, RoomId};

#[derive(Debug, Clone)]
pub struct Robot {
    kind: RobotKind,
    disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    Approach,
    Avoid,
}

impl Robot {
    pub fn new(kind: RobotKind) -> Self {
        Robot {
            kind,
            disabled: false,
        }
    }

    pub fn kind(&self) -> RobotKind {
        self.kind
    }

    /// Permanent.
    pub fn disable(&mut self) {
        self.disabled = true;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Direction this robot wants to move from `here`, if any exit qualifies.
    ///
    /// Only unlocked exits leading to rooms where `occupied` is false are considered.
    pub fn choose_move(
        &self,
        here: &Room,
        player_room: RoomId,
        player_has_screwdriver: bool,
        occupied: impl Fn(RoomId) -> bool,
    ) -> Option<Direction> {
        let goal = match self.kind {
            RobotKind::Rook => Goal::Approach,
            RobotKind::Bishop if player_has_screwdriver => Goal::Avoid,
            RobotKind::Bishop => Goal::Approach,
        };
        let open = here
            .exits()
            .filter(|(direction, to)| !here.is_exit_locked(*direction) && !occupied(*to));
        best_exit(open, player_room, goal)
    }

    /// Exit of `here` whose lock a Rook flips this turn. Always `None` for a Bishop.
    ///
    /// Considers every exit regardless of lock state or occupancy.
    pub fn door_to_toggle(&self, here: &Room, player_room: RoomId) -> Option<Direction> {
        match self.kind {
            RobotKind::Rook => best_exit(here.exits(), player_room, Goal::Approach),
            RobotKind::Bishop => None,
        }
    }
}

fn best_exit(
    candidates: impl Iterator<Item = (Direction, RoomId)>,
    target: RoomId,
    goal: Goal,
) -> Option<Direction> {
    let mut best: Option<(Direction, u32)> = None;
    for (direction, to) in candidates {
        let distance = to.distance(target);
        trace!("{:?} candidate {} -> {} (distance {})", goal, direction, to, distance);
        let better = match best {
            None => true,
            Some((_, current)) => match goal {
                Goal::Approach => distance < current,
                Goal::Avoid => distance > current,
            },
        };
        if better {
            best = Some((direction, distance));
        }
    }
    best.map(|(direction, _)| direction)
}
