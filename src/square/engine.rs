//! Turn orchestration for The Square.
//!
//! Each call to [`GameEngine::step`] consumes one [`Action`] and runs a full turn:
//!
//! 1. `map`/`help` only produce a request event. No world change, no robot turn.
//! 2. Otherwise the action is dispatched. `quit` (alone) ends the session at once.
//! 3. The player meets whatever robot shares their room.
//! 4. Every active robot acts once, scanning rooms row-major. Rooks also flip a door.
//! 5. The player meets whatever robot shares their room again.
//! 6. Standing in the exit room wins.
//!
//! The engine owns the whole world and is the only thing that mutates it.
//! Renderers get read-only queries.

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::action::{Action, Verb};
use super::errors::SquareError;
use super::event::Narration;
use super::grid::Square;
use super::player::Player;
use super::robot::Robot;
use super::types::{
    Direction, Presence, RobotId, RobotKind, RoomId, EXIT_ROOM, GRID_SIZE, KEY, SCREWDRIVER,
    START_ROOM,
};
use crate::logutil::escape_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    Quit,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Everything one turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub events: Vec<Narration>,
    pub status: GameStatus,
}

/// Snapshot suitable for printing at the end of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub status: GameStatus,
    pub turns: u32,
    pub room: RoomId,
    pub inventory: Option<String>,
    pub robots_disabled: usize,
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    square: Square,
    player: Player,
    robots: Vec<Robot>,
    status: GameStatus,
    turns: u32,
}

impl GameEngine {
    /// Random world: scattered items, one Rook and one Bishop outside the start room.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut engine = Self::from_parts(Square::generate(rng), &[]);
        for kind in [RobotKind::Rook, RobotKind::Bishop] {
            let room = engine.random_free_room(rng);
            engine.place_robot(kind, room);
        }
        info!(
            "New game: rook/bishop at {:?}",
            engine.robot_positions()
        );
        engine
    }

    /// Engine over a prepared square with robots at fixed rooms.
    ///
    /// A placement into an occupied room is skipped.
    pub fn from_parts(square: Square, robots: &[(RobotKind, RoomId)]) -> Self {
        let mut engine = GameEngine {
            square,
            player: Player::new(START_ROOM),
            robots: Vec::new(),
            status: GameStatus::Playing,
            turns: 0,
        };
        for (kind, room) in robots {
            if engine.place_robot(*kind, *room).is_none() {
                warn!("Room {} already holds a robot; {} not placed", room, kind);
            }
        }
        engine
    }

    fn random_free_room<R: Rng + ?Sized>(&self, rng: &mut R) -> RoomId {
        loop {
            let id = RoomId {
                x: rng.gen_range(1..=GRID_SIZE),
                y: rng.gen_range(1..=GRID_SIZE),
            };
            if id != START_ROOM && !self.square.room(id).has_robot() {
                return id;
            }
        }
    }

    /// Put a new robot in `room`. Returns `None` if the room is taken.
    pub fn place_robot(&mut self, kind: RobotKind, room: RoomId) -> Option<RobotId> {
        if self.square.room(room).has_robot() {
            return None;
        }
        let id = RobotId(self.robots.len());
        self.robots.push(Robot::new(kind));
        self.square.room_mut(room).set_robot(id);
        Some(id)
    }

    /// Opening narration for a fresh session.
    pub fn welcome(&self) -> Narration {
        Narration::Welcome {
            room: self.player.current_room(),
        }
    }

    // ------------------------------------------------------------------
    // Turn
    // ------------------------------------------------------------------

    /// Run one turn. Once the game has ended further actions are ignored.
    pub fn step(&mut self, action: &Action) -> TurnReport {
        let mut events = Vec::new();
        if self.status.is_terminal() {
            debug!("Ignoring action after game end ({:?})", self.status);
            return self.report(events);
        }

        let verb = action.word.as_deref().and_then(|w| w.parse::<Verb>().ok());
        debug!(
            "Turn {}: word={} second={}",
            self.turns + 1,
            escape_log(action.word.as_deref().unwrap_or("?")),
            escape_log(action.second_word.as_deref().unwrap_or(""))
        );

        match verb {
            Some(Verb::Quit) if !action.has_second_word() => {
                info!("Player quit after {} turns", self.turns);
                self.status = GameStatus::Quit;
                events.push(Narration::Quit);
                return self.report(events);
            }
            Some(verb) => {
                match self.dispatch(verb, action.second_word.as_deref()) {
                    Ok(event) => events.push(event),
                    Err(e) => events.push(Narration::Error(e)),
                }
                if verb.is_meta() {
                    return self.report(events);
                }
            }
            None => events.push(Narration::Error(SquareError::UnknownCommand)),
        }

        self.turns += 1;

        self.resolve_encounter(&mut events);
        if self.status.is_terminal() {
            return self.report(events);
        }

        self.move_robots(&mut events);

        self.resolve_encounter(&mut events);
        if self.status.is_terminal() {
            return self.report(events);
        }

        if self.player.current_room() == EXIT_ROOM {
            info!("Player escaped after {} turns", self.turns);
            self.status = GameStatus::Won;
            events.push(Narration::Escaped);
        }
        self.report(events)
    }

    fn report(&self, events: Vec<Narration>) -> TurnReport {
        TurnReport {
            events,
            status: self.status,
        }
    }

    fn dispatch(&mut self, verb: Verb, arg: Option<&str>) -> Result<Narration, SquareError> {
        match verb {
            Verb::Go => {
                let word = require(verb, arg)?;
                let direction = parse_direction(word)?;
                let room = self.player.go(&self.square, direction)?;
                Ok(Narration::Moved { room })
            }
            Verb::PickUp => {
                let item = require(verb, arg)?;
                self.pick_up(item)
            }
            Verb::Drop => {
                let item = require(verb, arg)?;
                let item = self.player.remove_item(item)?;
                self.square
                    .room_mut(self.player.current_room())
                    .add_item(item.clone());
                Ok(Narration::Dropped { item })
            }
            Verb::Lock => {
                let word = require(verb, arg)?;
                let direction = self.keyed_exit(word)?;
                self.square
                    .room_mut(self.player.current_room())
                    .lock_exit(direction);
                Ok(Narration::Locked { direction })
            }
            Verb::Unlock => {
                let word = require(verb, arg)?;
                let direction = self.keyed_exit(word)?;
                let room = self.square.room_mut(self.player.current_room());
                if !room.is_exit_locked(direction) {
                    return Err(SquareError::AlreadyUnlocked { direction });
                }
                room.unlock_exit(direction);
                Ok(Narration::Unlocked { direction })
            }
            Verb::Search => {
                let here = self.player.current_room();
                Ok(Narration::Searched(
                    self.square.room(here).contents(self.presence(here)),
                ))
            }
            Verb::Quit => Err(SquareError::ExtraneousArgument {
                verb: verb.as_str(),
            }),
            Verb::Map => Ok(Narration::MapRequested),
            Verb::Help => Ok(Narration::HelpRequested),
        }
    }

    fn pick_up(&mut self, item: &str) -> Result<Narration, SquareError> {
        if let Some(held) = self.player.inventory() {
            return Err(SquareError::AlreadyCarrying {
                item: held.to_string(),
            });
        }
        let room = self.square.room_mut(self.player.current_room());
        if !room.remove_item(item) {
            return Err(SquareError::ItemNotPresent {
                item: item.to_string(),
            });
        }
        self.player.add_item(item)?;
        Ok(Narration::PickedUp {
            item: item.to_string(),
        })
    }

    /// Key check, then the direction named by `word`.
    ///
    /// The direction need not have a door: locking nothing is a no-op and a missing
    /// door reads as unlocked.
    fn keyed_exit(&self, word: &str) -> Result<Direction, SquareError> {
        if !self.player.has_item(KEY) {
            return Err(SquareError::MissingKey);
        }
        parse_direction(word)
    }

    /// Player meets the robot in their room, if it is still active.
    fn resolve_encounter(&mut self, events: &mut Vec<Narration>) {
        let here = self.player.current_room();
        let id = match self.square.room(here).robot() {
            Some(id) => id,
            None => return,
        };
        let armed = self.player.has_item(SCREWDRIVER);
        let robot = &mut self.robots[id.0];
        if robot.is_disabled() {
            return;
        }
        let kind = robot.kind();
        match (kind, armed) {
            (_, true) => {
                robot.disable();
                info!("{} disabled in room {}", kind, here);
                events.push(Narration::RobotDisabled { kind });
            }
            (RobotKind::Bishop, false) => {
                info!("Caught by {} in room {}", kind, here);
                self.status = GameStatus::Lost;
                events.push(Narration::Error(SquareError::FatalEncounter { kind }));
            }
            (RobotKind::Rook, false) => {
                events.push(Narration::HarmlessEncounter { kind });
            }
        }
    }

    /// Every active robot acts once, in row-major room order.
    fn move_robots(&mut self, events: &mut Vec<Narration>) {
        let mut acted = vec![false; self.robots.len()];
        let target = self.player.current_room();
        let armed = self.player.has_item(SCREWDRIVER);

        for from in self.square.room_ids() {
            let id = match self.square.room(from).robot() {
                Some(id) => id,
                None => continue,
            };
            if acted[id.0] || self.robots[id.0].is_disabled() {
                continue;
            }
            acted[id.0] = true;

            let robot = &self.robots[id.0];
            let kind = robot.kind();
            let square = &self.square;
            let choice = robot.choose_move(square.room(from), target, armed, |to| {
                square.room(to).has_robot()
            });
            if let Some(to) = choice.and_then(|d| self.square.room(from).neighbor(d)) {
                if !self.square.room(to).has_robot() {
                    self.square.room_mut(from).clear_robot();
                    self.square.room_mut(to).set_robot(id);
                    debug!("{} moves {} -> {}", kind, from, to);
                    events.push(Narration::RobotMoved { kind, room: to });
                }
            }

            if let Some(direction) = self.robots[id.0].door_to_toggle(self.square.room(from), target) {
                let room = self.square.room_mut(from);
                if let (Some(locked), Some(to)) = (room.toggle_exit(direction), room.neighbor(direction)) {
                    debug!(
                        "{} {} door {} of {}",
                        kind,
                        if locked { "locks" } else { "unlocks" },
                        direction,
                        from
                    );
                    events.push(Narration::DoorToggled {
                        kind,
                        direction,
                        target: to,
                        locked,
                    });
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Read-only queries
    // ------------------------------------------------------------------

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn square(&self) -> &Square {
        &self.square
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_room(&self) -> RoomId {
        self.player.current_room()
    }

    pub fn robot(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(id.0)
    }

    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Robot presence in `room` without its variant.
    pub fn presence(&self, room: RoomId) -> Presence {
        match self.square.room(room).robot().and_then(|id| self.robot(id)) {
            None => Presence::None,
            Some(robot) if robot.is_disabled() => Presence::Disabled,
            Some(_) => Presence::Active,
        }
    }

    /// Variant of the robot in `room`, for renderers that are allowed to reveal it.
    pub fn robot_kind_at(&self, room: RoomId) -> Option<RobotKind> {
        self.square
            .room(room)
            .robot()
            .and_then(|id| self.robot(id))
            .map(Robot::kind)
    }

    /// Where each robot currently stands, by robot id.
    pub fn robot_positions(&self) -> Vec<(RobotId, RoomId)> {
        let mut positions: Vec<(RobotId, RoomId)> = self
            .square
            .rooms()
            .filter_map(|room| room.robot().map(|id| (id, room.id())))
            .collect();
        positions.sort_by_key(|(id, _)| id.0);
        positions
    }

    /// Lock state of each exit of `room`, canonical direction order.
    pub fn exit_locks(&self, room: RoomId) -> Vec<(Direction, bool)> {
        self.square.room(room).exit_locks()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            status: self.status,
            turns: self.turns,
            room: self.player.current_room(),
            inventory: self.player.inventory().map(str::to_string),
            robots_disabled: self.robots.iter().filter(|r| r.is_disabled()).count(),
        }
    }

    /// Mutable world access for building test scenarios.
    #[cfg(test)]
    pub(crate) fn square_mut(&mut self) -> &mut Square {
        &mut self.square
    }
}

fn require<'a>(verb: Verb, arg: Option<&'a str>) -> Result<&'a str, SquareError> {
    arg.ok_or(SquareError::MissingArgument {
        verb: verb.as_str(),
    })
}

fn parse_direction(word: &str) -> Result<Direction, SquareError> {
    word.parse::<Direction>()
        .map_err(|_| SquareError::NoSuchExit {
            direction: word.to_string(),
        })
}
