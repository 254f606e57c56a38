//! The Square itself: a fixed 5x5 grid of rooms wired by cardinal exits.
//!
//! Topology is fixed once built. Only locks, items and occupancy change afterwards.
//! Rooms are stored row-major (y outer, x inner) and every enumeration follows
//! that order so robot turns are reproducible.

use log::debug;
use rand::Rng;

use super::room::Room;
use super::types::{Direction, RoomId, GRID_SIZE, KEY, SCREWDRIVER};

#[derive(Debug, Clone)]
pub struct Square {
    rooms: Vec<Room>,
}

impl Square {
    /// Build the grid with every in-range exit wired and no items.
    pub fn empty() -> Self {
        let mut rooms = Vec::with_capacity(GRID_SIZE as usize * GRID_SIZE as usize);
        for y in 1..=GRID_SIZE {
            for x in 1..=GRID_SIZE {
                let id = RoomId { x, y };
                let mut room = Room::new(id);
                for direction in Direction::ALL {
                    if let Some(neighbor) = id.step(direction) {
                        room.set_exit(direction, neighbor);
                    }
                }
                rooms.push(room);
            }
        }
        Square { rooms }
    }

    /// Build the grid and scatter 1-4 keys and 1-4 screwdrivers over random rooms.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut square = Self::empty();
        let keys = 1 + rng.gen_range(0..4);
        let screwdrivers = 1 + rng.gen_range(0..4);
        square.scatter(rng, KEY, keys);
        square.scatter(rng, SCREWDRIVER, screwdrivers);
        square
    }

    fn scatter<R: Rng + ?Sized>(&mut self, rng: &mut R, item: &str, count: usize) {
        for _ in 0..count {
            let x = rng.gen_range(1..=GRID_SIZE);
            let y = rng.gen_range(1..=GRID_SIZE);
            let id = RoomId { x, y };
            debug!("Placing {} in room {}", item, id);
            self.room_mut(id).add_item(item);
        }
    }

    pub fn is_valid(x: i16, y: i16) -> bool {
        RoomId::in_bounds(x, y)
    }

    /// Lookup by raw coordinates; `None` when off the grid.
    pub fn get(&self, x: u8, y: u8) -> Option<&Room> {
        RoomId::new(x, y).map(|id| self.room(id))
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    /// All rooms, row-major.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// All room ids, row-major.
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(Room::id).collect()
    }

    pub fn item_count(&self, item: &str) -> usize {
        self.rooms
            .iter()
            .map(|r| r.items().iter().filter(|i| *i == item).count())
            .sum()
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::empty()
    }
}
