use super::errors::SquareError;
use super::grid::Square;
use super::types::{Direction, RoomId};

/// The player: where they stand and the one item they may carry.
#[derive(Debug, Clone)]
pub struct Player {
    current_room: RoomId,
    inventory: Option<String>,
}

impl Player {
    pub fn new(start: RoomId) -> Self {
        Player {
            current_room: start,
            inventory: None,
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// Walk through an unlocked exit. On error the player stays put.
    pub fn go(&mut self, square: &Square, direction: Direction) -> Result<RoomId, SquareError> {
        let next = square.room(self.current_room).destination(direction)?;
        self.current_room = next;
        Ok(next)
    }

    /// Take `item` into the single slot; refused while the slot is full.
    pub fn add_item(&mut self, item: impl Into<String>) -> Result<(), SquareError> {
        if let Some(held) = &self.inventory {
            return Err(SquareError::AlreadyCarrying { item: held.clone() });
        }
        self.inventory = Some(item.into());
        Ok(())
    }

    /// Empties the slot if it holds exactly `item`.
    pub fn remove_item(&mut self, item: &str) -> Result<String, SquareError> {
        match self.inventory.take() {
            Some(held) if held == item => Ok(held),
            other => {
                self.inventory = other;
                Err(SquareError::NotCarrying {
                    item: item.to_string(),
                })
            }
        }
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.as_deref() == Some(item)
    }

    pub fn inventory(&self) -> Option<&str> {
        self.inventory.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::types::START_ROOM;

    #[test]
    fn moves_through_open_door_only() {
        let mut square = Square::empty();
        let mut player = Player::new(START_ROOM);

        assert!(matches!(
            player.go(&square, Direction::South),
            Err(SquareError::NoSuchExit { .. })
        ));
        assert_eq!(player.current_room(), START_ROOM);

        square.room_mut(START_ROOM).lock_exit(Direction::North);
        assert_eq!(
            player.go(&square, Direction::North),
            Err(SquareError::ExitLocked {
                direction: Direction::North
            })
        );
        assert_eq!(player.current_room(), START_ROOM);

        square.room_mut(START_ROOM).unlock_exit(Direction::North);
        let to = player.go(&square, Direction::North).unwrap();
        assert_eq!(to, RoomId::new(1, 2).unwrap());
        assert_eq!(player.current_room(), to);
    }

    #[test]
    fn single_slot_inventory() {
        let mut player = Player::new(START_ROOM);
        assert!(player.inventory().is_none());
        player.add_item("key").unwrap();
        assert_eq!(
            player.add_item("screwdriver"),
            Err(SquareError::AlreadyCarrying {
                item: "key".to_string()
            })
        );
        assert!(player.has_item("key"));
        assert!(!player.has_item("screwdriver"));

        assert!(player.remove_item("screwdriver").is_err());
        assert!(player.has_item("key"));
        assert_eq!(player.remove_item("key").unwrap(), "key");
        assert!(player.inventory().is_none());
    }
}
