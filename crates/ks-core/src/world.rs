//! The world model: a fixed mapping of room ids to rooms.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::room::{Room, RoomId};

/// The static room graph. Owns every room; rooms are mutated in place
/// only as items move between them and the player's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Id of the room a fresh session starts in.
    start: RoomId,
    /// All rooms, keyed by id.
    rooms: HashMap<RoomId, Room>,
}

impl World {
    /// Create an empty world with the given start room id.
    pub fn new(start: impl Into<RoomId>) -> Self {
        Self {
            start: start.into(),
            rooms: HashMap::new(),
        }
    }

    /// Insert a room under an id, replacing and returning any room
    /// previously stored there.
    pub fn insert_room(&mut self, id: impl Into<RoomId>, room: Room) -> Option<Room> {
        self.rooms.insert(id.into(), room)
    }

    /// The start room id.
    pub fn start(&self) -> &RoomId {
        &self.start
    }

    /// Look up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Look up a room mutably by id.
    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Number of rooms in the world.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check the structural invariants: the start room exists and every
    /// exit points at an existing room.
    pub fn validate(&self) -> WorldResult<()> {
        if !self.rooms.contains_key(self.start.as_str()) {
            return Err(WorldError::StartRoomMissing(self.start.clone()));
        }

        for (id, room) in &self.rooms {
            for (direction, target) in &room.exits {
                if !self.rooms.contains_key(target.as_str()) {
                    return Err(WorldError::BrokenExit {
                        from: id.clone(),
                        direction: *direction,
                        to: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn two_rooms() -> World {
        let mut world = World::new("cell");
        world.insert_room(
            "cell",
            Room::new("Cell", "A bare cell.").with_exit(Direction::North, "yard"),
        );
        world.insert_room("yard", Room::new("Yard", "An open yard."));
        world
    }

    #[test]
    fn lookup_by_id() {
        let world = two_rooms();
        assert_eq!(world.room("cell").map(|r| r.name.as_str()), Some("Cell"));
        assert!(world.room("attic").is_none());
        assert_eq!(world.room_count(), 2);
    }

    #[test]
    fn insert_replaces_existing_room() {
        let mut world = two_rooms();
        let previous = world.insert_room("yard", Room::new("Yard", "Repaved."));
        assert_eq!(previous.map(|r| r.description), Some("An open yard.".into()));
    }

    #[test]
    fn validate_accepts_consistent_world() {
        assert!(two_rooms().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_start() {
        let mut world = World::new("nowhere");
        world.insert_room("cell", Room::new("Cell", "A bare cell."));

        assert!(matches!(
            world.validate(),
            Err(WorldError::StartRoomMissing(id)) if id.as_str() == "nowhere"
        ));
    }

    #[test]
    fn validate_rejects_broken_exit() {
        let mut world = World::new("cell");
        world.insert_room(
            "cell",
            Room::new("Cell", "A bare cell.").with_exit(Direction::East, "void"),
        );

        assert!(matches!(
            world.validate(),
            Err(WorldError::BrokenExit { to, .. }) if to.as_str() == "void"
        ));
    }

    #[test]
    fn world_deserializes_from_json() {
        let json = r#"{
            "start": "cell",
            "rooms": {
                "cell": {
                    "name": "Cell",
                    "description": "A bare cell.",
                    "exits": { "north": "yard" },
                    "items": ["spoon"]
                },
                "yard": {
                    "name": "Yard",
                    "description": "An open yard."
                }
            }
        }"#;

        let world: World = serde_json::from_str(json).unwrap();
        world.validate().unwrap();
        assert!(world.room("cell").is_some_and(|r| r.has_item("spoon")));
    }
}
