//! Player and story state for a running session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::room::{ItemId, RoomId};

/// The fixed set of story-progress flags. All start false.
///
/// `won` and `lost` are terminal: once either is set, the game state is
/// frozen and only re-rendering of the terminal room is permitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// The start room's lights are on.
    pub lights_on: bool,
    /// The exit door has been unlocked.
    pub unlocked: bool,
    /// The player has put on clothes.
    pub dressed: bool,
    /// The player already tripped over the chair in the dark.
    pub stumbled: bool,
    /// The computer has been lifted, revealing what was under it.
    pub moved_computer: bool,
    /// The player reached the victory room.
    pub won: bool,
    /// The player reached the failure room.
    pub lost: bool,
}

impl Flags {
    /// Whether a terminal flag is set.
    pub fn terminal(self) -> bool {
        self.won || self.lost
    }
}

/// Mutable player/world state for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Id of the room the player is in. Always a valid world key.
    pub current_room: RoomId,
    /// Items the player carries. An item appears at most once.
    pub inventory: Vec<ItemId>,
    /// Rooms the player has entered. Append-only.
    pub visited: BTreeSet<RoomId>,
    /// Story-progress flags.
    pub flags: Flags,
}

impl GameState {
    /// Fresh state at the given start room: empty inventory, all flags
    /// false, the start room already marked visited.
    pub fn new(start: RoomId) -> Self {
        let mut visited = BTreeSet::new();
        visited.insert(start.clone());
        Self {
            current_room: start,
            inventory: Vec::new(),
            visited,
            flags: Flags::default(),
        }
    }

    /// Whether the player carries an item with this name
    /// (case-insensitive).
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.matches(name))
    }

    /// Append an item to the inventory unless it is already there.
    pub fn add_item(&mut self, item: ItemId) {
        if !self.inventory.contains(&item) {
            self.inventory.push(item);
        }
    }

    /// Remove the first inventory item matching `name`, returning it.
    pub fn remove_item(&mut self, name: &str) -> Option<ItemId> {
        let index = self.inventory.iter().position(|item| item.matches(name))?;
        Some(self.inventory.remove(index))
    }

    /// Record a room as visited.
    pub fn visit(&mut self, room: RoomId) {
        self.visited.insert(room);
    }

    /// Whether a terminal flag is set.
    pub fn game_over(&self) -> bool {
        self.flags.terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(RoomId::new("cell"))
    }

    #[test]
    fn fresh_state_is_clean() {
        let state = state();
        assert_eq!(state.current_room.as_str(), "cell");
        assert!(state.inventory.is_empty());
        assert!(state.visited.contains("cell"));
        assert_eq!(state.flags, Flags::default());
        assert!(!state.game_over());
    }

    #[test]
    fn add_item_never_duplicates() {
        let mut state = state();
        state.add_item(ItemId::new("key"));
        state.add_item(ItemId::new("key"));
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn remove_item_ignores_case() {
        let mut state = state();
        state.add_item(ItemId::new("key"));

        assert_eq!(state.remove_item("KEY"), Some(ItemId::new("key")));
        assert!(state.inventory.is_empty());
        assert_eq!(state.remove_item("key"), None);
    }

    #[test]
    fn has_item_ignores_case() {
        let mut state = state();
        state.add_item(ItemId::new("clothes"));
        assert!(state.has_item("Clothes"));
        assert!(!state.has_item("key"));
    }

    #[test]
    fn terminal_flags_end_the_game() {
        let mut state = state();
        assert!(!state.flags.terminal());
        state.flags.won = true;
        assert!(state.flags.terminal());
        assert!(state.game_over());
    }

    #[test]
    fn visited_grows_monotonically() {
        let mut state = state();
        state.visit(RoomId::new("yard"));
        state.visit(RoomId::new("yard"));
        assert_eq!(state.visited.len(), 2);
    }
}
