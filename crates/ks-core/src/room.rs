//! Rooms and the items they contain.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Identifier of a room: the key under which the world stores it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Create a room id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an item. Items move between a room's list and the
/// player's inventory, never duplicated, never destroyed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against a player-typed name.
    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named location with description text, exits, and contained items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Display name shown in the room header.
    pub name: String,
    /// Description shown when the room is visible.
    pub description: String,
    /// Alternate description used while the room is dark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_description: Option<String>,
    /// Exits to other rooms, keyed by direction.
    #[serde(default)]
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items currently lying in the room.
    #[serde(default)]
    pub items: Vec<ItemId>,
}

impl Room {
    /// Create a room with a display name and description and no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            dark_description: None,
            exits: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// Set the description used while the room is dark.
    #[must_use]
    pub fn with_dark_description(mut self, text: impl Into<String>) -> Self {
        self.dark_description = Some(text.into());
        self
    }

    /// Add an exit toward another room.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, to: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, to.into());
        self
    }

    /// Add an item to the room's contents.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Whether an item with this name is present (case-insensitive).
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.matches(name))
    }

    /// Remove the first item matching `name`, returning it.
    pub fn remove_item(&mut self, name: &str) -> Option<ItemId> {
        let index = self.items.iter().position(|item| item.matches(name))?;
        Some(self.items.remove(index))
    }
}
