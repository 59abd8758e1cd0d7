//! Core types for Kammerspiel: rooms, items, directions, and the
//! mutable player state.
//!
//! This crate defines the data the interpreter runs against. It is
//! independent of the parser — you can construct a [`World`]
//! programmatically or deserialize one from JSON.

/// Compass directions used for room exits and movement.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Rooms and the items they contain.
pub mod room;
/// Player and story state for a running session.
pub mod state;
/// The world model that owns the room graph.
pub mod world;

/// Re-export the direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export room types.
pub use room::{ItemId, Room, RoomId};
/// Re-export state types.
pub use state::{Flags, GameState};
/// Re-export the world model.
pub use world::World;
