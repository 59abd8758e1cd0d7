//! Error types used throughout the crate.

use crate::direction::Direction;
use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while validating a world.
///
/// Player input never produces one of these; semantic failures are
/// reported as narration lines by the interpreter.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The world's start room id does not exist in the room map.
    #[error("start room not found: \"{0}\"")]
    StartRoomMissing(RoomId),

    /// An exit references a room id that does not exist.
    #[error("exit {direction} from \"{from}\" leads to unknown room \"{to}\"")]
    BrokenExit {
        /// Room the exit leaves from.
        from: RoomId,
        /// Direction of the exit.
        direction: Direction,
        /// The missing destination id.
        to: RoomId,
    },
}
