//! A minimal text-adventure engine: a fixed room graph, a player state
//! record, and a command interpreter that maps free-text input to state
//! transitions and styled narration.
//!
//! The engine is presentation-agnostic. [`Session::process`] consumes
//! one committed input line and returns a [`Reply`] of styled lines for
//! any frontend to render; the engine itself performs no I/O.

/// Error types for the engine.
pub mod error;
/// Command parsing for player input.
pub mod parser;
/// Styled narration lines emitted by the interpreter.
pub mod reply;
/// Session management and command dispatch.
pub mod session;
/// Static story content: rooms, vocabulary, and canned narration.
pub mod story;

/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export the parsed command type and entry point.
pub use parser::{Command, parse_command};
/// Re-export the reply model.
pub use reply::{Line, Reply, Style, Transcript};
/// Re-export the session type.
pub use session::Session;
