//! Error types for the engine.

use thiserror::Error;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while setting up a session.
///
/// Player input never produces one of these: every semantic failure
/// (wrong room, missing item, unreachable exit) degrades to a styled
/// narration line instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world failed structural validation.
    #[error(transparent)]
    World(#[from] ks_core::WorldError),
}
