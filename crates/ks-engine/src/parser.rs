//! Command parsing for player input.
//!
//! Tokenization is purely syntactic: trim, lowercase, first token is
//! the verb, the remaining tokens rejoined with single spaces form the
//! target phrase. Verb aliases resolve here; whether the resulting
//! action makes sense against the current state is the session's
//! concern.

use ks_core::Direction;

use crate::story;

/// Verb synonyms for command parsing.
const LOOK_VERBS: &[&str] = &["look", "l"];
const MOVE_VERBS: &[&str] = &["go", "move"];
const TAKE_VERBS: &[&str] = &["take", "get", "pickup", "pick"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const USE_VERBS: &[&str] = &["use", "flip", "turn", "switch"];
const WEAR_VERBS: &[&str] = &["wear", "put"];
const OPEN_VERBS: &[&str] = &["unlock", "open"];
const HELP_VERBS: &[&str] = &["help", "?"];
const CLEAR_VERBS: &[&str] = &["clear", "cls"];

/// A parsed player command, with verb aliases resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render the room, or examine a named target.
    Look {
        /// Optional target phrase to examine.
        target: Option<String>,
    },
    /// Move toward a direction.
    Move {
        /// The target phrase, usually a direction word.
        target: String,
    },
    /// Pick up an item.
    Take {
        /// The item name as typed (lowercased).
        item: String,
    },
    /// List carried items.
    Inventory,
    /// Use an item or fixture.
    Use {
        /// The item name as typed (lowercased).
        item: String,
    },
    /// Show the command summary.
    Help,
    /// Clear the rendered output and re-render the room.
    Clear,
    /// Blank input; does nothing.
    Empty,
    /// A recognized verb that cannot be executed as given.
    Invalid {
        /// The error line to show.
        message: &'static str,
    },
    /// An unrecognized verb. Never mutates state.
    Unknown {
        /// The offending input.
        input: String,
    },
}

/// Parse one committed input line into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let target = words[1..].join(" ").to_lowercase();

    // Bare direction words move directly.
    if Direction::parse(&verb).is_some() {
        return Command::Move { target: verb };
    }

    if LOOK_VERBS.contains(&verb.as_str()) {
        let target = if target.is_empty() { None } else { Some(target) };
        return Command::Look { target };
    }
    if MOVE_VERBS.contains(&verb.as_str()) {
        return if target.is_empty() {
            Command::Invalid {
                message: "Go where? Try: GO NORTH",
            }
        } else {
            Command::Move { target }
        };
    }
    if TAKE_VERBS.contains(&verb.as_str()) {
        return if target.is_empty() {
            Command::Invalid {
                message: "Take what?",
            }
        } else {
            Command::Take { item: target }
        };
    }
    if INVENTORY_VERBS.contains(&verb.as_str()) {
        return Command::Inventory;
    }
    if USE_VERBS.contains(&verb.as_str()) {
        return if target.is_empty() {
            Command::Invalid {
                message: "Use what?",
            }
        } else {
            Command::Use { item: target }
        };
    }
    if WEAR_VERBS.contains(&verb.as_str()) {
        return if story::mentions_clothing(&target) {
            Command::Use {
                item: story::CLOTHES.to_string(),
            }
        } else {
            Command::Invalid {
                message: "Wear what?",
            }
        };
    }
    if OPEN_VERBS.contains(&verb.as_str()) {
        return if story::mentions_door(&target) {
            Command::Use {
                item: story::KEY.to_string(),
            }
        } else {
            Command::Invalid {
                message: "You can't open that.",
            }
        };
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Command::Help;
    }
    if CLEAR_VERBS.contains(&verb.as_str()) {
        return Command::Clear;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}
