//! Static story content: the room graph, item vocabulary, and canned
//! narration for the birthday-morning scenario.
//!
//! The interpreter consumes this as data. Nothing here contains logic
//! beyond word-table lookups; every table is an explicit enumeration so
//! that noun matching stays deterministic.

use ks_core::{Direction, Room, World};

/// Id of the starting room (the bedroom).
pub const START: &str = "bedroom";
/// Id of the victory room.
pub const HALLWAY: &str = "hallway";
/// Id of the failure room.
pub const HALLWAY_FAIL: &str = "hallway_fail";

/// Canonical name of the wearable item.
pub const CLOTHES: &str = "clothes";
/// Canonical name of the door key.
pub const KEY: &str = "key";

/// Words referring to the computer on the desk.
pub const COMPUTER_WORDS: &[&str] = &["commodore", "c64", "computer"];
/// Words referring to the light switch.
pub const LIGHT_WORDS: &[&str] = &["light", "lights", "switch"];
/// Words referring to the wearable item.
pub const CLOTHING_WORDS: &[&str] = &["clothes", "cloth", "shirt"];
/// Words referring to the exit door.
pub const DOOR_WORDS: &[&str] = &["door"];

/// The horizontal rule used in room headers.
pub const BANNER: &str = "─────────────────────────────────────────────";

/// The line shown when a command is refused because the game is over.
pub const GAME_OVER: &str =
    "The game is over. Type CLEAR to restart or HELP to learn how to extend the game.";

/// The opening narration shown before the first room render.
pub const WELCOME: &[&str] = &[
    "You wake up groggily. Your digital alarm clock",
    "blinks 10:47 AM in angry red LEDs.",
    "",
    "'Ugh... what day is it?' you mumble. You ",
    "remember it's the day before Christmas and",
    "you still haven't all your gifts.",
    "",
    "You think: 'I will get them on Christmas",
    "Eve ...'. You smile, but that won't solve",
    "your problem today.",
    "",
    "Outside your door, you hear... something.",
    "Whispers? Shuffling? Probably just your cat.",
    "",
    BANNER,
    "Commands: LOOK, GO [direction], TAKE [item],",
    "          USE [item], INVENTORY, HELP",
    BANNER,
    "",
];

/// Header lines of the command summary.
pub const HELP_HEADER: &[&str] = &[
    "═══════════════════════════════════════",
    "AVAILABLE COMMANDS:",
    "═══════════════════════════════════════",
];

/// Body lines of the command summary.
pub const HELP_BODY: &[&str] = &[
    "  LOOK [item] - Examine surroundings or item",
    "  GO [direction] - Move (NORTH, SOUTH, EAST, WEST)",
    "  TAKE [item] - Pick up an item",
    "  USE [item] - Use an item or interact",
    "  WEAR [clothes] - Put on clothes",
    "  UNLOCK [door] - Use key on door",
    "  INVENTORY (INV, I) - Check your items",
    "  HELP (?) - Show this message",
    "  CLEAR (CLS) - Clear the screen",
    "",
];

/// Whether any whitespace-separated word of `phrase` appears in `table`.
pub fn mentions(table: &[&str], phrase: &str) -> bool {
    phrase.split_whitespace().any(|word| table.contains(&word))
}

/// Whether the phrase names the computer.
pub fn mentions_computer(phrase: &str) -> bool {
    mentions(COMPUTER_WORDS, phrase)
}

/// Whether the phrase names the wearable item.
pub fn mentions_clothing(phrase: &str) -> bool {
    mentions(CLOTHING_WORDS, phrase)
}

/// Whether the phrase names the exit door.
pub fn mentions_door(phrase: &str) -> bool {
    mentions(DOOR_WORDS, phrase)
}

/// A fixture the player can examine in the lit starting room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// The computer on the desk.
    Computer,
    /// The desk itself.
    Desk,
    /// The wardrobe.
    Wardrobe,
    /// The office chair.
    Chair,
    /// The wall posters.
    Posters,
}

impl Fixture {
    /// Resolve a target phrase against the fixture word tables.
    pub fn resolve(phrase: &str) -> Option<Self> {
        const TABLE: &[(Fixture, &[&str])] = &[
            (Fixture::Computer, COMPUTER_WORDS),
            (Fixture::Desk, &["desk"]),
            (Fixture::Wardrobe, &["wardrobe", "closet"]),
            (Fixture::Chair, &["chair"]),
            (Fixture::Posters, &["poster", "posters"]),
        ];

        TABLE
            .iter()
            .find(|(_, words)| mentions(words, phrase))
            .map(|(fixture, _)| *fixture)
    }
}

/// Build the story world: the bedroom and the two terminal hallways,
/// one reachable only by winning and one only by losing.
pub fn world() -> World {
    let mut world = World::new(START);

    world.insert_room(
        START,
        Room::new(
            "Your Nerd Cave (1989)",
            "Your bedroom is a shrine to 80s computing. Posters of Tron and WarGames adorn \
             the walls. Your trusty Commodore 64 sits on the desk to the SOUTH, its beige \
             plastic gleaming. A wardrobe full of graphic tees is to the WEST. An overturned \
             office chair with squeaky wheels lies near the desk. The door to freedom (and \
             breakfast) is to the NORTH. A light switch is mounted on the wall by the door.",
        )
        .with_dark_description(
            "It's pitch black. You can't see a thing. You hear muffled sounds outside your \
             door to the NORTH. Your bed is somewhere behind you. You know your room has a \
             desk to the SOUTH, a wardrobe to the WEST, and a light switch... somewhere near \
             the door.",
        )
        .with_exit(Direction::North, HALLWAY)
        .with_item(CLOTHES),
    );

    world.insert_room(
        HALLWAY,
        Room::new(
            "The Hallway of Victory",
            "SURPRISE!!! 🎉🎂🎈\n\nA massive crowd erupts in cheers! Balloons fall from the \
             ceiling! Your friends, and even that weird kid writing adventures for your \
             birthday are all here!\n\n'HAPPY BIRTHDAY!' they shout in unison.\n\nYour \
             Metallica t-shirt has never looked so good. Today is YOUR day!\n\n🎮 \
             CONGRATULATIONS! YOU WON THE GAME! 🎮",
        ),
    );

    world.insert_room(
        HALLWAY_FAIL,
        Room::new(
            "The Hallway of Shame",
            "You open the door, naked ...\n\nThe crowd gasps. Your friends cover their \
             eyes. Someone's camera flashes. You dissolve in shame. GAME OVER.",
        ),
    );

    world
}
