//! Session management and command dispatch.
//!
//! A [`Session`] owns the world and the player state; every handler is
//! a method that reads and mutates both and appends styled narration to
//! the reply. Processing one committed input line runs parse → dispatch
//! → handler → render to completion before the next line is accepted.

use ks_core::{Direction, GameState, ItemId, RoomId, World};

use crate::error::EngineResult;
use crate::parser::{Command, parse_command};
use crate::reply::Reply;
use crate::story;
use crate::story::Fixture;

/// A running game session.
#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    state: GameState,
}

impl Session {
    /// Create a session over a validated world, with the player at the
    /// start room, an empty inventory, and all flags cleared.
    pub fn new(world: World) -> EngineResult<Self> {
        world.validate()?;
        let state = GameState::new(world.start().clone());
        Ok(Self { world, state })
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The opening narration followed by the first room render.
    pub fn welcome(&self) -> Reply {
        let mut reply = Reply::new();
        for line in story::WELCOME {
            reply.plain(*line);
        }
        self.render_room(&mut reply);
        reply
    }

    /// Process one committed input line to completion.
    pub fn process(&mut self, input: &str) -> Reply {
        self.execute(parse_command(input))
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Reply {
        let mut reply = Reply::new();
        match command {
            Command::Look { target } => self.do_look(&mut reply, target.as_deref()),
            Command::Move { target } => self.do_move(&mut reply, &target),
            Command::Take { item } => self.do_take(&mut reply, &item),
            Command::Inventory => self.do_inventory(&mut reply),
            Command::Use { item } => self.do_use(&mut reply, &item),
            Command::Help => self.do_help(&mut reply),
            Command::Clear => self.do_clear(&mut reply),
            Command::Empty => {}
            Command::Invalid { message } => reply.error(message),
            Command::Unknown { input } => reply.error(format!(
                "I don't understand \"{input}\". Try HELP for available commands."
            )),
        }
        reply
    }

    fn in_start_room(&self) -> bool {
        self.state.current_room.as_str() == story::START
    }

    fn room_has(&self, room: &str, item: &str) -> bool {
        self.world.room(room).is_some_and(|r| r.has_item(item))
    }

    fn do_look(&self, reply: &mut Reply, target: Option<&str>) {
        let Some(target) = target else {
            self.render_room(reply);
            return;
        };

        // Only the starting room has differentiated examine behavior.
        if !self.in_start_room() {
            self.render_room(reply);
            return;
        }

        if !self.state.flags.lights_on {
            reply.error("It's too dark to see anything specific. Maybe turn on the lights?");
            return;
        }

        match Fixture::resolve(target) {
            Some(Fixture::Computer) => {
                reply.info("Your beloved Commodore 64! 64 whole kilobytes of RAM!");
                reply.info("The beige beauty sits majestically on your desk.");
                if !self.state.flags.moved_computer {
                    reply.info("You might want to pick it up to see what's underneath...");
                }
            }
            Some(Fixture::Desk) => {
                reply.info("Your cluttered desk. Home to your Commodore 64 and various floppy disks.");
                if self.state.flags.moved_computer {
                    reply.info("There's a key here now that you moved the C64!");
                }
            }
            Some(Fixture::Wardrobe) => {
                reply.info("Your wardrobe full of nerdy t-shirts.");
                reply.info("The classics. You should probably wear something.");
                if self.room_has(story::START, story::CLOTHES) {
                    reply.success("You could TAKE CLOTHES from here.");
                }
            }
            Some(Fixture::Chair) => {
                if self.state.flags.stumbled {
                    reply.info("That treacherous chair that tripped you. It looks innocent now.");
                } else {
                    reply.info("An office chair on wheels. Looks harmless... for now.");
                }
            }
            Some(Fixture::Posters) => {
                reply.info("Your walls are covered in the finest 80s sci-fi cinema.");
                reply.info("Tron. WarGames. The good stuff.");
            }
            None => reply.info("Nothing special about that."),
        }
    }

    fn do_move(&mut self, reply: &mut Reply, target: &str) {
        if self.state.game_over() {
            reply.info(story::GAME_OVER);
            return;
        }

        let direction = Direction::parse(target);

        // Scripted movement in the starting room is intercepted before
        // the generic exit-table lookup.
        if self.in_start_room() {
            match direction {
                Some(Direction::West) => {
                    self.approach_wardrobe(reply);
                    return;
                }
                Some(Direction::South) => {
                    self.approach_desk(reply);
                    return;
                }
                Some(Direction::North) => {
                    self.approach_door(reply);
                    return;
                }
                _ => {}
            }
        }

        let destination = direction.and_then(|d| {
            self.world
                .room(self.state.current_room.as_str())
                .and_then(|room| room.exits.get(&d).cloned())
        });

        let shown = direction.map_or(target, |d| d.name());
        match destination {
            Some(next) => {
                self.state.current_room = next.clone();
                self.state.visit(next);
                reply.success(format!("You go {shown}..."));
                reply.blank();
                self.render_room(reply);
            }
            None => reply.error(format!("You can't go {shown} from here.")),
        }
    }

    fn approach_wardrobe(&mut self, reply: &mut Reply) {
        if !self.state.flags.lights_on {
            reply.error("You bump into something soft. Probably the wardrobe. Turn on the lights!");
            return;
        }

        reply.info("You open the wardrobe. Ah, the smell of vintage cotton and nostalgia.");
        if self.room_has(story::START, story::CLOTHES) {
            reply.success("Your clothes are here. You should TAKE CLOTHES.");
        } else {
            reply.info("You already took your favorite outfit from here.");
        }
    }

    fn approach_desk(&mut self, reply: &mut Reply) {
        if !self.state.flags.lights_on {
            // The first trip in the dark springs the chair; afterwards
            // the player knows to step around it.
            if self.state.flags.stumbled {
                reply.success("You carefully navigate around the chair this time.");
                reply.info("Smart move. Still can't see anything though.");
            } else {
                reply.error("You stumble forward in the darkness...");
                reply.blank();
                reply.error("*CRASH!* *CLATTER!* *BONK!*");
                reply.blank();
                reply.error("OW! You trip over your office chair and face-plant into the carpet!");
                reply.error("The chair rolls away, squeaking mockingly.");
                reply.error("Maybe you should turn on the lights first, genius.");
                self.state.flags.stumbled = true;
            }
            return;
        }

        reply.info("You approach your desk. Your Commodore 64 sits proudly upon it.");
        if self.state.flags.moved_computer && self.room_has(story::START, story::KEY) {
            reply.success("The KEY is here, revealed from under the C64!");
        } else if !self.state.flags.moved_computer {
            reply.info("Maybe you should examine or take the Commodore 64?");
        }
    }

    fn approach_door(&mut self, reply: &mut Reply) {
        if !self.state.flags.unlocked {
            reply.error("You try the door. It's locked from the outside!");
            reply.info("Why would someone lock you in?! Suspicious...");
            return;
        }

        if !self.state.flags.dressed {
            reply.error("You open the door in your underwear...");
            reply.blank();
            self.state.current_room = RoomId::from(story::HALLWAY_FAIL);
            self.state.flags.lost = true;
            self.render_room(reply);
            return;
        }

        reply.success("You unlock the door and swing it open...");
        reply.blank();
        self.state.current_room = RoomId::from(story::HALLWAY);
        self.state.flags.won = true;
        self.render_room(reply);
    }

    fn do_take(&mut self, reply: &mut Reply, item: &str) {
        if self.state.game_over() {
            reply.info(story::GAME_OVER);
            return;
        }

        if self.in_start_room() && !self.state.flags.lights_on {
            reply.error("It's too dark to find anything. Try turning on the lights!");
            return;
        }

        // Lifting the computer reveals the key; the computer itself is
        // examined in place, never collected.
        if story::mentions_computer(item) && self.in_start_room() && !self.state.flags.moved_computer
        {
            reply.info("You carefully lift your precious Commodore 64...");
            reply.info("It's heavier than it looks! Those 80s computers were built to last.");
            reply.blank();
            reply.success("Wait! There's something underneath it!");
            reply.success("A KEY! It was hiding under your C64 all along!");
            reply.blank();
            reply.info("You set the computer back down gently.");
            self.state.flags.moved_computer = true;
            if let Some(room) = self.world.room_mut(story::START) {
                room.items = vec![ItemId::from(story::KEY)];
            }
            return;
        }

        let Some(room) = self.world.room_mut(self.state.current_room.as_str()) else {
            reply.error("There's nothing to take here.");
            return;
        };
        if room.items.is_empty() {
            reply.error("There's nothing to take here.");
            return;
        }

        match room.remove_item(item) {
            Some(taken) => {
                reply.success(format!("You take the {taken}."));
                if taken.matches(story::KEY) {
                    reply.info("This must be the key to your door! But why was it under your C64?");
                } else if taken.matches(story::CLOTHES) {
                    reply.info("Your favorite Metallica t-shirt and jeans. A classic combo.");
                }
                self.state.add_item(taken);
            }
            None => reply.error(format!("There's no {item} here.")),
        }
    }

    fn do_inventory(&self, reply: &mut Reply) {
        if self.state.inventory.is_empty() {
            reply.plain("Your inventory is empty.");
            return;
        }

        reply.plain("You are carrying:");
        for item in &self.state.inventory {
            reply.info(format!("  - {item}"));
        }
    }

    fn do_use(&mut self, reply: &mut Reply, item: &str) {
        if self.state.game_over() {
            reply.info(story::GAME_OVER);
            return;
        }

        // The light switch is a fixture, not an inventory item.
        if story::mentions(story::LIGHT_WORDS, item) {
            self.use_light_switch(reply);
            return;
        }

        if !self.state.has_item(item) {
            reply.error(format!("You don't have a {item}."));
            return;
        }

        if item == story::KEY {
            self.use_key(reply);
        } else if story::mentions_clothing(item) {
            self.use_clothes(reply);
        } else {
            reply.error(format!("You're not sure how to use the {item} here."));
        }
    }

    fn use_light_switch(&mut self, reply: &mut Reply) {
        if !self.in_start_room() {
            reply.error("There's no light switch here.");
            return;
        }

        if self.state.flags.lights_on {
            reply.info("The lights are already on. You could turn them off, but why would you?");
            return;
        }

        reply.success("*Click*");
        reply.blank();
        reply.success("The lights flicker on, revealing your glorious nerd kingdom!");
        self.state.flags.lights_on = true;
        reply.blank();
        self.render_room(reply);
    }

    fn use_key(&mut self, reply: &mut Reply) {
        if !self.in_start_room() {
            reply.error("There's nothing to unlock here.");
            return;
        }

        if self.state.flags.unlocked {
            reply.info("The door is already unlocked.");
        } else {
            reply.success("You unlock the bedroom door with the key!");
            reply.success("*Click* The lock turns smoothly.");
            self.state.flags.unlocked = true;
        }
    }

    fn use_clothes(&mut self, reply: &mut Reply) {
        if self.state.flags.dressed {
            reply.info("You're already dressed. Looking good!");
            return;
        }

        reply.success("You put on your clothes. Your Metallica t-shirt fits perfectly.");
        self.state.flags.dressed = true;
        // Worn clothes leave the inventory for good.
        let _ = self.state.remove_item(story::CLOTHES);
    }

    fn do_help(&self, reply: &mut Reply) {
        for line in story::HELP_HEADER {
            reply.info(*line);
        }
        for line in story::HELP_BODY {
            reply.plain(*line);
        }
    }

    fn do_clear(&mut self, reply: &mut Reply) {
        reply.clear = true;
        self.render_room(reply);
    }

    fn render_room(&self, reply: &mut Reply) {
        let Some(room) = self.world.room(self.state.current_room.as_str()) else {
            reply.error(format!(
                "There is no room \"{}\" in this world.",
                self.state.current_room
            ));
            return;
        };

        reply.success(story::BANNER);
        reply.success(format!("📍 {}", room.name));
        reply.success(story::BANNER);

        if self.state.game_over() {
            reply.plain(&room.description);
            reply.blank();
            if self.state.flags.won {
                reply.info("Type HELP!");
            }
            return;
        }

        let dark = self.in_start_room() && !self.state.flags.lights_on;
        let dark_text = if dark { room.dark_description.as_deref() } else { None };
        if let Some(text) = dark_text {
            reply.plain(text);
        } else {
            reply.plain(&room.description);
            if !room.items.is_empty() {
                reply.blank();
                let names: Vec<&str> = room.items.iter().map(ItemId::as_str).collect();
                reply.info(format!("You can see: {}", names.join(", ")));
            }
        }

        reply.blank();
        let exits: Vec<String> = room
            .exits
            .keys()
            .map(|direction| direction.name().to_uppercase())
            .collect();
        reply.plain(format!("Exits: {}", exits.join(", ")));
        reply.blank();
    }
}
