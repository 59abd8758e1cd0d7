//! End-to-end walkthroughs of the shipped story.

use ks_engine::story;
use ks_engine::{Reply, Session, Transcript};

fn session() -> Session {
    Session::new(story::world()).unwrap()
}

fn run(session: &mut Session, script: &[&str]) -> Transcript {
    let mut transcript = Transcript::new();
    transcript.apply(&session.welcome());
    for line in script {
        transcript.apply(&session.process(line));
    }
    transcript
}

#[test]
fn the_winning_walkthrough() {
    let mut session = session();
    let transcript = run(
        &mut session,
        &[
            "use light",
            "take clothes",
            "use clothes",
            "go south",
            "take commodore",
            "take key",
            "unlock door",
            "go north",
        ],
    );

    assert!(session.state().flags.won);
    assert!(!session.state().flags.lost);
    assert_eq!(session.state().current_room.as_str(), story::HALLWAY);

    let output = transcript.text();
    assert!(output.contains("CONGRATULATIONS! YOU WON THE GAME!"));
    assert!(output.contains("HAPPY BIRTHDAY!"));
    assert!(output.contains("Type HELP!"));
}

#[test]
fn the_losing_walkthrough() {
    let mut session = session();
    let transcript = run(
        &mut session,
        &[
            "use light",
            "take commodore",
            "take key",
            "open door",
            "go north",
        ],
    );

    assert!(session.state().flags.lost);
    assert_eq!(session.state().current_room.as_str(), story::HALLWAY_FAIL);
    assert!(transcript.text().contains("You dissolve in shame. GAME OVER."));
}

#[test]
fn movement_is_disabled_after_the_end() {
    let mut session = session();
    run(
        &mut session,
        &["use light", "take commodore", "take key", "use key", "go north"],
    );
    assert!(session.state().flags.lost);

    let reply = session.process("go south");
    assert_eq!(session.state().current_room.as_str(), story::HALLWAY_FAIL);
    assert!(
        reply
            .lines
            .iter()
            .any(|l| l.text.contains("The game is over."))
    );
}

#[test]
fn the_chair_is_only_sprung_once() {
    let mut session = session();

    session.process("go south");
    assert!(session.state().flags.stumbled);
    let first_room = session.state().current_room.clone();

    let second = session.process("go south");
    assert_eq!(session.state().current_room, first_room);
    assert!(
        second
            .lines
            .iter()
            .any(|l| l.text.contains("carefully navigate around the chair"))
    );
}

#[test]
fn the_computer_reveal_happens_once() {
    let mut session = session();
    session.process("use light");
    session.process("take clothes");
    session.process("take commodore");

    assert!(session.state().flags.moved_computer);
    let bedroom = session.world().room(story::START).unwrap();
    assert_eq!(bedroom.items.len(), 1);
    assert!(bedroom.has_item(story::KEY));

    let again = session.process("take c64");
    assert!(again.lines.iter().any(|l| l.text.contains("There's no c64 here.")));
    assert!(!session.state().has_item("c64"));
}

#[test]
fn take_then_wear_is_idempotent() {
    let mut session = session();
    session.process("use light");
    session.process("take clothes");
    session.process("use clothes");
    assert!(session.state().flags.dressed);

    session.process("wear clothes");
    assert!(session.state().flags.dressed);
    assert!(!session.state().has_item(story::CLOTHES));
}

#[test]
fn inventory_never_holds_duplicates() {
    let mut session = session();
    session.process("use light");
    session.process("take clothes");
    session.process("take clothes");
    session.process("take commodore");
    session.process("take key");
    session.process("take key");

    let inventory = &session.state().inventory;
    for (i, item) in inventory.iter().enumerate() {
        assert!(!inventory[i + 1..].contains(item), "duplicate {item}");
    }
}

#[test]
fn command_aliases_are_equivalent() {
    let mut lower = session();
    let mut upper = session();
    let mut short = session();

    let scripts: [&[&str]; 3] = [
        &["look", "go north", "take clothes"],
        &["LOOK", "GO NORTH", "TAKE CLOTHES"],
        &["l", "north", "get clothes"],
    ];

    let replies: Vec<Vec<Reply>> = scripts
        .iter()
        .zip([&mut lower, &mut upper, &mut short])
        .map(|(script, session)| script.iter().map(|line| session.process(line)).collect())
        .collect();

    assert_eq!(replies[0], replies[1]);
    assert_eq!(replies[0], replies[2]);
}

#[test]
fn clear_resets_the_transcript_only() {
    let mut session = session();
    let mut transcript = Transcript::new();
    transcript.apply(&session.welcome());
    transcript.apply(&session.process("use light"));
    transcript.apply(&session.process("take clothes"));

    let reply = session.process("cls");
    assert!(reply.clear);
    transcript.apply(&reply);

    // Only the fresh room render is left on screen.
    assert!(transcript.text().starts_with(story::BANNER));
    assert!(!transcript.text().contains("You wake up groggily."));
    // Game state survives untouched.
    assert!(session.state().flags.lights_on);
    assert!(session.state().has_item(story::CLOTHES));
}
