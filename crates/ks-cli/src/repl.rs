//! The interactive read-print loop.
//!
//! One committed line per command: read, echo, process, render. The
//! engine owns all game logic; this module only maps semantic styles to
//! colors and services the screen-clear request.

use std::io;

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use ks_engine::{Line, Reply, Session, Style, story};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Run the game to completion: welcome banner, then one command per
/// committed input line until end of input.
pub fn run() -> Result<(), String> {
    let mut session = Session::new(story::world()).map_err(|e| e.to_string())?;
    let mut editor = DefaultEditor::new().map_err(|e| e.to_string())?;

    render(&session.welcome());

    loop {
        match editor.readline("> ") {
            Ok(input) => {
                if input.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&input);
                print_line(&Line::new(input.trim(), Style::Echo));
                render(&session.process(&input));
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}

/// Render a reply: honor the clear request, then print each line.
fn render(reply: &Reply) {
    if reply.clear {
        clear_screen();
    }
    for line in &reply.lines {
        print_line(line);
    }
}

/// Wipe the terminal for the clear command. Game state is unaffected;
/// only the rendered history goes away.
fn clear_screen() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// Print one styled line.
fn print_line(line: &Line) {
    match line.style {
        Style::Plain => println!("{}", line.text),
        Style::Success => println!("{}", line.text.green()),
        Style::Error => println!("{}", line.text.red()),
        Style::Info => println!("{}", line.text.cyan()),
        Style::Echo => println!("{}", format!("> {}", line.text).dimmed()),
    }
}
