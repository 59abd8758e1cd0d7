//! Styled narration lines emitted by the interpreter.
//!
//! The output boundary is an ordered, append-only sequence of lines.
//! Each line carries a semantic style tag used purely for presentation;
//! game logic never reads it back.

/// Semantic style tag carried by every output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Ordinary narration.
    Plain,
    /// Something went the player's way.
    Success,
    /// A player-input-driven error.
    Error,
    /// Supporting information or hints.
    Info,
    /// An echo of the player's own input.
    Echo,
}

/// One line of output with its style tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The text content.
    pub text: String,
    /// The semantic style.
    pub style: Style,
}

impl Line {
    /// Create a line with an explicit style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// The interpreter's answer to one committed input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Lines to append to the output, in order.
    pub lines: Vec<Line>,
    /// Wipe the rendered output before appending. Set only by the
    /// clear command; game state is untouched by it.
    pub clear: bool,
}

impl Reply {
    /// An empty reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line with an explicit style.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Append an ordinary narration line.
    pub fn plain(&mut self, text: impl Into<String>) {
        self.push(Line::new(text, Style::Plain));
    }

    /// Append a success line.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Line::new(text, Style::Success));
    }

    /// Append an error line.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Line::new(text, Style::Error));
    }

    /// Append an informational line.
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Line::new(text, Style::Info));
    }

    /// Append an empty spacer line.
    pub fn blank(&mut self) {
        self.plain("");
    }
}

/// Append-only accumulator of rendered lines.
///
/// Frontends that keep output history apply each [`Reply`] to one of
/// these; the only wholesale mutation is [`Transcript::clear`].
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a reply: honor its clear request, then append its lines.
    pub fn apply(&mut self, reply: &Reply) {
        if reply.clear {
            self.clear();
        }
        self.lines.extend(reply.lines.iter().cloned());
    }

    /// All rendered lines, in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Wipe the rendered history.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The rendered text, newline-joined.
    pub fn text(&self) -> String {
        let texts: Vec<&str> = self.lines.iter().map(|line| line.text.as_str()).collect();
        texts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_collects_styled_lines() {
        let mut reply = Reply::new();
        reply.success("well done");
        reply.blank();
        reply.error("oops");

        assert_eq!(reply.lines.len(), 3);
        assert_eq!(reply.lines[0].style, Style::Success);
        assert_eq!(reply.lines[1].text, "");
        assert_eq!(reply.lines[2], Line::new("oops", Style::Error));
        assert!(!reply.clear);
    }

    #[test]
    fn transcript_appends_in_order() {
        let mut transcript = Transcript::new();
        let mut first = Reply::new();
        first.plain("one");
        let mut second = Reply::new();
        second.plain("two");

        transcript.apply(&first);
        transcript.apply(&second);

        assert_eq!(transcript.text(), "one\ntwo");
    }

    #[test]
    fn clearing_reply_wipes_history_first() {
        let mut transcript = Transcript::new();
        let mut first = Reply::new();
        first.plain("old");
        transcript.apply(&first);

        let mut reset = Reply::new();
        reset.clear = true;
        reset.plain("fresh");
        transcript.apply(&reset);

        assert_eq!(transcript.text(), "fresh");
        assert_eq!(transcript.lines().len(), 1);
    }
}
