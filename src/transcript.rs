//! Append-only chat transcript shared by the GUI and the CLI.

/// One rendered line of the chat log.
#[derive(Debug, Clone)]
pub struct ChatLine {
    pub username: String,
    pub message: String,
    /// Locally generated announcement (join notice), not a peer message.
    pub system: bool,
    /// Seconds since app start when the line was appended.
    pub at: f64,
}

/// The message log. Grows for the lifetime of the session; the original
/// keeps no history either, so there is no cap.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<ChatLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, username: String, message: String, at: f64) {
        self.lines.push(ChatLine {
            username,
            message,
            system: false,
            at,
        });
    }

    pub fn push_system(&mut self, message: String, at: f64) {
        self.lines.push(ChatLine {
            username: "System".into(),
            message,
            system: true,
            at,
        });
    }

    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Scroll pinning decision: the log counts as "at the bottom" only when the
/// visible window ends exactly at the content end. A log that was at the
/// bottom before an append is re-pinned to the new bottom; any other scroll
/// position is left alone.
pub fn at_bottom(offset: f32, viewport: f32, content: f32) -> bool {
    // Short content never scrolls, so it is always at the bottom.
    if content <= viewport {
        return true;
    }
    offset + viewport == content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_in_order() {
        let mut t = Transcript::new();
        t.push("alice".into(), "one".into(), 0.5);
        t.push("bob".into(), "two".into(), 1.5);
        assert_eq!(t.len(), 2);
        assert_eq!(t.lines()[0].message, "one");
        assert_eq!(t.lines()[1].username, "bob");
        assert!(!t.lines()[0].system);
    }

    #[test]
    fn system_lines_are_flagged() {
        let mut t = Transcript::new();
        t.push_system("alice has joined the chat.".into(), 0.0);
        assert!(t.lines()[0].system);
        assert_eq!(t.lines()[0].username, "System");
    }

    #[test]
    fn at_bottom_requires_exact_edge() {
        // 100px scrolled, 50px window, 150px content: exactly at the end.
        assert!(at_bottom(100.0, 50.0, 150.0));
        // 10px away from the end: user has scrolled up, keep their position.
        assert!(!at_bottom(90.0, 50.0, 150.0));
        // 1px away still counts as scrolled away.
        assert!(!at_bottom(99.0, 50.0, 150.0));
    }

    #[test]
    fn short_content_is_always_at_bottom() {
        assert!(at_bottom(0.0, 200.0, 120.0));
    }
}
