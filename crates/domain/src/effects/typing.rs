//! Typing effect for the hero title

/// Reveals a text one character per tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingEffect {
    chars: Vec<char>,
    shown: usize,
}

impl TypingEffect {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal the next character. Returns `false` once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.shown < self.chars.len() {
            self.shown += 1;
            true
        } else {
            false
        }
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.chars.len()
    }

    /// Skip to the full text
    pub fn finish(&mut self) {
        self.shown = self.chars.len();
    }
}
