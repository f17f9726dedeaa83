//! ANSI colouring helpers

const BOLD_GREEN: &str = "1;32";
const CYAN: &str = "36";
const DIM: &str = "2";

/// Wraps text in ANSI escape codes when colour is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    color: bool,
}

impl Painter {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_owned()
        }
    }

    #[must_use]
    pub fn command(self, text: &str) -> String {
        self.paint(text, BOLD_GREEN)
    }

    #[must_use]
    pub fn module(self, text: &str) -> String {
        self.paint(text, CYAN)
    }

    #[must_use]
    pub fn dim(self, text: &str) -> String {
        self.paint(text, DIM)
    }
}
