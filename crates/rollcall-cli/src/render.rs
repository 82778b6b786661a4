use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

/// Width of the framed banner, in columns.
pub const FRAME_WIDTH: usize = 70;

/// Console writer with an explicit color switch; with color off the
/// output is plain text.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn blank(&self) {
        println!();
    }

    pub fn line(&self, text: &str, color: Color) {
        println!("{}", self.paint(text, color));
    }

    pub fn centered(&self, text: &str, color: Color) {
        let padding = FRAME_WIDTH.saturating_sub(text.chars().count()) / 2;
        let padded = format!("{}{}", " ".repeat(padding), text);
        println!("{}", self.paint(&padded, color));
    }

    pub fn divider(&self, ch: char, color: Color) {
        let rule: String = std::iter::repeat(ch).take(FRAME_WIDTH).collect();
        println!("{}", self.paint(&rule, color));
    }

    /// A two-tone row: dark cyan label, white value.
    pub fn field(&self, label: &str, value: &str) {
        println!(
            "{}{}",
            self.paint(label, Color::DarkCyan),
            self.paint(value, Color::White)
        );
    }

    /// Writes without a trailing newline and flushes, for input prompts.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", self.paint(text, Color::White))?;
        stdout.flush()
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
