//! Styled status lines on stderr.

use std::fmt::Display;

use console::{Style, Term};

/// How a status line is colored.
#[derive(Clone, Copy)]
enum Tone {
    Plain,
    Good,
    Warn,
    Bad,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Good => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Bad => Style::new().red().bold(),
        }
    }
}

/// Status reporter shared by all commands.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn line(&self, tone: Tone, msg: impl Display) {
        let _ = self.term.write_line(&tone.style().apply_to(msg).to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(Tone::Good, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(Tone::Warn, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(Tone::Bad, msg);
    }

    /// `label: value`, label dimmed.
    pub(crate) fn field(&self, label: &str, value: impl Display) {
        let label = Style::new().dim().apply_to(format!("{label}:"));
        self.line(Tone::Plain, format!("{label} {value}"));
    }
}
