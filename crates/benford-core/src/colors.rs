//! Colors used by the terminal report.
//!
//! Each [`Style`] names what a piece of text means in a report, not how it
//! looks. `colored` decides whether escapes are emitted (`NO_COLOR`,
//! `CLICOLOR_FORCE`, TTY detection); `colored::control::set_override(false)`
//! forces plain text.

use colored::{ColoredString, Colorize};

/// What a piece of report text stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Verdict headline for data consistent with Benford's Law.
    Conforms,
    /// Verdict headline for data that deviates.
    Deviates,
    /// Short verdict word in listings, consistent.
    ConformsWord,
    /// Short verdict word in listings, deviating.
    DeviatesWord,
    /// Bar of a digit seen at least as often as Benford predicts.
    AtOrAboveBenford,
    /// Bar of a digit seen less often than Benford predicts.
    BelowBenford,
    /// Table heading.
    Heading,
    /// Footnote.
    Note,
}

impl Style {
    /// Apply the style to `text`.
    pub fn paint(self, text: &str) -> String {
        let colored: ColoredString = match self {
            Style::Conforms => text.green().bold(),
            Style::Deviates => text.yellow().bold(),
            Style::ConformsWord | Style::AtOrAboveBenford => text.green(),
            Style::DeviatesWord => text.yellow(),
            Style::BelowBenford => text.red(),
            Style::Heading => text.bold(),
            Style::Note => text.dimmed(),
        };
        colored.to_string()
    }
}
