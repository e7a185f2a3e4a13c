use colored::Colorize;
use std::fmt;

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Prompt,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_mode,
            screen_reader_mode: config.screen_reader_mode,
            high_contrast_mode: config.high_contrast_mode,
        }
    }
}

impl OutputPreferences {
    pub fn plain() -> Self {
        Self {
            plain_mode: true,
            ..Self::default()
        }
    }
}

fn label(kind: MessageKind) -> Option<&'static str> {
    match kind {
        MessageKind::Warning => Some("WARNING:"),
        MessageKind::Error => Some("ERROR:"),
        MessageKind::Info | MessageKind::Success | MessageKind::Prompt => None,
    }
}

/// Renders `message` for `kind`. Screen reader mode prefixes warnings and
/// errors with a spoken label instead of relying on color.
pub fn styled(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    if prefs.screen_reader_mode {
        return match label(kind) {
            Some(label) => format!("{label} {text}"),
            None => text,
        };
    }

    if prefs.plain_mode {
        return text;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Success | MessageKind::Warning | MessageKind::Error => {
                text.bold().to_string()
            }
            _ => text,
        };
    }

    match kind {
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Warning => text.bright_yellow().to_string(),
        MessageKind::Error => text.bright_red().to_string(),
        MessageKind::Prompt => text.bright_cyan().to_string(),
        MessageKind::Info => text,
    }
}
