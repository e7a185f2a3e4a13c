//! Input sources for a session: a real terminal or a scripted reader.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal,
};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::ShopResult;

const ESCAPE_TOKEN: &str = "<esc>";
const INTERRUPT_TOKEN: &str = "<ctrl-c>";

/// A single keystroke as seen by the yes/no prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Esc,
    /// Ctrl-C.
    Interrupt,
    Other,
}

/// Where a session reads its input from.
pub trait Console {
    /// Reads one line. `None` means the input stream ended or the user
    /// interrupted the prompt.
    fn read_line(&mut self, prompt: &str) -> ShopResult<Option<String>>;

    /// Reads one keystroke without echoing it. Ctrl-C arrives as
    /// [`KeyInput::Interrupt`], never as a plain character. `None` means no
    /// further keys will arrive.
    fn read_key(&mut self) -> ShopResult<Option<KeyInput>>;
}

/// Interactive console: line editing through rustyline, keystrokes in raw
/// mode through crossterm.
pub struct TerminalConsole {
    editor: DefaultEditor,
}

impl TerminalConsole {
    pub fn new() -> ShopResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> ShopResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn read_key(&mut self) -> ShopResult<Option<KeyInput>> {
        io::stdout().flush()?;
        let _guard = RawModeGuard::activate()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                    {
                        return Ok(Some(KeyInput::Interrupt));
                    }
                    let input = match key.code {
                        KeyCode::Esc => KeyInput::Esc,
                        KeyCode::Char(ch) => KeyInput::Char(ch),
                        _ => KeyInput::Other,
                    };
                    return Ok(Some(input));
                }
                _ => continue,
            }
        }
    }
}

struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Reads plain lines from any buffered reader.
///
/// Key prompts consume the characters of the next line one at a time. A line
/// holding only `<esc>` stands for the Escape key, `<ctrl-c>` for Ctrl-C and
/// a blank line for Enter.
pub struct ScriptConsole<R> {
    reader: R,
    pending_keys: VecDeque<KeyInput>,
}

impl<R: BufRead> ScriptConsole<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending_keys: VecDeque::new(),
        }
    }

    fn next_raw_line(&mut self) -> ShopResult<Option<String>> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let line = buffer.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(line))
    }
}

impl<R: BufRead> Console for ScriptConsole<R> {
    fn read_line(&mut self, _prompt: &str) -> ShopResult<Option<String>> {
        self.pending_keys.clear();
        self.next_raw_line()
    }

    fn read_key(&mut self) -> ShopResult<Option<KeyInput>> {
        if self.pending_keys.is_empty() {
            let Some(line) = self.next_raw_line()? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case(ESCAPE_TOKEN) {
                self.pending_keys.push_back(KeyInput::Esc);
            } else if trimmed.eq_ignore_ascii_case(INTERRUPT_TOKEN) {
                self.pending_keys.push_back(KeyInput::Interrupt);
            } else if trimmed.is_empty() {
                self.pending_keys.push_back(KeyInput::Other);
            } else {
                self.pending_keys
                    .extend(trimmed.chars().map(KeyInput::Char));
            }
        }
        Ok(self.pending_keys.pop_front())
    }
}
