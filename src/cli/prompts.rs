use std::io::Write;

use crate::cli::console::{Console, KeyInput};
use crate::cli::output::{styled, MessageKind, OutputPreferences};
use crate::errors::ShopResult;

/// Asks a yes/no question and reads single keystrokes until one answers it.
///
/// `y`/`Y` answer yes and `n`/`N` answer no. Escape answers no when
/// `allow_escape` is set and is ignored otherwise, like every other key.
/// Ctrl-C and a closed input stream always answer no.
pub fn prompt_yes_no<C, W>(
    console: &mut C,
    out: &mut W,
    prefs: &OutputPreferences,
    allow_escape: bool,
    message: &str,
) -> ShopResult<bool>
where
    C: Console + ?Sized,
    W: Write + ?Sized,
{
    writeln!(
        out,
        "{}",
        styled(MessageKind::Prompt, format!("{message} [Y/N]"), prefs)
    )?;
    out.flush()?;

    loop {
        let Some(key) = console.read_key()? else {
            tracing::debug!("input closed during yes/no prompt");
            return Ok(false);
        };
        match key {
            KeyInput::Char('y') | KeyInput::Char('Y') => return Ok(true),
            KeyInput::Char('n') | KeyInput::Char('N') => return Ok(false),
            KeyInput::Esc if allow_escape => return Ok(false),
            KeyInput::Interrupt => {
                tracing::debug!("yes/no prompt interrupted");
                return Ok(false);
            }
            _ => continue,
        }
    }
}

/// Blocks until any key arrives or input ends.
pub fn wait_for_key<C, W>(console: &mut C, out: &mut W) -> ShopResult<()>
where
    C: Console + ?Sized,
    W: Write + ?Sized,
{
    out.flush()?;
    console.read_key()?;
    Ok(())
}
