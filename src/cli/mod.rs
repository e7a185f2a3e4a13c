pub mod console;
pub mod output;
pub mod prompts;
pub mod selection;

use std::io::{self, BufWriter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::ShopResult;
use crate::session::Session;

use self::console::{Console, ScriptConsole, TerminalConsole};

pub const SCRIPT_MODE_VAR: &str = "SHOPPING_LIST_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_MODE_VAR).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// Entry point used by the binary: loads configuration, picks the console
/// for the current mode and runs one session against the built-in stock.
pub fn run_cli() -> ShopResult<()> {
    let mode = CliMode::from_env();
    let config = Config::load()?;
    tracing::info!(?mode, currency = %config.currency, locale = %config.locale, "starting");

    let session = Session::new(Catalog::stock(), &config);

    match mode {
        CliMode::Interactive => {
            let mut console = TerminalConsole::new()?;
            run_with(&session, &mut console, &mut io::stdout())
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut console = ScriptConsole::new(stdin.lock());
            let mut out = BufWriter::new(io::stdout().lock());
            run_with(&session, &mut console, &mut out)
        }
    }
}

fn run_with<C, W>(session: &Session<'_>, console: &mut C, out: &mut W) -> ShopResult<()>
where
    C: Console + ?Sized,
    W: io::Write + ?Sized,
{
    session.run(console, out)?;
    out.flush()?;
    Ok(())
}
