//! Resolves typed input to catalog entries.

use std::io::Write;

use strsim::levenshtein;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogEntry};
use crate::cli::console::Console;
use crate::cli::output::{styled, MessageKind, OutputPreferences};
use crate::errors::ShopResult;

const LINE_PROMPT: &str = "> ";
const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No item entered.")]
    Empty,
    #[error("That item is not in stock. Try something else.")]
    NotInStock { input: String },
}

/// Outcome of one pass through the item prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'c> {
    Item(&'c CatalogEntry),
    Cancelled,
}

/// Resolves a single token. Positive integers are tried as 1-based indices
/// first; anything that is not a valid index is tried as a name.
pub fn resolve_token<'c>(
    catalog: &'c Catalog,
    text: &str,
) -> Result<&'c CatalogEntry, SelectionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SelectionError::Empty);
    }

    if let Ok(index) = trimmed.parse::<usize>() {
        if let Some(entry) = catalog.lookup_by_index(index) {
            return Ok(entry);
        }
    }

    catalog
        .lookup_by_name(trimmed)
        .ok_or_else(|| SelectionError::NotInStock {
            input: trimmed.to_string(),
        })
}

/// Closest catalog name to `input`, if any is near enough to be a typo.
pub fn suggest<'c>(catalog: &'c Catalog, input: &str) -> Option<&'c str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() || needle.chars().all(|ch| ch.is_ascii_digit() || ch == '-') {
        return None;
    }
    let mut candidates: Vec<(usize, &str)> = catalog
        .names()
        .map(|name| (levenshtein(&name.to_lowercase(), &needle), name))
        .collect();
    candidates.sort_by_key(|(distance, _)| *distance);

    candidates
        .first()
        .filter(|(distance, _)| {
            *distance <= MAX_SUGGESTION_DISTANCE && *distance < needle.chars().count()
        })
        .map(|(_, name)| *name)
}

/// Prompts until the user names an item or cancels with an empty line or
/// end of input. Invalid entries are reported to `out` and retried.
pub fn read_selection<'c, C, W>(
    catalog: &'c Catalog,
    console: &mut C,
    out: &mut W,
    prefs: &OutputPreferences,
) -> ShopResult<Selection<'c>>
where
    C: Console + ?Sized,
    W: Write + ?Sized,
{
    loop {
        out.flush()?;
        let Some(line) = console.read_line(LINE_PROMPT)? else {
            tracing::debug!("item prompt closed");
            return Ok(Selection::Cancelled);
        };

        match resolve_token(catalog, &line) {
            Ok(entry) => {
                tracing::debug!(input = %line.trim(), item = %entry.name, "selection resolved");
                return Ok(Selection::Item(entry));
            }
            Err(SelectionError::Empty) => {
                tracing::debug!("empty selection, leaving item prompt");
                return Ok(Selection::Cancelled);
            }
            Err(err) => {
                tracing::warn!(input = %line.trim(), "selection rejected");
                writeln!(out, "{}", styled(MessageKind::Error, &err, prefs))?;
                if let Some(name) = suggest(catalog, &line) {
                    let hint = format!("Did you mean `{name}`?");
                    writeln!(out, "{}", styled(MessageKind::Info, hint, prefs))?;
                }
            }
        }
    }
}
