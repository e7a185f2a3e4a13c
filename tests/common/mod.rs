use std::io::Cursor;

use shopping_list::{
    catalog::{Catalog, CatalogEntry},
    cli::console::ScriptConsole,
    cli::output::OutputPreferences,
    currency::{CurrencyFormat, Money},
    report::ReportStyle,
};

/// Three-item catalog used by the worked receipt examples.
pub fn small_catalog() -> Catalog {
    Catalog::new([
        CatalogEntry::new("Apple", Money::from_cents(100)),
        CatalogEntry::new("Banana", Money::from_cents(150)),
        CatalogEntry::new("Candy", Money::from_cents(300)),
    ])
}

pub fn plain_style() -> ReportStyle {
    ReportStyle {
        currency: CurrencyFormat::default(),
        plain_mode: true,
    }
}

pub fn plain_prefs() -> OutputPreferences {
    OutputPreferences::plain()
}

pub fn script(input: &str) -> ScriptConsole<Cursor<String>> {
    ScriptConsole::new(Cursor::new(input.to_string()))
}
