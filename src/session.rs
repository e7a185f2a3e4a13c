//! The shopping flow: pick items, check out, say goodbye.

use std::io::Write;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::cli::console::Console;
use crate::cli::output::{styled, MessageKind, OutputPreferences};
use crate::cli::prompts::{prompt_yes_no, wait_for_key};
use crate::cli::selection::{read_selection, Selection};
use crate::config::Config;
use crate::errors::ShopResult;
use crate::report::{render_listing, Receipt, ReportStyle};

const ADD_ANOTHER_PROMPT: &str = "Would you like to add another item?";

pub struct Session<'a> {
    catalog: &'a Catalog,
    style: ReportStyle,
    prefs: OutputPreferences,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, config: &Config) -> Self {
        Self {
            catalog,
            style: config.report_style(),
            prefs: OutputPreferences::from(config),
        }
    }

    pub fn with_style(catalog: &'a Catalog, style: ReportStyle, prefs: OutputPreferences) -> Self {
        Self {
            catalog,
            style,
            prefs,
        }
    }

    /// Runs a full session and returns the receipt that was printed.
    pub fn run<C, W>(&self, console: &mut C, out: &mut W) -> ShopResult<Receipt>
    where
        C: Console + ?Sized,
        W: Write + ?Sized,
    {
        tracing::info!(catalog_items = self.catalog.len(), "session started");
        let cart = self.select_items(console, out)?;
        writeln!(out)?;
        let receipt = self.checkout(&cart, out)?;
        self.farewell(console, out)?;
        Ok(receipt)
    }

    /// Lists the catalog and collects picks until the user cancels the item
    /// prompt or declines to add another item.
    pub fn select_items<C, W>(&self, console: &mut C, out: &mut W) -> ShopResult<Cart>
    where
        C: Console + ?Sized,
        W: Write + ?Sized,
    {
        let mut cart = Cart::new();
        let listing = self.catalog.rows();

        loop {
            write!(out, "{}", render_listing(&listing, false, &self.style))?;
            writeln!(out, "\nPlease select an item to purchase")?;
            writeln!(out, "Enter either the name or index of the item")?;

            match read_selection(self.catalog, console, out, &self.prefs)? {
                Selection::Cancelled => break,
                Selection::Item(entry) => cart.add(entry),
            }

            if !prompt_yes_no(console, out, &self.prefs, true, ADD_ANOTHER_PROMPT)? {
                break;
            }
        }

        Ok(cart)
    }

    /// Prints the sorted receipt followed by the price extremes.
    pub fn checkout<W>(&self, cart: &Cart, out: &mut W) -> ShopResult<Receipt>
    where
        W: Write + ?Sized,
    {
        let receipt = Receipt::from_cart(cart, self.catalog);
        tracing::info!(
            items = receipt.rows().len(),
            total_cents = receipt.total().cents(),
            "checkout"
        );
        write!(out, "{}", receipt.render(&self.style))?;

        match (receipt.most_expensive(), receipt.least_expensive()) {
            (Some(highest), Some(lowest)) => {
                writeln!(
                    out,
                    "Most expensive item: {} @ {}",
                    highest.name,
                    self.style.currency.format(highest.price)
                )?;
                writeln!(
                    out,
                    "Least expensive item: {} @ {}",
                    lowest.name,
                    self.style.currency.format(lowest.price)
                )?;
            }
            _ => writeln!(out, "No items purchased.")?,
        }

        Ok(receipt)
    }

    fn farewell<C, W>(&self, console: &mut C, out: &mut W) -> ShopResult<()>
    where
        C: Console + ?Sized,
        W: Write + ?Sized,
    {
        writeln!(
            out,
            "{}",
            styled(MessageKind::Success, "Thank you for your purchase!", &self.prefs)
        )?;
        writeln!(out, "Press any key to exit")?;
        wait_for_key(console, out)
    }
}
