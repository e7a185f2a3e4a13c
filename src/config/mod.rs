use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::currency::{CurrencyCode, CurrencyFormat, FormatOptions, LocaleConfig};
use crate::errors::{ShopError, ShopResult};
use crate::report::ReportStyle;

pub const CONFIG_FILE_VAR: &str = "SHOPPING_LIST_CONFIG";
pub const CURRENCY_VAR: &str = "SHOPPING_LIST_CURRENCY";
pub const LOCALE_VAR: &str = "SHOPPING_LIST_LOCALE";
pub const PLAIN_VAR: &str = "SHOPPING_LIST_PLAIN";
pub const SCREEN_READER_VAR: &str = "SHOPPING_LIST_SCREEN_READER";
pub const HIGH_CONTRAST_VAR: &str = "SHOPPING_LIST_HIGH_CONTRAST";
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Display settings for a session. The catalog itself is not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub locale: String,
    pub plain_mode: bool,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            locale: "en-US".into(),
            plain_mode: false,
            screen_reader_mode: false,
            high_contrast_mode: false,
        }
    }
}

impl Config {
    /// Defaults, then the JSON file named by `SHOPPING_LIST_CONFIG`, then
    /// individual environment overrides.
    pub fn load() -> ShopResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ShopResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_FILE_VAR) {
            Some(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim()))?,
            _ => Self::default(),
        };
        config.apply_overrides(lookup)?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ShopResult<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> ShopResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(currency) = lookup(CURRENCY_VAR) {
            let currency = currency.trim();
            if currency.len() != 3 || !currency.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(ShopError::Config(format!(
                    "{CURRENCY_VAR} must be a three-letter code, got `{currency}`"
                )));
            }
            self.currency = currency.to_ascii_uppercase();
        }
        if let Some(locale) = lookup(LOCALE_VAR) {
            self.locale = locale.trim().to_string();
        }
        if let Some(raw) = lookup(PLAIN_VAR) {
            self.plain_mode = parse_flag(PLAIN_VAR, &raw)?;
        }
        if let Some(raw) = lookup(SCREEN_READER_VAR) {
            self.screen_reader_mode = parse_flag(SCREEN_READER_VAR, &raw)?;
        }
        if let Some(raw) = lookup(HIGH_CONTRAST_VAR) {
            self.high_contrast_mode = parse_flag(HIGH_CONTRAST_VAR, &raw)?;
        }
        if lookup(NO_COLOR_VAR).is_some_and(|value| !value.is_empty()) {
            self.plain_mode = true;
        }
        Ok(())
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat {
            code: CurrencyCode::new(&self.currency),
            locale: LocaleConfig::for_tag(&self.locale),
            options: FormatOptions {
                screen_reader_mode: self.screen_reader_mode,
            },
        }
    }

    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            currency: self.currency_format(),
            plain_mode: self.plain_mode || self.screen_reader_mode,
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> ShopResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ShopError::Config(format!(
            "{key} expects a boolean, got `{other}`"
        ))),
    }
}
