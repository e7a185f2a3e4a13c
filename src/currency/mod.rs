use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// An amount held as whole cents so that totals never drift. Prices are
/// never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Locale-aware number separators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Resolves separators from a BCP 47 style tag such as `de-DE`.
    /// Unknown languages fall back to the en-US convention.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "it" | "pt" | "nl" => (',', '.'),
            "fr" => (',', ' '),
            "en" | "ja" => ('.', ','),
            _ => return Self::default(),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatOptions {
    pub screen_reader_mode: bool,
}

/// Everything needed to turn a [`Money`] into display text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyFormat {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
    pub options: FormatOptions,
}

impl CurrencyFormat {
    pub fn new(code: CurrencyCode, locale: LocaleConfig) -> Self {
        Self {
            code,
            locale,
            options: FormatOptions::default(),
        }
    }

    pub fn format(&self, amount: Money) -> String {
        format_currency_value(amount, &self.code, &self.locale, &self.options)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

/// Renders whole cents with the locale's separators. Every amount keeps two
/// decimals, whatever the currency.
pub fn format_number(locale: &LocaleConfig, amount: Money) -> String {
    let cents = amount.cents();
    let mut rendered = group_digits(&(cents / 100).to_string(), locale.grouping_separator);
    rendered.push(locale.decimal_separator);
    rendered.push_str(&format!("{:02}", cents % 100));
    rendered
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: Money,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let body = format_number(locale, amount);
    if options.screen_reader_mode {
        format!("{body} {}", code.as_str())
    } else {
        format!("{}{body}", symbol_for(code.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_sum_is_exact() {
        let total: Money = [10, 20, 635, 1299]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total, Money::from_cents(1964));
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        assert_eq!(LocaleConfig::for_tag("xx-YY"), LocaleConfig::default());
        assert_eq!(LocaleConfig::for_tag("de_DE").decimal_separator, ',');
    }

    #[test]
    fn groups_thousands() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, Money::from_cents(123_456_750)), "1,234,567.50");
        assert_eq!(format_number(&locale, Money::from_cents(5)), "0.05");
        assert_eq!(format_number(&locale, Money::ZERO), "0.00");
    }
}
