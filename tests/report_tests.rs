mod common;

use regex::Regex;
use shopping_list::currency::{CurrencyCode, CurrencyFormat, LocaleConfig, Money};
use shopping_list::report::{render_listing, visible_width, Receipt, ReportStyle};

use common::plain_style;

fn rows(items: &[(&str, u64)]) -> Vec<(String, Money)> {
    items
        .iter()
        .map(|(name, cents)| (name.to_string(), Money::from_cents(*cents)))
        .collect()
}

#[test]
fn receipt_listing_matches_expected_layout() {
    let rendered = render_listing(&rows(&[("Apple", 100), ("Banana", 150)]), true, &plain_style());
    let expected = "\n\
Item       Price\n\
----------------\n\
\n\
Apple      $1.00\n\
Banana     $1.50\n\
\n\
----------------\n\
Sum:       $2.50\n\
\n";
    assert_eq!(rendered, expected);
}

#[test]
fn catalog_listing_numbers_rows_in_given_order() {
    let rendered = render_listing(
        &rows(&[("Candy", 300), ("Apple", 100), ("Banana", 150)]),
        false,
        &plain_style(),
    );
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "#      Item       Price");
    assert_eq!(lines[2], "-".repeat(23));
    assert_eq!(lines[4], "1      Candy      $3.00");
    assert_eq!(lines[5], "2      Apple      $1.00");
    assert_eq!(lines[6], "3      Banana     $1.50");
    assert!(!rendered.contains("Sum:"));
}

#[test]
fn empty_listing_still_has_header_and_zero_sum() {
    let rendered = render_listing(&[], true, &plain_style());
    assert_eq!(
        rendered,
        "\nItem     Price\n--------------\n\n\n--------------\nSum:     $0.00\n\n"
    );

    let without_sum = render_listing(&[], false, &plain_style());
    assert_eq!(without_sum.lines().filter(|line| !line.is_empty()).count(), 2);
}

#[test]
fn long_names_widen_the_column_and_dividers_track_the_header() {
    let style = ReportStyle::default();
    let rendered = render_listing(
        &rows(&[("Extra Large Pizza", 1899), ("Soda", 200)]),
        true,
        &style,
    );
    let lines: Vec<&str> = rendered.lines().collect();
    let header_width = visible_width(lines[1]);
    assert_eq!(header_width, "Extra Large Pizza".len() + 4 + 6);
    assert_eq!(lines[2], "─".repeat(header_width));
    assert_eq!(lines[7], "─".repeat(header_width));
    assert_eq!(visible_width(lines[8]), header_width);

    let sum_line = Regex::new(r"^Sum: +\$20\.99$").expect("valid regex");
    assert!(sum_line.is_match(lines[8]), "unexpected sum line `{}`", lines[8]);
}

#[test]
fn receipt_total_is_exact() {
    let purchases = rows(&[("Chips", 635), ("Cereal", 399), ("Milk", 449), ("Cheese", 666)]);
    let expected: u64 = 635 + 399 + 449 + 666;
    let receipt = Receipt::from_purchases(purchases);
    assert_eq!(receipt.total(), Money::from_cents(expected));
    assert!(receipt.render(&plain_style()).contains("$21.49"));
}

#[test]
fn receipt_uses_configured_currency() {
    let style = ReportStyle {
        currency: CurrencyFormat::new(CurrencyCode::new("eur"), LocaleConfig::for_tag("de-DE")),
        plain_mode: true,
    };
    let receipt = Receipt::from_purchases(rows(&[("Hotdogs", 1299), ("Pizza", 465)]));
    let rendered = receipt.render(&style);
    assert!(rendered.contains("€4,65"));
    assert!(rendered.contains("€12,99"));
    assert!(rendered.contains("€17,64"));
}
