use shopping_list::currency::{
    format_currency_value, CurrencyCode, CurrencyFormat, FormatOptions, LocaleConfig, Money,
};
use shopping_list::report::{Receipt, ReportStyle};

#[test]
fn formats_currency_with_locale() {
    let locale = LocaleConfig::for_tag("fr-FR");
    let formatted = format_currency_value(
        Money::from_cents(123_456),
        &CurrencyCode::new("EUR"),
        &locale,
        &FormatOptions::default(),
    );
    assert_eq!(formatted, "€1 234,56");
}

#[test]
fn screen_reader_mode_spells_out_code() {
    let format = CurrencyFormat {
        options: FormatOptions {
            screen_reader_mode: true,
        },
        ..CurrencyFormat::default()
    };
    assert_eq!(format.format(Money::from_cents(1299)), "12.99 USD");
}

#[test]
fn yen_keeps_catalog_cents() {
    let format = CurrencyFormat::new(CurrencyCode::new("JPY"), LocaleConfig::for_tag("ja-JP"));
    assert_eq!(format.format(Money::from_cents(150_000)), "¥1,500.00");
    assert_eq!(format.format(Money::from_cents(150)), "¥1.50");
}

#[test]
fn yen_receipt_sum_matches_its_rows() {
    let style = ReportStyle {
        currency: CurrencyFormat::new(CurrencyCode::new("JPY"), LocaleConfig::for_tag("ja-JP")),
        plain_mode: true,
    };
    let receipt = Receipt::from_purchases(vec![
        ("Apple".to_string(), Money::from_cents(100)),
        ("Banana".to_string(), Money::from_cents(150)),
    ]);
    let rendered = receipt.render(&style);

    let parse = |text: &str| -> u64 {
        let digits: String = text.chars().filter(|ch| ch.is_ascii_digit()).collect();
        digits.parse().expect("amount digits")
    };
    let lines: Vec<&str> = rendered.lines().collect();
    let row_total: u64 = lines[4..6]
        .iter()
        .map(|line| parse(line.rsplit(' ').next().expect("price cell")))
        .sum();
    let sum_line = lines
        .iter()
        .find(|line| line.starts_with("Sum:"))
        .expect("sum line");

    assert_eq!(lines[4], "Apple      ¥1.00");
    assert_eq!(lines[5], "Banana     ¥1.50");
    assert_eq!(parse(sum_line), row_total);
    assert!(sum_line.ends_with("¥2.50"));
}

#[test]
fn unknown_codes_render_as_prefix() {
    let format = CurrencyFormat::new(CurrencyCode::new("chf"), LocaleConfig::default());
    assert_eq!(format.format(Money::from_cents(500)), "CHF5.00");
}
