use crate::domain::format::{
    amenities_summary, details_line, format_rating, nightly_price, parse_leading_float,
    star_rating, truncate_text,
};

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate_text("", 150), "");
    assert_eq!(truncate_text("Cozy", 4), "Cozy");
}

#[test]
fn truncate_cuts_on_characters() {
    assert_eq!(truncate_text("abcdefgh", 5), "abcde...");
    // Multi-byte characters are never split.
    assert_eq!(truncate_text("ééééé", 2), "éé...");
}

#[test]
fn leading_float_matches_numeric_prefix() {
    assert_eq!(parse_leading_float("4.85"), Some(4.85));
    assert_eq!(parse_leading_float("  96 out of 100"), Some(96.0));
    assert_eq!(parse_leading_float(".5"), Some(0.5));
    assert_eq!(parse_leading_float("-2"), Some(-2.0));
    assert_eq!(parse_leading_float("1e3x"), Some(1000.0));
    assert_eq!(parse_leading_float("7e"), Some(7.0));
    assert_eq!(parse_leading_float("abc"), None);
    assert_eq!(parse_leading_float("."), None);
    assert_eq!(parse_leading_float(""), None);
}

#[test]
fn price_strips_currency_and_separators() {
    assert_eq!(nightly_price(Some("$125.00")), "$125/night");
    assert_eq!(nightly_price(Some("$1,250.00")), "$1250/night");
    assert_eq!(nightly_price(Some("$1,000,000.00")), "$1000000/night");
    assert_eq!(nightly_price(Some("99.5")), "$100/night");
}

#[test]
fn price_defaults_to_zero() {
    assert_eq!(nightly_price(None), "$0/night");
    assert_eq!(nightly_price(Some("call us")), "$0/night");
}

#[test]
fn rating_has_one_decimal() {
    assert_eq!(format_rating(Some(4.0)), "4.0");
    assert_eq!(format_rating(Some(4.24)), "4.2");
    assert_eq!(format_rating(None), "N/A");
}

#[test]
fn rating_rounds_the_stored_value() {
    // 4.85 is stored as 4.8499..., so it rounds down.
    assert_eq!(format_rating(Some(4.85)), "4.8");
    assert_eq!(format_rating(Some(4.35)), "4.3");
    assert_eq!(format_rating(Some(4.05)), "4.0");
    assert_eq!(format_rating(Some(1.45)), "1.4");
}

#[test]
fn rating_ties_round_up() {
    assert_eq!(format_rating(Some(4.25)), "4.3");
    assert_eq!(format_rating(Some(0.75)), "0.8");
    assert_eq!(format_rating(Some(-1.25)), "-1.3");
}

#[test]
fn stars_follow_rating() {
    assert_eq!(star_rating(None), "⭐");
    assert_eq!(star_rating(Some(3.0)), "⭐⭐⭐");
    assert_eq!(star_rating(Some(3.5)), "⭐⭐⭐⭐");
    assert_eq!(star_rating(Some(3.4)), "⭐⭐⭐");
    assert_eq!(star_rating(Some(5.0)), "⭐⭐⭐⭐⭐");
}

#[test]
fn stars_are_bounded() {
    assert_eq!(star_rating(Some(0.2)), "⭐");
    assert_eq!(star_rating(Some(0.0)), "⭐");
    assert_eq!(star_rating(Some(96.0)), "⭐⭐⭐⭐⭐");
    assert_eq!(star_rating(Some(f64::NAN)), "⭐");
}

#[test]
fn amenities_summary_shows_first_five() {
    let few: Vec<String> = ["Wifi", "Kitchen"].iter().map(|s| s.to_string()).collect();
    assert_eq!(amenities_summary(&few), "Wifi • Kitchen");

    let many: Vec<String> = (1..=8).map(|i| format!("A{i}")).collect();
    assert_eq!(amenities_summary(&many), "A1 • A2 • A3 • A4 • A5 +3 more");

    assert_eq!(amenities_summary(&[]), "");
}

#[test]
fn details_line_fills_gaps() {
    assert_eq!(
        details_line(Some("Entire home"), Some("Entire home/apt"), Some("6")),
        "Entire home • Entire home/apt • 6 guests"
    );
    assert_eq!(details_line(None, None, None), " •  • ? guests");
}
