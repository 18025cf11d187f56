// src/domain/format.rs

//! Display formatting for listing cards.

const STAR: &str = "⭐";
const MAX_STARS: usize = 5;
const AMENITIES_SHOWN: usize = 5;

/// Cut `text` to `max_chars` characters, marking the cut with `...`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// `"4.85 stars"` is `4.85`, `"abc"` is `None`.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// `"$1,250.00"` renders as `"$1250/night"`.
pub fn nightly_price(price: Option<&str>) -> String {
    let amount = price
        .map(|p| p.replace(['$', ','], ""))
        .and_then(|p| parse_leading_float(&p))
        .filter(|n| n.is_finite())
        .unwrap_or(0.0);

    format!("${:.0}/night", amount.round())
}

/// One decimal place, rounding the exact stored value.
///
/// Exact ties (`4.25`, `0.75`) round away from zero.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => to_fixed_one(r),
        None => "N/A".to_string(),
    }
}

fn to_fixed_one(r: f64) -> String {
    // A tie at one decimal means r * 10 ends in exactly .5, i.e. 4r is odd.
    let quarters = r * 4.0;
    if quarters.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let up = (r.abs() * 10.0).ceil() / 10.0;
        return format!("{:.1}", up.copysign(r));
    }

    format!("{r:.1}")
}

/// Between one and five stars; a fractional part of .5 or more earns an
/// extra star while below five. Ratings above five (a 0-100 scale) are
/// capped rather than repeated.
pub fn star_rating(rating: Option<f64>) -> String {
    let Some(r) = rating.filter(|r| r.is_finite() && *r > 0.0) else {
        return STAR.to_string();
    };

    let full = (r.floor() as usize).min(MAX_STARS);
    let has_half = r % 1.0 >= 0.5;

    let mut count = full;
    if has_half && full < MAX_STARS {
        count += 1;
    }

    STAR.repeat(count.max(1))
}

/// First five amenities joined with bullets, then a `+N more` tail.
pub fn amenities_summary(amenities: &[String]) -> String {
    let shown = amenities
        .iter()
        .take(AMENITIES_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" • ");

    if amenities.len() > AMENITIES_SHOWN {
        format!("{shown} +{} more", amenities.len() - AMENITIES_SHOWN)
    } else {
        shown
    }
}

pub fn details_line(
    property_type: Option<&str>,
    room_type: Option<&str>,
    accommodates: Option<&str>,
) -> String {
    format!(
        "{} • {} • {} guests",
        property_type.unwrap_or(""),
        room_type.unwrap_or(""),
        accommodates.unwrap_or("?"),
    )
}
