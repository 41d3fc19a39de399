use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of a value the price API did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// Price as dollars with thousands separators, e.g. `$65,000` or `$0.0712`.
pub fn format_price(value: Option<Decimal>) -> String {
    match value {
        Some(v) if !v.is_zero() => format!("${}", group_thousands(v)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Market cap abbreviated to billions or millions with two decimals,
/// e.g. `$2.50B` or `$0.75M`.
pub fn format_market_cap(value: Option<Decimal>) -> String {
    let billion = Decimal::from(1_000_000_000u64);
    let million = Decimal::from(1_000_000u64);
    match value {
        Some(v) if !v.is_zero() => {
            if v >= billion {
                format!("${}B", two_places(v / billion))
            } else {
                format!("${}M", two_places(v / million))
            }
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn two_places(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

fn group_thousands(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
