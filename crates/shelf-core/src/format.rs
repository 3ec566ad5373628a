use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a variant's textual price with exactly two decimal places.
///
/// Prices arrive from the catalog as decimal strings (`"30.00"`, `"12.5"`).
/// Anything that does not parse renders as `"0.00"`.
#[must_use]
pub fn format_price(price: &str) -> String {
    Decimal::from_str(price.trim()).map_or_else(
        |_| "0.00".to_string(),
        |d| {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        },
    )
}
