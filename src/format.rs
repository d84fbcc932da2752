//! Text formatting for values shown in result tables and callouts.

use serde_json::Value;

/// Fixed two-decimal rendering, e.g. `1234.5` → `"1234.50"`.
pub fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Fraction as a percentage with one decimal, e.g. `0.873` → `"87.3%"`.
pub fn score_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Fraction as a percentage with two decimals, e.g. `0.9` → `"90.00%"`.
pub fn accuracy_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// `1`/`0` style flag as `"Yes"`/`"No"`.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Whole numbers without a fractional part, anything else with two decimals.
pub fn plain_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        two_decimals(value)
    }
}

/// Generic metric cell: numbers with two decimals, strings verbatim, the rest as JSON.
pub fn metric_value(value: &Value) -> String {
    match value {
        Value::Number(number) => number
            .as_f64()
            .map(two_decimals)
            .unwrap_or_else(|| number.to_string()),
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
