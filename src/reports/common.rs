//! Formatting shared by the report generators and by UI layers.

/// Format an average resolution time. Zero or negative averages show as `N/A`.
#[must_use]
pub fn format_days(days: f64) -> String {
    if days > 0.0 {
        format!("{days:.1}d")
    } else {
        "N/A".to_string()
    }
}

/// Format a team rank as `#n`, or `N/A` for an unranked person.
#[must_use]
pub fn format_rank(rank: Option<usize>) -> String {
    rank.map_or_else(|| "N/A".to_string(), |rank| format!("#{rank}"))
}

/// Format a percentage with one decimal.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}
