// Display formatting for engine results

use crate::i18n::{self, keys};
use crate::models::{EnergyContent, Language};

pub fn format_volume(liters: f64) -> String {
    format!("{:.1} L", liters)
}

pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

pub fn format_range_impact(percent: f64) -> String {
    format!("-{:.1}%", percent)
}

pub fn format_blend_label(ethanol_percent: f64) -> String {
    format!("E{:.0}", ethanol_percent)
}

/// Relative energy and range impact, or "N/A" twice when there is no fuel.
pub fn format_energy(energy: Option<EnergyContent>, lang: Language) -> (String, String) {
    match energy {
        Some(e) => (
            format_percent(e.relative_energy_percent),
            format_range_impact(e.range_impact_percent),
        ),
        None => {
            let na = i18n::t(lang, keys::NOT_AVAILABLE).to_string();
            (na.clone(), na)
        }
    }
}

/// Parses a number field, keeping `fallback` for unparsable text.
pub fn parse_number(raw: &str, fallback: f64) -> f64 {
    raw.trim().replace(',', ".").parse::<f64>().unwrap_or(fallback)
}
