use std::fmt::Write as _;

use serde_json::Value;

use crate::features::countries::dtos::{CountryDetailDto, CountrySummaryDto};
use crate::features::countries::filter::contains_ignore_case;
use crate::features::countries::models::CountryName;

const NOT_AVAILABLE: &str = "N/A";

/// Region dropdown selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegionSelection {
    #[default]
    All,
    Named(String),
}

impl From<&str> for RegionSelection {
    fn from(value: &str) -> Self {
        if value == "All" {
            RegionSelection::All
        } else {
            RegionSelection::Named(value.to_string())
        }
    }
}

/// Search box plus region dropdown, applied to whatever has been loaded so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserFilter {
    pub search_term: String,
    pub region: RegionSelection,
}

impl BrowserFilter {
    pub fn new(search_term: impl Into<String>, region: RegionSelection) -> Self {
        Self {
            search_term: search_term.into(),
            region,
        }
    }

    /// The term must occur in the name, the capital or the timezones, and
    /// the region must match the selection
    pub fn matches(&self, country: &CountrySummaryDto) -> bool {
        self.matches_search(country) && self.matches_region(country)
    }

    pub fn visible<'a>(&self, countries: &[&'a CountrySummaryDto]) -> Vec<&'a CountrySummaryDto> {
        countries
            .iter()
            .copied()
            .filter(|country| self.matches(country))
            .collect()
    }

    fn matches_search(&self, country: &CountrySummaryDto) -> bool {
        let term = self.search_term.as_str();
        let name = country
            .name
            .as_ref()
            .and_then(CountryName::as_text)
            .unwrap_or_default();
        let capital = country
            .capital
            .as_ref()
            .map(|capital| capital.iter().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();
        let timezones = country
            .timezones
            .as_ref()
            .map(|zones| zones.join(" "))
            .unwrap_or_default();

        contains_ignore_case(name, term)
            || contains_ignore_case(&capital, term)
            || contains_ignore_case(&timezones, term)
    }

    fn matches_region(&self, country: &CountrySummaryDto) -> bool {
        match &self.region {
            RegionSelection::All => true,
            RegionSelection::Named(region) => country.region.as_deref() == Some(region.as_str()),
        }
    }
}

/// Dropdown options: `All`, then each distinct non-empty region in first-seen order
pub fn region_options(countries: &[&CountrySummaryDto]) -> Vec<String> {
    let mut options = vec!["All".to_string()];
    for region in countries.iter().filter_map(|c| c.region.as_deref()) {
        if !region.is_empty() && !options.iter().any(|o| o == region) {
            options.push(region.to_string());
        }
    }
    options
}

pub fn render_card(country: &CountrySummaryDto) -> String {
    let name = country
        .name
        .as_ref()
        .and_then(CountryName::as_text)
        .filter(|n| !n.is_empty())
        .unwrap_or("Unnamed Country");
    let region = country
        .region
        .as_deref()
        .filter(|r| !r.is_empty())
        .unwrap_or("Unknown Region");
    let flag = country
        .flag
        .as_deref()
        .filter(|f| !f.is_empty())
        .unwrap_or("No Flag Available");
    let code = country.code.as_deref().unwrap_or("-");

    format!("[{}] {} | {} | {}", code, name, region, flag)
}

pub fn render_list(visible: &[&CountrySummaryDto], has_more: bool) -> String {
    let mut out = String::new();
    if visible.is_empty() {
        out.push_str("No countries found.\n");
    }
    for country in visible {
        let _ = writeln!(out, "{}", render_card(country));
    }
    if !has_more {
        out.push_str("No more countries to load.\n");
    }
    out
}

/// `name (symbol)` for each currency, comma separated; `N/A` unless a list
pub fn format_currencies(currencies: Option<&Value>) -> String {
    match currencies {
        Some(Value::Array(currencies)) => currencies
            .iter()
            .map(|currency| {
                format!(
                    "{} ({})",
                    str_field(currency, "name"),
                    str_field(currency, "symbol")
                )
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Language names, comma separated; `N/A` unless a list
pub fn format_languages(languages: Option<&Value>) -> String {
    match languages {
        Some(Value::Array(languages)) => languages
            .iter()
            .map(|language| match language {
                Value::String(name) => name.as_str(),
                other => str_field(other, "name"),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Population with thousands separators, e.g. `1,400,000,000`
pub fn format_population(population: Option<&Value>) -> String {
    let Some(Value::Number(number)) = population else {
        return NOT_AVAILABLE.to_string();
    };

    let whole = number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() < i64::MAX as f64)
            .map(|n| n as i64)
    });
    let Some(population) = whole else {
        return number.to_string();
    };

    let digits = population.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if population < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn render_detail(country: &CountryDetailDto) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", country.name.as_deref().unwrap_or_default());
    let _ = writeln!(out, "Population: {}", format_population(country.population.as_ref()));
    let _ = writeln!(
        out,
        "Region: {}",
        country
            .region
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    );
    let _ = writeln!(out, "Currency: {}", format_currencies(country.currency.as_ref()));
    let _ = writeln!(out, "Languages: {}", format_languages(country.languages.as_ref()));
    let _ = writeln!(
        out,
        "Capital: {}",
        country
            .capital
            .as_ref()
            .map(|capital| capital.iter().collect::<Vec<_>>().join(", "))
            .unwrap_or_default()
    );
    let _ = writeln!(
        out,
        "Time Zone: {}",
        country
            .time_zone
            .as_ref()
            .map(|zones| zones.join(", "))
            .unwrap_or_default()
    );
    if let Some(flag) = country.flag.as_deref().filter(|f| !f.is_empty()) {
        let _ = writeln!(out, "Flag: {}", flag);
    }
    out
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}
