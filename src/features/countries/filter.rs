use crate::features::countries::models::UpstreamCountry;

/// Conjunction of optional predicates over raw upstream records.
///
/// A `None` (or empty) predicate imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter {
    /// Case-insensitive substring of the country name
    pub name: Option<String>,
    /// Case-insensitive substring of the first capital
    pub capital: Option<String>,
    /// Exact, case-sensitive region
    pub region: Option<String>,
    /// Exact member of the timezone list
    pub timezone: Option<String>,
}

impl CountryFilter {
    pub fn new(
        name: Option<String>,
        capital: Option<String>,
        region: Option<String>,
        timezone: Option<String>,
    ) -> Self {
        Self {
            name: non_empty(name),
            capital: non_empty(capital),
            region: non_empty(region),
            timezone: non_empty(timezone),
        }
    }

    pub fn by_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, country: &UpstreamCountry) -> bool {
        self.matches_name(country)
            && self.matches_capital(country)
            && self.matches_region(country)
            && self.matches_timezone(country)
    }

    pub fn apply(&self, countries: Vec<UpstreamCountry>) -> Vec<UpstreamCountry> {
        countries
            .into_iter()
            .filter(|country| self.matches(country))
            .collect()
    }

    fn matches_name(&self, country: &UpstreamCountry) -> bool {
        let Some(needle) = &self.name else {
            return true;
        };
        country
            .name_text()
            .is_some_and(|name| contains_ignore_case(name, needle))
    }

    fn matches_capital(&self, country: &UpstreamCountry) -> bool {
        let Some(needle) = &self.capital else {
            return true;
        };
        country.capital().is_some_and(|capital| {
            capital
                .first()
                .is_some_and(|first| contains_ignore_case(first, needle))
        })
    }

    fn matches_region(&self, country: &UpstreamCountry) -> bool {
        let Some(region) = &self.region else {
            return true;
        };
        country.region() == Some(region.as_str())
    }

    fn matches_timezone(&self, country: &UpstreamCountry) -> bool {
        let Some(timezone) = &self.timezone else {
            return true;
        };
        country
            .timezones()
            .is_some_and(|zones| zones.iter().any(|zone| zone == timezone))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country(value: serde_json::Value) -> UpstreamCountry {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> Vec<UpstreamCountry> {
        vec![
            country(json!({
                "name": "India", "region": "Asia", "capital": ["New Delhi"],
                "timezones": ["UTC+05:30"]
            })),
            country(json!({
                "name": "France", "region": "Europe", "capital": ["Paris"],
                "timezones": ["UTC-10:00", "UTC+01:00"]
            })),
            country(json!({
                "name": "Austria", "region": "Europe", "capital": ["Vienna"],
                "timezones": ["UTC+01:00"]
            })),
            country(json!({"name": "Antarctica", "region": "Polar", "capital": []})),
        ]
    }

    fn names(countries: &[UpstreamCountry]) -> Vec<&str> {
        countries
            .iter()
            .filter_map(UpstreamCountry::name_text)
            .collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let all = CountryFilter::default().apply(sample());
        assert_eq!(all.len(), 4);

        let blank = CountryFilter::new(Some(String::new()), None, Some(String::new()), None);
        assert_eq!(blank, CountryFilter::default());
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let filter = CountryFilter::new(Some("india".into()), None, None, None);
        assert_eq!(names(&filter.apply(sample())), vec!["India"]);

        let filter = CountryFilter::new(Some("AN".into()), None, None, None);
        assert_eq!(names(&filter.apply(sample())), vec!["France", "Antarctica"]);
    }

    #[test]
    fn test_capital_checks_first_element_only() {
        let filter = CountryFilter::new(None, Some("paris".into()), None, None);
        assert_eq!(names(&filter.apply(sample())), vec!["France"]);

        let south_africa = country(json!({"name": "South Africa", "capital": ["Pretoria", "Cape Town"]}));
        let filter = CountryFilter::new(None, Some("Cape".into()), None, None);
        assert!(!filter.matches(&south_africa));
    }

    #[test]
    fn test_empty_or_missing_capital_never_matches() {
        let filter = CountryFilter::new(None, Some("a".into()), None, None);
        let antarctica = &sample()[3];
        assert!(!filter.matches(antarctica));
        assert!(!filter.matches(&country(json!({"name": "Nowhere"}))));
    }

    #[test]
    fn test_region_is_exact_and_case_sensitive() {
        let filter = CountryFilter::by_region("Europe");
        assert_eq!(names(&filter.apply(sample())), vec!["France", "Austria"]);

        let filter = CountryFilter::by_region("europe");
        assert!(filter.apply(sample()).is_empty());

        let filter = CountryFilter::by_region("Eur");
        assert!(filter.apply(sample()).is_empty());
    }

    #[test]
    fn test_timezone_is_membership_not_substring() {
        let filter = CountryFilter::new(None, None, None, Some("UTC+01:00".into()));
        assert_eq!(names(&filter.apply(sample())), vec!["France", "Austria"]);

        let filter = CountryFilter::new(None, None, None, Some("UTC+01".into()));
        assert!(filter.apply(sample()).is_empty());
    }

    #[test]
    fn test_predicates_are_anded() {
        let filter = CountryFilter::new(Some("a".into()), None, Some("Europe".into()), None);
        assert_eq!(names(&filter.apply(sample())), vec!["France", "Austria"]);

        let filter = CountryFilter::new(
            Some("a".into()),
            Some("vienna".into()),
            Some("Europe".into()),
            Some("UTC+01:00".into()),
        );
        assert_eq!(names(&filter.apply(sample())), vec!["Austria"]);
    }

    #[test]
    fn test_badly_typed_fields_never_match() {
        let odd = country(json!({"name": "Odd", "region": 5, "capital": [null], "timezones": "UTC"}));

        assert!(!CountryFilter::by_region("5").matches(&odd));
        assert!(!CountryFilter::new(None, Some("a".into()), None, None).matches(&odd));
        assert!(!CountryFilter::new(None, None, None, Some("UTC".into())).matches(&odd));
        assert!(CountryFilter::new(Some("od".into()), None, None, None).matches(&odd));
    }

    #[test]
    fn test_string_capital_is_searchable() {
        let france = country(json!({"name": "France", "capital": "Paris"}));
        let filter = CountryFilter::new(None, Some("PAR".into()), None, None);
        assert!(filter.matches(&france));
    }
}
