//! Wire types for the state/city directory and the brewery directory.
//!
//! The state/city provider returns far more fields than we use; serde ignores
//! the rest. Only the brewery record is handed on to the presenter as-is.

use serde::{Deserialize, Deserializer};

/// ISO codes of US territories and districts that are not states.
pub const EXCLUDED_ISO_CODES: &[&str] = &["AS", "DC", "GU", "MP", "PR", "VI"];

/// Prefix shared by the "United States Minor Outlying Islands" entries.
pub const OUTLYING_MINOR_PREFIX: &str = "UM";

/// A state as returned by `GET /countries/{country}/states`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateRecord {
    pub iso2: String,
    pub name: String,
}

/// A selectable state, after territories have been filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateOption {
    pub iso_code: String,
    pub name: String,
}

impl From<StateRecord> for StateOption {
    fn from(record: StateRecord) -> Self {
        Self {
            iso_code: record.iso2,
            name: record.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityOption {
    pub id: u64,
    pub name: String,
}

/// A brewery from the brewery directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Brewery {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub postal_code: String,
    #[serde(default)]
    pub website_url: Option<String>,
}

impl Brewery {
    /// Records without a street address cannot be displayed.
    pub fn has_street(&self) -> bool {
        self.street.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn website(&self) -> Option<&str> {
        self.website_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether an ISO code names an actual state rather than a territory.
pub fn is_state(iso_code: &str) -> bool {
    !(iso_code.starts_with(OUTLYING_MINOR_PREFIX) || EXCLUDED_ISO_CODES.contains(&iso_code))
}

/// Drop territories and convert the remaining records, keeping provider order.
pub fn filter_states(records: Vec<StateRecord>) -> Vec<StateOption> {
    records
        .into_iter()
        .filter(|r| is_state(&r.iso2))
        .map(StateOption::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(iso2: &str, name: &str) -> StateRecord {
        StateRecord {
            iso2: iso2.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_is_state() {
        assert!(is_state("CA"));
        assert!(is_state("TX"));
        assert!(!is_state("PR"));
        assert!(!is_state("DC"));
        assert!(!is_state("UM"));
        assert!(!is_state("UM-81"));
    }

    #[test]
    fn test_filter_states_removes_territories() {
        let records = vec![
            record("AS", "American Samoa"),
            record("CO", "Colorado"),
            record("GU", "Guam"),
            record("UM-67", "Johnston Atoll"),
            record("OR", "Oregon"),
            record("VI", "United States Virgin Islands"),
        ];
        let states = filter_states(records);
        assert_eq!(
            states,
            vec![
                StateOption {
                    iso_code: "CO".into(),
                    name: "Colorado".into(),
                },
                StateOption {
                    iso_code: "OR".into(),
                    name: "Oregon".into(),
                },
            ]
        );
    }

    #[test]
    fn test_filter_states_passes_every_state() {
        let records = vec![record("AK", "Alaska"), record("WY", "Wyoming")];
        assert_eq!(filter_states(records).len(), 2);
    }

    #[test]
    fn test_decode_states_ignores_extra_fields() {
        let json = r#"[
            {"id": 1456, "name": "Alabama", "iso2": "AL"},
            {"id": 1400, "name": "Puerto Rico", "iso2": "PR"}
        ]"#;
        let records: Vec<StateRecord> = serde_json::from_str(json).unwrap();
        let states = filter_states(records);
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].iso_code, "AL");
    }

    #[test]
    fn test_decode_brewery_with_missing_fields() {
        let json = r#"{
            "id": "5128df48-79fc-4f0f-8b52-d06be54d0cec",
            "name": "(405) Brewing Co",
            "brewery_type": "micro",
            "street": null,
            "postal_code": null,
            "website_url": null
        }"#;
        let brewery: Brewery = serde_json::from_str(json).unwrap();
        assert_eq!(brewery.street, None);
        assert_eq!(brewery.postal_code, "");
        assert!(!brewery.has_street());
        assert_eq!(brewery.website(), None);
    }

    #[test]
    fn test_empty_street_is_not_displayable() {
        let json = r#"{
            "id": "x",
            "name": "Empty",
            "street": "",
            "postal_code": "97201",
            "website_url": ""
        }"#;
        let brewery: Brewery = serde_json::from_str(json).unwrap();
        assert!(!brewery.has_street());
        assert_eq!(brewery.website(), None);
    }

    #[test]
    fn test_blank_street_counts_as_present() {
        let json = r#"{"id": "y", "name": "Blank", "street": "   ", "postal_code": "97201"}"#;
        let brewery: Brewery = serde_json::from_str(json).unwrap();
        assert!(brewery.has_street());
    }

    #[test]
    fn test_decode_cities() {
        let json = r#"[{"id": 110992, "name": "Anchorage"}, {"id": 111014, "name": "Juneau"}]"#;
        let cities: Vec<CityOption> = serde_json::from_str(json).unwrap();
        assert_eq!(
            cities[1],
            CityOption {
                id: 111014,
                name: "Juneau".into(),
            }
        );
    }
}
