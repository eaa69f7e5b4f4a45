//! Country reference data for the country selector.

use crate::domain::DialCode;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One selectable country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    pub name: String,
    pub flag: String,
    pub dial_code: DialCode,
}

/// The list of countries offered by the form layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

const BUILTIN: &[(&str, &str, &str, &str)] = &[
    ("KE", "Kenya", "🇰🇪", "254"),
    ("UG", "Uganda", "🇺🇬", "256"),
    ("TZ", "Tanzania", "🇹🇿", "255"),
    ("RW", "Rwanda", "🇷🇼", "250"),
    ("BI", "Burundi", "🇧🇮", "257"),
    ("SS", "South Sudan", "🇸🇸", "211"),
    ("ET", "Ethiopia", "🇪🇹", "251"),
    ("SO", "Somalia", "🇸🇴", "252"),
];

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CountryCatalog {
    /// The East African countries covered by the built-in phone rules.
    pub fn builtin() -> Self {
        let countries = BUILTIN
            .iter()
            .filter_map(|&(id, name, flag, dial)| {
                Some(Country {
                    id: id.to_string(),
                    name: name.to_string(),
                    flag: flag.to_string(),
                    dial_code: DialCode::new(dial).ok()?,
                })
            })
            .collect();
        Self { countries }
    }

    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Parse a JSON array of `{"id","name","flag","dialCode"}` objects.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Ok(Self { countries })
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let table_error = |reason: String| ConfigError::CountryTable {
            path: path.display().to_string(),
            reason,
        };

        let json = std::fs::read_to_string(path).map_err(|e| table_error(e.to_string()))?;
        let catalog = Self::from_json(&json).map_err(|e| table_error(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            count = catalog.countries.len(),
            "Loaded country table"
        );
        Ok(catalog)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Find a country by its id (case-insensitive).
    pub fn find(&self, id: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn find_by_dial_code(&self, dial_code: &DialCode) -> Option<&Country> {
        self.countries.iter().find(|c| &c.dial_code == dial_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog() {
        let catalog = CountryCatalog::builtin();
        assert_eq!(catalog.countries().len(), BUILTIN.len());

        let ke = catalog.find("ke").unwrap();
        assert_eq!(ke.name, "Kenya");
        assert_eq!(ke.dial_code.to_string(), "+254");

        let tz = catalog
            .find_by_dial_code(&DialCode::new("+255").unwrap())
            .unwrap();
        assert_eq!(tz.id, "TZ");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "KE", "name": "Kenya", "flag": "🇰🇪", "dialCode": "+254"},
            {"id": "ZZ", "name": "Testland", "flag": "", "dialCode": "999"}
        ]"#;
        let catalog = CountryCatalog::from_json(json).unwrap();
        assert_eq!(catalog.countries().len(), 2);
        assert_eq!(catalog.find("ZZ").unwrap().dial_code.digits(), "999");
    }

    #[test]
    fn test_from_json_rejects_bad_dial_code() {
        let json = r#"[{"id": "KE", "name": "Kenya", "flag": "", "dialCode": "+25a"}]"#;
        assert!(CountryCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "UG", "name": "Uganda", "flag": "🇺🇬", "dialCode": "+256"}}]"#
        )
        .unwrap();

        let catalog = CountryCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.countries()[0].id, "UG");
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = CountryCatalog::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::CountryTable { .. })));
    }
}
