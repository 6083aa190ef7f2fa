use bevy::prelude::Resource;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("City does not exist: {0}")]
    UnknownCity(String),
}

/// One entry of the city dataset. Extra fields in the file are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityRecord {
    pub city: String,
    #[serde(deserialize_with = "coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "coordinate")]
    pub lng: f64,
}

/// Datasets disagree on whether coordinates are numbers or strings
fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct CityDirectory {
    cities: Vec<CityRecord>,
}

impl CityDirectory {
    pub fn new(cities: Vec<CityRecord>) -> Self {
        Self { cities }
    }

    pub fn from_json(content: &str) -> Result<Self, CityError> {
        let cities: Vec<CityRecord> = serde_json::from_str(content)?;
        Ok(Self::new(cities))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CityError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Case-insensitive lookup on the trimmed name
    pub fn find(&self, name: &str) -> Result<&CityRecord, CityError> {
        let wanted = name.trim().to_lowercase();
        self.cities
            .iter()
            .find(|record| record.city.to_lowercase() == wanted)
            .ok_or_else(|| CityError::UnknownCity(name.trim().to_string()))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CITIES: &str = r#"[
        {"city": "Paris", "lat": "48.8567", "lng": "2.3522", "country": "France"},
        {"city": "Saint-Étienne", "lat": 45.4347, "lng": 4.3903},
        {"city": "Brest", "lat": " 48.39 ", "lng": "-4.49"}
    ]"#;

    #[test]
    fn test_mixed_coordinate_types() {
        let directory = CityDirectory::from_json(CITIES).unwrap();
        assert_eq!(directory.len(), 3);

        let brest = directory.find("Brest").unwrap();
        assert_eq!(brest.lat, 48.39);
        assert_eq!(brest.lng, -4.49);
    }

    #[rstest]
    #[case("paris")]
    #[case("PARIS")]
    #[case("  Paris ")]
    fn test_find_ignores_case_and_padding(#[case] query: &str) {
        let directory = CityDirectory::from_json(CITIES).unwrap();
        let paris = directory.find(query).unwrap();
        assert_eq!(paris.city, "Paris");
        assert_eq!(paris.lat, 48.8567);
    }

    #[test]
    fn test_find_non_ascii_name() {
        let directory = CityDirectory::from_json(CITIES).unwrap();
        assert_eq!(directory.find("saint-étienne").unwrap().lng, 4.3903);
    }

    #[test]
    fn test_unknown_city() {
        let directory = CityDirectory::from_json(CITIES).unwrap();
        match directory.find("Atlantis") {
            Err(CityError::UnknownCity(name)) => assert_eq!(name, "Atlantis"),
            other => panic!("expected UnknownCity, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_coordinate_is_an_error() {
        let result = CityDirectory::from_json(r#"[{"city": "Nowhere", "lat": "north", "lng": 1}]"#);
        assert!(matches!(result, Err(CityError::Json(_))));
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data/cities.json");
        let directory = CityDirectory::load_from_file(path).unwrap();
        assert!(directory.find("Lyon").is_ok());
    }
}
