//! Record types produced by the inquiry pipeline.

use serde::{Deserialize, Serialize};

/// A city (county) offered by the inquiry page's city selector.
///
/// Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City {
    pub name: String,
}

/// A single store row from the inquiry results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Locator code shown in the first column.
    pub id: String,
    #[serde(rename = "store")]
    pub name: String,
    pub address: String,
}

/// Which kind of record an inquiry is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    City,
    Store,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::City => write!(f, "city"),
            RecordKind::Store => write!(f, "store"),
        }
    }
}

/// Raw body of a successful (HTTP 200) inquiry response.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_serializes_as_plain_string() {
        let city = City {
            name: "臺北市".to_string(),
        };
        let json = serde_json::to_string(&city).expect("serialize City");
        assert_eq!(json, "\"臺北市\"");
    }

    #[test]
    fn store_serializes_name_under_store_key() {
        let store = Store {
            id: "001".to_string(),
            name: "Store A".to_string(),
            address: "123 Main St".to_string(),
        };
        let value = serde_json::to_value(&store).expect("serialize Store");
        assert_eq!(
            value,
            serde_json::json!({"id": "001", "store": "Store A", "address": "123 Main St"})
        );
    }

    #[test]
    fn record_kind_display_is_lowercase() {
        assert_eq!(RecordKind::City.to_string(), "city");
        assert_eq!(RecordKind::Store.to_string(), "store");
    }
}
