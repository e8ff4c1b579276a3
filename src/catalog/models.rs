/// Data models for catalog entries
///
/// Entries are immutable once loaded. Field names follow the catalog JSON
/// format (`type` and `url` on the wire).

use serde::{Deserialize, Serialize};

/// Kind of searchable item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Destination,
    Flight,
    Hotel,
    Service,
}

impl EntryType {
    /// Icon shown when an entry doesn't carry its own
    pub fn default_icon(&self) -> &'static str {
        match self {
            EntryType::Destination => "fas fa-map-marker-alt",
            EntryType::Flight => "fas fa-plane",
            EntryType::Hotel => "fas fa-bed",
            EntryType::Service => "fas fa-concierge-bell",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EntryType::Destination => "destination",
            EntryType::Flight => "flight",
            EntryType::Hotel => "hotel",
            EntryType::Service => "service",
        };
        write!(f, "{}", s)
    }
}

/// Where an entry leads when it is chosen
///
/// Strings starting with `#` are in-page anchors, anything else is a page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Target {
    Anchor(String),
    Page(String),
}

impl Target {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with('#') {
            Target::Anchor(raw.to_string())
        } else {
            Target::Page(raw.to_string())
        }
    }

    /// The raw target string, unchanged
    pub fn as_str(&self) -> &str {
        match self {
            Target::Anchor(s) | Target::Page(s) => s,
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, Target::Anchor(_))
    }
}

impl From<String> for Target {
    fn from(raw: String) -> Self {
        Target::parse(&raw)
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        match target {
            Target::Anchor(s) | Target::Page(s) => s,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable item (destination, flight, hotel or service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub category: String,
    pub country: String,
    #[serde(rename = "url")]
    pub target: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CatalogEntry {
    pub fn new(
        name: &str,
        entry_type: EntryType,
        category: &str,
        country: &str,
        target: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            entry_type,
            category: category.to_string(),
            country: country.to_string(),
            target: Target::parse(target),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Display icon, falling back to the type's default
    pub fn icon(&self) -> &str {
        self.icon
            .as_deref()
            .unwrap_or_else(|| self.entry_type.default_icon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parse() {
        assert!(Target::parse("#book-flight").is_anchor());
        assert!(!Target::parse("destinations/bangkok.html").is_anchor());
        assert_eq!(Target::parse("#services").as_str(), "#services");
    }

    #[test]
    fn test_entry_from_json() {
        let json = r##"{
            "name": "Flight to Dubai",
            "type": "flight",
            "category": "Flights",
            "country": "United Arab Emirates",
            "url": "#book-flight"
        }"##;

        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.entry_type, EntryType::Flight);
        assert_eq!(entry.target, Target::Anchor("#book-flight".to_string()));
        assert_eq!(entry.icon(), "fas fa-plane");
    }

    #[test]
    fn test_entry_rejects_unknown_type() {
        let json = r#"{"name": "x", "type": "train", "category": "c", "country": "y", "url": "z"}"#;
        assert!(serde_json::from_str::<CatalogEntry>(json).is_err());
    }

    #[test]
    fn test_entry_serializes_wire_names() {
        let entry = CatalogEntry::new(
            "Visa Services",
            EntryType::Service,
            "Travel Services",
            "Global",
            "#services",
        )
        .with_icon("fas fa-passport");

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "service");
        assert_eq!(value["url"], "#services");
        assert_eq!(value["icon"], "fas fa-passport");
    }

    #[test]
    fn test_entry_type_display() {
        assert_eq!(EntryType::Destination.to_string(), "destination");
        assert_eq!(EntryType::Hotel.to_string(), "hotel");
    }
}
