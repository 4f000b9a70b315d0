//! Catalog file loader

use crate::catalog::EventCatalog;
use crate::error::{Error, Result};
use crate::schema::event::{EventDef, EventDefs};
use indexmap::IndexMap;
use lifepath_core::EventId;
use std::fs;
use std::path::Path;

/// Loader for event catalog files
#[derive(Debug, Default)]
pub struct Loader {
    events: IndexMap<EventId, EventDef>,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single catalog file, choosing the format by extension
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => self.load_ron_str(&content),
            Some("json") => self.load_json_str(&content),
            _ => Err(Error::InvalidSchema(format!(
                "unsupported catalog file {:?} (expected .ron or .json)",
                path
            ))),
        }?;

        tracing::debug!(path = %path.display(), events = self.events.len(), "catalog file loaded");
        Ok(())
    }

    /// Load events from a RON string of the form `(events: [...])`
    pub fn load_ron_str(&mut self, content: &str) -> Result<()> {
        let file: EventDefs = ron::from_str(content)?;
        self.insert_all(file.events)
    }

    /// Load events from a JSON string
    ///
    /// Accepts either a bare array of events or an object `{"events": [...]}`.
    pub fn load_json_str(&mut self, content: &str) -> Result<()> {
        let events = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<EventDef>>(content)?
        } else {
            serde_json::from_str::<EventDefs>(content)?.events
        };
        self.insert_all(events)
    }

    /// Load all `.ron` and `.json` files from a directory, recursively
    ///
    /// Files are visited in name order so the catalog order is stable.
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();

        for file_path in entries {
            if file_path.is_dir() {
                self.load_directory(&file_path)?;
            } else if matches!(
                file_path.extension().and_then(|e| e.to_str()),
                Some("ron") | Some("json")
            ) {
                self.load_file(&file_path)?;
            }
        }

        Ok(())
    }

    /// Finish loading and return the catalog
    pub fn finish(self) -> EventCatalog {
        tracing::info!(events = self.events.len(), "event catalog ready");
        EventCatalog::from_map(self.events)
    }

    fn insert_all(&mut self, events: Vec<EventDef>) -> Result<()> {
        for event in events {
            check_event(&event)?;
            let name = event.name.clone();
            if self.events.contains_key(&name) {
                return Err(Error::DuplicateDefinition(name.to_string()));
            }
            self.events.insert(name, event);
        }
        Ok(())
    }
}

/// Reject definitions the engine cannot evaluate meaningfully
fn check_event(event: &EventDef) -> Result<()> {
    if event.name.as_str().trim().is_empty() {
        return Err(Error::InvalidSchema("event with empty name".to_string()));
    }
    if !(0.0..=1.0).contains(&event.chance) {
        return Err(Error::InvalidSchema(format!(
            "event '{}': chance {} is outside [0, 1]",
            event.name, event.chance
        )));
    }
    if let Some((field, _)) = event.conditions.iter().find(|(_, range)| range.is_empty()) {
        return Err(Error::InvalidSchema(format!(
            "event '{}': condition on '{}' has min greater than max",
            event.name, field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RON_CATALOG: &str = r#"
    (
        events: [
            (
                name: "flu",
                kind: negative,
                description: "A nasty flu keeps you in bed.",
                conditions: {"health": (max: Some(60))},
                effects: {"health": -10},
                chance: 0.5,
            ),
            (
                name: "side_hustle",
                kind: positive,
                description: "Your weekend project starts paying.",
                effects: {"passive_income": 50},
                chance: 0.1,
            ),
        ]
    )
    "#;

    const JSON_CATALOG: &str = r#"[
        {"name": "lottery", "type": "positive", "description": "You won!",
         "conditions": {}, "effects": {"money": 5000}, "chance": 0.01}
    ]"#;

    #[test]
    fn test_load_ron() {
        let mut loader = Loader::new();
        loader.load_ron_str(RON_CATALOG).unwrap();

        let catalog = loader.finish();
        assert_eq!(catalog.len(), 2);
        let flu = catalog.get(&EventId::new("flu")).unwrap();
        assert_eq!(flu.effects["health"], -10);
        assert!(catalog.get(&EventId::new("side_hustle")).unwrap().conditions.is_empty());
    }

    #[test]
    fn test_load_json_array_and_object() {
        let mut loader = Loader::new();
        loader.load_json_str(JSON_CATALOG).unwrap();
        loader
            .load_json_str(r#"{"events": [{"name": "raise", "type": "positive", "chance": 0.2}]}"#)
            .unwrap();

        let catalog = loader.finish();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&EventId::new("raise")).unwrap().chance, 0.2);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut loader = Loader::new();
        loader.load_ron_str(RON_CATALOG).unwrap();
        let err = loader.load_ron_str(RON_CATALOG).unwrap_err();
        assert!(matches!(err, Error::DuplicateDefinition(name) if name == "flu"));
    }

    #[test]
    fn test_chance_outside_unit_interval_rejected() {
        let mut loader = Loader::new();
        let err = loader
            .load_json_str(r#"[{"name": "miracle", "type": "positive", "chance": 1.5}]"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSchema(_)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut loader = Loader::new();
        let err = loader
            .load_json_str(
                r#"[{"name": "odd", "type": "negative", "chance": 0.1,
                     "conditions": {"money": {"min": 10, "max": 5}}}]"#,
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSchema(msg) if msg.contains("money")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut loader = Loader::new();
        assert!(matches!(loader.load_json_str("{ not json"), Err(Error::Json(_))));
        assert!(matches!(loader.load_ron_str("(events: [ (name: )])"), Err(Error::Ron(_))));
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut ron_file = fs::File::create(dir.path().join("a_health.ron")).unwrap();
        ron_file.write_all(RON_CATALOG.as_bytes()).unwrap();
        let mut json_file = fs::File::create(dir.path().join("b_money.json")).unwrap();
        json_file.write_all(JSON_CATALOG.as_bytes()).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut loader = Loader::new();
        loader.load_directory(dir.path()).unwrap();
        let catalog = loader.finish();

        let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["flu", "side_hustle", "lottery"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.yaml");
        fs::write(&path, "events: []").unwrap();
        let mut loader = Loader::new();
        assert!(matches!(loader.load_file(&path), Err(Error::InvalidSchema(_))));
    }

    #[test]
    fn test_missing_directory() {
        let mut loader = Loader::new();
        assert!(matches!(
            loader.load_directory("/definitely/not/here"),
            Err(Error::Io(_))
        ));
    }
}
