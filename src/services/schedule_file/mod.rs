//! JSON schedule documents.
//!
//! A schedule file carries the resources and events of one rendering
//! session. Either list may be absent, which the scheduler shows as still
//! loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::models::resource::Resource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

impl Schedule {
    pub fn resources(&self) -> Option<&[Resource]> {
        self.resources.as_deref()
    }

    pub fn events(&self) -> Option<&[Event]> {
        self.events.as_deref()
    }

    pub fn find_resource(&self, id: &str) -> Option<&Resource> {
        self.resources.as_ref()?.iter().find(|resource| resource.id == id)
    }
}

pub fn load_schedule(path: &Path) -> Result<Schedule> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule from {}", path.display()))?;
    let schedule: Schedule = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize schedule from {}", path.display()))?;

    log::info!(
        "Loaded schedule from {}: {} resources, {} events",
        path.display(),
        schedule.resources.as_ref().map_or(0, Vec::len),
        schedule.events.as_ref().map_or(0, Vec::len)
    );
    Ok(schedule)
}

pub fn save_schedule(path: &Path, schedule: &Schedule) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(schedule)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write schedule to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schedule.json");
        fs::write(
            &path,
            r##"{
                "resources": [{"id": "1", "name": "Alice", "color": "#2196f3", "hourlyRate": 45}],
                "events": [{"id": "e1", "resourceId": "1", "title": "Shift",
                            "start": "2024-01-15T09:00:00Z", "end": "2024-01-15T17:00:00Z"}]
            }"##,
        )
        .unwrap();

        let schedule = load_schedule(&path).unwrap();
        assert_eq!(schedule.resources().map(<[Resource]>::len), Some(1));
        assert_eq!(schedule.events().map(<[Event]>::len), Some(1));
        assert_eq!(schedule.find_resource("1").map(|r| r.name.as_str()), Some("Alice"));
        assert!(schedule.find_resource("2").is_none());
    }

    #[test]
    fn test_missing_lists_stay_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schedule.json");
        fs::write(&path, r#"{"resources": []}"#).unwrap();

        let schedule = load_schedule(&path).unwrap();
        assert_eq!(schedule.resources().map(<[Resource]>::len), Some(0));
        assert!(schedule.events().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("schedule.json");
        let schedule = Schedule {
            resources: Some(vec![Resource::new("1", "Alice", "#2196f3")]),
            events: Some(vec![Event::new(
                "e1",
                "1",
                "2024-01-15T09:00:00Z",
                "2024-01-15T17:00:00Z",
                "Shift",
            )]),
        };

        save_schedule(&path, &schedule).unwrap();
        assert_eq!(load_schedule(&path).unwrap(), schedule);
    }

    #[test]
    fn test_malformed_document_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_schedule(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }
}
