// Resource module
// Schedulable rows of the grid (people, rooms, machines)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields every resource type must expose to be placed on the grid.
///
/// Callers with richer records (hourly rates, departments, ...) implement
/// this on their own types instead of converting to [`Resource`].
pub trait BaseResource {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn color(&self) -> &str;
    fn organization_id(&self) -> Option<&str> {
        None
    }
}

/// A schedulable entity occupying one grid row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    /// Caller-specific fields carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Resource {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            organization_id: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }
}

impl BaseResource for Resource {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }
}
