//! Configuration for the badge service
//!
//! Badge instances and service settings are stored in RON. Attribute values
//! stay as text here; they are parsed into typed settings when the badge
//! registry is built.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::group::hierarchy::DEFAULT_MAX_DESCENDANT_DEPTH;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,

    /// Configured badge instances
    #[serde(default)]
    pub badges: Vec<BadgeDefinition>,

    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Validate every badge and reject duplicate ids
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for badge in &self.badges {
            badge.validate()?;
            if !seen.insert(badge.id) {
                return Err(format!("Badge id {} is configured more than once", badge.id));
            }
        }

        if self.settings.max_descendant_depth == 0 {
            return Err("max_descendant_depth must be at least 1".to_string());
        }

        Ok(())
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerSettings {
    /// Address the API binds to (e.g., "0.0.0.0:8000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

/// One "In Descendant Of Group Type" badge instance
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BadgeDefinition {
    /// Badge id, rendered into the `badge-id-{id}` class
    pub id: i64,

    /// Display name of the badge instance
    pub name: String,

    /// GUID of the group type to check
    #[serde(default)]
    pub group_type: Option<String>,

    /// Icon color (#ffffff); defaults to #0ab4dd when unset or empty
    #[serde(default)]
    pub badge_color: Option<String>,
}

impl BadgeDefinition {
    pub fn validate(&self) -> Result<(), String> {
        if self.id <= 0 {
            return Err(format!("Badge id {} must be positive", self.id));
        }

        if self.name.trim().is_empty() {
            return Err(format!("Badge {} must have a name", self.id));
        }

        Ok(())
    }
}

/// Rendering settings shared by all badges
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    /// Levels below the typed groups followed during descendant expansion
    #[serde(default = "default_max_descendant_depth")]
    pub max_descendant_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_descendant_depth: default_max_descendant_depth(),
        }
    }
}

fn default_max_descendant_depth() -> usize {
    DEFAULT_MAX_DESCENDANT_DEPTH
}
