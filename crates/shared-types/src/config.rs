use serde::{Deserialize, Serialize};

use crate::{AppError, CategoryFilter};

fn enabled() -> bool {
    true
}

/// Optional page sections and presentation switches.
///
/// Content sections default to on, so a missing or partial config file
/// renders the full site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteFlags {
    #[serde(default = "enabled")]
    pub emergency_contacts: bool,
    #[serde(default = "enabled")]
    pub featured_resources: bool,
    #[serde(default = "enabled")]
    pub external_links: bool,
    /// Disable transitions and hover transforms.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for SiteFlags {
    fn default() -> Self {
        Self {
            emergency_contacts: true,
            featured_resources: true,
            external_links: true,
            reduced_motion: false,
        }
    }
}

/// Initial state of the resources page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ResourceDefaults {
    #[serde(default)]
    pub default_category: CategoryFilter,
}

/// Top-level config file structure matching `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub sections: SiteFlags,
    #[serde(default)]
    pub resources: ResourceDefaults,
}

impl SiteConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        toml::from_str(source).map_err(|e| AppError::invalid_config(e.to_string()))
    }
}
