//! Settings file.
//!
//! ```yaml
//! page_sizes:
//!   engineers: 25
//!   work_reports: 50
//! toasts:
//!   limit: 1
//!   remove_delay_ms: 1000000
//! ```
//!
//! Every key is optional.

use std::path::Path;

use roster_seeker::QueryConfig;
use roster_toast::{Toaster, ToasterConfig};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::screens::{
    Screen, CLIENTS_PAGE_SIZE, CONTRACTS_PAGE_SIZE, ENGINEERS_PAGE_SIZE, PROJECTS_PAGE_SIZE,
    WORK_REPORTS_PAGE_SIZE,
};

/// Rows per page for each list screen. 0 shows everything on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSizes {
    pub engineers: usize,
    pub projects: usize,
    pub clients: usize,
    pub contracts: usize,
    pub work_reports: usize,
}

impl PageSizes {
    pub fn get(&self, screen: Screen) -> usize {
        match screen {
            Screen::Engineers => self.engineers,
            Screen::Projects => self.projects,
            Screen::Clients => self.clients,
            Screen::Contracts => self.contracts,
            Screen::WorkReports => self.work_reports,
        }
    }
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            engineers: ENGINEERS_PAGE_SIZE,
            projects: PROJECTS_PAGE_SIZE,
            clients: CLIENTS_PAGE_SIZE,
            contracts: CONTRACTS_PAGE_SIZE,
            work_reports: WORK_REPORTS_PAGE_SIZE,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_sizes: PageSizes,
    pub toasts: ToasterConfig,
}

impl Settings {
    /// Parses settings from YAML. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, "<inline>")
    }

    /// Reads settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();
        let yaml = std::fs::read_to_string(path).map_err(|e| RosterError::Settings {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?;
        let settings = Self::parse(&yaml, &source_name)?;
        tracing::debug!(path = %source_name, "loaded settings");
        Ok(settings)
    }

    fn parse(yaml: &str, source_name: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| RosterError::Settings {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Applies the configured page size for `screen`.
    pub fn apply<T>(&self, screen: Screen, config: QueryConfig<T>) -> QueryConfig<T> {
        config.page_size(self.page_sizes.get(screen))
    }

    /// A toast queue with the configured limit and removal delay.
    pub fn toaster(&self) -> Toaster {
        Toaster::new(self.toasts)
    }
}
