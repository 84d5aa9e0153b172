//! Mock data set used until a real store is wired in.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::records::{Client, Contract, Engineer, Project, WorkReport};

const FIXTURES_JSON: &str = include_str!("../data/fixtures.json");

/// Every record collection the list screens read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub engineers: Vec<Engineer>,
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub contracts: Vec<Contract>,
    pub work_reports: Vec<WorkReport>,
}

impl Fixtures {
    /// Parses a fixture document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RosterError::Fixtures(e.to_string()))
    }
}

/// Loads the embedded mock data set.
pub fn load() -> Result<Fixtures> {
    let fixtures = Fixtures::from_json(FIXTURES_JSON)?;
    tracing::debug!(
        engineers = fixtures.engineers.len(),
        projects = fixtures.projects.len(),
        clients = fixtures.clients.len(),
        contracts = fixtures.contracts.len(),
        work_reports = fixtures.work_reports.len(),
        "loaded fixtures"
    );
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_fixtures_load() {
        let data = load().unwrap();
        assert_eq!(data.engineers.len(), 25);
        assert_eq!(data.projects.len(), 12);
        assert_eq!(data.clients.len(), 8);
        assert_eq!(data.contracts.len(), 15);
        assert_eq!(data.work_reports.len(), 30);
    }

    #[test]
    fn ids_are_unique() {
        let data = load().unwrap();
        let ids: HashSet<&str> = data.engineers.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), data.engineers.len());
    }

    #[test]
    fn contracts_reference_known_records() {
        let data = load().unwrap();
        let engineers: HashSet<&str> = data.engineers.iter().map(|e| e.name.as_str()).collect();
        let clients: HashSet<&str> = data.clients.iter().map(|c| c.name.as_str()).collect();
        for contract in &data.contracts {
            assert!(engineers.contains(contract.engineer.as_str()), "{}", contract.id);
            assert!(clients.contains(contract.client.as_str()), "{}", contract.id);
        }
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let data = Fixtures::from_json(r#"{"engineers": []}"#).unwrap();
        assert!(data.projects.is_empty());
    }

    #[test]
    fn bad_json_is_reported() {
        let err = Fixtures::from_json("{").unwrap_err();
        assert!(matches!(err, RosterError::Fixtures(_)));
    }
}
