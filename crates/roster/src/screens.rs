//! Per-screen query configurations.
//!
//! Each list screen declares once which fields can be searched, filtered
//! and sorted, and how many rows it shows per page. Page sizes can be
//! overridden from [`Settings`](crate::Settings).

use std::fmt;
use std::str::FromStr;

use roster_seeker::{FilterValue, QueryConfig, SortKind};

use crate::error::RosterError;
use crate::records::{Client, Contract, Engineer, Project, WorkReport};

pub const ENGINEERS_PAGE_SIZE: usize = 10;
pub const PROJECTS_PAGE_SIZE: usize = 10;
pub const CLIENTS_PAGE_SIZE: usize = 10;
pub const CONTRACTS_PAGE_SIZE: usize = 10;
pub const WORK_REPORTS_PAGE_SIZE: usize = 20;

/// Reads a threshold filter. `None` when the value is not a number.
fn threshold(value: &FilterValue) -> Option<f64> {
    match value {
        FilterValue::Number(n) => Some(n.to_f64()),
        FilterValue::Text(text) => text.trim().parse().ok(),
        FilterValue::All | FilterValue::Bool(_) => None,
    }
}

/// Engineers: search by name, email or skill; `min_rating` keeps engineers
/// rated at least that high.
pub fn engineers() -> QueryConfig<Engineer> {
    QueryConfig::new()
        .searchable("name")
        .searchable("email")
        .searchable("skills")
        .filterable("status")
        .filterable("skills")
        .filterable_with("min_rating", |e: &Engineer, value| {
            threshold(value).map_or(true, |min| e.rating >= min)
        })
        .sortable("name", SortKind::Text)
        .sortable("years_experience", SortKind::Number)
        .sortable("rate", SortKind::Number)
        .sortable("rating", SortKind::Number)
        .sortable("available_from", SortKind::Date)
        .page_size(ENGINEERS_PAGE_SIZE)
        .build()
}

pub fn projects() -> QueryConfig<Project> {
    QueryConfig::new()
        .searchable("name")
        .searchable("client")
        .searchable("skills")
        .filterable("status")
        .filterable("client")
        .filterable("skills")
        .sortable("name", SortKind::Text)
        .sortable("client", SortKind::Text)
        .sortable("budget", SortKind::Number)
        .sortable("start_date", SortKind::Date)
        .sortable("end_date", SortKind::Date)
        .page_size(PROJECTS_PAGE_SIZE)
        .build()
}

pub fn clients() -> QueryConfig<Client> {
    QueryConfig::new()
        .searchable("name")
        .searchable("industry")
        .searchable("contact")
        .filterable("status")
        .filterable("industry")
        .filterable_with("min_rating", |c: &Client, value| {
            threshold(value).map_or(true, |min| c.rating >= min)
        })
        .sortable("name", SortKind::Text)
        .sortable("rating", SortKind::Number)
        .sortable("contracted_since", SortKind::Date)
        .page_size(CLIENTS_PAGE_SIZE)
        .build()
}

pub fn contracts() -> QueryConfig<Contract> {
    QueryConfig::new()
        .searchable("engineer")
        .searchable("project")
        .searchable("client")
        .filterable("status")
        .filterable("client")
        .sortable("engineer", SortKind::Text)
        .sortable("client", SortKind::Text)
        .sortable("monthly_rate", SortKind::Number)
        .sortable("start_date", SortKind::Date)
        .sortable("end_date", SortKind::Date)
        .page_size(CONTRACTS_PAGE_SIZE)
        .build()
}

/// Work reports: `month` filters on `YYYY-MM`; `min_hours` keeps reports
/// with at least that many hours.
pub fn work_reports() -> QueryConfig<WorkReport> {
    QueryConfig::new()
        .searchable("engineer")
        .searchable("project")
        .filterable("status")
        .filterable("month")
        .filterable("project")
        .filterable_with("min_hours", |r: &WorkReport, value| {
            threshold(value).map_or(true, |min| r.hours >= min)
        })
        .sortable("engineer", SortKind::Text)
        .sortable("month", SortKind::Text)
        .sortable("hours", SortKind::Number)
        .sortable("submitted_at", SortKind::Date)
        .page_size(WORK_REPORTS_PAGE_SIZE)
        .build()
}

/// The list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Engineers,
    Projects,
    Clients,
    Contracts,
    WorkReports,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Engineers,
        Screen::Projects,
        Screen::Clients,
        Screen::Contracts,
        Screen::WorkReports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Engineers => "engineers",
            Screen::Projects => "projects",
            Screen::Clients => "clients",
            Screen::Contracts => "contracts",
            Screen::WorkReports => "work-reports",
        }
    }

    /// Plural noun for messages.
    pub fn noun(self) -> &'static str {
        match self {
            Screen::WorkReports => "work reports",
            other => other.as_str(),
        }
    }

    /// Every screen name, comma separated.
    pub fn names() -> String {
        Screen::ALL.map(Screen::as_str).join(", ")
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == wanted)
            .ok_or_else(|| RosterError::UnknownScreen(s.to_string()))
    }
}
