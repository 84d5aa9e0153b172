//! Staffing desk records.
//!
//! Every record implements [`Seekable`] so the list screens can search,
//! filter and sort it, and [`TableRow`] so the CLI can print it. Dates are
//! kept as ISO strings (`YYYY-MM-DD`); an empty string means "not set" and
//! sorts last.

use std::fmt;
use std::str::FromStr;

use roster_seeker::{Number, Seekable, Value};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::views::TableRow;

/// Declares a status enum with its wire name.
macro_rules! status {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire name, also used as the filter value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = RosterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| RosterError::UnknownStatus {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

status! {
    /// Whether an engineer can take a new engagement.
    Availability {
        Available => "available",
        Assigned => "assigned",
        /// On leave; not offered to clients.
        Leave => "leave",
    }
}

status! {
    ProjectStatus {
        Planning => "planning",
        Active => "active",
        OnHold => "on_hold",
        Completed => "completed",
    }
}

status! {
    ClientStatus {
        Prospect => "prospect",
        Active => "active",
        Inactive => "inactive",
    }
}

status! {
    ContractStatus {
        Draft => "draft",
        Active => "active",
        Expired => "expired",
        Terminated => "terminated",
    }
}

status! {
    /// Approval state of a monthly work report.
    ReportStatus {
        Draft => "draft",
        Submitted => "submitted",
        Approved => "approved",
        Rejected => "rejected",
    }
}

fn date(text: &str) -> Value<'_> {
    if text.is_empty() {
        Value::None
    } else {
        Value::String(text)
    }
}

fn yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("¥{out}")
}

/// An engineer on the bench or on assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub years_experience: u32,
    /// Monthly rate in yen.
    pub rate: u64,
    pub status: Availability,
    pub rating: f64,
    /// First day the engineer can start; empty when unknown.
    #[serde(default)]
    pub available_from: String,
}

impl Seekable for Engineer {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "name" => Value::String(&self.name),
            "email" => Value::String(&self.email),
            "skills" => Value::List(&self.skills),
            "years_experience" => Value::Number(Number::from(self.years_experience)),
            "rate" => Value::Number(Number::from(self.rate)),
            "status" => Value::String(self.status.as_str()),
            "rating" => Value::Number(Number::F64(self.rating)),
            "available_from" => date(&self.available_from),
            _ => Value::None,
        }
    }
}

impl TableRow for Engineer {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Skills", "Years", "Rate", "Status", "Rating", "From"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.skills.join(", "),
            self.years_experience.to_string(),
            yen(self.rate),
            self.status.to_string(),
            format!("{:.1}", self.rating),
            self.available_from.clone(),
        ]
    }
}

/// A client engagement that needs engineers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    /// Required skills.
    pub skills: Vec<String>,
    pub status: ProjectStatus,
    /// Total budget in yen.
    pub budget: u64,
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl Seekable for Project {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "name" => Value::String(&self.name),
            "client" => Value::String(&self.client),
            "skills" => Value::List(&self.skills),
            "status" => Value::String(self.status.as_str()),
            "budget" => Value::Number(Number::from(self.budget)),
            "start_date" => date(&self.start_date),
            "end_date" => date(&self.end_date),
            _ => Value::None,
        }
    }
}

impl TableRow for Project {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Client", "Skills", "Status", "Budget", "Start", "End"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.client.clone(),
            self.skills.join(", "),
            self.status.to_string(),
            yen(self.budget),
            self.start_date.clone(),
            self.end_date.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: String,
    /// Main contact person.
    pub contact: String,
    pub status: ClientStatus,
    pub rating: f64,
    #[serde(default)]
    pub contracted_since: String,
}

impl Seekable for Client {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "name" => Value::String(&self.name),
            "industry" => Value::String(&self.industry),
            "contact" => Value::String(&self.contact),
            "status" => Value::String(self.status.as_str()),
            "rating" => Value::Number(Number::F64(self.rating)),
            "contracted_since" => date(&self.contracted_since),
            _ => Value::None,
        }
    }
}

impl TableRow for Client {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Industry", "Contact", "Status", "Rating", "Since"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.industry.clone(),
            self.contact.clone(),
            self.status.to_string(),
            format!("{:.1}", self.rating),
            self.contracted_since.clone(),
        ]
    }
}

/// An engineer placed on a project for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub engineer: String,
    pub project: String,
    pub client: String,
    pub status: ContractStatus,
    pub monthly_rate: u64,
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl Seekable for Contract {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "engineer" => Value::String(&self.engineer),
            "project" => Value::String(&self.project),
            "client" => Value::String(&self.client),
            "status" => Value::String(self.status.as_str()),
            "monthly_rate" => Value::Number(Number::from(self.monthly_rate)),
            "start_date" => date(&self.start_date),
            "end_date" => date(&self.end_date),
            _ => Value::None,
        }
    }
}

impl TableRow for Contract {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Engineer", "Project", "Client", "Status", "Monthly", "Start", "End",
    ];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.engineer.clone(),
            self.project.clone(),
            self.client.clone(),
            self.status.to_string(),
            yen(self.monthly_rate),
            self.start_date.clone(),
            self.end_date.clone(),
        ]
    }
}

/// Hours an engineer logged on a project in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkReport {
    pub id: String,
    pub engineer: String,
    pub project: String,
    /// Reporting month, `YYYY-MM`.
    pub month: String,
    pub hours: f64,
    pub status: ReportStatus,
    /// Unset while the report is a draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

impl Seekable for WorkReport {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "engineer" => Value::String(&self.engineer),
            "project" => Value::String(&self.project),
            "month" => Value::String(&self.month),
            "hours" => Value::Number(Number::F64(self.hours)),
            "status" => Value::String(self.status.as_str()),
            "submitted_at" => self.submitted_at.as_deref().map_or(Value::None, date),
            _ => Value::None,
        }
    }
}

impl TableRow for WorkReport {
    const HEADERS: &'static [&'static str] =
        &["ID", "Engineer", "Project", "Month", "Hours", "Status", "Submitted"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.engineer.clone(),
            self.project.clone(),
            self.month.clone(),
            format!("{:.1}", self.hours),
            self.status.to_string(),
            self.submitted_at.clone().unwrap_or_default(),
        ]
    }
}
