//! Roster Seeker - search, filter, sort and paginate record collections.
//!
//! Every list screen of the staffing desk (engineers, projects, clients,
//! contracts, work reports) runs the same pipeline over its records:
//!
//! 1. free-text search over a fixed set of fields,
//! 2. exact-match filters (with an "all" sentinel),
//! 3. a stable sort on one declared key,
//! 4. fixed-size pagination with the page clamped into range.
//!
//! The pipeline is a pure function of `(records, state, config)`:
//!
//! - [`QueryConfig`] is declared once per screen and names what may be
//!   searched, filtered and sorted, plus the page size.
//! - [`QueryState`] is what the user currently has selected.
//! - [`query`] returns a [`QueryResult`] with the page of records and the
//!   numbers a pager needs.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_seeker::{Number, QueryConfig, QueryState, Seekable, Sort, SortKind, Value};
//!
//! struct Project {
//!     name: String,
//!     skills: Vec<String>,
//!     status: String,
//!     budget: u64,
//! }
//!
//! impl Seekable for Project {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::String(&self.name),
//!             "skills" => Value::List(&self.skills),
//!             "status" => Value::String(&self.status),
//!             "budget" => Value::Number(Number::from(self.budget)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let projects = vec![
//!     Project { name: "Core banking".into(), skills: vec!["Java".into()], status: "open".into(), budget: 9_000_000 },
//!     Project { name: "Claims portal".into(), skills: vec!["React".into()], status: "open".into(), budget: 4_000_000 },
//!     Project { name: "Data lake".into(), skills: vec!["Python".into()], status: "closed".into(), budget: 6_000_000 },
//! ];
//!
//! let config = QueryConfig::new()
//!     .searchable("name")
//!     .searchable("skills")
//!     .filterable("status")
//!     .sortable("budget", SortKind::Number)
//!     .page_size(10)
//!     .build();
//!
//! let mut state = QueryState::new();
//! state.set_filter("status", "open");
//! state.set_sort(Sort::desc("budget"));
//!
//! let result = config.query(&projects, &state);
//! assert_eq!(result.total_matches, 2);
//! assert_eq!(result.items[0].name, "Core banking");
//! ```
//!
//! # Failure model
//!
//! Running a query never fails. Filter keys and sort keys the screen did not
//! declare are ignored, an out-of-range page is clamped, and an empty match
//! set is an ordinary result. [`SeekerError`] only arises when reading
//! [`QueryState`] back from text.

mod collate;
mod config;
mod error;
mod filter;
mod ordering;
mod page;
mod query;
mod search;
mod state;
mod traits;
mod value;

// Re-export public API
pub use collate::{collate, collation_key};
pub use config::{Comparator, Predicate, QueryConfig};
pub use error::{Result, SeekerError};
pub use filter::FilterValue;
pub use ordering::{compare_directed, compare_values, Dir, SortKind};
pub use page::Pagination;
pub use query::{matches_filters, query, select, QueryResult};
pub use search::{matches_search, value_contains};
pub use state::{QueryState, Sort};
pub use traits::Seekable;
pub use value::{Number, Timestamp, Value};
