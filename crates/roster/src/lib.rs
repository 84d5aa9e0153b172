//! Roster - list screens and notices for a staffing desk.
//!
//! The staffing desk keeps five lists: engineers, projects, clients,
//! contracts and monthly work reports. Each one is a [`views::ListScreen`]
//! over a fixed [`roster_seeker::QueryConfig`] from [`screens`], fed by
//! the mock data in [`fixtures`]. Feedback goes through a
//! [`roster_toast::Toaster`] via [`notify`].
//!
//! ```rust
//! use roster::{fixtures, screens, views::ListScreen};
//! use roster_seeker::Sort;
//!
//! let data = fixtures::load().unwrap();
//!
//! let mut screen = ListScreen::new("engineers", screens::engineers());
//! screen.set_filter("status", "available");
//! screen.set_sort(Sort::desc("rating"));
//!
//! let view = screen.render(&data.engineers);
//! assert!(view.items.iter().all(|e| e.status.as_str() == "available"));
//! assert!(view.items.windows(2).all(|w| w[0].rating >= w[1].rating));
//! ```

pub mod cli;
pub mod error;
pub mod fixtures;
pub mod notify;
pub mod records;
pub mod screens;
pub mod settings;
pub mod views;

pub use error::{Result, RosterError};
pub use fixtures::Fixtures;
pub use records::{
    Availability, Client, ClientStatus, Contract, ContractStatus, Engineer, Project,
    ProjectStatus, ReportStatus, WorkReport,
};
pub use screens::Screen;
pub use settings::{PageSizes, Settings};
