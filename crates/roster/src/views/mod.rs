//! List views: what a list screen produces and how it is printed.
//!
//! ```rust
//! use roster::views::{list_view, render_table, TableRow};
//!
//! struct Skill(&'static str);
//!
//! impl TableRow for Skill {
//!     const HEADERS: &'static [&'static str] = &["Skill"];
//!     fn to_row(&self) -> Vec<String> {
//!         vec![self.0.to_string()]
//!     }
//! }
//!
//! let view = list_view(vec![Skill("Rust"), Skill("Go")]).build();
//! assert_eq!(render_table(&view.items), "Skill\nRust\nGo\n");
//! ```

mod list_screen;
mod list_view;
mod message;
mod table;

pub use list_screen::ListScreen;
pub use list_view::{list_view, ListViewBuilder, ListViewResult};
pub use message::{Message, MessageLevel};
pub use table::{render_table, TableRow};
