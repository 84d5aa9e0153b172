//! Roster Toast - a small notification queue for transient feedback.
//!
//! Toasts tell the user that something happened ("Engineer saved",
//! "Upload failed"). The queue keeps them newest first, caps how many exist
//! at once, and splits closing from deleting:
//!
//! - [`Toaster::dismiss`] marks a toast closed (`open == false`) so the
//!   surface can animate it out, and schedules the removal.
//! - [`Toaster::remove`] deletes it. Removal happens either directly or when
//!   the scheduled deadline passes and the host calls [`Toaster::tick`].
//!
//! Every state change is computed by the pure [`reduce`] function and then
//! broadcast to all subscribers, in registration order, before the call
//! returns.
//!
//! # Process-wide queue
//!
//! Most applications have one queue. [`global`] returns it, and the free
//! functions [`toast`] and [`dismiss`] act on it:
//!
//! ```
//! use roster_toast::{NewToast, Variant};
//!
//! let handle = roster_toast::toast(
//!     NewToast::new()
//!         .title("Upload failed")
//!         .description("report-2024-09.xlsx is not a work report")
//!         .destructive(),
//! );
//! let shown = roster_toast::global().get(handle.id()).unwrap();
//! assert_eq!(shown.variant, Variant::Destructive);
//! roster_toast::dismiss(Some(handle.id()));
//! ```
//!
//! Separate [`Toaster`] instances are independent, which is what tests and
//! multi-window hosts want.

mod config;
mod reducer;
mod toast;
mod toaster;

use once_cell::sync::Lazy;

pub use config::{ToasterConfig, DEFAULT_LIMIT, DEFAULT_REMOVE_DELAY};
pub use reducer::{reduce, Action};
pub use toast::{NewToast, Toast, ToastAction, ToastId, ToastPatch, Variant};
pub use toaster::{Subscription, ToastHandle, Toaster};

static GLOBAL: Lazy<Toaster> = Lazy::new(Toaster::with_defaults);

/// The process-wide queue, created with default settings on first use.
pub fn global() -> &'static Toaster {
    &GLOBAL
}

/// Enqueues a toast on the [`global`] queue.
pub fn toast(input: NewToast) -> ToastHandle {
    global().toast(input)
}

/// Dismisses one toast, or all of them, on the [`global`] queue.
pub fn dismiss(id: Option<ToastId>) {
    global().dismiss(id)
}
