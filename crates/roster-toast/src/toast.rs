//! Toast data types.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique id from a process-wide counter.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        // fetch_add wraps on overflow
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Neutral styling.
    #[default]
    Default,
    /// Error or irreversible-action styling.
    Destructive,
}

/// Optional action button shown on a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastAction {
    /// Button label.
    pub label: String,
    /// Text for assistive technology describing what the action does.
    pub alt_text: String,
}

impl ToastAction {
    /// Creates an action whose alt text is its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            alt_text: label.clone(),
            label,
        }
    }

    /// Sets the alt text.
    #[must_use]
    pub fn alt_text(mut self, text: impl Into<String>) -> Self {
        self.alt_text = text.into();
        self
    }
}

/// A notice held by the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique id, assigned at enqueue time.
    pub id: ToastId,
    /// Headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Action button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ToastAction>,
    /// Visual variant.
    pub variant: Variant,
    /// `false` once dismissed; the toast stays in the queue until removed.
    pub open: bool,
    /// When the toast was enqueued.
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Applies a patch in place. Fields left `None` in the patch are kept.
    pub fn apply(&mut self, patch: &ToastPatch) {
        if let Some(title) = &patch.title {
            self.title = Some(title.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(action) = &patch.action {
            self.action = action.clone();
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
        if let Some(open) = patch.open {
            self.open = open;
        }
    }
}

/// Fields for a new toast.
///
/// ```
/// use roster_toast::{NewToast, Variant};
///
/// let input = NewToast::new()
///     .title("Contract saved")
///     .description("Sato / Core banking, from 2024-10-01");
/// assert_eq!(input.variant, Variant::Default);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewToast {
    pub title: Option<String>,
    pub description: Option<String>,
    pub action: Option<ToastAction>,
    pub variant: Variant,
}

impl NewToast {
    /// Empty input.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Shorthand for the destructive variant.
    #[must_use]
    pub fn destructive(self) -> Self {
        self.variant(Variant::Destructive)
    }

    /// Turns the input into an open toast with a fresh id.
    pub fn into_toast(self) -> Toast {
        Toast {
            id: ToastId::next(),
            title: self.title,
            description: self.description,
            action: self.action,
            variant: self.variant,
            open: true,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for an existing toast.
///
/// `action` is doubly optional: `Some(None)` removes the action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub action: Option<Option<ToastAction>>,
    pub variant: Option<Variant>,
    pub open: Option<bool>,
}

impl ToastPatch {
    /// Empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: Option<ToastAction>) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }
}
