//! Pure state transitions for the toast queue.
//!
//! [`reduce`] holds every rule about how the queue changes; the
//! [`Toaster`](crate::Toaster) shell only adds timers and subscribers.

use crate::toast::{Toast, ToastId, ToastPatch};

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Prepend a toast, then cap the queue.
    Add(Toast),
    /// Merge a patch into the toast with this id.
    Update(ToastId, ToastPatch),
    /// Close one toast, or every toast when `None`.
    Dismiss(Option<ToastId>),
    /// Delete one toast, or every toast when `None`.
    Remove(Option<ToastId>),
}

impl Action {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Update(..) => "update",
            Action::Dismiss(_) => "dismiss",
            Action::Remove(_) => "remove",
        }
    }

    /// The id this action targets, if it targets one.
    pub fn target(&self) -> Option<ToastId> {
        match self {
            Action::Add(toast) => Some(toast.id),
            Action::Update(id, _) => Some(*id),
            Action::Dismiss(id) | Action::Remove(id) => *id,
        }
    }
}

/// Applies `action` to `toasts` and returns the next state.
///
/// Newest toasts come first. After an `Add`, anything past `limit` is
/// dropped without passing through the closed state. Actions naming an id
/// that is not present leave the state unchanged. A `limit` of 0 is read
/// as 1.
///
/// ```
/// use roster_toast::{reduce, Action, NewToast};
///
/// let a = NewToast::new().title("A").into_toast();
/// let b = NewToast::new().title("B").into_toast();
///
/// let state = reduce(Vec::new(), Action::Add(a), 1);
/// let state = reduce(state, Action::Add(b), 1);
/// assert_eq!(state.len(), 1);
/// assert_eq!(state[0].title.as_deref(), Some("B"));
/// ```
pub fn reduce(mut toasts: Vec<Toast>, action: Action, limit: usize) -> Vec<Toast> {
    match action {
        Action::Add(toast) => {
            toasts.insert(0, toast);
            toasts.truncate(limit.max(1));
        }
        Action::Update(id, patch) => {
            if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                toast.apply(&patch);
            }
        }
        Action::Dismiss(target) => {
            for toast in toasts
                .iter_mut()
                .filter(|t| target.is_none() || target == Some(t.id))
            {
                toast.open = false;
            }
        }
        Action::Remove(None) => toasts.clear(),
        Action::Remove(Some(id)) => toasts.retain(|t| t.id != id),
    }
    toasts
}
