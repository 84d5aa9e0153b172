//! Shortcuts for raising toasts from screen code.

use roster_toast::{NewToast, ToastHandle, Toaster};

use crate::views::{Message, MessageLevel};

fn input(title: &str, description: Option<&str>) -> NewToast {
    let toast = NewToast::new().title(title);
    match description {
        Some(text) => toast.description(text),
        None => toast,
    }
}

/// Confirms a completed action, e.g. "Engineer saved".
pub fn success(toaster: &Toaster, title: &str, description: Option<&str>) -> ToastHandle {
    toaster.toast(input(title, description))
}

/// Reports a failure with the destructive variant.
pub fn error(toaster: &Toaster, title: &str, description: Option<&str>) -> ToastHandle {
    toaster.toast(input(title, description).destructive())
}

/// Surfaces a view message as a toast.
pub fn message(toaster: &Toaster, message: &Message) -> ToastHandle {
    let title = match message.level {
        MessageLevel::Info => "Note",
        MessageLevel::Success => "Done",
        MessageLevel::Warning => "Warning",
        MessageLevel::Error => "Error",
    };
    toaster.toast(
        input(title, Some(&message.text)).variant(message.level.toast_variant()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_toast::Variant;

    #[test]
    fn success_is_default_variant() {
        let toaster = Toaster::with_defaults();
        let handle = success(&toaster, "Engineer saved", None);
        let toast = toaster.get(handle.id()).unwrap();
        assert_eq!(toast.variant, Variant::Default);
        assert_eq!(toast.description, None);
    }

    #[test]
    fn error_is_destructive() {
        let toaster = Toaster::with_defaults();
        let handle = error(&toaster, "Upload failed", Some("Only .xlsx files are accepted"));
        let toast = toaster.get(handle.id()).unwrap();
        assert_eq!(toast.variant, Variant::Destructive);
        assert_eq!(toast.description.as_deref(), Some("Only .xlsx files are accepted"));
    }

    #[test]
    fn latest_notice_wins() {
        let toaster = Toaster::with_defaults();
        success(&toaster, "Saved", None);
        error(&toaster, "Failed", None);
        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title.as_deref(), Some("Failed"));
    }

    #[test]
    fn message_maps_level() {
        let toaster = Toaster::with_defaults();
        let handle = message(&toaster, &Message::error("No such screen"));
        let toast = toaster.get(handle.id()).unwrap();
        assert_eq!(toast.title.as_deref(), Some("Error"));
        assert_eq!(toast.variant, Variant::Destructive);
    }
}
