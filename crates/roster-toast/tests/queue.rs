//! Queue behavior as seen from subscribers.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use roster_toast::{NewToast, Toast, ToastAction, ToastPatch, Toaster, ToasterConfig, Variant};
use serial_test::serial;

/// Records the titles and open flags of every broadcast.
fn recorder(toaster: &Toaster) -> (Arc<Mutex<Vec<Vec<(String, bool)>>>>, roster_toast::Subscription) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let subscription = toaster.subscribe(move |toasts: &[Toast]| {
        let snapshot = toasts
            .iter()
            .map(|t| (t.title.clone().unwrap_or_default(), t.open))
            .collect();
        sink.lock().unwrap().push(snapshot);
    });
    (log, subscription)
}

fn snapshot(entries: &[(&str, bool)]) -> Vec<(String, bool)> {
    entries.iter().map(|(t, o)| (t.to_string(), *o)).collect()
}

#[test]
fn newest_toast_replaces_the_previous_one() {
    let toaster = Toaster::with_defaults();
    let (log, _subscription) = recorder(&toaster);

    toaster.toast(NewToast::new().title("A"));
    toaster.toast(NewToast::new().title("B"));

    let toasts = toaster.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title.as_deref(), Some("B"));
    assert!(toasts[0].open);

    assert_eq!(
        *log.lock().unwrap(),
        vec![snapshot(&[("A", true)]), snapshot(&[("B", true)])]
    );
}

#[test]
fn dismiss_closes_then_removes_after_delay() {
    let delay = Duration::from_millis(500);
    let toaster = Toaster::new(ToasterConfig::default().remove_delay(delay));
    let (log, _subscription) = recorder(&toaster);

    let handle = toaster.toast(NewToast::new().title("Saved"));
    handle.dismiss();

    let toasts = toaster.toasts();
    assert_eq!(toasts.len(), 1);
    assert!(!toasts[0].open);

    // Not due yet
    assert_eq!(toaster.tick_at(Instant::now()), 0);
    assert_eq!(toaster.len(), 1);

    let deadline = toaster.next_deadline().unwrap();
    assert_eq!(toaster.tick_at(deadline), 1);
    assert!(toaster.is_empty());
    assert_eq!(toaster.next_deadline(), None);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            snapshot(&[("Saved", true)]),
            snapshot(&[("Saved", false)]),
            snapshot(&[]),
        ]
    );
}

#[test]
fn removal_after_eviction_is_a_noop() {
    let toaster = Toaster::with_defaults();
    let a = toaster.toast(NewToast::new().title("A"));
    a.dismiss();
    toaster.toast(NewToast::new().title("B"));

    let far_future = Instant::now() + Duration::from_secs(10_000);
    assert_eq!(toaster.tick_at(far_future), 0);

    let toasts = toaster.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title.as_deref(), Some("B"));
    assert!(toasts[0].open);
}

#[test]
fn remove_is_idempotent() {
    let toaster = Toaster::new(ToasterConfig::default().limit(3));
    let a = toaster.toast(NewToast::new().title("A"));
    toaster.toast(NewToast::new().title("B"));

    toaster.remove(Some(a.id()));
    let once = toaster.toasts();
    toaster.remove(Some(a.id()));
    assert_eq!(toaster.toasts(), once);

    toaster.remove(None);
    assert!(toaster.is_empty());
}

#[test]
fn dismiss_all_closes_everything() {
    let toaster = Toaster::new(ToasterConfig::default().limit(3));
    toaster.toast(NewToast::new().title("A"));
    toaster.toast(NewToast::new().title("B"));

    toaster.dismiss(None);
    assert!(toaster.toasts().iter().all(|t| !t.open));
    assert_eq!(toaster.pending_removals(), 2);

    let later = Instant::now() + toaster.config().remove_delay + Duration::from_secs(1);
    assert_eq!(toaster.tick_at(later), 2);
    assert!(toaster.is_empty());
}

#[test]
fn update_through_handle() {
    let toaster = Toaster::with_defaults();
    let handle = toaster.toast(
        NewToast::new()
            .title("Uploading")
            .action(ToastAction::new("Cancel")),
    );

    handle.update(
        ToastPatch::new()
            .title("Upload failed")
            .variant(Variant::Destructive)
            .action(None),
    );

    let toast = toaster.get(handle.id()).unwrap();
    assert_eq!(toast.title.as_deref(), Some("Upload failed"));
    assert_eq!(toast.variant, Variant::Destructive);
    assert_eq!(toast.action, None);
    assert!(toast.open);
}

#[test]
fn every_subscriber_sees_the_same_sequence() {
    let toaster = Toaster::new(ToasterConfig::default().limit(2));
    let (first, _s1) = recorder(&toaster);
    let (second, _s2) = recorder(&toaster);

    let a = toaster.toast(NewToast::new().title("A"));
    toaster.toast(NewToast::new().title("B"));
    a.dismiss();
    toaster.remove(Some(a.id()));

    let first = first.lock().unwrap().clone();
    let second = second.lock().unwrap().clone();
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[test]
fn subscribers_are_called_in_registration_order() {
    let toaster = Toaster::with_defaults();
    let order = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&order);
    let _first = toaster.subscribe(move |_| sink.lock().unwrap().push("first"));
    let sink = Arc::clone(&order);
    let _second = toaster.subscribe(move |_| sink.lock().unwrap().push("second"));

    toaster.toast(NewToast::new().title("A"));
    assert_eq!(*order.lock().unwrap(), ["first", "second"]);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let toaster = Toaster::with_defaults();
    let (log, subscription) = recorder(&toaster);

    toaster.toast(NewToast::new().title("A"));
    subscription.unsubscribe();
    assert_eq!(toaster.subscriber_count(), 0);
    toaster.toast(NewToast::new().title("B"));

    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn listener_may_call_back_into_the_toaster() {
    let toaster = Toaster::with_defaults();
    let inner = toaster.clone();
    let seen = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&seen);
    let _subscription = toaster.subscribe(move |toasts| {
        *sink.lock().unwrap() += 1;
        assert_eq!(inner.len(), toasts.len());
    });

    toaster.toast(NewToast::new().title("A"));
    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn state_raised_by_a_listener_follows_the_current_broadcast() {
    let toaster = Toaster::with_defaults();
    let inner = toaster.clone();
    let first = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&first);
    let _s1 = toaster.subscribe(move |toasts: &[Toast]| {
        let titles: Vec<String> = toasts
            .iter()
            .map(|t| t.title.clone().unwrap_or_default())
            .collect();
        let follow_up = titles == ["A"];
        sink.lock().unwrap().push(titles);
        if follow_up {
            inner.toast(NewToast::new().title("B"));
        }
    });
    let second = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&second);
    let _s2 = toaster.subscribe(move |toasts: &[Toast]| {
        let titles: Vec<String> = toasts
            .iter()
            .map(|t| t.title.clone().unwrap_or_default())
            .collect();
        sink.lock().unwrap().push(titles);
    });

    toaster.toast(NewToast::new().title("A"));

    let first = first.lock().unwrap().clone();
    let second = second.lock().unwrap().clone();
    assert_eq!(first, [vec!["A".to_string()], vec!["B".to_string()]]);
    assert_eq!(first, second);

    let current: Vec<String> = toaster
        .toasts()
        .iter()
        .map(|t| t.title.clone().unwrap_or_default())
        .collect();
    assert_eq!(second.last(), Some(&current));
}

#[test]
fn concurrent_mutations_reach_subscribers_in_order() {
    let toaster = Toaster::new(ToasterConfig::default().limit(3));
    let (first, _s1) = recorder(&toaster);
    let (second, _s2) = recorder(&toaster);

    let threads: Vec<_> = (0..4)
        .map(|n| {
            let toaster = toaster.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    let handle = toaster.toast(NewToast::new().title(format!("{n}-{i}")));
                    if i % 3 == 0 {
                        handle.dismiss();
                    }
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }

    let first = first.lock().unwrap().clone();
    let second = second.lock().unwrap().clone();
    // 100 adds plus 36 dismissals
    assert_eq!(first.len(), 136);
    assert_eq!(first, second);

    let current: Vec<(String, bool)> = toaster
        .toasts()
        .iter()
        .map(|t| (t.title.clone().unwrap_or_default(), t.open))
        .collect();
    assert_eq!(first.last(), Some(&current));
}

#[test]
#[serial]
fn global_queue_is_shared() {
    roster_toast::global().remove(None);

    let handle = roster_toast::toast(NewToast::new().title("Contract saved"));
    assert_eq!(roster_toast::global().len(), 1);
    assert_eq!(
        roster_toast::global().get(handle.id()).unwrap().title.as_deref(),
        Some("Contract saved")
    );

    roster_toast::dismiss(Some(handle.id()));
    assert!(!roster_toast::global().get(handle.id()).unwrap().open);

    roster_toast::global().remove(None);
}

#[test]
#[serial]
fn global_queue_uses_default_limit() {
    roster_toast::global().remove(None);

    roster_toast::toast(NewToast::new().title("A"));
    roster_toast::toast(NewToast::new().title("B"));
    assert_eq!(roster_toast::global().len(), roster_toast::DEFAULT_LIMIT);

    roster_toast::global().remove(None);
}
