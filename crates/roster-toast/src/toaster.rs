//! The toast queue shell: subscribers and deferred removal around
//! [`reduce`].

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Instant;

use tracing::debug;

use crate::config::ToasterConfig;
use crate::reducer::{reduce, Action};
use crate::toast::{NewToast, Toast, ToastId, ToastPatch};

type Listener = Arc<dyn Fn(&[Toast]) + Send + Sync>;

#[derive(Default)]
struct Inner {
    toasts: Vec<Toast>,
    /// Removal deadlines for dismissed toasts.
    pending: HashMap<ToastId, Instant>,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
    /// States waiting to be broadcast, oldest first.
    outbox: VecDeque<Vec<Toast>>,
    /// Set while some dispatch is draining `outbox`.
    delivering: bool,
}

/// A toast queue shared by every surface that shows toasts.
///
/// Cloning is cheap and yields a handle to the same queue. All mutations go
/// through [`toast`](Toaster::toast), [`update`](Toaster::update),
/// [`dismiss`](Toaster::dismiss) and [`remove`](Toaster::remove), and each
/// one broadcasts the full new state to every subscriber.
///
/// Broadcasts are serialized: states go out in the order the mutations were
/// applied, and each state reaches every subscriber before the next one
/// goes out. A mutation made while a broadcast is running (from a listener,
/// or from another thread) queues its state, and the running broadcast
/// delivers it next. So every subscriber sees the same sequence and ends on
/// the current state, but such a nested or concurrent call may return
/// before its own state has been delivered.
///
/// Dismissing a toast only closes it. The removal happens
/// [`remove_delay`](ToasterConfig::remove_delay) later, when the host event
/// loop calls [`tick`](Toaster::tick) (use [`next_deadline`](Toaster::next_deadline)
/// to schedule the wake-up).
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use roster_toast::{NewToast, Toaster};
///
/// let toaster = Toaster::with_defaults();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let _subscription = toaster.subscribe(move |toasts| {
///     sink.lock().unwrap().push(toasts.len());
/// });
///
/// let handle = toaster.toast(NewToast::new().title("Engineer saved"));
/// handle.dismiss();
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 1]);
/// assert!(!toaster.toasts()[0].open);
/// ```
#[derive(Clone)]
pub struct Toaster {
    config: ToasterConfig,
    inner: Arc<Mutex<Inner>>,
}

impl Toaster {
    /// Creates an empty queue.
    pub fn new(config: ToasterConfig) -> Self {
        Self {
            config,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Creates an empty queue with [`ToasterConfig::default`].
    pub fn with_defaults() -> Self {
        Self::new(ToasterConfig::default())
    }

    /// The queue's configuration.
    pub fn config(&self) -> &ToasterConfig {
        &self.config
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Enqueues a new open toast and returns a handle to it.
    ///
    /// If the queue is full the oldest toasts are dropped.
    pub fn toast(&self, input: NewToast) -> ToastHandle {
        let toast = input.into_toast();
        let id = toast.id;
        self.dispatch(Action::Add(toast), Instant::now());
        ToastHandle {
            id,
            toaster: self.clone(),
        }
    }

    /// Merges `patch` into toast `id`. Does nothing if it is gone.
    pub fn update(&self, id: ToastId, patch: ToastPatch) {
        self.dispatch(Action::Update(id, patch), Instant::now());
    }

    /// Closes toast `id`, or every toast when `None`, and schedules the
    /// removal.
    pub fn dismiss(&self, id: Option<ToastId>) {
        self.dispatch(Action::Dismiss(id), Instant::now());
    }

    /// Deletes toast `id`, or every toast when `None`, right away. Any
    /// pending removal for it is cancelled.
    pub fn remove(&self, id: Option<ToastId>) {
        self.dispatch(Action::Remove(id), Instant::now());
    }

    /// Registers a listener called with the full toast list after every
    /// change. Dropping the returned [`Subscription`] unregisters it.
    ///
    /// Listeners run outside the queue's lock, so they may call back into
    /// the toaster. The resulting state is delivered once the current
    /// broadcast has reached every listener.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[Toast]) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    // ========================================================================
    // Timers
    // ========================================================================

    /// Fires every removal that is due now. See [`Toaster::tick_at`].
    pub fn tick(&self) -> usize {
        self.tick_at(Instant::now())
    }

    /// Fires every removal whose deadline is at or before `now` and returns
    /// how many fired.
    pub fn tick_at(&self, now: Instant) -> usize {
        let due: Vec<ToastId> = {
            let inner = self.lock();
            let mut due: Vec<(ToastId, Instant)> = inner
                .pending
                .iter()
                .filter(|(_, deadline)| **deadline <= now)
                .map(|(id, deadline)| (*id, *deadline))
                .collect();
            due.sort_by_key(|(id, deadline)| (*deadline, *id));
            due.into_iter().map(|(id, _)| id).collect()
        };

        for id in &due {
            self.dispatch(Action::Remove(Some(*id)), now);
        }
        due.len()
    }

    /// The earliest pending removal, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.lock().pending.values().min().copied()
    }

    /// Number of dismissed toasts waiting for removal.
    pub fn pending_removals(&self) -> usize {
        self.lock().pending.len()
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Snapshot of the queue, newest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().toasts.clone()
    }

    /// Looks up one toast.
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.lock().toasts.iter().find(|t| t.id == id).cloned()
    }

    /// Number of toasts in the queue, open or closed.
    pub fn len(&self) -> usize {
        self.lock().toasts.len()
    }

    /// Whether the queue holds no toasts.
    pub fn is_empty(&self) -> bool {
        self.lock().toasts.is_empty()
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // State stays consistent across a panicking listener: listeners
        // never run under the lock.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, action: Action, now: Instant) {
        let kind = action.kind();
        let target = action.target();

        {
            let mut guard = self.lock();
            let inner = &mut *guard;

            if let Action::Dismiss(dismissed) = &action {
                let deadline = now + self.config.remove_delay;
                for toast in &inner.toasts {
                    if dismissed.is_none() || *dismissed == Some(toast.id) {
                        // An earlier dismissal keeps its deadline
                        inner.pending.entry(toast.id).or_insert(deadline);
                    }
                }
            }

            let toasts = std::mem::take(&mut inner.toasts);
            inner.toasts = reduce(toasts, action, self.config.effective_limit());

            // Only closed toasts wait for removal: evicted, removed and
            // reopened ones drop their timer
            let Inner {
                toasts, pending, ..
            } = &mut *inner;
            pending.retain(|id, _| toasts.iter().any(|t| t.id == *id && !t.open));

            debug!(
                action = kind,
                id = target.map(|id| id.get()),
                len = inner.toasts.len(),
                pending = inner.pending.len(),
                "toast dispatch"
            );

            let snapshot = inner.toasts.clone();
            inner.outbox.push_back(snapshot);
            if inner.delivering {
                return;
            }
            inner.delivering = true;
        }

        self.deliver();
    }

    /// Drains the outbox, one state to every listener at a time.
    fn deliver(&self) {
        let _delivering = Delivering(self);
        loop {
            let (snapshot, listeners) = {
                let mut inner = self.lock();
                let Some(snapshot) = inner.outbox.pop_front() else {
                    inner.delivering = false;
                    return;
                };
                let listeners: Vec<Listener> = inner
                    .listeners
                    .iter()
                    .map(|(_, listener)| Arc::clone(listener))
                    .collect();
                (snapshot, listeners)
            };

            for listener in listeners {
                listener(&snapshot);
            }
        }
    }
}

/// Releases the delivery flag if a listener panics mid-broadcast, so the
/// next mutation starts a fresh one.
struct Delivering<'a>(&'a Toaster);

impl Drop for Delivering<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut inner = self.0.lock();
            inner.outbox.clear();
            inner.delivering = false;
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for Toaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Toaster")
            .field("config", &self.config)
            .field("toasts", &inner.toasts)
            .field("pending", &inner.pending.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Handle returned by [`Toaster::toast`], bound to one toast id.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: ToastId,
    toaster: Toaster,
}

impl ToastHandle {
    /// The toast's id.
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Closes this toast.
    pub fn dismiss(&self) {
        self.toaster.dismiss(Some(self.id));
    }

    /// Patches this toast.
    pub fn update(&self, patch: ToastPatch) {
        self.toaster.update(self.id, patch);
    }
}

/// A registered listener. Dropping it (or calling
/// [`unsubscribe`](Subscription::unsubscribe)) unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<Inner>>,
}

impl Subscription {
    /// Unregisters the listener.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
