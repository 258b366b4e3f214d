//! The admin session gate
//!
//! [`SessionGate`] owns the single authenticated flag for the current tab. It
//! is restored from a [`SessionStore`] on construction, changed only by
//! [`SessionGate::login`] and [`SessionGate::logout`], and mirrored back into
//! the store on every change so a page reload keeps it.

use crate::config::GateConfig;
use crate::credentials::Credentials;
use crate::store::SessionStore;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Whether the current session may see the admin UI
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthStatus {
    #[default]
    Anonymous,
    Authenticated,
}

impl AuthStatus {
    /// Interpret a stored flag. Only the exact literal `"true"` authenticates.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(GateConfig::AUTHENTICATED_VALUE) => Self::Authenticated,
            _ => Self::Anonymous,
        }
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::Authenticated => f.write_str("authenticated"),
        }
    }
}

/// Handle returned by [`SessionGate::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(AuthStatus)>;

/// Single-pair credential check plus a tab-scoped authenticated flag.
///
/// All methods take `&self`; the gate is meant to be shared through an `Rc`
/// on a single UI thread.
pub struct SessionGate<S: SessionStore> {
    store: RefCell<S>,
    credentials: Credentials,
    status: Cell<AuthStatus>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

impl<S: SessionStore> SessionGate<S> {
    /// Create a gate accepting the built-in admin credentials
    pub fn new(store: S) -> Self {
        Self::with_credentials(store, Credentials::default())
    }

    /// Create a gate accepting `credentials`, restoring state from `store`
    pub fn with_credentials(store: S, credentials: Credentials) -> Self {
        let status = match store.get(GateConfig::STORAGE_KEY) {
            Ok(stored) => AuthStatus::from_stored(stored.as_deref()),
            Err(e) => {
                debug!(error = %e, "Session storage unreadable, starting anonymous");
                AuthStatus::Anonymous
            }
        };
        debug!(%status, "Restored admin session");

        Self {
            store: RefCell::new(store),
            credentials,
            status: Cell::new(status),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status().is_authenticated()
    }

    /// Check the pair and authenticate on an exact match.
    ///
    /// Returns `false` and leaves the state untouched when either half is wrong.
    pub fn login(&self, username: &str, password: &str) -> bool {
        if !self.credentials.matches(username, password) {
            warn!(username, "Rejected admin login");
            return false;
        }

        if let Err(e) = self
            .store
            .borrow_mut()
            .set(GateConfig::STORAGE_KEY, GateConfig::AUTHENTICATED_VALUE)
        {
            warn!(error = %e, "Failed to persist admin session flag");
        }

        info!(username, "Admin logged in");
        self.transition(AuthStatus::Authenticated);
        true
    }

    /// Drop back to anonymous and clear the stored flag
    pub fn logout(&self) {
        if let Err(e) = self.store.borrow_mut().remove(GateConfig::STORAGE_KEY) {
            warn!(error = %e, "Failed to clear admin session flag");
        }

        info!("Admin logged out");
        self.transition(AuthStatus::Anonymous);
    }

    /// Register an observer.
    ///
    /// The callback runs immediately with the current status and then after
    /// every status change, synchronously.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AuthStatus) + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);

        let callback: Subscriber = Rc::new(callback);
        self.subscribers.borrow_mut().push((id, callback.clone()));
        callback(self.status());
        id
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub, _)| *sub != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Borrow the backing store
    pub fn store(&self) -> Ref<'_, S> {
        self.store.borrow()
    }

    pub fn into_store(self) -> S {
        self.store.into_inner()
    }

    fn transition(&self, next: AuthStatus) {
        let previous = self.status.replace(next);
        if previous == next {
            return;
        }
        debug!(from = %previous, to = %next, "Admin session transition");

        // Snapshot so callbacks can re-enter the gate
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            // A callback re-entered and changed status; that transition already
            // notified everyone with the newer value
            if self.status.get() != next {
                break;
            }
            callback(next);
        }
    }
}

impl<S: SessionStore> fmt::Debug for SessionGate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("status", &self.status())
            .field("credentials", &self.credentials)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
