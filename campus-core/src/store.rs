//! The in-session event store.
//!
//! `EventStore` is the single source of truth for the event collection: a
//! lazily-loaded in-memory cache backed by the two files in `storage`, with
//! a publish/subscribe channel so independent consumers stay consistent
//! within a session. Construct one at application start and pass it by
//! reference; there is deliberately no global instance.
//!
//! All operations are synchronous and strictly serialized through
//! `&mut self`. Every successful mutation persists the full collection
//! before notifying subscribers. Cross-process writers are only reconciled
//! through [`EventStore::refresh`].

use std::path::Path;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::classify::can_register;
use crate::error::{CampusError, CampusResult};
use crate::event::{Event, EventPatch, NewEvent};
use crate::seed::{sample_events, SEED_VERSION};
use crate::storage::Storage;

/// Notification delivered to subscribers after each successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Added(String),
    Updated(String),
    Deleted(String),
    Registered(String),
    Refreshed,
}

/// Handle returned by [`EventStore::subscribe`]; pass back to
/// [`EventStore::unsubscribe`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionToken(u64);

type Callback = Box<dyn FnMut(&StoreChange)>;

pub struct EventStore {
    storage: Storage,
    cache: Option<Vec<Event>>,
    subscribers: Vec<(SubscriptionToken, Callback)>,
    next_token: u64,
}

impl EventStore {
    /// Open a store over the given data directory. Nothing is read until
    /// first access.
    pub fn open(dir: &Path) -> EventStore {
        EventStore {
            storage: Storage::new(dir),
            cache: None,
            subscribers: Vec::new(),
            next_token: 0,
        }
    }

    pub fn dir(&self) -> &Path {
        self.storage.dir()
    }

    /// Current collection. Loads from disk (seeding if necessary) on first
    /// access; later calls return the cached copy.
    pub fn events(&mut self) -> &[Event] {
        self.ensure_loaded();
        self.cache.as_deref().unwrap_or_default()
    }

    /// Owned snapshot of the collection.
    pub fn list(&mut self) -> Vec<Event> {
        self.events().to_vec()
    }

    /// Look up an event by id. Missing ids are not an error.
    pub fn get(&mut self, id: &str) -> Option<&Event> {
        self.ensure_loaded();
        self.cache
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|e| e.id == id)
    }

    /// Append a new event, assigning it a fresh unique id. Returns the
    /// created record.
    pub fn add(&mut self, draft: NewEvent) -> CampusResult<Event> {
        self.ensure_loaded();
        let event = draft.with_id(Uuid::new_v4().to_string());

        self.cache
            .get_or_insert_with(Vec::new)
            .push(event.clone());
        self.persist()?;
        self.notify(&StoreChange::Added(event.id.clone()));
        Ok(event)
    }

    /// Merge a partial set of field changes onto the event with the given
    /// id. Returns the updated record.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> CampusResult<Event> {
        self.ensure_loaded();
        let Some(event) = self.find_mut(id) else {
            return Err(CampusError::EventNotFound(id.to_string()));
        };

        patch.apply(event);
        let updated = event.clone();
        self.persist()?;
        self.notify(&StoreChange::Updated(updated.id.clone()));
        Ok(updated)
    }

    /// Remove the event with the given id. Returns `false` (leaving the
    /// collection untouched) when the id is absent.
    pub fn delete(&mut self, id: &str) -> CampusResult<bool> {
        self.ensure_loaded();
        let Some(events) = self.cache.as_mut() else {
            return Ok(false);
        };

        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Ok(false);
        }

        self.persist()?;
        self.notify(&StoreChange::Deleted(id.to_string()));
        Ok(true)
    }

    /// Register one attendee for an event, checking eligibility against
    /// the local calendar date.
    pub fn register(&mut self, id: &str) -> CampusResult<Event> {
        self.register_on(id, Local::now().date_naive())
    }

    /// Register one attendee, checking eligibility against the given date.
    ///
    /// Each call re-checks eligibility and adds exactly one registration;
    /// there is no caller-identity dedup. Failure reasons distinguish a
    /// full event from one that is no longer accepting registrations.
    pub fn register_on(&mut self, id: &str, today: NaiveDate) -> CampusResult<Event> {
        self.ensure_loaded();
        let Some(event) = self.find_mut(id) else {
            return Err(CampusError::EventNotFound(id.to_string()));
        };

        if !can_register(event, today) {
            let at_capacity = event
                .max_capacity
                .is_some_and(|capacity| event.attendees >= capacity);
            return Err(if at_capacity {
                CampusError::FullyBooked
            } else {
                CampusError::RegistrationClosed
            });
        }

        event.attendees += 1;
        let updated = event.clone();
        self.persist()?;
        self.notify(&StoreChange::Registered(updated.id.clone()));
        Ok(updated)
    }

    /// Register interest in collection changes. The callback fires after
    /// every successful mutation, in subscription order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionToken
    where
        F: FnMut(&StoreChange) + 'static,
    {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.subscribers.push((token, Box::new(callback)));
        token
    }

    pub fn unsubscribe(&mut self, token: SubscriptionToken) {
        self.subscribers.retain(|(t, _)| *t != token);
    }

    /// Drop the cached collection and reload from disk, reconciling writes
    /// made by another process. Subscribers are notified.
    pub fn refresh(&mut self) {
        self.cache = None;
        self.ensure_loaded();
        self.notify(&StoreChange::Refreshed);
    }

    fn ensure_loaded(&mut self) {
        if self.cache.is_some() {
            return;
        }

        let events = match self.storage.load(SEED_VERSION) {
            Some(events) => events,
            None => {
                let seeded = sample_events();
                if let Err(e) = self.storage.save(&seeded, SEED_VERSION) {
                    tracing::warn!(error = %e, "failed to persist seeded event collection");
                }
                seeded
            }
        };
        self.cache = Some(events);
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Event> {
        self.cache
            .as_mut()
            .and_then(|events| events.iter_mut().find(|e| e.id == id))
    }

    fn persist(&mut self) -> CampusResult<()> {
        let events = self.cache.as_deref().unwrap_or_default();
        self.storage.save(events, SEED_VERSION)
    }

    fn notify(&mut self, change: &StoreChange) {
        for (_, callback) in &mut self.subscribers {
            callback(change);
        }
    }
}
