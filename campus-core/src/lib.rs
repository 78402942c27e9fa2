//! Core library for the campus events toolkit.
//!
//! This crate owns everything below the presentation layer:
//! - `event`: the event record and its supporting types
//! - `classify`: pure lifecycle/seat-status derivation and the
//!   registration-eligibility gate
//! - `store`: the persistent, observable event collection
//! - `filter`, `stats`, `bookmarks`, `calendar_link`: search, dashboard
//!   aggregates, saved events and calendar-export helpers

pub mod bookmarks;
pub mod calendar_link;
pub mod classify;
pub mod error;
pub mod event;
pub mod filter;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod store;

pub use classify::{can_register, lifecycle_status, seat_status, LifecycleStatus, SeatStatus};
pub use error::{CampusError, CampusResult};
pub use event::{Event, EventCategory, EventMode, EventPatch, NewEvent};
pub use store::{EventStore, StoreChange, SubscriptionToken};
