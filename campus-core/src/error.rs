//! Error types for the campus events toolkit.

use thiserror::Error;

/// Errors that can occur in store and helper operations.
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("This event is fully booked")]
    FullyBooked,

    #[error("Registration is closed for this event")]
    RegistrationClosed,

    #[error("Cannot build calendar link: {0}")]
    CalendarLink(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for campus operations.
pub type CampusResult<T> = Result<T, CampusError>;
