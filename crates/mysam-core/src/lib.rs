//! Shared domain types, events, configuration, and errors for mySAM.
//!
//! Every other crate in the workspace depends on this one; it holds the
//! vocabulary of the sales-rep day (activities, moods, ratings, doctors)
//! and the cross-cutting concerns (config, errors, domain events).

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::MySamConfig;
pub use error::{MySamError, Result};
pub use events::DomainEvent;
pub use types::*;
