//! FocusFox API types and definitions
//!
//! This crate defines the request/response types for the FocusFox HTTP API,
//! shared between the server and anything that wants to talk to it.

pub mod error;
pub mod requests;
pub mod responses;

pub use error::{ApiError, FieldError};

// Re-export the domain types that appear on the wire
pub use focusfox_core::{PlanEntry, TimeSpan};

/// Binds a request type to the route that serves it
pub trait ApiEndpoint {
    /// Route path, relative to the router root
    const PATH: &'static str;
}
