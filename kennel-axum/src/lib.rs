//! kennel-axum: Axum transport for Kennel.
//!
//! Mounts the dog handlers under `/dogs`, renders replies and errors as JSON,
//! and wraps every route in request-id, tracing and panic-boundary middleware.

pub mod app;
pub mod middlewares;
pub mod rest;
pub mod state;
mod error;
pub use error::KennelAxumError;
pub use state::KennelState;

pub use app::{kennel, KennelApp};
pub use rest::{dog_router, RestReply};
