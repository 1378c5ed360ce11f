//! Library template created with FerrisUp

//! kennel-core: transport-agnostic core for the Kennel dog registry.
//!
//! - `validate`: payload and id checks
//! - `gateway`: the persistence contract handlers talk to
//! - `service`: one handler per operation
//! - `errors`: error taxonomy and the status/body mapping

pub mod config;
pub mod dog;
pub mod errors;
pub mod gateway;
#[cfg(feature = "memory")]
pub mod memory;
pub mod service;
pub mod validate;

pub use config::{KennelConfig, KennelConfigSnapshot};
pub use dog::{Dog, DogId, DogPatch, NewDog};
pub use errors::{ErrorKind, GatewayError, GatewayResult, KennelError, KennelResult, ValidationError};
pub use gateway::DogGateway;
#[cfg(feature = "memory")]
pub use memory::MemoryGateway;
pub use service::{DogService, Operation, Reply};
