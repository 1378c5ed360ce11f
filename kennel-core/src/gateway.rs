use async_trait::async_trait;

use crate::dog::{Dog, DogId, DogPatch, NewDog};
use crate::errors::GatewayResult;

/// Persistence gateway for dogs.
///
/// The gateway owns storage and id assignment. Handlers only ever reach the
/// store through this trait, so any backend (SQL, KV, in-memory) can be
/// injected as `Arc<dyn DogGateway>`.
///
/// Implementations provide whatever atomicity a single call needs; callers add
/// no locking of their own.
#[async_trait]
pub trait DogGateway: Send + Sync {
    /// Store a new dog and return it with its assigned id.
    async fn create(&self, dog: NewDog) -> GatewayResult<Dog>;

    /// Fetch one dog. `Ok(None)` when the id is not stored.
    async fn find_one(&self, id: DogId) -> GatewayResult<Option<Dog>>;

    /// All stored dogs, in whatever order the store yields them.
    async fn find_many(&self) -> GatewayResult<Vec<Dog>>;

    /// Apply `patch` and return the updated dog.
    ///
    /// Fails with `GatewayError::NotFound` when the id is not stored.
    async fn update(&self, id: DogId, patch: DogPatch) -> GatewayResult<Dog>;

    /// Remove a dog.
    ///
    /// Fails with `GatewayError::NotFound` when the id is not stored.
    async fn delete(&self, id: DogId) -> GatewayResult<()>;
}
