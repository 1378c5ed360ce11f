//! In-memory persistence gateway.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::dog::{Dog, DogId, DogPatch, NewDog};
use crate::errors::{GatewayError, GatewayResult};
use crate::gateway::DogGateway;

#[derive(Debug)]
struct MemoryState {
    dogs: BTreeMap<DogId, Dog>,
    next_id: DogId,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            dogs: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Gateway backed by a map behind one `RwLock`.
///
/// Ids start at 1 and are never handed out twice, even after a delete.
/// `find_many` yields dogs in id order.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    state: RwLock<MemoryState>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored dogs.
    pub async fn len(&self) -> usize {
        self.state.read().await.dogs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DogGateway for MemoryGateway {
    async fn create(&self, dog: NewDog) -> GatewayResult<Dog> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| GatewayError::Internal("id space exhausted".to_string()))?;

        let dog = dog.into_dog(id);
        state.dogs.insert(id, dog.clone());
        Ok(dog)
    }

    async fn find_one(&self, id: DogId) -> GatewayResult<Option<Dog>> {
        Ok(self.state.read().await.dogs.get(&id).cloned())
    }

    async fn find_many(&self) -> GatewayResult<Vec<Dog>> {
        Ok(self.state.read().await.dogs.values().cloned().collect())
    }

    async fn update(&self, id: DogId, patch: DogPatch) -> GatewayResult<Dog> {
        let mut state = self.state.write().await;
        let dog = state.dogs.get_mut(&id).ok_or(GatewayError::NotFound(id))?;
        patch.apply_to(dog);
        Ok(dog.clone())
    }

    async fn delete(&self, id: DogId) -> GatewayResult<()> {
        let mut state = self.state.write().await;
        state
            .dogs
            .remove(&id)
            .map(|_| ())
            .ok_or(GatewayError::NotFound(id))
    }
}
