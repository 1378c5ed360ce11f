use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::dog::Dog;
use crate::errors::{GatewayError, KennelError, KennelResult};
use crate::gateway::DogGateway;
use crate::validate::{validate_create, validate_id, validate_partial};

/// The five operations exposed over dogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Client-facing message when the store fails during this operation.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Create => "An error occurred while creating the dog.",
            Operation::List => "An error occurred while fetching the dogs.",
            Operation::Get => "An error occurred while fetching the dog.",
            Operation::Update => "An error occurred while updating the dog.",
            Operation::Delete => "An error occurred while deleting the dog.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful outcome of a handler, independent of any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// 201 with a body.
    Created(T),
    /// 200 with a body.
    Ok(T),
    /// 204, no body. Used when the requested dog does not exist.
    NoContent,
}

impl<T> Reply<T> {
    pub fn status_code(&self) -> u16 {
        match self {
            Reply::Created(_) => 201,
            Reply::Ok(_) => 200,
            Reply::NoContent => 204,
        }
    }

    pub fn into_body(self) -> Option<T> {
        match self {
            Reply::Created(body) | Reply::Ok(body) => Some(body),
            Reply::NoContent => None,
        }
    }
}

/// Logs the gateway failure in full and hides it behind the operation.
fn persistence_failure(operation: Operation) -> impl FnOnce(GatewayError) -> KennelError {
    move |source| {
        tracing::error!(%operation, error = %source, "persistence gateway call failed");
        KennelError::persistence(operation, source)
    }
}

fn rejected(operation: Operation, err: KennelError) -> KennelError {
    tracing::debug!(%operation, error = %err, "request rejected");
    err
}

/// Request handlers for dogs.
///
/// Each call validates its input, talks to the injected gateway and shapes a
/// `Reply`. Validation failures return before the gateway is touched. Gateway
/// failures are logged here and surface as opaque persistence errors. Nothing
/// is retried.
#[derive(Clone)]
pub struct DogService {
    gateway: Arc<dyn DogGateway>,
}

impl DogService {
    pub fn new(gateway: Arc<dyn DogGateway>) -> Self {
        Self { gateway }
    }

    /// `POST /dogs`
    pub async fn create(&self, payload: &Value) -> KennelResult<Reply<Dog>> {
        let op = Operation::Create;
        let dog = validate_create(payload).map_err(|e| rejected(op, e))?;

        let created = self
            .gateway
            .create(dog)
            .await
            .map_err(persistence_failure(op))?;

        tracing::info!(id = created.id, "dog created");
        Ok(Reply::Created(created))
    }

    /// `GET /dogs`
    pub async fn list(&self) -> KennelResult<Reply<Vec<Dog>>> {
        let dogs = self
            .gateway
            .find_many()
            .await
            .map_err(persistence_failure(Operation::List))?;

        Ok(Reply::Ok(dogs))
    }

    /// `GET /dogs/:id`. An unknown id is an empty success, not an error.
    pub async fn get(&self, raw_id: &str) -> KennelResult<Reply<Dog>> {
        let op = Operation::Get;
        let id = validate_id(raw_id).map_err(|e| rejected(op, e))?;

        let found = self
            .gateway
            .find_one(id)
            .await
            .map_err(persistence_failure(op))?;

        Ok(match found {
            Some(dog) => Reply::Ok(dog),
            None => Reply::NoContent,
        })
    }

    /// `PATCH /dogs/:id`. Answers 201 on success; an unknown id is a
    /// persistence failure like any other.
    pub async fn update(&self, raw_id: &str, payload: &Value) -> KennelResult<Reply<Dog>> {
        let op = Operation::Update;
        let id = validate_id(raw_id).map_err(|e| rejected(op, e))?;
        let patch = validate_partial(payload).map_err(|e| rejected(op, e))?;

        let updated = self
            .gateway
            .update(id, patch)
            .await
            .map_err(persistence_failure(op))?;

        tracing::info!(id, "dog updated");
        Ok(Reply::Created(updated))
    }

    /// `DELETE /dogs/:id`. Returns the dog as it was before removal, or an
    /// empty success when it does not exist.
    pub async fn remove(&self, raw_id: &str) -> KennelResult<Reply<Dog>> {
        let op = Operation::Delete;
        let id = validate_id(raw_id).map_err(|e| rejected(op, e))?;

        let Some(dog) = self
            .gateway
            .find_one(id)
            .await
            .map_err(persistence_failure(op))?
        else {
            return Ok(Reply::NoContent);
        };

        self.gateway
            .delete(id)
            .await
            .map_err(persistence_failure(op))?;

        tracing::info!(id, "dog deleted");
        Ok(Reply::Ok(dog))
    }
}
