use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use kennel_core::validate::validate_id;
use kennel_core::{Dog, DogService, Reply};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{KennelAxumError, KennelState};

/// HTTP rendering of a core `Reply`.
#[derive(Debug)]
pub struct RestReply<T>(pub Reply<T>);

impl<T> IntoResponse for RestReply<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match self.0 {
            Reply::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Reply::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Reply::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

type RestResult<T> = Result<RestReply<T>, KennelAxumError>;

async fn find(State(state): State<KennelState>) -> RestResult<Vec<Dog>> {
    Ok(RestReply(state.service.list().await?))
}

async fn create(
    State(state): State<KennelState>,
    data: Result<Json<Value>, JsonRejection>,
) -> RestResult<Dog> {
    let Json(data) = data?;
    Ok(RestReply(state.service.create(&data).await?))
}

async fn get(State(state): State<KennelState>, Path(id): Path<String>) -> RestResult<Dog> {
    Ok(RestReply(state.service.get(&id).await?))
}

async fn patch(
    State(state): State<KennelState>,
    Path(id): Path<String>,
    data: Result<Option<Json<Value>>, JsonRejection>,
) -> RestResult<Dog> {
    // A bad id wins over a bad body. A request without a content type carries
    // no JSON payload and patches nothing.
    let data = match data {
        Ok(Some(Json(data))) => data,
        Ok(None) => Value::Object(Map::new()),
        Err(rejection) => {
            validate_id(&id)?;
            return Err(rejection.into());
        }
    };
    Ok(RestReply(state.service.update(&id, &data).await?))
}

async fn remove(State(state): State<KennelState>, Path(id): Path<String>) -> RestResult<Dog> {
    Ok(RestReply(state.service.remove(&id).await?))
}

/// `/dogs` and `/dogs/{id}` bound to `service`.
pub fn dog_router(service: DogService) -> Router<()> {
    let state = KennelState::new(service);

    Router::new()
        .route("/dogs", routing::get(find).post(create))
        .route("/dogs/{id}", routing::get(get).patch(patch).delete(remove))
        .with_state(state)
}
