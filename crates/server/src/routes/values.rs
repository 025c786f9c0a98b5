use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    Json,
};
use tracing::info;

use models::value;
use service::errors::ServiceError;
use service::value::input::{CreateValueInput, UpdateValueInput};

use crate::errors::JsonApiError;
use crate::interceptor::RequestObserver;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/values", tag = "values",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ValueDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<value::Model>>, JsonApiError> {
    let observer = RequestObserver::start(Method::GET, "/values", None);
    let values = observer
        .observe(StatusCode::OK, async {
            state.values.find_all().await.map_err(|e| {
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string()))
            })
        })
        .await?;
    Ok(Json(values))
}

#[utoipa::path(
    post, path = "/values", tag = "values",
    request_body = crate::openapi::CreateValueInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ValueDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateValueInput>,
) -> Result<(StatusCode, Json<value::Model>), JsonApiError> {
    let payload = serde_json::to_value(&input).ok();
    let observer = RequestObserver::start(Method::POST, "/values", payload.as_ref());
    let created = observer
        .observe(StatusCode::CREATED, async {
            input.validate().map_err(|e| {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
            })?;
            state.values.create(input.clone()).await.map_err(|e| match e {
                ServiceError::Validation(_) | ServiceError::Model(_) => {
                    JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
                }
                _ => JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())),
            })
        })
        .await?;
    info!(id = created.id, "created value");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/values/{id}", tag = "values",
    params(("id" = i64, Path, description = "Value ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ValueDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<value::Model>, JsonApiError> {
    let observer = RequestObserver::start(Method::GET, format!("/values/{id}"), None);
    let value = observer
        .observe(StatusCode::OK, async {
            state.values.find_one(id).await.map_err(|e| match e {
                ServiceError::NotFound(msg) => {
                    JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))
                }
                _ => JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Fetch Failed", Some(e.to_string())),
            })
        })
        .await?;
    Ok(Json(value))
}

#[utoipa::path(
    patch, path = "/values/{id}", tag = "values",
    params(("id" = i64, Path, description = "Value ID")),
    request_body = crate::openapi::UpdateValueInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ValueDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateValueInput>,
) -> Result<Json<value::Model>, JsonApiError> {
    let payload = serde_json::to_value(&input).ok();
    let observer = RequestObserver::start(Method::PATCH, format!("/values/{id}"), payload.as_ref());
    let updated = observer
        .observe(StatusCode::OK, async {
            input.validate().map_err(|e| {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
            })?;
            state.values.update(id, input.clone()).await.map_err(|e| match e {
                ServiceError::Validation(_) | ServiceError::Model(_) => {
                    JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
                }
                ServiceError::NotFound(msg) => {
                    JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))
                }
                _ => JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Update Failed", Some(e.to_string())),
            })
        })
        .await?;
    info!(id = updated.id, "updated value");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/values/{id}", tag = "values",
    params(("id" = i64, Path, description = "Value ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    let observer = RequestObserver::start(Method::DELETE, format!("/values/{id}"), None);
    observer
        .observe(StatusCode::NO_CONTENT, async {
            state.values.remove(id).await.map_err(|e| match e {
                ServiceError::NotFound(msg) => {
                    JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))
                }
                _ => JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Delete Failed", Some(e.to_string())),
            })
        })
        .await?;
    info!(id, "deleted value");
    Ok(StatusCode::NO_CONTENT)
}
