use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{error::DomainError, repositories::activity_repository::ActivityRepository},
    usecase::{
        list_activities_usecase::ListActivitiesUsecase, signup_usecase::SignupUsecase,
        unregister_usecase::UnregisterUsecase,
    },
};

// Request

/// query parameters for signup/unregister
#[derive(Deserialize)]
pub struct EmailParams {
    pub email: String,
}

// Response

/// json for mutation confirmations
#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// json for rejections, `detail` matches the error's display text
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/* Router Function and Handler Function */

// Activity Router

/// function return Router object
/// Suppose to be merged by main router

pub fn create_activity_router<R: ActivityRepository + Send + Sync + 'static + Clone>(
    list_service: ListActivitiesUsecase<R>,
    signup_service: SignupUsecase<R>,
    unregister_service: UnregisterUsecase<R>,
) -> Router {
    let state = AppState {
        list_service: Arc::new(list_service),
        signup_service: Arc::new(signup_service),
        unregister_service: Arc::new(unregister_service),
    };

    Router::new()
        .route("/activities", get(list_activities::<R>))
        .route("/activities/{activity}/signup", post(signup::<R>))
        .route("/activities/{activity}/unregister", post(unregister::<R>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<R: ActivityRepository> {
    pub list_service: Arc<ListActivitiesUsecase<R>>,
    pub signup_service: Arc<SignupUsecase<R>>,
    pub unregister_service: Arc<UnregisterUsecase<R>>,
}

fn error_response(err: DomainError) -> Response {
    let status = match err {
        DomainError::ActivityNotFound | DomainError::ParticipantNotFound => StatusCode::NOT_FOUND,
        DomainError::AlreadySignedUp | DomainError::ActivityFull => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
        .into_response()
}

// handler function

/// handler function for the catalog listing
async fn list_activities<R: ActivityRepository + Send + Sync>(
    State(state): State<AppState<R>>,
) -> impl IntoResponse {
    Json(state.list_service.list().await)
}

/// handler function for signup
async fn signup<R: ActivityRepository + Send + Sync>(
    State(state): State<AppState<R>>,
    Path(activity): Path<String>,
    Query(params): Query<EmailParams>,
) -> impl IntoResponse {
    match state.signup_service.signup(activity, params.email).await {
        Ok(result) => {
            tracing::info!(activity = %result.activity, email = %result.email, "signed up");
            let response = MessageResponse {
                message: format!("Signed up {} for {}", result.email, result.activity),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            tracing::warn!(%err, "signup rejected");
            error_response(err)
        }
    }
}

/// handler function for unregister
async fn unregister<R: ActivityRepository + Send + Sync>(
    State(state): State<AppState<R>>,
    Path(activity): Path<String>,
    Query(params): Query<EmailParams>,
) -> impl IntoResponse {
    match state
        .unregister_service
        .unregister(activity, params.email)
        .await
    {
        Ok(result) => {
            tracing::info!(activity = %result.activity, email = %result.email, "unregistered");
            let response = MessageResponse {
                message: format!("Removed {} from {}", result.email, result.activity),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            tracing::warn!(%err, "unregister rejected");
            error_response(err)
        }
    }
}
