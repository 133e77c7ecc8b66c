use crate::app_context::AppContext;
use crate::sessions::http::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::sessions::responses::{
    CloseSessionResponse, CreateSessionResponse, ToggleModeResponse, ViewResponse, ZoomInRequest,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(State(app_context): State<AppContext>) -> Json<CreateSessionResponse> {
    let response = CreateSessionHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn new_spot(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
) -> (StatusCode, Json<ViewResponse>) {
    let (status, response) = SessionHttpHandler::new(app_context, session_id)
        .new_spot()
        .await;
    (status, Json(response))
}

#[axum::debug_handler]
pub async fn view(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
) -> (StatusCode, Json<ViewResponse>) {
    let (status, response) = SessionHttpHandler::new(app_context, session_id)
        .view()
        .await;
    (status, Json(response))
}

#[axum::debug_handler]
pub async fn toggle_mode(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
) -> (StatusCode, Json<ToggleModeResponse>) {
    let (status, response) = SessionHttpHandler::new(app_context, session_id)
        .toggle_mode()
        .await;
    (status, Json(response))
}

#[axum::debug_handler]
pub async fn zoom_in(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
    Json(request): Json<ZoomInRequest>,
) -> (StatusCode, Json<ViewResponse>) {
    let (status, response) = SessionHttpHandler::new(app_context, session_id)
        .zoom_in(request.zoom)
        .await;
    (status, Json(response))
}

#[axum::debug_handler]
pub async fn close(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext>,
) -> (StatusCode, Json<CloseSessionResponse>) {
    let (status, response) = SessionHttpHandler::new(app_context, session_id)
        .close()
        .await;
    (status, Json(response))
}
