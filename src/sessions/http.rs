use crate::app_context::AppContext;
use crate::sessions::consts::SAMPLING_UNAVAILABLE_MESSAGE;
use crate::sessions::driver::SessionHandle;
use crate::sessions::responses::{
    CloseSessionResponse, CreateSessionResponse, SessionResponseError, ToggleModeResponse,
    ViewResponse,
};
use crate::sessions::session::SessionError;
use axum::http::StatusCode;

pub struct CreateSessionHttpHandler {
    app_context: AppContext,
}

impl CreateSessionHttpHandler {
    pub fn new(app_context: AppContext) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateSessionResponse {
        let (session_id, _handle) = self.app_context.open_session().await;
        tracing::info!(task = "session_opened", session_id = %session_id);
        CreateSessionResponse {
            error: false,
            session_id,
        }
    }
}

pub struct SessionHttpHandler {
    app_context: AppContext,
    session_id: String,
}

impl SessionHttpHandler {
    pub fn new(app_context: AppContext, session_id: String) -> Self {
        Self {
            app_context,
            session_id,
        }
    }

    pub async fn new_spot(&self) -> (StatusCode, ViewResponse) {
        let Some(session) = self.session().await else {
            return not_found();
        };
        match session.new_spot().await {
            Ok(view) => (StatusCode::OK, ViewResponse::ok(view)),
            Err(SessionError::SamplingUnavailable) => {
                let mut response = ViewResponse::failed(SessionResponseError::SamplingUnavailable);
                response.message = Some(SAMPLING_UNAVAILABLE_MESSAGE.to_string());
                (StatusCode::SERVICE_UNAVAILABLE, response)
            }
            Err(err @ SessionError::Sample(_)) => {
                tracing::error!("Sampling failed on validated pools: {err}");
                let mut response = ViewResponse::failed(SessionResponseError::SamplingUnavailable);
                response.message = Some(SAMPLING_UNAVAILABLE_MESSAGE.to_string());
                (StatusCode::INTERNAL_SERVER_ERROR, response)
            }
            Err(SessionError::Closed) => closed(),
        }
    }

    pub async fn view(&self) -> (StatusCode, ViewResponse) {
        let Some(session) = self.session().await else {
            return not_found();
        };
        match session.snapshot().await {
            Ok(view) => (StatusCode::OK, ViewResponse::ok(view)),
            Err(_) => closed(),
        }
    }

    pub async fn toggle_mode(&self) -> (StatusCode, ToggleModeResponse) {
        let Some(session) = self.session().await else {
            return (
                StatusCode::NOT_FOUND,
                ToggleModeResponse {
                    error: true,
                    error_code: Some(SessionResponseError::SessionNotFound),
                    toggled: false,
                    view: None,
                },
            );
        };
        match session.toggle_mode().await {
            Ok((toggled, view)) => (
                StatusCode::OK,
                ToggleModeResponse {
                    error: false,
                    error_code: None,
                    toggled,
                    view: Some(view),
                },
            ),
            Err(_) => (
                StatusCode::GONE,
                ToggleModeResponse {
                    error: true,
                    error_code: Some(SessionResponseError::SessionClosed),
                    toggled: false,
                    view: None,
                },
            ),
        }
    }

    pub async fn zoom_in(&self, zoom: i32) -> (StatusCode, ViewResponse) {
        let Some(session) = self.session().await else {
            return not_found();
        };
        match session.zoom_in(zoom).await {
            Ok(view) => (StatusCode::OK, ViewResponse::ok(view)),
            Err(_) => closed(),
        }
    }

    pub async fn close(&self) -> (StatusCode, CloseSessionResponse) {
        if self.app_context.sessions.remove(&self.session_id).await {
            let open_sessions = self.app_context.sessions.len().await;
            tracing::info!(
                task = "session_closed",
                session_id = %self.session_id,
                open_sessions,
            );
            (
                StatusCode::OK,
                CloseSessionResponse {
                    error: false,
                    error_code: None,
                },
            )
        } else {
            (
                StatusCode::NOT_FOUND,
                CloseSessionResponse {
                    error: true,
                    error_code: Some(SessionResponseError::SessionNotFound),
                },
            )
        }
    }

    async fn session(&self) -> Option<SessionHandle> {
        self.app_context.sessions.get(&self.session_id).await
    }
}

fn not_found() -> (StatusCode, ViewResponse) {
    (
        StatusCode::NOT_FOUND,
        ViewResponse::failed(SessionResponseError::SessionNotFound),
    )
}

fn closed() -> (StatusCode, ViewResponse) {
    (
        StatusCode::GONE,
        ViewResponse::failed(SessionResponseError::SessionClosed),
    )
}
