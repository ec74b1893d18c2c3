use crate::analysis::{AnalysisReport, ClauseId, ExplanationMode};
use crate::chat::ChatMessage;
use crate::error::AppError;
use crate::infra::{deserialize_mode, AppState};
use crate::session::{PageView, ReadAloudToast, SessionId, SessionStore};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct UploadRequest {
    pub(crate) file_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModeRequest {
    #[serde(deserialize_with = "deserialize_mode")]
    pub(crate) mode: ExplanationMode,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    pub(crate) appended: Vec<ChatMessage>,
    pub(crate) transcript: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TranscriptResponse {
    pub(crate) session_id: SessionId,
    pub(crate) transcript: Vec<ChatMessage>,
}

/// Session-facing API. Ops endpoints are added by [`with_ops_routes`].
pub fn session_router(store: SessionStore) -> Router {
    Router::new()
        .route("/api/v1/report", get(report_endpoint))
        .route("/api/v1/sessions", post(create_session))
        .route(
            "/api/v1/sessions/:session_id",
            get(page_endpoint).delete(end_session),
        )
        .route("/api/v1/sessions/:session_id/upload", post(upload_endpoint))
        .route("/api/v1/sessions/:session_id/sample", post(sample_endpoint))
        .route("/api/v1/sessions/:session_id/back", post(back_endpoint))
        .route(
            "/api/v1/sessions/:session_id/mode",
            axum::routing::put(mode_endpoint),
        )
        .route(
            "/api/v1/sessions/:session_id/chat",
            get(transcript_endpoint).post(chat_endpoint),
        )
        .route(
            "/api/v1/sessions/:session_id/clauses/:clause_id/read-aloud",
            post(read_aloud_endpoint),
        )
        .with_state(store)
}

pub(crate) fn with_ops_routes(router: Router, state: AppState) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn report_endpoint(
    State(store): State<SessionStore>,
) -> Json<&'static AnalysisReport> {
    Json(store.report())
}

pub(crate) async fn create_session(State(store): State<SessionStore>) -> impl IntoResponse {
    let session = store.create();
    let page = PageView::render(&session, store.report());
    (StatusCode::CREATED, Json(page))
}

pub(crate) async fn page_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<PageView>, AppError> {
    Ok(Json(store.page(session_id)?))
}

pub(crate) async fn end_session(
    State(store): State<SessionStore>,
    Path(session_id): Path<SessionId>,
) -> Result<StatusCode, AppError> {
    store.end(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn upload_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<SessionId>,
    Json(payload): Json<UploadRequest>,
) -> Result<Json<PageView>, AppError> {
    let session = store.upload(session_id, payload.file_name).await?;
    Ok(Json(PageView::render(&session, store.report())))
}

pub(crate) async fn sample_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<PageView>, AppError> {
    let session = store.analyze_sample(session_id).await?;
    Ok(Json(PageView::render(&session, store.report())))
}

pub(crate) async fn back_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<PageView>, AppError> {
    let session = store.go_back(session_id)?;
    Ok(Json(PageView::render(&session, store.report())))
}

pub(crate) async fn mode_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<SessionId>,
    Json(payload): Json<ModeRequest>,
) -> Result<Json<PageView>, AppError> {
    let session = store.select_mode(session_id, payload.mode)?;
    Ok(Json(PageView::render(&session, store.report())))
}

pub(crate) async fn transcript_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let transcript = store.transcript(session_id)?;
    Ok(Json(TranscriptResponse {
        session_id,
        transcript,
    }))
}

pub(crate) async fn chat_endpoint(
    State(store): State<SessionStore>,
    Path(session_id): Path<SessionId>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let appended = store.ask(session_id, &payload.text)?;
    let transcript = store.transcript(session_id)?;
    Ok(Json(ChatResponse {
        appended,
        transcript,
    }))
}

pub(crate) async fn read_aloud_endpoint(
    State(store): State<SessionStore>,
    Path((session_id, clause_id)): Path<(SessionId, ClauseId)>,
) -> Result<Json<ReadAloudToast>, AppError> {
    Ok(Json(store.read_aloud(session_id, clause_id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::session::ViewStage;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn store() -> SessionStore {
        SessionStore::new(AnalysisConfig::instant())
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn sample_endpoint_renders_results() {
        let store = store();
        let id = store.create().id;

        let Json(page) = sample_endpoint(State(store.clone()), Path(id))
            .await
            .expect("sample analyzed");

        assert_eq!(page.stage(), ViewStage::Results);
        let results = page.results().expect("results rendered");
        assert_eq!(results.document_caption, "Document: Sample_NDA.pdf");
        assert_eq!(results.dashboard.risk_score.value, "7.2");
    }

    #[tokio::test]
    async fn mode_endpoint_accepts_display_labels() {
        let store = store();
        let id = store.create().id;
        store.analyze_sample(id).await.expect("sample analyzed");

        let payload: ModeRequest =
            serde_json::from_value(json!({ "mode": "Simplified" })).expect("valid mode");
        let Json(page) = mode_endpoint(State(store.clone()), Path(id), Json(payload))
            .await
            .expect("mode selected");

        let results = page.results().expect("results rendered");
        assert_eq!(results.clause_analysis.mode, ExplanationMode::Simplified);
        assert_eq!(
            results.clause_analysis.clauses[2].explanation,
            "This agreement lasts for 5 years from the start date."
        );
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let response = page_endpoint(State(store()), Path(SessionId::generate()))
            .await
            .expect_err("missing session")
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn upload_route_filters_extensions() {
        let store = store();
        let id = store.create().id;
        let router = session_router(store.clone());

        let response = router
            .oneshot(
                Request::post(format!("/api/v1/sessions/{id}/upload"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "file_name": "budget.xlsx" }).to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let payload = read_json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .unwrap_or_default()
            .contains("budget.xlsx"));
        assert_eq!(
            store.get(id).expect("session exists").view.stage(),
            ViewStage::Intake
        );
    }

    #[tokio::test]
    async fn chat_route_returns_appended_pair() {
        let store = store();
        let id = store.create().id;
        let router = session_router(store);

        let response = router
            .oneshot(
                Request::post(format!("/api/v1/sessions/{id}/chat"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "text": "How long" }).to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["appended"][0]["speaker"], "user");
        assert_eq!(payload["appended"][1]["speaker"], "assistant");
        assert_eq!(
            payload["appended"][1]["text"],
            "Confidentiality lasts 5 years, longer than the 2–3 year norm."
        );
        assert_eq!(payload["transcript"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn read_aloud_route_reports_unknown_clause() {
        let store = store();
        let id = store.create().id;
        let router = session_router(store);

        let response = router
            .oneshot(
                Request::post(format!("/api/v1/sessions/{id}/clauses/42/read-aloud"))
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
