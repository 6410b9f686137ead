use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
};

use crate::web::{AppState, auth, landing, pdfs};

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config().max_upload_bytes;

    Router::new()
        .route("/", get(to_view))
        .route("/view", get(to_view))
        .route("/view/", get(landing::view_page))
        .route("/view/*rest", get(landing::view_page))
        .route("/generate-code", post(auth::generate_code))
        .route("/login", post(auth::process_login))
        .route("/logout", post(auth::logout))
        .route("/upload", post(pdfs::upload_pdfs))
        .route("/list", get(pdfs::list_pdfs))
        .route("/delete", delete(pdfs::delete_pdfs))
        .route("/generate", post(pdfs::generate_pdf))
        .route("/download", get(pdfs::download_pdf))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

async fn to_view() -> Redirect {
    Redirect::to(auth::VIEW_PATH)
}

async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
