use axum::{
    Json,
    extract::{
        Form, Multipart, Query, State,
        rejection::{FormRejection, JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    library::{LibraryResult, PDF_EXTENSION, merged_output_path},
    web::{
        ApiError, AppState, FileFieldConfig, auth, bad_request, collect_upload_form,
        internal_error, library_error, stream_file, validate_segment,
    },
};

const UPLOAD_FIELD: &str = "pdfs";
const MAX_FILES_PER_UPLOAD: usize = 200;

#[derive(Deserialize)]
pub struct FolderParams {
    #[serde(default)]
    pub folder: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteFilesRequest {
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

pub async fn upload_pdfs(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let tenant = auth::require_tenant(&state, &jar)?;

    let form = collect_upload_form(
        multipart,
        FileFieldConfig::pdfs(UPLOAD_FIELD, MAX_FILES_PER_UPLOAD),
    )
    .await
    .map_err(|err| bad_request(err.message()))?;
    let folder = validate_segment(form.first_text("folder"), "folder")?.to_string();

    let folder_path = tenant.root.join(&folder);
    let library = state.library();
    let files = form.files;
    let stored = run_blocking(move || library.store(&folder_path, &files)).await?;

    info!(folder = %folder, count = stored.len(), "stored uploaded PDFs");
    Ok(plain_text(format!("Uploaded {} file(s).", stored.len())))
}

pub async fn list_pdfs(
    State(state): State<AppState>,
    jar: CookieJar,
    params: Result<Query<FolderParams>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let tenant = auth::require_tenant(&state, &jar)?;
    let Query(params) = params.map_err(|rejection| bad_request(rejection.body_text()))?;
    let folder = validate_segment(params.folder.as_deref(), "folder")?;

    let folder_path = tenant.root.join(folder);
    let library = state.library();
    let files = run_blocking(move || library.list(&folder_path)).await?;

    Ok(Json(files))
}

pub async fn delete_pdfs(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<DeleteFilesRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let tenant = auth::require_tenant(&state, &jar)?;
    let Json(request) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;
    let folder = validate_segment(request.folder.as_deref(), "folder")?.to_string();
    let names = request
        .files
        .iter()
        .map(|name| validate_segment(Some(name.as_str()), "file").map(str::to_string))
        .collect::<Result<Vec<_>, _>>()?;

    let folder_path = tenant.root.join(&folder);
    let library = state.library();
    let removed = run_blocking(move || library.delete(&folder_path, &names)).await?;

    info!(folder = %folder, removed, "deleted PDFs");
    Ok(StatusCode::OK)
}

pub async fn generate_pdf(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<FolderParams>, FormRejection>,
) -> Result<Response, ApiError> {
    let tenant = auth::require_tenant(&state, &jar)?;
    let Form(form) = form.map_err(|rejection| bad_request(rejection.body_text()))?;
    let folder = validate_segment(form.folder.as_deref(), "folder")?.to_string();

    let library = state.library();
    let merge_folder = folder.clone();
    let output = run_blocking(move || library.merge(&tenant.root, &merge_folder)).await?;

    info!(folder = %folder, output = %output.display(), "generated merged PDF");
    Ok(plain_text("PDF generated successfully."))
}

pub async fn download_pdf(
    State(state): State<AppState>,
    jar: CookieJar,
    params: Result<Query<FolderParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let tenant = auth::require_tenant(&state, &jar)?;
    let Query(params) = params.map_err(|rejection| bad_request(rejection.body_text()))?;
    let folder = validate_segment(params.folder.as_deref(), "folder")?;

    let path = merged_output_path(&tenant.root, folder);
    let file_name = format!("{folder}{PDF_EXTENSION}");
    let content_type = mime::APPLICATION_PDF;
    stream_file(&path, &file_name, content_type.as_ref()).await
}

fn plain_text(body: impl Into<String>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body.into(),
    )
        .into_response()
}

/// Runs synchronous folder work on the blocking pool.
async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> LibraryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| {
            error!(?err, "folder task did not complete");
            internal_error("Internal server error.")
        })?
        .map_err(library_error)
}
