pub mod auth;
pub mod landing;
pub mod pdfs;
pub mod responses;
pub mod router;
pub mod state;
pub mod storage;
pub mod templates;
pub mod uploads;

pub use responses::{ApiError, bad_request, internal_error, json_error, library_error};
pub use state::AppState;
pub use storage::{stream_file, validate_segment};
pub use templates::{render_access_page, render_workspace_page};
pub use uploads::{FileFieldConfig, collect_upload_form};
