use std::collections::HashMap;

use axum::extract::Multipart;

use crate::library::{IncomingFile, PDF_EXTENSION};

/// Result type used by the upload form helpers.
pub type UploadResult<T> = Result<T, UploadError>;

/// Error returned when a multipart upload form is malformed or unacceptable.
#[derive(Debug)]
pub struct UploadError {
    message: String,
}

impl UploadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UploadError {}

/// Expectations for the file field of an upload form.
#[derive(Debug, Clone, Copy)]
pub struct FileFieldConfig<'a> {
    pub field_name: &'a str,
    pub required_suffix: &'a str,
    pub max_files: usize,
}

impl<'a> FileFieldConfig<'a> {
    pub fn pdfs(field_name: &'a str, max_files: usize) -> Self {
        Self {
            field_name,
            required_suffix: PDF_EXTENSION,
            max_files,
        }
    }
}

/// Upload form held in memory: text fields plus the accepted files, in the
/// order they were sent.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub files: Vec<IncomingFile>,
    pub text_fields: HashMap<String, Vec<String>>,
}

impl UploadForm {
    pub fn first_text(&self, field_name: &str) -> Option<&str> {
        self.text_fields
            .get(field_name)
            .and_then(|values| values.first().map(|s| s.as_str()))
    }
}

/// Reads the whole multipart body before anything touches the disk, so an
/// invalid part rejects the request without a partial write.
pub async fn collect_upload_form(
    mut multipart: Multipart,
    config: FileFieldConfig<'_>,
) -> UploadResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| UploadError::new(format!("Failed to parse upload form: {err}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        let Some(file_name) = field.file_name().map(str::to_string) else {
            let value = field.text().await.map_err(|err| {
                UploadError::new(format!("Failed to read field `{field_name}`: {err}"))
            })?;
            form.text_fields.entry(field_name).or_default().push(value);
            continue;
        };

        if field_name != config.field_name {
            return Err(UploadError::new(format!(
                "Unsupported file field `{field_name}`."
            )));
        }

        if form.files.len() >= config.max_files {
            return Err(UploadError::new(format!(
                "Too many files (at most {}).",
                config.max_files
            )));
        }

        let name = clean_file_name(&file_name, config.required_suffix)?;
        let bytes = field
            .bytes()
            .await
            .map_err(|err| UploadError::new(format!("Failed to read `{name}`: {err}")))?;

        form.files.push(IncomingFile::new(name, bytes.to_vec()));
    }

    if form.files.is_empty() {
        return Err(UploadError::new(format!(
            "No files were sent in field `{}`.",
            config.field_name
        )));
    }

    Ok(form)
}

fn clean_file_name(original: &str, required_suffix: &str) -> UploadResult<String> {
    let sanitized = sanitize_filename::sanitize(original);
    if sanitized.is_empty() || sanitized == required_suffix {
        return Err(UploadError::new(format!(
            "Invalid file name `{original}`."
        )));
    }
    if !sanitized.ends_with(required_suffix) {
        return Err(UploadError::new(format!(
            "Only `{required_suffix}` files are accepted, got `{original}`."
        )));
    }
    Ok(sanitized)
}
