//! Axum route handler for resume processing.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_document, UploadedDocument};
use crate::resume::prompts::build_prompt;
use crate::resume::sanitizer::{sanitize_and_parse, shape_warnings};
use crate::state::AppState;

/// Name of the multipart part carrying the document.
pub const FILE_FIELD: &str = "file";

/// POST /process
///
/// Stage 1: pull the `file` part out of the form and extract its text.
/// Stage 2: prompt → inference → sanitize, reported to the caller as one unit.
/// Which sub-step of stage 2 failed only shows up in the logs.
#[tracing::instrument(skip_all)]
pub async fn handle_process(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, AppError> {
    info!("New request incoming");

    // A body that is not multipart has no file part.
    let mut multipart = multipart.map_err(|_| AppError::MissingFile)?;
    let upload = read_file_part(&mut multipart)
        .await?
        .ok_or(AppError::MissingFile)?;
    info!(filename = %upload.filename, bytes = upload.data.len(), "Analyzing file");

    let text = extract_document(upload).await?;
    info!(chars = text.chars().count(), "Text extracted");

    let prompt = build_prompt(&text);
    let raw = state
        .inference
        .run_inference(&prompt)
        .await
        .inspect_err(|e| warn!(step = "inference", error = %e, "Inference call failed"))?;
    let record = sanitize_and_parse(&raw)
        .inspect_err(|e| warn!(step = "sanitize", error = %e, "Model output is not valid JSON"))?;

    for warning in shape_warnings(&record) {
        warn!(%warning, "Parsed record deviates from resume shape");
    }
    info!("JSON parsed successfully");

    Ok(Json(record))
}

/// First part named `file` that carries a filename. Parts without a filename
/// are plain form fields, not uploads, and are skipped like any other field.
async fn read_file_part(multipart: &mut Multipart) -> Result<Option<UploadedDocument>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await?;
        return Ok(Some(UploadedDocument { filename, data }));
    }
    Ok(None)
}
