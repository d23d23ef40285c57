//! Text Extractor — turns an uploaded PDF or DOCX into one flat string.
//!
//! Dispatch is on the filename suffix only; the bytes are never sniffed.
//! `extract_text` is the lenient contract (unknown suffix → empty string);
//! `extract_document` is what the request handler calls and refuses both
//! unsupported formats and documents without text.
//!
//! Two rules are looser than a plain `endswith` / empty-string check, on
//! purpose: suffixes match case-insensitively (`CV.PDF` is a PDF), and a
//! document whose text is only whitespace counts as having no text.
//!
//! Parsing is CPU-bound and parser crates may panic on hostile input, so
//! `extract_document` runs it inside `tokio::task::spawn_blocking`; a panic
//! surfaces as `ExtractError::Task` and the runtime keeps serving.

pub mod docx;
pub mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file is empty")]
    EmptyFile,

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("unsupported file type '{0}' (expected .pdf or .docx)")]
    UnsupportedFormat(String),

    #[error("no text could be extracted from the document")]
    NoText,

    #[error("extraction task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Case-insensitive suffix match.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

/// A file part lifted out of the multipart body. Lives for one request.
#[derive(Debug)]
pub struct UploadedDocument {
    pub filename: String,
    pub data: Bytes,
}

/// Extracts text according to the filename suffix.
/// Returns an empty string for any suffix other than `.pdf` / `.docx`.
pub fn extract_text(data: &[u8], filename: &str) -> Result<String, ExtractError> {
    let Some(format) = DocumentFormat::from_filename(filename) else {
        debug!(filename, "no extractor for file type");
        return Ok(String::new());
    };

    if data.is_empty() {
        return Err(ExtractError::EmptyFile);
    }

    match format {
        DocumentFormat::Pdf => pdf::extract(data),
        DocumentFormat::Docx => docx::extract(data),
    }
}

/// Strict variant used by `/process`: an unsupported format and a document
/// that yields only whitespace are both errors, reported separately.
pub async fn extract_document(upload: UploadedDocument) -> Result<String, ExtractError> {
    extract_with(upload, extract_text).await
}

/// `extract_document` with the blocking extractor supplied by the caller.
pub(crate) async fn extract_with<F>(
    upload: UploadedDocument,
    extractor: F,
) -> Result<String, ExtractError>
where
    F: FnOnce(&[u8], &str) -> Result<String, ExtractError> + Send + 'static,
{
    let UploadedDocument { filename, data } = upload;

    if DocumentFormat::from_filename(&filename).is_none() {
        return Err(ExtractError::UnsupportedFormat(filename));
    }

    let text = tokio::task::spawn_blocking(move || extractor(&data, &filename))
        .await
        .map_err(|e| ExtractError::Task(e.to_string()))??;

    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(DocumentFormat::from_filename("cv.pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_filename("CV.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_filename("cv.docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_filename("cv.doc"), None);
        assert_eq!(DocumentFormat::from_filename("cv.pdf.txt"), None);
        assert_eq!(DocumentFormat::from_filename(""), None);
    }

    #[test]
    fn test_unsupported_suffix_returns_empty_string() {
        for name in ["notes.txt", "resume.doc", "photo.png", "pdf", "noextension"] {
            let text = extract_text(b"Hello", name).unwrap();
            assert_eq!(text, "", "expected empty text for {name}");
        }
    }

    #[test]
    fn test_zero_byte_pdf_is_an_error() {
        assert!(matches!(extract_text(b"", "resume.pdf"), Err(ExtractError::EmptyFile)));
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let result = extract_text(b"definitely not a pdf", "resume.pdf");
        assert!(matches!(result, Err(ExtractError::Pdf(_))), "got {result:?}");
    }

    #[test]
    fn test_garbage_docx_is_an_error() {
        let result = extract_text(b"PK but not really a zip", "resume.docx");
        assert!(matches!(result, Err(ExtractError::Docx(_))), "got {result:?}");
    }

    #[test]
    fn test_docx_dispatch_returns_paragraph_text() {
        let data = docx::tests::build_docx(&["Jane Doe", "jane@example.com"]);
        let text = extract_text(&data, "Jane.DOCX").unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com");
    }

    #[test]
    fn test_pdf_dispatch_returns_page_text() {
        let data = pdf::tests::build_pdf(&["Jane"]);
        let text = extract_text(&data, "Jane.PDF").unwrap();
        assert!(text.contains("Jane"), "got {text:?}");
    }

    #[tokio::test]
    async fn test_extract_document_rejects_unsupported_format() {
        let upload = UploadedDocument {
            filename: "notes.txt".to_string(),
            data: Bytes::from_static(b"Jane Doe"),
        };
        let err = extract_document(upload).await.unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(ref f) if f == "notes.txt"));
    }

    #[tokio::test]
    async fn test_extract_document_rejects_blank_document() {
        let data = docx::tests::build_docx(&["", "   "]);
        let upload = UploadedDocument {
            filename: "blank.docx".to_string(),
            data: Bytes::from(data),
        };
        let err = extract_document(upload).await.unwrap_err();
        assert!(matches!(err, ExtractError::NoText));
    }

    #[tokio::test]
    async fn test_extractor_panic_becomes_task_error() {
        let upload = UploadedDocument {
            filename: "resume.pdf".to_string(),
            data: Bytes::from_static(b"%PDF-1.4"),
        };
        let err = extract_with(upload, |_, _| panic!("parser crashed"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Task(_)), "got {err:?}");

        // The runtime is still usable after the panic.
        let data = docx::tests::build_docx(&["Jane Doe"]);
        let upload = UploadedDocument {
            filename: "resume.docx".to_string(),
            data: Bytes::from(data),
        };
        assert_eq!(extract_document(upload).await.unwrap(), "Jane Doe");
    }

    #[tokio::test]
    async fn test_whitespace_only_text_is_no_text() {
        let upload = UploadedDocument {
            filename: "resume.pdf".to_string(),
            data: Bytes::from_static(b"x"),
        };
        let err = extract_with(upload, |_, _| Ok(" \n\t ".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::NoText));
    }

    #[tokio::test]
    async fn test_extract_document_returns_text() {
        let data = docx::tests::build_docx(&["Jane Doe", "Rust, Go"]);
        let upload = UploadedDocument {
            filename: "resume.docx".to_string(),
            data: Bytes::from(data),
        };
        let text = extract_document(upload).await.unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Rust, Go"));
    }
}
