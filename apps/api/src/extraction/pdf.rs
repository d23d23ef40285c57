use tracing::debug;

use super::ExtractError;

/// Extracts the text of every page, in page order. Pages without a text
/// layer contribute nothing.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let text =
        pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    debug!(chars = text.len(), "PDF text extracted");
    Ok(text)
}
