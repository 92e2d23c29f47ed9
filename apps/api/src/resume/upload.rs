//! Multipart résumé upload — one `resume` file field plus free-form text fields.

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::InlineImage;

/// Name of the multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";

/// What kind of file the user uploaded, sniffed from its bytes.
#[derive(Debug, Clone)]
pub enum ResumeDocument {
    Pdf(Bytes),
    Image(InlineImage),
}

#[derive(Debug, Default)]
pub struct ResumeUpload {
    pub document: Option<ResumeDocument>,
    fields: HashMap<String, String>,
}

impl ResumeUpload {
    /// A text field's trimmed value; blank counts as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn with_fields(document: Option<ResumeDocument>, fields: &[(&str, &str)]) -> Self {
        Self {
            document,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Drains the multipart body. An empty file part counts as no upload.
pub async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut upload = ResumeUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FIELD {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            if data.is_empty() {
                continue;
            }
            debug!("Received résumé upload ({} bytes)", data.len());
            upload.document = Some(classify_document(data)?);
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            upload.fields.insert(name, value);
        }
    }

    Ok(upload)
}

/// Sniffs the uploaded bytes. PDFs and PNG/JPEG/WebP images are accepted.
pub fn classify_document(data: Bytes) -> Result<ResumeDocument, AppError> {
    let mime = infer::get(&data).map(|kind| kind.mime_type());

    match mime {
        Some("application/pdf") => Ok(ResumeDocument::Pdf(data)),
        Some(m @ ("image/png" | "image/jpeg" | "image/webp")) => {
            Ok(ResumeDocument::Image(InlineImage {
                mime_type: m.to_string(),
                data,
            }))
        }
        other => Err(AppError::Validation(format!(
            "Unsupported résumé format ({}). Please upload a PDF",
            other.unwrap_or("unknown")
        ))),
    }
}
