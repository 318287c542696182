//! Input collection: reads multipart forms into an uploaded file plus text fields.

use std::collections::HashMap;
use std::path::Path;

use axum::extract::multipart::{Multipart, MultipartError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use thiserror::Error;

use crate::errors::AppError;
use crate::llm_client::Blob;

/// Multipart part carrying the résumé.
pub const FILE_FIELD: &str = "file";

const OCTET_STREAM: &str = "application/octet-stream";

const ACCEPTED_DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("unsupported file type '{0}' (accepted: PDF, text, Word documents, images)")]
    Unsupported(String),
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// A user-selected file as the rest of the app sees it.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    /// Resolves the mime type from the declared content type, falling back to
    /// the file extension, and rejects anything outside the accepted set.
    pub fn new(name: &str, declared: Option<&str>, data: Bytes) -> Result<Self, UploadError> {
        let declared = declared
            .map(|m| m.split(';').next().unwrap_or(m).trim().to_ascii_lowercase())
            .filter(|m| !m.is_empty() && m != OCTET_STREAM);

        let mime_type = match declared {
            Some(m) => m,
            None => mime_from_extension(name)
                .ok_or_else(|| UploadError::Unsupported(name.to_string()))?
                .to_string(),
        };

        if !is_accepted(&mime_type) {
            return Err(UploadError::Unsupported(mime_type));
        }

        Ok(Self {
            name: name.to_string(),
            mime_type,
            data,
        })
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Size as shown next to the file name, e.g. "12.5 KB".
    pub fn display_size(&self) -> String {
        format!("{:.1} KB", self.size() as f64 / 1024.0)
    }

    /// Base64 transport encoding for an inline attachment.
    pub fn to_blob(&self) -> Blob {
        Blob {
            mime_type: self.mime_type.clone(),
            data: STANDARD.encode(&self.data),
        }
    }
}

fn is_accepted(mime_type: &str) -> bool {
    mime_type.starts_with("image/") || ACCEPTED_DOCUMENT_TYPES.contains(&mime_type)
}

fn mime_from_extension(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => return None,
    };
    Some(mime)
}

/// A feature form: at most one file plus named text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, UploadError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if name == FILE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;

                // An empty file input still posts a nameless, empty part.
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }
                form.file = Some(UploadedFile::new(&file_name, content_type.as_deref(), data)?);
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// A text field, trimmed; blank values count as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    #[cfg(test)]
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }
}
