//! Multipart Upload Forms
//!
//! Create/update endpoints for media-backed resources take
//! `multipart/form-data`: plain text fields plus zero or more files.
//! [`UploadForm::read`] drains the stream into memory so handlers can
//! validate the text fields before anything touches the disk.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Uploaded file is too large")]
    TooLarge,
}

impl UploadError {
    pub fn is_too_large(&self) -> bool {
        matches!(self, UploadError::TooLarge)
    }
}

impl From<MultipartError> for UploadError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge
        } else {
            UploadError::Malformed(err.body_text())
        }
    }
}

/// One file part
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-side file name (only the extension and stem are ever used)
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Text fields and files of one multipart request
#[derive(Debug, Default)]
pub struct UploadForm {
    texts: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl UploadForm {
    /// Read every part.
    ///
    /// Parts with a file name are files, the rest are text. A file part with
    /// no name or no content counts as absent (browsers send one for an
    /// untouched `<input type="file">`). Later parts win on duplicate names.
    pub async fn read(mut multipart: Multipart) -> Result<Self, UploadError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await?;
                    if file_name.is_empty() || bytes.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
                None => {
                    let value = field.text().await?;
                    form.texts.insert(name, value);
                }
            }
        }

        tracing::debug!(
            texts = form.texts.len(),
            files = form.files.len(),
            "Read multipart form"
        );
        Ok(form)
    }

    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.texts.remove(name)
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use http::Request;

    const BOUNDARY: &str = "XBOUNDARYX";

    fn multipart_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(name: &str, file_name: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n{content}\r\n"
        )
    }

    async fn read(body: String) -> UploadForm {
        let multipart = Multipart::from_request(multipart_request(body), &())
            .await
            .unwrap();
        UploadForm::read(multipart).await.unwrap()
    }

    #[tokio::test]
    async fn test_reads_text_and_files() {
        let body = format!(
            "{}{}--{BOUNDARY}--\r\n",
            text_part("name", "Birthday"),
            file_part("thumbnail", "cake.png", "PNGDATA")
        );
        let mut form = read(body).await;

        assert_eq!(form.take_text("name").as_deref(), Some("Birthday"));
        let file = form.take_file("thumbnail").unwrap();
        assert_eq!(file.file_name, "cake.png");
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
        assert_eq!(&file.bytes[..], b"PNGDATA");
        assert!(form.take_file("thumbnail").is_none());
    }

    #[tokio::test]
    async fn test_empty_file_part_is_absent() {
        let body = format!("{}--{BOUNDARY}--\r\n", file_part("image", "", ""));
        let mut form = read(body).await;
        assert!(form.take_file("image").is_none());
    }

    #[tokio::test]
    async fn test_take_text_removes() {
        let body = format!("{}--{BOUNDARY}--\r\n", text_part("isActive", "1"));
        let mut form = read(body).await;
        assert_eq!(form.take_text("isActive").as_deref(), Some("1"));
        assert_eq!(form.take_text("isActive"), None);
    }
}
