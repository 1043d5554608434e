use axum::extract::Multipart;
use serde::Deserialize;

use referee_common::error::RefereeError;

fn default_filename() -> String {
    "text_input".to_string()
}

/// JSON body shared by both plagiarism endpoints.
#[derive(Debug, Deserialize)]
pub struct PlagiarismRequest {
    pub text: String,
    #[serde(default = "default_filename")]
    pub filename: String,
    /// Only read by the code endpoint.
    pub language: Option<String>,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub content: String,
}

/// Fields of a multipart review submission. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub text: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub file: Option<UploadedFile>,
}

impl SubmissionForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, RefereeError> {
        let mut form = SubmissionForm::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "text" => form.text = non_empty(field.text().await.map_err(bad_form)?),
                "code" => form.code = non_empty(field.text().await.map_err(bad_form)?),
                "language" => form.language = non_empty(field.text().await.map_err(bad_form)?),
                "file" => {
                    let filename = field
                        .file_name()
                        .filter(|n| !n.is_empty())
                        .map(str::to_string);
                    let bytes = field.bytes().await.map_err(bad_form)?;
                    // Browsers send an empty part when no file was chosen.
                    if filename.is_none() && bytes.is_empty() {
                        continue;
                    }
                    let content = String::from_utf8(bytes.to_vec()).map_err(|_| {
                        RefereeError::Validation("uploaded file is not valid UTF-8".to_string())
                    })?;
                    form.file = Some(UploadedFile { filename, content });
                }
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }

        Ok(form)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn bad_form(err: axum::extract::multipart::MultipartError) -> RefereeError {
    RefereeError::Validation(format!("invalid form data: {err}"))
}
