//! Shared multipart form collector for the content creation handlers.
//!
//! Every POST endpoint accepts `multipart/form-data`; this module drains
//! the payload once into text fields and in-memory image parts.

use std::collections::HashMap;

use axum::extract::Multipart;
use chapter_core::error::CoreError;
use chrono::NaiveDate;

use crate::error::AppError;

/// Accepted field names for file parts.
const FILE_FIELDS: &[&str] = &["image", "images", "images[]"];

/// An in-memory file part from a multipart form.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// A fully drained multipart form: text fields plus image file parts.
#[derive(Debug, Default)]
pub struct ContentForm {
    fields: HashMap<String, String>,
    files: Vec<FilePart>,
}

impl ContentForm {
    /// Drain a multipart payload into memory.
    ///
    /// File parts must arrive under `image`/`images` and carry an
    /// `image/*` content type; anything else is rejected with 400.
    /// Unknown text fields are kept and simply never read.
    pub async fn collect(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();

            if FILE_FIELDS.contains(&name.as_str()) {
                let filename = field.file_name().unwrap_or("image").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                if !content_type.starts_with("image/") {
                    return Err(AppError::BadRequest(format!(
                        "Field '{name}' must be an image, got '{content_type}'"
                    )));
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.files.push(FilePart {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// A trimmed text field, `None` if absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// A trimmed optional text field as an owned value.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    /// A required text field, or a 400 validation error naming it.
    pub fn require(&self, name: &str) -> Result<String, AppError> {
        self.optional(name).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Missing required field '{name}'"
            )))
        })
    }

    /// A required `YYYY-MM-DD` date field.
    pub fn require_date(&self, name: &str) -> Result<NaiveDate, AppError> {
        let raw = self.require(name)?;
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "Field '{name}' must be a YYYY-MM-DD date, got '{raw}'"
            )))
        })
    }

    /// A boolean flag field: `Some(true)` for `true`/`1`/`on`,
    /// `Some(false)` for any other present value, `None` if absent.
    pub fn optional_flag(&self, name: &str) -> Option<bool> {
        self.text(name)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "on"))
    }

    /// The collected image file parts, in arrival order.
    pub fn files(&self) -> &[FilePart] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(fields: &[(&str, &str)]) -> ContentForm {
        ContentForm {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: Vec::new(),
        }
    }

    #[test]
    fn blank_fields_count_as_absent() {
        let form = form_with(&[("title", "   ")]);
        assert_eq!(form.text("title"), None);
        assert!(form.require("title").is_err());
    }

    #[test]
    fn require_date_parses_iso_dates() {
        let form = form_with(&[("date", "2025-03-14")]);
        let date = form.require_date("date").unwrap();
        assert_eq!(date.to_string(), "2025-03-14");
    }

    #[test]
    fn require_date_rejects_other_formats() {
        let form = form_with(&[("date", "14/03/2025")]);
        assert!(form.require_date("date").is_err());
    }

    #[test]
    fn optional_flag_reads_truthy_values() {
        assert_eq!(form_with(&[("priority", "true")]).optional_flag("priority"), Some(true));
        assert_eq!(form_with(&[("priority", "on")]).optional_flag("priority"), Some(true));
        assert_eq!(form_with(&[("priority", "no")]).optional_flag("priority"), Some(false));
        assert_eq!(form_with(&[]).optional_flag("priority"), None);
    }
}
