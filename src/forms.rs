//! Form Validation & Payloads
//!
//! Client-side checks stay minimal: required fields and password
//! confirmation. Everything else is the backend's call.

use serde_json::{Map, Value};
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("New passwords don't match.")]
    NewPasswordMismatch,
    #[error("Please fill in {0}.")]
    Missing(String),
    #[error("{0}")]
    Custom(String),
}

pub fn passwords_match(password: &str, confirm: &str) -> Result<(), FormError> {
    if password == confirm {
        Ok(())
    } else {
        Err(FormError::PasswordMismatch)
    }
}

/// Change-password wording differs from the registration forms
pub fn new_passwords_match(password: &str, confirm: &str) -> Result<(), FormError> {
    passwords_match(password, confirm).map_err(|_| FormError::NewPasswordMismatch)
}

/// First blank field, by label.
pub fn require(fields: &[(&str, &str)]) -> Result<(), FormError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((label, _)) => Err(FormError::Missing(label.to_string())),
        None => Ok(()),
    }
}

/// `"a, b"` as the `{a, b}` array literal the programs endpoint expects
pub fn array_literal(comma_separated: &str) -> String {
    format!("{{{}}}", comma_separated.trim())
}

// ========================
// Payloads
// ========================

/// Body of a form submission: JSON unless a file is attached.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPayload<F = web_sys::File> {
    Json(Value),
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<(String, F)>,
    },
}

#[derive(Debug, Clone)]
pub struct FormBuilder<F = web_sys::File> {
    fields: Vec<(String, String)>,
    files: Vec<(String, F)>,
    force_multipart: bool,
}

impl<F> Default for FormBuilder<F> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            files: Vec::new(),
            force_multipart: false,
        }
    }
}

impl<F> FormBuilder<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoints parsed by a multipart middleware reject JSON bodies.
    pub fn multipart() -> Self {
        Self {
            force_multipart: true,
            ..Self::default()
        }
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    pub fn file(mut self, name: &str, file: Option<F>) -> Self {
        if let Some(file) = file {
            self.files.push((name.to_string(), file));
        }
        self
    }

    pub fn build(self) -> FormPayload<F> {
        if self.files.is_empty() && !self.force_multipart {
            let body: Map<String, Value> = self
                .fields
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect();
            FormPayload::Json(Value::Object(body))
        } else {
            FormPayload::Multipart {
                fields: self.fields,
                files: self.files,
            }
        }
    }
}

impl<F> FormPayload<F> {
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }
}

impl FormPayload<web_sys::File> {
    /// Browser `FormData` for a multipart payload; `None` for JSON.
    pub fn to_form_data(&self) -> Result<Option<web_sys::FormData>, JsValue> {
        let Self::Multipart { fields, files } = self else {
            return Ok(None);
        };
        let form = web_sys::FormData::new()?;
        for (name, value) in fields {
            form.append_with_str(name, value)?;
        }
        for (name, file) in files {
            form.append_with_blob_and_filename(name, file, &file.name())?;
        }
        Ok(Some(form))
    }
}

// ========================
// Course resources
// ========================

/// Text part of a course resource upload
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceFields {
    pub course_id: Option<u32>,
    pub description: String,
    pub timeline: String,
    pub level: String,
    pub video_link: String,
}

/// Multipart body for `POST /api/resources`. Both files are mandatory;
/// the video link is sent only when given.
pub fn resource_form<F>(fields: &ResourceFields, resource: Option<F>, image: Option<F>) -> Result<FormPayload<F>, FormError> {
    let course_id = fields
        .course_id
        .ok_or_else(|| FormError::Missing("the course".to_string()))?;
    require(&[
        ("the description", fields.description.as_str()),
        ("the timeline", fields.timeline.as_str()),
        ("the level", fields.level.as_str()),
    ])?;
    let (Some(resource), Some(image)) = (resource, image) else {
        return Err(FormError::Custom(
            "Both a resource file and a course image are required.".to_string(),
        ));
    };
    let mut form = FormBuilder::multipart()
        .text("courseId", course_id.to_string())
        .text("description", fields.description.trim())
        .text("timeline", fields.timeline.trim())
        .text("level", fields.level.trim().to_lowercase());
    if !fields.video_link.trim().is_empty() {
        form = form.text("videoLink", fields.video_link.trim());
    }
    Ok(form
        .file("resourceFile", Some(resource))
        .file("courseImage", Some(image))
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_password_confirmation() {
        assert!(passwords_match("s3cret!", "s3cret!").is_ok());
        assert_eq!(passwords_match("s3cret!", "s3cret"), Err(FormError::PasswordMismatch));
        assert_eq!(
            new_passwords_match("a", "b").unwrap_err().to_string(),
            "New passwords don't match."
        );
    }

    #[test]
    fn test_required_fields() {
        assert!(require(&[("your name", "Aline"), ("your email", "a@b.rw")]).is_ok());
        let err = require(&[("your name", "Aline"), ("a topic", "  ")]).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in a topic.");
    }

    #[test]
    fn test_json_without_files() {
        let payload: FormPayload<&str> = FormBuilder::new()
            .text("email", "grace@shecan.rw")
            .file("cv", None)
            .build();
        assert_eq!(payload, FormPayload::Json(json!({"email": "grace@shecan.rw"})));
        assert!(!payload.is_multipart());
    }

    #[test]
    fn test_file_switches_to_multipart() {
        let payload = FormBuilder::new()
            .text("name", "Grace")
            .file("cv", Some("cv.pdf"))
            .build();
        match payload {
            FormPayload::Multipart { fields, files } => {
                assert_eq!(fields, vec![("name".to_string(), "Grace".to_string())]);
                assert_eq!(files, vec![("cv".to_string(), "cv.pdf")]);
            }
            other => panic!("expected multipart, got {:?}", other),
        }
    }

    #[test]
    fn test_forced_multipart_without_file() {
        let payload: FormPayload<&str> = FormBuilder::multipart().text("bio", "hi").build();
        assert!(payload.is_multipart());
    }

    #[test]
    fn test_array_literal() {
        assert_eq!(array_literal(" Sewing, Design "), "{Sewing, Design}");
    }

    fn resource_fields() -> ResourceFields {
        ResourceFields {
            course_id: Some(4),
            description: "Week one slides".into(),
            timeline: "2 weeks".into(),
            level: "Intermediate".into(),
            video_link: String::new(),
        }
    }

    #[test]
    fn test_resource_upload_needs_both_files() {
        let fields = resource_fields();
        for (resource, image) in [(Some("notes.pdf"), None), (None, Some("cover.png")), (None, None)] {
            let err = resource_form(&fields, resource, image).unwrap_err();
            assert_eq!(err.to_string(), "Both a resource file and a course image are required.");
        }
        let err = resource_form(&ResourceFields { course_id: None, ..fields }, Some("a"), Some("b")).unwrap_err();
        assert_eq!(err, FormError::Missing("the course".to_string()));
    }

    #[test]
    fn test_resource_upload_payload() {
        let payload = resource_form(&resource_fields(), Some("notes.pdf"), Some("cover.png")).unwrap();
        match payload {
            FormPayload::Multipart { fields, files } => {
                assert!(fields.contains(&("courseId".to_string(), "4".to_string())));
                assert!(fields.contains(&("level".to_string(), "intermediate".to_string())));
                assert!(!fields.iter().any(|(name, _)| name == "videoLink"));
                assert_eq!(
                    files,
                    vec![("resourceFile".to_string(), "notes.pdf"), ("courseImage".to_string(), "cover.png")]
                );
            }
            other => panic!("expected multipart, got {:?}", other),
        }

        let with_video = ResourceFields {
            video_link: " https://youtu.be/x ".into(),
            ..resource_fields()
        };
        let FormPayload::Multipart { fields, .. } = resource_form(&with_video, Some("a"), Some("b")).unwrap() else {
            panic!("expected multipart");
        };
        assert!(fields.contains(&("videoLink".to_string(), "https://youtu.be/x".to_string())));
    }
}
