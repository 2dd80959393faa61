//! The post creation form and its validation rules.

use crate::image::ImageFile;
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Pending values of the "Upload" modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PostForm {
    /// Post headline
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Post body
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    /// Image picked by the user, resolved only on submission
    pub image: Option<ImageFile>,
}

/// Field-level messages shown inline under the form inputs
///
/// Holds at most one message per field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    /// An error set with a single message
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.fields.insert(field.into(), message.into());
        errors
    }

    /// The message for a field, if it failed
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns `true` when every field passed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `(field, message)` pairs in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, failures)| {
                let first = failures.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map_or_else(|| first.code.to_string(), ToString::to_string);
                Some((field.to_string(), message))
            })
            .collect();

        Self { fields }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl PostForm {
    /// Validate and collect inline messages
    ///
    /// # Errors
    ///
    /// Returns the failing fields when title or content is empty.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(|errors| FormErrors::from(&errors))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(title: &str, content: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            content: content.to_string(),
            image: None,
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(form("A", "B").check(), Ok(()));
    }

    #[test]
    fn empty_form_reports_both_fields() {
        let errors = PostForm::default().check().unwrap_err();

        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("content"), Some("Content is required"));
        assert_eq!(
            errors.to_string(),
            "content: Content is required; title: Title is required"
        );
    }

    #[test]
    fn missing_content_only() {
        let errors = form("A", "").check().unwrap_err();

        assert_eq!(errors.get("title"), None);
        assert_eq!(errors.get("content"), Some("Content is required"));
    }

    #[test]
    fn whitespace_counts_as_present() {
        // Only the empty string is rejected; comments are the ones that trim.
        assert_eq!(form(" ", " ").check(), Ok(()));
    }

    #[test]
    fn single_error() {
        let errors = FormErrors::single("image", "not found");
        assert!(!errors.is_empty());
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![("image", "not found")]);
    }
}
