//! Modal form state types.
//!
//! This module contains the modal mode, the focused input, the per-field
//! error messages and the validation rule applied before every create or
//! update request.

use crate::api::Draft;

/// Maximum number of characters a trimmed code may have.
///
pub const CODE_MAX_LENGTH: usize = 5;

pub const CODE_REQUIRED: &str = "Code is required.";
pub const CODE_TOO_LONG: &str = "Code must be at most 5 characters.";
pub const NAME_REQUIRED: &str = "Name is required.";
pub const DESCRIPTION_REQUIRED: &str = "Description is required.";
pub const SUBMIT_OK: &str = "Operation completed successfully.";

/// Specifying what submitting the modal does.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ModalMode {
    #[default]
    Add,
    Edit,
}

/// Specifying the modal input that receives typed characters.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FormField {
    #[default]
    Code,
    Name,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Code, FormField::Name, FormField::Description];

    pub fn next(self) -> Self {
        match self {
            FormField::Code => FormField::Name,
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Code,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Code => FormField::Description,
            FormField::Name => FormField::Code,
            FormField::Description => FormField::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Code => "Code",
            FormField::Name => "Name",
            FormField::Description => "Description",
        }
    }

    /// Code mirrors a numeric input and only takes digits.
    ///
    pub fn accepts(self, c: char) -> bool {
        match self {
            FormField::Code => c.is_ascii_digit(),
            FormField::Name | FormField::Description => !c.is_control(),
        }
    }

    pub fn value(self, draft: &Draft) -> &str {
        match self {
            FormField::Code => &draft.code,
            FormField::Name => &draft.name,
            FormField::Description => &draft.description,
        }
    }

    pub fn value_mut(self, draft: &mut Draft) -> &mut String {
        match self {
            FormField::Code => &mut draft.code,
            FormField::Name => &mut draft.name,
            FormField::Description => &mut draft.description,
        }
    }
}

/// Messages shown inside the modal: one per field plus a status line.
///
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct FormErrors {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl FormErrors {
    /// Whether any field carries an error. The status line is not an error.
    ///
    pub fn has_errors(&self) -> bool {
        self.code.is_some() || self.name.is_some() || self.description.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_errors() && self.status.is_none()
    }

    pub fn for_field(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Code => self.code.as_deref(),
            FormField::Name => self.name.as_deref(),
            FormField::Description => self.description.as_deref(),
        }
    }
}

/// Check a draft and collect every field error at once. When nothing is
/// wrong the returned value carries only the success status.
///
pub fn validate_form(draft: &Draft) -> FormErrors {
    let mut errors = FormErrors::default();

    let code = draft.code.trim();
    if code.is_empty() {
        errors.code = Some(CODE_REQUIRED.to_string());
    } else if code.chars().count() > CODE_MAX_LENGTH {
        errors.code = Some(CODE_TOO_LONG.to_string());
    }

    if draft.name.trim().is_empty() {
        errors.name = Some(NAME_REQUIRED.to_string());
    }

    if draft.description.trim().is_empty() {
        errors.description = Some(DESCRIPTION_REQUIRED.to_string());
    }

    if !errors.has_errors() {
        errors.status = Some(SUBMIT_OK.to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_sets_status_only() {
        let errors = validate_form(&Draft::new("X1", "Widget", "A widget"));
        assert!(!errors.has_errors());
        assert_eq!(errors.status.as_deref(), Some(SUBMIT_OK));
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = validate_form(&Draft::default());
        assert_eq!(errors.code.as_deref(), Some(CODE_REQUIRED));
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(errors.description.as_deref(), Some(DESCRIPTION_REQUIRED));
        assert!(errors.status.is_none());
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let errors = validate_form(&Draft::new("   ", " ", "\t"));
        assert_eq!(errors.code.as_deref(), Some(CODE_REQUIRED));
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(errors.description.as_deref(), Some(DESCRIPTION_REQUIRED));
    }

    #[test]
    fn code_longer_than_five_characters() {
        let errors = validate_form(&Draft::new("ABCDEF", "Widget", "A widget"));
        assert_eq!(errors.code.as_deref(), Some(CODE_TOO_LONG));
        assert!(errors.name.is_none());
        assert!(errors.status.is_none());
    }

    #[test]
    fn code_length_is_measured_after_trimming() {
        let errors = validate_form(&Draft::new("  12345  ", "Widget", "A widget"));
        assert!(!errors.has_errors());
    }

    #[test]
    fn code_too_long_reported_alongside_other_fields() {
        let errors = validate_form(&Draft::new("123456", "", "A widget"));
        assert_eq!(errors.code.as_deref(), Some(CODE_TOO_LONG));
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
    }

    #[test]
    fn form_field_cycles() {
        assert_eq!(FormField::Code.next(), FormField::Name);
        assert_eq!(FormField::Description.next(), FormField::Code);
        assert_eq!(FormField::Code.previous(), FormField::Description);
        for field in FormField::ALL {
            assert_eq!(field.next().previous(), field);
        }
    }

    #[test]
    fn code_field_accepts_digits_only() {
        assert!(FormField::Code.accepts('7'));
        assert!(!FormField::Code.accepts('x'));
        assert!(FormField::Name.accepts('x'));
        assert!(!FormField::Description.accepts('\n'));
    }

    #[test]
    fn form_errors_for_field() {
        let errors = FormErrors {
            name: Some(NAME_REQUIRED.to_string()),
            ..FormErrors::default()
        };
        assert_eq!(errors.for_field(FormField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.for_field(FormField::Code), None);
        assert!(!errors.is_empty());
    }
}
