//! Contact form data and validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four user-editable contact fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

impl ContactForm {
	/// Copy of the form with surrounding whitespace removed from every field.
	pub fn trimmed(&self) -> Self {
		Self {
			name: self.name.trim().to_string(),
			email: self.email.trim().to_string(),
			subject: self.subject.trim().to_string(),
			message: self.message.trim().to_string(),
		}
	}
}

/// Identifies a form input, for error highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
	Name,
	Email,
	Subject,
	Message,
}

impl FormField {
	/// DOM id of the input element.
	pub fn id(self) -> &'static str {
		match self {
			FormField::Name => "name",
			FormField::Email => "email",
			FormField::Subject => "subject",
			FormField::Message => "message",
		}
	}
}

/// A single validation failure. The display text is shown to the user as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Name is required")]
	NameRequired,
	#[error("Email is required")]
	EmailRequired,
	#[error("Please enter a valid email address")]
	EmailInvalid,
	#[error("Subject is required")]
	SubjectRequired,
	#[error("Message is required")]
	MessageRequired,
}

impl ValidationError {
	pub fn field(&self) -> FormField {
		match self {
			ValidationError::NameRequired => FormField::Name,
			ValidationError::EmailRequired | ValidationError::EmailInvalid => FormField::Email,
			ValidationError::SubjectRequired => FormField::Subject,
			ValidationError::MessageRequired => FormField::Message,
		}
	}
}

/// Every problem found in one submission, in field order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
	pub fn messages(&self) -> Vec<String> {
		self.0.iter().map(ToString::to_string).collect()
	}

	pub fn fields(&self) -> Vec<FormField> {
		self.0.iter().map(ValidationError::field).collect()
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.messages().join("; "))
	}
}

impl std::error::Error for ValidationErrors {}

/// Whitespace as matched by `\s` in a JavaScript regex: Unicode whitespace
/// plus the byte order mark, minus NEL.
fn is_js_whitespace(c: char) -> bool {
	(c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Email shape check: `local@domain.tld` with no whitespace and exactly one `@`.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(email: &str) -> bool {
	if email.chars().any(is_js_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	// Some dot must have at least one char on either side within the domain.
	domain
		.char_indices()
		.any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate all fields at once. Fields are checked as given; trim first.
pub fn validate(form: &ContactForm) -> Result<(), ValidationErrors> {
	let mut errors = Vec::new();

	if form.name.is_empty() {
		errors.push(ValidationError::NameRequired);
	}
	if form.email.is_empty() {
		errors.push(ValidationError::EmailRequired);
	} else if !is_valid_email(&form.email) {
		errors.push(ValidationError::EmailInvalid);
	}
	if form.subject.is_empty() {
		errors.push(ValidationError::SubjectRequired);
	}
	if form.message.is_empty() {
		errors.push(ValidationError::MessageRequired);
	}

	if errors.is_empty() {
		Ok(())
	} else {
		Err(ValidationErrors(errors))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
		ContactForm {
			name: name.into(),
			email: email.into(),
			subject: subject.into(),
			message: message.into(),
		}
	}

	#[test]
	fn missing_name_is_the_only_error() {
		let err = validate(&form("", "a@b.com", "x", "y")).unwrap_err();
		assert_eq!(err.messages(), vec!["Name is required".to_string()]);
		assert_eq!(err.fields(), vec![FormField::Name]);
	}

	#[test]
	fn complete_form_is_accepted() {
		assert!(validate(&form("Ama", "ama@x.com", "Hi", "Hello")).is_ok());
	}

	#[test]
	fn empty_form_lists_every_field_in_order() {
		let err = validate(&ContactForm::default()).unwrap_err();
		assert_eq!(
			err.0,
			vec![
				ValidationError::NameRequired,
				ValidationError::EmailRequired,
				ValidationError::SubjectRequired,
				ValidationError::MessageRequired,
			]
		);
	}

	#[test]
	fn malformed_email_reports_shape_not_presence() {
		let err = validate(&form("Ama", "ama.x.com", "Hi", "Hello")).unwrap_err();
		assert_eq!(err.0, vec![ValidationError::EmailInvalid]);
		assert_eq!(err.to_string(), "Please enter a valid email address");
	}

	#[test]
	fn whitespace_only_fields_fail_after_trim() {
		let raw = form("  ", " ama@x.com ", "\tHi", "Hello\n");
		let trimmed = raw.trimmed();
		assert_eq!(trimmed.email, "ama@x.com");
		let err = validate(&trimmed).unwrap_err();
		assert_eq!(err.0, vec![ValidationError::NameRequired]);
	}

	#[test]
	fn email_shape() {
		for ok in ["a@b.co", "first.last@sub.example.org", "x@y.z", "a@b..c", "ü@ex.ample"] {
			assert!(is_valid_email(ok), "{ok} should be accepted");
		}
		for bad in [
			"", "a", "a@", "@b.com", "a@b", "a@.com", "a@b.", "a b@c.com", "a@b@c.com", "a@b .com",
			"a@.",
		] {
			assert!(!is_valid_email(bad), "{bad} should be rejected");
		}
	}

	#[test]
	fn email_whitespace_follows_js_regex_class() {
		// Byte order mark counts as whitespace; NEL does not.
		assert!(!is_valid_email("a\u{FEFF}@b.com"));
		assert!(!is_valid_email("a@b.c\u{FEFF}om"));
		assert!(!is_valid_email("a\u{A0}@b.com"));
		assert!(!is_valid_email("a@b\u{3000}.com"));
		assert!(is_valid_email("a\u{85}@b.com"));
	}
}
