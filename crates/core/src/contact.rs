//! Contact-form intake validation and promotion constants (PRD-08).
//!
//! The public site posts contact messages here; accepted messages are later
//! promoted into client records by the intake flow (create a pending lead,
//! or annotate the existing client with the same email).

use serde::Deserialize;
use validator::ValidateEmail;

use crate::validation::ValidationError;

// ---------------------------------------------------------------------------
// Limits & promotion constants
// ---------------------------------------------------------------------------

/// Minimum characters in a contact name, after trimming.
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum characters in a contact message, after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// `source` tag stamped on client records created from contact intake.
pub const INTAKE_SOURCE: &str = "website_form";
/// Project label for leads that arrived through the contact form.
pub const INTAKE_PROJECT: &str = "Contato do site";

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// The public contact form, exactly as posted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A contact submission that passed validation, trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ValidatedContact {
    /// The client document created when this contact has no existing record.
    ///
    /// A zero-value pending lead tagged with the intake source; the message
    /// becomes the description so nothing the visitor wrote is lost.
    pub fn lead_document(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "project": INTAKE_PROJECT,
            "description": self.message,
            "value": 0.0,
            "paid": 0.0,
            "deadline": serde_json::Value::Null,
            "status": "pending",
            "source": INTAKE_SOURCE,
        })
    }
}

/// Validate a public contact submission.
///
/// Name and message have minimum lengths counted in characters, not bytes;
/// accented pt-BR names must not be penalized. The email check is the full
/// well-formedness test, unlike the admin form which only requires presence.
pub fn validate_contact(input: ContactSubmission) -> Result<ValidatedContact, ValidationError> {
    let name = input.name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::ContactNameTooShort);
    }

    let email = input.email.trim();
    if !email.validate_email() {
        return Err(ValidationError::ContactEmailInvalid);
    }

    let message = input.message.trim();
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::ContactMessageTooShort);
    }

    Ok(ValidatedContact {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
