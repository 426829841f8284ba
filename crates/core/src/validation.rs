//! Write-path validation gate for client submissions (PRD-04).
//!
//! [`validate_submission`] is the only gate between the admin form DTO and
//! a persisted write. It consumes one explicit [`RawSubmission`] rather than
//! reading fields piecemeal, and returns a fully typed [`ValidatedClient`]
//! carrying the write timestamp.
//!
//! Messages are pt-BR because they surface verbatim in the admin UI notice
//! area, like the table labels in [`crate::view`].

use serde::Deserialize;

use crate::client::ClientStatus;
use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A user-correctable violation in a submission.
///
/// Covers both the admin client form and the public contact form; each
/// variant carries the exact message shown to the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Informe o nome do cliente")]
    MissingName,

    #[error("Informe o email do cliente")]
    MissingEmail,

    #[error("Informe o projeto do cliente")]
    MissingProject,

    #[error("Valor do projeto inválido")]
    InvalidValue,

    #[error("Valor pago inválido")]
    InvalidPaid,

    #[error("O valor pago não pode ser maior que o valor do projeto")]
    Overpayment,

    #[error("Por favor, insira seu nome completo")]
    ContactNameTooShort,

    #[error("Por favor, insira um email válido")]
    ContactEmailInvalid,

    #[error("A mensagem deve ter pelo menos 10 caracteres")]
    ContactMessageTooShort,
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Submission DTOs
// ---------------------------------------------------------------------------

/// An amount field as submitted: the form posts numbers, older API clients
/// post numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

/// The admin client form, exactly as posted. Everything is optional at the
/// wire level; [`validate_submission`] decides what is actually required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    pub name: String,
    pub email: String,
    pub project: String,
    pub description: String,
    pub value: Option<RawAmount>,
    pub paid: Option<RawAmount>,
    /// `YYYY-MM-DD`, as posted by a date input.
    pub deadline: Option<String>,
    pub status: Option<ClientStatus>,
}

/// A submission that passed the gate: trimmed text, parsed amounts, and the
/// write timestamp the persistence layer will record.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedClient {
    pub name: String,
    pub email: String,
    pub project: String,
    pub description: String,
    pub value: f64,
    pub paid: f64,
    pub deadline: Option<chrono::NaiveDate>,
    pub status: ClientStatus,
    pub updated_at: Timestamp,
}

impl ValidatedClient {
    /// The stored document form of this submission.
    ///
    /// Writes always carry the full field set, so merging this document
    /// over an existing one replaces every form-owned field (including
    /// clearing the deadline) while leaving intake-owned fields alone.
    pub fn to_document(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "project": self.project,
            "description": self.description,
            "value": self.value,
            "paid": self.paid,
            "deadline": self.deadline.map(|d| d.format("%Y-%m-%d").to_string()),
            "status": self.status.as_str(),
        })
    }
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Parse a required amount. `None` and garbage are both invalid.
fn parse_required_amount(raw: Option<&RawAmount>) -> Option<f64> {
    let parsed = match raw {
        Some(RawAmount::Number(n)) => Some(*n),
        Some(RawAmount::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    }?;
    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

/// Parse the `paid` amount. A missing field or blank text means "nothing
/// received yet" and falls back to zero; anything present must parse.
fn parse_paid_amount(raw: Option<&RawAmount>) -> Option<f64> {
    match raw {
        None => Some(0.0),
        Some(RawAmount::Text(s)) if s.trim().is_empty() => Some(0.0),
        other => parse_required_amount(other),
    }
}

/// Validate an admin client submission.
///
/// Rejections, in check order: empty name/email/project after trimming, an
/// unparsable or negative `value`, an unparsable or negative `paid`, and
/// `paid > value`. A malformed `deadline` is not a rejection; it degrades
/// to "no deadline" the same way loading does.
pub fn validate_submission(input: RawSubmission) -> Result<ValidatedClient, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let email = input.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }

    let project = input.project.trim();
    if project.is_empty() {
        return Err(ValidationError::MissingProject);
    }

    let value = parse_required_amount(input.value.as_ref()).ok_or(ValidationError::InvalidValue)?;
    let paid = parse_paid_amount(input.paid.as_ref()).ok_or(ValidationError::InvalidPaid)?;

    if paid > value {
        return Err(ValidationError::Overpayment);
    }

    let deadline = input
        .deadline
        .as_deref()
        .and_then(|s| chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());

    Ok(ValidatedClient {
        name: name.to_string(),
        email: email.to_string(),
        project: project.to_string(),
        description: input.description.trim().to_string(),
        value,
        paid,
        deadline,
        status: input.status.unwrap_or(ClientStatus::Active),
        updated_at: chrono::Utc::now(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
