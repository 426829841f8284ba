//! Edit-session state machine for the admin form.
//!
//! A single admin session edits at most one record at a time. Transitions
//! are pure; the HTTP layer owns the current value behind a lock.

use crate::types::ClientId;

/// What the admin form is currently doing.
///
/// `Editing(None)` is a new, unsaved record; `Editing(Some(id))` is an
/// existing one being revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(Option<ClientId>),
}

impl EditSession {
    /// Open the form for a brand-new record. Replaces any session already
    /// in progress without complaint.
    pub fn begin_new(self) -> Self {
        Self::Editing(None)
    }

    /// Open the form for an existing record. Replaces any session already
    /// in progress without complaint.
    pub fn begin_edit(self, id: ClientId) -> Self {
        Self::Editing(Some(id))
    }

    /// Close the form. Save success, save failure, and cancel all land
    /// here; a failed save never leaves a half-open session behind.
    pub fn finish(self) -> Self {
        Self::Idle
    }

    /// The record under edit, if any.
    pub fn editing_id(self) -> Option<ClientId> {
        match self {
            Self::Editing(id) => id,
            Self::Idle => None,
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
