//! Completion capture: resolution note plus attachments.
//!
//! A draft only exists while `completed` is the selected target. Leaving
//! the completion screen discards the draft entirely; re-selecting
//! `completed` starts from a clean one, matching how the mobile clients
//! reset the completion form.

use crate::models::ValidatedStatusChange;
use crate::state_machine::{RequiredField, TransitionError, TransitionResult};

/// In-progress completion data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionDraft {
    completion_note: String,
    attachments: Vec<String>,
}

impl CompletionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.completion_note = note.into();
    }

    pub fn note(&self) -> &str {
        &self.completion_note
    }

    /// Append a file reference. No de-duplication and no content checks;
    /// the upload collaborator owns file validation.
    pub fn add_attachment(&mut self, file: impl Into<String>) {
        self.attachments.push(file.into());
    }

    /// Remove by position. Out-of-range indices are a silent no-op; the UI
    /// only ever hands back indices it rendered.
    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }

    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Finalize into a validated completion change.
    ///
    /// Fails when the note is empty or whitespace-only; attachments alone
    /// never satisfy the requirement.
    pub fn finalize(&self) -> TransitionResult<ValidatedStatusChange> {
        let note = self.completion_note.trim();
        if note.is_empty() {
            return Err(TransitionError::MissingField {
                field: RequiredField::CompletionNote,
            });
        }

        Ok(ValidatedStatusChange::Completion {
            completion_note: note.to_string(),
            attachments: self.attachments.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachments_append_in_order_without_dedup() {
        let mut draft = CompletionDraft::new();
        draft.add_attachment("photo1.jpg");
        draft.add_attachment("photo2.jpg");
        draft.add_attachment("photo1.jpg");
        assert_eq!(
            draft.attachments(),
            &["photo1.jpg", "photo2.jpg", "photo1.jpg"]
        );
    }

    #[test]
    fn test_remove_attachment_by_position() {
        let mut draft = CompletionDraft::new();
        draft.add_attachment("a.jpg");
        draft.add_attachment("b.jpg");
        draft.remove_attachment(0);
        assert_eq!(draft.attachments(), &["b.jpg"]);
    }

    #[test]
    fn test_remove_out_of_range_is_silent() {
        let mut draft = CompletionDraft::new();
        draft.add_attachment("a.jpg");
        draft.remove_attachment(5);
        assert_eq!(draft.attachments(), &["a.jpg"]);
    }

    #[test]
    fn test_finalize_requires_note() {
        let mut draft = CompletionDraft::new();
        draft.add_attachment("photo1.jpg");
        assert_eq!(
            draft.finalize(),
            Err(TransitionError::MissingField {
                field: RequiredField::CompletionNote,
            })
        );

        draft.set_note("   ");
        assert!(draft.finalize().is_err());
    }

    #[test]
    fn test_finalize_trims_note_and_keeps_attachments() {
        let mut draft = CompletionDraft::new();
        draft.set_note("  Resolved, replaced router  ");
        draft.add_attachment("photo1.jpg");

        let change = draft.finalize().unwrap();
        assert_eq!(
            change,
            ValidatedStatusChange::Completion {
                completion_note: "Resolved, replaced router".to_string(),
                attachments: vec!["photo1.jpg".to_string()],
            }
        );
    }
}
