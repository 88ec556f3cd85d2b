//! Binds the brief form to the snapshot history.
//!
//! Every field edit becomes a whole-brief commit: clone the current snapshot,
//! change one field, hand it back. The history's duplicate suppression makes
//! this safe to run every frame in an immediate-mode UI.

use brandkit_brief::BusinessBrief;
use brandkit_core::History;
use tracing::trace;

/// The only component that talks to the brief's [`History`].
#[derive(Debug, Clone)]
pub struct FormController {
    history: History<BusinessBrief>,
}

impl FormController {
    pub fn new(initial: BusinessBrief) -> Self {
        Self {
            history: History::new(initial),
        }
    }

    /// The brief as the user currently sees it. Read-only: edits go through
    /// [`FormController::edit`] or [`FormController::commit`].
    pub fn current(&self) -> &BusinessBrief {
        self.history.current()
    }

    /// Apply a single-field mutation as a full-snapshot commit.
    pub fn edit(&mut self, f: impl FnOnce(&mut BusinessBrief)) {
        let mut next = self.history.current().clone();
        f(&mut next);
        self.history.commit(next);
    }

    /// Commit an already-built snapshot (the widget layer edits a draft copy
    /// in place and hands it back once per frame).
    pub fn commit(&mut self, next: BusinessBrief) {
        self.history.commit(next);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) {
        trace!("form undo requested");
        self.history.undo();
    }

    pub fn redo(&mut self) {
        trace!("form redo requested");
        self.history.redo();
    }

    /// Snapshots currently held, for tests and diagnostics.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_brief::TemplateId;

    #[test]
    fn field_edit_grows_history() {
        let mut form = FormController::new(BusinessBrief::default());
        form.edit(|b| b.name = "Acme".into());

        assert_eq!(form.current().name, "Acme");
        assert!(form.can_undo());
        assert!(!form.can_redo());
        assert_eq!(form.depth(), 2);
    }

    #[test]
    fn undo_restores_previous_field_value() {
        let mut form = FormController::new(BusinessBrief::default());
        form.edit(|b| b.name = "Acme".into());
        form.edit(|b| b.tagline = "Machines that care".into());

        form.undo();
        assert_eq!(form.current().name, "Acme");
        assert_eq!(form.current().tagline, "");

        form.redo();
        assert_eq!(form.current().tagline, "Machines that care");
    }

    #[test]
    fn identical_commit_does_not_grow_history() {
        let mut form = FormController::new(BusinessBrief::default());
        // An immediate-mode frame with no user input commits the same draft.
        form.commit(form.current().clone());
        assert_eq!(form.depth(), 1);
        assert!(!form.can_undo());
    }

    #[test]
    fn edit_after_undo_discards_redo() {
        let mut form = FormController::new(BusinessBrief::default());
        form.edit(|b| b.name = "Acme".into());
        form.edit(|b| b.template = Some(TemplateId::Flyer));

        form.undo();
        form.edit(|b| b.template = Some(TemplateId::SocialPost));

        assert_eq!(form.depth(), 3);
        assert!(!form.can_redo());
        assert_eq!(form.current().template, Some(TemplateId::SocialPost));
    }
}
