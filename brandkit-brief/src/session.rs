//! Session model for BRANDKIT (v1).
//!
//! Sessions are the durable unit of work. They store:
//! - the current business brief
//! - the user's image-edit instructions, in order
//! - free-form notes

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::{BusinessBrief, BRIEF_SCHEMA_VERSION};

/// File extension recommended for saved sessions.
pub const SESSION_FILE_EXT: &str = "brand.json";

/// One image-edit instruction the user issued at a given iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEntryV1 {
    pub iteration: u32,
    pub instruction: String,
}

/// v1 session object. Save/load this as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSessionV1 {
    pub session_id: Uuid,
    pub schema_version: String,

    pub brief: BusinessBrief,

    /// Image-edit instructions applied to the generated asset, oldest first.
    pub edit_history: Vec<EditEntryV1>,

    pub notes: Option<String>,
}

impl DesignSessionV1 {
    /// Create a new session around a brief.
    pub fn new(brief: BusinessBrief) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!(session_id = %session_id, "creating new design session");

        Self {
            session_id,
            schema_version: BRIEF_SCHEMA_VERSION.to_string(),
            brief,
            edit_history: vec![],
            notes: None,
        }
    }

    /// Record an image-edit instruction. Returns the iteration number.
    pub fn push_edit(&mut self, instruction: impl Into<String>) -> u32 {
        let iter = self.edit_history.len() as u32;
        self.edit_history.push(EditEntryV1 {
            iteration: iter,
            instruction: instruction.into(),
        });
        iter
    }
}

/// Save a session to disk as pretty JSON.
pub fn save_session(path: impl AsRef<Path>, session: &DesignSessionV1) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        // fs::write does NOT create directories; tests may run with missing `target/`
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(session).context("serialize session to json")?;
    fs::write(path, json).with_context(|| format!("write session file: {}", path.display()))?;
    Ok(())
}

/// Load a session from disk.
pub fn load_session(path: impl AsRef<Path>) -> anyhow::Result<DesignSessionV1> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read session file: {}", path.display()))?;
    let session: DesignSessionV1 = serde_json::from_str(&data).context("parse session json")?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_edit_numbers_iterations() {
        let mut s = DesignSessionV1::new(BusinessBrief::default());
        assert_eq!(s.push_edit("make the headline larger"), 0);
        assert_eq!(s.push_edit("use a darker background"), 1);
        assert_eq!(s.edit_history.len(), 2);
        assert_eq!(s.edit_history[1].instruction, "use a darker background");
    }
}
