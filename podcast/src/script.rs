//! Script construction, section edits, and flattening for synthesis.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use crate::types::{Script, ScriptPayload};

/// Status given to scripts that have not been synthesized yet.
pub const DRAFT_STATUS: &str = "draft";

impl Script {
    /// Build a local draft from a script-shaped server payload.
    ///
    /// `id` and `created_at` are assigned by the caller since the backend does
    /// not persist drafts.
    #[must_use]
    pub fn from_payload(payload: ScriptPayload, id: u64, created_at: String) -> Self {
        Self {
            id,
            title: payload.title,
            script_content: payload.script_content,
            sections: payload.sections,
            target_minutes: payload.target_minutes,
            style: payload.style,
            voice: payload.voice,
            status: DRAFT_STATUS.to_owned(),
            created_at,
        }
    }

    /// Replace one section's content in place. Returns `false` when no section
    /// has that id; order and every other section are left untouched.
    pub fn replace_section_content(&mut self, section_id: i64, content: &str) -> bool {
        match self.sections.iter_mut().find(|s| s.id == section_id) {
            Some(section) => {
                section.content = content.to_owned();
                true
            }
            None => false,
        }
    }

    /// Content of one section, if present.
    #[must_use]
    pub fn section_content(&self, section_id: i64) -> Option<&str> {
        self.sections.iter().find(|s| s.id == section_id).map(|s| s.content.as_str())
    }

    /// Concatenate every section as `## title` + blank line + content, in order.
    #[must_use]
    pub fn flatten(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("## {}\n\n{}", s.title, s.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
