//! Attachment model matching the remote `attachments` table.
//!
//! Binary upload and URL issuance happen in an external collaborator; this
//! client only consumes the resulting file metadata triple.

use serde::{Deserialize, Serialize};

/// File metadata attached to an idea. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub idea_id: String,
    pub created_at: String,
}

/// Insert payload for an attachment row, created alongside idea submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttachment {
    pub idea_id: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
}

/// File metadata collected by the form before the owning idea exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
}

impl FileRef {
    /// Bind this file to a persisted idea, producing the insert payload.
    pub fn into_new_attachment(self, idea_id: &str) -> NewAttachment {
        NewAttachment {
            idea_id: idea_id.to_string(),
            file_name: self.file_name,
            file_url: self.file_url,
            file_type: self.file_type,
        }
    }
}
