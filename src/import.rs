use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::{DayAvailability, TeamMember};
use crate::store::MemberStore;

// Accept either an export document or a bare list of members.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImportFile {
    Export { members: Vec<ImportedMember> },
    Members(Vec<ImportedMember>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedMember {
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    availability: Vec<DayAvailability>,
    created_at: Option<String>,
}

impl ImportedMember {
    fn into_member(self) -> TeamMember {
        let mut member = TeamMember::new(self.name, self.availability);
        if let Some(id) = self.id.filter(|id| !id.is_empty()) {
            member.id = id;
        }
        if let Some(created_at) = self.created_at {
            member.created_at = created_at;
        }
        member
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub replaced: usize,
}

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "could not read import file: {e}"),
            ImportError::Json(e) => write!(f, "invalid import file: {e}"),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::Io(e)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Json(e)
    }
}

/// Load members from a JSON file into `store`, one upsert per record.
///
/// Later records win over earlier ones with the same name, as they would
/// through the HTTP API.
pub async fn import_members(store: &MemberStore, path: &Path) -> Result<ImportSummary, ImportError> {
    let content = fs::read_to_string(path)?;
    let members = match serde_json::from_str(&content)? {
        ImportFile::Export { members } => members,
        ImportFile::Members(members) => members,
    };

    let mut summary = ImportSummary::default();
    for imported in members {
        if store.upsert(imported.into_member()).await.is_replace() {
            summary.replaced += 1;
        } else {
            summary.inserted += 1;
        }
    }

    tracing::info!(
        path = %path.display(),
        inserted = summary.inserted,
        replaced = summary.replaced,
        "imported members"
    );
    Ok(summary)
}
