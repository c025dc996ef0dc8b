//! Dataset — loads and normalises the static contact resource.
//!
//! The resource is a JSON array of [`RawContact`](crate::RawContact) objects,
//! either an external file or the embedded sample set. Normalisation (joining
//! `job_history` into one string) happens during load, so the shared dataset
//! is never mutated once it exists.

use crate::types::{Contact, RawContact};
use std::path::Path;

/// Embedded sample dataset, used when no external file is configured.
const SAMPLE_CONTACTS: &str = include_str!("../data/contacts.json");

/// Errors from loading the contact resource.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read contact dataset at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("contact dataset at {path} is not a valid JSON contact array")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The loaded, normalised contact dataset.
///
/// Immutable after construction. Holds provenance (`source`, `loaded_at`) for
/// the health endpoint and the startup log line.
#[derive(Debug, Clone)]
pub struct Dataset {
    contacts: Vec<Contact>,
    source: String,
    loaded_at: chrono::DateTime<chrono::Utc>,
}

impl Dataset {
    /// Load and normalise a JSON contact file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let source_path = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
            path: source_path.clone(),
            source,
        })?;
        let raw: Vec<RawContact> =
            serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
                path: source_path.clone(),
                source,
            })?;
        tracing::debug!(contacts = raw.len(), path = %source_path, "contact dataset loaded");
        Ok(Self::from_raw(raw, source_path))
    }

    /// The embedded sample dataset.
    pub fn embedded() -> Self {
        let raw: Vec<RawContact> = serde_json::from_str(SAMPLE_CONTACTS)
            .expect("embedded contact dataset must be valid JSON");
        Self::from_raw(raw, "embedded".to_string())
    }

    /// Wrap already-normalised contacts. Intended for tests and fixtures.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            source: "in-memory".to_string(),
            loaded_at: chrono::Utc::now(),
        }
    }

    fn from_raw(raw: Vec<RawContact>, source: String) -> Self {
        Self {
            contacts: raw.into_iter().map(Contact::from).collect(),
            source,
            loaded_at: chrono::Utc::now(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Where the dataset came from: a file path, `"embedded"`, or `"in-memory"`.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
