use crate::error::{AgendaError, Result};
use crate::talk::Talk;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A single talk as it appears in a source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TalkRecord {
    /// Type tag, e.g. "REGULAR_TALK"
    #[serde(rename = "type")]
    pub talk_type: String,
    /// Free-text description
    pub description: String,
}

impl TalkRecord {
    pub fn new(talk_type: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            talk_type: talk_type.into(),
            description: description.into(),
        }
    }
}

impl TryFrom<TalkRecord> for Talk {
    type Error = AgendaError;

    fn try_from(record: TalkRecord) -> Result<Self> {
        Talk::from_tag(&record.talk_type, record.description)
    }
}

/// Talk source document: `{ "talks": [ { "type": ..., "description": ... } ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TalkSource {
    pub talks: Vec<TalkRecord>,
}

impl TalkSource {
    /// Parse a JSON talk source
    pub fn from_json_str(data: &str) -> Result<Self> {
        crate::from_json(data)
    }

    /// Parse a YAML talk source
    pub fn from_yaml_str(data: &str) -> Result<Self> {
        crate::from_yaml(data)
    }

    /// Read a talk source from disk. `.yaml`/`.yml` files are parsed as YAML,
    /// everything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| AgendaError::source_unavailable(path.display().to_string(), e))?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );

        debug!(path = %path.display(), yaml = is_yaml, "Parsing talk source");

        if is_yaml {
            Self::from_yaml_str(&data)
        } else {
            Self::from_json_str(&data)
        }
    }

    /// Validate every record into a [`Talk`], failing on the first unknown type tag
    pub fn into_talks(self) -> Result<Vec<Talk>> {
        let talks = self
            .talks
            .into_iter()
            .map(Talk::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} talks", talks.len());
        Ok(talks)
    }
}
