// src/model.rs
// Pattern and Tag records as stored and exchanged over the wire

use serde::{Deserialize, Serialize};

/// A labelled descriptor attached to a pattern (platform, architecture style, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default)]
    pub tag_id: String,
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub tag_value: String,
    /// Presentation hint for the UI (icon class), often absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Tag {
    pub fn new(
        tag_id: impl Into<String>,
        tag_name: impl Into<String>,
        tag_value: impl Into<String>,
    ) -> Self {
        Self {
            tag_id: tag_id.into(),
            tag_name: tag_name.into(),
            tag_value: tag_value.into(),
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// A named architectural/solution record placed on the radar by ring and quadrant.
///
/// `is_new` is kept as the literal text the client sent ("TRUE"/"FALSE").
/// `pattern` holds ids of related patterns; they are not checked for existence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub ring: String,
    #[serde(default)]
    pub quadrant: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_new: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pattern: Vec<String>,
    #[serde(default)]
    pub use_case: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Pattern {
    /// Case-insensitive exact match on the quadrant axis
    pub fn in_quadrant(&self, quadrant: &str) -> bool {
        eq_ignore_case(&self.quadrant, quadrant)
    }

    /// Case-insensitive exact match on the ring axis
    pub fn in_ring(&self, ring: &str) -> bool {
        eq_ignore_case(&self.ring, ring)
    }
}

/// Folds both sides to lowercase before comparing. `str::to_lowercase` is
/// locale independent, so results do not vary by platform.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
