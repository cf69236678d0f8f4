//! Partial document updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use notehub_core::error::AppError;

use super::model::{Document, validate_title};

/// Fields a client may change on an existing document.
///
/// Omitted fields keep their stored value. Unknown fields are rejected so a
/// client cannot try to move a document or rewrite its identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentPatch {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Merge patch applied to the stored body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl DocumentPatch {
    /// Whether applying this patch would change nothing but `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Check field constraints before touching storage.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(())
    }

    /// Merge this patch into `doc` and stamp `updated_at`.
    pub fn apply(&self, doc: &mut Document, now: DateTime<Utc>) -> Result<(), AppError> {
        if let Some(title) = &self.title {
            doc.title = validate_title(title)?;
        }
        if let Some(content) = &self.content {
            merge_patch(&mut doc.content, content);
        }
        doc.updated_at = now;
        Ok(())
    }
}

/// JSON merge patch (RFC 7386).
///
/// Objects merge key by key, `null` removes a key, anything else replaces
/// the target wholesale.
pub fn merge_patch(target: &mut Value, patch: &Value) {
    let Value::Object(patch_map) = patch else {
        *target = patch.clone();
        return;
    };

    if !target.is_object() {
        *target = Value::Object(Default::default());
    }

    if let Value::Object(target_map) = target {
        for (key, value) in patch_map {
            if value.is_null() {
                target_map.remove(key);
            } else {
                merge_patch(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
    }
}
