use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Store-assigned identifier of a persisted submission. Opaque text, never
/// produced by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    pub fn new(id: String) -> SubmissionId {
        Self(id)
    }
}

impl AsRef<str> for SubmissionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<SubmissionId> for String {
    fn from(id: SubmissionId) -> Self {
        id.0
    }
}

/// A stored submission exactly as the store returns it: the assigned id plus
/// the original fields, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "_id")]
    pub id: SubmissionId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Outcome of an accepted submission. Persistence already succeeded by the
/// time one of these exists; `notified` records whether the notification
/// email also went out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: SubmissionId,
    pub notified: bool,
}
