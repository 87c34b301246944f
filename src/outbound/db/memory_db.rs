use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::contact::{
    models::{
        record::{SubmissionId, SubmissionRecord},
        submission::ContactSubmission,
    },
    ports::{SubmissionStore, SubmissionStoreError},
};

/// Store that keeps submissions in process memory. The test suite uses it in
/// place of a real deployment; `unavailable()` mimics a store whose client
/// never initialized.
#[derive(Debug)]
pub struct InMemoryDb {
    records: Option<Mutex<Vec<SubmissionRecord>>>,
}

impl InMemoryDb {
    pub fn new() -> InMemoryDb {
        InMemoryDb {
            records: Some(Mutex::new(Vec::new())),
        }
    }

    pub fn unavailable() -> InMemoryDb {
        InMemoryDb { records: None }
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<SubmissionRecord>>, SubmissionStoreError> {
        let records = self
            .records
            .as_ref()
            .ok_or(SubmissionStoreError::Unavailable)?;
        records.lock().map_err(|_| {
            SubmissionStoreError::Unexpected(anyhow::anyhow!(
                "The submission store mutex was poisoned"
            ))
        })
    }
}

impl Default for InMemoryDb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionStore for InMemoryDb {
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmissionId, SubmissionStoreError> {
        let fields = submission_fields(submission)?;
        let mut records = self.records()?;
        let id = SubmissionId::new(format!("{:024x}", records.len() + 1));
        records.push(SubmissionRecord {
            id: id.clone(),
            fields,
        });
        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<SubmissionRecord>, SubmissionStoreError> {
        Ok(self.records()?.clone())
    }
}

fn submission_fields(
    submission: &ContactSubmission,
) -> Result<Map<String, Value>, SubmissionStoreError> {
    match serde_json::to_value(submission) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(SubmissionStoreError::Unexpected(anyhow::anyhow!(
            "Submission did not map to a JSON object: {}",
            other
        ))),
        Err(error) => Err(SubmissionStoreError::Unexpected(
            anyhow::Error::from(error).context("Failed to map the submission to JSON"),
        )),
    }
}
