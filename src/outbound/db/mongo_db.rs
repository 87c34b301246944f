use crate::configuration::DatabaseSettings;
use crate::domain::contact::{
    models::{
        record::{SubmissionId, SubmissionRecord},
        submission::ContactSubmission,
    },
    ports::{SubmissionStore, SubmissionStoreError},
};
use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use secrecy::ExposeSecret;

#[derive(Clone, Debug)]
pub struct MongoDb {
    database: Option<Database>,
}

impl MongoDb {
    const COLLECTION: &'static str = "contactQueries";

    /// Builds the store. The client only opens connections on first use, so
    /// this never blocks startup; when the client cannot even be configured
    /// the store is left without a database and every operation reports
    /// itself as unavailable.
    pub async fn new(configuration: &DatabaseSettings) -> MongoDb {
        let database = match connect(configuration).await {
            Ok(database) => Some(database),
            Err(error) => {
                tracing::error!(
                    error.cause_chain = ?error,
                    "Failed to initialize the database client",
                );
                None
            }
        };
        MongoDb { database }
    }

    /// Round-trips a `ping` command to confirm the deployment is reachable.
    pub async fn ping(&self) -> Result<(), SubmissionStoreError> {
        self.database()?
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("Failed to ping the database")?;
        Ok(())
    }

    fn database(&self) -> Result<&Database, SubmissionStoreError> {
        self.database
            .as_ref()
            .ok_or(SubmissionStoreError::Unavailable)
    }

    fn collection(&self) -> Result<mongodb::Collection<Document>, SubmissionStoreError> {
        Ok(self.database()?.collection::<Document>(Self::COLLECTION))
    }
}

async fn connect(configuration: &DatabaseSettings) -> Result<Database, anyhow::Error> {
    let mut options = ClientOptions::parse(configuration.connection_string().expose_secret())
        .await
        .context("Failed to parse the database connection string")?;
    options.server_selection_timeout = Some(std::time::Duration::from_secs(2));

    let client = Client::with_options(options).context("Failed to build the database client")?;
    Ok(client.database(&configuration.database_name))
}

#[async_trait]
impl SubmissionStore for MongoDb {
    #[tracing::instrument(name = "Saving contact request in db", skip(self, submission))]
    async fn insert(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmissionId, SubmissionStoreError> {
        let document = mongodb::bson::to_document(submission)
            .context("Failed to map the submission to a BSON document")?;

        let outcome = self
            .collection()?
            .insert_one(document, None)
            .await
            .context("Failed to insert the contact request")?;

        Ok(submission_id_from_bson(outcome.inserted_id))
    }

    #[tracing::instrument(name = "Fetching contact requests from db", skip(self))]
    async fn fetch_all(&self) -> Result<Vec<SubmissionRecord>, SubmissionStoreError> {
        let documents: Vec<Document> = self
            .collection()?
            .find(None, None)
            .await
            .context("Failed to query the contact request collection")?
            .try_collect()
            .await
            .context("Failed to drain the contact request cursor")?;

        documents
            .into_iter()
            .map(record_from_document)
            .collect::<Result<Vec<_>, _>>()
            .map_err(SubmissionStoreError::Unexpected)
    }
}

fn submission_id_from_bson(id: Bson) -> SubmissionId {
    let id = match id {
        Bson::ObjectId(object_id) => object_id.to_hex(),
        Bson::String(id) => id,
        other => other.to_string(),
    };
    SubmissionId::new(id)
}

/// Splits a stored document into the assigned id and the submitted fields,
/// rendered back as plain JSON.
fn record_from_document(mut document: Document) -> Result<SubmissionRecord, anyhow::Error> {
    let id = document
        .remove("_id")
        .map(submission_id_from_bson)
        .ok_or_else(|| anyhow::anyhow!("Stored submission is missing its _id"))?;

    match Bson::Document(document).into_relaxed_extjson() {
        serde_json::Value::Object(fields) => Ok(SubmissionRecord { id, fields }),
        other => Err(anyhow::anyhow!(
            "Stored submission did not map to a JSON object: {}",
            other
        )),
    }
}
