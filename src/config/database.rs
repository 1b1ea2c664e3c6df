use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Initialize the MongoDB database handle
///
/// Connects to the server and verifies reachability with a ping so a bad
/// connection string fails at startup rather than on the first request.
/// The returned handle is cheap to clone and safe for concurrent use.
pub async fn init_database(settings: &BootstrapSettings) -> Result<Database, InternalError> {
    let client = Client::with_uri_str(settings.mongodb_url())
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    let database = client.database(settings.database_name());

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| InternalError::database("ping_database", e))?;

    tracing::debug!(
        "Connected to MongoDB database: {}",
        settings.database_name()
    );

    Ok(database)
}
