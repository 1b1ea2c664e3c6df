use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Database};
use poem::test::TestClient;
use poem::Route;
use storeroom_backend::api::build_route;
use storeroom_backend::AppData;

/// Build a test client backed by a throwaway database
///
/// Returns None when MONGODB_TEST_URL is not set, so the suite passes on
/// machines without a local MongoDB. Each call uses a uniquely named
/// database; callers drop it via [`teardown`] when done.
pub async fn setup() -> Option<(TestClient<Route>, Database)> {
    let url = std::env::var("MONGODB_TEST_URL").ok()?;

    let client = Client::with_uri_str(&url)
        .await
        .expect("Failed to connect to test MongoDB");

    let database = client.database(&format!("storeroom_test_{}", ObjectId::new().to_hex()));
    let app_data = Arc::new(AppData::init(database.clone()));
    let app = build_route(app_data, "http://localhost:3000");

    Some((TestClient::new(app), database))
}

pub async fn teardown(database: Database) {
    database
        .drop()
        .await
        .expect("Failed to drop test database");
}
