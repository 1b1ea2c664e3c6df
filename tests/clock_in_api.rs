mod common;

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::oid::ObjectId;
use poem::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_clock_in_returns_id_and_server_assigned_timestamp() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    let resp = cli
        .post("/clock-in")
        .body_json(&json!({ "email": "a@x.com", "location": "warehouse-3" }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let body = resp.json().await;
    let record = body.value().object();

    assert_eq!(record.get("id").string().len(), 24);
    assert_eq!(record.get("email").string(), "a@x.com");
    assert_eq!(record.get("location").string(), "warehouse-3");

    let insert_datetime = DateTime::parse_from_rfc3339(record.get("insert_datetime").string())
        .expect("insert_datetime should be RFC 3339");
    let age = Utc::now().signed_duration_since(insert_datetime.with_timezone(&Utc));
    assert!(age.num_seconds().abs() < 60);

    common::teardown(db).await;
}

#[tokio::test]
async fn test_get_clock_in_round_trip() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    let resp = cli
        .post("/clock-in")
        .body_json(&json!({ "email": "a@x.com", "location": "dock-1" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let id = body.value().object().get("id").string().to_string();

    let resp = cli.get(format!("/clock-in/{}", id)).send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let fetched = body.value().object();

    assert_eq!(fetched.get("id").string(), id);
    assert_eq!(fetched.get("location").string(), "dock-1");

    common::teardown(db).await;
}

#[tokio::test]
async fn test_get_missing_clock_in_returns_404() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    let resp = cli
        .get(format!("/clock-in/{}", ObjectId::new().to_hex()))
        .send()
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);

    common::teardown(db).await;
}

#[tokio::test]
async fn test_update_clock_in_replaces_fields_and_keeps_insert_datetime() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    let resp = cli
        .post("/clock-in")
        .body_json(&json!({ "email": "a@x.com", "location": "dock-1" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let created = body.value().object();
    let id = created.get("id").string().to_string();
    let original_timestamp = created.get("insert_datetime").string().to_string();

    let resp = cli
        .put(format!("/clock-in/{}", id))
        .body_json(&json!({ "email": "b@x.com", "location": "dock-2" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let updated = body.value().object();

    assert_eq!(updated.get("email").string(), "b@x.com");
    assert_eq!(updated.get("location").string(), "dock-2");
    assert_eq!(updated.get("insert_datetime").string(), original_timestamp);

    common::teardown(db).await;
}

#[tokio::test]
async fn test_delete_clock_in_with_malformed_id_returns_400_and_affects_nothing() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    let resp = cli
        .post("/clock-in")
        .body_json(&json!({ "email": "a@x.com", "location": "dock-1" }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let resp = cli.delete("/clock-in/bad-format-id").send().await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    // The existing record is untouched
    let resp = cli.get("/clock-in/filter/").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 1);

    common::teardown(db).await;
}

#[tokio::test]
async fn test_delete_clock_in_confirms_then_404() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    let resp = cli
        .post("/clock-in")
        .body_json(&json!({ "email": "a@x.com", "location": "dock-1" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let id = body.value().object().get("id").string().to_string();

    let resp = cli.delete(format!("/clock-in/{}", id)).send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().object().get("status").string(), "deleted");

    let resp = cli.delete(format!("/clock-in/{}", id)).send().await;
    resp.assert_status(StatusCode::NOT_FOUND);

    common::teardown(db).await;
}

#[tokio::test]
async fn test_filter_clock_ins_by_location_and_email() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    for (email, location) in [
        ("a@x.com", "dock-1"),
        ("a@x.com", "dock-2"),
        ("b@x.com", "dock-1"),
    ] {
        let resp = cli
            .post("/clock-in")
            .body_json(&json!({ "email": email, "location": location }))
            .send()
            .await;
        resp.assert_status_is_ok();
    }

    let resp = cli
        .get("/clock-in/filter/")
        .query("email", &"a@x.com")
        .query("location", &"dock-1")
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let records = body.value().array();

    assert_eq!(records.len(), 1);
    assert_eq!(records.get(0).object().get("email").string(), "a@x.com");
    assert_eq!(records.get(0).object().get("location").string(), "dock-1");

    common::teardown(db).await;
}

#[tokio::test]
async fn test_filter_clock_ins_after_timestamp_is_strict() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    let resp = cli
        .post("/clock-in")
        .body_json(&json!({ "email": "a@x.com", "location": "dock-1" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let created_at = body
        .value()
        .object()
        .get("insert_datetime")
        .string()
        .to_string();

    // Strictly-after the record's own timestamp excludes it
    let resp = cli
        .get("/clock-in/filter/")
        .query("insert_datetime", &created_at)
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 0);

    // A bound one hour earlier includes it
    let earlier = Utc::now() - chrono::Duration::hours(1);
    let resp = cli
        .get("/clock-in/filter/")
        .query(
            "insert_datetime",
            &earlier.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    assert_eq!(body.value().array().len(), 1);

    common::teardown(db).await;
}

#[tokio::test]
async fn test_create_clock_in_rejects_malformed_email() {
    let Some((cli, db)) = common::setup().await else {
        eprintln!("MONGODB_TEST_URL not set; skipping integration test");
        return;
    };

    let resp = cli
        .post("/clock-in")
        .body_json(&json!({ "email": "not-an-email", "location": "dock-1" }))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    common::teardown(db).await;
}
