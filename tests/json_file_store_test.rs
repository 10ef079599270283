mod common;

use std::fs;

use common::{read_collection_file, setup_file_client};
use poem::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_first_run_creates_empty_collection_files() {
    let dir = tempfile::tempdir().unwrap();

    let (_app_data, _client) = setup_file_client(dir.path());

    assert_eq!(fs::read_to_string(dir.path().join("lost.json")).unwrap(), "[]");
    assert_eq!(fs::read_to_string(dir.path().join("found.json")).unwrap(), "[]");
}

#[tokio::test]
async fn test_submissions_are_written_to_disk_pretty_printed() {
    let dir = tempfile::tempdir().unwrap();
    let (_app_data, client) = setup_file_client(dir.path());

    client
        .post("/found")
        .body_json(&json!({ "item": "Keys" }))
        .send()
        .await
        .assert_status_is_ok();

    let contents = fs::read_to_string(dir.path().join("found.json")).unwrap();
    assert_eq!(
        contents,
        "[\n  {\n    \"item\": \"Keys\",\n    \"location\": \"\",\n    \"picture\": \"\",\n    \"status\": \"pending\"\n  }\n]"
    );
}

#[tokio::test]
async fn test_existing_records_are_served_and_updated_in_place() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("lost.json"),
        r#"[{"item":"Umbrella","color":"black","location":"Lobby","status":"pending","reportedBy":"desk"}]"#,
    )
    .unwrap();
    let (_app_data, client) = setup_file_client(dir.path());

    // Older record without `details` is listed with an empty string
    client.get("/lost").send().await.assert_json(json!([
        {
            "item": "Umbrella",
            "color": "black",
            "details": "",
            "location": "Lobby",
            "status": "pending",
            "reportedBy": "desk"
        }
    ]))
    .await;

    client
        .post("/admin/lost/approve")
        .body_json(&json!({ "index": 0 }))
        .send()
        .await
        .assert_status_is_ok();

    let on_disk = read_collection_file(dir.path(), "lost.json");
    assert_eq!(on_disk[0]["status"], json!("approved"));
    assert_eq!(on_disk[0]["reportedBy"], json!("desk"));
}

#[tokio::test]
async fn test_non_string_field_does_not_block_the_collection() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("lost.json"),
        r#"[{"item":"Wallet","status":"pending"},{"item":42,"details":null,"status":"pending"}]"#,
    )
    .unwrap();
    let (_app_data, client) = setup_file_client(dir.path());

    let resp = client.get("/lost").send().await;
    resp.assert_status_is_ok();
    resp.assert_json(json!([
        { "item": "Wallet", "color": "", "details": "", "location": "", "status": "pending" },
        { "item": "42", "color": "", "details": "", "location": "", "status": "pending" }
    ]))
    .await;

    client
        .post("/admin/lost/approve")
        .body_json(&json!({ "index": 0 }))
        .send()
        .await
        .assert_status_is_ok();

    client
        .post("/lost")
        .body_json(&json!({ "item": "Scarf" }))
        .send()
        .await
        .assert_status_is_ok();

    let on_disk = read_collection_file(dir.path(), "lost.json");
    assert_eq!(on_disk.as_array().unwrap().len(), 3);
    assert_eq!(on_disk[0]["status"], json!("approved"));
    assert_eq!(on_disk[1]["item"], json!("42"));
    assert_eq!(on_disk[2]["item"], json!("Scarf"));
}

#[tokio::test]
async fn test_unmodelled_fields_are_listed_as_stored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("found.json"),
        r#"[{"item":"Keys","location":"Gym","picture":"","status":"pending","finder":"Ann"}]"#,
    )
    .unwrap();
    let (_app_data, client) = setup_file_client(dir.path());

    client.get("/found").send().await.assert_json(json!([
        { "item": "Keys", "location": "Gym", "picture": "", "status": "pending", "finder": "Ann" }
    ]))
    .await;
}

#[tokio::test]
async fn test_corrupt_file_yields_server_errors() {
    let dir = tempfile::tempdir().unwrap();
    let (_app_data, client) = setup_file_client(dir.path());
    fs::write(dir.path().join("lost.json"), "{ not json").unwrap();

    let resp = client.get("/lost").send().await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    resp.assert_json(json!([])).await;

    let resp = client.post("/lost").body_json(&json!({ "item": "Wallet" })).send().await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    resp.assert_json(json!({ "message": "Failed to report lost item." })).await;

    let resp = client
        .post("/admin/lost/approve")
        .body_json(&json!({ "index": 0 }))
        .send()
        .await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    resp.assert_json(json!({ "message": "Failed to update item." })).await;

    // The corrupt file is left as it was
    assert_eq!(fs::read_to_string(dir.path().join("lost.json")).unwrap(), "{ not json");

    // The other collection is unaffected
    client.get("/found").send().await.assert_status_is_ok();
}

#[tokio::test]
async fn test_deleted_file_yields_server_error_until_restart() {
    let dir = tempfile::tempdir().unwrap();
    let (_app_data, client) = setup_file_client(dir.path());
    fs::remove_file(dir.path().join("found.json")).unwrap();

    let resp = client.get("/found").send().await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    resp.assert_json(json!([])).await;

    let resp = client.post("/found").body_json(&json!({ "item": "Keys" })).send().await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    resp.assert_json(json!({ "message": "Failed to submit found item." })).await;
}

#[tokio::test]
async fn test_health_degrades_when_a_collection_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let (_app_data, client) = setup_file_client(dir.path());
    fs::write(dir.path().join("found.json"), "null").unwrap();

    let resp = client.get("/health").send().await;

    resp.assert_status_is_ok();
    resp.json().await.value().object().get("status").assert_string("degraded");
}
