mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

#[tokio::test]
async fn duplicate_resets_date_and_claimants() -> Result<()> {
    let server = TestServer::spawn().await?;
    let id = server
        .create_class(json!({ "name": "Yoga", "date": "2024-05-01", "time_slots": ["9am", "10am", "11am"] }))
        .await?;
    server
        .client
        .put(server.url(&format!("/api/classes/{}/slots/2", id)))
        .json(&json!({ "assigned_to": "Alice" }))
        .send()
        .await?;
    let (_, before) = server.get_class(id).await?;

    let res = server
        .client
        .post(server.url(&format!("/api/classes/{}/duplicate", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Class duplicated successfully");
    let copy_id = body["id"].as_i64().unwrap();
    assert_ne!(copy_id, id);

    let (status, copy) = server.get_class(copy_id).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(copy["name"], "Yoga");
    assert_eq!(copy["date"], "");

    let original_slots = before["time_slots"].as_array().unwrap();
    let copied_slots = copy["time_slots"].as_array().unwrap();
    assert_eq!(copied_slots.len(), original_slots.len());
    for (orig, dup) in original_slots.iter().zip(copied_slots) {
        assert_eq!(dup["label"], orig["label"]);
        assert_eq!(dup["position"], orig["position"]);
        assert_eq!(dup["assigned_to"], "");
        assert_ne!(dup["id"], orig["id"]);
    }

    // Source is unchanged
    let (_, after) = server.get_class(id).await?;
    assert_eq!(after, before);
    Ok(())
}

#[tokio::test]
async fn duplicate_missing_class_is_404() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server.client.post(server.url("/api/classes/5/duplicate")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({ "error": "Class not found" }));
    Ok(())
}

#[tokio::test]
async fn delete_removes_class_and_slots() -> Result<()> {
    let server = TestServer::spawn().await?;
    let id = server.create_class(json!({ "name": "Yoga", "time_slots": ["9am", "10am"] })).await?;

    let res = server.client.delete(server.url(&format!("/api/classes/{}", id))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "Class deleted successfully" }));

    let (status, _) = server.get_class(id).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for slot_id in [1, 2] {
        let res = server
            .client
            .put(server.url(&format!("/api/classes/{}/slots/{}", id, slot_id)))
            .json(&json!({ "assigned_to": "Alice" }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
    Ok(())
}

#[tokio::test]
async fn delete_missing_class_is_404() -> Result<()> {
    let server = TestServer::spawn().await?;

    let res = server.client.delete(server.url("/api/classes/3")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({ "error": "Class not found" }));
    Ok(())
}

#[tokio::test]
async fn delete_leaves_other_classes_alone() -> Result<()> {
    let server = TestServer::spawn().await?;
    let keep = server.create_class(json!({ "name": "Keep", "time_slots": ["a"] })).await?;
    let gone = server.create_class(json!({ "name": "Gone", "time_slots": ["b"] })).await?;

    server.client.delete(server.url(&format!("/api/classes/{}", gone))).send().await?;

    let list = server.client.get(server.url("/api/classes")).send().await?.json::<Value>().await?;
    let classes = list.as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["id"], keep);
    assert_eq!(classes[0]["time_slots"][0]["label"], "a");
    Ok(())
}
