
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn created_project_is_listed_with_all_fields() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app.create_project(&token, &sample_project()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();

    let listed: Vec<Value> = app.client
        .get(app.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    let project = &listed[0];
    assert_eq!(project["_id"], created["_id"]);
    assert!(project["createdAt"].is_string());
    for field in ["title", "description", "image", "tags", "link", "github", "category", "featured"] {
        assert_eq!(project[field], sample_project()[field], "field {}", field);
    }
}

#[actix_rt::test]
async fn projects_are_listed_newest_first() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    for title in ["First", "Second"] {
        let mut body = sample_project();
        body["title"] = json!(title);
        app.create_project(&token, &body).await;
    }

    let listed: Vec<Value> = app.client
        .get(app.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(listed[0]["title"], "Second");
    assert_eq!(listed[1]["title"], "First");
}

#[actix_rt::test]
async fn create_with_missing_title_returns_validation_details() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let mut body = sample_project();
    body["title"] = json!("");
    let response = app.create_project(&token, &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "title");
    assert_eq!(app.repo.project_count(), 0);
}

#[actix_rt::test]
async fn partial_update_keeps_absent_fields() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let created: Value = app.create_project(&token, &sample_project()).await.json().await.unwrap();
    let id = created["_id"].as_str().unwrap();

    let response = app.client
        .put(app.url(&format!("/api/projects/{}", id)))
        .header("x-auth-token", &token)
        .json(&json!({"featured": false, "github": null}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["featured"], false);
    assert_eq!(updated["github"], Value::Null);
    assert_eq!(updated["title"], created["title"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[actix_rt::test]
async fn update_of_missing_project_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app.client
        .put(app.url(&format!("/api/projects/{}", uuid::Uuid::new_v4())))
        .header("x-auth-token", &token)
        .json(&json!({"title": "Ghost"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.repo.project_count(), 0);
}

#[actix_rt::test]
async fn deleting_twice_succeeds_twice() {
    let app = TestApp::spawn().await;
    let token = app.login().await;
    let created: Value = app.create_project(&token, &sample_project()).await.json().await.unwrap();
    let url = app.url(&format!("/api/projects/{}", created["_id"].as_str().unwrap()));

    for _ in 0..2 {
        let response = app.client
            .delete(&url)
            .header("x-auth-token", &token)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["msg"], "Project removed");
    }
    assert_eq!(app.repo.project_count(), 0);
}

#[actix_rt::test]
async fn malformed_id_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app.client
        .delete(app.url("/api/projects/not-a-uuid"))
        .header("x-auth-token", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/api/projects/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
