//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    access_token, assert_json, assert_status, check_test_env, reply_body, ForumFixture, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Post Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_posts_shape() {
    if !check_test_env().await {
        return;
    }

    let fixture = ForumFixture::create().await.unwrap();
    let author = fixture.seed_user("FREE").await.unwrap();
    fixture.seed_post(&author, "Listing shape post").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/posts").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body["posts"].is_array());
    assert!(body["pagination"]["total"].as_i64().unwrap() >= 1);
    assert!(body["pagination"]["totalPages"].is_i64());
    assert!(body["pagination"]["hasMore"].is_boolean());
}

#[tokio::test]
async fn test_list_posts_filters_by_category_slug() {
    if !check_test_env().await {
        return;
    }

    let fixture = ForumFixture::create().await.unwrap();
    let author = fixture.seed_user("FREE").await.unwrap();
    fixture.seed_post(&author, "Slug filter post").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/api/v1/posts?categorySlug={}", fixture.category_slug);
    let response = server.get(&path).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["pagination"]["total"].as_i64(), Some(1));
    assert_eq!(
        body["posts"][0]["category"]["slug"].as_str(),
        Some(fixture.category_slug.as_str())
    );
}

#[tokio::test]
async fn test_list_posts_degrades_malformed_params() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/posts?page=abc&limit=9999&sortBy=garbage")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    // Malformed params degrade to defaults instead of failing the request
    assert_eq!(body["pagination"]["page"].as_i64(), Some(1));
    assert_eq!(body["pagination"]["limit"].as_i64(), Some(20));
}

// ============================================================================
// Reply Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_reply_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let fixture = ForumFixture::create().await.unwrap();
    let author = fixture.seed_user("FREE").await.unwrap();
    let post_id = fixture.seed_post(&author, "Auth required").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            &format!("/api/v1/posts/{post_id}/replies"),
            &reply_body("no token", None),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_reply_updates_aggregates() {
    if !check_test_env().await {
        return;
    }

    let fixture = ForumFixture::create().await.unwrap();
    let author = fixture.seed_user("FREE").await.unwrap();
    let post_id = fixture.seed_post(&author, "Aggregate check").await.unwrap();
    let token = access_token(&author, "FREE").unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{post_id}/replies"),
            &token,
            &reply_body("First reply", None),
        )
        .await
        .unwrap();
    let reply: Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(reply["voteScore"].as_i64(), Some(0));
    assert_eq!(reply["author"]["id"].as_str(), Some(author.as_str()));

    let (count, last_reply_id) = fixture.post_aggregates(&post_id).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(last_reply_id.as_deref(), reply["id"].as_str());
}

#[tokio::test]
async fn test_create_reply_missing_post_is_404() {
    if !check_test_env().await {
        return;
    }

    let fixture = ForumFixture::create().await.unwrap();
    let author = fixture.seed_user("FREE").await.unwrap();
    let token = access_token(&author, "FREE").unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_auth(
            "/api/v1/posts/cnope00000000000000000001/replies",
            &token,
            &reply_body("hello?", None),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_reply_locked_post_is_403() {
    if !check_test_env().await {
        return;
    }

    let fixture = ForumFixture::create().await.unwrap();
    let author = fixture.seed_user("FREE").await.unwrap();
    let post_id = fixture.seed_post(&author, "Locked post").await.unwrap();
    fixture.lock_post(&post_id).await.unwrap();
    let token = access_token(&author, "FREE").unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{post_id}/replies"),
            &token,
            &reply_body("can't post here", None),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_reply_depth_limit() {
    if !check_test_env().await {
        return;
    }

    let fixture = ForumFixture::create().await.unwrap();
    let author = fixture.seed_user("FREE").await.unwrap();
    let post_id = fixture.seed_post(&author, "Deep thread").await.unwrap();
    let token = access_token(&author, "FREE").unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/api/v1/posts/{post_id}/replies");

    // Build a 5-deep chain
    let mut parent: Option<String> = None;
    for level in 0..5 {
        let response = server
            .post_auth(
                &path,
                &token,
                &reply_body(&format!("level {level}"), parent.as_deref()),
            )
            .await
            .unwrap();
        let reply: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
        parent = Some(reply["id"].as_str().unwrap().to_string());
    }

    // A 6th level is rejected
    let response = server
        .post_auth(&path, &token, &reply_body("too deep", parent.as_deref()))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reply_tree_endpoint() {
    if !check_test_env().await {
        return;
    }

    let fixture = ForumFixture::create().await.unwrap();
    let author = fixture.seed_user("FREE").await.unwrap();
    let post_id = fixture.seed_post(&author, "Tree read").await.unwrap();
    let token = access_token(&author, "FREE").unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/api/v1/posts/{post_id}/replies");

    let root: Value = assert_json(
        server
            .post_auth(&path, &token, &reply_body("root", None))
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    let child_body = reply_body("child", root["id"].as_str());
    assert_json::<Value>(
        server.post_auth(&path, &token, &child_body).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let tree: Value = assert_json(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(tree.as_array().unwrap().len(), 1);
    assert_eq!(tree[0]["replies"][0]["content"].as_str(), Some("child"));
}
