//! Shared fixtures for the posts endpoint tests.
#![allow(dead_code)]

use httpmock::MockServer;
use postprobe_suite::{FixtureConfig, PostsEndpoint};
use serde_json::{Value, json};

/// Number of posts served by the fixture.
pub const POST_COUNT: i64 = 100;

/// A post shaped like jsonplaceholder's: ten posts per user.
pub fn post(id: i64) -> Value {
    json!({
        "userId": (id - 1) / 10 + 1,
        "id": id,
        "title": format!("title {id}"),
        "body": format!("body of post {id}")
    })
}

/// Every post in the fixture.
pub fn posts() -> Vec<Value> {
    (1..=POST_COUNT).map(post).collect()
}

/// Posts owned by `user_id`.
pub fn posts_of(user_id: i64) -> Vec<Value> {
    posts()
        .into_iter()
        .filter(|p| p["userId"] == json!(user_id))
        .collect()
}

/// Endpoint builder pointed at a local mock server.
pub fn endpoint(server: &MockServer) -> PostsEndpoint {
    PostsEndpoint::new(FixtureConfig::new("http", server.address().to_string()))
}
