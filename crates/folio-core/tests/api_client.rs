//! ApiClient behavior against an in-process mock of the backend.
//!
//! The mock mirrors the real server's response shapes: JSON bodies,
//! `{message}` error envelopes, bearer-token checks on protected routes.

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;

use folio_core::error::ApiError;
use folio_core::models::{ContactSubmission, ProjectDraft, SkillCategory, SkillPayload};
use folio_core::search::{ProjectFilter, SkillFilter};
use folio_core::ApiClient;

const TOKEN: &str = "test-token";

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.to_string())
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Missing Authorization Header" })),
    )
}

fn project_json(id: i64, title: &str, featured: bool, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "image": null,
        "demoUrl": null,
        "repoUrl": null,
        "featured": featured,
        "tags": tags,
    })
}

fn backend() -> Router {
    Router::new()
        .route(
            "/api/login",
            post(|Json(body): Json<Value>| async move {
                if body["username"] == "admin" && body["password"] == "secret" {
                    (StatusCode::OK, Json(json!({ "access_token": TOKEN })))
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "message": "Invalid credentials" })),
                    )
                }
            }),
        )
        .route(
            "/api/projects",
            get(
                |Query(params): Query<HashMap<String, String>>| async move {
                    let all = vec![
                        project_json(1, "Chat server", true, &["rust"]),
                        project_json(2, "Blog", false, &["python"]),
                        project_json(3, "Tracker", false, &[]),
                    ];
                    let filtered: Vec<Value> = all
                        .into_iter()
                        .filter(|p| {
                            if params.get("featured").map(String::as_str) == Some("true") {
                                return p["featured"] == true;
                            }
                            if let Some(tag) = params.get("tag") {
                                return p["tags"]
                                    .as_array()
                                    .is_some_and(|tags| tags.iter().any(|t| t == tag.as_str()));
                            }
                            true
                        })
                        .collect();
                    Json(filtered)
                },
            )
            .post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if bearer(&headers).as_deref() != Some(TOKEN) {
                    return unauthorized();
                }
                let title = body["title"].as_str().unwrap_or_default().trim();
                if title.is_empty() {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "message": "Missing or empty required field: title" })),
                    );
                }
                let mut created = body.clone();
                created["id"] = json!(42);
                (StatusCode::CREATED, Json(created))
            }),
        )
        .route(
            "/api/projects/:id",
            get(|Path(id): Path<i64>| async move {
                Json(project_json(id, "Chat server", true, &["rust"]))
            })
            .put(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if bearer(&headers).as_deref() != Some(TOKEN) {
                    return unauthorized();
                }
                let mut updated = body.clone();
                updated["id"] = json!(1);
                (StatusCode::OK, Json(updated))
            })
            .delete(|headers: HeaderMap| async move {
                if bearer(&headers).as_deref() != Some(TOKEN) {
                    return unauthorized();
                }
                (
                    StatusCode::OK,
                    Json(json!({ "message": "Project deleted successfully" })),
                )
            }),
        )
        .route(
            "/api/skills",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }).post(
                |headers: HeaderMap, Json(body): Json<Value>| async move {
                    if bearer(&headers).as_deref() != Some(TOKEN) {
                        return unauthorized();
                    }
                    let mut created = body.clone();
                    created["id"] = json!(7);
                    (StatusCode::CREATED, Json(created))
                },
            ),
        )
        .route("/api/tags", get(|| async {
            Json(json!([
                { "id": 1, "name": "rust" },
                { "id": 2, "name": "python" },
            ]))
        }))
        .route(
            "/api/contacts",
            get(|headers: HeaderMap| async move {
                if bearer(&headers).as_deref() != Some(TOKEN) {
                    return unauthorized();
                }
                (
                    StatusCode::OK,
                    Json(json!([
                        {
                            "id": 1,
                            "name": "Ada",
                            "email": "ada@example.com",
                            "subject": "Hello",
                            "message": "Nice site!",
                            "read": false,
                            "created_at": "2024-03-01T09:30:00"
                        }
                    ])),
                )
            }),
        )
        .route(
            "/api/contacts/:id",
            put(|headers: HeaderMap, Path(_id): Path<i64>| async move {
                if bearer(&headers).as_deref() != Some(TOKEN) {
                    return unauthorized();
                }
                (
                    StatusCode::OK,
                    Json(json!({ "message": "Contact marked as read" })),
                )
            })
            .delete(|headers: HeaderMap, Path(_id): Path<i64>| async move {
                if bearer(&headers).as_deref() != Some(TOKEN) {
                    return unauthorized();
                }
                (
                    StatusCode::OK,
                    Json(json!({ "message": "Contact deleted successfully" })),
                )
            }),
        )
        .route(
            "/api/contact",
            post(|Json(_body): Json<Value>| async move {
                (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Contact form submitted successfully" })),
                )
            }),
        )
        .route("/api/garbage/tags", get(|| async { "not json" }))
}

async fn spawn_backend() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend()).await.unwrap();
    });
    addr
}

async fn client_with_token(token: Option<&str>) -> ApiClient {
    let addr = spawn_backend().await;
    ApiClient::new(
        format!("http://{addr}/api"),
        token.map(|t| t.to_string()),
    )
}

#[tokio::test]
async fn login_returns_token_on_success() {
    let client = client_with_token(None).await;
    let token = client.login("admin", "secret").await.unwrap();
    assert_eq!(token, TOKEN);
}

#[tokio::test]
async fn login_failure_surfaces_server_message_verbatim() {
    let client = client_with_token(None).await;
    let err = client.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err, ApiError::Auth("Invalid credentials".into()));
}

#[tokio::test]
async fn list_projects_preserves_server_order_and_supports_queries() {
    let client = client_with_token(Some(TOKEN)).await;

    let all = client.list_projects(&ProjectFilter::All).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let featured = client
        .list_projects(&ProjectFilter::Featured)
        .await
        .unwrap();
    assert_eq!(featured.len(), 1);
    assert!(featured[0].featured);

    let tagged = client
        .list_projects(&ProjectFilter::Tag("python".into()))
        .await
        .unwrap();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].id, 2);
}

#[tokio::test]
async fn create_project_round_trips_the_payload() {
    let client = client_with_token(Some(TOKEN)).await;
    let draft = ProjectDraft {
        title: "New thing".into(),
        description: "Something worth showing off".into(),
        repo_url: "https://github.com/someone/new-thing".into(),
        ..Default::default()
    };
    let created = client.create_project(&draft.to_payload()).await.unwrap();
    assert_eq!(created.id, 42);
    assert_eq!(created.title, "New thing");
    assert_eq!(
        created.repo_url.as_deref(),
        Some("https://github.com/someone/new-thing")
    );
}

#[tokio::test]
async fn validation_failure_carries_the_server_message() {
    let client = client_with_token(Some(TOKEN)).await;
    // Bypassing client-side validation on purpose to exercise the server path
    let draft = ProjectDraft {
        description: "long enough description".into(),
        ..Default::default()
    };
    let err = client.create_project(&draft.to_payload()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Validation("Missing or empty required field: title".into())
    );
}

#[tokio::test]
async fn missing_token_is_an_auth_error_on_protected_routes() {
    let client = client_with_token(None).await;
    let err = client.list_contacts().await.unwrap_err();
    assert!(err.is_auth());

    let stale = client_with_token(Some("expired")).await;
    let err = stale.delete_project(1).await.unwrap_err();
    assert!(err.is_auth());
}

#[tokio::test]
async fn five_hundred_maps_to_server_error() {
    let client = client_with_token(Some(TOKEN)).await;
    let err = client.list_skills(&SkillFilter::All).await.unwrap_err();
    assert_eq!(err, ApiError::Server(500));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{addr}/api"), None);
    let err = client.list_tags().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn undecodable_success_body_is_a_network_error() {
    let addr = spawn_backend().await;
    // Based under /api/garbage, list_tags() lands on a route that returns
    // a 200 with a non-JSON body.
    let client = ApiClient::new(format!("http://{addr}/api/garbage"), None);
    let err = client.list_tags().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(message) if message.contains("invalid response body")));
}

#[tokio::test]
async fn contacts_lifecycle_and_skills_create() {
    let client = client_with_token(Some(TOKEN)).await;

    let contacts = client.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert!(!contacts[0].read);
    assert_eq!(contacts[0].created_at_display(), "01/03/2024 09:30");

    client.mark_contact_read(1).await.unwrap();
    client.delete_contact(1).await.unwrap();

    let skill = client
        .create_skill(&SkillPayload {
            name: "Rust".into(),
            level: 90,
            category: SkillCategory::Backend,
        })
        .await
        .unwrap();
    assert_eq!(skill.id, 7);
    assert_eq!(skill.category, SkillCategory::Backend);
}

#[tokio::test]
async fn public_contact_form_needs_no_token() {
    let client = client_with_token(None).await;
    client
        .submit_contact(&ContactSubmission {
            name: "Visitor".into(),
            email: "visitor@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        })
        .await
        .unwrap();
}
