//! In-memory stores and a router harness for integration tests.
//!
//! The tests drive the real router — real extractors, handlers, and error
//! mapping — with the PostgreSQL stores swapped for these implementations,
//! so no database is needed.

// Each integration test binary compiles this module; not all of them use
// every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use api::auth::password::{hash_password, verify_password};
use api::auth::token::TokenKeys;
use api::error::StoreError;
use api::models::{Note, User};
use api::repo::{NoteStore, UserStore};
use server::routes;
use server::state::AppState;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn verify(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let users = self.users.lock().unwrap();
        let Some(user) = users.iter().find(|u| u.email == email).cloned() else {
            return Err(StoreError::NotFound);
        };
        drop(users);
        if !verify_password(password, &user.password_hash)? {
            return Err(StoreError::BadCredentials);
        }
        Ok(user)
    }
}

struct MemoryNotes {
    notes: Vec<Note>,
    base: DateTime<Utc>,
    ticks: i64,
}

/// Stamps are strictly monotonic so update-recency ordering is deterministic
/// even when operations land within the same instant.
pub struct MemoryNoteStore {
    inner: Mutex<MemoryNotes>,
}

impl Default for MemoryNoteStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(MemoryNotes {
                notes: Vec::new(),
                base: Utc::now(),
                ticks: 0,
            }),
        }
    }
}

impl MemoryNotes {
    fn next_stamp(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        self.base + Duration::milliseconds(self.ticks)
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn list(&self, owner_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut notes: Vec<Note> = inner
            .notes
            .iter()
            .filter(|n| n.owner_id == owner_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    async fn get(&self, owner_id: Uuid, note_id: Uuid) -> Result<Note, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .notes
            .iter()
            .find(|n| n.id == note_id && n.owner_id == owner_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, owner_id: Uuid, title: &str, body: &str) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let stamp = inner.next_stamp();
        let note = Note {
            id: Uuid::new_v4(),
            owner_id,
            title: title.to_string(),
            body: body.to_string(),
            created_at: stamp,
            updated_at: stamp,
        };
        inner.notes.push(note.clone());
        Ok(note)
    }

    async fn update(
        &self,
        owner_id: Uuid,
        note_id: Uuid,
        title: &str,
        body: &str,
    ) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let stamp = inner.next_stamp();
        let note = inner
            .notes
            .iter_mut()
            .find(|n| n.id == note_id && n.owner_id == owner_id)
            .ok_or(StoreError::NotFound)?;
        note.title = title.to_string();
        note.body = body.to_string();
        note.updated_at = stamp;
        Ok(note.clone())
    }

    async fn delete(&self, owner_id: Uuid, note_id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.notes.len();
        inner
            .notes
            .retain(|n| !(n.id == note_id && n.owner_id == owner_id));
        if inner.notes.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

pub fn test_app() -> Router {
    let state = AppState {
        users: Arc::new(MemoryUserStore::default()),
        notes: Arc::new(MemoryNoteStore::default()),
        keys: Arc::new(TokenKeys::new(TEST_SECRET)),
    };
    routes::router(state)
}

/// Fire one request at the router and decode the JSON body (Null when empty).
pub async fn request(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Register `email` and log in, returning the bearer token.
pub async fn register_and_login(app: &Router, email: &str) -> String {
    let credentials = json!({ "email": email, "password": "correct horse" });
    let (status, _) = request(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(credentials.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(app, Method::POST, "/api/auth/login", None, Some(credentials)).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

/// Create a note and return its wire representation.
pub async fn create_note(app: &Router, token: &str, title: &str, body: &str) -> Value {
    let (status, note) = request(
        app,
        Method::POST,
        "/api/notes",
        Some(token),
        Some(json!({ "Title": title, "Document": body })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    note
}
