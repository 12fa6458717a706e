//! REST client used by the frontends.
//!
//! One method per route. The bearer token is attached to every protected
//! call; a 401 surfaces as [`ClientError::Unauthorized`] so the UI can force
//! a logout, and any other failure body's `{"message"}` is carried through.

use reqwest::{RequestBuilder, Response, StatusCode};

use crate::models::{NoteInfo, NotePayload};
use crate::{Credentials, LoginResponse, MessageResponse};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected the token (missing, invalid, or expired).
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered with an error `{"message"}`.
    #[error("{0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Client for the QuillNotes REST API.
#[derive(Debug, Clone)]
pub struct NotesApi {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl NotesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        expect_ok(response).await?;
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        Ok(expect_ok(response).await?.json().await?)
    }

    pub async fn list_notes(&self) -> Result<Vec<NoteInfo>, ClientError> {
        let response = self
            .authorized(self.http.get(self.url("/api/notes")))
            .send()
            .await?;
        Ok(expect_ok(response).await?.json().await?)
    }

    pub async fn get_note(&self, id: &str) -> Result<NoteInfo, ClientError> {
        let response = self
            .authorized(self.http.get(self.url(&format!("/api/notes/{id}"))))
            .send()
            .await?;
        Ok(expect_ok(response).await?.json().await?)
    }

    pub async fn create_note(&self, payload: &NotePayload) -> Result<NoteInfo, ClientError> {
        let response = self
            .authorized(self.http.post(self.url("/api/notes")).json(payload))
            .send()
            .await?;
        Ok(expect_ok(response).await?.json().await?)
    }

    pub async fn update_note(
        &self,
        id: &str,
        payload: &NotePayload,
    ) -> Result<NoteInfo, ClientError> {
        let response = self
            .authorized(
                self.http
                    .put(self.url(&format!("/api/notes/{id}")))
                    .json(payload),
            )
            .send()
            .await?;
        Ok(expect_ok(response).await?.json().await?)
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .authorized(self.http.delete(self.url(&format!("/api/notes/{id}"))))
            .send()
            .await?;
        expect_ok(response).await?;
        Ok(())
    }
}

async fn expect_ok(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }
    if !status.is_success() {
        let message = response
            .json::<MessageResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("request failed with status {status}"));
        return Err(ClientError::Api(message));
    }
    Ok(response)
}
