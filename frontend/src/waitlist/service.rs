use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Anything that isn't a structured answer from the waitlist backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not read response: {0}")]
    Decode(String),
    #[error("unexpected status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for ServiceError {
    fn from(e: gloo_net::Error) -> Self {
        ServiceError::Transport(e.to_string())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddEntryResponse {
    pub success: bool,
    pub error: Option<String>,
}

impl AddEntryResponse {
    pub fn accepted() -> Self {
        Self { success: true, error: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountResponse {
    pub success: bool,
    pub count: Option<u64>,
}

#[async_trait(?Send)]
pub trait WaitlistService {
    async fn add_entry(&self, full_name: &str, email: &str) -> Result<AddEntryResponse, ServiceError>;
    async fn get_count(&self) -> Result<CountResponse, ServiceError>;
}

#[derive(Serialize)]
struct NewEntry<'a> {
    full_name: &'a str,
    email: String,
}

#[derive(Deserialize, Debug)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
}

// Postgres unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Maps a failed insert to the message shown to the user, or None when the
/// body isn't something PostgREST produced.
pub fn rejection_from_body(status: u16, body: &str) -> Option<AddEntryResponse> {
    if status == 409 {
        return Some(AddEntryResponse::rejected(config::DUPLICATE_EMAIL_MESSAGE));
    }
    let err: PostgrestError = serde_json::from_str(body).ok()?;
    if err.code.as_deref() == Some(UNIQUE_VIOLATION) {
        return Some(AddEntryResponse::rejected(config::DUPLICATE_EMAIL_MESSAGE));
    }
    err.message
        .filter(|m| !m.trim().is_empty())
        .map(AddEntryResponse::rejected)
}

/// `0-0/12504` or `*/12504` -> 12504. An unknown total (`0-0/*`) is None.
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.trim().parse().ok()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// PostgREST client for the `waitlist` table of the hosted Supabase project.
#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseWaitlist {
    base_url: String,
    anon_key: String,
}

impl Default for SupabaseWaitlist {
    fn default() -> Self {
        Self::new(config::supabase_url(), config::supabase_anon_key())
    }
}

impl SupabaseWaitlist {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, config::WAITLIST_TABLE)
    }

    fn authorized(&self, request: Request) -> Request {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }
}

#[async_trait(?Send)]
impl WaitlistService for SupabaseWaitlist {
    async fn add_entry(&self, full_name: &str, email: &str) -> Result<AddEntryResponse, ServiceError> {
        let entry = NewEntry {
            full_name: full_name.trim(),
            email: normalize_email(email),
        };
        let response = self
            .authorized(Request::post(&self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&entry)?
            .send()
            .await?;

        if response.ok() {
            return Ok(AddEntryResponse::accepted());
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        rejection_from_body(status, &body).ok_or(ServiceError::Status(status))
    }

    async fn get_count(&self) -> Result<CountResponse, ServiceError> {
        let response = self
            .authorized(Request::get(&format!("{}?select=id&limit=1", self.table_url())))
            .header("Prefer", "count=exact")
            .send()
            .await?;

        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }

        let count = response
            .headers()
            .get("content-range")
            .as_deref()
            .and_then(parse_content_range);
        Ok(CountResponse { success: count.is_some(), count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_range_totals() {
        assert_eq!(parse_content_range("0-0/12504"), Some(12504));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range(" 0-24/3573 "), Some(3573));
        assert_eq!(parse_content_range("0-0/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }

    #[test]
    fn conflict_status_means_duplicate() {
        assert_eq!(
            rejection_from_body(409, ""),
            Some(AddEntryResponse::rejected("Email already registered"))
        );
    }

    #[test]
    fn unique_violation_code_means_duplicate() {
        let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint \"waitlist_email_key\""}"#;
        assert_eq!(
            rejection_from_body(400, body),
            Some(AddEntryResponse::rejected("Email already registered"))
        );
    }

    #[test]
    fn other_postgrest_errors_pass_message_through() {
        let body = r#"{"code":"23514","message":"new row violates check constraint \"email_format\""}"#;
        assert_eq!(
            rejection_from_body(400, body),
            Some(AddEntryResponse::rejected("new row violates check constraint \"email_format\""))
        );
    }

    #[test]
    fn unreadable_body_is_not_a_rejection() {
        assert_eq!(rejection_from_body(502, "<html>Bad Gateway</html>"), None);
        assert_eq!(rejection_from_body(500, r#"{"code":"XX000","message":"  "}"#), None);
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Jamie@Example.COM "), "jamie@example.com");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = SupabaseWaitlist::new("https://abc.supabase.co/", "key");
        assert_eq!(client.table_url(), "https://abc.supabase.co/rest/v1/waitlist");
    }
}
