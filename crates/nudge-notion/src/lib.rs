//! # nudge-notion
//!
//! Notion REST client used as the nudge record provider.
//!
//! Each fetch first reads the database schema, so the status filter and the
//! due-date sort are only sent for properties that exist with the expected
//! kind, then follows `has_more`/`next_cursor` pagination until every page
//! of results has been collected.

mod error;
mod http;
mod query;
mod schema;

pub use error::NotionError;
pub use schema::DatabaseSchema;

use async_trait::async_trait;
use nudge_config::NotionConfig;
use nudge_core::entities::RawRecord;
use nudge_pipeline::{RecordFilter, RecordProvider, SourceFetchError};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::http::check_response;
use crate::schema::DatabaseObject;

const NOTION_VERSION: &str = "Notion-Version";

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<serde_json::Value>,
    #[serde(default)]
    has_more: bool,
    next_cursor: Option<String>,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one Notion database.
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    database_id: String,
    page_size: u32,
}

impl NotionClient {
    /// Build a client from the `[notion]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::InvalidApiKey`] if the token is not a valid
    /// header value, [`NotionError::InvalidHeader`] if the API version is not,
    /// or [`NotionError::Http`] if the client fails to build.
    pub fn new(config: &NotionConfig) -> Result<Self, NotionError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| NotionError::InvalidApiKey(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            NOTION_VERSION,
            HeaderValue::from_str(&config.api_version).map_err(|e| NotionError::InvalidHeader {
                header: NOTION_VERSION,
                reason: e.to_string(),
            })?,
        );

        let http = reqwest::Client::builder()
            .user_agent(concat!("nudge/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            database_id: config.database_id.clone(),
            page_size: config.page_size,
        })
    }

    fn database_url(&self) -> String {
        format!(
            "{}/v1/databases/{}",
            self.base_url,
            urlencoding::encode(&self.database_id)
        )
    }

    /// Read the database's property names and kinds.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if the request fails, Notion returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn retrieve_schema(&self) -> Result<DatabaseSchema, NotionError> {
        let resp = check_response(self.http.get(self.database_url()).send().await?).await?;
        let db: DatabaseObject = resp
            .json()
            .await
            .map_err(|e| NotionError::Parse(e.to_string()))?;
        Ok(db.into())
    }

    /// Query every page of the database, narrowed by `filter` where the
    /// schema allows it.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if any request fails, Notion returns a
    /// non-success status, or a response cannot be parsed.
    pub async fn query_records(&self, filter: &RecordFilter) -> Result<Vec<RawRecord>, NotionError> {
        let schema = self.retrieve_schema().await?;
        let url = format!("{}/query", self.database_url());

        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0_usize;
        loop {
            let body = query::query_body(filter, &schema, self.page_size, cursor.as_deref());
            let resp = check_response(self.http.post(&url).json(&body).send().await?).await?;
            let page: QueryResponse = resp
                .json()
                .await
                .map_err(|e| NotionError::Parse(e.to_string()))?;
            pages += 1;

            records.extend(page.results.into_iter().filter_map(page_record));

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        tracing::debug!(pages, records = records.len(), "queried notion database");
        Ok(records)
    }
}

/// Convert one query result into a record, skipping anything that is not a
/// full page object.
fn page_record(value: serde_json::Value) -> Option<RawRecord> {
    if value.get("object").and_then(serde_json::Value::as_str) != Some("page")
        || value.get("properties").is_none()
    {
        tracing::debug!("skipping partial or non-page query result");
        return None;
    }
    match serde_json::from_value::<RawRecord>(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(%e, "skipping unparseable page");
            None
        }
    }
}

#[async_trait]
impl RecordProvider for NotionClient {
    async fn fetch(&self, filter: &RecordFilter) -> Result<Vec<RawRecord>, SourceFetchError> {
        Ok(self.query_records(filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_record_parses_full_pages() {
        let value = json!({
            "object": "page",
            "id": "p1",
            "url": "https://www.notion.so/p1",
            "created_time": "2024-01-01T00:00:00.000Z",
            "properties": {
                "Name": { "id": "title", "type": "title", "title": [{ "plain_text": "Write report" }] }
            }
        });
        let record = page_record(value).unwrap();
        assert_eq!(record.id, "p1");
        assert!(record.properties.contains_key("Name"));
    }

    #[test]
    fn page_record_skips_partial_and_foreign_objects() {
        assert!(page_record(json!({ "object": "page", "id": "p2" })).is_none());
        assert!(page_record(json!({ "object": "database", "id": "d", "properties": {} })).is_none());
    }

    #[test]
    fn client_rejects_unprintable_key() {
        let config = NotionConfig {
            api_key: "bad\nkey".into(),
            database_id: "db".into(),
            ..Default::default()
        };
        assert!(matches!(
            NotionClient::new(&config),
            Err(NotionError::InvalidApiKey(_))
        ));
    }

    #[test]
    fn client_names_bad_version_header() {
        let config = NotionConfig {
            api_key: "secret".into(),
            database_id: "db".into(),
            api_version: "2022\n06".into(),
            ..Default::default()
        };
        let err = NotionClient::new(&config).err().unwrap();
        assert!(matches!(
            err,
            NotionError::InvalidHeader { header: "Notion-Version", .. }
        ));
        assert!(err.to_string().starts_with("invalid Notion-Version header"));
    }

    #[test]
    fn database_url_trims_trailing_slash() {
        let config = NotionConfig {
            api_key: "secret".into(),
            database_id: "db-1".into(),
            base_url: "http://localhost:9000/".into(),
            ..Default::default()
        };
        let client = NotionClient::new(&config).unwrap();
        assert_eq!(client.database_url(), "http://localhost:9000/v1/databases/db-1");
    }
}
