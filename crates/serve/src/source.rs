// crates/serve/src/source.rs

//! Port to the headless CMS.
//!
//! The resolution layer only talks to [`ContentSource`]; the HTTP client
//! lives in the edge crate and is injected at startup. Pages arrive as
//! [`RawPage`], which keeps the fixed Wagtail envelope typed and leaves
//! every model-specific field as untyped JSON for the mappers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as Json};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    #[serde(rename = "type")]
    pub page_type: String,
    pub slug: String,
    pub detail_url: Option<String>,
    pub html_url: Option<String>,
    pub first_published_at: Option<String>,
    pub locale: Option<String>,
}

/// A page as returned by the Wagtail pages API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub meta: PageMeta,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub fields: JsonMap<String, Json>,
}

impl RawPage {
    pub fn slug(&self) -> &str {
        &self.meta.slug
    }

    pub fn field(&self, name: &str) -> Option<&Json> {
        self.fields.get(name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingMeta {
    pub total_count: u64,
}

/// Listing envelope. `items` is required: a body without it is not a listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub meta: ListingMeta,
    pub items: Vec<RawPage>,
}

/// Extra query parameters for a listing request (ordering, slug filter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub params: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn order(self, field: &str) -> Self {
        self.param("order", field)
    }

    pub fn slug(self, slug: &str) -> Self {
        self.param("slug", slug)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    #[error("CMS request timed out: {0}")]
    Timeout(String),

    #[error("CMS unreachable: {0}")]
    Transport(String),

    #[error("CMS returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("CMS response could not be decoded: {0}")]
    Decode(String),
}

impl SourceError {
    /// True when the CMS could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SourceError::Timeout(_) | SourceError::Transport(_))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Port
// ─────────────────────────────────────────────────────────────────────────────

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All live pages of `page_type` on the configured site, full field set.
    async fn list_by_type(
        &self,
        page_type: &str,
        query: &ListQuery,
    ) -> Result<Vec<RawPage>, SourceError>;

    /// First page of `page_type` whose slug matches, if any.
    async fn get_one_by_slug(
        &self,
        page_type: &str,
        slug: &str,
    ) -> Result<Option<RawPage>, SourceError>;

    /// A page by numeric id. `None` when the CMS answers 404.
    async fn get_by_id(&self, id: u64) -> Result<Option<RawPage>, SourceError>;

    /// Draft revision for a preview token.
    async fn preview_page(&self, content_type: &str, token: &str)
        -> Result<RawPage, SourceError>;
}
