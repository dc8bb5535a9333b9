// crates/edge/src/wagtail.rs

//! HTTP client for the Wagtail v2 API.

use crate::Error;
use async_trait::async_trait;
use domain::setting::CmsSettings;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serve::source::{ContentSource, ListQuery, Listing, RawPage, SourceError};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct WagtailClient {
    http: reqwest::Client,
    api_url: String,
    site_id: String,
    site_hostname: String,
    log_traffic: bool,
}

impl WagtailClient {
    /// `log_traffic` raises request/response logging from `debug` to `info`.
    pub fn new(cms: &CmsSettings, log_traffic: bool) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cms.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: cms.api_url.trim_end_matches('/').to_owned(),
            site_id: cms.site_id.clone(),
            site_hostname: cms.site_hostname.clone(),
            log_traffic,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn send(&self, path: &str, query: &[(String, String)]) -> Result<Response, SourceError> {
        let url = format!("{}{path}", self.api_url);
        let started = Instant::now();

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if self.log_traffic {
            info!(%url, ?query, status, elapsed_ms, "wagtail request");
        } else {
            debug!(%url, ?query, status, elapsed_ms, "wagtail request");
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SourceError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        response.json::<T>().await.map_err(classify)
    }

    async fn listing(
        &self,
        page_type: &str,
        query: &ListQuery,
    ) -> Result<Listing, SourceError> {
        let mut params = vec![
            ("type".to_owned(), page_type.to_owned()),
            ("site".to_owned(), self.site_id.clone()),
            ("fields".to_owned(), "*".to_owned()),
        ];
        params.extend(query.params.iter().cloned());

        let listing: Listing = Self::decode(self.send("/pages/", &params).await?).await?;
        debug!(
            page_type,
            total = listing.meta.total_count,
            returned = listing.items.len(),
            "decoded listing"
        );
        Ok(listing)
    }
}

fn classify(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout(err.to_string())
    } else if err.is_decode() {
        SourceError::Decode(err.to_string())
    } else {
        SourceError::Transport(err.to_string())
    }
}

#[async_trait]
impl ContentSource for WagtailClient {
    #[tracing::instrument(skip_all, fields(page_type = %page_type))]
    async fn list_by_type(
        &self,
        page_type: &str,
        query: &ListQuery,
    ) -> Result<Vec<RawPage>, SourceError> {
        Ok(self.listing(page_type, query).await?.items)
    }

    #[tracing::instrument(skip_all, fields(page_type = %page_type, slug = %slug))]
    async fn get_one_by_slug(
        &self,
        page_type: &str,
        slug: &str,
    ) -> Result<Option<RawPage>, SourceError> {
        let listing = self.listing(page_type, &ListQuery::new().slug(slug)).await?;
        Ok(listing.items.into_iter().next())
    }

    #[tracing::instrument(skip_all, fields(id = id))]
    async fn get_by_id(&self, id: u64) -> Result<Option<RawPage>, SourceError> {
        let query = [("fields".to_owned(), "*".to_owned())];
        let response = self.send(&format!("/pages/{id}/"), &query).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(response).await.map(Some)
    }

    #[tracing::instrument(skip_all, fields(content_type = %content_type))]
    async fn preview_page(
        &self,
        content_type: &str,
        token: &str,
    ) -> Result<RawPage, SourceError> {
        let query = [
            ("content_type".to_owned(), content_type.to_owned()),
            ("token".to_owned(), token.to_owned()),
            ("site".to_owned(), self.site_hostname.clone()),
        ];
        Self::decode(self.send("/page_preview/", &query).await?).await
    }
}
