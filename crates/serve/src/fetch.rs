// crates/serve/src/fetch.rs

//! Content fetchers: one remote call, mapped, with the fallback policy
//! applied on failure.
//!
//! There is no retry. A failed call is classified once: substitute from the
//! fallback set, absorb into an empty result, or raise, depending on the
//! policy mode and the kind's [`ErrorPolicy`].

use crate::{
    fallback::{FallbackPolicy, FallbackSet},
    mapper::PageContent,
    source::{ContentSource, RawPage, SourceError},
    Error,
};
use domain::{
    content::{ContentKind, ErrorPolicy},
    model::HomePage,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum FetchError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("CMS returned no items")]
    Empty,
}

#[derive(Clone)]
pub struct Fetcher {
    source: Arc<dyn ContentSource>,
    policy: FallbackPolicy,
    fallback: Arc<FallbackSet>,
}

impl Fetcher {
    pub fn new(
        source: Arc<dyn ContentSource>,
        policy: FallbackPolicy,
        fallback: Arc<FallbackSet>,
    ) -> Self {
        Self {
            source,
            policy,
            fallback,
        }
    }

    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    pub fn fallback(&self) -> &FallbackSet {
        &self.fallback
    }

    pub fn source(&self) -> &Arc<dyn ContentSource> {
        &self.source
    }

    /// Every item of `T`. An empty listing counts as a failure.
    #[tracing::instrument(skip_all, fields(kind = %T::KIND))]
    pub async fn fetch_all<T: PageContent>(&self) -> Result<Vec<T>, Error> {
        let kind = T::KIND;
        let err = match self.source.list_by_type(kind.page_type(), &T::list_query()).await {
            Ok(pages) if !pages.is_empty() => {
                debug!(count = pages.len(), "fetched listing");
                return Ok(pages.iter().map(T::from_page).collect());
            }
            Ok(_) => FetchError::Empty,
            Err(e) => FetchError::Source(e),
        };

        self.policy
            .log_failure(&err, &format!("fetch_all({kind})"), None);
        if self.policy.allows(&err, kind) {
            let items = T::fallback_items(&self.fallback).to_vec();
            warn!(count = items.len(), "using fallback data for listing");
            return Ok(items);
        }
        unresolved(kind, err).map(|()| Vec::new())
    }

    /// One item of `T` by slug.
    ///
    /// A clean miss upstream still consults the fallback set, so records
    /// that only exist there stay reachable.
    #[tracing::instrument(skip_all, fields(kind = %T::KIND, slug = %slug))]
    pub async fn fetch_one<T: PageContent>(&self, slug: &str) -> Result<Option<T>, Error> {
        let kind = T::KIND;
        match self.source.get_one_by_slug(kind.page_type(), slug).await {
            Ok(Some(page)) => Ok(Some(T::from_page(&page))),
            Ok(None) => {
                let found = self.fallback.find::<T>(slug).cloned();
                if found.is_some() {
                    info!("not in CMS, serving fallback record");
                } else {
                    debug!("not found");
                }
                Ok(found)
            }
            Err(e) => {
                let err = FetchError::Source(e);
                self.policy
                    .log_failure(&err, &format!("fetch_one({kind})"), Some(slug));
                if self.policy.allows(&err, kind) {
                    if let Some(found) = self.fallback.find::<T>(slug) {
                        warn!("using fallback data for item");
                        return Ok(Some(found.clone()));
                    }
                    debug!("no fallback record for slug");
                }
                unresolved(kind, err).map(|()| None)
            }
        }
    }

    /// The site's single homepage: the first page of its type.
    #[tracing::instrument(skip_all)]
    pub async fn fetch_home(&self) -> Result<Option<HomePage>, Error> {
        let kind = ContentKind::Homepage;
        let err = match self.source.list_by_type(kind.page_type(), &HomePage::list_query()).await {
            Ok(pages) => match pages.first() {
                Some(page) => return Ok(Some(HomePage::from_page(page))),
                None => FetchError::Empty,
            },
            Err(e) => FetchError::Source(e),
        };

        self.policy.log_failure(&err, "fetch_home", None);
        if self.policy.allows(&err, kind) {
            warn!("using fallback data for homepage");
            return Ok(Some(self.fallback.homepage.clone()));
        }
        unresolved(kind, err).map(|()| None)
    }

    /// Slugs of every item of `T`, for static path generation.
    pub async fn fetch_slugs<T: PageContent>(&self) -> Result<Vec<String>, Error> {
        Ok(self
            .fetch_all::<T>()
            .await?
            .iter()
            .map(|item| item.slug().to_owned())
            .collect())
    }

    /// Raw page by numeric id. Not subject to the fallback policy.
    #[tracing::instrument(skip_all, fields(id = id))]
    pub async fn page_by_id(&self, id: u64) -> Result<Option<RawPage>, Error> {
        Ok(self.source.get_by_id(id).await?)
    }
}

/// Applies the kind's error policy once fallback has been ruled out.
fn unresolved(kind: ContentKind, err: FetchError) -> Result<(), Error> {
    match kind.error_policy() {
        ErrorPolicy::Absorb => {
            debug!(kind = %kind, %err, "absorbing failure");
            Ok(())
        }
        ErrorPolicy::Propagate => Err(Error::Unavailable { kind, source: err }),
    }
}
