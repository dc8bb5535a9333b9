// crates/serve/src/resolver.rs

//! Storage-agnostic content resolution.
//!
//! Page templates ask the resolver for content; the resolver decides between
//! the uncached preview path and the cached published path. All actual CMS
//! access is injected from the edge crate at startup through the
//! [`ContentSource`](crate::source::ContentSource) held by the [`Fetcher`],
//! and caching through a [`ContentCache`].
//!
//! Preview state is an explicit argument on every call. Slug enumeration
//! takes no mode at all: it runs at build time, outside any request.

use crate::{
    cache::{cached, CacheKey, ContentCache},
    fetch::Fetcher,
    mapper::PageContent,
    preview,
    source::RawPage,
    Error,
};
use domain::{
    content::ContentKind,
    model::{BlogPost, Course, Experience, HomePage, Offer, Route},
};
use serde::Serialize;
use serde_json::Value as Json;
use std::sync::Arc;
use tracing::debug;

/// Whether the caller is an editor previewing drafts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Always fetch, never touch the cache.
    Preview,
    #[default]
    Published,
}

impl Mode {
    pub fn from_preview(preview: bool) -> Self {
        if preview {
            Mode::Preview
        } else {
            Mode::Published
        }
    }
}

#[derive(Clone)]
pub struct ContentResolver {
    fetcher: Fetcher,
    cache: Arc<dyn ContentCache>,
}

impl ContentResolver {
    pub fn new(fetcher: Fetcher, cache: Arc<dyn ContentCache>) -> Self {
        Self { fetcher, cache }
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generic resolution
    // ─────────────────────────────────────────────────────────────────────────

    #[tracing::instrument(skip_all, fields(kind = %T::KIND, ?mode))]
    pub async fn all<T: PageContent>(&self, mode: Mode) -> Result<Vec<T>, Error> {
        match mode {
            Mode::Preview => self.fetcher.fetch_all::<T>().await,
            Mode::Published => {
                cached(
                    self.cache.as_ref(),
                    &CacheKey::listing(T::KIND),
                    T::KIND.revalidate(),
                    self.fetcher.fetch_all::<T>(),
                )
                .await
            }
        }
    }

    #[tracing::instrument(skip_all, fields(kind = %T::KIND, slug = %slug, ?mode))]
    pub async fn one<T: PageContent>(&self, slug: &str, mode: Mode) -> Result<Option<T>, Error> {
        match mode {
            Mode::Preview => self.fetcher.fetch_one::<T>(slug).await,
            Mode::Published => {
                cached(
                    self.cache.as_ref(),
                    &CacheKey::item(T::KIND, slug),
                    T::KIND.revalidate(),
                    self.fetcher.fetch_one::<T>(slug),
                )
                .await
            }
        }
    }

    /// Slugs for static path generation. Never cached, never in preview.
    pub async fn slugs<T: PageContent>(&self) -> Result<Vec<String>, Error> {
        self.fetcher.fetch_slugs::<T>().await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Per content type
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn home_page(&self, mode: Mode) -> Result<Option<HomePage>, Error> {
        match mode {
            Mode::Preview => self.fetcher.fetch_home().await,
            Mode::Published => {
                cached(
                    self.cache.as_ref(),
                    &CacheKey::listing(ContentKind::Homepage),
                    ContentKind::Homepage.revalidate(),
                    self.fetcher.fetch_home(),
                )
                .await
            }
        }
    }

    pub async fn all_blog_posts(&self, mode: Mode) -> Result<Vec<BlogPost>, Error> {
        self.all(mode).await
    }

    pub async fn blog_post(&self, slug: &str, mode: Mode) -> Result<Option<BlogPost>, Error> {
        self.one(slug, mode).await
    }

    pub async fn all_blog_post_slugs(&self) -> Result<Vec<String>, Error> {
        self.slugs::<BlogPost>().await
    }

    pub async fn all_routes(&self, mode: Mode) -> Result<Vec<Route>, Error> {
        self.all(mode).await
    }

    pub async fn route(&self, slug: &str, mode: Mode) -> Result<Option<Route>, Error> {
        self.one(slug, mode).await
    }

    pub async fn all_route_slugs(&self) -> Result<Vec<String>, Error> {
        self.slugs::<Route>().await
    }

    pub async fn all_experiences(&self, mode: Mode) -> Result<Vec<Experience>, Error> {
        self.all(mode).await
    }

    pub async fn experience(&self, slug: &str, mode: Mode) -> Result<Option<Experience>, Error> {
        self.one(slug, mode).await
    }

    pub async fn all_experience_slugs(&self) -> Result<Vec<String>, Error> {
        self.slugs::<Experience>().await
    }

    pub async fn all_offers(&self, mode: Mode) -> Result<Vec<Offer>, Error> {
        self.all(mode).await
    }

    pub async fn offer(&self, slug: &str, mode: Mode) -> Result<Option<Offer>, Error> {
        self.one(slug, mode).await
    }

    pub async fn all_offer_slugs(&self) -> Result<Vec<String>, Error> {
        self.slugs::<Offer>().await
    }

    pub async fn all_courses(&self, mode: Mode) -> Result<Vec<Course>, Error> {
        self.all(mode).await
    }

    pub async fn course(&self, slug: &str, mode: Mode) -> Result<Option<Course>, Error> {
        self.one(slug, mode).await
    }

    pub async fn all_course_slugs(&self) -> Result<Vec<String>, Error> {
        self.slugs::<Course>().await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch by kind (CLI, admin tooling)
    // ─────────────────────────────────────────────────────────────────────────

    /// Listing of `kind` as JSON. The homepage lists as its single page.
    pub async fn list_json(&self, kind: ContentKind, mode: Mode) -> Result<Json, Error> {
        match kind {
            ContentKind::Homepage => to_json(&self.home_page(mode).await?.into_iter().collect::<Vec<_>>()),
            ContentKind::Blog => to_json(&self.all_blog_posts(mode).await?),
            ContentKind::Routes => to_json(&self.all_routes(mode).await?),
            ContentKind::Experiences => to_json(&self.all_experiences(mode).await?),
            ContentKind::Offers => to_json(&self.all_offers(mode).await?),
            ContentKind::Courses => to_json(&self.all_courses(mode).await?),
        }
    }

    /// One item of `kind` as JSON. The homepage ignores `slug`.
    pub async fn item_json(
        &self,
        kind: ContentKind,
        slug: &str,
        mode: Mode,
    ) -> Result<Option<Json>, Error> {
        let value = match kind {
            ContentKind::Homepage => self.home_page(mode).await?.map(|v| to_json(&v)),
            ContentKind::Blog => self.blog_post(slug, mode).await?.map(|v| to_json(&v)),
            ContentKind::Routes => self.route(slug, mode).await?.map(|v| to_json(&v)),
            ContentKind::Experiences => self.experience(slug, mode).await?.map(|v| to_json(&v)),
            ContentKind::Offers => self.offer(slug, mode).await?.map(|v| to_json(&v)),
            ContentKind::Courses => self.course(slug, mode).await?.map(|v| to_json(&v)),
        };
        value.transpose()
    }

    pub async fn slugs_for(&self, kind: ContentKind) -> Result<Vec<String>, Error> {
        match kind {
            ContentKind::Homepage => Ok(self
                .fetcher
                .fetch_home()
                .await?
                .map(|home| home.slug)
                .into_iter()
                .collect()),
            ContentKind::Blog => self.slugs::<BlogPost>().await,
            ContentKind::Routes => self.slugs::<Route>().await,
            ContentKind::Experiences => self.slugs::<Experience>().await,
            ContentKind::Offers => self.slugs::<Offer>().await,
            ContentKind::Courses => self.slugs::<Course>().await,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Supporting operations
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn page_by_id(&self, id: u64) -> Result<Option<RawPage>, Error> {
        self.fetcher.page_by_id(id).await
    }

    /// Site path for a preview token. See [`preview::preview_path`].
    pub async fn preview_path(&self, content_type: &str, token: &str) -> Result<String, Error> {
        preview::preview_path(self.fetcher.source().as_ref(), content_type, token).await
    }

    /// Drops cached entries carrying `tag` (e.g. `routes`, `blog-list`,
    /// `offers-early-bird`).
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        let dropped = self.cache.invalidate_tag(tag);
        debug!(tag, dropped, "revalidated");
        dropped
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Json, Error> {
    serde_json::to_value(value).map_err(|e| Error::Cache(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cache::MemoryCache,
        fallback::{FallbackPolicy, FallbackSet},
        source::{MockContentSource, SourceError},
    };
    use domain::setting::FallbackMode;
    use serde_json::json;

    fn raw(page_type: &str, slug: &str) -> RawPage {
        serde_json::from_value(json!({
            "id": 9,
            "meta": { "type": page_type, "slug": slug },
            "title": slug
        }))
        .unwrap()
    }

    fn resolver(source: MockContentSource, mode: FallbackMode) -> ContentResolver {
        let fetcher = Fetcher::new(
            Arc::new(source),
            FallbackPolicy::new(mode, false),
            Arc::new(FallbackSet::embedded().clone()),
        );
        ContentResolver::new(fetcher, Arc::new(MemoryCache::new()))
    }

    #[tokio::test]
    async fn published_listing_is_fetched_once() {
        let mut source = MockContentSource::new();
        source
            .expect_list_by_type()
            .times(1)
            .returning(|t, _| Ok(vec![raw(t, "norte-7-dias")]));
        let r = resolver(source, FallbackMode::Full);

        let first = r.all_routes(Mode::Published).await.unwrap();
        let second = r.all_routes(Mode::Published).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].slug, "norte-7-dias");
    }

    #[tokio::test]
    async fn preview_always_goes_to_the_source() {
        let mut source = MockContentSource::new();
        source
            .expect_get_one_by_slug()
            .times(3)
            .returning(|t, slug| Ok(Some(raw(t, slug))));
        let r = resolver(source, FallbackMode::Full);

        for _ in 0..3 {
            let post = r.blog_post("borrador", Mode::Preview).await.unwrap();
            assert_eq!(post.unwrap().slug, "borrador");
        }
    }

    #[tokio::test]
    async fn preview_does_not_populate_the_cache() {
        let mut source = MockContentSource::new();
        source
            .expect_list_by_type()
            .times(2)
            .returning(|t, _| Ok(vec![raw(t, "advanced-open-water")]));
        let r = resolver(source, FallbackMode::Full);

        r.all_courses(Mode::Preview).await.unwrap();
        r.all_courses(Mode::Published).await.unwrap();
        r.all_courses(Mode::Published).await.unwrap();
    }

    #[tokio::test]
    async fn slug_enumeration_bypasses_the_cache() {
        let mut source = MockContentSource::new();
        source
            .expect_list_by_type()
            .times(2)
            .returning(|t, _| Ok(vec![raw(t, "a"), raw(t, "b")]));
        let r = resolver(source, FallbackMode::Full);

        let once = r.all_experience_slugs().await.unwrap();
        let twice = r.all_experience_slugs().await.unwrap();
        assert_eq!(once, vec!["a", "b"]);
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn item_keys_are_per_slug() {
        let mut source = MockContentSource::new();
        source
            .expect_get_one_by_slug()
            .times(2)
            .returning(|t, slug| Ok(Some(raw(t, slug))));
        let r = resolver(source, FallbackMode::Full);

        r.offer("a", Mode::Published).await.unwrap();
        r.offer("b", Mode::Published).await.unwrap();
        r.offer("a", Mode::Published).await.unwrap();
    }

    #[tokio::test]
    async fn invalidation_forces_a_refetch() {
        let mut source = MockContentSource::new();
        source
            .expect_get_one_by_slug()
            .times(2)
            .returning(|t, slug| Ok(Some(raw(t, slug))));
        let r = resolver(source, FallbackMode::Full);

        r.route("norte-7-dias", Mode::Published).await.unwrap();
        assert_eq!(r.invalidate_tag("routes-norte-7-dias"), 1);
        r.route("norte-7-dias", Mode::Published).await.unwrap();
    }

    #[tokio::test]
    async fn unresolved_failures_are_not_cached() {
        let mut source = MockContentSource::new();
        source
            .expect_get_one_by_slug()
            .times(2)
            .returning(|_, _| Err(SourceError::Timeout("10s".into())));
        let r = resolver(source, FallbackMode::None);

        for _ in 0..2 {
            let err = r.offer("early-bird", Mode::Published).await.unwrap_err();
            assert_eq!(err.to_status(), http::StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[tokio::test]
    async fn missing_slug_is_none_for_every_kind_and_mode() {
        for fallback in [
            FallbackMode::Full,
            FallbackMode::Critical,
            FallbackMode::Emergency,
            FallbackMode::None,
        ] {
            let mut source = MockContentSource::new();
            source.expect_get_one_by_slug().returning(|_, _| Ok(None));
            let r = resolver(source, fallback);

            for kind in ContentKind::ALL
                .into_iter()
                .filter(|k| *k != ContentKind::Homepage)
            {
                for mode in [Mode::Preview, Mode::Published] {
                    let item = r.item_json(kind, "nonexistent-slug", mode).await;
                    assert!(
                        matches!(item, Ok(None)),
                        "{kind} {mode:?} {fallback}: {item:?}"
                    );
                }
            }
            assert_eq!(r.offer("nonexistent-slug", Mode::Published).await.unwrap(), None);
            assert_eq!(r.route("nonexistent-slug", Mode::Preview).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn transport_failure_is_never_cached_as_not_found() {
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = calls.clone();
        let mut source = MockContentSource::new();
        source.expect_get_one_by_slug().returning(move |t, slug| {
            if counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
                Err(SourceError::Timeout("10s".into()))
            } else {
                Ok(Some(raw(t, slug)))
            }
        });
        let r = resolver(source, FallbackMode::Full);

        let err = r.offer("verano-2027", Mode::Published).await.unwrap_err();
        assert_eq!(err.to_status(), http::StatusCode::SERVICE_UNAVAILABLE);

        let offer = r.offer("verano-2027", Mode::Published).await.unwrap();
        assert_eq!(offer.unwrap().slug, "verano-2027");
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn homepage_is_cached_under_its_own_key() {
        let mut source = MockContentSource::new();
        source
            .expect_list_by_type()
            .withf(|t, _| t == "home.HomePage")
            .times(1)
            .returning(|t, _| Ok(vec![raw(t, "home")]));
        let r = resolver(source, FallbackMode::Full);

        let a = r.home_page(Mode::Published).await.unwrap();
        let b = r.item_json(ContentKind::Homepage, "", Mode::Published).await.unwrap();
        assert_eq!(a.unwrap().slug, "home");
        assert_eq!(b.unwrap()["slug"], json!("home"));
        assert_eq!(r.invalidate_tag("homepage"), 1);
    }

    #[tokio::test]
    async fn list_json_dispatches_by_kind() {
        let mut source = MockContentSource::new();
        source
            .expect_list_by_type()
            .withf(|t, _| t == "cursos.CursoPage")
            .returning(|t, _| Ok(vec![raw(t, "advanced-open-water")]));
        let r = resolver(source, FallbackMode::None);
        let v = r.list_json(ContentKind::Courses, Mode::Preview).await.unwrap();
        assert_eq!(v[0]["slug"], json!("advanced-open-water"));
    }
}
