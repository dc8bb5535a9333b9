use crate::{mapper::PageContent, Error};
use domain::{
    content::ContentKind,
    model::{BlogPost, Course, Experience, HomePage, Offer, Route},
};
use serde::de::DeserializeOwned;
use std::{fs, path::Path, sync::LazyLock};
use tracing::{debug, info};

const HOMEPAGE_JSON: &str = include_str!("../../fallback/homepage.json");
const BLOG_JSON: &str = include_str!("../../fallback/blog.json");
const ROUTES_JSON: &str = include_str!("../../fallback/routes.json");
const EXPERIENCES_JSON: &str = include_str!("../../fallback/experiences.json");
const OFFERS_JSON: &str = include_str!("../../fallback/offers.json");
const COURSES_JSON: &str = include_str!("../../fallback/courses.json");

static EMBEDDED: LazyLock<FallbackSet> = LazyLock::new(|| {
    FallbackSet::parse_embedded().expect("failed to parse embedded fallback content")
});

/// Static content served when the CMS cannot answer.
#[derive(Debug, Clone, Default)]
pub struct FallbackSet {
    pub homepage: HomePage,
    pub blog: Vec<BlogPost>,
    pub routes: Vec<Route>,
    pub experiences: Vec<Experience>,
    pub offers: Vec<Offer>,
    pub courses: Vec<Course>,
}

impl FallbackSet {
    /// The set compiled into the binary.
    pub fn embedded() -> &'static FallbackSet {
        &EMBEDDED
    }

    fn parse_embedded() -> Result<FallbackSet, Error> {
        Ok(FallbackSet {
            homepage: parse(ContentKind::Homepage, HOMEPAGE_JSON)?,
            blog: parse(ContentKind::Blog, BLOG_JSON)?,
            routes: parse(ContentKind::Routes, ROUTES_JSON)?,
            experiences: parse(ContentKind::Experiences, EXPERIENCES_JSON)?,
            offers: parse(ContentKind::Offers, OFFERS_JSON)?,
            courses: parse(ContentKind::Courses, COURSES_JSON)?,
        })
    }

    /// Embedded set with any `<label>.json` in `dir` replacing its kind.
    #[tracing::instrument(skip_all, fields(dir = %dir.display()))]
    pub fn from_dir(dir: &Path) -> Result<FallbackSet, Error> {
        let base = Self::embedded();
        Ok(FallbackSet {
            homepage: override_or(dir, ContentKind::Homepage, &base.homepage)?,
            blog: override_or(dir, ContentKind::Blog, &base.blog)?,
            routes: override_or(dir, ContentKind::Routes, &base.routes)?,
            experiences: override_or(dir, ContentKind::Experiences, &base.experiences)?,
            offers: override_or(dir, ContentKind::Offers, &base.offers)?,
            courses: override_or(dir, ContentKind::Courses, &base.courses)?,
        })
    }

    /// Fallback record of `T` with the given slug.
    pub fn find<T: PageContent>(&self, slug: &str) -> Option<&T> {
        T::fallback_items(self).iter().find(|item| item.slug() == slug)
    }

    pub fn slugs<T: PageContent>(&self) -> Vec<String> {
        T::fallback_items(self)
            .iter()
            .map(|item| item.slug().to_owned())
            .collect()
    }
}

fn parse<T: DeserializeOwned>(kind: ContentKind, raw: &str) -> Result<T, Error> {
    serde_json::from_str(raw).map_err(|e| Error::Fallback(format!("{kind}: {e}")))
}

fn override_or<T: DeserializeOwned + Clone>(
    dir: &Path,
    kind: ContentKind,
    embedded: &T,
) -> Result<T, Error> {
    let path = dir.join(format!("{}.json", kind.label()));
    if !path.is_file() {
        debug!(kind = %kind, "no fallback override, using embedded data");
        return Ok(embedded.clone());
    }
    let raw = fs::read_to_string(&path)
        .map_err(|e| Error::Fallback(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "loaded fallback override");
    parse(kind, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::block::BlockValue;

    #[test]
    fn embedded_set_parses_and_has_known_slugs() {
        let set = FallbackSet::embedded();
        assert!(set.find::<BlogPost>("ss-thistlegorm-guia-completa").is_some());
        assert!(set.find::<Route>("norte-7-dias").is_some());
        assert!(set.find::<Experience>("pecios-segunda-guerra-mundial").is_some());
        assert!(set.find::<Offer>("early-bird").is_some());
        assert!(set.find::<Course>("advanced-open-water").is_some());
        assert!(set.find::<Offer>("nonexistent-slug").is_none());
        assert!(!set.homepage.hero.title.is_empty());
    }

    #[test]
    fn embedded_blog_body_is_fully_typed() {
        let post = FallbackSet::embedded()
            .find::<BlogPost>("ss-thistlegorm-guia-completa")
            .unwrap();
        let types: Vec<_> = post.body.iter().map(|b| b.block_type()).collect();
        assert_eq!(types.first(), Some(&"rich_text"));
        assert_eq!(types.last(), Some(&"cta"));
        assert!(post
            .body
            .iter()
            .any(|b| matches!(b.value, BlockValue::TwoColumn(_))));
    }

    #[test]
    fn embedded_offer_prices() {
        let offer = FallbackSet::embedded().find::<Offer>("early-bird").unwrap();
        assert_eq!(offer.price.original, 1495.0);
        assert_eq!(offer.price.current, 1295.0);
        assert_eq!(offer.urgency.seats_available, 8);
    }

    #[test]
    fn blog_slugs_keep_file_order() {
        let slugs = FallbackSet::embedded().slugs::<BlogPost>();
        assert_eq!(
            slugs,
            vec![
                "ss-thistlegorm-guia-completa",
                "ras-mohammed-guia-completa",
                "seguridad-buceo-mar-rojo"
            ]
        );
    }

    #[test]
    fn from_dir_overrides_only_present_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        fs::write(
            dir.join("offers.json"),
            r#"[{ "slug": "verano", "title": "Verano", "price": { "current": 999 } }]"#,
        )
        .unwrap();

        let set = FallbackSet::from_dir(dir).unwrap();
        assert_eq!(set.slugs::<Offer>(), vec!["verano"]);
        assert!(set.find::<Route>("norte-7-dias").is_some());

        fs::write(dir.join("routes.json"), "{ not json").unwrap();
        assert!(matches!(FallbackSet::from_dir(dir), Err(Error::Fallback(_))));
    }
}
