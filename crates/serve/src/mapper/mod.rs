// crates/serve/src/mapper/mod.rs

//! Raw CMS pages → internal content model.
//!
//! Mappers are pure and total: a missing or mistyped field becomes an empty
//! string, zero, an empty list or `None`. Whether the result is good enough
//! to render is the template's call, not ours.

mod block;
mod blog;
mod course;
mod experience;
mod home;
mod offer;
mod route;

pub use block::{map_block, map_blocks};
pub use blog::map_blog_post;
pub use course::map_course_page;
pub use experience::map_experience_page;
pub use home::map_home_page;
pub use offer::map_offer_page;
pub use route::map_route_page;

use crate::{
    fallback::FallbackSet,
    source::{ListQuery, RawPage},
};
use domain::{
    content::ContentKind,
    model::{BlogPost, Course, CtaButton, Experience, Hero, HomePage, Offer, Route},
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map as JsonMap, Value as Json};
use std::slice;

// ─────────────────────────────────────────────────────────────────────────────
// PageContent: ties a model type to its kind, mapper and fallback records
// ─────────────────────────────────────────────────────────────────────────────

pub trait PageContent: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ContentKind;

    fn from_page(page: &RawPage) -> Self;

    fn slug(&self) -> &str;

    fn fallback_items(set: &FallbackSet) -> &[Self];

    /// Extra listing parameters (ordering) for this kind.
    fn list_query() -> ListQuery {
        ListQuery::new()
    }
}

impl PageContent for HomePage {
    const KIND: ContentKind = ContentKind::Homepage;

    fn from_page(page: &RawPage) -> Self {
        map_home_page(page)
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn fallback_items(set: &FallbackSet) -> &[Self] {
        slice::from_ref(&set.homepage)
    }
}

impl PageContent for BlogPost {
    const KIND: ContentKind = ContentKind::Blog;

    fn from_page(page: &RawPage) -> Self {
        map_blog_post(page)
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn fallback_items(set: &FallbackSet) -> &[Self] {
        &set.blog
    }
    fn list_query() -> ListQuery {
        ListQuery::new().order("-published_at")
    }
}

impl PageContent for Route {
    const KIND: ContentKind = ContentKind::Routes;

    fn from_page(page: &RawPage) -> Self {
        map_route_page(page)
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn fallback_items(set: &FallbackSet) -> &[Self] {
        &set.routes
    }
}

impl PageContent for Experience {
    const KIND: ContentKind = ContentKind::Experiences;

    fn from_page(page: &RawPage) -> Self {
        map_experience_page(page)
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn fallback_items(set: &FallbackSet) -> &[Self] {
        &set.experiences
    }
}

impl PageContent for Offer {
    const KIND: ContentKind = ContentKind::Offers;

    fn from_page(page: &RawPage) -> Self {
        map_offer_page(page)
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn fallback_items(set: &FallbackSet) -> &[Self] {
        &set.offers
    }
}

impl PageContent for Course {
    const KIND: ContentKind = ContentKind::Courses;

    fn from_page(page: &RawPage) -> Self {
        map_course_page(page)
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn fallback_items(set: &FallbackSet) -> &[Self] {
        &set.courses
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lenient field access
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only view over a JSON object that never fails.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a>(Option<&'a JsonMap<String, Json>>);

impl<'a> Fields<'a> {
    pub(crate) fn of(page: &'a RawPage) -> Self {
        Fields(Some(&page.fields))
    }

    pub(crate) fn from_value(value: Option<&'a Json>) -> Self {
        Fields(value.and_then(Json::as_object))
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Json> {
        self.0.and_then(|m| m.get(key)).filter(|v| !v.is_null())
    }

    pub(crate) fn str(&self, key: &str) -> String {
        self.get(key).map(scalar_string).unwrap_or_default()
    }

    /// `None` when missing or empty.
    pub(crate) fn opt_str(&self, key: &str) -> Option<String> {
        Some(self.str(key)).filter(|s| !s.is_empty())
    }

    /// Counts and ordinals. Fractions round to the nearest whole number.
    pub(crate) fn u32(&self, key: &str) -> u32 {
        let whole = |f: f64| {
            let f = f.round();
            (f >= 0.0 && f <= f64::from(u32::MAX)).then_some(f as u32)
        };
        match self.get(key) {
            Some(Json::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .or_else(|| n.as_f64().and_then(whole))
                .unwrap_or(0),
            Some(Json::String(s)) => s.trim().parse().ok().and_then(whole).unwrap_or(0),
            _ => 0,
        }
    }

    /// Numbers or numeric strings (Django decimals arrive as `"1495.00"`).
    pub(crate) fn f64(&self, key: &str) -> f64 {
        match self.get(key) {
            Some(Json::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Json::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    pub(crate) fn bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Json::Bool(b)) => *b,
            Some(Json::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub(crate) fn obj(&self, key: &str) -> Fields<'a> {
        Fields::from_value(self.get(key))
    }

    pub(crate) fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// List elements as objects. StreamField entries (`{type, value}`) are
    /// unwrapped to their value.
    pub(crate) fn items(&self, key: &str) -> Vec<Fields<'a>> {
        self.list(key).iter().map(|v| Fields::from_value(Some(unwrap_stream(v)))).collect()
    }

    /// List elements as strings, unwrapping StreamField entries.
    pub(crate) fn strings(&self, key: &str) -> Vec<String> {
        self.list(key)
            .iter()
            .map(unwrap_stream)
            .filter(|v| !v.is_object() && !v.is_array() && !v.is_null())
            .map(scalar_string)
            .collect()
    }

    pub(crate) fn list(&self, key: &str) -> &'a [Json] {
        self.get(key)
            .and_then(Json::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A field holding a single StreamField block, a one-element stream, or a
    /// plain object.
    pub(crate) fn single(&self, key: &str) -> Fields<'a> {
        match self.get(key) {
            Some(Json::Array(items)) => Fields::from_value(items.first().map(unwrap_stream)),
            Some(v) => Fields::from_value(Some(unwrap_stream(v))),
            None => Fields(None),
        }
    }

    pub(crate) fn image(&self, key: &str) -> String {
        image_url(self.get(key))
    }

    pub(crate) fn opt_image(&self, key: &str) -> Option<String> {
        Some(self.image(key)).filter(|s| !s.is_empty())
    }

    /// `{text, link, variant}` object → button. Absent or text-less → `None`.
    pub(crate) fn cta(&self, key: &str) -> Option<CtaButton> {
        let cta = self.obj(key);
        let text = cta.opt_str("text")?;
        let href = cta.opt_str("link").or_else(|| cta.opt_str("href"));
        Some(CtaButton {
            text,
            href: href.unwrap_or_else(|| "#".into()),
            variant: cta.opt_str("variant"),
        })
    }

    /// Button assembled from two flat fields, `{prefix}_text` style.
    pub(crate) fn flat_cta(&self, text_key: &str, link_key: &str) -> Option<CtaButton> {
        let text = self.opt_str(text_key)?;
        Some(CtaButton {
            text,
            href: self.opt_str(link_key).unwrap_or_else(|| "#".into()),
            variant: None,
        })
    }

    /// Slug of a related page chooser (`{id, meta: {slug}}`) or a bare slug.
    pub(crate) fn page_slug(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Json::String(s) if !s.is_empty() => Some(s.clone()),
            v @ Json::Object(_) => {
                let page = Fields::from_value(Some(v));
                page.obj("meta").opt_str("slug").or_else(|| page.opt_str("slug"))
            }
            _ => None,
        }
    }
}

fn unwrap_stream(v: &Json) -> &Json {
    match v.as_object() {
        Some(m) if m.contains_key("type") && m.contains_key("value") => &m["value"],
        _ => v,
    }
}

fn scalar_string(v: &Json) -> String {
    match v {
        Json::String(s) => s.clone(),
        Json::Number(n) => n.to_string(),
        Json::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Resolve a CMS image reference to a URL: `url`, then `meta.download_url`,
/// or a bare string. Anything else is the empty string.
pub fn image_url(image: Option<&Json>) -> String {
    match image {
        Some(Json::String(s)) => s.clone(),
        Some(v @ Json::Object(_)) => {
            let img = Fields::from_value(Some(v));
            img.opt_str("url")
                .or_else(|| img.obj("meta").opt_str("download_url"))
                .unwrap_or_default()
        }
        _ => String::new(),
    }
}

/// Hero assembled from the first block of a `hero` stream. The title falls
/// back to the page title.
pub(crate) fn stream_hero(page: &RawPage) -> Hero {
    let hero = Fields::of(page).single("hero");
    Hero {
        background_image: hero.image("background_image"),
        badge: hero.opt_str("badge"),
        title: hero.opt_str("title").unwrap_or_else(|| page.title.clone()),
        subtitle: hero.str("subtitle"),
        primary_cta: hero.cta("primary_cta"),
        secondary_cta: hero.cta("secondary_cta"),
        trust_line: hero.strings("trust_line"),
    }
}
