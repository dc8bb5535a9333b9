// crates/serve/src/sitemap.rs

//! sitemaps.org document for every published page.

use crate::{resolver::ContentResolver, Error};
use chrono::{DateTime, SecondsFormat, Utc};
use domain::{
    content::ContentKind,
    model::{BlogPost, Course, Experience, Offer, Route},
};
use serde::Serialize;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

fn schedule(kind: ContentKind) -> (ChangeFrequency, f32) {
    match kind {
        ContentKind::Homepage => (ChangeFrequency::Daily, 1.0),
        ContentKind::Offers => (ChangeFrequency::Daily, 0.9),
        ContentKind::Blog | ContentKind::Routes | ContentKind::Experiences => {
            (ChangeFrequency::Weekly, 0.8)
        }
        ContentKind::Courses => (ChangeFrequency::Monthly, 0.7),
    }
}

/// Static pages first, then blog posts, offers, routes, courses and
/// experiences. Slug enumeration runs concurrently.
#[tracing::instrument(skip_all)]
pub async fn build_sitemap(
    resolver: &ContentResolver,
    base_url: &str,
    now: DateTime<Utc>,
) -> Result<Vec<SitemapEntry>, Error> {
    let base = base_url.trim_end_matches('/');
    let (blog, offers, routes, courses, experiences) = tokio::try_join!(
        resolver.slugs::<BlogPost>(),
        resolver.slugs::<Offer>(),
        resolver.slugs::<Route>(),
        resolver.slugs::<Course>(),
        resolver.slugs::<Experience>(),
    )?;

    let entry = |url: String, (change_frequency, priority): (ChangeFrequency, f32)| SitemapEntry {
        url,
        last_modified: now,
        change_frequency,
        priority,
    };

    let mut entries = vec![
        entry(base.to_owned(), schedule(ContentKind::Homepage)),
        entry(format!("{base}/blog"), (ChangeFrequency::Daily, 0.9)),
    ];
    for (kind, slugs) in [
        (ContentKind::Blog, blog),
        (ContentKind::Offers, offers),
        (ContentKind::Routes, routes),
        (ContentKind::Courses, courses),
        (ContentKind::Experiences, experiences),
    ] {
        entries.extend(
            slugs
                .iter()
                .map(|slug| entry(format!("{base}{}", kind.page_path(slug)), schedule(kind))),
        );
    }
    Ok(entries)
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for e in entries {
        // Writing to a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            html_escape::encode_text(&e.url),
            e.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            e.change_frequency,
            e.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}
