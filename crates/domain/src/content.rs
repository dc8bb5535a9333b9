use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error;

/// The content types the site resolves from the CMS.
///
/// Every kind knows its CMS page type, the label used for cache tags and
/// fallback decisions, its revalidation window, and where it lives on the site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Homepage,
    Blog,
    Routes,
    Experiences,
    Offers,
    Courses,
}

/// What a single-item lookup does with a transport failure that the
/// fallback set cannot cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Resolve to "nothing there"; the template renders its not-found page.
    Absorb,
    /// Surface the failure to the caller.
    Propagate,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown content kind `{0}`")]
pub struct UnknownKind(pub String);

impl ContentKind {
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Homepage,
        ContentKind::Blog,
        ContentKind::Routes,
        ContentKind::Experiences,
        ContentKind::Offers,
        ContentKind::Courses,
    ];

    /// Label used for cache tags, fallback files and the critical set.
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Homepage => "homepage",
            ContentKind::Blog => "blog",
            ContentKind::Routes => "routes",
            ContentKind::Experiences => "experiences",
            ContentKind::Offers => "offers",
            ContentKind::Courses => "courses",
        }
    }

    /// Singular form, used in cache keys for single items.
    pub fn singular(self) -> &'static str {
        match self {
            ContentKind::Homepage => "homepage",
            ContentKind::Blog => "blog-post",
            ContentKind::Routes => "route",
            ContentKind::Experiences => "experience",
            ContentKind::Offers => "offer",
            ContentKind::Courses => "course",
        }
    }

    /// Page type name in the CMS API (`app_label.ModelName`).
    pub fn page_type(self) -> &'static str {
        match self {
            ContentKind::Homepage => "home.HomePage",
            ContentKind::Blog => "blog.BlogPostPage",
            ContentKind::Routes => "rutas.RutaPage",
            ContentKind::Experiences => "experiencias.ExperienciaPage",
            ContentKind::Offers => "ofertas.OfertaPage",
            ContentKind::Courses => "cursos.CursoPage",
        }
    }

    /// Case-insensitive reverse lookup of [`ContentKind::page_type`].
    pub fn from_page_type(page_type: &str) -> Option<ContentKind> {
        Self::ALL
            .into_iter()
            .find(|k| k.page_type().eq_ignore_ascii_case(page_type))
    }

    /// How long a published value stays cached.
    pub fn revalidate(self) -> Duration {
        let secs = match self {
            ContentKind::Homepage | ContentKind::Blog => 600,
            ContentKind::Offers => 900,
            ContentKind::Routes | ContentKind::Experiences => 1800,
            ContentKind::Courses => 3600,
        };
        Duration::from_secs(secs)
    }

    /// Kinds that stay on fallback data under `FallbackMode::Critical`.
    pub fn is_critical(self) -> bool {
        matches!(self, ContentKind::Homepage | ContentKind::Blog)
    }

    pub fn error_policy(self) -> ErrorPolicy {
        match self {
            ContentKind::Routes | ContentKind::Offers => ErrorPolicy::Propagate,
            _ => ErrorPolicy::Absorb,
        }
    }

    /// Site path prefix for detail pages. The homepage has none.
    pub fn path_prefix(self) -> &'static str {
        match self {
            ContentKind::Homepage => "",
            ContentKind::Blog => "/blog",
            ContentKind::Routes => "/rutas",
            ContentKind::Experiences => "/experiencias",
            ContentKind::Offers => "/ofertas",
            ContentKind::Courses => "/cursos",
        }
    }

    /// Site path of the page rendering `slug`.
    pub fn page_path(self, slug: &str) -> String {
        match self {
            ContentKind::Homepage => "/".to_owned(),
            _ => format!("{}/{}", self.path_prefix(), slug),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homepage" | "home" => Ok(ContentKind::Homepage),
            "blog" | "posts" => Ok(ContentKind::Blog),
            "routes" | "route" | "rutas" => Ok(ContentKind::Routes),
            "experiences" | "experience" | "experiencias" => Ok(ContentKind::Experiences),
            "offers" | "offer" | "ofertas" => Ok(ContentKind::Offers),
            "courses" | "course" | "cursos" => Ok(ContentKind::Courses),
            other => ContentKind::from_page_type(other).ok_or_else(|| UnknownKind(s.to_owned())),
        }
    }
}
