pub mod cache;
pub mod fallback;
pub mod fetch;
pub mod mapper;
pub mod preview;
pub mod resolver;
pub mod sitemap;
pub mod source;

use domain::content::ContentKind;
use fetch::FetchError;
use http::StatusCode;
use source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} content unavailable: {source}")]
    Unavailable { kind: ContentKind, source: FetchError },

    #[error("no {kind} with slug `{slug}`")]
    NotFound { kind: ContentKind, slug: String },

    #[error("unknown content type `{0}`")]
    UnknownContentType(String),

    #[error("CMS error: {0}")]
    Source(#[from] SourceError),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("fallback content error: {0}")]
    Fallback(String),
}

impl Error {
    pub fn to_status(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::UnknownContentType(_) => StatusCode::BAD_REQUEST,
            Error::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        let unavailable = Error::Unavailable {
            kind: ContentKind::Routes,
            source: FetchError::Empty,
        };
        assert_eq!(unavailable.to_status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            unavailable.to_string(),
            "routes content unavailable: CMS returned no items"
        );
        assert_eq!(
            Error::NotFound {
                kind: ContentKind::Offers,
                slug: "x".into()
            }
            .to_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Source(SourceError::Timeout("10s".into())).to_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
