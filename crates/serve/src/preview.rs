// crates/serve/src/preview.rs

use crate::{source::ContentSource, Error};
use domain::content::ContentKind;
use tracing::debug;

/// Site path to open for a draft preview.
///
/// `content_type` is the CMS page type as sent by the editor
/// (`rutas.rutapage`, `home.HomePage`, ...), matched case-insensitively.
#[tracing::instrument(skip_all, fields(content_type = %content_type))]
pub async fn preview_path(
    source: &dyn ContentSource,
    content_type: &str,
    token: &str,
) -> Result<String, Error> {
    let kind = ContentKind::from_page_type(content_type)
        .ok_or_else(|| Error::UnknownContentType(content_type.to_owned()))?;
    let page = source.preview_page(content_type, token).await?;
    let path = kind.page_path(page.slug());
    debug!(%path, "resolved preview path");
    Ok(path)
}
