use std::{collections::HashMap, time::Duration};

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use domain::{content::ContentKind, setting::CmsSettings};
use edge::{
    cli::{build_resolver, execute, Commands},
    settings::load_from,
    wagtail::WagtailClient,
};
use serde_json::{json, Value};
use serve::source::{ContentSource, ListQuery, SourceError};

// === Fake Wagtail ===

fn page(page_type: &str, slug: &str, echo: &HashMap<String, String>) -> Value {
    json!({
        "id": 11,
        "meta": { "type": page_type, "slug": slug, "locale": "es" },
        "title": format!("Página {slug}"),
        "echo": echo,
    })
}

async fn pages(Query(q): Query<HashMap<String, String>>) -> Response {
    let page_type = q.get("type").cloned().unwrap_or_default();
    match page_type.as_str() {
        "broken.Page" => return (StatusCode::OK, "<html>oops</html>").into_response(),
        "slow.Page" => tokio::time::sleep(Duration::from_secs(3)).await,
        "down.Page" => return StatusCode::BAD_GATEWAY.into_response(),
        "proxy.Page" => {
            return Json(json!({ "detail": "upstream proxy error" })).into_response()
        }
        _ => {}
    }

    let items = match q.get("slug").map(String::as_str) {
        Some("missing") => vec![],
        Some(slug) => vec![page(&page_type, slug, &q)],
        None => vec![page(&page_type, "primero", &q), page(&page_type, "segundo", &q)],
    };
    Json(json!({ "meta": { "total_count": items.len() }, "items": items })).into_response()
}

async fn page_by_id(Path(id): Path<u64>) -> Response {
    match id {
        404 => StatusCode::NOT_FOUND.into_response(),
        500 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(page("rutas.RutaPage", "norte-7-dias", &HashMap::new())).into_response(),
    }
}

async fn preview(Query(q): Query<HashMap<String, String>>) -> Response {
    if q.get("token").map(String::as_str) != Some("good") {
        return StatusCode::FORBIDDEN.into_response();
    }
    let content_type = q.get("content_type").cloned().unwrap_or_default();
    Json(page(&content_type, "borrador", &q)).into_response()
}

async fn fake_wagtail() -> String {
    let app = Router::new()
        .route("/api/v2/pages/", get(pages))
        .route("/api/v2/pages/{id}/", get(page_by_id))
        .route("/api/v2/page_preview/", get(preview));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v2/")
}

fn client(api_url: &str) -> WagtailClient {
    WagtailClient::new(
        &CmsSettings {
            api_url: api_url.to_owned(),
            site_id: "3".into(),
            site_hostname: "redsea.test".into(),
            timeout_secs: 1,
        },
        false,
    )
    .unwrap()
}

// === Client ===

#[tokio::test]
async fn listing_sends_type_site_fields_and_extra_params() {
    let c = client(&fake_wagtail().await);
    let pages = c
        .list_by_type("blog.BlogPostPage", &ListQuery::new().order("-published_at"))
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].slug(), "primero");
    assert_eq!(pages[0].meta.locale.as_deref(), Some("es"));
    let echo = pages[0].field("echo").unwrap();
    assert_eq!(echo["type"], "blog.BlogPostPage");
    assert_eq!(echo["site"], "3");
    assert_eq!(echo["fields"], "*");
    assert_eq!(echo["order"], "-published_at");
}

#[tokio::test]
async fn slug_lookup_returns_first_match_or_none() {
    let c = client(&fake_wagtail().await);
    let hit = c
        .get_one_by_slug("rutas.RutaPage", "norte-7-dias")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(hit.slug(), "norte-7-dias");
    assert_eq!(hit.field("echo").unwrap()["slug"], "norte-7-dias");

    assert_eq!(c.get_one_by_slug("rutas.RutaPage", "missing").await.unwrap(), None);
}

#[tokio::test]
async fn page_by_id_maps_404_to_none() {
    let c = client(&fake_wagtail().await);
    assert_eq!(c.get_by_id(7).await.unwrap().unwrap().id, 11);
    assert_eq!(c.get_by_id(404).await.unwrap(), None);
    assert!(matches!(
        c.get_by_id(500).await,
        Err(SourceError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn preview_sends_token_and_site_hostname() {
    let c = client(&fake_wagtail().await);
    let draft = c.preview_page("blog.blogpostpage", "good").await.unwrap();
    let echo = draft.field("echo").unwrap();
    assert_eq!(echo["site"], "redsea.test");
    assert_eq!(echo["content_type"], "blog.blogpostpage");

    assert!(matches!(
        c.preview_page("blog.blogpostpage", "expired").await,
        Err(SourceError::Status { status: 403, .. })
    ));
}

#[tokio::test]
async fn failures_are_classified() {
    let c = client(&fake_wagtail().await);
    let q = ListQuery::new();

    assert!(matches!(
        c.list_by_type("broken.Page", &q).await,
        Err(SourceError::Decode(_))
    ));
    assert!(matches!(
        c.list_by_type("down.Page", &q).await,
        Err(SourceError::Status { status: 502, .. })
    ));
    assert!(matches!(
        c.list_by_type("proxy.Page", &q).await,
        Err(SourceError::Decode(_))
    ));
    assert!(matches!(
        c.get_one_by_slug("proxy.Page", "early-bird").await,
        Err(SourceError::Decode(_))
    ));
    assert!(matches!(
        c.list_by_type("slow.Page", &q).await,
        Err(SourceError::Timeout(_))
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}/api/v2"))
        .list_by_type("home.HomePage", &ListQuery::new())
        .await
        .unwrap_err();
    assert!(err.is_unreachable());
}

// === End to end through the resolver ===

fn settings_for(api_url: &str, mode: &str) -> domain::setting::Settings {
    let env = HashMap::from([
        ("WAGTAIL_API_URL".to_string(), api_url.to_string()),
        ("FALLBACK_MODE".to_string(), mode.to_string()),
        ("SITE_URL".to_string(), "https://x.test".to_string()),
    ]);
    load_from(None, &env).unwrap()
}

#[tokio::test]
async fn cli_commands_resolve_through_the_client() {
    let settings = settings_for(&fake_wagtail().await, "none");
    let resolver = build_resolver(&settings).unwrap();

    let slugs = execute(
        &resolver,
        &settings,
        Commands::Slugs {
            kind: ContentKind::Courses,
        },
    )
    .await
    .unwrap();
    let slugs: Vec<String> = serde_json::from_str(&slugs).unwrap();
    assert_eq!(slugs, vec!["primero", "segundo"]);

    let path = execute(
        &resolver,
        &settings,
        Commands::PreviewPath {
            content_type: "rutas.rutapage".into(),
            token: "good".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(path, "/rutas/borrador");

    let xml = execute(&resolver, &settings, Commands::Sitemap { base_url: None })
        .await
        .unwrap();
    assert!(xml.contains("<loc>https://x.test/ofertas/segundo</loc>"));
}

#[tokio::test]
async fn outage_serves_fallback_content_under_full_mode() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let settings = settings_for(&format!("http://{addr}/api/v2"), "full");
    let resolver = build_resolver(&settings).unwrap();
    let route = execute(
        &resolver,
        &settings,
        Commands::Show {
            kind: ContentKind::Routes,
            slug: "norte-7-dias".into(),
            preview: false,
        },
    )
    .await
    .unwrap();
    let route: Value = serde_json::from_str(&route).unwrap();
    assert_eq!(route["slug"], "norte-7-dias");
}
