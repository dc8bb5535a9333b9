// crates/edge/src/cli.rs

use crate::{settings, wagtail::WagtailClient, Error};
use chrono::Utc;
use clap::{builder::ValueHint, Parser, Subcommand};
use domain::{content::ContentKind, setting::Settings};
use serve::{
    cache::MemoryCache,
    fallback::{FallbackPolicy, FallbackSet},
    fetch::Fetcher,
    resolver::{ContentResolver, Mode},
    sitemap::{build_sitemap, render_sitemap_xml},
};
use std::{path::PathBuf, process::ExitCode, sync::Arc};
use tracing::{error, info};

pub type Result<T> = std::result::Result<T, Error>;

/// Red Sea content CLI
#[tokio::main(flavor = "multi_thread")]
#[tracing::instrument(skip_all)]
pub async fn start() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("redsea failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "redsea", version, about = "Resolve Red Sea site content from Wagtail")]
pub struct Cli {
    /// TOML settings file (or set REDSEA_CONFIG)
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "REDSEA_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Every item of a content kind
    List {
        kind: ContentKind,
        /// Bypass the cache, as an editor preview would
        #[arg(long)]
        preview: bool,
    },
    /// One item by slug (the homepage takes no slug)
    Show {
        kind: ContentKind,
        #[arg(default_value = "")]
        slug: String,
        #[arg(long)]
        preview: bool,
    },
    /// Slugs used for static path generation
    Slugs { kind: ContentKind },
    /// sitemaps.org XML for every published page
    Sitemap {
        /// Site origin (defaults to `site.base_url`)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Site path an editor's preview token opens
    PreviewPath {
        #[arg(long)]
        content_type: String,
        #[arg(long)]
        token: String,
    },
    /// Raw CMS page by id
    Page { id: u64 },
}

#[tracing::instrument(skip_all)]
pub async fn run(cli: Cli) -> Result<String> {
    let settings = settings::load(cli.config.as_deref())?;
    let resolver = build_resolver(&settings)?;
    execute(&resolver, &settings, cli.command).await
}

/// Wire the HTTP client, fallback set and in-process cache together.
pub fn build_resolver(settings: &Settings) -> Result<ContentResolver> {
    let client = WagtailClient::new(&settings.cms, settings.environment.is_development())?;
    let fallback = match &settings.fallback.dir {
        Some(dir) => FallbackSet::from_dir(dir)?,
        None => FallbackSet::embedded().clone(),
    };
    let policy = FallbackPolicy::new(settings.fallback.mode, settings.fallback.log_errors);

    info!(
        api_url = client.api_url(),
        fallback_mode = %policy.mode,
        "content resolver ready"
    );
    let fetcher = Fetcher::new(Arc::new(client), policy, Arc::new(fallback));
    Ok(ContentResolver::new(fetcher, Arc::new(MemoryCache::new())))
}

pub async fn execute(
    resolver: &ContentResolver,
    settings: &Settings,
    command: Commands,
) -> Result<String> {
    let output = match command {
        Commands::List { kind, preview } => {
            pretty(&resolver.list_json(kind, Mode::from_preview(preview)).await?)?
        }
        Commands::Show {
            kind,
            slug,
            preview,
        } => match resolver
            .item_json(kind, &slug, Mode::from_preview(preview))
            .await?
        {
            Some(item) => pretty(&item)?,
            None => return Err(serve::Error::NotFound { kind, slug }.into()),
        },
        Commands::Slugs { kind } => pretty(&resolver.slugs_for(kind).await?)?,
        Commands::Sitemap { base_url } => {
            let base = base_url.as_deref().unwrap_or(&settings.site.base_url);
            render_sitemap_xml(&build_sitemap(resolver, base, Utc::now()).await?)
        }
        Commands::PreviewPath {
            content_type,
            token,
        } => resolver.preview_path(&content_type, &token).await?,
        Commands::Page { id } => match resolver.page_by_id(id).await? {
            Some(page) => pretty(&page)?,
            None => return Err(Error::PageNotFound(id)),
        },
    };
    Ok(output)
}

fn pretty<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
