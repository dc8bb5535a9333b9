// crates/edge/src/settings.rs

use crate::Error;
use config::{Config, Environment, File, FileFormat};
use domain::setting::{FallbackMode, Settings};
use std::{collections::HashMap, ffi::OsString, path::Path};
use tracing::debug;

/// Unprefixed variables the deployment already sets, and the keys they fill.
const WELL_KNOWN: &[(&str, &str)] = &[
    ("WAGTAIL_API_URL", "cms.api_url"),
    ("SITE_ID", "cms.site_id"),
    ("SITE_HOSTNAME", "cms.site_hostname"),
    ("SITE_URL", "site.base_url"),
    ("APP_ENV", "environment"),
];

/// Load from the process environment and an optional TOML file.
pub fn load(path: Option<&Path>) -> Result<Settings, Error> {
    load_from(path, &utf8_env(std::env::vars_os()))
}

/// Variables whose name or value is not valid UTF-8 are skipped.
fn utf8_env(vars: impl IntoIterator<Item = (OsString, OsString)>) -> HashMap<String, String> {
    vars.into_iter()
        .filter_map(|(k, v)| match (k.into_string(), v.into_string()) {
            (Ok(k), Ok(v)) => Some((k, v)),
            (Ok(k), Err(_)) => {
                debug!(var = %k, "skipping non UTF-8 environment value");
                None
            }
            _ => None,
        })
        .collect()
}

/// Defaults, then the file, then `REDSEA__SECTION__KEY`, then the
/// well-known variables. `FALLBACK_MODE` is validated before anything else
/// so a typo stops startup with a clear message.
#[tracing::instrument(skip_all)]
pub fn load_from(path: Option<&Path>, env: &HashMap<String, String>) -> Result<Settings, Error> {
    let mut builder = Config::builder()
        .set_default("cms.api_url", "http://localhost:8000/api/v2")?
        .set_default("cms.site_id", "1")?
        .set_default("cms.site_hostname", "localhost:3000")?
        .set_default("cms.timeout_secs", 10_i64)?
        .set_default("fallback.mode", FallbackMode::default().as_str())?
        .set_default("fallback.log_errors", true)?
        .set_default("site.base_url", "https://redsea.sphyrnasolutions.com")?
        .set_default("environment", "production")?;

    if let Some(path) = path {
        if !path.exists() {
            return Err(Error::Config(format!(
                "settings file not found at {}",
                path.display()
            )));
        }
        builder = builder.add_source(File::from(path).format(FileFormat::Toml));
    }

    let prefixed: config::Map<String, String> = env
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    builder = builder.add_source(
        Environment::with_prefix("REDSEA")
            .prefix_separator("__")
            .separator("__")
            .source(Some(prefixed)),
    );

    if let Some(raw) = env.get("FALLBACK_MODE") {
        let mode: FallbackMode = raw.parse()?;
        builder = builder.set_override("fallback.mode", mode.as_str())?;
    }
    for (var, key) in WELL_KNOWN {
        if let Some(value) = env.get(*var) {
            let value = if *key == "environment" {
                value.trim().to_ascii_lowercase()
            } else {
                value.clone()
            };
            builder = builder.set_override(*key, value)?;
        }
    }

    let settings: Settings = builder.build()?.try_deserialize()?;
    debug!(
        api_url = %settings.cms.api_url,
        fallback_mode = %settings.fallback.mode,
        environment = ?settings.environment,
        "settings loaded"
    );
    Ok(settings)
}
