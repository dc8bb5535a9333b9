use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};

#[derive(Debug, Clone, Deserialize)]
pub struct CmsSettings {
    /// Base of the Wagtail API, e.g. `http://localhost:8000/api/v2`
    pub api_url: String,

    /// Wagtail site id used to filter every listing
    pub site_id: String,

    /// Host name sent to the preview endpoint
    pub site_hostname: String,

    /// Per-request timeout
    pub timeout_secs: u64,
}

/// How far the fallback set is allowed to stand in for the CMS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Every content kind may fall back.
    #[default]
    Full,
    /// Only critical kinds (homepage, blog) may fall back.
    Critical,
    /// Always substitute, whatever the kind.
    Emergency,
    /// Never fall back.
    None,
}

impl FallbackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackMode::Full => "full",
            FallbackMode::Critical => "critical",
            FallbackMode::Emergency => "emergency",
            FallbackMode::None => "none",
        }
    }
}

impl fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid fallback mode '{0}' (expected full, critical, emergency or none)")]
pub struct InvalidFallbackMode(pub String);

impl FromStr for FallbackMode {
    type Err = InvalidFallbackMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(FallbackMode::Full),
            "critical" => Ok(FallbackMode::Critical),
            "emergency" => Ok(FallbackMode::Emergency),
            "none" => Ok(FallbackMode::None),
            _ => Err(InvalidFallbackMode(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackSettings {
    pub mode: FallbackMode,

    /// Log every failure that triggers a fallback
    pub log_errors: bool,

    /// Optional directory of `<label>.json` files overriding the built-in set
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    /// Absolute origin used in the sitemap
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub cms: CmsSettings,
    pub fallback: FallbackSettings,
    pub site: SiteSettings,
    pub environment: Environment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_mode_parses_case_insensitively() {
        assert_eq!("Critical".parse::<FallbackMode>().unwrap(), FallbackMode::Critical);
        assert_eq!(" none ".parse::<FallbackMode>().unwrap(), FallbackMode::None);
        assert!("sometimes".parse::<FallbackMode>().is_err());
    }

    #[test]
    fn fallback_mode_defaults_to_full() {
        assert_eq!(FallbackMode::default(), FallbackMode::Full);
        assert_eq!(FallbackMode::Emergency.to_string(), "emergency");
    }
}
