use crate::fetch::FetchError;
use domain::{content::ContentKind, setting::FallbackMode};
use tracing::error;

/// Whether a failed fetch of `kind` may be answered from the fallback set.
///
/// The error itself does not influence the decision; only the mode and the
/// kind do.
pub fn should_use_fallback(mode: FallbackMode, _error: &FetchError, kind: ContentKind) -> bool {
    match mode {
        FallbackMode::None => false,
        FallbackMode::Emergency | FallbackMode::Full => true,
        FallbackMode::Critical => kind.is_critical(),
    }
}

/// Process-wide fallback configuration, fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct FallbackPolicy {
    pub mode: FallbackMode,
    pub log_errors: bool,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            mode: FallbackMode::Full,
            log_errors: true,
        }
    }
}

impl FallbackPolicy {
    pub fn new(mode: FallbackMode, log_errors: bool) -> Self {
        Self { mode, log_errors }
    }

    pub fn allows(&self, error: &FetchError, kind: ContentKind) -> bool {
        should_use_fallback(self.mode, error, kind)
    }

    /// Report a data-layer failure with its operation context.
    pub fn log_failure(&self, error: &FetchError, operation: &str, slug: Option<&str>) {
        if self.log_errors {
            error!(operation, slug = slug.unwrap_or("-"), %error, "data layer error");
        }
    }
}
