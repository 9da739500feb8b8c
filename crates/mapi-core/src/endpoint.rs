//! Endpoint resolution.
//!
//! Commands take either an endpoint path (joined against the configured
//! manager base URL) or an absolute URL (passed through unchanged).

use anyhow::{bail, Context, Result};
use url::Url;

/// Resolves `target` against `base`.
///
/// A target that already parses as an absolute URL is returned unchanged;
/// anything else is treated as an endpoint path and joined onto the base.
/// Only `http` and `https` schemes are accepted.
pub fn resolve_endpoint(base: &str, target: &str) -> Result<String> {
    if let Ok(url) = Url::parse(target) {
        check_scheme(&url)?;
        return Ok(url.into());
    }

    let base_url =
        Url::parse(base).with_context(|| format!("invalid manager URL: {}", base))?;
    check_scheme(&base_url)?;
    let joined = base_url
        .join(target)
        .with_context(|| format!("cannot resolve endpoint {} against {}", target, base))?;
    Ok(joined.into())
}

fn check_scheme(url: &Url) -> Result<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("unsupported URL scheme: {}", other),
    }
}
