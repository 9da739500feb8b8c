//! `mapi get <target>` – GET an endpoint path or absolute URL.

use anyhow::Result;
use mapi_core::config::ManagerConfig;
use mapi_core::endpoint::resolve_endpoint;
use mapi_core::fetch::{self, ResponseFormat};
use mapi_core::output::{deliver, OutputTarget};
use mapi_core::session::ManagerSession;
use std::path::Path;

pub fn run_get(
    session: &ManagerSession,
    cfg: &ManagerConfig,
    target: &str,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let url = resolve_endpoint(&cfg.manager_url, target)?;
    let format = if json {
        ResponseFormat::Json
    } else {
        ResponseFormat::Default
    };

    let response = fetch::fetch(session, &url, format)?;
    tracing::info!(url = %url, status = response.status, bytes = response.body.len(), "GET succeeded");

    let sink = output
        .map(|p| OutputTarget::File(p.to_path_buf()))
        .unwrap_or(OutputTarget::Stdout);
    let mut stdout = std::io::stdout().lock();
    deliver(&mut stdout, &url, format, &response.body, &sink)?;
    Ok(())
}
