//! `mapi info` – appliance global information.

use anyhow::Result;
use mapi_core::config::ManagerConfig;
use mapi_core::session::ManagerSession;
use std::path::Path;

use super::get::run_get;

/// Global appliance information endpoint.
const GLOBAL_INFO: &str = "/api/1.0/appliance-management/global/info";

pub fn run_info(
    session: &ManagerSession,
    cfg: &ManagerConfig,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    run_get(session, cfg, GLOBAL_INFO, output, json)
}
