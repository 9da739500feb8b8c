//! `mapi uptime` – appliance uptime.

use anyhow::Result;
use mapi_core::config::ManagerConfig;
use mapi_core::session::ManagerSession;
use std::path::Path;

use super::get::run_get;

/// System uptime endpoint. Returns plain text, not XML or JSON.
const SYSTEM_UPTIME: &str = "/api/1.0/appliance-management/system/uptime";

pub fn run_uptime(
    session: &ManagerSession,
    cfg: &ManagerConfig,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    run_get(session, cfg, SYSTEM_UPTIME, output, json)
}
