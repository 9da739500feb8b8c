//! `mapi meminfo` – appliance memory usage.

use anyhow::Result;
use mapi_core::config::ManagerConfig;
use mapi_core::session::ManagerSession;
use std::path::Path;

use super::get::run_get;

/// System memory usage endpoint.
const SYSTEM_MEMINFO: &str = "/api/1.0/appliance-management/system/meminfo";

pub fn run_meminfo(
    session: &ManagerSession,
    cfg: &ManagerConfig,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    run_get(session, cfg, SYSTEM_MEMINFO, output, json)
}
