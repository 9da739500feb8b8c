//! CLI command handlers. Each command is in its own file.

mod completions;
mod get;
mod info;
mod meminfo;
mod uptime;

pub use completions::run_completions;
pub use get::run_get;
pub use info::run_info;
pub use meminfo::run_meminfo;
pub use uptime::run_uptime;
