pub mod auth;
pub mod config;
pub mod endpoint;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod session;
