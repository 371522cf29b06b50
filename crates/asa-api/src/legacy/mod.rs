// Legacy exec API client modules
//
// Older ASA software only answers CLI commands over `/admin/exec/`,
// authenticated with HTTP Basic on every request and returning plain text.

pub mod auth;
pub mod client;

pub use client::LegacyClient;
