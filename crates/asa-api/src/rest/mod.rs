// REST API client modules
//
// Token-authenticated JSON client for current ASA software. Transport
// mechanics live in `client`, the token lifecycle in `auth`, and the
// endpoint wrappers the driver calls in `endpoints`.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod types;

pub use client::RestClient;
