// asa-api: Async Rust client for the Cisco ASA management APIs (REST + legacy exec)

pub mod auth;
pub mod error;
pub mod legacy;
pub mod rest;
pub mod transport;

pub use auth::{AUTH_TOKEN_HEADER, ApiGeneration, AuthOutcome, Credentials};
pub use error::Error;
pub use legacy::LegacyClient;
pub use rest::RestClient;
pub use rest::types as rest_types;
pub use transport::{TlsMode, TransportConfig};
