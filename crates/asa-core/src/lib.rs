// asa-core: Cisco ASA network driver on top of asa-api.

pub mod config;
pub mod convert;
pub mod driver;
pub mod error;
pub mod model;
pub mod parse;
pub mod sanitize;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_PORT, DEFAULT_TIMEOUT, DriverConfig, DriverOptions};
pub use driver::{AsaDriver, NetworkDriver};
pub use error::CoreError;
pub use sanitize::sanitize_config;

pub use model::{
    AddressInfo, ArpEntry, ConfigRetrieve, ConfigSnapshot, Facts, Interface, InterfaceAddresses,
    Liveness,
};

// Transport types callers need to build a `DriverConfig`.
pub use asa_api::{ApiGeneration, TlsMode};
