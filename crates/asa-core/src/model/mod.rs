// ── Normalized driver records ──
//
// Every getter returns one of these shapes regardless of which API
// generation produced the data. Maps are insertion-ordered so output
// follows the device's own listing order.

pub mod arp;
pub mod config;
pub mod facts;
pub mod interface;

// ── Re-exports ──────────────────────────────────────────────────────

pub use arp::ArpEntry;
pub use config::{ConfigRetrieve, ConfigSnapshot};
pub use facts::{Facts, Liveness};
pub use interface::{AddressInfo, Interface, InterfaceAddresses};
