// ── Network driver ──
//
// `NetworkDriver` is the uniform getter surface; `AsaDriver` implements it
// for both API generations. Every operation awaits its HTTP calls one after
// another and returns fully normalized records, or the first error.

use indexmap::IndexMap;
use tracing::{debug, info};

use asa_api::rest_types::InterfaceItem;
use asa_api::{ApiGeneration, AuthOutcome, LegacyClient, RestClient};

use crate::config::DriverConfig;
use crate::convert::{interface_addresses, uptime_secs};
use crate::error::CoreError;
use crate::model::facts::VENDOR;
use crate::model::{
    AddressInfo, ArpEntry, ConfigRetrieve, ConfigSnapshot, Facts, Interface, InterfaceAddresses,
    Liveness,
};
use crate::parse::{arp, interface, ipv6, version};
use crate::sanitize::sanitize_config;

const SHOW_STARTUP: &str = "show startup-config";
const SHOW_RUNNING: &str = "show running-config";
const SHOW_INTERFACE: &str = "show interface";
const SHOW_HOSTNAME: &str = "show hostname";
const SHOW_FQDN: &str = "show hostname fqdn";

/// Listing that every REST-managed device serves.
const PHYSICAL_ENDPOINT: &str = "/interfaces/physical";

// ── Driver contract ─────────────────────────────────────────────────

/// Uniform operations every device driver provides.
///
/// Getters do not check that the driver is open; call [`open`] first.
///
/// [`open`]: NetworkDriver::open
#[allow(async_fn_in_trait)]
pub trait NetworkDriver {
    /// Authenticate and start a session.
    async fn open(&mut self) -> Result<(), CoreError>;

    /// End the session.
    async fn close(&mut self) -> Result<(), CoreError>;

    async fn is_alive(&self) -> Result<Liveness, CoreError>;

    /// Run raw CLI commands. Duplicate commands collapse to the output of
    /// their last occurrence.
    async fn cli(&self, commands: &[String]) -> Result<IndexMap<String, String>, CoreError>;

    async fn get_facts(&self) -> Result<Facts, CoreError>;

    async fn get_interfaces(&self) -> Result<IndexMap<String, Interface>, CoreError>;

    async fn get_interfaces_ip(&self) -> Result<IndexMap<String, InterfaceAddresses>, CoreError>;

    /// `vrf` is accepted for interface compatibility; the device has none.
    async fn get_arp_table(&self, vrf: &str) -> Result<Vec<ArpEntry>, CoreError>;

    /// `full` is accepted for interface compatibility and ignored.
    async fn get_config(
        &self,
        retrieve: ConfigRetrieve,
        full: bool,
        sanitized: bool,
    ) -> Result<ConfigSnapshot, CoreError>;
}

// ── AsaDriver ───────────────────────────────────────────────────────

enum Backend {
    Rest(RestClient),
    Legacy(LegacyClient),
}

/// Driver for Cisco ASA firewalls.
pub struct AsaDriver {
    config: DriverConfig,
    backend: Backend,
    open: bool,
}

impl AsaDriver {
    /// Build a closed driver. No network traffic happens until [`open`].
    ///
    /// [`open`]: NetworkDriver::open
    pub fn new(config: DriverConfig) -> Result<Self, CoreError> {
        let transport = config.transport();
        let base = config.url.as_str();
        let credentials = config.credentials.clone();

        let backend = match config.api {
            ApiGeneration::Rest => Backend::Rest(RestClient::new(base, credentials, &transport)?),
            ApiGeneration::Legacy => {
                Backend::Legacy(LegacyClient::new(base, credentials, &transport)?)
            }
        };

        Ok(Self {
            config,
            backend,
            open: false,
        })
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn api(&self) -> ApiGeneration {
        self.config.api
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Like [`NetworkDriver::cli`] but keeps every (command, output) pair
    /// in request order, duplicates included.
    pub async fn cli_pairs(
        &self,
        commands: &[String],
    ) -> Result<Vec<(String, String)>, CoreError> {
        if commands.is_empty() {
            return Ok(Vec::new());
        }
        let pairs = match &self.backend {
            Backend::Rest(rest) => rest.execute_commands(commands).await?,
            Backend::Legacy(legacy) => legacy.execute_commands(commands).await?,
        };
        Ok(pairs)
    }

    fn connection_error(&self, reason: String) -> CoreError {
        CoreError::Connection {
            host: self.config.host().to_owned(),
            reason,
        }
    }

    // ── REST helpers ─────────────────────────────────────────────────

    /// Items from every configured interface listing, in endpoint order.
    /// The physical listing must exist; the others are skipped when absent.
    async fn interface_listing(
        rest: &RestClient,
        endpoints: &[String],
    ) -> Result<Vec<InterfaceItem>, CoreError> {
        let mut items = Vec::new();
        for endpoint in endpoints {
            if endpoint == PHYSICAL_ENDPOINT {
                items.extend(rest.list_interfaces(endpoint).await?);
            } else if let Some(found) = rest.try_list_interfaces(endpoint).await? {
                items.extend(found);
            }
        }
        Ok(items)
    }

    async fn rest_interfaces(
        &self,
        rest: &RestClient,
    ) -> Result<IndexMap<String, Interface>, CoreError> {
        let items = Self::interface_listing(rest, &self.config.interface_endpoints).await?;
        let mut interfaces: IndexMap<String, Interface> = items
            .iter()
            .map(|item| (item.hardware_id.clone(), Interface::from(item)))
            .collect();
        if interfaces.is_empty() {
            return Ok(interfaces);
        }

        let commands: Vec<String> = interfaces
            .keys()
            .map(|name| format!("{SHOW_INTERFACE} {name}"))
            .collect();
        debug!(count = commands.len(), "fetching interface details");

        for (command, output) in rest.execute_commands(&commands).await? {
            let Some(name) = command.strip_prefix(SHOW_INTERFACE).map(str::trim) else {
                continue;
            };
            let Some(iface) = interfaces.get_mut(name) else {
                continue;
            };
            interface::parse_interface_detail(name, &output)?.apply(iface);
        }

        Ok(interfaces)
    }

    async fn rest_interfaces_ip(
        &self,
        rest: &RestClient,
    ) -> Result<IndexMap<String, InterfaceAddresses>, CoreError> {
        let items = Self::interface_listing(rest, &self.config.interface_endpoints).await?;
        let mut result = IndexMap::new();
        for item in &items {
            let addrs = interface_addresses(item)?;
            if !addrs.is_empty() {
                result.insert(item.hardware_id.clone(), addrs);
            }
        }
        Ok(result)
    }

    // ── Legacy helpers ───────────────────────────────────────────────

    async fn legacy_interfaces_ip(
        legacy: &LegacyClient,
    ) -> Result<IndexMap<String, InterfaceAddresses>, CoreError> {
        let blocks = interface::parse_interfaces(&legacy.fetch(SHOW_INTERFACE, None).await?)?;
        let nameifs = ipv6::parse_nameif(&legacy.fetch("show nameif", None).await?);

        let mut result: IndexMap<String, InterfaceAddresses> = IndexMap::new();
        for block in &blocks {
            if let Some((addr, prefix_length)) = block.ipv4 {
                result
                    .entry(block.name.clone())
                    .or_default()
                    .ipv4
                    .insert(addr, AddressInfo { prefix_length });
            }
        }

        let Some(output) = legacy.try_fetch("show ipv6 interface", None).await? else {
            debug!("show ipv6 interface not available");
            return Ok(result);
        };

        for (nameif, addrs) in ipv6::parse_ipv6_interfaces(&output)? {
            let hardware = nameifs
                .iter()
                .find(|row| row.nameif == nameif)
                .map(|row| row.interface.clone())
                .or_else(|| {
                    blocks
                        .iter()
                        .find(|b| b.nameif == nameif)
                        .map(|b| b.name.clone())
                })
                .unwrap_or(nameif);
            result.entry(hardware).or_default().ipv6.extend(addrs);
        }

        Ok(result)
    }
}

// ── Contract implementation ─────────────────────────────────────────

impl NetworkDriver for AsaDriver {
    async fn open(&mut self) -> Result<(), CoreError> {
        let outcome = match &mut self.backend {
            Backend::Rest(rest) => rest.authenticate().await?,
            Backend::Legacy(legacy) => legacy.authenticate().await?,
        };

        if let AuthOutcome::Rejected { status } = outcome {
            return Err(CoreError::AuthenticationFailed {
                host: self.config.host().to_owned(),
                status,
            });
        }

        self.open = true;
        info!(host = self.config.host(), api = %self.config.api, "session opened");
        Ok(())
    }

    async fn close(&mut self) -> Result<(), CoreError> {
        let outcome = match &mut self.backend {
            Backend::Rest(rest) => rest.revoke().await,
            Backend::Legacy(legacy) => Ok(legacy.revoke()),
        };
        // The local token is gone even when the device never answered.
        self.open = false;
        let outcome = outcome?;

        if let AuthOutcome::Rejected { status } = outcome {
            return Err(self.connection_error(format!("token revocation rejected (HTTP {status})")));
        }

        info!(host = self.config.host(), "session closed");
        Ok(())
    }

    async fn is_alive(&self) -> Result<Liveness, CoreError> {
        let is_alive = match &self.backend {
            Backend::Rest(rest) => rest.has_active_session().await?,
            Backend::Legacy(legacy) => legacy.probe().await?.is_granted(),
        };
        Ok(Liveness { is_alive })
    }

    async fn cli(&self, commands: &[String]) -> Result<IndexMap<String, String>, CoreError> {
        Ok(self.cli_pairs(commands).await?.into_iter().collect())
    }

    async fn get_facts(&self) -> Result<Facts, CoreError> {
        let (os_version, model, serial_number, uptime) = match &self.backend {
            Backend::Rest(rest) => {
                let serial = rest.serial_number().await?;
                let version = rest.device_version().await?;
                let uptime = uptime_secs(&version);
                (version.asa_version, version.device_type, serial.serial_number, uptime)
            }
            Backend::Legacy(legacy) => {
                let info = version::parse_version(&legacy.fetch("show version", None).await?)?;
                (info.os_version, info.model, info.serial_number, info.uptime)
            }
        };

        let mut names = self
            .cli(&[SHOW_HOSTNAME.to_owned(), SHOW_FQDN.to_owned()])
            .await?;
        let mut take = |command: &str| {
            names
                .swap_remove(command)
                .map(|out| out.replace(['\r', '\n'], ""))
                .ok_or_else(|| CoreError::parse("facts", format!("no output for '{command}'")))
        };
        let hostname = take(SHOW_HOSTNAME)?;
        let fqdn = take(SHOW_FQDN)?;

        let interface_list = self.get_interfaces().await?.into_keys().collect();

        Ok(Facts {
            uptime,
            vendor: VENDOR.to_owned(),
            os_version,
            serial_number,
            model,
            hostname,
            fqdn,
            interface_list,
        })
    }

    async fn get_interfaces(&self) -> Result<IndexMap<String, Interface>, CoreError> {
        match &self.backend {
            Backend::Rest(rest) => self.rest_interfaces(rest).await,
            Backend::Legacy(legacy) => {
                let output = legacy.fetch(SHOW_INTERFACE, None).await?;
                Ok(interface::parse_interfaces(&output)?
                    .into_iter()
                    .map(|block| (block.name, block.interface))
                    .collect())
            }
        }
    }

    async fn get_interfaces_ip(&self) -> Result<IndexMap<String, InterfaceAddresses>, CoreError> {
        match &self.backend {
            Backend::Rest(rest) => self.rest_interfaces_ip(rest).await,
            Backend::Legacy(legacy) => Self::legacy_interfaces_ip(legacy).await,
        }
    }

    async fn get_arp_table(&self, vrf: &str) -> Result<Vec<ArpEntry>, CoreError> {
        if !vrf.is_empty() {
            debug!(vrf, "VRF ignored, device has a single routing context");
        }

        match &self.backend {
            Backend::Rest(rest) => rest
                .arp_table()
                .await?
                .into_iter()
                .map(ArpEntry::try_from)
                .collect(),
            Backend::Legacy(legacy) => arp::parse_arp_table(&legacy.fetch("show arp", None).await?),
        }
    }

    async fn get_config(
        &self,
        retrieve: ConfigRetrieve,
        _full: bool,
        sanitized: bool,
    ) -> Result<ConfigSnapshot, CoreError> {
        let mut commands = Vec::new();
        if retrieve.wants_startup() {
            commands.push(SHOW_STARTUP.to_owned());
        }
        if retrieve.wants_running() {
            commands.push(SHOW_RUNNING.to_owned());
        }

        let mut snapshot = ConfigSnapshot::default();
        if commands.is_empty() {
            return Ok(snapshot);
        }

        let mut outputs = self.cli(&commands).await?;
        let mut take = |command: &str| {
            let text = outputs
                .swap_remove(command)
                .ok_or_else(|| CoreError::parse("config", format!("no output for '{command}'")))?;
            Ok::<_, CoreError>(if sanitized {
                sanitize_config(&text)
            } else {
                text
            })
        };

        if retrieve.wants_startup() {
            snapshot.startup = take(SHOW_STARTUP)?;
        }
        if retrieve.wants_running() {
            snapshot.running = take(SHOW_RUNNING)?;
        }
        Ok(snapshot)
    }
}
