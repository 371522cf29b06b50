//! Command dispatch: opens the driver, runs one getter, closes the driver.

pub mod alive;
pub mod arp;
pub mod cli_cmd;
pub mod config_cmd;
pub mod facts;
pub mod interfaces;
pub mod profiles;

use asa_core::{AsaDriver, NetworkDriver};

use crate::cli::{Command, OutputFormat};
use crate::error::CliError;

/// Run a device-bound command inside one session.
///
/// The session is closed even when the getter fails; the getter's error
/// takes precedence over a close failure.
pub async fn dispatch(
    cmd: Command,
    driver: &mut AsaDriver,
    format: OutputFormat,
) -> Result<(), CliError> {
    driver.open().await?;

    let result = run(cmd, driver, format).await;
    let closed = driver.close().await;

    result?;
    closed?;
    Ok(())
}

async fn run(cmd: Command, driver: &AsaDriver, format: OutputFormat) -> Result<(), CliError> {
    match cmd {
        Command::Facts => facts::handle(driver, format).await,
        Command::Interfaces => interfaces::handle(driver, format).await,
        Command::InterfacesIp => interfaces::handle_ip(driver, format).await,
        Command::Arp { vrf } => arp::handle(driver, &vrf, format).await,
        Command::Config {
            retrieve,
            full,
            sanitized,
        } => config_cmd::handle(driver, retrieve, full, sanitized, format).await,
        Command::Cli { commands, pairs } => cli_cmd::handle(driver, &commands, pairs, format).await,
        Command::Alive => alive::handle(driver, format).await,
        // Profiles and Completions are handled before a driver exists
        Command::Profiles(_) | Command::Completions(_) => Ok(()),
    }
}
