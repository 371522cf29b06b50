mod cli;
mod commands;
mod error;
mod output;

use clap::{Parser, ValueEnum};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use asa_config::{Config, Profile};
use asa_core::{AsaDriver, DriverConfig};

use crate::cli::{Cli, Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Profiles(args) => {
            let format = cli.global.output.unwrap_or(OutputFormat::Table);
            commands::profiles::handle(args, format)
        }

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "asactl", &mut std::io::stdout());
            Ok(())
        }

        // Everything else talks to a device
        cmd => {
            let cfg = asa_config::load_config()?;
            let format = output_format(&cli.global, &cfg);
            let driver_config = build_driver_config(&cli.global, &cfg)?;
            let mut driver = AsaDriver::new(driver_config)?;

            tracing::debug!(command = ?cmd, host = driver.config().host(), "dispatching command");
            commands::dispatch(cmd, &mut driver, format).await
        }
    }
}

/// `--output`, then `defaults.output`, then table.
fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&cfg.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// Build a `DriverConfig` from the config file, profile, and flag overrides.
fn build_driver_config(global: &GlobalOpts, cfg: &Config) -> Result<DriverConfig, CliError> {
    let (profile_name, mut profile) = match cfg.profile(global.profile.as_deref()) {
        Ok((name, profile)) => (name, profile.clone()),
        // No profile: flags and env vars alone must be enough
        Err(_) if global.host.is_some() => ("cli".to_owned(), Profile::default()),
        Err(_) if global.profile.is_some() || !cfg.profiles.is_empty() => {
            let name = global
                .profile
                .clone()
                .or_else(|| cfg.default_profile.clone())
                .unwrap_or_default();
            let mut available: Vec<String> = cfg.profiles.keys().cloned().collect();
            available.sort();
            return Err(CliError::ProfileNotFound {
                name,
                available: available.join(", "),
            });
        }
        Err(_) => {
            return Err(CliError::NoConfig {
                path: asa_config::config_path().display().to_string(),
            });
        }
    };

    apply_overrides(&mut profile, global);

    let (username, password) = if global.ask_password {
        let username = profile.username.clone().ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.clone(),
        })?;
        let password = rpassword::prompt_password(format!("Password for {username}: "))?;
        (username, SecretString::from(password))
    } else {
        asa_config::resolve_credentials(&profile, &profile_name)?
    };

    Ok(asa_config::driver_config(
        &profile,
        &cfg.defaults,
        &username,
        password,
    )?)
}

fn apply_overrides(profile: &mut Profile, global: &GlobalOpts) {
    if let Some(ref host) = global.host {
        profile.host.clone_from(host);
    }
    if global.port.is_some() {
        profile.port = global.port;
    }
    if global.username.is_some() {
        profile.username.clone_from(&global.username);
    }
    if let Some(api) = global.api {
        profile.api = api;
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }
}
