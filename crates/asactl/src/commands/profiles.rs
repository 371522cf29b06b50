//! `profiles` handlers. These never touch a device.

use serde::Serialize;
use tabled::Tabled;

use asa_config::{Config, Profile};

use crate::cli::{OutputFormat, ProfilesArgs, ProfilesCommand};
use crate::error::CliError;
use crate::output;

/// What `profiles list` shows. Passwords never leave the config file.
#[derive(Debug, Serialize)]
struct ProfileSummary {
    name: String,
    host: String,
    api: String,
    username: Option<String>,
    default: bool,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "API")]
    api: String,
    #[tabled(rename = "User")]
    username: String,
    #[tabled(rename = "Default")]
    default: &'static str,
}

impl From<&ProfileSummary> for ProfileRow {
    fn from(s: &ProfileSummary) -> Self {
        Self {
            name: s.name.clone(),
            host: s.host.clone(),
            api: s.api.clone(),
            username: s.username.clone().unwrap_or_default(),
            default: if s.default { "*" } else { "" },
        }
    }
}

fn summaries(cfg: &Config) -> Vec<ProfileSummary> {
    let mut list: Vec<ProfileSummary> = cfg
        .profiles
        .iter()
        .map(|(name, p)| ProfileSummary {
            name: name.clone(),
            host: match p.port {
                Some(port) => format!("{}:{port}", p.host),
                None => p.host.clone(),
            },
            api: p.api.to_string(),
            username: p.username.clone(),
            default: cfg.default_profile.as_deref() == Some(name.as_str()),
        })
        .collect();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    list
}

pub fn handle(args: ProfilesArgs, format: OutputFormat) -> Result<(), CliError> {
    match args.command {
        ProfilesCommand::List => {
            let cfg = asa_config::load_config()?;
            let list = summaries(&cfg);
            let out = output::render_list(format, &list, |l| {
                l.iter().map(ProfileRow::from).collect()
            })?;
            output::print_output(&out);
            Ok(())
        }

        ProfilesCommand::Path => {
            output::print_output(&asa_config::config_path().display().to_string());
            Ok(())
        }

        ProfilesCommand::Add {
            name,
            host,
            username,
            port,
            api,
            default,
        } => {
            let mut cfg = asa_config::load_config()?;
            cfg.profiles.insert(
                name.clone(),
                Profile {
                    host,
                    port,
                    api,
                    username: Some(username),
                    ..Profile::default()
                },
            );
            if default || cfg.profiles.len() == 1 {
                cfg.default_profile = Some(name.clone());
            }
            asa_config::save_config(&cfg)?;
            eprintln!(
                "Profile '{name}' saved to {}",
                asa_config::config_path().display()
            );
            Ok(())
        }

        ProfilesCommand::SetPassword { name } => {
            let password = rpassword::prompt_password(format!("Password for '{name}': "))?;
            asa_config::store_password(&name, &password)?;
            eprintln!("Password stored in the system keyring");
            Ok(())
        }
    }
}
