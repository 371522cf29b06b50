//! Clap derive structures for the `asactl` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

use asa_core::{ApiGeneration, ConfigRetrieve};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// asactl -- query Cisco ASA firewalls over their management APIs
#[derive(Debug, Parser)]
#[command(
    name = "asactl",
    version,
    about = "Query Cisco ASA firewalls from the command line",
    long_about = "Reads facts, interfaces, addresses, ARP entries, and configuration\n\
        from Cisco ASA firewalls through the REST API, or the legacy\n\
        /admin/exec/ interface on older software.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device profile to use
    #[arg(long, short = 'p', env = "ASA_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Device hostname or address (overrides profile)
    #[arg(long, short = 'H', env = "ASA_HOST", global = true)]
    pub host: Option<String>,

    /// HTTPS port (overrides profile)
    #[arg(long, env = "ASA_PORT", global = true)]
    pub port: Option<u16>,

    /// Login user (overrides profile)
    #[arg(long, short = 'u', env = "ASA_USERNAME", global = true)]
    pub username: Option<String>,

    /// Prompt for the password instead of using the configured one
    #[arg(long, global = true)]
    pub ask_password: bool,

    /// Management API generation: rest or legacy
    #[arg(long, env = "ASA_API", global = true)]
    pub api: Option<ApiGeneration>,

    /// Output format (defaults to the config file's `defaults.output`)
    #[arg(long, short = 'o', env = "ASA_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ASA_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "ASA_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show device identity: model, version, serial, uptime
    Facts,

    /// List interfaces with link state, speed, MTU, and MAC
    #[command(alias = "if")]
    Interfaces,

    /// List IPv4 and IPv6 addresses per interface
    #[command(name = "interfaces-ip", alias = "ip")]
    InterfacesIp,

    /// Show the ARP table
    Arp {
        /// Routing context (accepted for compatibility, ignored)
        #[arg(long, default_value = "")]
        vrf: String,
    },

    /// Fetch startup and/or running configuration
    Config {
        /// all, startup, running, or candidate
        #[arg(long, short = 'r', default_value = "all")]
        retrieve: ConfigRetrieve,

        /// Accepted for compatibility, no effect
        #[arg(long)]
        full: bool,

        /// Mask passwords, keys, and community strings
        #[arg(long)]
        sanitized: bool,
    },

    /// Run raw CLI commands
    Cli {
        /// Commands to run, in order
        #[arg(required = true)]
        commands: Vec<String>,

        /// Keep duplicate commands as separate entries
        #[arg(long)]
        pairs: bool,
    },

    /// Check that the session is still valid
    Alive,

    /// Manage device profiles
    Profiles(ProfilesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Profiles ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    pub command: ProfilesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfilesCommand {
    /// List configured profiles
    List,

    /// Print the config file location
    Path,

    /// Add or replace a profile
    Add {
        /// Profile name
        name: String,

        #[arg(long)]
        host: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        port: Option<u16>,

        #[arg(long, default_value = "rest")]
        api: ApiGeneration,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },

    /// Store a profile password in the system keyring
    SetPassword {
        /// Profile name
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
