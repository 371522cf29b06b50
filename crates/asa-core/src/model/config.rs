// ── Configuration retrieval ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which configuration `get_config` should fetch.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConfigRetrieve {
    #[default]
    All,
    Startup,
    Running,
    /// The device has no candidate config; always yields an empty snapshot.
    Candidate,
}

impl ConfigRetrieve {
    pub fn wants_startup(self) -> bool {
        matches!(self, Self::All | Self::Startup)
    }

    pub fn wants_running(self) -> bool {
        matches!(self, Self::All | Self::Running)
    }
}

/// Configuration text. Fields that were not requested stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub startup: String,
    pub running: String,
    pub candidate: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn retrieve_parses_case_insensitively() {
        assert_eq!("ALL".parse::<ConfigRetrieve>().unwrap(), ConfigRetrieve::All);
        assert_eq!(
            "Running".parse::<ConfigRetrieve>().unwrap(),
            ConfigRetrieve::Running
        );
        assert!("merged".parse::<ConfigRetrieve>().is_err());
    }

    #[test]
    fn candidate_requests_nothing() {
        let c = ConfigRetrieve::Candidate;
        assert!(!c.wants_startup());
        assert!(!c.wants_running());
        assert!(ConfigRetrieve::All.wants_startup() && ConfigRetrieve::All.wants_running());
    }
}
