//! Deploy channel value object
//!
//! Each channel owns an independent record of deployment timestamps so that
//! resetting one never disturbs the other.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeployChannel {
    /// Generic plugin modules uploaded from the plugins root
    Modules,
    /// REST extension artifacts (transforms, options, services)
    Content,
}

impl DeployChannel {
    pub const ALL: [DeployChannel; 2] = [DeployChannel::Modules, DeployChannel::Content];

    /// File name of the persisted record for this channel
    pub fn record_file_name(&self) -> &'static str {
        match self {
            DeployChannel::Modules => "user-modules-deploy-timestamps.toml",
            DeployChannel::Content => "user-content-deploy-timestamps.toml",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployChannel::Modules => "modules",
            DeployChannel::Content => "content",
        }
    }
}

impl std::fmt::Display for DeployChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
