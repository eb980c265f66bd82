//! Target value object - identifies which remote tier receives an artifact

use serde::{Deserialize, Serialize};

/// Remote application tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Staging tier (ingest side, input flows)
    Staging,
    /// Final tier (harmonized data, entity models)
    Final,
}

impl Target {
    pub const ALL: [Target; 2] = [Target::Staging, Target::Final];

    /// Stable lowercase name, used in URIs, config keys and events
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Staging => "staging",
            Target::Final => "final",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
