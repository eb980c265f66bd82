//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --project) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::value_objects::DeployChannel;

/// hubload - incremental deployer for data hub plugin trees
#[derive(Parser, Debug)]
#[command(name = "hubload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (defaults to the nearest directory holding hubload.toml,
    /// plugins/ or .git)
    #[arg(short = 'C', long = "project", value_name = "DIR", global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy changed modules, REST extensions and entity models
    Deploy {
        /// Forget previous deployments and send everything
        #[arg(short, long)]
        force: bool,

        /// Show what would be deployed without sending or recording anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete persisted deployment records
    Reset {
        /// Which record to delete
        #[arg(long, value_enum, default_value_t = ChannelArg::All)]
        channel: ChannelArg,
    },

    /// Show how the deploy walk treats a directory
    Classify {
        /// Directory to classify, relative to the project root
        dir: PathBuf,
    },
}

/// Record selector for `reset`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelArg {
    Modules,
    Content,
    All,
}

impl ChannelArg {
    pub fn channels(self) -> Vec<DeployChannel> {
        match self {
            ChannelArg::Modules => vec![DeployChannel::Modules],
            ChannelArg::Content => vec![DeployChannel::Content],
            ChannelArg::All => DeployChannel::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["hubload", "deploy", "--force", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Deploy {
                force: true,
                dry_run: false
            }
        ));
    }

    #[test]
    fn project_flag_short_form() {
        let cli = Cli::try_parse_from(["hubload", "-C", "/work/hub", "deploy"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/work/hub")));
    }

    #[test]
    fn reset_defaults_to_all_channels() {
        let cli = Cli::try_parse_from(["hubload", "reset"]).unwrap();
        let Commands::Reset { channel } = cli.command else {
            panic!("expected reset");
        };
        assert_eq!(channel.channels(), DeployChannel::ALL.to_vec());
    }

    #[test]
    fn reset_single_channel() {
        let cli = Cli::try_parse_from(["hubload", "reset", "--channel", "content"]).unwrap();
        let Commands::Reset { channel } = cli.command else {
            panic!("expected reset");
        };
        assert_eq!(channel.channels(), vec![DeployChannel::Content]);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["hubload"]).is_err());
    }
}
