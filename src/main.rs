//! hubload CLI - incremental deployer for data hub plugin trees
//!
//! Usage: hubload [--json] [-v...] [-C <DIR>] <COMMAND>
//!
//! Commands:
//!   deploy    Deploy changed modules, REST extensions and entity models
//!   reset     Delete persisted deployment records
//!   classify  Show how the deploy walk treats a directory

mod commands;

use anyhow::Result;
use clap::Parser;
use hubload::presentation::cli::{Cli, Commands};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    hubload::logging::init(cli.verbose);

    let ctx = CommandContext::load(cli.project.as_deref(), cli.json, cli.verbose)?;

    match cli.command {
        Commands::Deploy { force, dry_run } => commands::deploy::cmd_deploy(&ctx, force, dry_run),
        Commands::Reset { channel } => commands::reset::cmd_reset(&ctx, &channel.channels()),
        Commands::Classify { dir } => commands::classify::cmd_classify(&ctx, &dir),
    }
}
