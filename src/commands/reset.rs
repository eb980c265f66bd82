//! Reset command entry point

use anyhow::{Context, Result};
use hubload::presentation::{factory, TextRenderer};
use hubload::DeployChannel;

use super::CommandContext;

pub fn cmd_reset(ctx: &CommandContext, channels: &[DeployChannel]) -> Result<()> {
    let result = factory::create_reset_use_case(&ctx.config, &ctx.project_root)
        .execute(channels)
        .context("reset failed")?;

    if ctx.json {
        let cleared: Vec<_> = result
            .cleared
            .iter()
            .map(|c| {
                serde_json::json!({
                    "channel": c.channel.as_str(),
                    "entries": c.entries,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({ "event": "reset", "cleared": cleared })
        );
    } else {
        print!("{}", TextRenderer::default().render_reset(&result));
    }

    Ok(())
}
