//! Deploy command entry point

use std::sync::Arc;

use anyhow::{Context, Result};
use hubload::domain::ports::DeployEventSink;
use hubload::infrastructure::{JsonEventSink, TracingEventSink};
use hubload::presentation::{factory, TextRenderer};

use super::CommandContext;

pub fn cmd_deploy(ctx: &CommandContext, force: bool, dry_run: bool) -> Result<()> {
    let use_case = factory::create_deploy_use_case(&ctx.config, &ctx.project_root)
        .context("preparing deploy")?;
    let options = factory::create_deploy_options(&ctx.config, &ctx.project_root)
        .with_force(force)
        .with_dry_run(dry_run);

    let sink: Arc<dyn DeployEventSink> = if ctx.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(TracingEventSink)
    };

    let result = use_case
        .execute_with_events(&options, sink)
        .context("deploy aborted")?;

    if !ctx.json {
        let renderer = TextRenderer {
            unicode: true,
            verbose: ctx.verbose,
        };
        print!("{}", renderer.render_deploy(&result, &ctx.project_root));
    }

    Ok(())
}
