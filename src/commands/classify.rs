//! Classify command entry point

use std::path::Path;

use anyhow::Result;
use hubload::presentation::TextRenderer;

use super::CommandContext;

pub fn cmd_classify(ctx: &CommandContext, dir: &Path) -> Result<()> {
    let directory = ctx.project_root.join(dir);
    let layout = ctx.config.project_layout(&ctx.project_root);
    let role = layout.role_of(&directory);

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "classify",
                "path": directory.display().to_string(),
                "role": role.as_str(),
                "target": role.target().map(|t| t.as_str()),
            })
        );
    } else {
        let shown = directory.strip_prefix(&ctx.project_root).unwrap_or(dir);
        print!("{}", TextRenderer::default().render_classification(shown, role));
    }

    Ok(())
}
