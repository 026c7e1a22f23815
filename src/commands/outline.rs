//! Implementation of the `regiontoc outline` command.

use super::CommandContext;
use crate::cli::{OutlineArgs, OutputFormat};
use regiontoc::error::Result;
use regiontoc::outline::{render_json, render_text};

/// Execute the `regiontoc outline` command.
pub fn cmd_outline(ctx: &CommandContext, args: OutlineArgs) -> Result<()> {
    print!("{}", render_outline(ctx, &args)?);
    Ok(())
}

fn render_outline(ctx: &CommandContext, args: &OutlineArgs) -> Result<String> {
    let doc = ctx.load_document(&args.file, args.language.as_deref())?;
    let outline = ctx.scanner.build(&doc.text, &doc.language_id);

    match args.format {
        OutputFormat::Text => Ok(render_text(&outline)),
        OutputFormat::Json => Ok(format!("{}\n", render_json(&outline)?)),
    }
}
