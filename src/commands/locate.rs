//! Implementation of the `regiontoc locate` command.

use super::CommandContext;
use crate::cli::LocateArgs;
use regiontoc::error::{RegionError, Result};
use regiontoc::outline::RegionPath;

/// Execute the `regiontoc locate` command.
pub fn cmd_locate(ctx: &CommandContext, args: LocateArgs) -> Result<()> {
    println!("{}", locate_line(ctx, &args)?);
    Ok(())
}

/// Zero-based start line of the requested region.
fn locate_line(ctx: &CommandContext, args: &LocateArgs) -> Result<usize> {
    let path: RegionPath = args.region.parse()?;
    let doc = ctx.load_document(&args.file, args.language.as_deref())?;

    if !ctx.scanner.table().supports(&doc.language_id) {
        return Err(RegionError::UnsupportedLanguage(doc.language_id));
    }

    ctx.scanner
        .build(&doc.text, &doc.language_id)
        .find(&path)
        .and_then(|region| region.reveal_line())
        .ok_or_else(|| RegionError::RegionNotFound(path.to_string()))
}
