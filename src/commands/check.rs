//! Implementation of the `regiontoc check` command.

use super::CommandContext;
use crate::cli::{CheckArgs, OutputFormat};
use regiontoc::Scanner;
use regiontoc::config::MismatchPolicy;
use regiontoc::error::{RegionError, Result};
use regiontoc::mismatch::{Advisory, MismatchReport};
use serde_json::json;

/// Execute the `regiontoc check` command.
///
/// Prints the report and returns `RegionError::Mismatch` (exit 2) when the
/// markers are unbalanced.
pub fn cmd_check(ctx: &CommandContext, args: CheckArgs) -> Result<()> {
    let (report, advisory) = run_check(ctx, &args)?;
    let file = args.file.display().to_string();

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report, advisory.as_ref(), &file)),
        OutputFormat::Json => println!("{}", render_json(&report, advisory.as_ref())),
    }

    if report.is_balanced() {
        Ok(())
    } else {
        Err(RegionError::Mismatch(format!(
            "{} mismatched marker(s) in {}",
            report.records.len(),
            file
        )))
    }
}

fn run_check(
    ctx: &CommandContext,
    args: &CheckArgs,
) -> Result<(MismatchReport, Option<Advisory>)> {
    let doc = ctx.load_document(&args.file, args.language.as_deref())?;

    let report = if args.all {
        let mut config = ctx.config.clone();
        config.mismatch_policy = MismatchPolicy::All;
        Scanner::new(ctx.scanner.table().clone(), &config).detect(&doc.text, &doc.language_id)
    } else {
        ctx.scanner.detect(&doc.text, &doc.language_id)
    };

    let advisory = Advisory::from_report(&report, ctx.config.reveal_on_mismatch);
    Ok((report, advisory))
}

fn render_text(report: &MismatchReport, advisory: Option<&Advisory>, file: &str) -> String {
    let Some(advisory) = advisory else {
        return format!("{}: region markers balanced\n", file);
    };

    let mut out = report.format_error(file);
    out.push('\n');
    out.push_str(&advisory.message);
    out.push('\n');
    if let Some(line) = advisory.reveal_line {
        out.push_str(&format!("reveal: {}:{}\n", file, line + 1));
    }
    out
}

fn render_json(report: &MismatchReport, advisory: Option<&Advisory>) -> String {
    json!({
        "balanced": report.is_balanced(),
        "mismatches": report.records,
        "message": advisory.map(|a| a.message.as_str()),
        "reveal_line": advisory.and_then(|a| a.reveal_line),
    })
    .to_string()
}
