//! Implementation of the `regiontoc languages` command.

use super::CommandContext;
use regiontoc::error::Result;

/// Execute the `regiontoc languages` command.
pub fn cmd_languages(ctx: &CommandContext) -> Result<()> {
    print!("{}", render_languages(ctx));
    Ok(())
}

fn render_languages(ctx: &CommandContext) -> String {
    let mut out = String::new();
    for (language, spec) in ctx.scanner.table().iter() {
        out.push_str(&format!(
            "{}\n  start: {}\n  end:   {}\n",
            language,
            spec.start().as_str(),
            spec.end().as_str()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;

    #[test]
    fn lists_builtin_languages_sorted() {
        let out = render_languages(&context());
        let ids: Vec<&str> = out
            .lines()
            .filter(|line| !line.starts_with(' '))
            .collect();
        assert_eq!(
            ids,
            vec!["css", "html", "javascript", "markdown", "php", "scss", "typescript"]
        );
        assert!(out.contains(r"  end:   ^\s*//\s*#?endregion(?-u:\b)"));
    }
}
