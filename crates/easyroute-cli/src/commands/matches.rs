use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{expand_options, load_expander};
use crate::ExpandArgs;

pub fn execute(config: &Path, template: &str, path: &str, args: &ExpandArgs) -> Result<()> {
    let expander = load_expander(config, args)?;
    let route = expander
        .route_with(template, &expand_options(args))
        .with_context(|| format!("Template '{}' does not compile", template))?;

    println!("Pattern: {}", route.as_str().cyan());

    let Some(params) = route.captures(path) else {
        anyhow::bail!("'{}' does not match {}", path, route.as_str());
    };

    println!("{}", "✓ Matched".green().bold());
    for name in route.capture_names() {
        match params.get(name) {
            Some(value) => println!("  {} = {}", name, value.yellow()),
            None => println!("  {} = {}", name, "(unset)".dimmed()),
        }
    }

    Ok(())
}
