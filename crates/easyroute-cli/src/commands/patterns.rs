use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::load_expander;
use crate::ExpandArgs;

pub fn execute(config: &Path) -> Result<()> {
    let expander = load_expander(config, &ExpandArgs::default())?;

    for (name, fragment) in expander.patterns().iter_sorted() {
        println!("{}: {}", format!("{:>5}", name).cyan(), fragment);
    }

    Ok(())
}
