use std::path::Path;

use anyhow::Result;

use super::{expand_options, load_expander};
use crate::ExpandArgs;

pub fn execute(config: &Path, templates: &[String], args: &ExpandArgs) -> Result<()> {
    let expander = load_expander(config, args)?;
    let options = expand_options(args);

    for template in templates {
        println!("{}", expander.expand_with(template, &options));
    }

    Ok(())
}
