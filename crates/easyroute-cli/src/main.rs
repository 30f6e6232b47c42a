mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "easyroute")]
#[command(version, about = "Expand <name[:pattern]> route templates into regexes", long_about = None)]
struct Cli {
    /// Config file with [expander] settings and extra [patterns]
    #[arg(short, long, global = true, default_value = easyroute::config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the regex for each template
    Expand {
        /// Templates such as "<year>/<month:mon>"
        #[arg(required = true)]
        templates: Vec<String>,

        #[command(flatten)]
        options: ExpandArgs,
    },

    /// List the pattern table
    Patterns,

    /// Try a template against a path and show the captures
    Match {
        /// Template to expand
        template: String,

        /// Path to match, e.g. "2009/jan/14/"
        path: String,

        #[command(flatten)]
        options: ExpandArgs,
    },
}

/// Flags shared by commands that expand templates
#[derive(Args, Clone, Default)]
pub struct ExpandArgs {
    /// Do not prepend '^'
    #[arg(long)]
    no_anchor: bool,

    /// Do not append '$'
    #[arg(long)]
    no_terminate: bool,

    /// Do not append a trailing '/'
    #[arg(long)]
    no_slash: bool,

    /// Fragment for names missing from the table
    #[arg(short, long = "default")]
    default_fragment: Option<String>,

    /// Extra table entry as name=fragment (repeatable)
    #[arg(short, long = "pattern", value_name = "NAME=FRAGMENT")]
    patterns: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Expand { templates, options } => {
            commands::expand::execute(&cli.config, &templates, &options)?;
        }
        Commands::Patterns => {
            commands::patterns::execute(&cli.config)?;
        }
        Commands::Match {
            template,
            path,
            options,
        } => {
            commands::matches::execute(&cli.config, &template, &path, &options)?;
        }
    }

    Ok(())
}
