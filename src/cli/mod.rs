//! Command line front end.
//!
//! Drives the converter from a terminal the same way a launcher host would:
//! a keyword plus the typed argument in, a result list out.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use console::style;

use crate::config::Preferences;
use crate::core::{convert, handle_query, ResultItem};
use crate::encoding::Encoding;
use crate::executor::{self, ArboardClipboard, ExecutionResult};
use crate::manifest::PluginManifest;

#[derive(Parser)]
#[command(name = "nova-radix")]
#[command(about = "Convert numbers between hexadecimal, decimal and binary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Preferences file (default: ~/.config/nova/radix.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Copy the first result to the clipboard
    #[arg(long, global = true)]
    pub copy: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query exactly as the launcher would
    Query {
        /// Keyword that triggered the query (e.g. hex, bin, dec)
        keyword: String,

        /// Text typed after the keyword; only the first word is used
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        argument: Vec<String>,
    },

    /// Convert a value from the given encoding
    Convert {
        /// Source encoding: hex, dec or bin
        #[arg(long, short)]
        from: Encoding,

        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print the plugin manifest (nova.toml)
    Manifest,

    /// Write the default preferences file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the CLI.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Preferences::config_path);

    match &cli.command {
        Commands::Query { keyword, argument } => {
            let preferences = Preferences::load_from(&config_path);
            let argument = argument.join(" ");
            let items = handle_query(keyword, &preferences, Some(&argument))
                .with_context(|| format!("Cannot handle keyword '{}'", keyword))?;
            output(&cli, &items)
        }
        Commands::Convert { from, value } => {
            let items = convert(value, *from, &from.targets());
            output(&cli, &items)
        }
        Commands::Manifest => {
            print!("{}", PluginManifest::default().to_toml()?);
            Ok(())
        }
        Commands::InitConfig { force } => init_config(&config_path, *force),
    }
}

fn output(cli: &Cli, items: &[ResultItem]) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}  {}", style(&item.name).bold(), style(&item.description).dim());
        }
    }

    if cli.copy {
        let Some(first) = items.first() else {
            bail!("Nothing to copy");
        };
        let mut clipboard = ArboardClipboard::new()?;
        match executor::execute(&first.on_enter, &mut clipboard)? {
            ExecutionResult::Copied { content } => {
                eprintln!("{} Copied {}", style("✓").green().bold(), content);
            }
            ExecutionResult::Nothing => {
                eprintln!("{} Nothing to copy", style("!").yellow().bold());
            }
        }
    }

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Preferences::default()
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote {}", style("✓").green().bold(), path.display());
    Ok(())
}
