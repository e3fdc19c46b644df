use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, ShelfConfig};
use crate::extensions::JoinPolicy;

#[derive(Debug, Parser)]
#[command(name = "extshelf", version, about = "Browse a shelf of recommended VS Code extensions")]
pub struct Cli {
  /// Read settings from this file instead of ~/.config/extshelf/config.toml
  #[arg(long, global = true)]
  pub config: Option<PathBuf>,

  /// Fail outright when any lookup fails, instead of showing a blank cell
  #[arg(long, global = true)]
  pub strict: bool,

  /// Cells per grid row
  #[arg(long, global = true)]
  pub columns: Option<u16>,

  /// Show these extensions instead of the configured list (repeatable)
  #[arg(short = 'e', long = "extension", global = true)]
  pub extensions: Vec<String>,

  #[command(subcommand)]
  pub command: Option<Command>
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Interactive grid in the terminal (default)
  Browse,

  /// Write the grid as HTML
  Render {
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only the grid markup, without the surrounding page and stylesheet
    #[arg(long)]
    fragment: bool
  },

  /// Resolve extensions and print one line each
  Show {
    #[arg(required = true)]
    ids: Vec<String>
  }
}

impl Cli {
  /// Config from disk with command-line overrides applied on top
  pub fn load_config(&self) -> Result<ShelfConfig> {
    let mut cfg = match &self.config {
      Some(path) => config::load_from(path)?,
      None => config::load_or_init().context("loading config")?
    };

    if self.strict { cfg.join_policy = JoinPolicy::Strict; }
    if let Some(columns) = self.columns { cfg.columns = columns; }
    if !self.extensions.is_empty() { cfg.extensions = self.extensions.clone(); }

    Ok(cfg)
  }
}
