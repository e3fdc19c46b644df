use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use extshelf::{
  cli::{Cli, Command},
  extensions::{ExtensionId, Resolver},
  logging::{init_logging, init_logging_stderr},
  render::{render_grid, render_page},
  ui::Shelf
};

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  if init_logging().is_err() { init_logging_stderr(); }

  let cfg = cli.load_config()?;
  let resolver = Resolver::new(cfg.endpoint_url()?, cfg.request_timeout())?;

  match cli.command.unwrap_or(Command::Browse) {
    Command::Browse => {
      let ids = cfg.extension_ids()?;
      println!("Fetching {} extensions from {}", ids.len(), resolver.endpoint());

      let summaries = resolver.resolve_all(&ids, cfg.join_policy).await?;
      tracing::info!(count = summaries.len(), "opening shelf");

      // drop returns terminal to normal mode
      Shelf::new(summaries, cfg.grid_options()?)?.listen().await?;
    },

    Command::Render { output, fragment } => {
      let ids = cfg.extension_ids()?;
      let summaries = resolver.resolve_all(&ids, cfg.join_policy).await?;
      let options = cfg.grid_options()?;

      let html = if fragment { render_grid(&summaries, &options) } else { render_page(&summaries, &options) };

      match output {
        Some(path) => {
          fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
          tracing::info!("wrote {} cells to {}", summaries.len(), path.display());
        },
        None => print!("{}", html)
      }
    },

    Command::Show { ids } => {
      let ids = ids
        .iter()
        .map(|id| ExtensionId::new(id.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

      for summary in resolver.resolve_all(&ids, cfg.join_policy).await? {
        println!(
          "{}\t{}\t{} downloads\t{}",
          summary.name,
          summary.display_name,
          summary.pretty_downloads(),
          summary.icon_uri
        );
      }
    }
  }

  Ok(())
}
