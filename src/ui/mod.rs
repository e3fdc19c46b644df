use std::io::{self, Stdout};

use anyhow::{Context, Result};
use futures::StreamExt;
use termion::raw::{IntoRawMode, RawTerminal};
use tui::{
  Terminal,
  backend::TermionBackend,
  layout::{Alignment, Constraint, Direction, Layout},
  style::{Color, Modifier, Style},
  text::{Span, Spans},
  widgets::{Block, Borders, Paragraph}
};

use crate::{extensions::ExtensionSummary, render::GridOptions};
use self::user_input::shelf_actions;

mod grid_cursor;
mod key_map;
mod user_input;

pub use grid_cursor::*;
pub use key_map::*;

const TOOLTIP_HEIGHT: u16 = 6;

/// Interactive grid of resolved extensions.
/// The terminal has no pointer hover, so the tooltip follows the selected cell instead.
pub struct Shelf {
  /// terminal abstraction
  terminal: Terminal<TermionBackend<RawTerminal<Stdout>>>,

  summaries: Vec<ExtensionSummary>,
  cursor: GridCursor,
  options: GridOptions
}

impl Shelf {
  pub fn new(summaries: Vec<ExtensionSummary>, options: GridOptions) -> Result<Self> {
    let stdout = io::stdout()
      .into_raw_mode()
      .context("Failed to put terminal into 'raw mode'")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to initialize terminal abstraction")?;

    terminal.clear().context("Failed to clear terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    let cursor = GridCursor::new(summaries.len(), options.columns);

    Ok(Shelf { terminal, summaries, cursor, options })
  }

  // draw based on state
  fn render(&mut self) -> Result<()> {
    let summaries = &self.summaries;
    let cursor = self.cursor;
    let selected = cursor.selected().and_then(|i| summaries.get(i));
    let item_url = selected.map(|s| self.options.item_url(&s.name));

    self.terminal.draw(move |f| {
      let grid_height = cursor.rows() as u16 * CELL_HEIGHT + 2;
      let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
          Constraint::Length(grid_height),
          Constraint::Length(TOOLTIP_HEIGHT),
          Constraint::Min(0)
        ])
        .split(f.size());

      let grid = Block::default()
        .title(format!("Extensions ({})", summaries.len()))
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black).fg(Color::White));
      let cells_area = grid.inner(chunks[0]);
      f.render_widget(grid, chunks[0]);

      for (index, summary) in summaries.iter().enumerate() {
        let rect = match cell_rect(cells_area, index, cursor.columns()) {
          Some(rect) => rect,
          None => break
        };

        let style = if cursor.selected() == Some(index) {
          Style::default().bg(Color::Blue).fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
          Style::default().bg(Color::DarkGray).fg(Color::White)
        };

        // leave a column of breathing room between cells
        let label_width = rect.width.saturating_sub(1) as usize;
        let label: String = cell_label(summary).chars().take(label_width).collect();

        let cell = Paragraph::new(format!("\n{}", label))
          .style(style)
          .alignment(Alignment::Center);
        f.render_widget(cell, tui::layout::Rect { width: rect.width.saturating_sub(1), ..rect });
      }

      let tooltip_contents = match selected {
        None => vec![Spans::from(Span::raw(" Nothing to show"))],
        Some(summary) => vec![
          Spans::from(Span::styled(
            format!(" {}", cell_label(summary)),
            Style::default().add_modifier(Modifier::BOLD)
          )),
          Spans::from(Span::raw(format!(" Downloads: {}", summary.pretty_downloads()))),
          Spans::from(Span::raw(format!(" {}", item_url.clone().unwrap_or_default()))),
          Spans::from(Span::styled(
            format!(" {}", if summary.icon_uri.is_empty() { "no icon" } else { summary.icon_uri.as_str() }),
            Style::default().fg(Color::DarkGray)
          ))
        ]
      };

      let tooltip = Paragraph::new(tooltip_contents)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
      f.render_widget(tooltip, chunks[1]);

      let help = Paragraph::new(" arrows / wasd: move   q: quit")
        .style(Style::default().fg(Color::DarkGray));
      f.render_widget(help, chunks[2]);
    })
    .context("Failed to render")?;

    Ok(())
  }

  /// Redraws after every key press until the user quits or stdin closes
  pub async fn listen(&mut self) -> Result<()> {
    let mut actions = shelf_actions();

    loop {
      self.render()?;

      match actions.next().await {
        Some(ShelfAction::Move(step)) => self.cursor.step(step),
        Some(ShelfAction::Quit) | None => break
      }
    }

    Ok(())
  }
}

impl Drop for Shelf {
  fn drop(&mut self) {
    // raw mode itself is undone when the RawTerminal drops
    let _ = self.terminal.clear();
    let _ = self.terminal.show_cursor();
  }
}

/// Failed lookups have no display name, fall back to the identifier
pub fn cell_label(summary: &ExtensionSummary) -> &str {
  if summary.display_name.is_empty() { summary.name.as_str() } else { summary.display_name.as_str() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::extensions::ExtensionId;

  #[test]
  fn label_falls_back_to_identifier() {
    let id = ExtensionId::new("pub.gone").unwrap();
    let mut summary = ExtensionSummary::placeholder(&id);
    assert_eq!(cell_label(&summary), "pub.gone");

    summary.display_name = "Gone".into();
    assert_eq!(cell_label(&summary), "Gone");
  }
}
