use html_escape::{encode_double_quoted_attribute, encode_text};

use super::GridOptions;
use crate::extensions::ExtensionSummary;

/// Tooltips stay hidden until their cell is hovered
pub const GRID_STYLESHEET: &str = "\
.extshelf-grid { display: grid; max-width: 42rem; margin: 0 auto; row-gap: 1.5rem; }
.extshelf-cell { position: relative; display: inline-flex; justify-content: center; }
.extshelf-cell img { width: 2.25rem; height: 2.25rem; cursor: pointer; }
.extshelf-tooltip {
  display: none; position: absolute; bottom: 100%; left: 50%; transform: translateX(-50%);
  margin-bottom: 0.5rem; padding: 0.75rem; white-space: nowrap; border-radius: 0.25rem;
  background: #e5e5e5; color: #000; font-size: 0.875rem;
}
.extshelf-tooltip h3 { margin: 0 0 0.375rem; font-size: 1.125rem; font-weight: normal; }
.extshelf-tooltip p { margin: 0; }
.extshelf-cell:hover .extshelf-tooltip { display: block; }
";

/// One cell per summary, in the order given
pub fn render_grid(summaries: &[ExtensionSummary], options: &GridOptions) -> String {
  let mut html = format!(
    "<div class=\"extshelf-grid\" style=\"grid-template-columns: repeat({}, minmax(0, 1fr));\">\n",
    options.columns.max(1)
  );

  for summary in summaries {
    html.push_str(&render_cell(summary, options));
  }

  html.push_str("</div>\n");
  html
}

fn render_cell(summary: &ExtensionSummary, options: &GridOptions) -> String {
  let href = options.item_url(&summary.name);
  let name = summary.name.as_str();

  format!(
    concat!(
      "  <div class=\"extshelf-cell\">\n",
      "    <a href=\"{href}\"><img src=\"{icon}\" alt=\"{alt}\"></a>\n",
      "    <div class=\"extshelf-tooltip\">\n",
      "      <h3>{display_name}</h3>\n",
      "      <p>Downloads: {downloads}</p>\n",
      "    </div>\n",
      "  </div>\n"
    ),
    href = encode_double_quoted_attribute(&href),
    icon = encode_double_quoted_attribute(&summary.icon_uri),
    alt = encode_double_quoted_attribute(name),
    display_name = encode_text(&summary.display_name),
    downloads = summary.pretty_downloads()
  )
}

/// The grid as a standalone document
pub fn render_page(summaries: &[ExtensionSummary], options: &GridOptions) -> String {
  format!(
    concat!(
      "<!DOCTYPE html>\n",
      "<html lang=\"en\">\n",
      "<head>\n",
      "<meta charset=\"utf-8\">\n",
      "<title>Recommended extensions</title>\n",
      "<style>\n{style}</style>\n",
      "</head>\n",
      "<body>\n",
      "{grid}",
      "</body>\n",
      "</html>\n"
    ),
    style = GRID_STYLESHEET,
    grid = render_grid(summaries, options)
  )
}
