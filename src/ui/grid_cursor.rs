use tui::layout::Rect;

pub const CELL_HEIGHT: u16 = 3;

/// Selection within a grid of `len` cells laid out `columns` wide.
/// The selection never leaves `[0, len)`, an empty grid has nothing selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
  index: usize,
  len: usize,
  columns: usize
}

impl GridCursor {
  pub fn new(len: usize, columns: u16) -> Self {
    GridCursor { index: 0, len, columns: columns.max(1) as usize }
  }

  pub fn selected(&self) -> Option<usize> {
    if self.len == 0 { None } else { Some(self.index) }
  }

  pub fn columns(&self) -> usize { self.columns }

  pub fn rows(&self) -> usize {
    (self.len + self.columns - 1) / self.columns
  }

  pub fn left(&mut self) {
    if self.index % self.columns > 0 { self.index -= 1; }
  }

  pub fn right(&mut self) {
    if self.index % self.columns + 1 < self.columns && self.index + 1 < self.len { self.index += 1; }
  }

  pub fn up(&mut self) {
    if self.index >= self.columns { self.index -= self.columns; }
  }

  /// Moving down into a short last row lands on its last cell
  pub fn down(&mut self) {
    if self.index / self.columns + 1 < self.rows() {
      self.index = (self.index + self.columns).min(self.len - 1);
    }
  }
}

/// Where cell `index` is drawn inside `area`, `None` when it falls outside
pub fn cell_rect(area: Rect, index: usize, columns: usize) -> Option<Rect> {
  let columns = columns.max(1);
  let cell_width = (area.width as usize / columns).max(1) as u16;

  let x = area.x as usize + (index % columns) * cell_width as usize;
  let y = area.y as usize + (index / columns) * CELL_HEIGHT as usize;

  let fits =
    x + cell_width as usize <= (area.x + area.width) as usize &&
    y + CELL_HEIGHT as usize <= (area.y + area.height) as usize;

  if fits { Some(Rect::new(x as u16, y as u16, cell_width, CELL_HEIGHT)) } else { None }
}
