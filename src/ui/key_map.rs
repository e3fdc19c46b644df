use termion::event::Key;

use super::GridCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step { Up, Down, Left, Right }

/// What a key press means on the shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfAction {
  Move(Step),
  Quit
}

/// Arrows and wasd (either case) move, `q`, Esc, Ctrl-C and Ctrl-D leave.
/// Anything else is ignored.
pub fn key_action(key: Key) -> Option<ShelfAction> {
  let action = match key {
    Key::Up => ShelfAction::Move(Step::Up),
    Key::Down => ShelfAction::Move(Step::Down),
    Key::Left => ShelfAction::Move(Step::Left),
    Key::Right => ShelfAction::Move(Step::Right),
    Key::Esc => ShelfAction::Quit,

    Key::Char(k) => match k.to_ascii_lowercase() {
      'w' => ShelfAction::Move(Step::Up),
      'a' => ShelfAction::Move(Step::Left),
      's' => ShelfAction::Move(Step::Down),
      'd' => ShelfAction::Move(Step::Right),
      'q' => ShelfAction::Quit,
      _ => return None
    },

    Key::Ctrl(k) => match k.to_ascii_lowercase() {
      'c' | 'd' => ShelfAction::Quit,
      _ => return None
    },

    _ => return None
  };

  Some(action)
}

impl GridCursor {
  pub fn step(&mut self, step: Step) {
    match step {
      Step::Up => self.up(),
      Step::Down => self.down(),
      Step::Left => self.left(),
      Step::Right => self.right()
    }
  }
}
