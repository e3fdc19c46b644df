use std::{io, thread};

use termion::input::TermRead;
use tokio::sync::mpsc::unbounded_channel;
use tokio_stream::{wrappers::UnboundedReceiverStream, Stream};

use super::{key_action, ShelfAction};

/// Shelf actions read from stdin. Keys that mean nothing on the shelf are skipped.
///
/// Reading stdin blocks, so it happens on a plain OS thread rather than a tokio worker;
/// that thread is not joined and goes away with the process.
/// The stream ends when stdin closes or fails.
pub fn shelf_actions() -> impl Stream<Item = ShelfAction> + Unpin {
  let (action_tx, action_rx) = unbounded_channel();

  thread::spawn(move || {
    for key in io::stdin().keys() {
      let key = match key {
        Ok(key) => key,
        Err(e) => {
          tracing::warn!(error = %e, "stopped reading keys");
          return;
        }
      };

      if let Some(action) = key_action(key) {
        // receiver gone means the shelf has closed
        if action_tx.send(action).is_err() { return; }
      }
    }
  });

  UnboundedReceiverStream::new(action_rx)
}
