//! Notice browser command (`placard browse`)
//!
//! Runs the fullscreen TUI. When the user asks to edit a notice, the TUI
//! exits with the id in a shared slot, the notice opens in $EDITOR, and
//! the TUI restarts when the editor closes.

use std::sync::Arc;

use iocraft::prelude::*;
use parking_lot::Mutex;

use crate::error::{PlacardError, Result};
use crate::notice::Notice;
use crate::tui::{BrowseScreen, PendingEdit};
use crate::utils::open_in_editor;

/// Launch the notice browser TUI
pub async fn cmd_browse(admin: bool) -> Result<()> {
    loop {
        let pending: PendingEdit = Arc::new(Mutex::new(None));

        element! {
            BrowseScreen(admin: admin, pending_edit: Some(pending.clone()))
        }
        .fullscreen()
        .await
        .map_err(|e| PlacardError::Other(format!("TUI error: {}", e)))?;

        // An edit request suspends the TUI for the editor session
        let requested = pending.lock().take();
        match requested {
            Some(id) => {
                let notice = Notice::find(&id)?;
                open_in_editor(&notice.file_path)?;
            }
            None => break,
        }
    }
    Ok(())
}
