use crate::error::Result;
use crate::notice::Notice;
use crate::utils::open_in_editor;

/// Open a notice in the default editor
pub fn cmd_edit(id: &str) -> Result<()> {
    let notice = Notice::find(id)?;
    open_in_editor(&notice.file_path)
}
