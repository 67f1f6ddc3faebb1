// src/export/fs_utils.rs

use crate::core::confirm::{Confirm, Confirmation};
use crate::ui::messages::info;
use std::path::Path;

/// Whether `path` may be created or overwritten.
///
/// - missing file → yes
/// - existing file with `force` → yes
/// - existing file otherwise → ask the prompter
pub(crate) fn ensure_writable(path: &Path, force: bool, prompter: &mut dyn Confirm) -> bool {
    if !path.exists() || force {
        return true;
    }

    let prompt = format!("The file '{}' already exists. Overwrite?", path.display());
    let confirmed = Confirmation::request(())
        .resolve(prompter, &prompt)
        .confirmed()
        .is_some();
    if confirmed {
        info("Existing file will be overwritten.");
    }
    confirmed
}
