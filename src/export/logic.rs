// src/export/logic.rs

use crate::core::confirm::Confirm;
use crate::core::contacts::ContactLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write every contact to `file`. Returns `false` when the user declined
    /// to overwrite an existing file.
    pub fn export_contacts(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        force: bool,
        prompter: &mut dyn Confirm,
    ) -> AppResult<bool> {
        let path = Path::new(file);

        if !ensure_writable(path, force, prompter) {
            warning("Export cancelled: existing file not overwritten.");
            return Ok(false);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let contacts = ContactLogic::list(pool, None)?;
        if contacts.is_empty() {
            warning("No contacts to export.");
        }

        match format {
            ExportFormat::Csv => export_csv(&contacts, path)?,
            ExportFormat::Json => export_json(&contacts, path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} contact(s) as {}", contacts.len(), format.as_str()),
        );
        Ok(true)
    }
}
