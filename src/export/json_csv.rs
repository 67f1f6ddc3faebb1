// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::contact::Contact;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON array of contacts.
pub(crate) fn export_json(contacts: &[Contact], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(contacts)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("JSON", contacts.len(), path);
    Ok(())
}

/// CSV with an `id,name,phone,email` header; missing fields stay empty.
pub(crate) fn export_csv(contacts: &[Contact], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    // serde skips the header row when there is nothing to serialize
    if contacts.is_empty() {
        wtr.write_record(["id", "name", "phone", "email"])?;
    }
    for c in contacts {
        wtr.serialize(c)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", contacts.len(), path);
    Ok(())
}
