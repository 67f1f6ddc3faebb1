use crate::errors::{AppError, AppResult};
use crate::models::contact::{Contact, ContactDraft};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Contact> {
    Ok(Contact {
        id: row.get("id")?,
        name: row.get("name")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
    })
}

pub fn insert_contact(conn: &Connection, draft: &ContactDraft) -> AppResult<Contact> {
    conn.execute(
        "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)",
        params![draft.name, draft.phone, draft.email],
    )?;
    let id = conn.last_insert_rowid();
    Ok(Contact {
        id,
        name: draft.name.clone(),
        phone: draft.phone.clone(),
        email: draft.email.clone(),
    })
}

pub fn get_contact(conn: &Connection, id: i64) -> AppResult<Option<Contact>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, phone, email FROM contacts WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Replace every field of contact `id`.
pub fn update_contact(conn: &Connection, id: i64, draft: &ContactDraft) -> AppResult<Contact> {
    let changed = conn.execute(
        "UPDATE contacts SET name = ?1, phone = ?2, email = ?3 WHERE id = ?4",
        params![draft.name, draft.phone, draft.email, id],
    )?;
    if changed == 0 {
        return Err(AppError::ContactNotFound(id));
    }
    Ok(Contact {
        id,
        name: draft.name.clone(),
        phone: draft.phone.clone(),
        email: draft.email.clone(),
    })
}

pub fn delete_contact(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM contacts WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::ContactNotFound(id));
    }
    Ok(())
}

/// All contacts in insertion order.
pub fn load_contacts(conn: &Connection) -> AppResult<Vec<Contact>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, phone, email FROM contacts ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_contacts(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?)
}
