use crate::core::confirm::{Confirm, Confirmation};
use crate::core::validation::validate_contact;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::contact::Contact;

pub struct ContactLogic;

/// Field updates for an edit. `None` keeps the stored value; an empty
/// phone or email clears it.
#[derive(Debug, Default, Clone)]
pub struct ContactEdit<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl ContactLogic {
    pub fn add(
        pool: &mut DbPool,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Contact> {
        let draft = validate_contact(name, phone, email)?;
        let contact = queries::insert_contact(&pool.conn, &draft)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("contact #{}", contact.id),
            &format!("Added contact '{}'", contact.name),
        );
        Ok(contact)
    }

    pub fn edit(pool: &mut DbPool, id: i64, edit: &ContactEdit<'_>) -> AppResult<Contact> {
        let current =
            queries::get_contact(&pool.conn, id)?.ok_or(AppError::ContactNotFound(id))?;

        let name = edit.name.unwrap_or(current.name.as_str());
        let phone = edit.phone.or(current.phone.as_deref());
        let email = edit.email.or(current.email.as_deref());

        let draft = validate_contact(name, phone, email)?;
        let updated = queries::update_contact(&pool.conn, id, &draft)?;

        ttlog_quiet(
            &pool.conn,
            "edit",
            &format!("contact #{id}"),
            &format!("Updated contact '{}'", updated.name),
        );
        Ok(updated)
    }

    /// Delete after confirmation. Returns the removed contact, or `None`
    /// when the user cancelled.
    pub fn delete(
        pool: &mut DbPool,
        id: i64,
        prompter: &mut dyn Confirm,
    ) -> AppResult<Option<Contact>> {
        let existing =
            queries::get_contact(&pool.conn, id)?.ok_or(AppError::ContactNotFound(id))?;

        let prompt = format!(
            "Delete contact #{} '{}'? This action is irreversible.",
            existing.id, existing.name
        );

        let Some(confirmed_id) = Confirmation::request(id).resolve(prompter, &prompt).confirmed()
        else {
            return Ok(None);
        };

        queries::delete_contact(&pool.conn, confirmed_id)?;
        ttlog_quiet(
            &pool.conn,
            "del",
            &format!("contact #{confirmed_id}"),
            &format!("Deleted contact '{}'", existing.name),
        );
        Ok(Some(existing))
    }

    /// All contacts, or those whose name, phone or email contains `search`.
    pub fn list(pool: &mut DbPool, search: Option<&str>) -> AppResult<Vec<Contact>> {
        let all = queries::load_contacts(&pool.conn)?;
        Ok(match search {
            Some(q) => all.into_iter().filter(|c| c.matches(q)).collect(),
            None => all,
        })
    }
}
