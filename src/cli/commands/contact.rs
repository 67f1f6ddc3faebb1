use crate::cli::parser::{Commands, ContactCommand};
use crate::config::Config;
use crate::core::confirm::{AutoConfirm, Confirm, StdinConfirm};
use crate::core::contacts::{ContactEdit, ContactLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{header, success, warning};
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Contact { action } = cmd else {
        return Ok(());
    };
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        ContactCommand::Add(fields) => {
            let contact = ContactLogic::add(
                &mut pool,
                fields.name.as_deref().unwrap_or(""),
                fields.phone.as_deref(),
                fields.email.as_deref(),
            )?;
            success(format!("Contact #{} added: {}", contact.id, contact.name));
        }

        ContactCommand::List { search } => {
            let contacts = ContactLogic::list(&mut pool, search.as_deref())?;
            match search {
                Some(q) => header(format!("📇 Contacts matching '{q}'")),
                None => header("📇 Contacts"),
            }
            print!("{}", render::contact_cards(&contacts));
        }

        ContactCommand::Edit { id, fields } => {
            let edit = ContactEdit {
                name: fields.name.as_deref(),
                phone: fields.phone.as_deref(),
                email: fields.email.as_deref(),
            };
            let contact = ContactLogic::edit(&mut pool, *id, &edit)?;
            success(format!("Contact #{} updated: {}", contact.id, contact.name));
            print!("{}", render::contact_cards(std::slice::from_ref(&contact)));
        }

        ContactCommand::Del { id, yes } => {
            let mut prompter: Box<dyn Confirm> = if *yes {
                Box::new(AutoConfirm(true))
            } else {
                Box::new(StdinConfirm)
            };
            match ContactLogic::delete(&mut pool, *id, prompter.as_mut())? {
                Some(c) => success(format!("Contact #{} deleted: {}", c.id, c.name)),
                None => warning("Deletion cancelled."),
            }
        }

        ContactCommand::Export {
            format,
            file,
            force,
        } => {
            ExportLogic::export_contacts(&mut pool, *format, file, *force, &mut StdinConfirm)?;
        }
    }

    Ok(())
}
