use crate::config::Config;
use crate::core::confirm::{Confirm, Confirmation};
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, zipping it when `compress` is set.
    /// Returns the final backup path, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        prompter: &mut dyn Confirm,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if target.exists() {
            let prompt = format!(
                "The file '{}' already exists. Overwrite it?",
                target.display()
            );
            if Confirmation::request(())
                .resolve(prompter, &prompt)
                .confirmed()
                .is_none()
            {
                warning("Backup cancelled by user.");
                return Ok(None);
            }
        }

        // no intermediate copy: `dest` may itself be the archive path
        let final_path = if compress {
            compress_backup(src, &target, &entry_name(dest))?
        } else {
            fs::copy(src, dest)?;
            dest.to_path_buf()
        };
        success(format!("Backup created: {}", final_path.display()));

        match Connection::open(src) {
            Ok(conn) => ttlog_quiet(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            ),
            Err(e) => tracing::warn!(error = %e, "cannot reopen database to log backup"),
        }

        Ok(Some(final_path))
    }
}

/// Name of the database entry inside the archive: the destination file
/// name with a `.sqlite` extension.
fn entry_name(dest: &Path) -> String {
    dest.with_extension("sqlite")
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "deskbook.sqlite".to_string())
}

/// Write `src` into a new zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path, entry: &str) -> AppResult<PathBuf> {
    let mut f = fs::File::open(src)?;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path.to_path_buf())
}
