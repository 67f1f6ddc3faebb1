use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report top-level keys absent from the file. Returns them too.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        let missing = Config::missing_fields(path)?;
        if missing.is_empty() {
            success(format!("Configuration file is complete: {}", path.display()));
        } else {
            for key in &missing {
                warning(format!("Missing field '{key}' (default value is used)"));
            }
        }
        Ok(missing)
    }

    /// Open the config file in `editor`, `$EDITOR`, `$VISUAL`, or the
    /// platform default, falling back to the default when the first choice fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{editor_to_use}'"));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => info(format!(
                "Configuration file edited using fallback '{default_editor}'"
            )),
            _ => error(format!(
                "Failed to edit configuration file using fallback '{default_editor}'"
            )),
        }
        Ok(())
    }
}
