use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;
use regex::Regex;

const OP_MAX: usize = 60;

fn ansi_pattern() -> AppResult<Regex> {
    Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Other(e.to_string()))
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct LogRow {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit table, one coloured line per entry, oldest first.
    pub fn render_log(pool: &mut DbPool) -> AppResult<Vec<String>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let ansi = ansi_pattern()?;
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        // Stored messages may carry colour codes from the terminal.
        let plain = |s: &str| ansi.replace_all(s, "").into_owned();

        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                let full = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, plain(&e.target))
                };
                if full.chars().count() > OP_MAX {
                    let mut s: String = full.chars().take(OP_MAX - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    full
                }
            })
            .collect();
        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);

        let mut lines = Vec::with_capacity(entries.len());
        for (e, label) in entries.iter().zip(labels) {
            let color = color_for_operation(&e.operation);
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));

            // only the operation word is coloured
            let painted = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };

            lines.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                painted,
                padding,
                plain(&e.message),
            ));
        }

        Ok(lines)
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let lines = Self::render_log(pool)?;

        println!("📜 Internal log:\n");
        if lines.is_empty() {
            println!("(empty)");
        }
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::log::ttlog;

    #[test]
    fn strips_colour_codes_from_messages() {
        let mut pool = DbPool::in_memory().unwrap();
        ttlog(&pool.conn, "add", "contact #1", "Added \x1b[32mAda\x1b[0m").unwrap();

        let lines = LogLogic::render_log(&mut pool).unwrap();
        let last = lines.last().unwrap();
        assert!(last.ends_with("=> Added Ada"));
        assert!(last.contains("(contact #1)"));
    }

    #[test]
    fn long_targets_are_truncated() {
        let mut pool = DbPool::in_memory().unwrap();
        let target = "x".repeat(100);
        ttlog(&pool.conn, "backup", &target, "done").unwrap();

        let lines = LogLogic::render_log(&mut pool).unwrap();
        let last = lines.last().unwrap();
        assert!(last.contains("..."));
        assert!(!last.contains(&target));
    }
}
