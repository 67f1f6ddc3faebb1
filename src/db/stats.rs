use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL CONTACTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    println!(
        "{}• Total contacts:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) ID RANGE
    //
    let range: (Option<i64>, Option<i64>) =
        pool.conn
            .query_row("SELECT MIN(id), MAX(id) FROM contacts", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;

    match range {
        (Some(first), Some(last)) => println!("{}• Id range:{} {} - {}", CYAN, RESET, first, last),
        _ => println!("{}• Id range:{} {GREY}--{RESET}", CYAN, RESET),
    }

    //
    // 4) AUDIT LOG SIZE
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check`; returns the reported problems (empty when ok).
pub fn integrity_check(pool: &mut DbPool) -> rusqlite::Result<Vec<String>> {
    let mut stmt = pool.conn.prepare("PRAGMA integrity_check")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut problems = Vec::new();
    for r in rows {
        let line = r?;
        if line != "ok" {
            problems.push(line);
        }
    }
    Ok(problems)
}

pub fn vacuum(pool: &mut DbPool) -> rusqlite::Result<()> {
    pool.conn.execute_batch("VACUUM;")
}
