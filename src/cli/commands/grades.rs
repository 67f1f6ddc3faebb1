use crate::cli::parser::Commands;
use crate::core::grade_session::GradeSession;
use crate::errors::AppResult;
use std::fs::File;
use std::io::{self, BufReader};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Grades { script } = cmd {
        let stdout = io::stdout();
        match script {
            Some(path) => {
                let input = BufReader::new(File::open(path)?);
                GradeSession::new(input, stdout.lock()).run()?;
            }
            None => {
                let stdin = io::stdin();
                GradeSession::new(stdin.lock(), stdout.lock()).run()?;
            }
        }
    }

    Ok(())
}
