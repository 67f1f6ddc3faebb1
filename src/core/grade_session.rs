//! Line-driven grade tracker session.
//!
//! Grades live only for the duration of the session. Every command that
//! changes the book reprints the rows and the statistics line.

use crate::core::confirm::{Confirmation, LineConfirm};
use crate::core::grades::GradeBook;
use crate::core::validation::validate_grade;
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::grade::Subject;
use crate::ui::render;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Add {
        name: String,
        subject: String,
        grade: String,
    },
    Del(String),
    List,
    Stats,
    Help,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let cmd = match verb.to_lowercase().as_str() {
        "add" => {
            let mut parts = rest.split('|').map(|p| p.trim().to_string());
            SessionCommand::Add {
                name: parts.next().unwrap_or_default(),
                subject: parts.next().unwrap_or_default(),
                grade: parts.next().unwrap_or_default(),
            }
        }
        "del" | "delete" => SessionCommand::Del(rest.trim().to_string()),
        "list" => SessionCommand::List,
        "stats" => SessionCommand::Stats,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Unknown(other.to_string()),
    };
    Some(cmd)
}

pub struct GradeSession<R, W> {
    book: GradeBook,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GradeSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            book: GradeBook::new(),
            input,
            output,
        }
    }

    pub fn book(&self) -> &GradeBook {
        &self.book
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(
            self.output,
            "📚 Student Grade Tracker. Type 'help' for the list of commands."
        )?;

        loop {
            write!(self.output, "grades> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let Some(cmd) = parse_line(&line) else {
                continue;
            };
            if cmd == SessionCommand::Quit {
                break;
            }

            // Bad input is reported and the session goes on.
            if let Err(e) = self.handle(cmd) {
                match e {
                    AppError::Io(e) => return Err(AppError::Io(e)),
                    other => writeln!(self.output, "❌ {other}")?,
                }
            }
        }

        tracing::debug!(grades = self.book.list().len(), "grade session closed");
        Ok(())
    }

    fn handle(&mut self, cmd: SessionCommand) -> AppResult<()> {
        match cmd {
            SessionCommand::Add {
                name,
                subject,
                grade,
            } => {
                let subject = Some(subject.as_str()).filter(|s| !s.is_empty());
                let entry = validate_grade(&name, subject, &grade)?;
                let pos = self.book.add(entry);
                writeln!(self.output, "✅ Grade #{pos} added.")?;
                self.print_all()
            }
            SessionCommand::Del(raw) => self.delete(&raw),
            SessionCommand::List => {
                if self.book.is_empty() {
                    writeln!(self.output, "No grades recorded")?;
                } else {
                    write!(self.output, "{}", render::grade_rows(self.book.list()))?;
                }
                Ok(())
            }
            SessionCommand::Stats => {
                write!(self.output, "{}", render::grade_stats(self.book.stats().as_ref()))?;
                Ok(())
            }
            SessionCommand::Help => self.print_help(),
            SessionCommand::Unknown(verb) => {
                writeln!(self.output, "Unknown command '{verb}'. Type 'help'.")?;
                Ok(())
            }
            SessionCommand::Quit => Ok(()),
        }
    }

    fn delete(&mut self, raw: &str) -> AppResult<()> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyField("Grade number").into());
        }
        let pos: usize = raw
            .parse()
            .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;
        let entry = self.book.get(pos).ok_or(AppError::GradeNotFound(pos))?;
        let prompt = format!("Delete grade #{pos} ({entry})?");

        let mut prompter = LineConfirm {
            input: &mut self.input,
            output: &mut self.output,
        };
        match Confirmation::request(pos)
            .resolve(&mut prompter, &prompt)
            .confirmed()
        {
            Some(pos) => {
                self.book.remove(pos)?;
                writeln!(self.output, "🗑️  Grade #{pos} deleted.")?;
                self.print_all()
            }
            None => {
                writeln!(self.output, "Deletion cancelled.")?;
                Ok(())
            }
        }
    }

    fn print_all(&mut self) -> AppResult<()> {
        write!(self.output, "{}", render::grade_rows(self.book.list()))?;
        write!(self.output, "{}", render::grade_stats(self.book.stats().as_ref()))?;
        Ok(())
    }

    fn print_help(&mut self) -> AppResult<()> {
        let subjects: Vec<&str> = Subject::ALL.iter().map(|s| s.label()).collect();
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  add <name> | <subject> | <grade>   record a grade (0-100)")?;
        writeln!(self.output, "  del <n>                            delete grade #n")?;
        writeln!(self.output, "  list                               show all grades")?;
        writeln!(self.output, "  stats                              show statistics")?;
        writeln!(self.output, "  quit                               end the session")?;
        writeln!(self.output, "Subjects: {}", subjects.join(", "))?;
        Ok(())
    }
}
