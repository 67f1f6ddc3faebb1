//! Two-state confirmation for destructive actions.
//!
//! A delete starts as `Pending(id)` and is resolved by a [`Confirm`] prompter
//! into `Confirmed(id)` or `Cancelled`. Only a confirmed id may reach the store.

use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<T> {
    Pending(T),
    Confirmed(T),
    Cancelled,
}

pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<T> Confirmation<T> {
    pub fn request(id: T) -> Self {
        Confirmation::Pending(id)
    }

    /// Ask once. Resolving an already resolved confirmation is a no-op.
    pub fn resolve(self, prompter: &mut dyn Confirm, prompt: &str) -> Self {
        match self {
            Confirmation::Pending(id) => {
                if prompter.confirm(prompt) {
                    Confirmation::Confirmed(id)
                } else {
                    Confirmation::Cancelled
                }
            }
            resolved => resolved,
        }
    }

    pub fn confirmed(self) -> Option<T> {
        match self {
            Confirmation::Confirmed(id) => Some(id),
            _ => None,
        }
    }
}

/// Reads a yes/no answer from a line-oriented input.
pub struct LineConfirm<'a, R, W> {
    pub input: &'a mut R,
    pub output: &'a mut W,
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let shown = writeln!(self.output, "⚠️  {prompt}")
            .and_then(|_| write!(self.output, "Confirm [y/N]: "))
            .and_then(|_| self.output.flush());
        if let Err(e) = shown {
            tracing::warn!(error = %e, "failed to print confirmation prompt");
        }

        let mut s = String::new();
        match self.input.read_line(&mut s) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
        }
    }
}

/// Ask a yes/no confirmation on the terminal.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        LineConfirm {
            input: &mut input,
            output: &mut output,
        }
        .confirm(prompt)
    }
}

/// Fixed answer, used for `--yes`.
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
