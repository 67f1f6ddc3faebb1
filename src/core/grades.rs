//! In-memory grade book for one session, plus derived statistics.

use crate::errors::{AppError, AppResult};
use crate::models::grade::GradeEntry;
use std::fmt;

#[derive(Debug, Default)]
pub struct GradeBook {
    entries: Vec<GradeEntry>,
}

/// Colour band of the statistics bar, driven by the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTier {
    Green,
    Orange,
    Red,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeStats {
    pub count: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated entry, returning its 1-based position.
    pub fn add(&mut self, entry: GradeEntry) -> usize {
        self.entries.push(entry);
        self.entries.len()
    }

    pub fn get(&self, position: usize) -> Option<&GradeEntry> {
        position
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
    }

    pub fn remove(&mut self, position: usize) -> AppResult<GradeEntry> {
        if self.get(position).is_none() {
            return Err(AppError::GradeNotFound(position));
        }
        Ok(self.entries.remove(position - 1))
    }

    pub fn list(&self) -> &[GradeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> Option<GradeStats> {
        if self.entries.is_empty() {
            return None;
        }

        let grades = self.entries.iter().map(|e| e.grade);
        let sum: f64 = grades.clone().sum();
        let highest = grades.clone().fold(f64::MIN, f64::max);
        let lowest = grades.fold(f64::MAX, f64::min);

        Some(GradeStats {
            count: self.entries.len(),
            average: sum / self.entries.len() as f64,
            highest,
            lowest,
        })
    }
}

impl GradeStats {
    /// Fraction of the bar to fill, in [0, 1].
    pub fn fill(&self) -> f64 {
        (self.average / 100.0).clamp(0.0, 1.0)
    }

    pub fn bar_tier(&self) -> BarTier {
        if self.average >= 75.0 {
            BarTier::Green
        } else if self.average >= 60.0 {
            BarTier::Orange
        } else {
            BarTier::Red
        }
    }
}

impl fmt::Display for GradeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Grades: {} | Average: {:.1} | Highest: {} | Lowest: {}",
            self.count,
            self.average,
            self.highest.trunc() as i64,
            self.lowest.trunc() as i64
        )
    }
}
