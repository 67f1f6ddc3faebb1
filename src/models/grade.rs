use serde::Serialize;
use std::fmt;

/// Subjects offered by the grade form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subject {
    Math,
    Science,
    English,
    History,
    ComputerScience,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Math,
        Subject::Science,
        Subject::English,
        Subject::History,
        Subject::ComputerScience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::History => "History",
            Subject::ComputerScience => "Computer Science",
        }
    }

    /// Case-insensitive lookup of a subject label.
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Subject::ALL
            .into_iter()
            .find(|sub| sub.label().to_lowercase() == wanted)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display tier of a single grade row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTier {
    Top,  // >= 90
    Good, // >= 75
    Pass, // >= 60
    Fail,
}

impl GradeTier {
    pub fn of(grade: f64) -> Self {
        if grade >= 90.0 {
            GradeTier::Top
        } else if grade >= 75.0 {
            GradeTier::Good
        } else if grade >= 60.0 {
            GradeTier::Pass
        } else {
            GradeTier::Fail
        }
    }
}

/// A validated grade row. Only built through the grade validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeEntry {
    pub student_name: String,
    pub subject: Subject,
    pub grade: f64,
}

impl GradeEntry {
    pub fn tier(&self) -> GradeTier {
        GradeTier::of(self.grade)
    }
}

impl fmt::Display for GradeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: {}", self.subject, self.student_name, self.grade)
    }
}
