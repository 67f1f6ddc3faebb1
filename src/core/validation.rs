//! Pure form validation: raw strings in, typed records or a reason out.

use crate::errors::ValidationError;
use crate::models::contact::ContactDraft;
use crate::models::grade::{GradeEntry, Subject};

pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 100.0;

pub fn validate_grade(
    student_name: &str,
    subject: Option<&str>,
    grade: &str,
) -> Result<GradeEntry, ValidationError> {
    let student_name = student_name.trim();
    if student_name.is_empty() {
        return Err(ValidationError::EmptyField("Student name"));
    }

    let subject = subject
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(Subject::from_label)
        .ok_or(ValidationError::MissingSelection("subject"))?;

    let grade = parse_grade(grade)?;

    Ok(GradeEntry {
        student_name: student_name.to_string(),
        subject,
        grade,
    })
}

fn parse_grade(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::EmptyField("Grade"));
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;

    // "nan" and "inf" parse as f64 but are not grades
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(raw.to_string()));
    }

    if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "Grade",
            min: GRADE_MIN as i64,
            max: GRADE_MAX as i64,
        });
    }

    Ok(value)
}

pub fn validate_contact(
    name: &str,
    phone: Option<&str>,
    email: Option<&str>,
) -> Result<ContactDraft, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField("Name"));
    }

    Ok(ContactDraft {
        name: name.to_string(),
        phone: non_empty(phone),
        email: non_empty(email),
    })
}

pub fn validate_city(city: &str) -> Result<String, ValidationError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(ValidationError::EmptyField("City name"));
    }
    Ok(city.to_string())
}

fn non_empty(v: Option<&str>) -> Option<String> {
    v.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
