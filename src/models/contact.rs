use serde::Serialize;

/// A stored contact. `id` is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Validated contact fields, not yet bound to an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn phone_or_na(&self) -> &str {
        self.phone.as_deref().unwrap_or("N/A")
    }

    pub fn email_or_na(&self) -> &str {
        self.email.as_deref().unwrap_or("N/A")
    }

    /// Case-insensitive substring match on name, phone or email.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        [Some(self.name.as_str()), self.phone.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact {
            id: 1,
            name: "Ada Lovelace".into(),
            phone: Some("555-0101".into()),
            email: None,
        }
    }

    #[test]
    fn matches_name_and_phone_case_insensitive() {
        let c = sample();
        assert!(c.matches("ada"));
        assert!(c.matches("LOVE"));
        assert!(c.matches("0101"));
        assert!(!c.matches("grace"));
        assert!(c.matches("   "));
    }

    #[test]
    fn missing_fields_render_as_na() {
        let c = sample();
        assert_eq!(c.phone_or_na(), "555-0101");
        assert_eq!(c.email_or_na(), "N/A");
    }
}
