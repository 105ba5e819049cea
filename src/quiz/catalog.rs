//! Subject and class choices offered before a quiz starts.

use super::QuizError;
use crate::config::CatalogConfig;

/// A subject/class pair the student picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub subject: String,
    pub class_level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    subjects: Vec<String>,
    classes: Vec<u8>,
    active_subjects: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

impl Catalog {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            subjects: config.subjects.clone(),
            classes: config.classes.clone(),
            active_subjects: config.active_subjects.clone(),
        }
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn classes(&self) -> &[u8] {
        &self.classes
    }

    /// Subjects outside the active list are listed but cannot be practised yet.
    pub fn is_active(&self, subject: &str) -> bool {
        self.active_subjects
            .iter()
            .any(|s| s.eq_ignore_ascii_case(subject))
    }

    /// Validates a choice. Subject names match case-insensitively and the
    /// canonical spelling is kept.
    pub fn select(&self, subject: &str, class_level: u8) -> Result<Selection, QuizError> {
        let subject = self
            .subjects
            .iter()
            .find(|s| s.eq_ignore_ascii_case(subject.trim()))
            .ok_or_else(|| QuizError::UnknownSubject(subject.to_string()))?;

        if !self.is_active(subject) {
            return Err(QuizError::InactiveSubject(subject.clone()));
        }
        if !self.classes.contains(&class_level) {
            return Err(QuizError::UnknownClass(class_level));
        }

        Ok(Selection {
            subject: subject.clone(),
            class_level,
        })
    }
}
