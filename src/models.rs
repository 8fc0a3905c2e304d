#![allow(clippy::cast_possible_truncation)]

use serde::{Deserialize, Serialize};

use crate::annotate::{self, Span};

/// A source string paired with the span partition produced for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct AnnotatedText {
    pub text: String,
    pub spans: Vec<Span>,
}

impl AnnotatedText {
    /// Run the annotator over `text` with the given keyword phrases.
    #[must_use]
    pub fn annotate(text: impl Into<String>, keywords: &[String]) -> Self {
        let text = text.into();
        let spans = annotate::annotate(&text, keywords);
        Self { text, spans }
    }

    /// Wrap an existing span sequence without re-annotating.
    #[must_use]
    pub const fn from_spans(text: String, spans: Vec<Span>) -> Self {
        Self { text, spans }
    }

    /// Check the partition invariants: spans are contiguous, start at
    /// 0, end at the code-point length of `text`, and concatenate back
    /// to `text`. Deserialized data may violate these; annotator output
    /// never does.
    #[must_use]
    pub fn is_partition(&self) -> bool {
        if self.text.is_empty() {
            return self.spans.is_empty();
        }
        let Some(first) = self.spans.first() else {
            return false;
        };
        let Some(last) = self.spans.last() else {
            return false;
        };
        if first.start != 0 || last.end != self.text.chars().count() as u64 {
            return false;
        }
        if self
            .spans
            .windows(2)
            .any(|pair| pair[0].end != pair[1].start)
        {
            return false;
        }
        let reconstructed: String = self.spans.iter().map(|s| s.text.as_str()).collect();
        reconstructed == self.text
    }
}

/// One position in the experience table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct ExperienceEntry {
    pub period: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Phrases emphasized inside this entry's highlight strings.
    pub keywords: Vec<String>,
    pub highlights: Vec<String>,
}

/// Kind of supplementary note attached to an education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum ExtraKind {
    Project,
    Thesis,
    Additional,
}

/// A titled note under an education entry (final project, thesis, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct EducationExtra {
    pub kind: ExtraKind,
    pub title: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct EducationEntry {
    pub period: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub keywords: Vec<String>,
    pub extras: Vec<EducationExtra>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct Language {
    pub name: String,
    pub level: String,
}

/// A headline figure shown on a project detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// A named group of technologies used by a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct TechGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// Detailed project data, looked up by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub period: String,
    pub client: Option<String>,
    pub tags: Vec<String>,
    pub summary: String,
    pub metrics: Vec<Metric>,
    pub tech_stack: Vec<TechGroup>,
}

/// The full portfolio content set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct Profile {
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
}

impl Profile {
    /// Find a project by identifier.
    #[must_use]
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Span;

    #[test]
    fn annotate_constructor_produces_partition() {
        let annotated = AnnotatedText::annotate(
            "Built ML pipelines using GCP and Docker",
            &["GCP".to_string(), "Docker".to_string()],
        );

        assert!(annotated.is_partition());
        assert_eq!(
            annotated
                .spans
                .iter()
                .filter(|s| s.is_emphasized())
                .count(),
            2
        );
    }

    #[test]
    fn empty_text_is_a_valid_partition() {
        let annotated = AnnotatedText::annotate("", &["x".to_string()]);
        assert!(annotated.spans.is_empty());
        assert!(annotated.is_partition());
    }

    #[test]
    fn gapped_spans_are_not_a_partition() {
        let annotated = AnnotatedText::from_spans(
            "hello world".to_string(),
            vec![
                Span::plain(0, 5, "hello".to_string()),
                Span::plain(6, 11, "world".to_string()),
            ],
        );

        assert!(!annotated.is_partition());
    }

    #[test]
    fn mismatched_text_is_not_a_partition() {
        let annotated = AnnotatedText::from_spans(
            "hello".to_string(),
            vec![Span::plain(0, 5, "bye__".to_string())],
        );

        assert!(!annotated.is_partition());
    }

    #[test]
    fn find_project_by_id() {
        let profile = Profile {
            experience: vec![],
            education: vec![],
            skills: vec![],
            languages: vec![],
            projects: vec![Project {
                id: "catchbase".to_string(),
                title: "Catchbase".to_string(),
                subtitle: String::new(),
                category: String::new(),
                period: String::new(),
                client: None,
                tags: vec![],
                summary: String::new(),
                metrics: vec![],
                tech_stack: vec![],
            }],
        };

        assert!(profile.find_project("catchbase").is_some());
        assert!(profile.find_project("missing").is_none());
    }
}
