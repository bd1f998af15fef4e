//! Answers accumulated while walking a wizard.

use crate::wizard::{Field, FieldKind};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Choices(BTreeSet<String>),
    Text(String),
}

/// Field id → answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<String, Answer>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Answer> {
        self.values.get(field)
    }

    /// Selected values of a choice field. Empty when nothing is selected.
    pub fn selected(&self, field: &str) -> Vec<&str> {
        match self.values.get(field) {
            Some(Answer::Choices(values)) => values.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// The single selected value of a single-select field.
    pub fn choice(&self, field: &str) -> Option<&str> {
        match self.values.get(field) {
            Some(Answer::Choices(values)) => values.iter().next().map(String::as_str),
            _ => None,
        }
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        match self.values.get(field) {
            Some(Answer::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `field` has an answer that lets its step proceed.
    pub fn satisfies(&self, field: &Field) -> bool {
        match (&field.kind, self.values.get(field.id)) {
            (FieldKind::Text, Some(Answer::Text(text))) => !text.trim().is_empty(),
            (FieldKind::Text, _) => false,
            (_, Some(Answer::Choices(set))) => !set.is_empty(),
            _ => false,
        }
    }

    /// Unchecked writes. [`Wizard`](crate::wizard::Wizard) validates fields and
    /// options before calling these; they are public so results can be derived
    /// from answers built elsewhere.
    pub fn replace_choice(&mut self, field: &str, value: &str) {
        let selection = BTreeSet::from([value.to_string()]);
        self.values.insert(field.to_string(), Answer::Choices(selection));
    }

    /// An emptied selection is removed, so the field reads as unanswered.
    pub fn toggle_choice(&mut self, field: &str, value: &str) {
        if let Some(Answer::Choices(set)) = self.values.get_mut(field) {
            if !set.remove(value) {
                set.insert(value.to_string());
            }
            if set.is_empty() {
                self.values.remove(field);
            }
            return;
        }

        let selection = BTreeSet::from([value.to_string()]);
        self.values.insert(field.to_string(), Answer::Choices(selection));
    }

    pub fn set_text(&mut self, field: &str, value: &str) {
        self.values
            .insert(field.to_string(), Answer::Text(value.to_string()));
    }

    pub(crate) fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_choice_keeps_single_value() {
        let mut answers = Answers::new();
        answers.replace_choice("concern", "Fever");
        answers.replace_choice("concern", "Cough");

        assert_eq!(answers.selected("concern"), vec!["Cough"]);
        assert_eq!(answers.choice("concern"), Some("Cough"));
    }

    #[test]
    fn test_toggle_choice_adds_and_removes() {
        let mut answers = Answers::new();
        answers.toggle_choice("additional", "Dizziness");
        answers.toggle_choice("additional", "Nausea/Vomiting");
        assert_eq!(answers.selected("additional").len(), 2);

        answers.toggle_choice("additional", "Dizziness");
        assert_eq!(answers.selected("additional"), vec!["Nausea/Vomiting"]);
    }

    #[test]
    fn test_toggle_to_empty_does_not_satisfy() {
        let field = Field::multi("additional", "Other symptoms", ["Dizziness"]);
        let mut answers = Answers::new();

        answers.toggle_choice("additional", "Dizziness");
        assert!(answers.satisfies(&field));

        answers.toggle_choice("additional", "Dizziness");
        assert!(!answers.satisfies(&field));
    }

    #[test]
    fn test_toggle_twice_from_unanswered_leaves_no_entry() {
        let mut answers = Answers::new();
        answers.toggle_choice("additional", "Dizziness");
        answers.toggle_choice("additional", "Dizziness");

        assert_eq!(answers, Answers::new());
        assert!(answers.is_empty());
        assert!(answers.get("additional").is_none());
        assert_eq!(serde_json::to_string(&answers).unwrap(), "{}");
    }

    #[test]
    fn test_text_satisfies_only_when_not_blank() {
        let field = Field::text("chief_complaint", "Chief Complaint");
        let mut answers = Answers::new();
        assert!(!answers.satisfies(&field));

        answers.set_text("chief_complaint", "   \t ");
        assert!(!answers.satisfies(&field));

        answers.set_text("chief_complaint", " fever ");
        assert!(answers.satisfies(&field));
        assert_eq!(answers.text("chief_complaint"), Some(" fever "));
    }

    #[test]
    fn test_missing_field_accessors() {
        let answers = Answers::new();
        assert!(answers.is_empty());
        assert!(answers.selected("x").is_empty());
        assert_eq!(answers.choice("x"), None);
        assert_eq!(answers.text("x"), None);
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let mut answers = Answers::new();
        answers.replace_choice("severity", "Mild");
        answers.set_text("notes", "ok");

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["severity"], serde_json::json!(["Mild"]));
        assert_eq!(json["notes"], "ok");
    }
}
