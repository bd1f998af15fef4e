//! Step and field definitions.

use serde::Serialize;

/// One selectable value of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: String,

    /// Disabled options are shown but cannot be selected
    pub enabled: bool,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            enabled: true,
        }
    }

    pub fn disabled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            enabled: false,
        }
    }
}

impl From<&str> for ChoiceOption {
    fn from(value: &str) -> Self {
        ChoiceOption::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Exactly one value at a time; selecting replaces the previous value
    SingleSelect(Vec<ChoiceOption>),
    /// Any subset; selecting toggles membership
    MultiSelect(Vec<ChoiceOption>),
    /// Free text; satisfied when non-blank after trimming
    Text,
}

/// A single input within a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Unique across the whole wizard
    pub id: &'static str,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub fn single<I, O>(id: &'static str, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<ChoiceOption>,
    {
        Self {
            id,
            label: label.into(),
            kind: FieldKind::SingleSelect(options.into_iter().map(Into::into).collect()),
            required: true,
        }
    }

    pub fn multi<I, O>(id: &'static str, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<ChoiceOption>,
    {
        Self {
            id,
            label: label.into(),
            kind: FieldKind::MultiSelect(options.into_iter().map(Into::into).collect()),
            required: true,
        }
    }

    pub fn text(id: &'static str, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            kind: FieldKind::Text,
            required: true,
        }
    }

    /// Mark the field as not needed to leave its step.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Options of a choice field; empty for text fields.
    pub fn options(&self) -> &[ChoiceOption] {
        match &self.kind {
            FieldKind::SingleSelect(options) | FieldKind::MultiSelect(options) => options,
            FieldKind::Text => &[],
        }
    }

    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options().iter().find(|o| o.value == value)
    }

    pub fn is_multi(&self) -> bool {
        matches!(self.kind, FieldKind::MultiSelect(_))
    }
}

/// An ordered group of fields shown together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: &'static str,
    pub title: String,
    pub fields: Vec<Field>,
}

impl Step {
    pub fn new(id: &'static str, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field_is_required_by_default() {
        let field = Field::single("severity", "How severe?", ["Mild", "Severe"]);
        assert!(field.required);
        assert!(!field.is_multi());
        assert_eq!(field.options().len(), 2);
    }

    #[test]
    fn test_optional_clears_required() {
        let field = Field::text("duration", "Duration").optional();
        assert!(!field.required);
        assert!(field.options().is_empty());
    }

    #[test]
    fn test_option_lookup_and_disabled() {
        let field = Field::single(
            "doctor",
            "Doctor",
            vec![ChoiceOption::new("1"), ChoiceOption::disabled("3")],
        );

        assert!(field.option("1").unwrap().enabled);
        assert!(!field.option("3").unwrap().enabled);
        assert!(field.option("9").is_none());
    }

    #[test]
    fn test_step_field_lookup() {
        let step = Step::new("schedule", "Choose Date & Time")
            .with_field(Field::single("date", "Date", ["2024-01-15"]))
            .with_field(Field::single("time", "Time", ["9:00 AM"]));

        assert_eq!(step.fields.len(), 2);
        assert!(step.field("time").is_some());
        assert!(step.field("doctor").is_none());
    }
}
