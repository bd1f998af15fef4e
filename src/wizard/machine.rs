//! The linear wizard state machine.
//!
//! States are `Step[0] .. Step[n-1]` followed by the terminal `Completed`
//! phase. There are no cycles and no skipping: `next` only moves forward when
//! every required field of the current step is answered.

use crate::wizard::{Answers, Field, FieldKind, Step};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("a wizard needs at least one step")]
    NoSteps,

    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("'{option}' is not an option of '{field}'")]
    UnknownOption { field: String, option: String },

    #[error("'{option}' is currently unavailable for '{field}'")]
    OptionUnavailable { field: String, option: String },

    #[error("field '{0}' does not take a selection")]
    NotAChoice(String),

    #[error("field '{0}' does not take text")]
    NotText(String),

    #[error("the wizard is already completed")]
    AlreadyCompleted,
}

/// Outcome of [`Wizard::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the step at this index
    Advanced(usize),
    /// Left the last step; the wizard is now terminal
    Completed,
    /// The current step is not answered; nothing changed
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    InProgress,
    Completed,
}

/// Position within the wizard, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// 1-based
    pub position: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    name: &'static str,
    steps: Vec<Step>,
    current: usize,
    answers: Answers,
    phase: Phase,
}

impl Wizard {
    /// Build a wizard at step 0 with no answers.
    ///
    /// Field ids must be unique across all steps.
    pub fn new(name: &'static str, steps: Vec<Step>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }

        let mut seen = HashSet::new();
        for field in steps.iter().flat_map(|s| s.fields.iter()) {
            if !seen.insert(field.id) {
                return Err(WizardError::DuplicateField(field.id.to_string()));
            }
        }

        Ok(Self {
            name,
            steps,
            current: 0,
            answers: Answers::new(),
            phase: Phase::InProgress,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn progress(&self) -> Progress {
        let total = self.steps.len();
        let position = self.current + 1;
        Progress {
            position,
            total,
            percent: (position as f64 / total as f64) * 100.0,
        }
    }

    /// Select `option` on a choice field.
    ///
    /// Single-select fields replace their selection; multi-select fields
    /// toggle membership. Rejected selections leave the state unchanged.
    pub fn select_option(&mut self, field_id: &str, option: &str) -> Result<(), WizardError> {
        self.ensure_in_progress()?;
        let field = self.find_field(field_id)?;

        let multi = match field.kind {
            FieldKind::SingleSelect(_) => false,
            FieldKind::MultiSelect(_) => true,
            FieldKind::Text => return Err(WizardError::NotAChoice(field_id.to_string())),
        };

        let choice = field.option(option).ok_or_else(|| WizardError::UnknownOption {
            field: field_id.to_string(),
            option: option.to_string(),
        })?;
        if !choice.enabled {
            return Err(WizardError::OptionUnavailable {
                field: field_id.to_string(),
                option: option.to_string(),
            });
        }

        if multi {
            self.answers.toggle_choice(field_id, option);
        } else {
            self.answers.replace_choice(field_id, option);
        }
        Ok(())
    }

    /// Store free text for a text field.
    pub fn set_text(&mut self, field_id: &str, value: &str) -> Result<(), WizardError> {
        self.ensure_in_progress()?;
        let field = self.find_field(field_id)?;

        if field.kind != FieldKind::Text {
            return Err(WizardError::NotText(field_id.to_string()));
        }
        self.answers.set_text(field_id, value);
        Ok(())
    }

    /// Whether every required field of the current step is answered.
    pub fn can_proceed(&self) -> bool {
        !self.is_completed()
            && self
                .current_step()
                .fields
                .iter()
                .filter(|f| f.required)
                .all(|f| self.answers.satisfies(f))
    }

    /// Advance one step, or complete the wizard from the last step.
    pub fn next(&mut self) -> Transition {
        if self.is_completed() {
            return Transition::Completed;
        }
        if !self.can_proceed() {
            debug!(
                "{}: step '{}' is not answered, staying put",
                self.name,
                self.current_step().id
            );
            return Transition::Blocked;
        }

        if self.is_last_step() {
            self.phase = Phase::Completed;
            debug!("{}: completed", self.name);
            Transition::Completed
        } else {
            self.current += 1;
            debug!("{}: advanced to step {}", self.name, self.current);
            Transition::Advanced(self.current)
        }
    }

    /// Go back one step. Returns `false` at the first step or once completed.
    pub fn previous(&mut self) -> bool {
        if self.is_completed() || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Back to step 0 with no answers.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.phase = Phase::InProgress;
    }

    fn find_field(&self, field_id: &str) -> Result<&Field, WizardError> {
        self.steps
            .iter()
            .find_map(|s| s.field(field_id))
            .ok_or_else(|| WizardError::UnknownField(field_id.to_string()))
    }

    fn ensure_in_progress(&self) -> Result<(), WizardError> {
        if self.is_completed() {
            Err(WizardError::AlreadyCompleted)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::ChoiceOption;

    fn sample() -> Wizard {
        Wizard::new(
            "sample",
            vec![
                Step::new("kind", "Kind").with_field(Field::single("kind", "Kind", ["a", "b"])),
                Step::new("extras", "Extras")
                    .with_field(Field::multi("extras", "Extras", ["x", "y", "z"])),
                Step::new("notes", "Notes")
                    .with_field(Field::text("summary", "Summary"))
                    .with_field(Field::text("comment", "Comment").optional())
                    .with_field(Field::single(
                        "slot",
                        "Slot",
                        vec![ChoiceOption::new("am"), ChoiceOption::disabled("pm")],
                    )),
            ],
        )
        .unwrap()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_starts_at_zero() {
        let wizard = sample();
        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.answers().is_empty());
        assert_eq!(wizard.phase(), Phase::InProgress);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Wizard::new("empty", vec![]).unwrap_err(), WizardError::NoSteps);
    }

    #[test]
    fn test_new_rejects_duplicate_fields() {
        let steps = vec![
            Step::new("one", "One").with_field(Field::text("same", "A")),
            Step::new("two", "Two").with_field(Field::text("same", "B")),
        ];
        assert_eq!(
            Wizard::new("dup", steps).unwrap_err(),
            WizardError::DuplicateField("same".to_string())
        );
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_select_unknown_field() {
        let mut wizard = sample();
        assert_eq!(
            wizard.select_option("nope", "a"),
            Err(WizardError::UnknownField("nope".to_string()))
        );
    }

    #[test]
    fn test_select_unknown_option_leaves_state() {
        let mut wizard = sample();
        let err = wizard.select_option("kind", "c").unwrap_err();
        assert!(matches!(err, WizardError::UnknownOption { .. }));
        assert!(wizard.answers().is_empty());
    }

    #[test]
    fn test_select_disabled_option_rejected() {
        let mut wizard = sample();
        let err = wizard.select_option("slot", "pm").unwrap_err();
        assert!(matches!(err, WizardError::OptionUnavailable { .. }));
        assert_eq!(wizard.answers().choice("slot"), None);
    }

    #[test]
    fn test_set_text_on_choice_field_rejected() {
        let mut wizard = sample();
        assert_eq!(
            wizard.set_text("kind", "a"),
            Err(WizardError::NotText("kind".to_string()))
        );
    }

    #[test]
    fn test_single_select_replaces() {
        let mut wizard = sample();
        wizard.select_option("kind", "a").unwrap();
        wizard.select_option("kind", "b").unwrap();
        assert_eq!(wizard.answers().selected("kind"), vec!["b"]);
    }

    #[test]
    fn test_multi_select_double_toggle_restores() {
        let mut wizard = sample();
        wizard.select_option("extras", "x").unwrap();
        let before = wizard.answers().clone();

        wizard.select_option("extras", "y").unwrap();
        wizard.select_option("extras", "y").unwrap();

        assert_eq!(wizard.answers(), &before);
    }

    // ==================== Navigation Tests ====================

    #[test]
    fn test_next_blocked_without_answer() {
        let mut wizard = sample();
        assert!(!wizard.can_proceed());
        assert_eq!(wizard.next(), Transition::Blocked);
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn test_next_advances_and_previous_returns() {
        let mut wizard = sample();
        wizard.select_option("kind", "a").unwrap();

        assert_eq!(wizard.next(), Transition::Advanced(1));
        assert!(wizard.previous());
        assert_eq!(wizard.current_index(), 0);
        assert!(!wizard.previous());
    }

    #[test]
    fn test_text_step_needs_required_non_blank() {
        let mut wizard = sample();
        wizard.select_option("kind", "a").unwrap();
        wizard.next();
        wizard.select_option("extras", "z").unwrap();
        wizard.next();

        wizard.select_option("slot", "am").unwrap();
        wizard.set_text("summary", "   ").unwrap();
        assert_eq!(wizard.next(), Transition::Blocked);

        wizard.set_text("summary", "all good").unwrap();
        assert!(wizard.can_proceed());
        assert_eq!(wizard.next(), Transition::Completed);
        assert!(wizard.is_completed());
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut wizard = Wizard::new(
            "one",
            vec![Step::new("only", "Only").with_field(Field::single("only", "Only", ["ok"]))],
        )
        .unwrap();
        wizard.select_option("only", "ok").unwrap();

        assert_eq!(wizard.next(), Transition::Completed);
        assert_eq!(wizard.next(), Transition::Completed);
        assert!(!wizard.previous());
        assert!(!wizard.can_proceed());
        assert_eq!(
            wizard.select_option("only", "ok"),
            Err(WizardError::AlreadyCompleted)
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut wizard = sample();
        wizard.select_option("kind", "a").unwrap();
        wizard.next();

        wizard.reset();

        assert_eq!(wizard.current_index(), 0);
        assert!(wizard.answers().is_empty());
        assert_eq!(wizard.phase(), Phase::InProgress);
    }

    #[test]
    fn test_progress() {
        let mut wizard = sample();
        let progress = wizard.progress();
        assert_eq!((progress.position, progress.total), (1, 3));

        wizard.select_option("kind", "b").unwrap();
        wizard.next();
        assert_eq!(wizard.progress().position, 2);
    }

    // ==================== Property Tests ====================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn double_toggle_is_identity(
                initial in proptest::sample::subsequence(vec!["x", "y", "z"], 0..=3),
                toggled in proptest::sample::select(vec!["x", "y", "z"]),
            ) {
                let mut wizard = sample();
                for value in &initial {
                    wizard.select_option("extras", value).unwrap();
                }
                let before = wizard.answers().clone();

                wizard.select_option("extras", toggled).unwrap();
                wizard.select_option("extras", toggled).unwrap();

                prop_assert_eq!(wizard.answers(), &before);
            }

            #[test]
            fn previous_never_underflows(moves in proptest::collection::vec(any::<bool>(), 0..20)) {
                let mut wizard = sample();
                wizard.select_option("kind", "a").unwrap();
                wizard.select_option("extras", "x").unwrap();

                for forward in moves {
                    if forward {
                        wizard.next();
                    } else {
                        wizard.previous();
                    }
                    prop_assert!(wizard.current_index() < wizard.steps().len());
                }
            }
        }
    }
}
