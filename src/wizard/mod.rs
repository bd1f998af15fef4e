//! Linear multi-step questionnaires.
//!
//! A [`Wizard`] walks an ordered list of [`Step`]s, collecting [`Answers`]
//! and refusing to move forward until the current step is answered. The
//! symptom checker and the booking flow are both built on it.

mod answers;
mod machine;
mod step;

pub use answers::{Answer, Answers};
pub use machine::{Phase, Progress, Transition, Wizard, WizardError};
pub use step::{ChoiceOption, Field, FieldKind, Step};
