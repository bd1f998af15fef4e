//! Symptom checker: a four-question wizard and its severity assessment.

use crate::i18n::MessageKey;
use crate::wizard::{Answers, Field, Step, Wizard, WizardError};
use serde::Serialize;
use std::fmt;

pub const CONCERN: &str = "concern";
pub const DURATION: &str = "duration";
pub const SEVERITY: &str = "severity";
pub const ADDITIONAL: &str = "additional";

pub const SEVERITY_MILD: &str = "Mild (doesn't interfere with daily activities)";
pub const SEVERITY_MODERATE: &str = "Moderate (some difficulty with activities)";
pub const SEVERITY_SEVERE: &str = "Severe (unable to do normal activities)";

pub const CONCERNS: [&str; 6] = [
    "Fever",
    "Headache",
    "Stomach pain",
    "Cough",
    "Body ache",
    "Skin problem",
];

pub const DURATIONS: [&str; 4] = ["Less than 1 day", "1-3 days", "4-7 days", "More than 1 week"];

pub const ADDITIONAL_SYMPTOMS: [&str; 5] = [
    "Nausea/Vomiting",
    "Dizziness",
    "Loss of appetite",
    "Difficulty sleeping",
    "None of these",
];

/// Shown with the mild tier only.
pub const HOME_CARE_TIPS: [&str; 5] = [
    "Rest and adequate sleep",
    "Stay hydrated with water and fluids",
    "Monitor temperature if feverish",
    "Avoid strenuous activities",
    "Seek medical attention if symptoms worsen",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Mild,
    Moderate,
    Urgent,
}

impl SeverityTier {
    /// Tier for a severity answer. Anything unrecognised, or no answer, is mild.
    pub fn from_answer(severity: Option<&str>) -> Self {
        match severity {
            Some(SEVERITY_SEVERE) => SeverityTier::Urgent,
            Some(SEVERITY_MODERATE) => SeverityTier::Moderate,
            _ => SeverityTier::Mild,
        }
    }

    pub fn action(self) -> RecommendedAction {
        match self {
            SeverityTier::Urgent => RecommendedAction::EmergencyConsultation,
            SeverityTier::Moderate => RecommendedAction::Consultation,
            SeverityTier::Mild => RecommendedAction::HomeRemedies,
        }
    }

    pub fn title_key(self) -> MessageKey {
        match self {
            SeverityTier::Urgent => MessageKey::SymptomUrgentTitle,
            SeverityTier::Moderate => MessageKey::SymptomModerateTitle,
            SeverityTier::Mild => MessageKey::SymptomMildTitle,
        }
    }

    pub fn description_key(self) -> MessageKey {
        match self {
            SeverityTier::Urgent => MessageKey::SymptomUrgentDescription,
            SeverityTier::Moderate => MessageKey::SymptomModerateDescription,
            SeverityTier::Mild => MessageKey::SymptomMildDescription,
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeverityTier::Mild => "mild",
            SeverityTier::Moderate => "moderate",
            SeverityTier::Urgent => "urgent",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    EmergencyConsultation,
    Consultation,
    HomeRemedies,
}

impl RecommendedAction {
    pub fn label_key(self) -> MessageKey {
        match self {
            RecommendedAction::EmergencyConsultation => MessageKey::SymptomActionEmergency,
            RecommendedAction::Consultation => MessageKey::SymptomActionConsultation,
            RecommendedAction::HomeRemedies => MessageKey::SymptomActionHomeRemedies,
        }
    }

    /// Whether the action leads to the booking flow.
    pub fn books_consultation(self) -> bool {
        !matches!(self, RecommendedAction::HomeRemedies)
    }
}

/// Result of a completed symptom check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub tier: SeverityTier,
    pub action: RecommendedAction,
    pub main_concern: Option<String>,
    pub duration: Option<String>,
    pub additional_symptoms: Vec<String>,

    /// Populated for the mild tier
    pub home_care_tips: Vec<&'static str>,

    /// Set for the urgent tier; points at the 108 warning
    pub emergency_warning: Option<MessageKey>,
}

/// Derive the assessment from whatever has been answered.
///
/// Total: every combination of answers, including none, yields exactly one tier.
pub fn assess(answers: &Answers) -> Assessment {
    let tier = SeverityTier::from_answer(answers.choice(SEVERITY));

    let home_care_tips = if tier == SeverityTier::Mild {
        HOME_CARE_TIPS.to_vec()
    } else {
        Vec::new()
    };
    let emergency_warning =
        (tier == SeverityTier::Urgent).then_some(MessageKey::SymptomUrgentWarning);

    Assessment {
        tier,
        action: tier.action(),
        main_concern: answers.choice(CONCERN).map(str::to_string),
        duration: answers.choice(DURATION).map(str::to_string),
        additional_symptoms: answers
            .selected(ADDITIONAL)
            .into_iter()
            .map(str::to_string)
            .collect(),
        home_care_tips,
        emergency_warning,
    }
}

/// The four questions, in order.
pub fn steps() -> Vec<Step> {
    vec![
        Step::new(CONCERN, "What is your main health concern today?")
            .with_field(Field::single(CONCERN, "Main concern", CONCERNS)),
        Step::new(DURATION, "How long have you been experiencing this symptom?")
            .with_field(Field::single(DURATION, "Duration", DURATIONS)),
        Step::new(SEVERITY, "How severe is your symptom?").with_field(Field::single(
            SEVERITY,
            "Severity",
            [SEVERITY_MILD, SEVERITY_MODERATE, SEVERITY_SEVERE],
        )),
        Step::new(ADDITIONAL, "Do you have any of these additional symptoms?")
            .with_field(Field::multi(ADDITIONAL, "Additional symptoms", ADDITIONAL_SYMPTOMS)),
    ]
}

/// Symptom questionnaire with its assessment.
#[derive(Debug, Clone)]
pub struct SymptomChecker {
    wizard: Wizard,
}

impl SymptomChecker {
    pub fn new() -> Result<Self, WizardError> {
        Ok(Self {
            wizard: Wizard::new("symptom-checker", steps())?,
        })
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// The assessment, once every question has been answered.
    pub fn assessment(&self) -> Option<Assessment> {
        self.wizard
            .is_completed()
            .then(|| assess(self.wizard.answers()))
    }
}
