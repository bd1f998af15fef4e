//! Appointment booking: type, doctor, schedule and details, then a confirmation.

use crate::i18n::{MessageKey, TranslationTable};
use crate::wizard::{ChoiceOption, Field, Step, Wizard, WizardError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::info;

pub const CONSULTATION_TYPE: &str = "consultation_type";
pub const DOCTOR: &str = "doctor";
pub const DATE: &str = "date";
pub const TIME: &str = "time";
pub const CHIEF_COMPLAINT: &str = "chief_complaint";
pub const SYMPTOMS: &str = "symptoms";
pub const DURATION: &str = "duration";
pub const SEVERITY: &str = "severity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    Video,
    Audio,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 2] = [ConsultationType::Video, ConsultationType::Audio];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsultationType::Video => "video",
            ConsultationType::Audio => "audio",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsultationType::Video => "Video Consultation",
            ConsultationType::Audio => "Audio Consultation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConsultationType::Video => {
                "Face-to-face consultation with screen sharing and visual examination"
            }
            ConsultationType::Audio => "Voice-only consultation, suitable for low bandwidth areas",
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub experience_years: u8,
    pub rating: f32,
    pub location: &'static str,
    pub available: bool,
}

pub static DOCTORS: [Doctor; 4] = [
    Doctor {
        id: "1",
        name: "Dr. Rajesh Kumar",
        specialty: "General Medicine",
        experience_years: 15,
        rating: 4.8,
        location: "Nabha Civil Hospital",
        available: true,
    },
    Doctor {
        id: "2",
        name: "Dr. Priya Sharma",
        specialty: "Pediatrics",
        experience_years: 12,
        rating: 4.9,
        location: "Nabha Civil Hospital",
        available: true,
    },
    Doctor {
        id: "3",
        name: "Dr. Amit Singh",
        specialty: "Cardiology",
        experience_years: 18,
        rating: 4.7,
        location: "Patiala Medical College",
        available: false,
    },
    Doctor {
        id: "4",
        name: "Dr. Sunita Kaur",
        specialty: "Dermatology",
        experience_years: 10,
        rating: 4.6,
        location: "Nabha Civil Hospital",
        available: true,
    },
];

pub fn find_doctor(id: &str) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|d| d.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailableDate {
    pub date: &'static str,
    pub day: &'static str,
    pub slots: u8,
}

pub static AVAILABLE_DATES: [AvailableDate; 5] = [
    AvailableDate { date: "2024-01-15", day: "Today", slots: 3 },
    AvailableDate { date: "2024-01-16", day: "Tomorrow", slots: 7 },
    AvailableDate { date: "2024-01-17", day: "Wed", slots: 5 },
    AvailableDate { date: "2024-01-18", day: "Thu", slots: 8 },
    AvailableDate { date: "2024-01-19", day: "Fri", slots: 4 },
];

pub const TIME_SLOTS: [&str; 7] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM",
];

/// Shown with every confirmation.
pub const NEXT_STEPS: [&str; 4] = [
    "You'll receive SMS confirmation with appointment details",
    "Join link will be sent 15 minutes before appointment",
    "Prepare your questions and any photos if needed",
    "For urgent issues before appointment, call 108",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("the booking is not finished yet")]
    NotCompleted,

    #[error("missing or invalid answer for '{0}'")]
    InvalidAnswer(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub consultation_type: ConsultationType,
    pub doctor: Doctor,
    pub date: &'static str,
    pub day: &'static str,
    pub time: String,
    pub chief_complaint: String,
    pub symptoms: String,
    pub duration: Option<String>,
    pub severity: Option<String>,
    pub confirmed_at: DateTime<Utc>,
}

impl BookingConfirmation {
    /// Arguments for the [`MessageKey::BookingSummary`] template.
    pub fn summary_args(&self) -> [(&'static str, &str); 3] {
        [
            ("doctor", self.doctor.name),
            ("date", self.date),
            ("time", &self.time),
        ]
    }
}

pub fn steps() -> Vec<Step> {
    let doctors = DOCTORS.iter().map(|d| {
        if d.available {
            ChoiceOption::new(d.id)
        } else {
            ChoiceOption::disabled(d.id)
        }
    });

    vec![
        Step::new(
            CONSULTATION_TYPE,
            TranslationTable::english(MessageKey::BookingStepType),
        )
        .with_field(Field::single(
            CONSULTATION_TYPE,
            "Consultation type",
            ConsultationType::ALL.map(ConsultationType::as_str),
        )),
        Step::new(DOCTOR, TranslationTable::english(MessageKey::BookingStepDoctor))
            .with_field(Field::single(DOCTOR, "Doctor", doctors.collect::<Vec<_>>())),
        Step::new(DATE, TranslationTable::english(MessageKey::BookingStepSchedule))
            .with_field(Field::single(DATE, "Date", AVAILABLE_DATES.map(|d| d.date)))
            .with_field(Field::single(TIME, "Time", TIME_SLOTS)),
        Step::new(CHIEF_COMPLAINT, TranslationTable::english(MessageKey::BookingStepDetails))
            .with_field(Field::text(CHIEF_COMPLAINT, "Chief Complaint"))
            .with_field(Field::text(SYMPTOMS, "Symptoms"))
            .with_field(Field::text(DURATION, "Duration").optional())
            .with_field(Field::text(SEVERITY, "Severity").optional()),
    ]
}

/// The booking flow.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    wizard: Wizard,
}

impl BookingWizard {
    pub fn new() -> Result<Self, WizardError> {
        Ok(Self {
            wizard: Wizard::new("booking", steps())?,
        })
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// Build the confirmation for a completed booking.
    pub fn confirm(&self) -> Result<BookingConfirmation, BookingError> {
        if !self.wizard.is_completed() {
            return Err(BookingError::NotCompleted);
        }
        let answers = self.wizard.answers();

        let consultation_type = answers
            .choice(CONSULTATION_TYPE)
            .and_then(ConsultationType::from_value)
            .ok_or(BookingError::InvalidAnswer(CONSULTATION_TYPE))?;
        let doctor = answers
            .choice(DOCTOR)
            .and_then(find_doctor)
            .ok_or(BookingError::InvalidAnswer(DOCTOR))?;
        let date = answers
            .choice(DATE)
            .and_then(|value| AVAILABLE_DATES.iter().find(|d| d.date == value))
            .ok_or(BookingError::InvalidAnswer(DATE))?;
        let time = answers
            .choice(TIME)
            .ok_or(BookingError::InvalidAnswer(TIME))?;

        let required_text = |field: &'static str| {
            answers
                .text(field)
                .map(|t| t.trim().to_string())
                .ok_or(BookingError::InvalidAnswer(field))
        };
        let optional_text = |field: &str| {
            answers
                .text(field)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        };

        let confirmation = BookingConfirmation {
            consultation_type,
            doctor: doctor.clone(),
            date: date.date,
            day: date.day,
            time: time.to_string(),
            chief_complaint: required_text(CHIEF_COMPLAINT)?,
            symptoms: required_text(SYMPTOMS)?,
            duration: optional_text(DURATION),
            severity: optional_text(SEVERITY),
            confirmed_at: Utc::now(),
        };

        info!(
            "Booked {} with {} on {} at {}",
            confirmation.consultation_type,
            confirmation.doctor.name,
            confirmation.date,
            confirmation.time
        );
        Ok(confirmation)
    }
}
