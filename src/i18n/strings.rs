//! Static translation table.
//!
//! Keys are a closed enumeration so a typo is a compile error rather than a
//! silently untranslated string. English is total over the enumeration (the
//! `match` in [`english`] is exhaustive); Hindi and Punjabi are partial and
//! return `None` for keys that have not been translated yet.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    // ==================== Navigation ====================
    NavHome,
    NavDashboard,
    NavRecords,
    NavMedications,
    NavConsultations,
    NavPharmacies,
    NavMonitoring,
    NavEmergency,
    NavChatbot,
    NavAdmin,

    // ==================== Common ====================
    CommonLoading,
    CommonSave,
    CommonCancel,
    CommonNext,
    CommonPrevious,
    CommonBookNow,
    CommonViewDetails,
    CommonEmergencyCall,

    // ==================== Dashboard ====================
    DashboardWelcome,
    DashboardUpcomingAppointment,
    DashboardNextMedication,
    DashboardHealthAlerts,
    DashboardBookConsultation,
    DashboardSymptomChecker,
    DashboardViewRecords,
    DashboardNearbyPharmacies,

    // ==================== Symptom Checker ====================
    SymptomTitle,
    SymptomSubtitle,
    SymptomQuestion1,
    SymptomUploadImage,
    SymptomAiAnalysis,
    SymptomProgress,
    SymptomGetResults,
    SymptomMultipleHint,
    SymptomResultsTitle,
    SymptomUrgentTitle,
    SymptomUrgentDescription,
    SymptomUrgentWarning,
    SymptomModerateTitle,
    SymptomModerateDescription,
    SymptomMildTitle,
    SymptomMildDescription,
    SymptomActionEmergency,
    SymptomActionConsultation,
    SymptomActionHomeRemedies,
    SymptomHomeCareTitle,
    SymptomDisclaimer,

    // ==================== Health Records ====================
    RecordsTitle,
    RecordsPrescriptions,
    RecordsLabReports,
    RecordsDoctorNotes,
    RecordsOfflineAvailable,

    // ==================== Medications ====================
    MedicationTitle,
    MedicationCurrent,
    MedicationReminders,
    MedicationRefillNeeded,

    // ==================== Consultations ====================
    ConsultationTitle,
    ConsultationAudioOnly,
    ConsultationPoorConnection,
    ConsultationJoinCall,

    // ==================== Pharmacy ====================
    PharmacyTitle,
    PharmacyInStock,
    PharmacyLowStock,
    PharmacyOutOfStock,
    PharmacyReserve,
    PharmacyPickup,
    PharmacyDelivery,

    // ==================== Monitoring ====================
    MonitoringTitle,
    MonitoringBp,
    MonitoringGlucose,
    MonitoringWeight,
    MonitoringTemperature,

    // ==================== Admin ====================
    AdminTitle,
    AdminDiseasePatterns,
    AdminMedicineShortage,
    AdminPatientLoad,
    AdminHealthCamps,

    // ==================== Chatbot ====================
    ChatbotTitle,
    ChatbotPlaceholder,
    ChatbotVoiceInput,
    ChatbotGreeting,
    ChatbotFallbackReply,

    // ==================== Booking ====================
    BookingTitle,
    BookingStepType,
    BookingStepDoctor,
    BookingStepSchedule,
    BookingStepDetails,
    BookingConfirm,
    BookingConfirmed,
    BookingSummary,

    // ==================== Map ====================
    MapNearbyTitle,
    MapVoiceSearch,
    MapNoResults,
}

impl MessageKey {
    /// Every key, in declaration order.
    pub const ALL: &'static [MessageKey] = &[
        MessageKey::NavHome,
        MessageKey::NavDashboard,
        MessageKey::NavRecords,
        MessageKey::NavMedications,
        MessageKey::NavConsultations,
        MessageKey::NavPharmacies,
        MessageKey::NavMonitoring,
        MessageKey::NavEmergency,
        MessageKey::NavChatbot,
        MessageKey::NavAdmin,
        MessageKey::CommonLoading,
        MessageKey::CommonSave,
        MessageKey::CommonCancel,
        MessageKey::CommonNext,
        MessageKey::CommonPrevious,
        MessageKey::CommonBookNow,
        MessageKey::CommonViewDetails,
        MessageKey::CommonEmergencyCall,
        MessageKey::DashboardWelcome,
        MessageKey::DashboardUpcomingAppointment,
        MessageKey::DashboardNextMedication,
        MessageKey::DashboardHealthAlerts,
        MessageKey::DashboardBookConsultation,
        MessageKey::DashboardSymptomChecker,
        MessageKey::DashboardViewRecords,
        MessageKey::DashboardNearbyPharmacies,
        MessageKey::SymptomTitle,
        MessageKey::SymptomSubtitle,
        MessageKey::SymptomQuestion1,
        MessageKey::SymptomUploadImage,
        MessageKey::SymptomAiAnalysis,
        MessageKey::SymptomProgress,
        MessageKey::SymptomGetResults,
        MessageKey::SymptomMultipleHint,
        MessageKey::SymptomResultsTitle,
        MessageKey::SymptomUrgentTitle,
        MessageKey::SymptomUrgentDescription,
        MessageKey::SymptomUrgentWarning,
        MessageKey::SymptomModerateTitle,
        MessageKey::SymptomModerateDescription,
        MessageKey::SymptomMildTitle,
        MessageKey::SymptomMildDescription,
        MessageKey::SymptomActionEmergency,
        MessageKey::SymptomActionConsultation,
        MessageKey::SymptomActionHomeRemedies,
        MessageKey::SymptomHomeCareTitle,
        MessageKey::SymptomDisclaimer,
        MessageKey::RecordsTitle,
        MessageKey::RecordsPrescriptions,
        MessageKey::RecordsLabReports,
        MessageKey::RecordsDoctorNotes,
        MessageKey::RecordsOfflineAvailable,
        MessageKey::MedicationTitle,
        MessageKey::MedicationCurrent,
        MessageKey::MedicationReminders,
        MessageKey::MedicationRefillNeeded,
        MessageKey::ConsultationTitle,
        MessageKey::ConsultationAudioOnly,
        MessageKey::ConsultationPoorConnection,
        MessageKey::ConsultationJoinCall,
        MessageKey::PharmacyTitle,
        MessageKey::PharmacyInStock,
        MessageKey::PharmacyLowStock,
        MessageKey::PharmacyOutOfStock,
        MessageKey::PharmacyReserve,
        MessageKey::PharmacyPickup,
        MessageKey::PharmacyDelivery,
        MessageKey::MonitoringTitle,
        MessageKey::MonitoringBp,
        MessageKey::MonitoringGlucose,
        MessageKey::MonitoringWeight,
        MessageKey::MonitoringTemperature,
        MessageKey::AdminTitle,
        MessageKey::AdminDiseasePatterns,
        MessageKey::AdminMedicineShortage,
        MessageKey::AdminPatientLoad,
        MessageKey::AdminHealthCamps,
        MessageKey::ChatbotTitle,
        MessageKey::ChatbotPlaceholder,
        MessageKey::ChatbotVoiceInput,
        MessageKey::ChatbotGreeting,
        MessageKey::ChatbotFallbackReply,
        MessageKey::BookingTitle,
        MessageKey::BookingStepType,
        MessageKey::BookingStepDoctor,
        MessageKey::BookingStepSchedule,
        MessageKey::BookingStepDetails,
        MessageKey::BookingConfirm,
        MessageKey::BookingConfirmed,
        MessageKey::BookingSummary,
        MessageKey::MapNearbyTitle,
        MessageKey::MapVoiceSearch,
        MessageKey::MapNoResults,
    ];

    /// Stable dotted identifier, also the last resort of the fallback chain.
    pub fn as_str(self) -> &'static str {
        use MessageKey::*;
        match self {
            NavHome => "nav.home",
            NavDashboard => "nav.dashboard",
            NavRecords => "nav.records",
            NavMedications => "nav.medications",
            NavConsultations => "nav.consultations",
            NavPharmacies => "nav.pharmacies",
            NavMonitoring => "nav.monitoring",
            NavEmergency => "nav.emergency",
            NavChatbot => "nav.chatbot",
            NavAdmin => "nav.admin",
            CommonLoading => "common.loading",
            CommonSave => "common.save",
            CommonCancel => "common.cancel",
            CommonNext => "common.next",
            CommonPrevious => "common.previous",
            CommonBookNow => "common.book_now",
            CommonViewDetails => "common.view_details",
            CommonEmergencyCall => "common.emergency_call",
            DashboardWelcome => "dashboard.welcome",
            DashboardUpcomingAppointment => "dashboard.upcoming_appointment",
            DashboardNextMedication => "dashboard.next_medication",
            DashboardHealthAlerts => "dashboard.health_alerts",
            DashboardBookConsultation => "dashboard.book_consultation",
            DashboardSymptomChecker => "dashboard.symptom_checker",
            DashboardViewRecords => "dashboard.view_records",
            DashboardNearbyPharmacies => "dashboard.nearby_pharmacies",
            SymptomTitle => "symptom.title",
            SymptomSubtitle => "symptom.subtitle",
            SymptomQuestion1 => "symptom.question_1",
            SymptomUploadImage => "symptom.upload_image",
            SymptomAiAnalysis => "symptom.ai_analysis",
            SymptomProgress => "symptom.progress",
            SymptomGetResults => "symptom.get_results",
            SymptomMultipleHint => "symptom.multiple_hint",
            SymptomResultsTitle => "symptom.results_title",
            SymptomUrgentTitle => "symptom.urgent_title",
            SymptomUrgentDescription => "symptom.urgent_description",
            SymptomUrgentWarning => "symptom.urgent_warning",
            SymptomModerateTitle => "symptom.moderate_title",
            SymptomModerateDescription => "symptom.moderate_description",
            SymptomMildTitle => "symptom.mild_title",
            SymptomMildDescription => "symptom.mild_description",
            SymptomActionEmergency => "symptom.action_emergency",
            SymptomActionConsultation => "symptom.action_consultation",
            SymptomActionHomeRemedies => "symptom.action_home_remedies",
            SymptomHomeCareTitle => "symptom.home_care_title",
            SymptomDisclaimer => "symptom.disclaimer",
            RecordsTitle => "records.title",
            RecordsPrescriptions => "records.prescriptions",
            RecordsLabReports => "records.lab_reports",
            RecordsDoctorNotes => "records.doctor_notes",
            RecordsOfflineAvailable => "records.offline_available",
            MedicationTitle => "medication.title",
            MedicationCurrent => "medication.current",
            MedicationReminders => "medication.reminders",
            MedicationRefillNeeded => "medication.refill_needed",
            ConsultationTitle => "consultation.title",
            ConsultationAudioOnly => "consultation.audio_only",
            ConsultationPoorConnection => "consultation.poor_connection",
            ConsultationJoinCall => "consultation.join_call",
            PharmacyTitle => "pharmacy.title",
            PharmacyInStock => "pharmacy.in_stock",
            PharmacyLowStock => "pharmacy.low_stock",
            PharmacyOutOfStock => "pharmacy.out_of_stock",
            PharmacyReserve => "pharmacy.reserve",
            PharmacyPickup => "pharmacy.pickup",
            PharmacyDelivery => "pharmacy.delivery",
            MonitoringTitle => "monitoring.title",
            MonitoringBp => "monitoring.bp",
            MonitoringGlucose => "monitoring.glucose",
            MonitoringWeight => "monitoring.weight",
            MonitoringTemperature => "monitoring.temperature",
            AdminTitle => "admin.title",
            AdminDiseasePatterns => "admin.disease_patterns",
            AdminMedicineShortage => "admin.medicine_shortage",
            AdminPatientLoad => "admin.patient_load",
            AdminHealthCamps => "admin.health_camps",
            ChatbotTitle => "chatbot.title",
            ChatbotPlaceholder => "chatbot.placeholder",
            ChatbotVoiceInput => "chatbot.voice_input",
            ChatbotGreeting => "chatbot.greeting",
            ChatbotFallbackReply => "chatbot.fallback_reply",
            BookingTitle => "booking.title",
            BookingStepType => "booking.step_type",
            BookingStepDoctor => "booking.step_doctor",
            BookingStepSchedule => "booking.step_schedule",
            BookingStepDetails => "booking.step_details",
            BookingConfirm => "booking.confirm",
            BookingConfirmed => "booking.confirmed",
            BookingSummary => "booking.summary",
            MapNearbyTitle => "map.nearby_title",
            MapVoiceSearch => "map.voice_search",
            MapNoResults => "map.no_results",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returned when a raw string does not name any [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message key: '{0}'")]
pub struct UnknownMessageKey(pub String);

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownMessageKey(s.to_string()))
    }
}

/// Lookup entry point over the per-language tables.
pub struct TranslationTable;

impl TranslationTable {
    /// Look up `key` for a language code.
    ///
    /// Returns `None` for unsupported codes and for keys the language has not
    /// translated. English always returns `Some`.
    pub fn lookup(code: &str, key: MessageKey) -> Option<&'static str> {
        match code {
            "en" => Some(english(key)),
            "hi" => hindi(key),
            "pa" => punjabi(key),
            _ => None,
        }
    }

    /// English text for `key`.
    pub fn english(key: MessageKey) -> &'static str {
        english(key)
    }
}

/// Substitute `{name}` placeholders in `template`.
///
/// Placeholders without a matching argument are left in place so a missing
/// argument is visible in the rendered text.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in args {
        rendered = rendered.replace(&format!("{{{}}}", name), value);
    }
    rendered
}

// ==================== English Strings ====================

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        NavHome => "Home",
        NavDashboard => "Dashboard",
        NavRecords => "Health Records",
        NavMedications => "Medications",
        NavConsultations => "Consultations",
        NavPharmacies => "Pharmacies",
        NavMonitoring => "Monitoring",
        NavEmergency => "Emergency",
        NavChatbot => "AI Assistant",
        NavAdmin => "Admin Panel",

        CommonLoading => "Loading...",
        CommonSave => "Save",
        CommonCancel => "Cancel",
        CommonNext => "Next",
        CommonPrevious => "Previous",
        CommonBookNow => "Book Now",
        CommonViewDetails => "View Details",
        CommonEmergencyCall => "Call 108 - Emergency",

        DashboardWelcome => "Welcome to Village Care",
        DashboardUpcomingAppointment => "Upcoming Appointment",
        DashboardNextMedication => "Next Medication",
        DashboardHealthAlerts => "Health Alerts",
        DashboardBookConsultation => "Book Consultation",
        DashboardSymptomChecker => "Symptom Checker",
        DashboardViewRecords => "View Records",
        DashboardNearbyPharmacies => "Nearby Pharmacies",

        SymptomTitle => "Symptom Checker",
        SymptomSubtitle => "Answer a few questions to get personalized health guidance",
        SymptomQuestion1 => "What is your main health concern today?",
        SymptomUploadImage => "Upload Photo (Optional)",
        SymptomAiAnalysis => "AI Analysis Available",
        SymptomProgress => "{current} of {total}",
        SymptomGetResults => "Get Results",
        SymptomMultipleHint => "You can select multiple options that apply to you.",
        SymptomResultsTitle => "Symptom Assessment Results",
        SymptomUrgentTitle => "Immediate Medical Attention Recommended",
        SymptomUrgentDescription => {
            "Based on your symptoms, we recommend you consult with a doctor immediately."
        }
        SymptomUrgentWarning => {
            "If this is a medical emergency, call 108 immediately or go to the nearest hospital."
        }
        SymptomModerateTitle => "Medical Consultation Recommended",
        SymptomModerateDescription => {
            "Your symptoms suggest you should see a doctor within the next day or two."
        }
        SymptomMildTitle => "Home Care with Monitoring",
        SymptomMildDescription => {
            "Your symptoms are mild. Try home remedies and monitor for changes."
        }
        SymptomActionEmergency => "Book Emergency Consultation",
        SymptomActionConsultation => "Book Consultation",
        SymptomActionHomeRemedies => "View Home Remedies",
        SymptomHomeCareTitle => "Home Care Suggestions",
        SymptomDisclaimer => {
            "This assessment is for informational purposes only and should not replace professional medical advice."
        }

        RecordsTitle => "Health Records",
        RecordsPrescriptions => "Prescriptions",
        RecordsLabReports => "Lab Reports",
        RecordsDoctorNotes => "Doctor Notes",
        RecordsOfflineAvailable => "Available Offline",

        MedicationTitle => "Medications & Reminders",
        MedicationCurrent => "Current Medications",
        MedicationReminders => "Reminders",
        MedicationRefillNeeded => "Refill Needed",

        ConsultationTitle => "Video Consultation",
        ConsultationAudioOnly => "Audio Only",
        ConsultationPoorConnection => "Poor Connection - Audio Recommended",
        ConsultationJoinCall => "Join Call",

        PharmacyTitle => "Local Pharmacies",
        PharmacyInStock => "In Stock",
        PharmacyLowStock => "Low Stock",
        PharmacyOutOfStock => "Out of Stock",
        PharmacyReserve => "Reserve",
        PharmacyPickup => "Pickup Available",
        PharmacyDelivery => "Home Delivery",

        MonitoringTitle => "Health Monitoring",
        MonitoringBp => "Blood Pressure",
        MonitoringGlucose => "Blood Glucose",
        MonitoringWeight => "Weight",
        MonitoringTemperature => "Temperature",

        AdminTitle => "Health Department Dashboard",
        AdminDiseasePatterns => "Disease Patterns",
        AdminMedicineShortage => "Medicine Shortages",
        AdminPatientLoad => "Patient Load",
        AdminHealthCamps => "Health Camps",

        ChatbotTitle => "AI Health Assistant",
        ChatbotPlaceholder => "Ask me about your health concerns...",
        ChatbotVoiceInput => "Voice Input",
        ChatbotGreeting => {
            "Hello! I'm your AI health assistant. I can help you with health concerns, symptoms, and medical questions."
        }
        ChatbotFallbackReply => {
            "Based on your symptoms, I recommend monitoring your condition closely. If symptoms persist or worsen, please consult a doctor."
        }

        BookingTitle => "Book Appointment",
        BookingStepType => "Choose Consultation Type",
        BookingStepDoctor => "Select Doctor",
        BookingStepSchedule => "Choose Date & Time",
        BookingStepDetails => "Consultation Details",
        BookingConfirm => "Confirm Booking",
        BookingConfirmed => "Appointment Confirmed!",
        BookingSummary => "{doctor} on {date} at {time}",

        MapNearbyTitle => "Healthcare Services Near You",
        MapVoiceSearch => "Voice Search",
        MapNoResults => "No services match your search",
    }
}

// ==================== Hindi Strings ====================

fn hindi(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;
    let text = match key {
        NavHome => "होम",
        NavDashboard => "डैशबोर्ड",
        NavRecords => "स्वास्थ्य रिकॉर्ड",
        NavMedications => "दवाईयां",
        NavConsultations => "परामर्श",
        NavPharmacies => "दवाखाना",
        NavMonitoring => "निगरानी",
        NavEmergency => "आपातकाल",
        NavChatbot => "AI सहायक",
        NavAdmin => "एडमिन पैनल",

        CommonLoading => "लोड हो रहा है...",
        CommonSave => "सहेजें",
        CommonCancel => "रद्द करें",
        CommonNext => "अगला",
        CommonPrevious => "पिछला",
        CommonBookNow => "अभी बुक करें",
        CommonViewDetails => "विवरण देखें",
        CommonEmergencyCall => "108 पर कॉल करें - आपातकाल",

        DashboardWelcome => "विलेज केयर में आपका स्वागत है",
        DashboardUpcomingAppointment => "आगामी अपॉइंटमेंट",
        DashboardNextMedication => "अगली दवा",
        DashboardHealthAlerts => "स्वास्थ्य अलर्ट",
        DashboardBookConsultation => "परामर्श बुक करें",
        DashboardSymptomChecker => "लक्षण जांचकर्ता",
        DashboardViewRecords => "रिकॉर्ड देखें",
        DashboardNearbyPharmacies => "नजदीकी दवाखाने",

        SymptomTitle => "लक्षण जांचकर्ता",

        ChatbotGreeting => {
            "नमस्ते! मैं आपकी स्वास्थ्य सहायक हूं। मैं आपकी स्वास्थ्य संबंधी चिंताओं में मदद कर सकती हूं।"
        }
        ChatbotFallbackReply => {
            "आपके लक्षणों के आधार पर, मैं सुझाव देता हूं कि आप अपनी स्थिति पर बारीकी से नजर रखें। यदि लक्षण बने रहते हैं या बिगड़ते हैं, तो कृपया डॉक्टर से सलाह लें।"
        }

        _ => return None,
    };
    Some(text)
}

// ==================== Punjabi Strings ====================

fn punjabi(key: MessageKey) -> Option<&'static str> {
    use MessageKey::*;
    let text = match key {
        NavHome => "ਘਰ",
        NavDashboard => "ਡੈਸ਼ਬੋਰਡ",
        NavRecords => "ਸਿਹਤ ਰਿਕਾਰਡ",
        NavMedications => "ਦਵਾਈਆਂ",
        NavConsultations => "ਸਲਾਹ",
        NavPharmacies => "ਦਵਾਈ ਦੀ ਦੁਕਾਨ",
        NavMonitoring => "ਨਿਗਰਾਨੀ",
        NavEmergency => "ਐਮਰਜੈਂਸੀ",
        NavChatbot => "AI ਸਹਾਇਕ",
        NavAdmin => "ਐਡਮਿਨ ਪੈਨਲ",

        CommonLoading => "ਲੋਡ ਹੋ ਰਿਹਾ ਹੈ...",
        CommonSave => "ਸੇਵ ਕਰੋ",
        CommonCancel => "ਰੱਦ ਕਰੋ",
        CommonNext => "ਅਗਲਾ",
        CommonPrevious => "ਪਿਛਲਾ",
        CommonBookNow => "ਹੁਣੇ ਬੁੱਕ ਕਰੋ",
        CommonViewDetails => "ਵੇਰਵੇ ਵੇਖੋ",
        CommonEmergencyCall => "108 ਤੇ ਕਾਲ ਕਰੋ - ਐਮਰਜੈਂਸੀ",

        DashboardWelcome => "ਵਿਲੇਜ ਕੇਅਰ ਵਿੱਚ ਤੁਹਾਡਾ ਸਵਾਗਤ ਹੈ",
        DashboardUpcomingAppointment => "ਆਉਣ ਵਾਲੀ ਮੁਲਾਕਾਤ",
        DashboardNextMedication => "ਅਗਲੀ ਦਵਾਈ",
        DashboardHealthAlerts => "ਸਿਹਤ ਅਲਰਟ",
        DashboardBookConsultation => "ਸਲਾਹ ਬੁੱਕ ਕਰੋ",
        DashboardSymptomChecker => "ਲੱਛਣ ਜਾਂਚਕਰਤਾ",
        DashboardViewRecords => "ਰਿਕਾਰਡ ਵੇਖੋ",
        DashboardNearbyPharmacies => "ਨੇੜਲੀਆਂ ਦਵਾਈ ਦੀਆਂ ਦੁਕਾਨਾਂ",

        SymptomTitle => "ਲੱਛਣ ਜਾਂਚਕਰਤਾ",

        ChatbotGreeting => {
            "ਸਤ ਸ੍ਰੀ ਅਕਾਲ! ਮੈਂ ਤੁਹਾਡੀ ਸਿਹਤ ਸਹਾਇਕ ਹਾਂ। ਮੈਂ ਤੁਹਾਡੀਆਂ ਸਿਹਤ ਸੰਬੰਧੀ ਚਿੰਤਾਵਾਂ ਵਿੱਚ ਮਦਦ ਕਰ ਸਕਦੀ ਹਾਂ।"
        }
        ChatbotFallbackReply => {
            "ਤੁਹਾਡੇ ਲੱਛਣਾਂ ਦੇ ਆਧਾਰ 'ਤੇ, ਮੈਂ ਸਿਫਾਰਸ਼ ਕਰਦਾ ਹਾਂ ਕਿ ਤੁਸੀਂ ਆਪਣੀ ਸਥਿਤੀ ਦੀ ਨੇੜਿਓਂ ਨਿਗਰਾਨੀ ਕਰੋ। ਜੇ ਲੱਛਣ ਬਣੇ ਰਹਿੰਦੇ ਹਨ ਜਾਂ ਵਿਗੜਦੇ ਹਨ, ਤਾਂ ਕਿਰਪਾ ਕਰਕੇ ਡਾਕਟਰ ਨਾਲ ਸਲਾਹ ਕਰੋ।"
        }

        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Key Tests ====================

    #[test]
    fn test_all_keys_are_unique() {
        let unique: HashSet<_> = MessageKey::ALL.iter().collect();
        assert_eq!(unique.len(), MessageKey::ALL.len());
    }

    #[test]
    fn test_all_key_strings_are_unique() {
        let unique: HashSet<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(unique.len(), MessageKey::ALL.len());
    }

    #[test]
    fn test_key_count() {
        assert_eq!(MessageKey::ALL.len(), 93);
    }

    #[test]
    fn test_from_str_roundtrip_for_every_key() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_str().parse::<MessageKey>(), Ok(*key));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "nav.nowhere".parse::<MessageKey>().unwrap_err();
        assert_eq!(err, UnknownMessageKey("nav.nowhere".to_string()));
        assert!(err.to_string().contains("nav.nowhere"));
    }

    #[test]
    fn test_serializes_as_dotted_key() {
        let json = serde_json::to_value(MessageKey::SymptomUrgentWarning).unwrap();
        assert_eq!(json, "symptom.urgent_warning");
    }

    #[test]
    fn test_display_is_dotted_key() {
        assert_eq!(MessageKey::CommonNext.to_string(), "common.next");
    }

    // ==================== English Strings Tests ====================

    #[test]
    fn test_english_is_total_and_non_empty() {
        for key in MessageKey::ALL {
            assert!(!english(*key).is_empty(), "{} has empty English text", key);
        }
    }

    #[test]
    fn test_english_emergency_number() {
        assert!(english(MessageKey::CommonEmergencyCall).contains("108"));
        assert!(english(MessageKey::SymptomUrgentWarning).contains("108"));
    }

    // ==================== Partial Table Tests ====================

    #[test]
    fn test_hindi_navigation_translated() {
        assert_eq!(hindi(MessageKey::NavHome), Some("होम"));
        assert_eq!(hindi(MessageKey::CommonNext), Some("अगला"));
    }

    #[test]
    fn test_hindi_missing_key_is_none() {
        assert_eq!(hindi(MessageKey::PharmacyInStock), None);
    }

    #[test]
    fn test_punjabi_navigation_translated() {
        assert_eq!(punjabi(MessageKey::NavHome), Some("ਘਰ"));
        assert_eq!(punjabi(MessageKey::CommonPrevious), Some("ਪਿਛਲਾ"));
    }

    #[test]
    fn test_punjabi_missing_key_is_none() {
        assert_eq!(punjabi(MessageKey::MonitoringBp), None);
    }

    #[test]
    fn test_lookup_dispatches_by_code() {
        assert_eq!(TranslationTable::lookup("en", MessageKey::NavHome), Some("Home"));
        assert_eq!(TranslationTable::lookup("hi", MessageKey::NavHome), Some("होम"));
        assert_eq!(TranslationTable::lookup("pa", MessageKey::NavHome), Some("ਘਰ"));
        assert_eq!(TranslationTable::lookup("fr", MessageKey::NavHome), None);
    }

    // ==================== Fill Tests ====================

    #[test]
    fn test_fill_replaces_named_placeholders() {
        let rendered = fill(
            english(MessageKey::SymptomProgress),
            &[("current", "2"), ("total", "4")],
        );
        assert_eq!(rendered, "2 of 4");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders_visible() {
        let rendered = fill("{doctor} on {date}", &[("doctor", "Dr. Kaur")]);
        assert_eq!(rendered, "Dr. Kaur on {date}");
    }

    #[test]
    fn test_fill_without_placeholders_is_identity() {
        assert_eq!(fill("Save", &[("x", "y")]), "Save");
    }
}
